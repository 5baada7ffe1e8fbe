use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};
use std::process::{Command, Stdio};

/// What the sequencer needs back from a finished encoder process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub success: bool,
    /// `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    pub stderr: String,
}

/// Launches an external program and waits for it to exit.
pub trait ProcessRunner {
    /// Executable name or path, used for display and error reporting
    fn program(&self) -> &str;

    /// Run to completion. `Err` means the process could not be launched at all.
    fn run(&self, args: &[String]) -> io::Result<ToolOutput>;
}

/// Path resolution and whole-file writes.
pub trait Filesystem {
    /// Absolute, canonical form of `path`
    fn resolve(&self, path: &Path) -> io::Result<PathBuf>;

    /// Truncate-and-write; never appends
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;
}

/// Runs the real ffmpeg binary (or whatever `program` points at)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FfmpegRunner {
    program: String,
}

impl FfmpegRunner {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Build the command without running it
    pub fn command(&self, args: &[String]) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(args);
        cmd
    }
}

impl Default for FfmpegRunner {
    fn default() -> Self {
        Self::new("ffmpeg")
    }
}

impl ProcessRunner for FfmpegRunner {
    fn program(&self) -> &str {
        &self.program
    }

    fn run(&self, args: &[String]) -> io::Result<ToolOutput> {
        let mut cmd = self.command(args);
        // A closed stdin makes ffmpeg answer its own overwrite prompt with "no"
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::null());
        cmd.stderr(Stdio::piped());

        let output = cmd.output()?;

        Ok(ToolOutput {
            success: output.status.success(),
            exit_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// The local disk
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LocalFs;

impl Filesystem for LocalFs {
    fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
        if let Ok(resolved) = fs::canonicalize(path) {
            return Ok(resolved);
        }

        // Canonicalize the deepest ancestor that exists, then append the rest
        // lexically so `missing/../a.png` still collapses to `a.png`
        let absolute = std::path::absolute(path)?;
        for ancestor in absolute.ancestors() {
            let Ok(mut resolved) = fs::canonicalize(ancestor) else {
                continue;
            };
            let Ok(rest) = absolute.strip_prefix(ancestor) else {
                continue;
            };
            for component in rest.components() {
                match component {
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    Component::CurDir => {}
                    other => resolved.push(other),
                }
            }
            return Ok(resolved);
        }

        Ok(absolute)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        fs::write(path, contents)
    }
}
