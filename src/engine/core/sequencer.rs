use super::error::SequenceError;
use super::ffmpeg_cmd::{build_ffmpeg_args, format_ffmpeg_cmd};
use super::manifest::write_manifest;
use super::runner::{FfmpegRunner, Filesystem, LocalFs, ProcessRunner};
use super::types::{Resolution, SequenceConfig};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Turns an ordered list of still images into an ffmpeg concat job.
///
/// Configure it through the setters, then call one of
/// [`generate_manifest`](Self::generate_manifest),
/// [`build_command`](Self::build_command) or [`run`](Self::run).
/// Every operation reads the current state; there is no required order.
///
/// Not meant to be shared between threads: use one builder per job.
#[derive(Debug)]
pub struct SequenceBuilder<R = FfmpegRunner, F = LocalFs> {
    config: SequenceConfig,
    runner: R,
    fs: F,
}

impl SequenceBuilder {
    /// Builder that runs `ffmpeg` from PATH against the local disk
    pub fn new() -> Self {
        Self::with_collaborators(FfmpegRunner::default(), LocalFs)
    }
}

impl Default for SequenceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: ProcessRunner, F: Filesystem> SequenceBuilder<R, F> {
    pub fn with_collaborators(runner: R, fs: F) -> Self {
        Self {
            config: SequenceConfig::default(),
            runner,
            fs,
        }
    }

    // ========================================================================
    // Setters
    // ========================================================================

    pub fn set_manifest_path(&mut self, path: impl Into<PathBuf>) {
        self.config.manifest_path = path.into();
        debug!(path = %self.config.manifest_path.display(), "manifest path set");
    }

    /// Replace the source list wholesale
    pub fn set_source_paths<I, P>(&mut self, paths: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.source_paths = paths.into_iter().map(Into::into).collect();
        debug!(count = self.config.source_paths.len(), "source paths set");
    }

    /// Sets how long each image is shown: `1 / rate` seconds
    pub fn set_source_frame_rate(&mut self, rate: f64) -> Result<(), SequenceError> {
        check_rate("source frame rate", rate)?;
        self.config.frame_duration = Some(1.0 / rate);
        debug!(rate, frame_duration = 1.0 / rate, "source frame rate set");
        Ok(())
    }

    pub fn set_output_path(&mut self, path: impl Into<PathBuf>) {
        self.config.output_path = path.into();
        debug!(path = %self.config.output_path.display(), "output path set");
    }

    pub fn set_output_frame_rate(&mut self, rate: f64) -> Result<(), SequenceError> {
        check_rate("output frame rate", rate)?;
        self.config.output_frame_rate = rate;
        debug!(rate, "output frame rate set");
        Ok(())
    }

    /// `None` keeps the source resolution
    pub fn set_output_resolution(
        &mut self,
        resolution: Option<Resolution>,
    ) -> Result<(), SequenceError> {
        if let Some(res) = &resolution {
            if !res.is_valid() {
                return Err(SequenceError::InvalidArgument(format!(
                    "resolution {} has a zero dimension",
                    res
                )));
            }
        }
        self.config.output_resolution = resolution;
        debug!(resolution = ?self.config.output_resolution, "output resolution set");
        Ok(())
    }

    pub fn set_overwrite_existing(&mut self, overwrite: bool) {
        self.config.overwrite_existing = overwrite;
        debug!(overwrite, "overwrite flag set");
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn config(&self) -> &SequenceConfig {
        &self.config
    }

    pub fn source_paths(&self) -> &[PathBuf] {
        &self.config.source_paths
    }

    pub fn frame_duration(&self) -> Option<f64> {
        self.config.frame_duration
    }

    pub fn manifest_path(&self) -> &Path {
        &self.config.manifest_path
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    pub fn output_frame_rate(&self) -> f64 {
        self.config.output_frame_rate
    }

    pub fn output_resolution(&self) -> Option<Resolution> {
        self.config.output_resolution
    }

    pub fn overwrite_existing(&self) -> bool {
        self.config.overwrite_existing
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    // ========================================================================
    // Operations
    // ========================================================================

    /// Rewrite the manifest from scratch for the current source list.
    /// Returns the number of entries written.
    pub fn generate_manifest(&self) -> Result<usize, SequenceError> {
        let frame_duration = self.config.frame_duration.ok_or_else(|| {
            SequenceError::Precondition(
                "source frame rate must be set before generating a manifest".to_string(),
            )
        })?;

        write_manifest(
            &self.fs,
            &self.config.manifest_path,
            &self.config.source_paths,
            frame_duration,
        )
    }

    /// Encoder arguments for the current state, program name excluded.
    /// Touches neither the manifest nor the output.
    pub fn build_command(&self) -> Result<Vec<String>, SequenceError> {
        build_ffmpeg_args(&self.config)
    }

    /// The full command line, shell-quoted, ready to paste into a terminal
    pub fn format_command(&self) -> Result<String, SequenceError> {
        let args = self.build_command()?;
        format_ffmpeg_cmd(self.runner.program(), &args)
    }

    /// Write the manifest, then run the encoder and wait for it to exit
    pub fn run(&self) -> Result<(), SequenceError> {
        self.generate_manifest()?;
        let args = self.build_command()?;
        let program = self.runner.program().to_string();

        let command = format_ffmpeg_cmd(&program, &args)?;
        info!(%command, "launching encoder");

        let output = self
            .runner
            .run(&args)
            .map_err(|e| SequenceError::ExternalTool {
                program: program.clone(),
                exit_code: None,
                diagnostic: e.to_string(),
            })?;

        if !output.success {
            warn!(program = %program, exit_code = ?output.exit_code, "encoder failed");
            return Err(SequenceError::ExternalTool {
                program,
                exit_code: output.exit_code,
                diagnostic: output.stderr,
            });
        }

        info!(output = %self.config.output_path.display(), "encoder finished");
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<(), SequenceError> {
    if rate.is_finite() && rate > 0.0 {
        Ok(())
    } else {
        Err(SequenceError::InvalidArgument(format!(
            "{} must be a positive number, got {}",
            name, rate
        )))
    }
}
