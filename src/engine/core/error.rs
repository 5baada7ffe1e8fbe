use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the sequencer. None of them are retried.
#[derive(Debug, Error)]
pub enum SequenceError {
    /// A setter was handed a value outside its range; state is left untouched
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation ran before the state it depends on was configured
    #[error("precondition failed: {0}")]
    Precondition(String),

    /// A source path could not be resolved or the manifest could not be written
    #[error("failed to {action} {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The encoder could not be launched or exited unsuccessfully.
    /// `diagnostic` is the tool's own output, passed through verbatim.
    #[error("{program} {}:\n{diagnostic}", describe_exit(.exit_code))]
    ExternalTool {
        program: String,
        exit_code: Option<i32>,
        diagnostic: String,
    },
}

impl SequenceError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SequenceError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

fn describe_exit(exit_code: &Option<i32>) -> String {
    match exit_code {
        Some(code) => format!("exited with code {}", code),
        None => "did not run to completion".to_string(),
    }
}
