use std::path::PathBuf;
use thiserror::Error;

/// Failure to launch or wait on an external tool.
///
/// A tool that runs and exits nonzero is NOT an error here; that outcome is
/// carried by [`crate::runner::ToolOutput::exit_code`].
#[derive(Error, Debug)]
pub enum ToolError {
    #[error("'{program}' not found. Please ensure it is installed and in your system's PATH")]
    BinaryNotFound { program: String },

    #[error("failed to run '{program}': {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl ToolError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ToolError::BinaryNotFound { .. })
    }
}

/// Reasons a find-and-check run produces no live-subdomains file.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("required tool '{program}' is missing, discovery aborted")]
    ToolMissing { program: String },

    #[error("live host probe failed: {reason}")]
    LiveProbeFailed { reason: String },

    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
