use std::path::PathBuf;

/// Errors raised while loading captured inputs.
#[derive(Debug, thiserror::Error)]
pub enum ToolkitError {
    /// The session file could not be read.
    #[error("failed to read session file {path}: {source}")]
    Read {
        /// File that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The session file is not a valid session document.
    #[error("failed to parse session file {path}: {source}")]
    Parse {
        /// File that failed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
