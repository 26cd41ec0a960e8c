use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a question set. This is the only error a user ever sees.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("could not read {}: {}", path.display(), source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed quiz data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("quiz file contains no questions")]
    Empty,
    #[error("loader stopped before reporting a result")]
    Disconnected,
}
