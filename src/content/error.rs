//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Failure to obtain a usable content source. Always fatal for the run.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content source not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Failed to read content source {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed content source {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
