use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures from loading datasets or writing reports. The reshaping stages
/// themselves never fail.
#[derive(Debug, Error)]
pub enum KbError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse dataset {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to render JSON: {0}")]
    Render(#[from] serde_json::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
