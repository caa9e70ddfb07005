use std::path::PathBuf;

use shared::RecordError;
use thiserror::Error;

/// Failure to obtain the notification payload. Every variant is handled the
/// same way by the loader: log, show the error message, continue empty.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("error loading data: {status} {reason}")]
    Status { status: u16, reason: String },
    #[error("malformed notifications payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("notification source unavailable: {0}")]
    Unavailable(String),
}

/// Structural problems with the presentation surface. These are logged and
/// the operation is dropped; they never reach the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("missing mount point {selector}")]
    MissingMount { selector: String },
    #[error("no rendered item with id {id}")]
    UnknownItem { id: String },
}

#[derive(Debug, Error)]
pub enum MountError {
    #[error(transparent)]
    Record(#[from] RecordError),
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("invalid endpoint {value:?}: {source}")]
    InvalidEndpoint {
        value: String,
        source: url::ParseError,
    },
}
