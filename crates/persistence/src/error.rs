//! Error types raised by the config and record stores.

use std::path::PathBuf;

use thiserror::Error;

use crate::codec::CodecError;

/// Errors surfaced by every store operation.
///
/// None of these are recovered inside the crate; the caller decides whether to
/// retry, create a default, or abort.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The config mapping was never loaded, or the data root was never set.
    #[error("{0} is not initialized")]
    Uninitialized(&'static str),

    #[error("data root is already set to {}", .0.display())]
    DataRootAlreadySet(PathBuf),

    #[error("file [{}] does not exist", .0.display())]
    FileNotFound(PathBuf),

    #[error("file [{}] does not have a supported format", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("unsupported entity kind: {0}")]
    UnsupportedKind(String),

    #[error("invalid record id: {0:?}")]
    InvalidId(String),

    #[error("malformed data in {}: {source}", path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("failed to encode data for {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("config value for '{key}' has an unexpected shape: {source}")]
    ConfigValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("config file {} must contain a mapping at the top level", .0.display())]
    ConfigNotMapping(PathBuf),

    #[error("config store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
