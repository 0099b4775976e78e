//! Closed registry of on-disk formats, keyed by file extension.
//!
//! | extension        | format |
//! |------------------|--------|
//! | `.json`          | JSON, pretty-printed with 2-space indentation |
//! | `.yml` / `.yaml` | YAML, default `serde_yaml` output |
//!
//! Adding a format means adding a variant here; there is no runtime registration.
//!
//! Decoded values are JSON documents, which have no NaN or infinity. YAML
//! `.nan`/`.inf` scalars are rejected as [`CodecError::NonFinite`] instead of
//! silently turning into `null`.

use std::ffi::OsStr;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::error::{Result, StoreError};

/// Schema-agnostic document flowing through parse and save.
pub type Document = serde_json::Value;

/// Failure inside the underlying serializer.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("non-finite number {0} has no JSON representation")]
    NonFinite(String),
}

/// Serialization format selected by file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Looks up a bare extension (no leading dot). Matching is exact and case-sensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "json" => Some(Self::Json),
            "yml" | "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Resolves the format for `path`, failing with [`StoreError::UnsupportedFormat`].
    pub fn for_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(OsStr::to_str)
            .and_then(Self::from_extension)
            .ok_or_else(|| StoreError::UnsupportedFormat(path.to_path_buf()))
    }

    /// Canonical extension written for this format.
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn decode<T: DeserializeOwned>(self, text: &str) -> std::result::Result<T, CodecError> {
        match self {
            Self::Json => Ok(serde_json::from_str(text)?),
            Self::Yaml => {
                let raw: serde_yaml::Value = serde_yaml::from_str(text)?;
                reject_non_finite(&raw)?;
                Ok(serde_yaml::from_value(raw)?)
            }
        }
    }

    pub fn encode<T: Serialize + ?Sized>(self, data: &T) -> std::result::Result<String, CodecError> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(data)?),
            Self::Yaml => Ok(serde_yaml::to_string(data)?),
        }
    }
}

fn reject_non_finite(value: &serde_yaml::Value) -> std::result::Result<(), CodecError> {
    use serde_yaml::Value;

    match value {
        Value::Number(n) if n.is_nan() || n.is_infinite() => {
            Err(CodecError::NonFinite(n.to_string()))
        }
        Value::Sequence(items) => items.iter().try_for_each(reject_non_finite),
        Value::Mapping(map) => map.iter().try_for_each(|(k, v)| {
            reject_non_finite(k)?;
            reject_non_finite(v)
        }),
        Value::Tagged(tagged) => reject_non_finite(&tagged.value),
        _ => Ok(()),
    }
}
