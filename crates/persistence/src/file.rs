//! Generic parse/save primitives for any file the codec registry recognizes.
//!
//! [`save_file`] only overwrites files that already exist. Creating new files is
//! left to [`RecordStore::save`](crate::RecordStore::save), so a typo in a config
//! path fails instead of silently producing a stray file.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{CodecError, Document, Format};
use crate::error::{Result, StoreError};

/// Read and decode a data file.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Document> {
    parse_file_as(path)
}

/// Read and decode a data file directly into `T`.
pub fn parse_file_as<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }

    let format = Format::for_path(path)?;
    let bytes = fs::read(path)?;
    let value = String::from_utf8(bytes)
        .map_err(CodecError::from)
        .and_then(|contents| format.decode(&contents))
        .map_err(|source| StoreError::MalformedData {
            path: path.to_path_buf(),
            source,
        })?;

    tracing::debug!("Parsed {} file {}", format, path.display());

    Ok(value)
}

/// Encode `data` and overwrite an existing data file.
pub fn save_file<T: Serialize + ?Sized>(path: impl AsRef<Path>, data: &T) -> Result<()> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(StoreError::FileNotFound(path.to_path_buf()));
    }

    let format = Format::for_path(path)?;
    let contents = encode_for(path, format, data)?;

    // In place, so symlinks are followed and the file mode is kept.
    fs::write(path, contents)?;

    tracing::debug!("Saved {} file {}", format, path.display());

    Ok(())
}

/// [`save_file`], then run `on_complete` once the write has succeeded.
pub fn save_file_then<T, F>(path: impl AsRef<Path>, data: &T, on_complete: F) -> Result<()>
where
    T: Serialize + ?Sized,
    F: FnOnce(),
{
    save_file(path, data)?;
    on_complete();
    Ok(())
}

/// Encode `data` and replace `path` through a sibling temp file, creating it if absent.
pub(crate) fn replace_file<T: Serialize + ?Sized>(
    path: &Path,
    format: Format,
    data: &T,
) -> Result<()> {
    let contents = encode_for(path, format, data)?;
    let temp_path = path.with_extension(format!("{}.tmp", format.extension()));

    let written = fs::write(&temp_path, contents).and_then(|()| fs::rename(&temp_path, path));
    if let Err(e) = written {
        let _ = fs::remove_file(&temp_path);
        return Err(e.into());
    }

    tracing::debug!("Saved {} file {}", format, path.display());

    Ok(())
}

fn encode_for<T: Serialize + ?Sized>(path: &Path, format: Format, data: &T) -> Result<String> {
    format.encode(data).map_err(|source| StoreError::Encode {
        path: path.to_path_buf(),
        source,
    })
}
