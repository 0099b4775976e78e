//! Data directory resolution
//!
//! Follows the server's own settings first, then platform conventions.

use std::path::PathBuf;

use persistence::StoreSettings;

/// Get the data root for entity records
///
/// Resolution order:
/// 1. `--data-dir` flag
/// 2. `DATA_PATH` environment variable (also read from `.env`)
/// 3. Platform data directory:
///    - macOS: `~/Library/Application Support/mud-server`
///    - Linux: `~/.local/share/mud-server` (or `$XDG_DATA_HOME/mud-server`)
///    - Windows: `%APPDATA%\mud-server`
/// 4. Fallback: `./data`
pub fn data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| StoreSettings::from_env().data_path)
        .unwrap_or_else(platform_data_dir)
}

fn platform_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "mud-server")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}
