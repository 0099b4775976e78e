//! Startup wiring: build both stores from [`StoreSettings`].

use std::path::Path;

use crate::codec::Document;
use crate::config::ConfigStore;
use crate::error::{Result, StoreError};
use crate::file;
use crate::record::RecordStore;
use crate::settings::StoreSettings;

/// The stores a server process shares for its lifetime.
#[derive(Debug)]
pub struct Persistence {
    pub config: ConfigStore,
    pub records: RecordStore,
}

impl Persistence {
    /// Load the config file (if any) and set the data root (if any).
    ///
    /// Missing settings leave the matching store uninitialized, so the first
    /// read fails loudly instead of running on defaults.
    pub fn bootstrap(settings: &StoreSettings) -> Result<Self> {
        let config = ConfigStore::new();
        match &settings.config_file {
            Some(path) => load_config_file(&config, path)?,
            None => tracing::warn!("No config file configured; config store left uninitialized"),
        }

        let records = RecordStore::unconfigured();
        match &settings.data_path {
            Some(root) => records.set_data_path(root)?,
            None => tracing::warn!("No data path configured; record store left unconfigured"),
        }

        Ok(Self { config, records })
    }
}

/// Parse `path` and install it as the config mapping.
///
/// Any format the codec registry recognizes is accepted, but the top level
/// must be a mapping.
pub fn load_config_file(config: &ConfigStore, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    match file::parse_file(path)? {
        Document::Object(map) => {
            tracing::info!("Loading config from {}", path.display());
            config.load(map)
        }
        _ => Err(StoreError::ConfigNotMapping(path.to_path_buf())),
    }
}
