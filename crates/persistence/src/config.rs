//! Process configuration mapping, loaded once at startup and read many times.
//!
//! Reading before [`ConfigStore::load`] is an error, not a fallback: a missing
//! key in a loaded config and a config that was never loaded are different
//! failures and callers must be able to tell them apart.

use std::sync::RwLock;

use serde::de::DeserializeOwned;

use crate::codec::Document;
use crate::error::{Result, StoreError};

/// Top-level configuration mapping.
pub type ConfigMap = serde_json::Map<String, Document>;

/// Write-once, read-many config cache.
///
/// `load` replaces the whole mapping (no merging). No ordering is enforced
/// between concurrent `load`/`clear` calls; a single initializer is assumed.
#[derive(Debug, Default)]
pub struct ConfigStore {
    cache: RwLock<Option<ConfigMap>>,
}

impl ConfigStore {
    /// Create an uninitialized store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that is already loaded with `data`.
    pub fn with_config(data: ConfigMap) -> Self {
        Self {
            cache: RwLock::new(Some(data)),
        }
    }

    /// Install `data` as the current mapping, replacing any previous one.
    pub fn load(&self, data: ConfigMap) -> Result<()> {
        let mut cache = self.cache.write().map_err(|_| StoreError::LockPoisoned)?;
        tracing::info!("Loaded config with {} keys", data.len());
        *cache = Some(data);
        Ok(())
    }

    /// Reset to uninitialized.
    pub fn clear(&self) -> Result<()> {
        let mut cache = self.cache.write().map_err(|_| StoreError::LockPoisoned)?;
        *cache = None;
        tracing::info!("Cleared config");
        Ok(())
    }

    pub fn is_loaded(&self) -> Result<bool> {
        let cache = self.cache.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(cache.is_some())
    }

    fn with_cache<R>(&self, f: impl FnOnce(&ConfigMap) -> R) -> Result<R> {
        let cache = self.cache.read().map_err(|_| StoreError::LockPoisoned)?;
        let map = cache
            .as_ref()
            .ok_or(StoreError::Uninitialized("config store"))?;
        Ok(f(map))
    }

    /// Value stored at `key`, else `fallback`.
    ///
    /// Fails with [`StoreError::Uninitialized`] before `load`, whatever the fallback.
    pub fn get(&self, key: &str, fallback: Option<Document>) -> Result<Option<Document>> {
        self.with_cache(|map| map.get(key).cloned().or(fallback))
    }

    pub fn get_or(&self, key: &str, fallback: Document) -> Result<Document> {
        self.with_cache(|map| map.get(key).cloned().unwrap_or(fallback))
    }

    /// Typed lookup. A present value that does not fit `T` is a
    /// [`StoreError::ConfigValue`]; the fallback is only used for absent keys.
    pub fn get_as<T: DeserializeOwned>(&self, key: &str, fallback: Option<T>) -> Result<Option<T>> {
        let Some(value) = self.get(key, None)? else {
            return Ok(fallback);
        };

        serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::ConfigValue {
                key: key.to_string(),
                source,
            })
    }

    /// Loaded keys, sorted.
    pub fn keys(&self) -> Result<Vec<String>> {
        self.with_cache(|map| {
            let mut keys: Vec<String> = map.keys().cloned().collect();
            keys.sort();
            keys
        })
    }
}
