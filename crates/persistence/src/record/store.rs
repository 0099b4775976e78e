//! File-backed entity record store.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::codec::{Document, Format};
use crate::error::{Result, StoreError};
use crate::file;
use crate::record::{EntityKind, EntityRef};

/// Loads and saves entity records as JSON files under a data root.
///
/// The data root moves from unset to set exactly once and is immutable
/// afterwards. Nothing is cached: every call goes to the filesystem, and
/// concurrent saves of the same record are not coordinated.
#[derive(Debug)]
pub struct RecordStore {
    root: OnceLock<PathBuf>,
}

impl RecordStore {
    /// Create a store whose data root is already configured.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: OnceLock::from(root.into()),
        }
    }

    /// Create a store without a data root. Path resolution fails until
    /// [`set_data_path`](Self::set_data_path) is called.
    pub fn unconfigured() -> Self {
        Self {
            root: OnceLock::new(),
        }
    }

    /// Configure the data root. Fails if it was already set.
    pub fn set_data_path(&self, root: impl Into<PathBuf>) -> Result<()> {
        self.root.set(root.into()).map_err(|_| {
            let current = self.root.get().cloned().unwrap_or_default();
            StoreError::DataRootAlreadySet(current)
        })?;

        if let Some(root) = self.data_path() {
            tracing::info!("Data root set to {}", root.display());
        }

        Ok(())
    }

    pub fn data_path(&self) -> Option<&Path> {
        self.root.get().map(PathBuf::as_path)
    }

    fn root(&self) -> Result<&Path> {
        self.data_path()
            .ok_or(StoreError::Uninitialized("data root"))
    }

    fn kind_dir(&self, kind: EntityKind) -> Result<PathBuf> {
        Ok(self.root()?.join(kind.dir_name()))
    }

    /// Get the path to a record file: `<root>/<kind>/<id>.json`.
    pub fn resolve_path(&self, kind: EntityKind, id: &str) -> Result<PathBuf> {
        let root = self.root()?;
        let entity = EntityRef::new(kind, id)?;
        Ok(root.join(entity.relative_path()))
    }

    /// Load a record. A missing record is [`StoreError::FileNotFound`], never a default.
    pub fn load(&self, kind: EntityKind, id: &str) -> Result<Document> {
        self.load_as(kind, id)
    }

    /// Load a record straight into a caller-defined schema.
    pub fn load_as<T: DeserializeOwned>(&self, kind: EntityKind, id: &str) -> Result<T> {
        let path = self.resolve_path(kind, id)?;
        let record = file::parse_file_as(&path)?;

        tracing::debug!("Loaded {}/{} from {}", kind, id, path.display());

        Ok(record)
    }

    /// Save a record as pretty JSON, creating the file (and kind directory) if absent.
    pub fn save<T: Serialize + ?Sized>(&self, kind: EntityKind, id: &str, data: &T) -> Result<()> {
        let path = self.resolve_path(kind, id)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        file::replace_file(&path, Format::Json, data)
    }

    /// [`save`](Self::save), then run `on_complete` once the record is on disk.
    pub fn save_then<T, F>(&self, kind: EntityKind, id: &str, data: &T, on_complete: F) -> Result<()>
    where
        T: Serialize + ?Sized,
        F: FnOnce(),
    {
        self.save(kind, id, data)?;
        on_complete();
        Ok(())
    }

    /// Check whether a record exists. Unresolvable references report `false`.
    pub fn exists(&self, kind: EntityKind, id: &str) -> bool {
        self.resolve_path(kind, id)
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Delete a record; returns whether it existed.
    pub fn delete(&self, kind: EntityKind, id: &str) -> Result<bool> {
        let path = self.resolve_path(kind, id)?;

        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)?;
        tracing::info!("Deleted {}/{}", kind, id);

        Ok(true)
    }

    /// List the ids stored for `kind`, sorted.
    pub fn list_ids(&self, kind: EntityKind) -> Result<Vec<String>> {
        let dir = self.kind_dir(kind)?;
        let mut ids = Vec::new();

        if !dir.exists() {
            return Ok(ids);
        }

        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.is_file()
                && let Some(filename) = path.file_name().and_then(|s| s.to_str())
                && let Some(id) = filename.strip_suffix(".json")
                && !id.is_empty()
            {
                ids.push(id.to_string());
            }
        }

        ids.sort();
        Ok(ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::Cell;
    use tempfile::TempDir;

    fn setup() -> (TempDir, RecordStore) {
        let temp_dir = TempDir::new().unwrap();
        let store = RecordStore::new(temp_dir.path());
        (temp_dir, store)
    }

    #[test]
    fn test_resolve_path() {
        let (temp, store) = setup();

        assert_eq!(
            store.resolve_path(EntityKind::Player, "bob").unwrap(),
            temp.path().join("player/bob.json")
        );
        assert_eq!(
            store.resolve_path(EntityKind::Account, "u1").unwrap(),
            temp.path().join("account/u1.json")
        );
    }

    #[test]
    fn test_resolve_path_requires_data_root() {
        let store = RecordStore::unconfigured();

        let err = store.resolve_path(EntityKind::Player, "bob").unwrap_err();
        assert!(matches!(err, StoreError::Uninitialized("data root")));

        let err = store.load(EntityKind::Player, "bob").unwrap_err();
        assert!(matches!(err, StoreError::Uninitialized(_)));

        let err = store.save(EntityKind::Player, "bob", &json!({})).unwrap_err();
        assert!(matches!(err, StoreError::Uninitialized(_)));
    }

    #[test]
    fn test_exists_without_data_root_is_false() {
        let store = RecordStore::unconfigured();
        assert!(!store.exists(EntityKind::Account, "u1"));
    }

    #[test]
    fn test_set_data_path_once() {
        let temp = TempDir::new().unwrap();
        let store = RecordStore::unconfigured();
        assert!(store.data_path().is_none());

        store.set_data_path(temp.path()).unwrap();
        assert_eq!(store.data_path(), Some(temp.path()));

        let err = store.set_data_path("/elsewhere").unwrap_err();
        assert!(matches!(err, StoreError::DataRootAlreadySet(p) if p == temp.path()));
        assert_eq!(store.data_path(), Some(temp.path()));
    }

    #[test]
    fn test_save_and_load() {
        let (_temp, store) = setup();
        let record = json!({ "name": "bob", "level": 4, "inventory": ["sword"] });

        store.save(EntityKind::Player, "bob", &record).unwrap();

        assert_eq!(store.load(EntityKind::Player, "bob").unwrap(), record);
    }

    #[test]
    fn test_save_overwrites() {
        let (_temp, store) = setup();

        store.save(EntityKind::Player, "bob", &json!({ "level": 1 })).unwrap();
        store.save(EntityKind::Player, "bob", &json!({ "level": 2 })).unwrap();

        assert_eq!(store.load(EntityKind::Player, "bob").unwrap()["level"], 2);
    }

    #[test]
    fn test_load_missing_record() {
        let (temp, store) = setup();

        let err = store.load(EntityKind::Account, "ghost").unwrap_err();
        assert!(
            matches!(err, StoreError::FileNotFound(p) if p == temp.path().join("account/ghost.json"))
        );
    }

    #[test]
    fn test_exists_tracks_save_and_delete() {
        let (_temp, store) = setup();

        assert!(!store.exists(EntityKind::Account, "testUser"));
        store
            .save(EntityKind::Account, "testUser", &json!({ "json": "data" }))
            .unwrap();
        assert!(store.exists(EntityKind::Account, "testUser"));
        assert!(!store.exists(EntityKind::Player, "testUser"));

        assert!(store.delete(EntityKind::Account, "testUser").unwrap());
        assert!(!store.exists(EntityKind::Account, "testUser"));
        assert!(!store.delete(EntityKind::Account, "testUser").unwrap());
    }

    #[test]
    fn test_save_then_runs_callback() {
        let (_temp, store) = setup();
        let called = Cell::new(false);

        store
            .save_then(EntityKind::Player, "bob", &json!({}), || called.set(true))
            .unwrap();

        assert!(called.get());
    }

    #[test]
    fn test_list_ids() {
        let (temp, store) = setup();
        assert!(store.list_ids(EntityKind::Player).unwrap().is_empty());

        store.save(EntityKind::Player, "zed", &json!({})).unwrap();
        store.save(EntityKind::Player, "amy", &json!({})).unwrap();
        store.save(EntityKind::Account, "u1", &json!({})).unwrap();
        fs::write(temp.path().join("player/notes.txt"), "ignored").unwrap();

        assert_eq!(store.list_ids(EntityKind::Player).unwrap(), vec!["amy", "zed"]);
        assert_eq!(store.list_ids(EntityKind::Account).unwrap(), vec!["u1"]);
    }

    #[test]
    fn test_load_as_typed() {
        #[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq)]
        struct Account {
            username: String,
            banned: bool,
        }

        let (_temp, store) = setup();
        let account = Account {
            username: "u1".to_string(),
            banned: false,
        };

        store.save(EntityKind::Account, "u1", &account).unwrap();

        let loaded: Account = store.load_as(EntityKind::Account, "u1").unwrap();
        assert_eq!(loaded, account);
    }

    #[test]
    fn test_load_as_wrong_shape_is_malformed() {
        #[derive(serde::Deserialize, Debug)]
        #[allow(dead_code)]
        struct Account {
            username: String,
        }

        let (_temp, store) = setup();
        store.save(EntityKind::Account, "u1", &json!([1, 2])).unwrap();

        let err = store.load_as::<Account>(EntityKind::Account, "u1").unwrap_err();
        assert!(matches!(err, StoreError::MalformedData { .. }));
    }
}
