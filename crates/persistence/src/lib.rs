//! File-backed persistence for the game server.
//!
//! Two independent pieces share a small codec layer:
//! - [`config`] keeps the process configuration mapping, loaded once at startup
//! - [`record`] maps `(kind, id)` pairs to JSON documents under a data root
//!
//! Both sit on [`codec`] (extension → format) and [`file`] (parse/save primitives).
//! [`bootstrap`] wires them together from [`settings`] read out of the environment.
//!
//! Nothing here caches entity records: every load and save touches the filesystem.
pub mod bootstrap;
pub mod codec;
pub mod config;
pub mod error;
pub mod file;
pub mod record;
pub mod settings;

pub use bootstrap::{Persistence, load_config_file};
pub use codec::{CodecError, Document, Format};
pub use config::{ConfigMap, ConfigStore};
pub use error::{Result, StoreError};
pub use file::{parse_file, parse_file_as, save_file, save_file_then};
pub use record::{EntityKind, EntityRef, RecordStore};
pub use settings::StoreSettings;
