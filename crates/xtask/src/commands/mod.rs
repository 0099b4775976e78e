//! Command implementations for xtask
//!
//! Each command is a separate module that implements its own CLI args and execution logic.

mod inspect;
mod list_records;
mod read_record;

pub use inspect::Inspect;
pub use list_records::ListRecords;
pub use read_record::ReadRecord;

use anyhow::Result;

/// Re-emit a document as pretty JSON or YAML.
pub(crate) fn render(doc: &persistence::Document, yaml: bool) -> Result<String> {
    if yaml {
        Ok(serde_yaml::to_string(doc)?)
    } else {
        Ok(serde_json::to_string_pretty(doc)?)
    }
}
