//! Read and inspect entity records from the data root
//!
//! Loads `<root>/<kind>/<id>.json` through the record store and displays it.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use persistence::{Document, EntityKind, RecordStore};

use super::render;
use crate::dirs;

/// Read and inspect a record
#[derive(Parser)]
pub struct ReadRecord {
    /// Record kind (player or account)
    #[arg(value_name = "KIND")]
    kind: EntityKind,

    /// Record id (e.g., the player name)
    #[arg(value_name = "ID")]
    id: String,

    /// Custom data directory (defaults to DATA_PATH or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "summary")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Top-level fields with their value types
    Summary,
    /// Full JSON output
    Json,
    /// Full YAML output
    Yaml,
}

impl ReadRecord {
    pub fn execute(self) -> Result<()> {
        let store = RecordStore::new(dirs::data_dir(self.data_dir));

        let path = store.resolve_path(self.kind, &self.id)?;

        if !store.exists(self.kind, &self.id) {
            anyhow::bail!(
                "Record not found: {}\n\nHint: Check available ids with `cargo xtask list-records {}`",
                path.display(),
                self.kind
            );
        }

        let record = store
            .load(self.kind, &self.id)
            .with_context(|| format!("Failed to load record: {}", path.display()))?;

        println!("{} {}", style("Record File:").bold().cyan(), path.display());
        println!(
            "{} {}/{}",
            style("Record:").bold().cyan(),
            self.kind,
            self.id
        );
        println!();

        match self.format {
            OutputFormat::Summary => print_summary(&record),
            OutputFormat::Json => println!("{}", render(&record, false)?),
            OutputFormat::Yaml => print!("{}", render(&record, true)?),
        }

        Ok(())
    }
}

fn print_summary(record: &Document) {
    println!("{}", style("=== Record Summary ===").bold().green());
    println!();

    let Some(fields) = record.as_object() else {
        println!("  (not a mapping) {}", value_type(record));
        return;
    };

    println!("{}", style("Fields:").bold().yellow());
    for (key, value) in fields {
        println!("  {}: {}", key, value_type(value));
    }
    println!();
}

fn value_type(value: &Document) -> String {
    match value {
        Document::Null => "null".to_string(),
        Document::Bool(b) => format!("bool ({b})"),
        Document::Number(n) => format!("number ({n})"),
        Document::String(s) => format!("string ({} chars)", s.chars().count()),
        Document::Array(items) => format!("list ({} items)", items.len()),
        Document::Object(map) => format!("mapping ({} keys)", map.len()),
    }
}
