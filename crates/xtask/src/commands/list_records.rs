//! List stored record ids per kind

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use persistence::{EntityKind, RecordStore};

use crate::dirs;

/// List stored record ids
#[derive(Parser)]
pub struct ListRecords {
    /// Only list this kind (player or account); lists both when omitted
    #[arg(value_name = "KIND")]
    kind: Option<EntityKind>,

    /// Custom data directory (defaults to DATA_PATH or the platform location)
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,
}

impl ListRecords {
    pub fn execute(self) -> Result<()> {
        let root = dirs::data_dir(self.data_dir);
        let store = RecordStore::new(&root);

        println!("{} {}", style("Data Root:").bold().cyan(), root.display());
        println!();

        let kinds: Vec<EntityKind> = match self.kind {
            Some(kind) => vec![kind],
            None => EntityKind::all().collect(),
        };

        for kind in kinds {
            let ids = store.list_ids(kind)?;
            println!("{} ({})", style(kind).bold().yellow(), ids.len());

            if ids.is_empty() {
                println!("  {}", style("none").dim());
            }
            for id in ids {
                println!("  {id}");
            }
            println!();
        }

        Ok(())
    }
}
