//! Parse any supported data file and print it
//!
//! Useful for checking that a hand-edited config or area file still parses,
//! and for converting between JSON and YAML.

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use std::path::PathBuf;

use persistence::{Format, parse_file};

use super::render;

/// Parse a JSON/YAML data file and print it
#[derive(Parser)]
pub struct Inspect {
    /// File to parse (.json, .yml or .yaml)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Output format (defaults to the input format)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let input = Format::for_path(&self.file)?;
        let doc = parse_file(&self.file)
            .with_context(|| format!("Failed to parse {}", self.file.display()))?;

        let yaml = match self.format {
            Some(OutputFormat::Yaml) => true,
            Some(OutputFormat::Json) => false,
            None => input == Format::Yaml,
        };

        eprintln!(
            "{} {} ({})",
            style("Parsed:").bold().green(),
            self.file.display(),
            input
        );

        let rendered = render(&doc, yaml)?;
        if rendered.ends_with('\n') {
            print!("{rendered}");
        } else {
            println!("{rendered}");
        }

        Ok(())
    }
}
