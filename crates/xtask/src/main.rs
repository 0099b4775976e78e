//! Development tasks for the game server's data directory
//!
//! This binary provides development utilities using the cargo-xtask pattern.
//! Run with: `cargo xtask <command>`

mod commands;
mod dirs;

use anyhow::Result;
use clap::Parser;
use commands::{Inspect, ListRecords, ReadRecord};

/// Development tasks for the game server
#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Development tools for server data files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Read and inspect a player or account record
    ReadRecord(ReadRecord),

    /// List stored record ids
    ListRecords(ListRecords),

    /// Parse any JSON/YAML data file and print it
    Inspect(Inspect),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for DATA_PATH and other env vars)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::ReadRecord(cmd) => cmd.execute(),
        Command::ListRecords(cmd) => cmd.execute(),
        Command::Inspect(cmd) => cmd.execute(),
    }
}
