use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "dhcpd-sync")]
#[command(about = "Synchronize dhcpd host reservations from an IPAM export and compare reservation files")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Run the reconciliation loop against the configured export endpoint.
    Sync(SyncArgs),
    /// Compare two reservation files and show differences.
    Compare(CompareArgs),
}

#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Path to the sync configuration TOML file.
    #[arg(short, long)]
    pub config: PathBuf,
    /// Run a single reconciliation cycle and exit.
    #[arg(long)]
    pub once: bool,
}

#[derive(Parser, Debug)]
pub struct CompareArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Print only the summary counts.
    #[arg(long)]
    pub summary: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
