use anyhow::Result;
use clap::Parser;

mod cli;
mod compare_cmd;
mod sync_cmd;

use cli::{Cli, Command};

fn main() -> Result<()> {
    dhcpd_sync::logging::init()?;
    let cli = Cli::parse();

    match cli.command {
        Command::Sync(args) => sync_cmd::run_sync(args),
        Command::Compare(args) => compare_cmd::run_compare(args),
    }
}
