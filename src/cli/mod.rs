// src/cli/mod.rs
use std::path::PathBuf;

use clap::Parser;

pub mod commands;
pub mod handlers;
pub mod menu;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate random passwords and rate their strength", long_about = None)]
pub struct Args {
    /// Directory holding saved settings and history
    #[arg(long, env = "KAIROS_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Command to execute (opens the interactive menu when omitted)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}
