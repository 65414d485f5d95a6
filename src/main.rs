use anyhow::{anyhow, Context};
use clap::Parser;
use std::io;
use std::path::Path;

mod cli;
mod clipboard;
mod core;
mod generators;
mod logging;
mod models;
mod storage;
mod strength;
mod ui;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::clipboard::ClipboardChain;
use crate::core::config::Config;
use crate::core::Session;
use crate::generators::PasswordGenerator;

fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    if let Some(dir) = &args.data_dir {
        config.data_dir = Some(dir.clone());
    }

    logging::init(&config).context("Failed to initialize logging")?;
    log::info!("🔑 Starting Kairos password generator");
    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    let store = storage::open_store(&config).context("Failed to open storage")?;
    let generator = PasswordGenerator::new();
    log::info!("Using {} random source", generator.source_name());
    if !generator.is_secure() {
        log::warn!("Passwords will be generated without a cryptographically secure source");
    }

    let mut session = Session::load(store, generator, &config);
    let mut clipboard = ClipboardChain::system();

    let command = args.command.unwrap_or(CliCommand::Menu);
    let mut stdout = io::stdout();
    cli::handlers::dispatch(command, &mut session, &mut clipboard, &mut stdout).map_err(|e| {
        log::error!("Command failed: {}", e);
        anyhow!(e.to_string())
    })?;

    log::info!("✅ Kairos shutdown complete.");
    Ok(())
}
