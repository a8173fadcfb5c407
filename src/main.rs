//! Contact Book - Main entry point
//!
//! Interactive assistant bot: reads commands from stdin, replies on stdout,
//! and keeps the address book in a JSON file between runs.

use anyhow::Result;
use contact_book::session::run_session;
use contact_book::{Config, Dispatcher, JsonFileStore};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can seed the filter
    let config = Config::from_env();

    let default_level = config
        .as_ref()
        .map(|c| c.log_level.clone())
        .unwrap_or_else(|_| "warn".to_string());

    // Initialize logging (stderr only, stdout carries replies)
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        path = %config.book_path.display(),
        window_days = config.birthday_window_days,
        "Starting contact book"
    );

    let store = JsonFileStore::new(&config.book_path);
    let dispatcher = Dispatcher::new(config.birthday_window_days);

    let stdin = io::stdin();
    run_session(&store, &dispatcher, stdin.lock(), io::stdout())?;

    info!("Contact book session closed");
    Ok(())
}
