use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dealership_lib::Inventory;
use dealership_lib::settings::{load_settings, save_settings};

use crate::CliError;

/// Create a new database file and make it current.
pub(crate) fn run_init(path: PathBuf) -> Result<(), CliError> {
    Inventory::create(&path)?;
    remember(&path)?;
    log::info!(
        "{} {}",
        "Created".if_supports_color(Stdout, |t| t.green()),
        path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

/// Check that an existing database opens, then make it current.
pub(crate) fn run_use(path: PathBuf) -> Result<(), CliError> {
    let inventory = Inventory::open(&path)?;
    remember(&path)?;
    log::info!(
        "Using {} ({} cars)",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        inventory.len(),
    );
    Ok(())
}

fn remember(path: &std::path::Path) -> Result<(), CliError> {
    let path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let mut settings = load_settings();
    settings.remember(&path);
    save_settings(&settings)
        .map_err(|e| CliError::config(format!("Failed to save settings: {}", e)))
}
