pub(crate) mod config;
pub(crate) mod delete;
pub(crate) mod edit;
pub(crate) mod init;
pub(crate) mod list;

use std::path::PathBuf;

use dealership_lib::Inventory;
use dealership_lib::settings::{load_settings, resolve_database_path};

use crate::CliError;

/// Open the database named by `--db`, or the one saved in settings.
pub(crate) fn open_inventory(db: Option<PathBuf>) -> Result<Inventory, CliError> {
    let settings = load_settings();
    let path = resolve_database_path(db, &settings).ok_or(CliError::NoDatabase)?;
    log::debug!("Using database {}", path.display());
    Ok(Inventory::open(&path)?)
}
