use dealership_lib::InventoryError;
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// An inventory action failed
    #[error("{}: {}", .0.title(), .0)]
    Inventory(#[from] InventoryError),

    /// No --db given and none saved in settings
    #[error(
        "No database selected. Run 'car-dealership init <PATH>' or 'car-dealership use <PATH>', or pass --db."
    )]
    NoDatabase,

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
