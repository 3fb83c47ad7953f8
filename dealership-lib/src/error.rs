use dealership_core::ValidationError;
use dealership_db::StoreError;
use thiserror::Error;

/// Errors reported at the inventory action boundary.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The database cannot be opened or read
    #[error(transparent)]
    StoreUnavailable(StoreError),

    /// Input was missing or malformed; nothing was written
    #[error("Invalid input: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// The database rejected a change
    #[error(transparent)]
    WriteError(StoreError),

    /// The target car no longer exists
    #[error("Car {0} no longer exists")]
    NotFound(i64),

    /// A bulk delete stopped partway; earlier deletions stand
    #[error("Removed {deleted} car(s) before a delete failed: {source}")]
    PartialFailure {
        deleted: usize,
        #[source]
        source: StoreError,
    },
}

impl InventoryError {
    /// Short header for an error notice.
    pub fn title(&self) -> &'static str {
        match self {
            InventoryError::StoreUnavailable(_) => "Failed to Load Cars from Database",
            InventoryError::ValidationFailed(ValidationError::EmptyField(_)) => {
                "Incomplete Fields"
            }
            InventoryError::ValidationFailed(_) => "Invalid Input",
            InventoryError::WriteError(_) => "Failed to Save Changes",
            InventoryError::NotFound(_) => "Car Not Found",
            InventoryError::PartialFailure { .. } => "Failed to Remove Cars from Database",
        }
    }
}

impl From<StoreError> for InventoryError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => InventoryError::NotFound(id),
            err if err.is_unavailable() => InventoryError::StoreUnavailable(err),
            err => InventoryError::WriteError(err),
        }
    }
}
