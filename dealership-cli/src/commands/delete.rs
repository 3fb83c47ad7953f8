use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dealership_lib::{BulkDeleteOutcome, FilterCriteria};

use crate::{CliError, FilterArgs};

/// Delete one car. Succeeds if it is already gone.
pub(crate) fn run_delete(db: Option<PathBuf>, id: i64) -> Result<(), CliError> {
    let mut inventory = super::open_inventory(db)?;
    let existed = inventory.get(id).is_some();
    inventory.delete(id)?;

    if existed {
        log::info!(
            "{} car {}",
            "Removed".if_supports_color(Stdout, |t| t.green()),
            id
        );
    } else {
        log::info!(
            "{}",
            format!("Car {} was not in the database", id).if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Delete every car matching all supplied criteria.
pub(crate) fn run_delete_where(db: Option<PathBuf>, filter: FilterArgs) -> Result<(), CliError> {
    let mut inventory = super::open_inventory(db)?;
    match inventory.delete_filtered(&criteria_from_args(&filter))? {
        BulkDeleteOutcome::NoFilterSpecified => {
            log::info!("No filters applied. Please enter at least one filter criteria.");
        }
        BulkDeleteOutcome::Deleted(removed) if removed.is_empty() => {
            log::info!(
                "{}",
                "No cars matched the filter".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        BulkDeleteOutcome::Deleted(removed) => {
            for car in &removed {
                log::info!("  {} {}", car.id, car.display_name());
            }
            log::info!(
                "{} {} car(s)",
                "Removed".if_supports_color(Stdout, |t| t.green()),
                removed.len(),
            );
        }
    }
    Ok(())
}

fn criteria_from_args(filter: &FilterArgs) -> FilterCriteria {
    FilterCriteria::new(
        filter.year.as_deref().unwrap_or(""),
        filter.make.as_deref().unwrap_or(""),
        filter.model.as_deref().unwrap_or(""),
        filter.color.as_deref().unwrap_or(""),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_args_are_not_supplied() {
        assert!(criteria_from_args(&FilterArgs::default()).is_empty());

        let filter = FilterArgs {
            make: Some(" Toyota ".to_string()),
            ..Default::default()
        };
        let criteria = criteria_from_args(&filter);
        assert_eq!(criteria.make, "Toyota");
        assert!(!criteria.is_empty());
    }
}
