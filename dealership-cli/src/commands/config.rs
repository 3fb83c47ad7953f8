use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use dealership_lib::settings::{load_settings, settings_path};

use crate::CliError;

/// Show the settings file and the database it points at.
pub(crate) fn run_config_show() -> Result<(), CliError> {
    let path = settings_path();
    let settings = load_settings();

    log::info!("{}", "Settings".if_supports_color(Stdout, |t| t.bold()));
    if path.exists() {
        log::info!(
            "  File: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  File: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    match &settings.database.current {
        Some(db) => log::info!("  Current database: {}", db.display()),
        None => log::info!(
            "  Current database: {}",
            "none".if_supports_color(Stdout, |t| t.dimmed())
        ),
    }

    if !settings.database.recent.is_empty() {
        crate::log_blank();
        log::info!("  Recent:");
        for recent in &settings.database.recent {
            log::info!("    {}  ({})", recent.path.display(), recent.last_opened);
        }
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
