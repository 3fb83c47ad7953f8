//! car-dealership CLI
//!
//! Command-line interface for managing a car inventory stored in a SQLite
//! database file.

mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "car-dealership")]
#[command(about = "Manage a car inventory stored in a SQLite database", long_about = None)]
#[command(version)]
struct Cli {
    /// Database file (defaults to the one saved in settings)
    #[arg(short, long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Every field of a new car. Validation happens in the inventory, so values
/// are taken as text.
#[derive(Args, Clone)]
pub(crate) struct CarArgs {
    #[arg(long)]
    pub year: String,
    #[arg(long)]
    pub make: String,
    #[arg(long)]
    pub model: String,
    #[arg(long)]
    pub color: String,
    #[arg(long)]
    pub engine: String,
    #[arg(long)]
    pub transmission: String,
    #[arg(long)]
    pub price: String,
}

/// Fields to change on an existing car; omitted ones keep their value.
#[derive(Args, Clone, Default)]
pub(crate) struct CarEditArgs {
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
    #[arg(long)]
    pub engine: Option<String>,
    #[arg(long)]
    pub transmission: Option<String>,
    #[arg(long)]
    pub price: Option<String>,
    /// Mark the car as sold (true) or available (false)
    #[arg(long)]
    pub sold: Option<bool>,
}

/// Exact-match filter criteria. make, model, and color ignore case.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    #[arg(long)]
    pub year: Option<String>,
    #[arg(long)]
    pub make: Option<String>,
    #[arg(long)]
    pub model: Option<String>,
    #[arg(long)]
    pub color: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new database file and make it current
    Init {
        /// Path of the database file to create
        path: PathBuf,
    },

    /// Make an existing database file current
    Use {
        /// Path of the database file
        path: PathBuf,
    },

    /// List every car
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Add a car
    Add {
        #[command(flatten)]
        car: CarArgs,
    },

    /// Edit some or all fields of a car
    Edit {
        /// Car id
        id: i64,

        #[command(flatten)]
        fields: CarEditArgs,
    },

    /// Delete one car
    Delete {
        /// Car id
        id: i64,
    },

    /// Delete every car matching all of the given criteria
    DeleteWhere {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Inspect settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show the settings file contents
    Show,

    /// Print the settings file path
    Path,
}

fn main() -> ExitCode {
    init_logger();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { path } => commands::init::run_init(path),
        Commands::Use { path } => commands::init::run_use(path),
        Commands::List { json } => commands::list::run_list(cli.db, json),
        Commands::Add { car } => commands::edit::run_add(cli.db, car),
        Commands::Edit { id, fields } => commands::edit::run_edit(cli.db, id, fields),
        Commands::Delete { id } => commands::delete::run_delete(cli.db, id),
        Commands::DeleteWhere { filter } => commands::delete::run_delete_where(cli.db, filter),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(),
            ConfigAction::Path => commands::config::run_config_path(),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Plain output for info, level-prefixed for everything else. `RUST_LOG`
/// overrides the default `info` filter.
fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

/// Print an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
