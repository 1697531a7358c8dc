//! tasgrid CLI - Command-line interface
//!
//! This binary provides a command-line interface to the tasgrid library.

mod commands;
mod error;
mod runner;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use commands::batch::BatchArgs;
use commands::config::ConfigCommands;
use commands::distance::DistanceArgs;
use commands::resolve::ResolveArgs;
use error::CliError;
use runner::CliRunner;
use tasgrid::sheet::SheetTable;

#[derive(Parser)]
#[command(name = "tasgrid")]
#[command(version = tasgrid::VERSION)]
#[command(about = "Resolve TASMAP 1:100,000 grid references to coordinates", long_about = None)]
struct Cli {
    /// Sheet table CSV to use instead of the configured or bundled table
    #[arg(long, global = true)]
    table: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a grid reference to full UTM and latitude/longitude
    Resolve(ResolveArgs),

    /// Planar distance in metres from a grid reference to a latitude/longitude
    Distance(DistanceArgs),

    /// Resolve a CSV file of sheet,easting,northing rows
    Batch(BatchArgs),

    /// List the sheets in the sheet table
    Sheets,

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands work without logging so they can repair a broken config
        Commands::Config { command } => commands::config::run(command),
        Commands::Resolve(args) => {
            let (_runner, table) = setup("resolve", cli.table.as_deref(), cli.verbose)?;
            commands::resolve::run(args, &table)
        }
        Commands::Distance(args) => {
            let (_runner, table) = setup("distance", cli.table.as_deref(), cli.verbose)?;
            commands::distance::run(args, &table)
        }
        Commands::Batch(args) => {
            let (_runner, table) = setup("batch", cli.table.as_deref(), cli.verbose)?;
            commands::batch::run(args, &table)
        }
        Commands::Sheets => {
            let (_runner, table) = setup("sheets", cli.table.as_deref(), cli.verbose)?;
            commands::sheets::run(&table)
        }
    }
}

/// Start logging and load the sheet table for a table-backed command.
///
/// The returned runner keeps the log writer alive for the rest of the command.
fn setup(
    command: &str,
    table: Option<&Path>,
    verbose: bool,
) -> Result<(CliRunner, SheetTable), CliError> {
    let runner = CliRunner::new(verbose)?;
    runner.log_startup(command);
    let table = runner.load_table(table)?;
    Ok((runner, table))
}
