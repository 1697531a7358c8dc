//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::path::PathBuf;
use std::process;
use tasgrid::config::ConfigFileError;
use tasgrid::grid::GridError;
use tasgrid::sheet::SheetTableError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to load the sheet table
    SheetTable(SheetTableError),
    /// Failed to resolve a grid reference
    Grid(GridError),
    /// Failed to read a batch input file
    BatchInput { path: PathBuf, error: csv::Error },
    /// Failed to write results
    Output(String),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::SheetTable(SheetTableError::NotFound(_)) => {
                eprintln!();
                eprintln!("Check the 'table' setting in the [sheets] section of your config");
                eprintln!("or the path given with --table. Leave both unset to use the");
                eprintln!("bundled TASMAP sheet table.");
            }
            CliError::Grid(GridError::SheetNotFound(_)) => {
                eprintln!();
                eprintln!("Run 'tasgrid sheets' to list the known sheet codes.");
            }
            CliError::Grid(GridError::OutOfSheetRange { .. }) => {
                eprintln!();
                eprintln!("The reference does not fall on the named sheet. Check the");
                eprintln!("sheet code and that easting and northing are not swapped.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::SheetTable(e) => write!(f, "Failed to load sheet table: {}", e),
            CliError::Grid(e) => write!(f, "{}", e),
            CliError::BatchInput { path, error } => {
                write!(f, "Failed to read '{}': {}", path.display(), error)
            }
            CliError::Output(msg) => write!(f, "Failed to write output: {}", msg),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::SheetTable(e) => Some(e),
            CliError::Grid(e) => Some(e),
            CliError::BatchInput { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<SheetTableError> for CliError {
    fn from(e: SheetTableError) -> Self {
        CliError::SheetTable(e)
    }
}

impl From<GridError> for CliError {
    fn from(e: GridError) -> Self {
        CliError::Grid(e)
    }
}
