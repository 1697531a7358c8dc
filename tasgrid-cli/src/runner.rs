//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and sheet table
//! loading to reduce duplication across command handlers.

use crate::error::CliError;
use std::path::Path;
use tasgrid::config::ConfigFile;
use tasgrid::logging::{init_logging, LoggingGuard};
use tasgrid::sheet::SheetTable;
use tracing::info;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `verbose` - When true, logs at debug level unless RUST_LOG is set
    pub fn new(verbose: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        let logging_guard = init_logging(
            &config.logging.directory,
            &config.logging.file,
            verbose,
        )
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("tasgrid v{}", tasgrid::VERSION);
        info!("tasgrid CLI: {} command", command);
    }

    /// Load the sheet table.
    ///
    /// The `--table` argument takes precedence, then the configured table,
    /// then the bundled TASMAP table.
    pub fn load_table(&self, table_override: Option<&Path>) -> Result<SheetTable, CliError> {
        let path = table_override.or(self.config.sheets.table.as_deref());

        let table = match path {
            Some(path) => {
                info!(path = %path.display(), "Using sheet table file");
                SheetTable::from_path(path)?
            }
            None => SheetTable::tasmap()?,
        };

        Ok(table)
    }
}
