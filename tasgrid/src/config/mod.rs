//! User configuration for tasgrid.
//!
//! Configuration lives in `~/.tasgrid/config.ini`. A missing file yields
//! defaults; the CLI can write a commented default file with `config init`.
//!
//! ```ini
//! [sheets]
//! table =
//!
//! [logging]
//! directory = ~/.tasgrid/logs
//! file = tasgrid.log
//! ```
//!
//! # Example
//!
//! ```
//! use tasgrid::config::ConfigFile;
//!
//! let config = ConfigFile::default();
//! assert!(config.sheets.table.is_none());
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_DIRECTORY_NAME, DEFAULT_LOG_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, SheetsSettings};
