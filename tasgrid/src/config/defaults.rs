//! Default values for all configuration settings.
//!
//! Contains the `DEFAULT_*` constants and the `ConfigFile::default()`
//! implementation.

use super::file::config_directory;
use super::settings::*;

/// Name of the log directory inside the config directory.
pub const DEFAULT_LOG_DIRECTORY_NAME: &str = "logs";

/// Default log file name.
pub const DEFAULT_LOG_FILE: &str = "tasgrid.log";

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: config_directory().join(DEFAULT_LOG_DIRECTORY_NAME),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            sheets: SheetsSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}
