//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Sheet table settings
    pub sheets: SheetsSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Sheet table configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SheetsSettings {
    /// Sheet table CSV to load instead of the bundled TASMAP table
    pub table: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory the log file is written to
    pub directory: PathBuf,
    /// Log file name inside `directory`
    pub file: String,
}
