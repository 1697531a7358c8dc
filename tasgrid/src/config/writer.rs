//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let table = config
        .sheets
        .table
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();

    format!(
        r#"[sheets]
; Sheet table CSV with rows: code, zone, alpha, west, east, south, north
; If empty, the bundled TASMAP 1:100,000 table is used
table = {}

[logging]
; Directory for the log file (cleared at the start of every run)
directory = {}
; Log file name
file = {}
"#,
        table,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Convert path to string, collapsing home dir to ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_string() {
        let content = to_config_string(&ConfigFile::default());

        assert!(content.contains("[sheets]"));
        assert!(content.contains("table = \n"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("file = tasgrid.log"));
    }

    #[test]
    fn test_home_collapsed_to_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("maps/sheets.csv")), "~/maps/sheets.csv");
        }
        assert_eq!(
            path_to_string(&PathBuf::from("/srv/sheets.csv")),
            "/srv/sheets.csv"
        );
    }

    #[test]
    fn test_output_parses_as_ini() {
        let mut config = ConfigFile::default();
        config.sheets.table = Some(PathBuf::from("/srv/sheets.csv"));

        let ini = ini::Ini::load_from_str(&to_config_string(&config)).unwrap();
        assert_eq!(
            ini.section(Some("sheets")).and_then(|s| s.get("table")),
            Some("/srv/sheets.csv")
        );
    }
}
