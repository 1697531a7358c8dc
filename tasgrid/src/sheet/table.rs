//! Sheet table for O(1) sheet code lookup.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::parser::{ParseError, SheetCsvParser};
use super::SheetRecord;
use crate::grid::GridError;

/// Sheet table bundled with the library.
const TASMAP_TABLE: &str = include_str!("../../data/tasmap.csv");

/// Error type for building a sheet table.
///
/// All variants are fatal: without a usable table no reference can be
/// resolved.
#[derive(Debug, thiserror::Error)]
pub enum SheetTableError {
    #[error("Sheet table not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse sheet table: {0}")]
    Parse(#[from] ParseError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Immutable mapping from sheet code to sheet reference lines.
///
/// Built once at startup and shared read-only afterwards. The table is
/// `Send + Sync`, so it can be shared across threads by reference or `Arc`.
#[derive(Debug, Clone, Default)]
pub struct SheetTable {
    sheets: HashMap<String, SheetRecord>,
}

impl SheetTable {
    /// Create an empty sheet table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table of TASMAP 1:100,000 sheets bundled with the library.
    pub fn tasmap() -> Result<Self, SheetTableError> {
        Self::from_reader(TASMAP_TABLE.as_bytes())
    }

    /// Build a sheet table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SheetTableError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SheetTableError::NotFound(path.to_path_buf()));
        }

        tracing::debug!(path = %path.display(), "Loading sheet table");
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Build a sheet table from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SheetTableError> {
        let mut table = Self::new();
        for sheet in SheetCsvParser::parse_all(reader)? {
            table.insert(sheet);
        }

        tracing::info!(count = table.len(), "Built sheet table");

        Ok(table)
    }

    /// Insert a sheet, replacing any previous sheet with the same code.
    pub fn insert(&mut self, sheet: SheetRecord) {
        if let Some(previous) = self.sheets.insert(sheet.code.clone(), sheet) {
            tracing::warn!(sheet = %previous.code, "Duplicate sheet code, keeping the later row");
        }
    }

    /// Get a sheet by code, case-insensitive.
    ///
    /// Returns `None` if the sheet is not in the table.
    pub fn get(&self, code: &str) -> Option<&SheetRecord> {
        self.sheets.get(&code.to_ascii_uppercase())
    }

    /// Get a sheet by code, treating an absent sheet as an error.
    pub fn lookup(&self, code: &str) -> Result<&SheetRecord, GridError> {
        self.get(code)
            .ok_or_else(|| GridError::SheetNotFound(code.to_ascii_uppercase()))
    }

    /// Returns true if a sheet with this code exists.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Returns the number of sheets in the table.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Returns an iterator over all sheets, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &SheetRecord> {
        self.sheets.values()
    }

    /// Returns all sheets ordered by code.
    pub fn sorted(&self) -> Vec<&SheetRecord> {
        let mut sheets: Vec<_> = self.sheets.values().collect();
        sheets.sort_by(|a, b| a.code.cmp(&b.code));
        sheets
    }
}
