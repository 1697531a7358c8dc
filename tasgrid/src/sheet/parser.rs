//! Parser for the delimited sheet metadata table.
//!
//! Each row holds seven columns:
//! `code, zone, alpha, west, east, south, north`.
//! Lines starting with `#` are comments and blank lines are skipped.
//!
//! Unlike a best-effort parser, any malformed row is an error: a table with a
//! bad row cannot be trusted to resolve references on the sheets it does
//! describe correctly.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::{ReferenceLine, SheetRecord};

/// Number of columns in a sheet row.
const COLUMN_COUNT: usize = 7;

/// Error type for sheet table parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid sheet row at line {line}: {message}")]
    InvalidRow { line: u64, message: String },
    #[error(
        "Sheet {sheet} at line {line}: cannot parse {field} reference line '{value}' as a positive integer"
    )]
    UnparsableSheetBoundary {
        line: u64,
        sheet: String,
        field: &'static str,
        value: String,
    },
}

/// Parser for sheet metadata rows.
pub struct SheetCsvParser;

impl SheetCsvParser {
    /// Parse sheets from a reader, yielding one result per data row.
    pub fn parse<R: Read>(reader: R) -> impl Iterator<Item = Result<SheetRecord, ParseError>> {
        ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .from_reader(reader)
            .into_records()
            .map(|result| {
                let record = result?;
                parse_record(&record)
            })
    }

    /// Parse every row, stopping at the first malformed one.
    pub fn parse_all<R: Read>(reader: R) -> Result<Vec<SheetRecord>, ParseError> {
        Self::parse(reader).collect()
    }
}

/// Convert one CSV record into a sheet.
fn parse_record(record: &StringRecord) -> Result<SheetRecord, ParseError> {
    let line = record.position().map(|p| p.line()).unwrap_or(0);

    if record.len() != COLUMN_COUNT {
        return Err(ParseError::InvalidRow {
            line,
            message: format!(
                "expected {} columns, found {}",
                COLUMN_COUNT,
                record.len()
            ),
        });
    }

    let code = &record[0];
    if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(ParseError::InvalidRow {
            line,
            message: format!("sheet code '{}' must be three letters", code),
        });
    }
    let code = code.to_ascii_uppercase();

    let zone: u8 = record[1].parse().map_err(|_| ParseError::InvalidRow {
        line,
        message: format!("zone '{}' is not an integer", &record[1]),
    })?;
    if !(1..=60).contains(&zone) {
        return Err(ParseError::InvalidRow {
            line,
            message: format!("zone {} is outside 1-60", zone),
        });
    }

    let mut alpha_chars = record[2].chars();
    let alpha = match (alpha_chars.next(), alpha_chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c.to_ascii_uppercase(),
        _ => {
            return Err(ParseError::InvalidRow {
                line,
                message: format!("alpha '{}' must be a single letter", &record[2]),
            });
        }
    };

    let boundary = |index: usize, field: &'static str| {
        ReferenceLine::parse(&record[index]).ok_or_else(|| ParseError::UnparsableSheetBoundary {
            line,
            sheet: code.clone(),
            field,
            value: record[index].to_string(),
        })
    };

    Ok(SheetRecord {
        easting_start: boundary(3, "western")?,
        easting_end: boundary(4, "eastern")?,
        northing_start: boundary(5, "southern")?,
        northing_end: boundary(6, "northern")?,
        code,
        zone,
        alpha,
    })
}
