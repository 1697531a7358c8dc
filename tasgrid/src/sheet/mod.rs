//! Map sheet reference data for the TASMAP 1:100,000 series.
//!
//! Every sheet in the series is identified by a three-letter code and covers
//! a rectangle of projected (UTM) coordinates. A six-figure grid reference
//! only carries the hundreds-of-metres digits of a point, so the sheet's
//! reference lines are needed to recover the full easting and northing.
//!
//! # Data Source
//!
//! Sheet metadata is read from a delimited table with one row per sheet:
//!
//! ```text
//! code,zone,alpha,west,east,south,north
//! GOO,55,G,545,600,5545,5585
//! ```
//!
//! The four reference lines are 1000 m grid lines with their trailing three
//! digits dropped (`545` is the 545 000 m easting line).
//!
//! # Example
//!
//! ```
//! use tasgrid::sheet::SheetTable;
//!
//! let table = SheetTable::tasmap().unwrap();
//! let goose = table.get("goo").unwrap();
//! assert_eq!(goose.easting_start.metres(), 545_000);
//! ```

mod parser;
mod table;

use std::fmt;
use std::ops::RangeInclusive;

pub use parser::{ParseError, SheetCsvParser};
pub use table::{SheetTable, SheetTableError};

/// Longest reference line prefix accepted, in digits.
const MAX_REFERENCE_DIGITS: usize = 6;

/// A sheet boundary line stored as its truncated digit prefix.
///
/// The original text is kept because grid reconstruction splits on
/// characters (first digit, first two digits, last two digits) rather than on
/// numeric magnitude.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReferenceLine {
    digits: String,
    kilometres: u32,
}

impl ReferenceLine {
    /// Parse a reference line prefix.
    ///
    /// Returns `None` unless the text is 2 to 6 ASCII digits with a positive
    /// value.
    pub fn parse(text: &str) -> Option<Self> {
        let digits = text.trim();
        if !(2..=MAX_REFERENCE_DIGITS).contains(&digits.len())
            || !digits.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let kilometres: u32 = digits.parse().ok()?;
        if kilometres == 0 {
            return None;
        }

        Some(Self {
            digits: digits.to_string(),
            kilometres,
        })
    }

    /// The prefix exactly as it appeared in the table.
    pub fn as_str(&self) -> &str {
        &self.digits
    }

    /// Value of the prefix, which is the line's position in kilometres.
    pub fn kilometres(&self) -> u32 {
        self.kilometres
    }

    /// Full position of the line in metres (the prefix followed by `000`).
    pub fn metres(&self) -> u32 {
        self.kilometres * 1000
    }

    /// Integer value of the first `count` characters.
    pub fn leading(&self, count: usize) -> u32 {
        let count = count.min(self.digits.len());
        // Digits were validated in `parse`.
        self.digits[..count].parse().unwrap_or(0)
    }

    /// Integer value of the last two characters.
    ///
    /// These are the kilometres past the last 100 km line, the point at which
    /// a three-figure reference wraps around.
    pub fn carry_digits(&self) -> u32 {
        self.kilometres % 100
    }
}

impl fmt::Display for ReferenceLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}

/// One map sheet and its reference lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRecord {
    /// Uppercase three-letter sheet code (e.g., "GOO").
    pub code: String,
    /// UTM zone the sheet actually lies in.
    pub zone: u8,
    /// Latitude band designator.
    pub alpha: char,
    /// Westernmost easting line.
    pub easting_start: ReferenceLine,
    /// Easternmost easting line.
    pub easting_end: ReferenceLine,
    /// Southernmost northing line.
    pub northing_start: ReferenceLine,
    /// Northernmost northing line.
    pub northing_end: ReferenceLine,
}

impl SheetRecord {
    /// Full eastings (metres) covered by the sheet, inclusive.
    pub fn easting_range(&self) -> RangeInclusive<u32> {
        self.easting_start.metres()..=self.easting_end.metres()
    }

    /// Full northings (metres) covered by the sheet, inclusive.
    pub fn northing_range(&self) -> RangeInclusive<u32> {
        self.northing_start.metres()..=self.northing_end.metres()
    }
}
