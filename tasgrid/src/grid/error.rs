//! Errors raised while resolving a grid reference.

use std::fmt;

use crate::coord::ProjectionError;

/// Part of a grid reference that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridField {
    Sheet,
    Easting,
    Northing,
}

impl fmt::Display for GridField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridField::Sheet => f.write_str("sheet"),
            GridField::Easting => f.write_str("easting"),
            GridField::Northing => f.write_str("northing"),
        }
    }
}

/// Projected axis of a reconstructed coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Easting,
    Northing,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Easting => f.write_str("easting"),
            Axis::Northing => f.write_str("northing"),
        }
    }
}

/// Per-reference resolution errors.
///
/// All variants are recoverable: the caller can correct the input and retry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// Sheet code or digit groups have the wrong shape.
    #[error("Malformed grid reference: {field} '{value}' {reason}")]
    MalformedGridReference {
        field: GridField,
        value: String,
        reason: &'static str,
    },

    /// The sheet code is not in the sheet table.
    #[error("Sheet '{0}' not found in the sheet table")]
    SheetNotFound(String),

    /// The reconstructed coordinate does not lie on the named sheet.
    #[error("{axis} {value} is out of the expected range for sheet {sheet}")]
    OutOfSheetRange {
        sheet: String,
        axis: Axis,
        value: String,
    },

    /// The projection could not convert the resolved coordinate.
    #[error("Cannot convert {sheet} {easting} {northing} to latitude/longitude: {source}")]
    ConversionFailed {
        sheet: String,
        easting: String,
        northing: String,
        #[source]
        source: ProjectionError,
    },

    /// A latitude or longitude given as text is not a number.
    #[error("Cannot parse a {what} from '{value}'")]
    InvalidCoordinate { what: &'static str, value: String },

    /// The projection could not convert a distance target.
    #[error("Cannot project latitude {latitude}, longitude {longitude}: {source}")]
    ProjectionFailed {
        latitude: f64,
        longitude: f64,
        #[source]
        source: ProjectionError,
    },
}
