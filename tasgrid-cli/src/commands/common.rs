//! Common types and utilities shared across CLI commands.

use clap::Args;
use tasgrid::grid::{GridPoint, GridReference};

use crate::error::CliError;

/// Positional sheet/easting/northing arguments.
#[derive(Debug, Clone, Args)]
pub struct ReferenceArgs {
    /// Three-letter sheet code (e.g., GOO)
    pub sheet: String,

    /// Three-figure easting (e.g., 545)
    pub easting: String,

    /// Three-figure northing (e.g., 519)
    pub northing: String,
}

impl ReferenceArgs {
    /// Validate the arguments as a grid reference.
    pub fn to_reference(&self) -> Result<GridReference, CliError> {
        Ok(GridReference::parse(
            &self.sheet,
            &self.easting,
            &self.northing,
        )?)
    }
}

/// Format a resolved point for display, one field per line.
pub fn format_point(point: &GridPoint) -> String {
    format!(
        "Grid reference: {}\n\
         Easting:   {} m\n\
         Northing:  {} m\n\
         Latitude:  {} ({})\n\
         Longitude: {} ({})",
        point.reference(),
        point.full_easting_string(),
        point.full_northing_string(),
        point.decimal_latitude_string(),
        point.latitude_dms(),
        point.decimal_longitude_string(),
        point.longitude_dms(),
    )
}
