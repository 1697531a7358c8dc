//! Reconstruction of full grid coordinates from three-figure references.
//!
//! A three-figure easting such as `545` only gives the hundreds of metres
//! within a 100 km square. The sheet's reference lines supply the missing
//! leading digits:
//!
//! - If the figures lie past the sheet's own position inside the 100 km square
//!   (`figures > carry_digits * 10`), the point shares the leading digits of
//!   the sheet's western (or southern) line.
//! - Otherwise the figures have wrapped past a 100 km line, and the leading
//!   digits are incremented by one.
//!
//! Eastings take the first character of the western line as leading digits,
//! northings the first two characters of the southern line.

use rayon::prelude::*;

use super::error::{Axis, GridError};
use super::point::GridPoint;
use super::reference::GridReference;
use crate::coord::{CoordinateConverter, Projection, Wgs84Utm};
use crate::sheet::{SheetRecord, SheetTable};

/// Metres per unit of the leading digits (the 100 km squares).
const SQUARE_METRES: u32 = 100_000;

/// Metres per unit of the three-figure value.
const FIGURE_METRES: u32 = 100;

/// Outcome of reconstructing one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisResolution {
    /// Full coordinate in metres
    pub value: u32,
    /// True when the leading digits were incremented past a 100 km line
    pub carried: bool,
}

/// Reconstruct one full coordinate.
///
/// * `figures` - the three-figure value (0-999)
/// * `leading` - leading digits taken from the sheet's start line
/// * `carry_digits` - last two digits of the sheet's start line
///
/// A value exactly equal to `carry_digits * 10` takes the carry branch.
#[inline]
pub fn resolve_axis(figures: u16, leading: u32, carry_digits: u32) -> AxisResolution {
    let figures = u32::from(figures);

    if figures > carry_digits * 10 {
        AxisResolution {
            value: leading * SQUARE_METRES + figures * FIGURE_METRES,
            carried: false,
        }
    } else {
        AxisResolution {
            value: (leading + 1) * SQUARE_METRES + figures * FIGURE_METRES,
            carried: true,
        }
    }
}

/// Resolves grid references against a sheet table.
///
/// The resolver only borrows the table and holds no mutable state, so one
/// resolver can serve any number of threads.
///
/// # Example
///
/// ```
/// use tasgrid::grid::{GridReference, GridResolver};
/// use tasgrid::sheet::SheetTable;
///
/// let table = SheetTable::tasmap().unwrap();
/// let resolver = GridResolver::new(&table);
///
/// let point = resolver.resolve_str("GOO", "545", "519").unwrap();
/// assert_eq!(point.full_easting(), 554_500);
/// assert_eq!(point.full_northing(), 5_551_900);
/// ```
#[derive(Debug, Clone)]
pub struct GridResolver<'a, P: Projection = Wgs84Utm> {
    table: &'a SheetTable,
    converter: CoordinateConverter<P>,
}

impl<'a> GridResolver<'a> {
    /// Create a resolver using the WGS84 UTM projection.
    pub fn new(table: &'a SheetTable) -> Self {
        Self {
            table,
            converter: CoordinateConverter::new(),
        }
    }
}

impl<'a, P: Projection> GridResolver<'a, P> {
    /// Create a resolver with a custom converter.
    pub fn with_converter(table: &'a SheetTable, converter: CoordinateConverter<P>) -> Self {
        Self { table, converter }
    }

    /// The converter used for latitude/longitude conversion.
    pub fn converter(&self) -> &CoordinateConverter<P> {
        &self.converter
    }

    /// Validate and resolve a reference given as three strings.
    pub fn resolve_str(
        &self,
        sheet: &str,
        easting: &str,
        northing: &str,
    ) -> Result<GridPoint, GridError> {
        let reference = GridReference::parse(sheet, easting, northing)?;
        self.resolve(&reference)
    }

    /// Resolve a reference to a full grid point.
    pub fn resolve(&self, reference: &GridReference) -> Result<GridPoint, GridError> {
        let (full_easting, full_northing) = self.full_coordinates(reference)?;

        let (latitude, longitude) = self
            .converter
            .to_geographic(full_easting, full_northing)
            .map_err(|source| GridError::ConversionFailed {
                sheet: reference.sheet().to_string(),
                easting: reference.easting_text(),
                northing: reference.northing_text(),
                source,
            })?;

        tracing::debug!(
            sheet = reference.sheet(),
            easting = full_easting,
            northing = full_northing,
            latitude,
            longitude,
            "Resolved grid reference"
        );

        Ok(GridPoint::from_parts(
            reference.clone(),
            full_easting,
            full_northing,
            latitude,
            longitude,
        ))
    }

    /// Reconstruct the full easting and northing without converting them.
    ///
    /// Fails when the sheet is unknown or the reconstructed point does not
    /// lie on the sheet.
    pub fn full_coordinates(&self, reference: &GridReference) -> Result<(u32, u32), GridError> {
        let sheet = self.table.lookup(reference.sheet())?;

        let easting = resolve_easting(sheet, reference.easting());
        let northing = resolve_northing(sheet, reference.northing());

        if !sheet.easting_range().contains(&easting.value) {
            return Err(GridError::OutOfSheetRange {
                sheet: sheet.code.clone(),
                axis: Axis::Easting,
                value: reference.easting_text(),
            });
        }
        if !sheet.northing_range().contains(&northing.value) {
            return Err(GridError::OutOfSheetRange {
                sheet: sheet.code.clone(),
                axis: Axis::Northing,
                value: reference.northing_text(),
            });
        }

        Ok((easting.value, northing.value))
    }

    /// Planar distance in metres from a resolved point to a position given
    /// as decimal degree text, using this resolver's projection.
    pub fn distance(
        &self,
        point: &GridPoint,
        latitude: &str,
        longitude: &str,
    ) -> Result<f64, GridError> {
        point.distance_with(&self.converter, latitude, longitude)
    }

    /// Resolve many references in parallel.
    ///
    /// Results are returned in input order, one per reference.
    pub fn resolve_all(&self, references: &[GridReference]) -> Vec<Result<GridPoint, GridError>> {
        let results: Vec<_> = references
            .par_iter()
            .map(|reference| self.resolve(reference))
            .collect();

        let failed = results.iter().filter(|r| r.is_err()).count();
        tracing::info!(
            count = references.len(),
            failed,
            "Resolved batch of grid references"
        );

        results
    }
}

/// Reconstruct the full easting of a three-figure value on a sheet.
pub fn resolve_easting(sheet: &SheetRecord, figures: u16) -> AxisResolution {
    resolve_axis(
        figures,
        sheet.easting_start.leading(1),
        sheet.easting_start.carry_digits(),
    )
}

/// Reconstruct the full northing of a three-figure value on a sheet.
pub fn resolve_northing(sheet: &SheetRecord, figures: u16) -> AxisResolution {
    resolve_axis(
        figures,
        sheet.northing_start.leading(2),
        sheet.northing_start.carry_digits(),
    )
}
