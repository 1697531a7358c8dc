//! Fully resolved grid points.

use std::fmt;

use super::error::GridError;
use super::reference::GridReference;
use super::resolver::GridResolver;
use crate::coord::{to_dms, CoordinateConverter, Dms, Projection};
use crate::sheet::SheetTable;

/// A grid reference resolved to full projected and geographic coordinates.
///
/// Points are only produced by resolution, so every field is consistent with
/// the sheet table the reference was resolved against.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPoint {
    reference: GridReference,
    full_easting: u32,
    full_northing: u32,
    latitude: f64,
    longitude: f64,
    latitude_dms: Dms,
    longitude_dms: Dms,
}

impl GridPoint {
    /// Resolve a sheet code and three-figure easting/northing.
    ///
    /// # Example
    ///
    /// ```
    /// use tasgrid::grid::GridPoint;
    /// use tasgrid::sheet::SheetTable;
    ///
    /// let table = SheetTable::tasmap().unwrap();
    /// let point = GridPoint::new("GOO", "545", "519", &table).unwrap();
    ///
    /// assert_eq!(point.full_easting_string(), "554500");
    /// assert_eq!(point.decimal_latitude_string(), "-40.181512");
    /// ```
    pub fn new(
        sheet: &str,
        easting: &str,
        northing: &str,
        table: &SheetTable,
    ) -> Result<Self, GridError> {
        GridResolver::new(table).resolve_str(sheet, easting, northing)
    }

    pub(crate) fn from_parts(
        reference: GridReference,
        full_easting: u32,
        full_northing: u32,
        latitude: f64,
        longitude: f64,
    ) -> Self {
        Self {
            reference,
            full_easting,
            full_northing,
            latitude,
            longitude,
            latitude_dms: to_dms(latitude),
            longitude_dms: to_dms(longitude),
        }
    }

    /// The validated reference this point was resolved from.
    pub fn reference(&self) -> &GridReference {
        &self.reference
    }

    /// Uppercase sheet code.
    pub fn sheet(&self) -> &str {
        self.reference.sheet()
    }

    /// Full easting in metres.
    pub fn full_easting(&self) -> u32 {
        self.full_easting
    }

    /// Full northing in metres.
    pub fn full_northing(&self) -> u32 {
        self.full_northing
    }

    /// Latitude in decimal degrees (negative south of the equator).
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in decimal degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude_dms(&self) -> Dms {
        self.latitude_dms
    }

    pub fn longitude_dms(&self) -> Dms {
        self.longitude_dms
    }

    pub fn full_easting_string(&self) -> String {
        self.full_easting.to_string()
    }

    pub fn full_northing_string(&self) -> String {
        self.full_northing.to_string()
    }

    /// Latitude to six decimal places.
    pub fn decimal_latitude_string(&self) -> String {
        format!("{:.6}", self.latitude)
    }

    /// Longitude to six decimal places.
    pub fn decimal_longitude_string(&self) -> String {
        format!("{:.6}", self.longitude)
    }

    /// Latitude seconds to one decimal place, without sign.
    pub fn latitude_seconds_string(&self) -> String {
        self.latitude_dms.seconds_string()
    }

    /// Longitude seconds to one decimal place, without sign.
    pub fn longitude_seconds_string(&self) -> String {
        self.longitude_dms.seconds_string()
    }

    /// Planar distance in metres to a position given as decimal degree text.
    ///
    /// Fails with [`GridError::InvalidCoordinate`] when either value is not a
    /// number.
    pub fn distance_to(&self, latitude: &str, longitude: &str) -> Result<f64, GridError> {
        self.distance_with(&CoordinateConverter::new(), latitude, longitude)
    }

    /// Like [`GridPoint::distance_to`], projecting with the given converter.
    pub fn distance_with<P: Projection>(
        &self,
        converter: &CoordinateConverter<P>,
        latitude: &str,
        longitude: &str,
    ) -> Result<f64, GridError> {
        let latitude = parse_degrees(latitude, "latitude")?;
        let longitude = parse_degrees(longitude, "longitude")?;

        converter
            .distance(self.full_easting, self.full_northing, latitude, longitude)
            .map_err(|source| GridError::ProjectionFailed {
                latitude,
                longitude,
                source,
            })
    }
}

impl fmt::Display for GridPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}E {}N ({:.6}, {:.6})",
            self.reference, self.full_easting, self.full_northing, self.latitude, self.longitude
        )
    }
}

fn parse_degrees(text: &str, what: &'static str) -> Result<f64, GridError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| GridError::InvalidCoordinate {
            what,
            value: text.to_string(),
        })
}
