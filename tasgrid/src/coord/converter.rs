//! Conversion between series grid coordinates and geographic coordinates.

use super::projection::Projection;
use super::types::{ProjectionError, UtmCoord};
use super::utm::Wgs84Utm;
use super::{SERIES_HEMISPHERE, SERIES_ZONE, SERIES_ZONE_LETTER};

/// Converts resolved grid coordinates to and from latitude/longitude.
///
/// Every sheet is converted as if it were in zone 55, including the King
/// Island sheets that really lie in zone 54. The series prints zone 55
/// numbers on those sheets, and the resulting error is small but has never
/// been quantified.
#[derive(Debug, Clone, Default)]
pub struct CoordinateConverter<P: Projection = Wgs84Utm> {
    projection: P,
}

impl CoordinateConverter<Wgs84Utm> {
    /// Create a converter backed by the WGS84 UTM projection.
    pub fn new() -> Self {
        Self {
            projection: Wgs84Utm,
        }
    }
}

impl<P: Projection> CoordinateConverter<P> {
    /// Create a converter backed by a custom projection.
    pub fn with_projection(projection: P) -> Self {
        Self { projection }
    }

    /// Convert a full series easting/northing to `(latitude, longitude)`.
    pub fn to_geographic(
        &self,
        easting: u32,
        northing: u32,
    ) -> Result<(f64, f64), ProjectionError> {
        self.projection.to_lat_lon(
            f64::from(easting),
            f64::from(northing),
            SERIES_ZONE,
            SERIES_ZONE_LETTER,
        )
    }

    /// Convert a position to UTM in its own zone, on the southern false origin.
    pub fn from_geographic(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<UtmCoord, ProjectionError> {
        self.projection
            .from_lat_lon(latitude, longitude, SERIES_HEMISPHERE)
    }

    /// Planar distance in metres from a full series easting/northing to a
    /// position.
    ///
    /// The position is projected and compared on the flat UTM grid, so the
    /// result is only meaningful while both lie in the same zone. It is not a
    /// geodesic distance.
    pub fn distance(
        &self,
        easting: u32,
        northing: u32,
        latitude: f64,
        longitude: f64,
    ) -> Result<f64, ProjectionError> {
        let target = self.from_geographic(latitude, longitude)?;

        if target.zone != SERIES_ZONE {
            tracing::warn!(
                zone = target.zone,
                latitude,
                longitude,
                "Distance target is outside zone {}, planar distance will be skewed",
                SERIES_ZONE
            );
        }

        let easting_delta = f64::from(easting) - target.easting;
        let northing_delta = f64::from(northing) - target.northing;

        Ok(easting_delta.hypot(northing_delta))
    }
}
