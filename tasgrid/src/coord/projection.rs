//! Projection trait definition.

use super::types::{Hemisphere, ProjectionError, UtmCoord};

/// Conversion between projected UTM coordinates and geographic coordinates.
///
/// Grid resolution only depends on this interface, so the ellipsoid math can
/// be swapped (or mocked in tests) without touching the resolver.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so resolvers can run in parallel.
pub trait Projection: Send + Sync {
    /// Convert a UTM coordinate to `(latitude, longitude)` in decimal degrees.
    ///
    /// The zone letter selects the hemisphere (`N` and above is north).
    fn to_lat_lon(
        &self,
        easting: f64,
        northing: f64,
        zone: u8,
        zone_letter: char,
    ) -> Result<(f64, f64), ProjectionError>;

    /// Convert decimal degrees to a UTM coordinate in the position's own zone.
    ///
    /// The false northing is applied when `hemisphere` is south.
    fn from_lat_lon(
        &self,
        latitude: f64,
        longitude: f64,
        hemisphere: Hemisphere,
    ) -> Result<UtmCoord, ProjectionError>;
}
