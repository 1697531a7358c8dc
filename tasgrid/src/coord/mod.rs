//! Coordinate conversion module
//!
//! Provides conversions between the projected UTM coordinates printed on
//! TASMAP sheets and geographic coordinates (latitude/longitude), plus the
//! degrees/minutes/seconds decomposition used for display.
//!
//! The ellipsoid math sits behind the [`Projection`] trait. [`Wgs84Utm`] is
//! the default implementation; [`CoordinateConverter`] applies the series
//! conventions (zone 55, southern hemisphere) on top of it.

mod converter;
mod dms;
mod projection;
mod types;
mod utm;

#[cfg(test)]
mod tests;

pub use converter::CoordinateConverter;
pub use dms::{to_dms, Dms};
pub use projection::Projection;
pub use types::{
    Hemisphere, ProjectionError, UtmCoord, MAX_EASTING, MAX_LAT, MAX_LON, MAX_NORTHING, MAX_ZONE,
    MIN_EASTING, MIN_LAT, MIN_LON, MIN_NORTHING, MIN_ZONE,
};
pub use utm::{central_longitude, zone_letter, zone_number, Wgs84Utm};

/// UTM zone every series sheet is converted in.
///
/// King Island sheets lie in zone 54 but carry zone 55 grid numbers.
pub const SERIES_ZONE: u8 = 55;

/// Latitude band letter passed with [`SERIES_ZONE`]; only its hemisphere matters.
pub const SERIES_ZONE_LETTER: char = 'G';

/// Hemisphere used when projecting positions for distance queries.
pub const SERIES_HEMISPHERE: Hemisphere = Hemisphere::South;
