//! Coordinate type definitions

use std::fmt;

/// UTM valid latitude range
pub const MIN_LAT: f64 = -80.0;
pub const MAX_LAT: f64 = 84.0;

/// Valid longitude range (180° itself belongs to zone 1 as -180°)
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Valid UTM zone numbers
pub const MIN_ZONE: u8 = 1;
pub const MAX_ZONE: u8 = 60;

/// Valid easting range for a UTM coordinate, in metres
pub const MIN_EASTING: f64 = 100_000.0;
pub const MAX_EASTING: f64 = 1_000_000.0;

/// Valid northing range for a UTM coordinate, in metres
pub const MIN_NORTHING: f64 = 0.0;
pub const MAX_NORTHING: f64 = 10_000_000.0;

/// Hemisphere used to choose the false northing of a UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere implied by a latitude band letter (`N` and above is north).
    pub fn from_zone_letter(letter: char) -> Self {
        if letter.to_ascii_uppercase() >= 'N' {
            Hemisphere::North
        } else {
            Hemisphere::South
        }
    }
}

/// A projected UTM coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoord {
    /// Easting in metres (500 000 at the central meridian)
    pub easting: f64,
    /// Northing in metres
    pub northing: f64,
    /// Zone number (1-60)
    pub zone: u8,
    /// Latitude band letter (C-X)
    pub zone_letter: char,
}

/// Errors raised by the projection when a coordinate is outside its domain.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// Easting is outside 100 000 to 1 000 000 m
    InvalidEasting(f64),
    /// Northing is outside 0 to 10 000 000 m
    InvalidNorthing(f64),
    /// Zone number is outside 1 to 60
    InvalidZone(u8),
    /// Zone letter is not a UTM latitude band
    InvalidZoneLetter(char),
    /// Latitude is outside the UTM range (-80 to 84)
    InvalidLatitude(f64),
    /// Longitude is outside -180 to 180
    InvalidLongitude(f64),
}

impl fmt::Display for ProjectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectionError::InvalidEasting(easting) => {
                write!(
                    f,
                    "Invalid easting: {} (must be between {} and {})",
                    easting, MIN_EASTING, MAX_EASTING
                )
            }
            ProjectionError::InvalidNorthing(northing) => {
                write!(
                    f,
                    "Invalid northing: {} (must be between {} and {})",
                    northing, MIN_NORTHING, MAX_NORTHING
                )
            }
            ProjectionError::InvalidZone(zone) => {
                write!(
                    f,
                    "Invalid zone: {} (must be between {} and {})",
                    zone, MIN_ZONE, MAX_ZONE
                )
            }
            ProjectionError::InvalidZoneLetter(letter) => {
                write!(f, "Invalid zone letter: '{}' (must be C-X, excluding I and O)", letter)
            }
            ProjectionError::InvalidLatitude(lat) => {
                write!(
                    f,
                    "Invalid latitude: {} (must be between {} and {})",
                    lat, MIN_LAT, MAX_LAT
                )
            }
            ProjectionError::InvalidLongitude(lon) => {
                write!(
                    f,
                    "Invalid longitude: {} (must be between {} and {})",
                    lon, MIN_LON, MAX_LON
                )
            }
        }
    }
}

impl std::error::Error for ProjectionError {}
