//! WGS84 Universal Transverse Mercator projection.
//!
//! Series expansion of the transverse Mercator projection on the WGS84
//! ellipsoid, accurate to well under a metre inside a zone. Zone numbers
//! follow the standard 6° bands, including the Norway and Svalbard
//! exceptions.

use std::f64::consts::PI;

use super::projection::Projection;
use super::types::{
    Hemisphere, ProjectionError, UtmCoord, MAX_EASTING, MAX_LAT, MAX_LON, MAX_NORTHING, MAX_ZONE,
    MIN_EASTING, MIN_LAT, MIN_LON, MIN_NORTHING, MIN_ZONE,
};

/// Scale factor on the central meridian.
const K0: f64 = 0.9996;

/// WGS84 equatorial radius in metres.
const R: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
const E: f64 = 0.006_694_38;
const E2: f64 = E * E;
const E3: f64 = E2 * E;
/// Second eccentricity squared.
const E_P2: f64 = E / (1.0 - E);

const M1: f64 = 1.0 - E / 4.0 - 3.0 * E2 / 64.0 - 5.0 * E3 / 256.0;
const M2: f64 = 3.0 * E / 8.0 + 3.0 * E2 / 32.0 + 45.0 * E3 / 1024.0;
const M3: f64 = 15.0 * E2 / 256.0 + 45.0 * E3 / 1024.0;
const M4: f64 = 35.0 * E3 / 3072.0;

/// False easting applied in every zone.
const FALSE_EASTING: f64 = 500_000.0;
/// False northing applied in the southern hemisphere.
const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Latitude band letters from 80°S, 8° each (X is 12°).
const ZONE_LETTERS: &[u8] = b"CDEFGHJKLMNPQRSTUVWXX";

/// The WGS84 UTM projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct Wgs84Utm;

impl Wgs84Utm {
    /// Create the projection.
    pub fn new() -> Self {
        Self
    }
}

impl Projection for Wgs84Utm {
    fn to_lat_lon(
        &self,
        easting: f64,
        northing: f64,
        zone: u8,
        zone_letter: char,
    ) -> Result<(f64, f64), ProjectionError> {
        if !(MIN_EASTING..MAX_EASTING).contains(&easting) {
            return Err(ProjectionError::InvalidEasting(easting));
        }
        if !(MIN_NORTHING..=MAX_NORTHING).contains(&northing) {
            return Err(ProjectionError::InvalidNorthing(northing));
        }
        if !(MIN_ZONE..=MAX_ZONE).contains(&zone) {
            return Err(ProjectionError::InvalidZone(zone));
        }
        let zone_letter = zone_letter.to_ascii_uppercase();
        if !zone_letter.is_ascii() || !ZONE_LETTERS.contains(&(zone_letter as u8)) {
            return Err(ProjectionError::InvalidZoneLetter(zone_letter));
        }

        let x = easting - FALSE_EASTING;
        let y = match Hemisphere::from_zone_letter(zone_letter) {
            Hemisphere::North => northing,
            Hemisphere::South => northing - FALSE_NORTHING_SOUTH,
        };

        Ok(inverse(x, y, zone))
    }

    fn from_lat_lon(
        &self,
        latitude: f64,
        longitude: f64,
        hemisphere: Hemisphere,
    ) -> Result<UtmCoord, ProjectionError> {
        if !(MIN_LAT..=MAX_LAT).contains(&latitude) {
            return Err(ProjectionError::InvalidLatitude(latitude));
        }
        if !(MIN_LON..MAX_LON).contains(&longitude) {
            return Err(ProjectionError::InvalidLongitude(longitude));
        }

        let zone = zone_number(latitude, longitude);
        let zone_letter = zone_letter(latitude);
        let (easting, mut northing) = forward(latitude, longitude, zone);

        if hemisphere == Hemisphere::South {
            northing += FALSE_NORTHING_SOUTH;
        }

        Ok(UtmCoord {
            easting,
            northing,
            zone,
            zone_letter,
        })
    }
}

/// UTM zone number for a position, honouring the Norway/Svalbard exceptions.
pub fn zone_number(latitude: f64, longitude: f64) -> u8 {
    if (56.0..64.0).contains(&latitude) && (3.0..12.0).contains(&longitude) {
        return 32;
    }

    if (72.0..=84.0).contains(&latitude) && longitude >= 0.0 {
        if longitude < 9.0 {
            return 31;
        } else if longitude < 21.0 {
            return 33;
        } else if longitude < 33.0 {
            return 35;
        } else if longitude < 42.0 {
            return 37;
        }
    }

    (((longitude + 180.0) / 6.0) as u8 % MAX_ZONE) + 1
}

/// Latitude band letter for a latitude inside the UTM range.
pub fn zone_letter(latitude: f64) -> char {
    let index = ((latitude.clamp(MIN_LAT, MAX_LAT) + 80.0) as usize) >> 3;
    ZONE_LETTERS[index.min(ZONE_LETTERS.len() - 1)] as char
}

/// Longitude of a zone's central meridian, in degrees.
pub fn central_longitude(zone: u8) -> f64 {
    (f64::from(zone) - 1.0) * 6.0 - 180.0 + 3.0
}

/// Latitude/longitude to zone-relative easting/northing (northern form).
fn forward(latitude: f64, longitude: f64, zone: u8) -> (f64, f64) {
    let lat_rad = latitude.to_radians();
    let lat_sin = lat_rad.sin();
    let lat_cos = lat_rad.cos();

    let lat_tan = lat_sin / lat_cos;
    let lat_tan2 = lat_tan * lat_tan;
    let lat_tan4 = lat_tan2 * lat_tan2;

    let lon_rad = longitude.to_radians();
    let central_lon_rad = central_longitude(zone).to_radians();

    let n = R / (1.0 - E * lat_sin * lat_sin).sqrt();
    let c = E_P2 * lat_cos * lat_cos;

    let a = lat_cos * (lon_rad - central_lon_rad);
    let a2 = a * a;
    let a3 = a2 * a;
    let a4 = a3 * a;
    let a5 = a4 * a;
    let a6 = a5 * a;

    let m = R
        * (M1 * lat_rad - M2 * (2.0 * lat_rad).sin() + M3 * (4.0 * lat_rad).sin()
            - M4 * (6.0 * lat_rad).sin());

    let easting = K0
        * n
        * (a + a3 / 6.0 * (1.0 - lat_tan2 + c)
            + a5 / 120.0 * (5.0 - 18.0 * lat_tan2 + lat_tan4 + 72.0 * c - 58.0 * E_P2))
        + FALSE_EASTING;

    let northing = K0
        * (m + n
            * lat_tan
            * (a2 / 2.0
                + a4 / 24.0 * (5.0 - lat_tan2 + 9.0 * c + 4.0 * c * c)
                + a6 / 720.0 * (61.0 - 58.0 * lat_tan2 + lat_tan4 + 600.0 * c - 330.0 * E_P2)));

    (easting, northing)
}

/// Zone-relative x/y (false origin removed) to latitude/longitude.
fn inverse(x: f64, y: f64, zone: u8) -> (f64, f64) {
    let sqrt_e = (1.0 - E).sqrt();
    let e1 = (1.0 - sqrt_e) / (1.0 + sqrt_e);
    let e1_2 = e1 * e1;
    let e1_3 = e1_2 * e1;
    let e1_4 = e1_3 * e1;
    let e1_5 = e1_4 * e1;

    let p2 = 3.0 / 2.0 * e1 - 27.0 / 32.0 * e1_3 + 269.0 / 512.0 * e1_5;
    let p3 = 21.0 / 16.0 * e1_2 - 55.0 / 32.0 * e1_4;
    let p4 = 151.0 / 96.0 * e1_3 - 417.0 / 128.0 * e1_5;
    let p5 = 1097.0 / 512.0 * e1_4;

    let m = y / K0;
    let mu = m / (R * M1);

    let p_rad = mu
        + p2 * (2.0 * mu).sin()
        + p3 * (4.0 * mu).sin()
        + p4 * (6.0 * mu).sin()
        + p5 * (8.0 * mu).sin();

    let p_sin = p_rad.sin();
    let p_sin2 = p_sin * p_sin;
    let p_cos = p_rad.cos();

    let p_tan = p_sin / p_cos;
    let p_tan2 = p_tan * p_tan;
    let p_tan4 = p_tan2 * p_tan2;

    let ep_sin = 1.0 - E * p_sin2;
    let ep_sin_sqrt = ep_sin.sqrt();

    let n = R / ep_sin_sqrt;
    let r = (1.0 - E) / ep_sin;

    let c = E_P2 * p_cos * p_cos;
    let c2 = c * c;

    let d = x / (n * K0);
    let d2 = d * d;
    let d3 = d2 * d;
    let d4 = d3 * d;
    let d5 = d4 * d;
    let d6 = d5 * d;

    let latitude = p_rad
        - (p_tan / r)
            * (d2 / 2.0 - d4 / 24.0 * (5.0 + 3.0 * p_tan2 + 10.0 * c - 4.0 * c2 - 9.0 * E_P2)
                + d6 / 720.0
                    * (61.0 + 90.0 * p_tan2 + 298.0 * c + 45.0 * p_tan4
                        - 252.0 * E_P2
                        - 3.0 * c2));

    let longitude = (d - d3 / 6.0 * (1.0 + 2.0 * p_tan2 + c)
        + d5 / 120.0 * (5.0 - 2.0 * c + 28.0 * p_tan2 - 3.0 * c2 + 8.0 * E_P2 + 24.0 * p_tan4))
        / p_cos;

    (
        latitude * 180.0 / PI,
        longitude * 180.0 / PI + central_longitude(zone),
    )
}
