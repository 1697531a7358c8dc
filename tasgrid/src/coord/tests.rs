//! Tests for coordinate conversion

use super::*;

#[test]
fn test_from_lat_lon_germany() {
    // 51.2°N, 7.5°E
    let coord = Wgs84Utm
        .from_lat_lon(51.2, 7.5, Hemisphere::North)
        .unwrap();

    assert!((coord.easting - 395_201.310_381).abs() < 1e-2);
    assert!((coord.northing - 5_673_135.241_182).abs() < 1e-2);
    assert_eq!(coord.zone, 32);
    assert_eq!(coord.zone_letter, 'U');
}

#[test]
fn test_to_lat_lon_germany_roundtrip() {
    let (lat, lon) = Wgs84Utm.to_lat_lon(340_000.0, 5_710_000.0, 32, 'U').unwrap();

    // Near Duisburg
    assert!((lat - 51.518).abs() < 1e-3, "latitude {}", lat);
    assert!((lon - 6.694).abs() < 1e-3, "longitude {}", lon);

    let coord = Wgs84Utm.from_lat_lon(lat, lon, Hemisphere::North).unwrap();
    assert!((coord.easting - 340_000.0).abs() < 1e-2, "easting {}", coord.easting);
    assert!((coord.northing - 5_710_000.0).abs() < 1e-2, "northing {}", coord.northing);
    assert_eq!(coord.zone, 32);
}

#[test]
fn test_to_lat_lon_goose_sheet() {
    // GOO 545 519 resolves to 554500E 5551900N
    let (lat, lon) = Wgs84Utm.to_lat_lon(554_500.0, 5_551_900.0, 55, 'G').unwrap();

    assert!((lat - (-40.181_512)).abs() < 1e-6, "latitude {}", lat);
    assert!((lon - 147.640_171).abs() < 1e-6, "longitude {}", lon);
}

#[test]
fn test_lowercase_zone_letter_accepted() {
    let upper = Wgs84Utm.to_lat_lon(554_500.0, 5_551_900.0, 55, 'G').unwrap();
    let lower = Wgs84Utm.to_lat_lon(554_500.0, 5_551_900.0, 55, 'g').unwrap();
    assert_eq!(upper, lower);
}

#[test]
fn test_roundtrip_southern_hemisphere() {
    let utm = Wgs84Utm::new();

    for (easting, northing) in [
        (554_500.0, 5_551_900.0),
        (605_000.0, 5_510_000.0),
        (225_100.0, 5_560_000.0),
        (500_000.0, 5_200_000.0),
    ] {
        let (lat, lon) = utm.to_lat_lon(easting, northing, 55, 'G').unwrap();

        // Round trip stays in zone 55 only east of 144°E
        if zone_number(lat, lon) != 55 {
            continue;
        }

        let coord = utm.from_lat_lon(lat, lon, Hemisphere::South).unwrap();
        assert!(
            (coord.easting - easting).abs() < 1e-2,
            "easting {} vs {}",
            coord.easting,
            easting
        );
        assert!(
            (coord.northing - northing).abs() < 1e-2,
            "northing {} vs {}",
            coord.northing,
            northing
        );
    }
}

#[test]
fn test_converter_uses_series_zone() {
    // The converter always projects in zone 55, so a King Island easting
    // lands west of the zone 55 boundary instead of in zone 54.
    let converter = CoordinateConverter::new();
    let (lat, lon) = converter.to_geographic(225_100, 5_560_000).unwrap();

    assert!(lat < -39.0 && lat > -41.0);
    assert!(lon < 144.0, "longitude {}", lon);
    assert_eq!(zone_number(lat, lon), 54);
}

#[test]
fn test_converter_surfaces_projection_errors() {
    let converter = CoordinateConverter::new();
    assert!(matches!(
        converter.to_geographic(5_000, 5_551_900),
        Err(ProjectionError::InvalidEasting(_))
    ));
    assert!(matches!(
        converter.from_geographic(-89.0, 147.0),
        Err(ProjectionError::InvalidLatitude(_))
    ));
}

#[test]
fn test_converter_from_geographic_is_southern() {
    let converter = CoordinateConverter::new();
    let coord = converter.from_geographic(-41.432_563, 145.234_567).unwrap();

    assert_eq!(coord.zone, 55);
    assert_eq!(coord.zone_letter, 'G');
    assert!(coord.northing > 5_000_000.0 && coord.northing < 5_500_000.0);
}

#[test]
fn test_converter_distance_on_grid() {
    let converter = CoordinateConverter::new();
    let metres = converter
        .distance(554_500, 5_551_900, -41.432_563, 145.234_567)
        .unwrap();
    assert!((metres - 245_878.676).abs() < 0.1, "distance {}", metres);

    assert!(matches!(
        converter.distance(554_500, 5_551_900, -85.0, 145.0),
        Err(ProjectionError::InvalidLatitude(_))
    ));
}

/// Projection stub returning fixed values, to check the converter passes the
/// series zone through.
struct FixedProjection;

impl Projection for FixedProjection {
    fn to_lat_lon(
        &self,
        _easting: f64,
        _northing: f64,
        zone: u8,
        zone_letter: char,
    ) -> Result<(f64, f64), ProjectionError> {
        if zone != SERIES_ZONE || zone_letter != SERIES_ZONE_LETTER {
            return Err(ProjectionError::InvalidZone(zone));
        }
        Ok((-42.0, 147.0))
    }

    fn from_lat_lon(
        &self,
        _latitude: f64,
        _longitude: f64,
        hemisphere: Hemisphere,
    ) -> Result<UtmCoord, ProjectionError> {
        assert_eq!(hemisphere, Hemisphere::South);
        Ok(UtmCoord {
            easting: 500_000.0,
            northing: 5_350_000.0,
            zone: 55,
            zone_letter: 'G',
        })
    }
}

#[test]
fn test_converter_with_custom_projection() {
    let converter = CoordinateConverter::with_projection(FixedProjection);
    assert_eq!(converter.to_geographic(1, 2).unwrap(), (-42.0, 147.0));
    assert_eq!(converter.from_geographic(0.0, 0.0).unwrap().northing, 5_350_000.0);

    // 300 m east and 400 m north of the fixed target
    assert_eq!(converter.distance(500_300, 5_350_400, 0.0, 0.0).unwrap(), 500.0);
}
