//! Validated six-figure grid references.

use std::fmt;
use std::str::FromStr;

use super::error::{GridError, GridField};

/// A sheet code with three-figure easting and northing.
///
/// Construction validates the shape of every part, so a `GridReference`
/// always has a three-letter uppercase sheet code and two values in 0-999.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GridReference {
    sheet: String,
    easting: u16,
    northing: u16,
}

impl GridReference {
    /// Validate and build a reference from its three parts.
    ///
    /// Sheet codes containing anything other than letters (such as the digit
    /// codes of other map series) are rejected.
    pub fn parse(sheet: &str, easting: &str, northing: &str) -> Result<Self, GridError> {
        let sheet = parse_sheet(sheet)?;
        let easting = parse_digits(easting, GridField::Easting)?;
        let northing = parse_digits(northing, GridField::Northing)?;

        Ok(Self {
            sheet,
            easting,
            northing,
        })
    }

    /// Uppercase three-letter sheet code.
    pub fn sheet(&self) -> &str {
        &self.sheet
    }

    /// Three-figure easting as a number (0-999).
    pub fn easting(&self) -> u16 {
        self.easting
    }

    /// Three-figure northing as a number (0-999).
    pub fn northing(&self) -> u16 {
        self.northing
    }

    /// Three-figure easting as written, zero padded.
    pub fn easting_text(&self) -> String {
        format!("{:03}", self.easting)
    }

    /// Three-figure northing as written, zero padded.
    pub fn northing_text(&self) -> String {
        format!("{:03}", self.northing)
    }
}

impl fmt::Display for GridReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:03} {:03}", self.sheet, self.easting, self.northing)
    }
}

/// Parses `"GOO 545 519"` or the compact `"GOO545519"`.
impl FromStr for GridReference {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        match parts.as_slice() {
            [sheet, easting, northing] => Self::parse(sheet, easting, northing),
            [compact] if compact.len() == 9 && compact.is_ascii() => {
                Self::parse(&compact[..3], &compact[3..6], &compact[6..])
            }
            _ => Err(GridError::MalformedGridReference {
                field: GridField::Sheet,
                value: s.trim().to_string(),
                reason: "is not a reference of the form 'SHEET EEE NNN'",
            }),
        }
    }
}

fn parse_sheet(sheet: &str) -> Result<String, GridError> {
    if sheet.len() != 3 {
        return Err(GridError::MalformedGridReference {
            field: GridField::Sheet,
            value: sheet.to_string(),
            reason: "must be exactly 3 letters",
        });
    }
    if !sheet.bytes().all(|b| b.is_ascii_alphabetic()) {
        return Err(GridError::MalformedGridReference {
            field: GridField::Sheet,
            value: sheet.to_string(),
            reason: "must contain only letters",
        });
    }
    Ok(sheet.to_ascii_uppercase())
}

fn parse_digits(text: &str, field: GridField) -> Result<u16, GridError> {
    if text.len() != 3 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(GridError::MalformedGridReference {
            field,
            value: text.to_string(),
            reason: "must be exactly 3 digits",
        });
    }
    text.parse().map_err(|_| GridError::MalformedGridReference {
        field,
        value: text.to_string(),
        reason: "must be exactly 3 digits",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_valid_reference() {
        let reference = GridReference::parse("goo", "545", "519").unwrap();
        assert_eq!(reference.sheet(), "GOO");
        assert_eq!(reference.easting(), 545);
        assert_eq!(reference.northing(), 519);
        assert_eq!(reference.to_string(), "GOO 545 519");
    }

    #[test]
    fn test_leading_zeros_preserved_in_text() {
        let reference = GridReference::parse("CBI", "050", "007").unwrap();
        assert_eq!(reference.easting(), 50);
        assert_eq!(reference.easting_text(), "050");
        assert_eq!(reference.northing_text(), "007");
    }

    #[test]
    fn test_sheet_with_digit_rejected() {
        let err = GridReference::parse("N12", "545", "519").unwrap_err();
        assert!(matches!(
            err,
            GridError::MalformedGridReference {
                field: GridField::Sheet,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        for (sheet, easting, northing, field) in [
            ("GO", "545", "519", GridField::Sheet),
            ("GOOS", "545", "519", GridField::Sheet),
            ("GOO", "54", "519", GridField::Easting),
            ("GOO", "5450", "519", GridField::Easting),
            ("GOO", "545", "51", GridField::Northing),
            ("GOO", "545", "", GridField::Northing),
        ] {
            let err = GridReference::parse(sheet, easting, northing).unwrap_err();
            match err {
                GridError::MalformedGridReference { field: got, .. } => assert_eq!(got, field),
                other => panic!("unexpected error: {other}"),
            }
        }
    }

    #[test]
    fn test_signed_and_non_ascii_digits_rejected() {
        assert!(GridReference::parse("GOO", "+45", "519").is_err());
        assert!(GridReference::parse("GOO", "5 5", "519").is_err());
        assert!(GridReference::parse("GOO", "٥٤٥", "519").is_err());
        assert!(GridReference::parse("GÖO", "545", "519").is_err());
    }

    #[test]
    fn test_from_str_forms() {
        let spaced: GridReference = "GOO 545 519".parse().unwrap();
        let compact: GridReference = "goo545519".parse().unwrap();
        assert_eq!(spaced, compact);

        assert!("GOO 545".parse::<GridReference>().is_err());
        assert!("GOO5455190".parse::<GridReference>().is_err());
    }

    proptest! {
        /// Property: any sheet code containing a digit is rejected.
        #[test]
        fn prop_sheet_with_digit_rejected(
            prefix in "[A-Z]{0,2}",
            digit in "[0-9]",
            easting in 0u16..1000,
            northing in 0u16..1000,
        ) {
            let sheet: String = format!("{}{}", prefix, digit)
                .chars()
                .chain(std::iter::repeat('A'))
                .take(3)
                .collect();
            let result = GridReference::parse(
                &sheet,
                &format!("{:03}", easting),
                &format!("{:03}", northing),
            );
            let is_sheet_error = matches!(
                result,
                Err(GridError::MalformedGridReference { field: GridField::Sheet, .. })
            );
            prop_assert!(is_sheet_error);
        }

        /// Property: digit groups of any length other than three are rejected.
        #[test]
        fn prop_wrong_digit_count_rejected(digits in "[0-9]{0,8}") {
            prop_assume!(digits.len() != 3);
            prop_assert!(GridReference::parse("GOO", &digits, "519").is_err());
            prop_assert!(GridReference::parse("GOO", "545", &digits).is_err());
        }

        /// Property: every well-formed reference parses and round-trips its digits.
        #[test]
        fn prop_valid_reference_parses(
            sheet in "[A-Za-z]{3}",
            easting in 0u16..1000,
            northing in 0u16..1000,
        ) {
            let reference = GridReference::parse(
                &sheet,
                &format!("{:03}", easting),
                &format!("{:03}", northing),
            ).unwrap();
            prop_assert_eq!(reference.sheet(), sheet.to_ascii_uppercase());
            prop_assert_eq!(reference.easting(), easting);
            prop_assert_eq!(reference.northing(), northing);
        }
    }
}
