//! Degrees/minutes/seconds decomposition.

use std::fmt;

/// An angle split into degrees, minutes and seconds.
///
/// The sign lives entirely in `degrees`; minutes and seconds are never
/// negative. No rounding is applied, so callers round only for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    /// Whole degrees, truncated toward zero
    pub degrees: f64,
    /// Whole minutes (0-59)
    pub minutes: f64,
    /// Seconds including the fractional part
    pub seconds: f64,
}

impl Dms {
    /// Seconds formatted to one decimal place without a sign.
    pub fn seconds_string(&self) -> String {
        format!("{:.1}", self.seconds.abs())
    }
}

impl fmt::Display for Dms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.0}° {:02.0}' {:04.1}\"",
            self.degrees,
            self.minutes,
            self.seconds.abs()
        )
    }
}

/// Convert decimal degrees to degrees, minutes and seconds.
///
/// ```
/// use tasgrid::coord::to_dms;
///
/// let dms = to_dms(-42.123456);
/// assert_eq!(dms.degrees, -42.0);
/// assert_eq!(dms.minutes, 7.0);
/// assert!((dms.seconds - 24.4416).abs() < 1e-6);
/// ```
#[inline]
pub fn to_dms(decimal_degrees: f64) -> Dms {
    let degrees = decimal_degrees.trunc();
    let decimal_minutes = (decimal_degrees.abs() - degrees.abs()) * 60.0;
    let minutes = decimal_minutes.trunc();
    let seconds = (decimal_minutes - minutes) * 60.0;

    Dms {
        degrees,
        minutes,
        seconds,
    }
}
