//! Angle value types and sexagesimal conversion.
//!
//! Navigators enter angles as degree/minute pairs tagged with a hemisphere
//! letter (N/S for latitude and declination, E/W for longitude). This module
//! converts those raw form values to signed decimal degrees and defines one
//! wrapper type per angular unit so that a raw degree value, a local hour
//! angle and a true bearing cannot be mixed up at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hemisphere/direction letter attached to a sexagesimal angle field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinal {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "W")]
    West,
}

impl Cardinal {
    /// South and West sides carry a negative sign in decimal degrees.
    pub fn negates(self) -> bool {
        matches!(self, Cardinal::South | Cardinal::West)
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let letter = match self {
            Cardinal::North => "N",
            Cardinal::South => "S",
            Cardinal::East => "E",
            Cardinal::West => "W",
        };
        f.write_str(letter)
    }
}

/// Lenient numeric field parse: empty or unparsable text is 0.
///
/// Form fields arrive as free text; a blank minutes box means zero minutes,
/// not an error.
pub fn parse_angle_field(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Convert a degree/minute/hemisphere triple to signed decimal degrees.
///
/// `decimal = degrees + minutes / 60`, negated for S/W. A signed zero is
/// normalized to positive zero so `"0° S"` and `"0° N"` compare equal.
pub fn to_decimal_degrees(degrees: &str, minutes: &str, cardinal: Cardinal) -> f64 {
    let magnitude = parse_angle_field(degrees) + parse_angle_field(minutes) / 60.0;
    let signed = if cardinal.negates() { -magnitude } else { magnitude };
    if signed == 0.0 {
        0.0
    } else {
        signed
    }
}

/// Normalize an angle into `[0, 360)`.
pub fn wrap_360(degrees: f64) -> f64 {
    degrees.rem_euclid(360.0)
}

/// Normalize an angle into `[-180, 180]`.
///
/// Modulo plus a single correction step, so the function is total for any
/// finite input (NaN propagates as NaN).
pub fn wrap_180(degrees: f64) -> f64 {
    let mut d = degrees % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d < -180.0 {
        d += 360.0;
    }
    d
}

/// Observer latitude in signed decimal degrees (north positive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Latitude(qtty::Degrees);

impl Latitude {
    pub fn new<V: Into<qtty::Degrees>>(v: V) -> Self {
        Self(v.into())
    }

    /// Build from raw degree/minute form text and an N/S letter.
    pub fn from_sexagesimal(degrees: &str, minutes: &str, cardinal: Cardinal) -> Self {
        Self::new(to_decimal_degrees(degrees, minutes, cardinal))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Latitude clamped into the physical `[-90, 90]` range.
    pub fn clamped(&self) -> Self {
        Self::new(self.value().clamp(-90.0, 90.0))
    }

    /// Zero latitude counts as northern, matching the Zn reduction rule.
    pub fn is_northern(&self) -> bool {
        self.value() >= 0.0
    }
}

/// Observer longitude in signed decimal degrees (east positive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Longitude(qtty::Degrees);

impl Longitude {
    pub fn new<V: Into<qtty::Degrees>>(v: V) -> Self {
        Self(v.into())
    }

    /// Build from raw degree/minute form text and an E/W letter.
    pub fn from_sexagesimal(degrees: &str, minutes: &str, cardinal: Cardinal) -> Self {
        Self::new(to_decimal_degrees(degrees, minutes, cardinal))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

/// Sun declination in signed decimal degrees (north positive).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Declination(qtty::Degrees);

impl Declination {
    pub fn new<V: Into<qtty::Degrees>>(v: V) -> Self {
        Self(v.into())
    }

    /// Build from raw degree/minute form text and an N/S letter.
    pub fn from_sexagesimal(degrees: &str, minutes: &str, cardinal: Cardinal) -> Self {
        Self::new(to_decimal_degrees(degrees, minutes, cardinal))
    }

    /// Apply an almanac `d` correction given in minutes of arc.
    pub fn with_correction_minutes(&self, minutes: f64) -> Self {
        Self::new(self.value() + minutes / 60.0)
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }
}

/// Local hour angle of the sun, canonical range `(-180, 180]`.
///
/// Negative values mean the sun is east of the observer's meridian (has not
/// yet crossed it moving west).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct HourAngle(qtty::Degrees);

impl HourAngle {
    /// Derive the LHA from a Greenwich hour angle and the observer longitude.
    ///
    /// `GHA + longitude` is first wrapped into `[0, 360)` and then remapped
    /// into `(-180, 180]` so that the sign alone answers the east/west
    /// question downstream.
    pub fn from_gha_and_longitude(gha: f64, longitude: Longitude) -> Self {
        let mut t = (gha + longitude.value()).rem_euclid(360.0);
        if t > 180.0 {
            t -= 360.0;
        }
        Self(qtty::Degrees::new(t))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }

    /// Sun east of the observer's meridian.
    pub fn is_east(&self) -> bool {
        self.value() < 0.0
    }
}

/// True bearing of the sun in `[0, 360)`, measured clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct AzimuthZn(qtty::Degrees);

impl AzimuthZn {
    /// Wraps into `[0, 360)` on construction.
    pub fn new(degrees: f64) -> Self {
        Self(qtty::Degrees::new(wrap_360(degrees)))
    }

    pub fn value(&self) -> f64 {
        self.0.value()
    }
}
