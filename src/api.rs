//! Data transfer objects for the sight-reduction surface.
//!
//! Inputs mirror the host form exactly: degree/minute boxes arrive as free
//! text (blank or unparsable text reads as zero) with a hemisphere letter
//! beside them. The output carries the formatted strings the host displays
//! plus the unsigned error magnitude as a number.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::angle::Cardinal;

/// One sun sight with the GHA and declination entered from a nautical
/// almanac page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlmanacSight {
    /// Latitude degrees box
    pub lat_degrees: String,
    /// Latitude minutes box
    pub lat_minutes: String,
    /// N or S
    pub lat_hemisphere: Cardinal,
    /// Longitude degrees box
    pub lon_degrees: String,
    /// Longitude minutes box
    pub lon_minutes: String,
    /// E or W
    pub lon_hemisphere: Cardinal,
    /// GHA hours-entry degrees
    pub gha_hour_degrees: String,
    /// GHA hours-entry minutes of arc
    pub gha_hour_minutes: String,
    /// GHA minutes/seconds increment degrees
    pub gha_increment_degrees: String,
    /// GHA minutes/seconds increment minutes of arc
    pub gha_increment_minutes: String,
    /// Declination degrees box
    pub dec_degrees: String,
    /// Declination minutes box
    pub dec_minutes: String,
    /// N or S
    pub dec_hemisphere: Cardinal,
    /// Optional almanac `d` correction in minutes of arc
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dec_correction: Option<String>,
    /// Observed gyro bearing of the sun, decimal degrees
    pub gyro_azimuth: f64,
}

/// One sun sight with the GHA and declination left to the ephemeris
/// collaborator for a UTC instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSight {
    /// Latitude degrees box
    pub lat_degrees: String,
    /// Latitude minutes box
    pub lat_minutes: String,
    /// N or S
    pub lat_hemisphere: Cardinal,
    /// Longitude degrees box
    pub lon_degrees: String,
    /// Longitude minutes box
    pub lon_minutes: String,
    /// E or W
    pub lon_hemisphere: Cardinal,
    /// UTC instant of the observation
    pub observed_utc: DateTime<Utc>,
    /// Observed gyro bearing of the sun, decimal degrees
    pub gyro_azimuth: f64,
}

/// Formatted outcome of one sight reduction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SightReduction {
    /// Compass error, e.g. `"0.3° W"`
    pub gyro_error: String,
    /// Unsigned error magnitude, degrees
    pub absolute_error: f64,
    /// True bearing Zn, e.g. `"276.2°"`
    pub true_azimuth: String,
    /// Local hour angle t
    pub local_hour_angle: String,
    /// Altitude Hc
    pub altitude: String,
    /// Azimuth magnitude in `[0, 180]`; `None` when the geometry is
    /// degenerate and no bearing exists
    pub azimuth: Option<f64>,
    /// Quadrantal azimuth, e.g. `"N 83.8° W"`, or `"indeterminate"`
    pub azimuth_formatted: String,
    /// Combined Greenwich hour angle
    pub gha_total: String,
    /// Declination with any correction applied
    pub dec_total: String,
}
