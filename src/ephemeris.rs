//! Solar ephemeris collaborator.
//!
//! The ephemeris pipeline needs two numbers for an instant in time: the sun's
//! Greenwich hour angle and its declination. The [`SolarEphemeris`] trait is
//! the seam a host can plug a full-precision provider into; [`LowPrecisionSun`]
//! is the built-in implementation, a low-accuracy solar position (mean
//! longitude and anomaly plus the equation of center) combined with the
//! standard GMST polynomial, GHA = GMST − RA. Accuracy is on the order of a
//! hundredth of a degree, well under the tenth-of-a-degree resolution the
//! compass comparison is read at.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::angle::wrap_360;

/// Julian date of the J2000.0 epoch (2000-01-01 12:00 UT).
const J2000_JD: f64 = 2_451_545.0;

/// Sun time-angle reference for one instant, decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunCoordinates {
    /// Greenwich hour angle in `[0, 360)`
    pub gha: f64,
    /// Declination, north positive
    pub declination: f64,
}

/// Supplies the sun's GHA and declination for a UTC instant.
pub trait SolarEphemeris {
    fn sun_coordinates(&self, instant: DateTime<Utc>) -> SunCoordinates;
}

/// Built-in low-accuracy solar ephemeris.
#[derive(Debug, Clone, Copy, Default)]
pub struct LowPrecisionSun;

impl SolarEphemeris for LowPrecisionSun {
    fn sun_coordinates(&self, instant: DateTime<Utc>) -> SunCoordinates {
        let jd = julian_date(instant);
        let (ra, declination) = solar_ra_dec(jd);
        let gha = wrap_360(gmst_degrees(jd) - ra);
        SunCoordinates { gha, declination }
    }
}

/// Julian date of a UTC instant.
fn julian_date(instant: DateTime<Utc>) -> f64 {
    let unix_secs =
        instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) / 1e9;
    unix_secs / 86_400.0 + 2_440_587.5
}

/// Geocentric solar right ascension and declination, degrees.
///
/// Mean longitude and mean anomaly polynomials with the equation of center,
/// reduced through the mean obliquity of the ecliptic.
fn solar_ra_dec(jd: f64) -> (f64, f64) {
    let t = (jd - J2000_JD) / 36_525.0;

    let mean_longitude = (280.46646 + 36_000.76983 * t + 0.0003032 * t * t).rem_euclid(360.0);
    let mean_anomaly = (357.52911 + 35_999.05029 * t - 0.0001537 * t * t).rem_euclid(360.0);
    let m = mean_anomaly.to_radians();

    let center = 1.914_602 * m.sin()
        + 0.019_993 * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    let ecliptic_longitude = (mean_longitude + center).to_radians();

    let obliquity = (23.439_291 - 0.013_004_2 * t).to_radians();

    let ra = (obliquity.cos() * ecliptic_longitude.sin())
        .atan2(ecliptic_longitude.cos())
        .to_degrees();
    let declination = (obliquity.sin() * ecliptic_longitude.sin()).asin().to_degrees();

    (wrap_360(ra), declination)
}

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
fn gmst_degrees(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / 36_525.0;
    (280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t - t * t * t / 38_710_000.0)
        .rem_euclid(360.0)
}
