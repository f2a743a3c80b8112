//! Spherical-triangle solution for the sun's altitude and true bearing.
//!
//! Solves the navigational triangle (observer zenith, celestial pole, sun)
//! for the co-altitude and azimuth, then reduces the azimuth magnitude to a
//! full-circle true bearing Zn using the hemisphere and east/west rules of
//! marine practice.

use serde::{Deserialize, Serialize};

use crate::models::angle::{AzimuthZn, Cardinal, Declination, HourAngle, Latitude};

/// Azimuth denominator below this is treated as degenerate geometry.
/// Absorbs the floating-point residue of `cos(90°.to_radians())`.
const DEGENERATE_EPS: f64 = f64::EPSILON;

/// Outcome of a sun-triangle solve.
///
/// The azimuth is undefined when the sun stands at the observer's zenith or
/// nadir, or the observer stands at a pole; that case is a variant, not a
/// panic, so callers must branch before using the bearing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SunPosition {
    /// Well-defined bearing.
    Bearing(SunBearing),
    /// Degenerate geometry: altitude is still meaningful, the bearing is not.
    Indeterminate {
        /// Computed altitude in degrees
        altitude: f64,
    },
}

impl SunPosition {
    /// Altitude in degrees, defined in both variants.
    pub fn altitude(&self) -> f64 {
        match self {
            SunPosition::Bearing(b) => b.altitude,
            SunPosition::Indeterminate { altitude } => *altitude,
        }
    }
}

/// Geometric solution of the navigational triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunBearing {
    /// Altitude Hc above the horizon, degrees in `[-90, 90]`
    pub altitude: f64,
    /// Azimuth magnitude, degrees in `[0, 180]`
    pub azimuth: f64,
    /// N/S prefix of the quadrantal azimuth (observer hemisphere)
    pub hemisphere: Cardinal,
    /// E/W suffix of the quadrantal azimuth (side of the meridian)
    pub meridian_side: Cardinal,
    /// True bearing in `[0, 360)`
    pub zn: AzimuthZn,
}

impl SunBearing {
    /// Quadrantal azimuth string, e.g. `"N 83.8° W"`.
    pub fn quadrantal(&self) -> String {
        format!("{} {:.1}° {}", self.hemisphere, self.azimuth, self.meridian_side)
    }
}

/// Solve altitude and true bearing for a latitude/declination/LHA triple.
///
/// All trig is done in radians; inputs and outputs are degrees. Latitude is
/// clamped into `[-90, 90]` first. Inverse-cosine arguments are clamped into
/// `[-1, 1]` so floating-point overshoot never leaves the trig domain. The
/// function never panics.
pub fn solve(latitude: Latitude, declination: Declination, lha: HourAngle) -> SunPosition {
    let latitude = latitude.clamped();
    let lat = latitude.value().to_radians();
    let dec = declination.value().to_radians();
    let t = lha.value().to_radians();

    // cos x = sin(lat)·sin(dec) + cos(lat)·cos(dec)·cos(t), x = co-altitude
    let cos_x = lat.sin() * dec.sin() + lat.cos() * dec.cos() * t.cos();
    let x = cos_x.clamp(-1.0, 1.0).acos().to_degrees();
    let altitude = 90.0 - x;

    // Azimuth from cos(Az) = (sin(dec) − sin(lat)·cos x) / (cos(lat)·sin x).
    // The denominator vanishes with the sun at zenith/nadir or the observer
    // at a pole; there is no bearing to report then.
    let sin_x = x.to_radians().sin();
    let denominator = lat.cos() * sin_x;
    if denominator.abs() < DEGENERATE_EPS {
        return SunPosition::Indeterminate { altitude };
    }

    let cos_az = (dec.sin() - lat.sin() * cos_x) / denominator;
    let azimuth = cos_az.clamp(-1.0, 1.0).acos().to_degrees();

    let hemisphere = if latitude.is_northern() {
        Cardinal::North
    } else {
        Cardinal::South
    };
    let meridian_side = if lha.is_east() {
        Cardinal::East
    } else {
        Cardinal::West
    };

    let zn = match (hemisphere, meridian_side) {
        (Cardinal::North, Cardinal::East) => azimuth,
        (Cardinal::North, _) => 360.0 - azimuth,
        (_, Cardinal::East) => 180.0 - azimuth,
        (_, _) => 180.0 + azimuth,
    };

    SunPosition::Bearing(SunBearing {
        altitude,
        azimuth,
        hemisphere,
        meridian_side,
        zn: AzimuthZn::new(zn),
    })
}
