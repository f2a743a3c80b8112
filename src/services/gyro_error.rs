//! Gyrocompass error from the computed true bearing.
//!
//! Compass error is the signed difference between the sun's true bearing and
//! the bearing the gyro repeater showed at the same instant, wrapped into a
//! half circle and labelled E (gyro reads low) or W (gyro reads high).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::angle::{wrap_180, AzimuthZn, Cardinal};

/// Signed, wrapped gyrocompass error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GyroError {
    /// Zn − gyro wrapped into `[-180, 180]`, degrees
    pub normalized: f64,
    /// `|normalized|`, degrees
    pub magnitude: f64,
    /// E when normalized ≥ 0, otherwise W
    pub direction: Cardinal,
}

impl fmt::Display for GyroError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:.1}° {}", self.magnitude, self.direction)
    }
}

/// Compare the computed true bearing against the observed gyro reading.
///
/// Pure function of two finite numbers; the gyro reading is not
/// range-restricted on input.
pub fn evaluate(true_bearing: AzimuthZn, gyro_reading: f64) -> GyroError {
    let normalized = wrap_180(true_bearing.value() - gyro_reading);
    let direction = if normalized >= 0.0 {
        Cardinal::East
    } else {
        Cardinal::West
    };
    GyroError {
        normalized,
        magnitude: normalized.abs(),
        direction,
    }
}
