//! Sight-reduction services.
//!
//! Each service is a pure function of its inputs; the calculation facade
//! orchestrates them for one request. Nothing here holds state between calls.

pub mod calculation;

pub mod gyro_error;

pub mod hour_angle;

pub mod sun_position;

pub use calculation::{reduce_almanac_sight, reduce_ephemeris_sight};
pub use gyro_error::GyroError;
pub use sun_position::{SunBearing, SunPosition};
