//! Value types shared across the sight-reduction services.

pub mod angle;

pub mod time;

pub use angle::{
    to_decimal_degrees, wrap_180, wrap_360, AzimuthZn, Cardinal, Declination, HourAngle, Latitude,
    Longitude,
};
pub use time::{format_lookup_instant, lookup_instant, utc_from_local, TimeError};
