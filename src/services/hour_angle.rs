//! Greenwich and local hour angle derivation.
//!
//! Daily almanac pages split the sun's GHA into an hours entry and a
//! minutes/seconds increment, each given as degrees and minutes of arc.
//! Combining them is a plain sum; the local hour angle then folds the
//! observer's longitude in and wraps into the canonical `(-180, 180]` range.

use crate::models::angle::{parse_angle_field, HourAngle, Longitude};

/// Combine the almanac's four GHA fields into decimal degrees.
///
/// `(hour_deg + hour_min/60) + (ms_deg + ms_min/60)`. No wrapping: the
/// magnitude is whatever the almanac tabulates. Unparsable fields are 0.
pub fn combine_gha(hour_deg: &str, hour_min: &str, ms_deg: &str, ms_min: &str) -> f64 {
    let hours_part = parse_angle_field(hour_deg) + parse_angle_field(hour_min) / 60.0;
    let increment_part = parse_angle_field(ms_deg) + parse_angle_field(ms_min) / 60.0;
    hours_part + increment_part
}

/// Local hour angle from a combined GHA and the observer longitude.
pub fn local_hour_angle(gha: f64, longitude: Longitude) -> HourAngle {
    HourAngle::from_gha_and_longitude(gha, longitude)
}
