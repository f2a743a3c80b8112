//! UTC instant derivation for the ephemeris pipeline.
//!
//! The host form collects a local date, a local time and a whole-hour zone
//! offset; the ephemeris wants a single UTC instant. An optional reduction in
//! seconds backs the lookup instant up to the moment the sight was actually
//! taken (bridge-to-chartroom transmission delay).

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};
use thiserror::Error;

/// Errors from host-supplied date/time text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// Date text is not `YYYY-MM-DD`
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Time text is not `HH:MM` or `HH:MM:SS`
    #[error("Invalid time: {0}")]
    InvalidTime(String),
}

/// Convert a local date/time plus a whole-hour zone offset to UTC.
///
/// The offset follows the navigator's convention of zone description sign:
/// `+8` means the local clock is eight hours ahead of UTC.
pub fn utc_from_local(
    local_date: &str,
    local_time: &str,
    offset_hours: i32,
) -> Result<DateTime<Utc>, TimeError> {
    let date = NaiveDate::parse_from_str(local_date.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::InvalidDate(local_date.to_string()))?;
    let time = parse_time(local_time)?;
    let local = date.and_time(time).and_utc();
    Ok(local - Duration::hours(offset_hours as i64))
}

fn parse_time(text: &str) -> Result<NaiveTime, TimeError> {
    let trimmed = text.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| TimeError::InvalidTime(text.to_string()))
}

/// Instant to look the sun up at: the observed UTC minus a reduction in
/// seconds.
pub fn lookup_instant(observed_utc: DateTime<Utc>, reduction_secs: i64) -> DateTime<Utc> {
    observed_utc - Duration::seconds(reduction_secs)
}

/// Render a lookup instant the way the almanac page is headed.
pub fn format_lookup_instant(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
