//! Sight-reduction facade.
//!
//! Orchestrates one calculation request end to end: raw form values through
//! angle conversion and hour-angle derivation, the triangle solve, the error
//! comparison, and the output formatting. Two pipelines converge on the same
//! core: almanac-entered GHA/DEC, or GHA/DEC supplied by the ephemeris
//! collaborator for a UTC instant.

use log::debug;

use crate::api::{AlmanacSight, EphemerisSight, SightReduction};
use crate::ephemeris::SolarEphemeris;
use crate::models::angle::{parse_angle_field, AzimuthZn, Declination, HourAngle, Latitude, Longitude};
use crate::services::gyro_error;
use crate::services::hour_angle::{combine_gha, local_hour_angle};
use crate::services::sun_position::{self, SunPosition};

/// How a degree value is rendered in the output.
#[derive(Clone, Copy)]
enum AngleStyle {
    /// `"287.5°"` — almanac pipeline
    Decimal,
    /// `"287°31.8'"` — ephemeris pipeline
    DegreeMinutes,
}

impl AngleStyle {
    fn render(self, value: f64) -> String {
        match self {
            AngleStyle::Decimal => format_decimal(value),
            AngleStyle::DegreeMinutes => format_degree_minutes(value),
        }
    }
}

fn format_decimal(value: f64) -> String {
    format!("{:.1}°", value)
}

fn format_degree_minutes(value: f64) -> String {
    let whole = value.trunc();
    let minutes = (value.abs() - whole.abs()) * 60.0;
    format!("{}°{:.1}'", whole as i64, minutes)
}

/// Reduce a sight whose GHA and declination were entered from the almanac.
pub fn reduce_almanac_sight(sight: &AlmanacSight) -> SightReduction {
    let latitude = Latitude::from_sexagesimal(
        &sight.lat_degrees,
        &sight.lat_minutes,
        sight.lat_hemisphere,
    );
    let longitude = Longitude::from_sexagesimal(
        &sight.lon_degrees,
        &sight.lon_minutes,
        sight.lon_hemisphere,
    );

    let gha = combine_gha(
        &sight.gha_hour_degrees,
        &sight.gha_hour_minutes,
        &sight.gha_increment_degrees,
        &sight.gha_increment_minutes,
    );

    let correction = parse_angle_field(sight.dec_correction.as_deref().unwrap_or(""));
    let declination =
        Declination::from_sexagesimal(&sight.dec_degrees, &sight.dec_minutes, sight.dec_hemisphere)
            .with_correction_minutes(correction);

    let lha = local_hour_angle(gha, longitude);
    let position = sun_position::solve(latitude, declination, lha);
    debug!(
        "almanac sight: gha={:.4} lha={:.4} dec={:.4}",
        gha,
        lha.value(),
        declination.value()
    );

    build_reduction(
        position,
        sight.gyro_azimuth,
        lha,
        gha,
        declination,
        AngleStyle::Decimal,
    )
}

/// Reduce a sight whose GHA and declination come from the ephemeris
/// collaborator for the observed UTC instant.
pub fn reduce_ephemeris_sight<E: SolarEphemeris>(
    sight: &EphemerisSight,
    ephemeris: &E,
) -> SightReduction {
    let latitude = Latitude::from_sexagesimal(
        &sight.lat_degrees,
        &sight.lat_minutes,
        sight.lat_hemisphere,
    );
    let longitude = Longitude::from_sexagesimal(
        &sight.lon_degrees,
        &sight.lon_minutes,
        sight.lon_hemisphere,
    );

    let coords = ephemeris.sun_coordinates(sight.observed_utc);
    let declination = Declination::new(coords.declination);
    let lha = local_hour_angle(coords.gha, longitude);
    let position = sun_position::solve(latitude, declination, lha);
    debug!(
        "ephemeris sight at {}: gha={:.4} lha={:.4} dec={:.4}",
        sight.observed_utc,
        coords.gha,
        lha.value(),
        coords.declination
    );

    build_reduction(
        position,
        sight.gyro_azimuth,
        lha,
        coords.gha,
        declination,
        AngleStyle::DegreeMinutes,
    )
}

fn build_reduction(
    position: SunPosition,
    gyro_reading: f64,
    lha: HourAngle,
    gha: f64,
    declination: Declination,
    style: AngleStyle,
) -> SightReduction {
    let (zn, altitude, azimuth, azimuth_formatted) = match position {
        SunPosition::Bearing(bearing) => (
            bearing.zn,
            bearing.altitude,
            Some(bearing.azimuth),
            bearing.quadrantal(),
        ),
        // no bearing exists; Zn falls back to 0 in the formatted output
        SunPosition::Indeterminate { altitude } => {
            (AzimuthZn::new(0.0), altitude, None, "indeterminate".to_string())
        }
    };

    let error = gyro_error::evaluate(zn, gyro_reading);

    SightReduction {
        gyro_error: error.to_string(),
        absolute_error: error.magnitude,
        true_azimuth: format_decimal(zn.value()),
        local_hour_angle: style.render(lha.value()),
        altitude: format_decimal(altitude),
        azimuth,
        azimuth_formatted,
        gha_total: style.render(gha),
        dec_total: style.render(declination.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::SunCoordinates;
    use crate::models::angle::Cardinal;
    use chrono::{TimeZone, Utc};

    fn reference_sight() -> AlmanacSight {
        AlmanacSight {
            lat_degrees: "31".into(),
            lat_minutes: "25.0".into(),
            lat_hemisphere: Cardinal::North,
            lon_degrees: "132".into(),
            lon_minutes: "3.1".into(),
            lon_hemisphere: Cardinal::East,
            gha_hour_degrees: "283".into(),
            gha_hour_minutes: "50.3".into(),
            gha_increment_degrees: "3".into(),
            gha_increment_minutes: "41.5".into(),
            dec_degrees: "22".into(),
            dec_minutes: "45.1".into(),
            dec_hemisphere: Cardinal::North,
            dec_correction: None,
            gyro_azimuth: 276.5,
        }
    }

    #[test]
    fn test_reference_almanac_reduction() {
        let result = reduce_almanac_sight(&reference_sight());
        assert_eq!(result.gyro_error, "0.3° W");
        assert!((result.absolute_error - 0.28).abs() < 0.02);
        assert_eq!(result.true_azimuth, "276.2°");
        assert_eq!(result.local_hour_angle, "59.6°");
        assert_eq!(result.altitude, "36.9°");
        assert_eq!(result.gha_total, "287.5°");
        assert_eq!(result.dec_total, "22.8°");
        assert_eq!(result.azimuth_formatted, "N 83.8° W");
        assert!((result.azimuth.unwrap() - 83.78).abs() < 0.05);
    }

    #[test]
    fn test_declination_correction_shifts_total() {
        let mut sight = reference_sight();
        sight.dec_correction = Some("6.0".to_string());
        let result = reduce_almanac_sight(&sight);
        // 22°45.1' + 6.0' = 22.8517° -> still rounds to 22.9
        assert_eq!(result.dec_total, "22.9°");
    }

    #[test]
    fn test_blank_sight_is_all_zeros_not_a_panic() {
        let sight = AlmanacSight {
            lat_degrees: String::new(),
            lat_minutes: String::new(),
            lat_hemisphere: Cardinal::North,
            lon_degrees: String::new(),
            lon_minutes: String::new(),
            lon_hemisphere: Cardinal::East,
            gha_hour_degrees: String::new(),
            gha_hour_minutes: String::new(),
            gha_increment_degrees: String::new(),
            gha_increment_minutes: String::new(),
            dec_degrees: String::new(),
            dec_minutes: String::new(),
            dec_hemisphere: Cardinal::North,
            dec_correction: None,
            gyro_azimuth: 0.0,
        };
        // lat 0, dec 0, lha 0: degenerate geometry, still a clean result
        let result = reduce_almanac_sight(&sight);
        assert_eq!(result.azimuth, None);
        assert_eq!(result.azimuth_formatted, "indeterminate");
        assert_eq!(result.true_azimuth, "0.0°");
        assert_eq!(result.altitude, "90.0°");
        assert_eq!(result.gyro_error, "0.0° E");
    }

    #[test]
    fn test_ephemeris_pipeline_matches_manual_core() {
        // a stub collaborator pins the GHA/DEC; the pipelines must agree
        struct FixedSun;
        impl SolarEphemeris for FixedSun {
            fn sun_coordinates(&self, _: chrono::DateTime<Utc>) -> SunCoordinates {
                SunCoordinates {
                    gha: 287.53,
                    declination: 22.7516666667,
                }
            }
        }

        let sight = EphemerisSight {
            lat_degrees: "31".into(),
            lat_minutes: "25.0".into(),
            lat_hemisphere: Cardinal::North,
            lon_degrees: "132".into(),
            lon_minutes: "3.1".into(),
            lon_hemisphere: Cardinal::East,
            observed_utc: Utc.with_ymd_and_hms(2025, 8, 13, 0, 0, 0).unwrap(),
            gyro_azimuth: 276.5,
        };
        let result = reduce_ephemeris_sight(&sight, &FixedSun);

        let manual = reduce_almanac_sight(&reference_sight());
        assert_eq!(result.gyro_error, manual.gyro_error);
        assert_eq!(result.true_azimuth, manual.true_azimuth);
        assert!((result.absolute_error - manual.absolute_error).abs() < 1e-9);
    }

    #[test]
    fn test_ephemeris_pipeline_degree_minute_rendering() {
        struct FixedSun;
        impl SolarEphemeris for FixedSun {
            fn sun_coordinates(&self, _: chrono::DateTime<Utc>) -> SunCoordinates {
                SunCoordinates {
                    gha: 287.53,
                    declination: 22.7516666667,
                }
            }
        }

        let sight = EphemerisSight {
            lat_degrees: "31".into(),
            lat_minutes: "25.0".into(),
            lat_hemisphere: Cardinal::North,
            lon_degrees: "132".into(),
            lon_minutes: "3.1".into(),
            lon_hemisphere: Cardinal::East,
            observed_utc: Utc.with_ymd_and_hms(2025, 8, 13, 0, 0, 0).unwrap(),
            gyro_azimuth: 276.5,
        };
        let result = reduce_ephemeris_sight(&sight, &FixedSun);
        assert_eq!(result.gha_total, "287°31.8'");
        assert_eq!(result.dec_total, "22°45.1'");
        assert_eq!(result.local_hour_angle, "59°34.9'");
        // azimuth outputs stay decimal in both pipelines
        assert_eq!(result.true_azimuth, "276.2°");
        assert_eq!(result.altitude, "36.9°");
    }

    #[test]
    fn test_format_degree_minutes_negative_value() {
        assert_eq!(format_degree_minutes(-12.5), "-12°30.0'");
        assert_eq!(format_degree_minutes(0.25), "0°15.0'");
    }
}
