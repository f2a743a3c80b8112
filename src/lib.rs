//! # Gyrocompass Error from a Sun Sight
//!
//! Computes gyrocompass error from a celestial azimuth observation of the
//! sun. Given the observer's position, the sun's Greenwich hour angle and
//! declination (entered from a nautical almanac or supplied by an ephemeris),
//! and the bearing the gyro repeater showed, the crate returns the sun's
//! true bearing Zn, the signed compass error with its E/W label, and the
//! intermediate angles of the reduction.
//!
//! ## Features
//!
//! - **Angle conversion**: degree/minute/hemisphere form text to signed
//!   decimal degrees, with per-unit wrapper types so latitude, longitude,
//!   LHA and Zn cannot be mixed up
//! - **Hour angles**: almanac GHA combination and local hour angle derivation
//! - **Sight reduction**: spherical-triangle solve for altitude and azimuth,
//!   reduced to a full-circle true bearing
//! - **Error evaluation**: wrapped, signed comparison against the gyro
//!   reading
//! - **Ephemeris seam**: a trait for external GHA/DEC providers plus a
//!   built-in low-precision solar ephemeris
//!
//! ## Architecture
//!
//! - [`api`]: serde DTOs mirroring the host form and the formatted result
//! - [`models`]: angle and time value types
//! - [`services`]: the pure computation pipeline and its facade
//! - [`ephemeris`]: the solar ephemeris collaborator
//!
//! The whole crate is synchronous, side-effect-free computation over by-value
//! inputs; every public function is safe to call from any number of threads.

pub mod api;

pub mod ephemeris;

pub mod models;

pub mod services;
