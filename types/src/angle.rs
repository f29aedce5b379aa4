//! Conversion between decimal degrees and radians

use std::f64::consts::PI;

const RADIANS_IN_DEGREE: f64 = PI / 180.0;

/// Convert an angle in decimal degrees into its radians equivalent.
pub fn to_radians(degrees: f64) -> f64 {
    degrees * RADIANS_IN_DEGREE
}

/// Convert an angle in radians into its decimal degrees equivalent.
pub fn to_degrees(radians: f64) -> f64 {
    radians / RADIANS_IN_DEGREE
}
