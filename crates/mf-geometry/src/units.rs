//! Degree/radian conversion.

use std::f64::consts::PI;

use tracing::trace;

use crate::GeoPoint;

/// Multiplier taking degrees to radians.
pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;

const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// `value` degrees in radians: exactly `value * (π / 180)` with ordinary
/// floating-point rounding of that one multiplication.
#[inline]
pub fn degrees_to_radians(value: f64) -> f64 {
    value * RADIANS_PER_DEGREE
}

/// `value` radians in degrees.
#[inline]
pub fn radians_to_degrees(value: f64) -> f64 {
    value * DEGREES_PER_RADIAN
}

/// Converts every point in `points` from degrees to radians **in place**.
///
/// Both coordinates of each element are rewritten; length and order are
/// untouched and nothing is allocated.  After the call the buffer holds
/// radians only, so keep a copy if the degree values are still needed.
pub fn points_to_radians(points: &mut [GeoPoint]) {
    trace!(count = points.len(), "converting points to radians");
    for p in points.iter_mut() {
        p.lat = degrees_to_radians(p.lat);
        p.lon = degrees_to_radians(p.lon);
    }
}
