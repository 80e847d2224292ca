//! Great-circle angle between two lat/lon points.

use crate::GeoPoint;

/// Mean Earth radius in metres.  Multiply an arc angle by this to get a
/// surface distance.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle angle between `a` and `b` in radians, in `[0, π]`.
///
/// Both points must be in radians.  This is the Vincenty special case for a
/// sphere, evaluated as `atan2(numerator, denominator)`:
///
/// ```text
/// Δλ    = |λa − λb|
/// num   = √( (cos φb · sin Δλ)² + (cos φa · sin φb − sin φa · cos φb · cos Δλ)² )
/// denom = sin φa · sin φb + cos φa · cos φb · cos Δλ
/// ```
///
/// The spherical law of cosines (`acos` of a dot product) loses most of its
/// digits when the points are metres apart on an Earth-sized sphere; this form
/// does not.  The numerator is never negative, so the result stays in
/// `[0, π]` for finite input.
pub fn great_arc_angle(a: GeoPoint, b: GeoPoint) -> f64 {
    let delta_lon = (a.lon - b.lon).abs();
    let (sin_d, cos_d) = delta_lon.sin_cos();
    let (sin_a, cos_a) = a.lat.sin_cos();
    let (sin_b, cos_b) = b.lat.sin_cos();

    let part1 = cos_b * sin_d;
    let part2 = cos_a * sin_b - sin_a * cos_b * cos_d;
    let numer = (part1 * part1 + part2 * part2).sqrt();
    let denom = sin_a * sin_b + cos_a * cos_b * cos_d;

    numer.atan2(denom)
}
