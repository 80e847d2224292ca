//! Unit-sphere Cartesian coordinates and the lat/lon → XYZ projection.
//!
//! Axes follow the usual Earth-centred convention:
//!
//! * `+x` points at latitude 0, longitude 0
//! * `+y` points at latitude 0, longitude +90°
//! * `+z` points at the north pole
//!
//! Projected points have norm 1 up to rounding.

use tracing::{debug, trace};

use crate::{GeoError, GeoPoint, GeoResult};

/// A rectilinear `(x, y, z)` triple.  Produced by projection onto the unit
/// sphere, but the vector helpers work for any length.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CartesianPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl CartesianPoint {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn dot(self, other: CartesianPoint) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[inline]
    pub fn cross(self, other: CartesianPoint) -> CartesianPoint {
        CartesianPoint {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean length.
    #[inline]
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Angle between the two vectors in radians, in `[0, π]`.
    ///
    /// Uses `atan2(|a × b|, a · b)` rather than `acos` of the normalised dot
    /// product, which keeps full precision for nearly parallel vectors.  For
    /// unit-sphere points this is the great-circle angle.
    pub fn angle_to(self, other: CartesianPoint) -> f64 {
        self.cross(other).norm().atan2(self.dot(other))
    }

    /// Inverse projection: the radian lat/lon this vector points at.
    ///
    /// The vector need not be normalised.  The origin maps to `(0, 0)`.
    pub fn to_geo(self) -> GeoPoint {
        let lat = self.z.atan2(self.x.hypot(self.y));
        let lon = self.y.atan2(self.x);
        GeoPoint::new(lat, lon)
    }
}

impl std::fmt::Display for CartesianPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6})", self.x, self.y, self.z)
    }
}

/// Projects radian lat/lon points onto the unit sphere.
///
/// For each point, with `r = cos(lat)`: `x = cos(lon)·r`, `y = sin(lon)·r`,
/// `z = sin(lat)`.  Inputs must already be radians; nothing is converted or
/// range-checked.  The result has one entry per input, in input order.
pub fn project_to_unit_sphere(points: &[GeoPoint]) -> Vec<CartesianPoint> {
    trace!(count = points.len(), "projecting points onto unit sphere");
    points.iter().map(|p| p.to_unit_sphere()).collect()
}

/// Same projection as [`project_to_unit_sphere`], written into `out`.
///
/// `out` must be exactly as long as `points`; otherwise
/// [`GeoError::LengthMismatch`] is returned and `out` is left untouched.
pub fn project_into(points: &[GeoPoint], out: &mut [CartesianPoint]) -> GeoResult<()> {
    if points.len() != out.len() {
        debug!(points = points.len(), out = out.len(), "projection buffer length mismatch");
        return Err(GeoError::LengthMismatch {
            points: points.len(),
            out: out.len(),
        });
    }

    trace!(count = points.len(), "projecting points into caller buffer");
    for (slot, p) in out.iter_mut().zip(points) {
        *slot = p.to_unit_sphere();
    }
    Ok(())
}
