//! Geographic coordinate type.
//!
//! `GeoPoint` is a bare latitude/longitude pair.  Whether the fields hold
//! degrees or radians depends on where the value came from: user input is
//! normally degrees, everything downstream of [`points_to_radians`] is
//! radians.  Name your bindings accordingly (`portal_deg`, `anchor_rad`).
//!
//! [`points_to_radians`]: crate::points_to_radians

use std::str::FromStr;

use crate::{
    arc::great_arc_angle,
    units::{degrees_to_radians, radians_to_degrees},
    CartesianPoint, GeoError,
};

/// A latitude/longitude pair in double precision.  The unit is not tracked.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// This point (in degrees) converted to radians.
    #[inline]
    pub fn to_radians(self) -> Self {
        Self::new(degrees_to_radians(self.lat), degrees_to_radians(self.lon))
    }

    /// This point (in radians) converted to degrees.
    #[inline]
    pub fn to_degrees(self) -> Self {
        Self::new(radians_to_degrees(self.lat), radians_to_degrees(self.lon))
    }

    /// Position on the unit sphere.  `self` must be in radians.
    ///
    /// Latitude is measured from the equatorial plane, so the north pole maps
    /// to `+z` and `(0, 0)` maps to `+x`.
    #[inline]
    pub fn to_unit_sphere(self) -> CartesianPoint {
        let (sin_lat, cos_lat) = self.lat.sin_cos();
        let (sin_lon, cos_lon) = self.lon.sin_cos();
        CartesianPoint::new(cos_lon * cos_lat, sin_lon * cos_lat, sin_lat)
    }

    /// Great-circle angle to `other` in radians.  Both points in radians.
    #[inline]
    pub fn arc_angle_to(self, other: GeoPoint) -> f64 {
        great_arc_angle(self, other)
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"`, optionally wrapped in parentheses, so the output of
/// `Display` reads back.  Values are taken as-is; no range checks.
impl FromStr for GeoPoint {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        let (lat, lon) = inner
            .split_once(',')
            .ok_or_else(|| GeoError::Parse(format!("expected \"lat,lon\", got {s:?}")))?;

        let parse = |field: &str, name: &str| {
            field
                .trim()
                .parse::<f64>()
                .map_err(|e| GeoError::Parse(format!("bad {name} {:?}: {e}", field.trim())))
        };

        Ok(Self::new(parse(lat, "latitude")?, parse(lon, "longitude")?))
    }
}
