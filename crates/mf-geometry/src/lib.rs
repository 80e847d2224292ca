//! `mf-geometry` — spherical geometry primitives for maxfield planning.
//!
//! Callers feed in raw degree coordinates, convert them to radians, and then
//! either project them onto the unit sphere (for Cartesian intersection and
//! triangle tests) or measure great-circle angles between them.  Every
//! operation is a pure function over plain `Copy` values; nothing here does
//! I/O or holds state.
//!
//! # What lives here
//!
//! | Module          | Contents                                                 |
//! |-----------------|----------------------------------------------------------|
//! | [`geo`]         | `GeoPoint` (lat/lon pair, unit is caller's contract)     |
//! | [`units`]       | `degrees_to_radians`, `points_to_radians` (in place)     |
//! | [`cartesian`]   | `CartesianPoint`, `project_to_unit_sphere`, `project_into` |
//! | [`arc`]         | `great_arc_angle`, `EARTH_RADIUS_M`                      |
//! | [`error`]       | `GeoError`, `GeoResult`                                  |
//!
//! # Units
//!
//! `GeoPoint` carries no unit tag.  `points_to_radians` expects degrees; the
//! projection and angle functions expect radians.  Passing degrees where
//! radians are expected silently produces wrong (but finite) results.
//!
//! No operation validates or normalizes its input: latitudes outside ±90°
//! and longitudes outside ±180° flow straight through the trigonometry, and
//! NaN/Inf propagate per IEEE-754.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to `GeoPoint` and           |
//! |         | `CartesianPoint`.                                          |

pub mod arc;
pub mod cartesian;
pub mod error;
pub mod geo;
pub mod units;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use arc::{great_arc_angle, EARTH_RADIUS_M};
pub use cartesian::{project_into, project_to_unit_sphere, CartesianPoint};
pub use error::{GeoError, GeoResult};
pub use geo::GeoPoint;
pub use units::{degrees_to_radians, points_to_radians, radians_to_degrees, RADIANS_PER_DEGREE};
