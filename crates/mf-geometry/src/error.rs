//! Crate error type.
//!
//! The geometry itself is total; only the buffer-filling projection and
//! text parsing can fail.

use thiserror::Error;

/// Errors produced by `mf-geometry`.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("output buffer holds {out} points but {points} were supplied")]
    LengthMismatch { points: usize, out: usize },

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `mf-geometry`.
pub type GeoResult<T> = Result<T, GeoError>;
