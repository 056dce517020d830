//! Errors of the geometry layer.
//!
//! Only [`Error::InvalidScaleFactor`] and [`Error::InvalidConfig`] abort bolt construction.
//! A degenerate vector inside the subdivider means "no displacement", and a short main bolt
//! caps the branch count instead of failing.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
  /// Normalization of a vector with zero (or non-finite) length.
  DegenerateVector,
  /// Scaling or dividing by a factor that is not a finite number, or dividing by zero.
  InvalidScaleFactor(f64),
  /// More distinct branch roots were requested than the bolt has segments.
  InsufficientDistinctSegments {
    requested: usize,
    available: usize
  },
  InvalidConfig(&'static str),
}

impl fmt::Display for Error {
  fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
    use Error::*;
    match *self {
      DegenerateVector => fmt.write_str("cannot normalize a zero-length vector"),
      InvalidScaleFactor(factor) => write!(fmt, "invalid scale factor: {}", factor),
      InsufficientDistinctSegments { requested, available } => write!(
        fmt, "requested {} distinct segments, only {} available", requested, available
      ),
      InvalidConfig(reason) => write!(fmt, "invalid bolt configuration: {}", reason),
    }
  }
}

impl std::error::Error for Error {}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;
