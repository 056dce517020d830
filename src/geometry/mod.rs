//! .
//!
//! All coordinates are canvas pixels; the origin is in the top-left corner. Positions are
//! [`P2`], displacements are [`V2`]. Both are plain `Copy` values, and every operation
//! returns a new one.

use {
  euclid::{Point2D, Vector2D, Rotation2D, Angle},
  num_traits::Float,
  crate::error::{Error, Result}
};

#[cfg(test)] mod tests;

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2<T = f64> = Point2D<T, PixelSpace>;
pub type V2<T = f64> = Vector2D<T, PixelSpace>;

/// Checked arithmetic on top of `euclid::Vector2D`.
///
/// Addition, subtraction and the Euclidean norm come from euclid itself (`+`, `-`,
/// `length()`). The methods here are the ones that can fail, or that euclid spells
/// differently.
pub trait VectorExt<T: Float>: Sized {
  /// Multiply by `factor`, which must be finite.
  fn scaled(self, factor: T) -> Result<Self>;
  /// Divide by `factor`, which must be finite and non-zero.
  fn divided(self, factor: T) -> Result<Self>;
  /// `atan2(y, x)`, radians.
  fn heading(self) -> T;
  /// Same direction, length 1. Fails with [`Error::DegenerateVector`] on the zero vector.
  fn unit(self) -> Result<Self>;
  /// Counter-clockwise rotation by `radians`, length is preserved.
  fn rotated(self, radians: T) -> Self;
}

impl<T: Float, U> VectorExt<T> for Vector2D<T, U> {
  fn scaled(self, factor: T) -> Result<Self> {
    if !factor.is_finite() {
      return Err(Error::InvalidScaleFactor(factor.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(self * factor)
  }

  fn divided(self, factor: T) -> Result<Self> {
    if !factor.is_finite() || factor.is_zero() {
      return Err(Error::InvalidScaleFactor(factor.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(self / factor)
  }

  fn heading(self) -> T {
    self.y.atan2(self.x)
  }

  fn unit(self) -> Result<Self> {
    let length = self.x.hypot(self.y);
    if length.is_zero() || !length.is_finite() {
      return Err(Error::DegenerateVector);
    }
    self.divided(length)
  }

  fn rotated(self, radians: T) -> Self {
    Rotation2D::<T, U, U>::new(Angle::radians(radians)).transform_vector(self)
  }
}

/// A straight piece of a bolt. Direction matters for the sign of perpendicular offsets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Segment {
  pub start: P2,
  pub end: P2,
}

impl Segment {
  pub fn new(start: P2, end: P2) -> Self {
    Self { start, end }
  }

  pub fn direction(&self) -> V2 {
    self.end - self.start
  }

  pub fn length(&self) -> f64 {
    self.direction().length()
  }

  pub fn midpoint(&self) -> P2 {
    ((self.start.to_vector() + self.end.to_vector()) / 2.0).to_point()
  }

  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }

  /// Bit-exact identity, usable as a hash key.
  pub fn key(&self) -> [u64; 4] {
    [self.start.x, self.start.y, self.end.x, self.end.y].map(f64::to_bits)
  }

  /// `(x0, y0, x1, y1)`
  pub fn to_quadruple(&self) -> [f64; 4] {
    [self.start.x, self.start.y, self.end.x, self.end.y]
  }
}
