//! Midpoint displacement of a single segment.

use {
  crate::{
    error::{Error, Result},
    geometry::{Segment, VectorExt}
  },
  rand::Rng,
  std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI}
};

/// Inline forking while subdividing: a split segment `(a, b)` with displaced midpoint `m`
/// may grow an extra segment `(m, m + rotate(m - a, φ) * length_scale)`.
///
/// With `Default` values, roughly one split in five forks.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ForkRules {
  /// Probability of a fork at each split, `[0, 1]`.
  pub likelihood: f64,
  /// Radians.
  pub min_angle: f64,
  /// Radians.
  pub max_angle: f64,
  /// Fork length relative to `m - a`.
  pub length_scale: f64,
}

impl Default for ForkRules {
  fn default() -> Self {
    Self {
      likelihood: 0.2,
      min_angle: PI / 9.0,
      max_angle: FRAC_PI_3,
      length_scale: 0.7,
    }
  }
}

impl ForkRules {
  pub fn validate(&self) -> Result<()> {
    if !(0.0..=1.0).contains(&self.likelihood) {
      return Err(Error::InvalidConfig("fork likelihood must be within [0, 1]"));
    }
    if !self.min_angle.is_finite() || !self.max_angle.is_finite() || self.min_angle > self.max_angle {
      return Err(Error::InvalidConfig("fork angles must be finite, min <= max"));
    }
    if !self.length_scale.is_finite() {
      return Err(Error::InvalidConfig("fork length scale must be finite"));
    }
    Ok(())
  }
}

/// Source of perturbation for [`Subdivider`].
pub trait Jitter {
  /// Perpendicular displacement of a midpoint, within `[-offset, offset]`.
  fn displacement(&mut self, offset: f64) -> f64;
  /// Angle of the fork growing out of the current split, if any.
  fn fork(&mut self, _rules: &ForkRules) -> Option<f64> { None }
}

/// Any `FnMut(offset) -> displacement` is a jitter that never forks.
impl<F: FnMut(f64) -> f64> Jitter for F {
  fn displacement(&mut self, offset: f64) -> f64 {
    self(offset)
  }
}

/// Uniformly distributed displacements and fork angles, drawn from `R`.
pub struct UniformJitter<'a, R: ?Sized>(pub &'a mut R);

impl<R: Rng + ?Sized> Jitter for UniformJitter<'_, R> {
  fn displacement(&mut self, offset: f64) -> f64 {
    if offset > 0.0 {
      self.0.gen_range(-offset..=offset)
    } else {
      0.0
    }
  }

  fn fork(&mut self, rules: &ForkRules) -> Option<f64> {
    self.0.gen_bool(rules.likelihood)
      .then(|| self.0.gen_range(rules.min_angle..=rules.max_angle))
  }
}

/// Refines one straight segment into a jagged polyline.
///
/// Every round splits each segment at its midpoint and pushes the midpoint along the unit
/// perpendicular by a displacement bounded by the current offset; the offset halves after
/// each round. Without forking, `rounds` rounds yield exactly `2^rounds` segments, ordered
/// from `start` to `end`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Subdivider {
  max_offset: f64,
  rounds: u32,
  fork: Option<ForkRules>,
}

impl Subdivider {
  /// `max_offset` must be finite and non-negative, and `2^rounds` must fit a `usize`.
  pub fn new(max_offset: f64, rounds: u32) -> Result<Self> {
    if !max_offset.is_finite() || max_offset < 0.0 {
      return Err(Error::InvalidConfig("initial offset must be finite and non-negative"));
    }
    if rounds >= usize::BITS {
      return Err(Error::InvalidConfig("too many refinement rounds"));
    }
    Ok(Self { max_offset, rounds, fork: None })
  }

  pub fn with_fork(self, fork: Option<ForkRules>) -> Result<Self> {
    if let Some(rules) = &fork {
      rules.validate()?;
    }
    Ok(Self { fork, ..self })
  }

  pub fn max_offset(&self) -> f64 {
    self.max_offset
  }

  pub fn rounds(&self) -> u32 {
    self.rounds
  }

  pub fn fork(&self) -> Option<&ForkRules> {
    self.fork.as_ref()
  }

  pub fn run(&self, segment: Segment, jitter: &mut impl Jitter) -> Vec<Segment> {
    let mut segments = vec![segment];
    let mut offset = self.max_offset;

    for round in 0..self.rounds {
      let mut refined = Vec::with_capacity(segments.len() * 2);
      for segment in segments {
        self.split(segment, offset, jitter, &mut refined);
      }
      log::trace!("round {}: offset {}, {} segments", round, offset, refined.len());
      segments = refined;
      offset /= 2.0;
    }
    segments
  }

  fn split(&self, segment: Segment, offset: f64, jitter: &mut impl Jitter, out: &mut Vec<Segment>) {
    let Segment { start, end } = segment;
    let mut mid = segment.midpoint();

    // zero-length segments are split in place, without displacement
    if let Ok(unit) = segment.direction().unit() {
      let perpendicular = unit.rotated(FRAC_PI_2);
      mid += perpendicular * jitter.displacement(offset);
    }

    out.push(Segment::new(start, mid));
    out.push(Segment::new(mid, end));

    if let Some(rules) = &self.fork {
      if let Some(angle) = jitter.fork(rules) {
        let direction = mid - start;
        let fork_end = mid + direction.rotated(angle) * rules.length_scale;
        out.push(Segment::new(mid, fork_end));
      }
    }
  }
}
