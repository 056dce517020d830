//! Bolt construction.
//!
//! A [`Bolt`] is built from a straight `origin → tail` line by the [`Subdivider`], with a
//! number of refinement rounds proportional to the line's length. [`build_branches`] grows
//! shorter bolts out of a finished one, and [`Lightning`] ties both together.

use {
  crate::{
    error::{Error, Result},
    geometry::{P2, Segment}
  },
  rand::Rng,
  std::{f64::consts::FRAC_PI_6, ops::RangeInclusive}
};

pub mod subdivision;
pub mod branch;

pub use {
  subdivision::{Subdivider, ForkRules, Jitter, UniformJitter},
  branch::{build_branches, sample_distinct}
};

/// An ordered, immutable sequence of segments with a stroke intensity.
///
/// Segment order follows the subdivision, not the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Bolt {
  segments: Vec<Segment>,
  intensity: u32,
}

impl Bolt {
  pub fn new(segments: Vec<Segment>, intensity: u32) -> Self {
    Self { segments, intensity }
  }

  pub fn segments(&self) -> &[Segment] {
    &self.segments
  }

  /// Stroke width at render time, at least 1.
  pub fn intensity(&self) -> u32 {
    self.intensity
  }

  pub fn with_intensity(self, intensity: u32) -> Self {
    Self { intensity, ..self }
  }

  pub fn len(&self) -> usize {
    self.segments.len()
  }

  pub fn is_empty(&self) -> bool {
    self.segments.is_empty()
  }
}

/// Generation parameters, with defaults of the classic look.
#[derive(Debug, Clone, PartialEq)]
pub struct BoltConfig {
  /// Maximum displacement of the first refinement round, pixels.
  pub initial_offset: f64,
  /// One refinement round per this many pixels of bolt length.
  pub refinement_step: f64,
  pub max_refinement: Option<u32>,
  pub main_intensity: u32,
  pub branch_intensity: u32,
  /// Number of branches spawned per bolt, before capping.
  pub branch_count: RangeInclusive<usize>,
  /// Magnitude of the branch deflection, radians; the sign is random.
  pub branch_angle: f64,
  /// Levels of branching: 0 disables branches, 1 branches the main bolt only.
  pub branch_depth: u32,
  pub fork: Option<ForkRules>,
}

impl Default for BoltConfig {
  fn default() -> Self {
    Self {
      initial_offset: 100.0,
      refinement_step: 80.0,
      max_refinement: None,
      main_intensity: 3,
      branch_intensity: 2,
      branch_count: 3..=6,
      branch_angle: FRAC_PI_6,
      branch_depth: 1,
      fork: None,
    }
  }
}

impl BoltConfig {
  pub fn validate(&self) -> Result<()> {
    let fail = |reason: &'static str| -> Result<()> { Err(Error::InvalidConfig(reason)) };
    if !self.initial_offset.is_finite() || self.initial_offset < 0.0 {
      return fail("initial offset must be finite and non-negative");
    }
    if !self.refinement_step.is_finite() || self.refinement_step <= 0.0 {
      return fail("refinement step must be positive");
    }
    if self.main_intensity == 0 || self.branch_intensity == 0 {
      return fail("intensity must be at least 1");
    }
    if self.branch_count.is_empty() {
      return fail("branch count range is empty");
    }
    if !self.branch_angle.is_finite() {
      return fail("branch angle must be finite");
    }
    match &self.fork {
      Some(fork) => fork.validate(),
      None => Ok(())
    }
  }
}

/// Number of subdivision rounds for a straight `origin → tail` line.
///
/// Saturates at `u32::MAX` for non-finite or enormous lengths; [`build_bolt`] rejects those.
pub fn refinement_limit(origin: P2, tail: P2, config: &BoltConfig) -> u32 {
  let rounds = ((tail - origin).length() / config.refinement_step).floor() as u32;
  match config.max_refinement {
    Some(max) => rounds.min(max),
    None => rounds
  }
}

/// Build a bolt of `config.branch_intensity`, displacing midpoints with `jitter`.
pub fn build_bolt_with(origin: P2, tail: P2, config: &BoltConfig, jitter: &mut impl Jitter) -> Result<Bolt> {
  config.validate()?;
  if ![origin.x, origin.y, tail.x, tail.y].iter().all(|c| c.is_finite()) {
    return Err(Error::InvalidConfig("bolt endpoints must be finite"));
  }
  let rounds = refinement_limit(origin, tail, config);
  let segments = Subdivider::new(config.initial_offset, rounds)?
    .with_fork(config.fork)?
    .run(Segment::new(origin, tail), jitter);
  log::debug!(
    "bolt ({:.1}, {:.1}) -> ({:.1}, {:.1}): {} rounds, {} segments",
    origin.x, origin.y, tail.x, tail.y, rounds, segments.len()
  );
  Ok(Bolt::new(segments, config.branch_intensity))
}

/// Build a bolt of `config.branch_intensity` with uniformly random displacements.
pub fn build_bolt<R: Rng + ?Sized>(origin: P2, tail: P2, config: &BoltConfig, rng: &mut R) -> Result<Bolt> {
  build_bolt_with(origin, tail, config, &mut UniformJitter(rng))
}

/// Main bolt plus branches, built from one configuration.
#[derive(Debug, Clone, Default)]
pub struct Lightning {
  config: BoltConfig,
}

impl Lightning {
  pub fn new(config: BoltConfig) -> Result<Self> {
    config.validate()?;
    Ok(Self { config })
  }

  pub fn config(&self) -> &BoltConfig {
    &self.config
  }

  /// The main bolt, at `config.main_intensity`.
  pub fn main_bolt<R: Rng + ?Sized>(&self, origin: P2, tail: P2, rng: &mut R) -> Result<Bolt> {
    Ok(build_bolt(origin, tail, &self.config, rng)?
      .with_intensity(self.config.main_intensity))
  }

  /// One level of branches out of `main`, see [`build_branches`].
  pub fn branches<R: Rng + ?Sized>(&self, main: &Bolt, origin: P2, tail: P2, rng: &mut R) -> Result<Vec<Bolt>> {
    build_branches(main, origin, tail, &self.config, rng)
  }

  /// The main bolt first, followed by `config.branch_depth` generations of branches.
  /// Each branch serves as origin and tail of its own sub-branches.
  pub fn strike<R: Rng + ?Sized>(&self, origin: P2, tail: P2, rng: &mut R) -> Result<Vec<Bolt>> {
    let mut bolts = vec![];
    let mut generation = vec![(self.main_bolt(origin, tail, rng)?, origin, tail)];

    for depth in 0..self.config.branch_depth {
      let mut next = vec![];
      for (bolt, origin, tail) in &generation {
        next.extend(branch::spawn(bolt, *origin, *tail, &self.config, rng)?);
      }
      log::debug!("branch generation {}: {} bolts", depth + 1, next.len());
      bolts.extend(generation.into_iter().map(|(bolt, ..)| bolt));
      generation = next;
    }
    bolts.extend(generation.into_iter().map(|(bolt, ..)| bolt));
    Ok(bolts)
  }
}
