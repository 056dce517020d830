//! Offshoot bolts rooted along a finished bolt.

use {
  super::{build_bolt, Bolt, BoltConfig},
  crate::{
    error::{Error, Result},
    geometry::{P2, V2, Segment, VectorExt}
  },
  itertools::Itertools,
  rand::{Rng, seq::SliceRandom}
};

/// Pick `count` distinct segments of `bolt`, without replacement.
///
/// Segments are distinct by value; repeated copies of a segment count once.
pub fn sample_distinct<'a, R: Rng + ?Sized>(bolt: &'a Bolt, count: usize, rng: &mut R) -> Result<Vec<&'a Segment>> {
  let distinct = bolt.segments().iter()
    .unique_by(|segment| segment.key())
    .collect::<Vec<_>>();
  if distinct.len() < count {
    return Err(Error::InsufficientDistinctSegments { requested: count, available: distinct.len() });
  }
  Ok(distinct.choose_multiple(rng, count).copied().collect())
}

/// Spawn branches out of `main`, whose straight line ran from `origin` to `tail`.
///
/// The count is drawn from `config.branch_count`, then capped by the number of distinct
/// segments of `main`. A branch is rooted at the end of a sampled segment and points along
/// `origin → root`, deflected by ±`config.branch_angle`; its length is the distance left from
/// the root to `tail`.
pub fn build_branches<R: Rng + ?Sized>(
  main: &Bolt,
  origin: P2,
  tail: P2,
  config: &BoltConfig,
  rng: &mut R
) -> Result<Vec<Bolt>> {
  Ok(spawn(main, origin, tail, config, rng)?
    .into_iter()
    .map(|(bolt, ..)| bolt)
    .collect())
}

/// Branches along with the straight line each was built from.
pub(super) fn spawn<R: Rng + ?Sized>(
  main: &Bolt,
  origin: P2,
  tail: P2,
  config: &BoltConfig,
  rng: &mut R
) -> Result<Vec<(Bolt, P2, P2)>> {
  let requested = rng.gen_range(config.branch_count.clone());
  let roots = match sample_distinct(main, requested, rng) {
    Ok(roots) => roots,
    Err(Error::InsufficientDistinctSegments { available, .. }) => {
      log::debug!("branch count capped: {} requested, {} distinct segments", requested, available);
      sample_distinct(main, available, rng)?
    },
    Err(e) => return Err(e)
  };

  let fallback = (tail - origin).unit().ok();
  roots.into_iter()
    .map(|segment| -> Result<(Bolt, P2, P2)> {
      let root = segment.end;
      // measured from the global origin; a short local segment gives an unstable heading
      let direction = match (root - origin).unit().ok().or(fallback) {
        Some(direction) => direction,
        None => {
          log::warn!("branch at ({:.1}, {:.1}) has no direction, collapsing", root.x, root.y);
          V2::<f64>::zero()
        }
      };
      let sign = if rng.gen_bool(0.5) { 1.0 } else { -1.0 };
      let direction = direction.rotated(sign * config.branch_angle);
      let branch_tail = root + direction.scaled((tail - root).length())?;
      Ok((build_bolt(root, branch_tail, config, rng)?, root, branch_tail))
    })
    .collect()
}
