/// Several strikes with nested branches and inline forks, drawn on all available cores.

use {
  lightning_bolt::{
    bolt::{BoltConfig, ForkRules, Lightning},
    drawing::{self, LIGHTNING_COLOR},
    geometry::P2
  },
  anyhow::Result,
  rand::prelude::*
};

fn main() -> Result<()> {
  env_logger::init();
  let path = "storm.png";
  let (width, height) = (2048u32, 1024u32);
  let mut rng = rand_pcg::Pcg64::seed_from_u64(7);

  let lightning = Lightning::new(BoltConfig {
    branch_depth: 2,
    branch_count: 2..=4,
    max_refinement: Some(10),
    fork: Some(ForkRules { likelihood: 0.05, ..Default::default() }),
    ..Default::default()
  })?;

  let t0 = std::time::Instant::now();
  let mut bolts = vec![];
  for _ in 0..4 {
    let origin = P2::new(rng.gen_range(0.0..width as f64), rng.gen_range(0.0..32.0));
    let tail = P2::new(
      origin.x + rng.gen_range(-300.0..300.0),
      rng.gen_range(height as f64 * 0.6..height as f64)
    );
    bolts.extend(lightning.strike(origin, tail, &mut rng)?);
  }
  log::info!("generate: {} bolts in {}ms", bolts.len(), t0.elapsed().as_millis());

  let t0 = std::time::Instant::now();
  let mut image = drawing::backdrop(width, height);
  drawing::draw_parallel(&mut image, &bolts, LIGHTNING_COLOR, 8)?;
  log::info!("draw: {}ms", t0.elapsed().as_millis());

  image.save(path)?;
  open::that(path)?;
  Ok(())
}
