/// A single strike over a photograph, or over a generated night sky when no path is given.
///
/// `cargo run --example 01_single_strike --features drawing -- rainy_sky.jpg`

use {
  lightning_bolt::{
    bolt::Lightning,
    drawing::{self, LIGHTNING_COLOR},
    geometry::{P2, V2}
  },
  anyhow::Result,
  rand::prelude::*
};

fn main() -> Result<()> {
  env_logger::init();
  let path = "out.png";
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);

  let mut image = match std::env::args().nth(1) {
    Some(background) => image::open(background)?.to_rgba8(),
    None => drawing::backdrop(1024, 768)
  };

  // near the top-left corner, striking towards the middle of the frame
  let origin = P2::new(10.0, 10.0) + V2::new(rng.gen_range(0.0..40.0), rng.gen_range(0.0..40.0));
  let tail = P2::new(500.0, 500.0) + V2::new(rng.gen_range(-40.0..40.0), rng.gen_range(-40.0..40.0));

  let t0 = std::time::Instant::now();
  let bolts = Lightning::default().strike(origin, tail, &mut rng)?;
  log::info!(
    "{} bolts, {} segments in {}us",
    bolts.len(),
    bolts.iter().map(|bolt| bolt.len()).sum::<usize>(),
    t0.elapsed().as_micros()
  );

  drawing::draw_bolts(&mut image, &bolts, LIGHTNING_COLOR);
  image.save(path)?;
  open::that(path)?;
  Ok(())
}
