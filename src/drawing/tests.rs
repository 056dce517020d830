use {
  super::*,
  crate::{
    bolt::Lightning,
    geometry::Segment
  },
  rand::prelude::*,
  image::Rgba
};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

fn near(a: Rgba<u8>, b: Rgba<u8>) -> bool {
  a.0.iter().zip(b.0.iter())
    .all(|(a, b)| (*a as i16 - *b as i16).abs() <= 2)
}

fn horizontal(intensity: u32) -> Bolt {
  Bolt::new(vec![Segment::new(P2::new(8.0, 32.0), P2::new(56.0, 32.0))], intensity)
}

fn max_difference(a: &RgbaImage, b: &RgbaImage) -> i16 {
  a.pixels().zip(b.pixels())
    .flat_map(|(a, b)| a.0.into_iter().zip(b.0).map(|(a, b)| (a as i16 - b as i16).abs()))
    .max()
    .unwrap_or(0)
}

fn coverage(image: &RgbaImage) -> usize {
  image.pixels().filter(|&&pixel| pixel != BLACK).count()
}

#[test] fn stroke_covers_line() {
  let mut image = RgbaImage::from_pixel(64, 64, BLACK);
  horizontal(3).texture(LIGHTNING_COLOR).draw(&mut image);

  assert!(near(*image.get_pixel(32, 32), LIGHTNING_COLOR));
  assert!(near(*image.get_pixel(32, 31), LIGHTNING_COLOR));
  // half covered edge
  let edge = image.get_pixel(32, 33);
  assert!(edge.0[0] > 64 && edge.0[0] < 192);
  assert_eq!(*image.get_pixel(32, 34), BLACK);
  assert_eq!(*image.get_pixel(32, 40), BLACK);
  assert_eq!(*image.get_pixel(2, 32), BLACK);
}

#[test] fn intensity_widens_stroke() {
  let mut thin = RgbaImage::from_pixel(64, 64, BLACK);
  let mut thick = thin.clone();
  horizontal(1).texture(LIGHTNING_COLOR).draw(&mut thin);
  horizontal(6).texture(LIGHTNING_COLOR).draw(&mut thick);
  assert!(coverage(&thin) > 0);
  assert!(coverage(&thick) > 2 * coverage(&thin));
}

#[test] fn offscreen_bolt() {
  let mut image = RgbaImage::from_pixel(64, 64, BLACK);
  let bolt = Bolt::new(vec![Segment::new(P2::new(-100.0, -100.0), P2::new(-50.0, -40.0))], 3);
  draw_bolts(&mut image, [&bolt], LIGHTNING_COLOR);
  assert_eq!(coverage(&image), 0);
}

#[test] fn parallel_matches_sequential() -> Result<()> {
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let bolts = Lightning::default()
    .strike(P2::new(10.0, 10.0), P2::new(500.0, 500.0), &mut rng)?;

  let mut sequential = RgbaImage::from_pixel(512, 512, BLACK);
  let mut parallel = sequential.clone();
  draw_bolts(&mut sequential, &bolts, LIGHTNING_COLOR);
  draw_parallel(&mut parallel, &bolts, LIGHTNING_COLOR, 4)?;

  // layers are composited in order, so only rounding may differ
  let difference = max_difference(&sequential, &parallel);
  assert!(difference <= 24, "max channel difference {}", difference);

  // every vertex of the main bolt is fully covered
  let vertices = bolts[0].segments().iter()
    .map(|segment| segment.end)
    .filter(|p| p.x >= 0.0 && p.y >= 0.0 && p.x < 512.0 && p.y < 512.0)
    .collect::<Vec<_>>();
  assert!(!vertices.is_empty());
  for p in vertices {
    let (x, y) = (p.x as u32, p.y as u32);
    assert!(near(*sequential.get_pixel(x, y), LIGHTNING_COLOR));
    assert!(near(*parallel.get_pixel(x, y), LIGHTNING_COLOR));
  }
  assert!(coverage(&parallel) > 0);
  Ok(())
}

#[test] fn parallel_separate_strokes_match() -> Result<()> {
  let bolts = [16.0, 32.0, 48.0].map(|y| Bolt::new(vec![Segment::new(P2::new(8.0, y), P2::new(56.0, y + 4.0))], 3));
  let mut sequential = RgbaImage::from_pixel(64, 64, BLACK);
  let mut parallel = sequential.clone();
  draw_bolts(&mut sequential, &bolts, LIGHTNING_COLOR);
  draw_parallel(&mut parallel, &bolts, LIGHTNING_COLOR, 3)?;
  assert!(coverage(&sequential) > 0);
  // one blend per pixel either way
  assert!(max_difference(&sequential, &parallel) <= 4);
  Ok(())
}

#[test] fn backdrop_is_opaque() {
  let image = backdrop(16, 32);
  assert_eq!(image.dimensions(), (16, 32));
  assert!(image.pixels().all(|pixel| pixel.0[3] == 255));
  assert!(image.get_pixel(0, 31).0[2] > image.get_pixel(0, 0).0[2]);
}

#[test] fn strike_onto_file() -> Result<()> {
  let dir = std::env::temp_dir();
  let background = dir.join("lightning_bolt_test_background.png");
  let output = dir.join("lightning_bolt_test_output.png");
  backdrop(128, 128).save(&background)?;

  let bolts = [horizontal(3)];
  let drawn = strike_onto(&background, &output, &bolts, LIGHTNING_COLOR)?;
  let saved = image::open(&output)?.to_rgba8();
  assert_eq!(saved.dimensions(), (128, 128));
  assert_eq!(saved, drawn);
  assert!(near(*saved.get_pixel(32, 32), LIGHTNING_COLOR));
  Ok(())
}
