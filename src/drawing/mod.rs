//! Compositing bolts onto raster images.
//!
//! Every segment of a bolt is stroked as a [`Capsule`] whose width equals the bolt's
//! intensity, with a one pixel anti-aliased edge.

use {
  crate::{
    bolt::Bolt,
    geometry::{P2, PixelSpace},
    sdf::{BoundingBox, Capsule, SDF}
  },
  anyhow::Result,
  euclid::{Box2D, Size2D},
  humansize::{FileSize, file_size_opts as options},
  image::{Pixel, Rgba, RgbaImage},
  rayon::prelude::*,
  std::path::Path
};

#[cfg(test)] mod tests;

pub const LIGHTNING_COLOR: Rgba<u8> = Rgba([250, 251, 165, 255]);

pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

#[derive(Debug, Copy, Clone)]
pub struct Texture<S, T> {
  pub shape: S,
  pub texture: T
}

impl Bolt {
  pub fn texture<T>(&self, texture: T) -> Texture<&Bolt, T> {
    Texture { shape: self, texture }
  }
}

impl Draw<RgbaImage> for Texture<Capsule, Rgba<u8>> {
  fn draw(&self, image: &mut RgbaImage) {
    let bounding_box = match clip(self.shape.bounding_box(), image.dimensions()) {
      Some(x) => x,
      None => return // bounding box has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        // sample at pixel centers
        let sdf = self.shape.sdf(P2::new(x as f64 + 0.5, y as f64 + 0.5));
        let pixel = image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, 1.0, *pixel, self.texture);
      });
  }
}

impl Draw<RgbaImage> for Texture<&Bolt, Rgba<u8>> {
  fn draw(&self, image: &mut RgbaImage) {
    let radius = self.shape.intensity() as f64 / 2.0;
    self.shape.segments().iter()
      .for_each(|&segment| Texture {
        shape: Capsule { segment, radius },
        texture: self.texture
      }.draw(image));
  }
}

fn clip(
  bounding_box: Box2D<f64, PixelSpace>,
  (width, height): (u32, u32)
) -> Option<Box2D<u32, PixelSpace>> {
  bounding_box
    .round_out()
    .intersection(&Box2D::from_size(Size2D::new(width as f64, height as f64)))
    .map(|x| x.to_u32())
}

#[allow(non_snake_case)]
fn sdf_overlay_aa(sdf: f64, Δp: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}

/// Draw bolts in order, sequentially.
pub fn draw_bolts<'a>(image: &mut RgbaImage, bolts: impl IntoIterator<Item = &'a Bolt>, color: Rgba<u8>) {
  bolts.into_iter()
    .for_each(|bolt| bolt.texture(color).draw(image));
}

/// Draw bolts, parallel.
/// Will use `width * height * num_threads * 4` bytes of memory for intermediate layers, which
/// are overlaid onto `background` in order once all bolts are drawn.
pub fn draw_parallel(
  background: &mut RgbaImage,
  bolts: &[Bolt],
  color: Rgba<u8>,
  num_threads: usize
) -> Result<()> {
  if bolts.is_empty() {
    return Ok(());
  }
  let (width, height) = background.dimensions();
  let num_threads = num_threads.clamp(1, bolts.len());
  let chunk_size = (bolts.len() as f32 / num_threads as f32).ceil() as usize;
  log::debug!(
    "drawing {} bolts on {} threads, {} of layers",
    bolts.len(),
    num_threads,
    (width as usize * height as usize * 4 * num_threads)
      .file_size(options::CONVENTIONAL)
      .unwrap_or_default()
  );

  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(num_threads)
    .build()?;
  let layers = pool.install(|| bolts
    .par_chunks(chunk_size)
    .map(|chunk| {
      let mut framebuffer = RgbaImage::new(width, height);
      draw_bolts(&mut framebuffer, chunk, color);
      framebuffer
    })
    .collect::<Vec<_>>());

  layers.iter()
    .for_each(|layer| image::imageops::overlay(background, layer, 0, 0));
  Ok(())
}

/// A night sky to strike onto when no photograph is at hand.
pub fn backdrop(width: u32, height: u32) -> RgbaImage {
  RgbaImage::from_fn(width, height, |_, y| {
    let t = y as f32 / height.max(1) as f32;
    let shade = |top: f32, bottom: f32| (top + (bottom - top) * t) as u8;
    Rgba([shade(12.0, 48.0), shade(14.0, 44.0), shade(32.0, 70.0), 255])
  })
}

/// Open `background`, draw `bolts` onto it and save the result to `output`.
pub fn strike_onto(
  background: impl AsRef<Path>,
  output: impl AsRef<Path>,
  bolts: &[Bolt],
  color: Rgba<u8>
) -> Result<RgbaImage> {
  let mut image = image::open(background)?.to_rgba8();
  draw_bolts(&mut image, bolts, color);
  image.save(output)?;
  Ok(image)
}
