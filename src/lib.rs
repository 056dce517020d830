//! Procedural lightning bolts in ℝ².
//!
//! A bolt starts as a single straight segment from an origin to a tail. It is refined by
//! midpoint displacement: every round splits each segment in two and pushes the new vertex
//! sideways by a random amount, with the maximum amount halving from round to round. Longer
//! bolts get more rounds, so the jitter density stays roughly constant per pixel. Shorter
//! branch bolts then grow out of a few vertices of the main bolt.
//!
//! The crate is split into [`bolt`] for generating the segment lists, and [`drawing`] for
//! compositing them onto an image (requires `drawing` feature).
//!
//! # Basic usage
//! ```
//! # use {
//! #   lightning_bolt::{bolt::Lightning, geometry::P2, error::Result},
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! // All randomness comes from the generator passed in; seed it for reproducible bolts.
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let lightning = Lightning::default();
//!
//! // The main bolt comes first, followed by its branches.
//! let bolts = lightning.strike(P2::new(10.0, 10.0), P2::new(500.0, 500.0), &mut rng)?;
//! assert_eq!(bolts[0].intensity(), 3);
//! assert!((4..=7).contains(&bolts.len()));
//! # Ok(())
//! # }
//! ```
//! Drawing them over a background:
//! ```ignore
//! # use {
//! #   lightning_bolt::{bolt::Lightning, geometry::P2, drawing::{self, LIGHTNING_COLOR}},
//! #   rand::SeedableRng,
//! #   anyhow::Result
//! # };
//! # fn main() -> Result<()> {
//! # let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! # let bolts = Lightning::default().strike(P2::new(10.0, 10.0), P2::new(500.0, 500.0), &mut rng)?;
//! let mut image = image::open("rainy_sky.jpg")?.to_rgba8();
//! drawing::draw_parallel(&mut image, &bolts, LIGHTNING_COLOR, 4)?;
//! image.save("out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! Branching is driven by [`BoltConfig`](bolt::BoltConfig): `branch_depth` above 1 lets
//! branches grow branches of their own, and `fork` enables inline forking while subdividing.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod geometry;
pub mod bolt;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod sdf;
#[cfg(feature = "drawing")]
#[cfg_attr(docsrs, doc(cfg(feature = "drawing")))]
pub mod drawing;
