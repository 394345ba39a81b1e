//! Offline asset conversion
//!
//! Three independent, single-pass transforms that produce the raster
//! assets the catalog refers to: vector rasterization, recolor-to-white,
//! and recolor-to-black. Each also has a sequential batch driver over a
//! pair of newline-delimited file lists.

mod batch;
mod recolor;
mod svg_png;

pub use batch::{BatchOutcome, rasterize_batch, recolor_batch};
pub use recolor::{RecolorTarget, recolor, recolor_to_black, recolor_to_white};
pub use svg_png::{CROP_HEIGHT, CROP_WIDTH, CROP_X, CROP_Y, rasterize_svg};
