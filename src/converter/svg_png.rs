//! SVG → PNG rasterization
//!
//! Renders a vector icon at its natural size onto a transparent pixmap and
//! writes a fixed crop of the result as PNG. The crop rectangle is a
//! constant tuned for the icon sources this pipeline was built around; it
//! is not derived from the SVG viewbox.

use std::fs;
use std::path::Path;

use image::{ImageBuffer, RgbaImage, imageops};
use resvg::{tiny_skia, usvg};
use tracing::debug;

use crate::error::{Error, Result};

/// Crop origin, x component.
pub const CROP_X: u32 = 140;
/// Crop origin, y component.
pub const CROP_Y: u32 = 90;
/// Crop width in pixels.
pub const CROP_WIDTH: u32 = 220;
/// Crop height in pixels.
pub const CROP_HEIGHT: u32 = 220;

/// Rasterize an SVG file to a cropped, transparent-background PNG.
///
/// # Errors
/// Returns an error if the SVG cannot be read or parsed, the render target
/// cannot be allocated, or the PNG cannot be written.
pub fn rasterize_svg<P: AsRef<Path>, Q: AsRef<Path>>(svg_path: P, png_path: Q) -> Result<()> {
    let svg_path = svg_path.as_ref();
    let data = fs::read(svg_path)?;

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &options).map_err(|e| Error::SvgParse {
        path: svg_path.to_path_buf(),
        message: e.to_string(),
    })?;

    let size = tree.size();
    let width = size.width().ceil() as u32;
    let height = size.height().ceil() as u32;
    debug!("rendering {} at natural size {width}x{height}", svg_path.display());

    // Pixmap::new zero-fills, so the background stays transparent.
    let mut pixmap =
        tiny_skia::Pixmap::new(width, height).ok_or(Error::PixmapCreate { width, height })?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    let rgba = unpremultiply(pixmap.data());
    let rendered: RgbaImage =
        ImageBuffer::from_raw(width, height, rgba).ok_or(Error::ImageBufferFailed)?;

    let cropped = imageops::crop_imm(&rendered, CROP_X, CROP_Y, CROP_WIDTH, CROP_HEIGHT).to_image();
    cropped.save(png_path.as_ref())?;

    debug!(
        "wrote {CROP_WIDTH}x{CROP_HEIGHT} crop to {}",
        png_path.as_ref().display()
    );
    Ok(())
}

/// Convert premultiplied RGBA (tiny-skia's native layout) to straight RGBA.
fn unpremultiply(data: &[u8]) -> Vec<u8> {
    let mut result = Vec::with_capacity(data.len());
    for chunk in data.chunks_exact(4) {
        let a = f32::from(chunk[3]) / 255.0;
        if a > 0.0 {
            result.push((f32::from(chunk[0]) / a).min(255.0) as u8);
            result.push((f32::from(chunk[1]) / a).min(255.0) as u8);
            result.push((f32::from(chunk[2]) / a).min(255.0) as u8);
            result.push(chunk[3]);
        } else {
            result.extend_from_slice(&[0, 0, 0, 0]);
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        // 50% alpha premultiplied: channel value 100 -> ~200 straight.
        let straight = unpremultiply(&[100, 50, 0, 128]);
        assert_eq!(straight[3], 128);
        assert!((198..=201).contains(&straight[0]));
        assert!((99..=100).contains(&straight[1]));
        assert_eq!(straight[2], 0);
    }

    #[test]
    fn unpremultiply_keeps_transparent_pixels_zeroed() {
        assert_eq!(unpremultiply(&[12, 34, 56, 0]), vec![0, 0, 0, 0]);
    }
}
