//! Raster icon recoloring
//!
//! Remaps an icon's r/g/b channels from its red channel while leaving the
//! alpha channel untouched, so the icon silhouette (carried entirely by
//! alpha) survives the recolor.
//!
//! The white remap branches on the sample value; the black remap forces
//! zero regardless of input. Existing catalog assets were produced with
//! exactly these remaps, asymmetry included.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};

/// Target color of a recolor pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecolorTarget {
    /// Zero-valued (ink) samples become 255, everything else 0.
    White,
    /// Every sample becomes 0, regardless of input.
    Black,
}

impl RecolorTarget {
    /// Remap one red-channel sample.
    #[must_use]
    pub const fn level(self, value: u8) -> u8 {
        match self {
            RecolorTarget::White => {
                if value > 0 {
                    0
                } else {
                    255
                }
            }
            RecolorTarget::Black => 0,
        }
    }
}

impl fmt::Display for RecolorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecolorTarget::White => f.write_str("white"),
            RecolorTarget::Black => f.write_str("black"),
        }
    }
}

/// Recolor a raster icon file toward the given target color.
///
/// # Errors
/// Returns an error if the source is missing, cannot be decoded, or the
/// destination cannot be written.
pub fn recolor<P: AsRef<Path>, Q: AsRef<Path>>(
    source: P,
    dest: Q,
    target: RecolorTarget,
) -> Result<()> {
    let source = source.as_ref();
    if !source.exists() {
        return Err(Error::AssetNotFound {
            path: source.to_path_buf(),
        });
    }

    let mut rgba = image::open(source)?.into_rgba8();
    for pixel in rgba.pixels_mut() {
        let level = target.level(pixel[0]);
        pixel[0] = level;
        pixel[1] = level;
        pixel[2] = level;
        // pixel[3] (alpha) carries the silhouette; leave it alone.
    }
    rgba.save(dest.as_ref())?;

    debug!(
        "recolored {} -> {} ({target})",
        source.display(),
        dest.as_ref().display()
    );
    Ok(())
}

/// Recolor a black-ink icon to white.
///
/// # Errors
/// See [`recolor`].
pub fn recolor_to_white<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    recolor(source, dest, RecolorTarget::White)
}

/// Recolor an icon to black.
///
/// # Errors
/// See [`recolor`].
pub fn recolor_to_black<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest: Q) -> Result<()> {
    recolor(source, dest, RecolorTarget::Black)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn white_remap_turns_ink_white() {
        // Black ink (0) becomes full white; any lit sample is cleared.
        assert_eq!(RecolorTarget::White.level(0), 255);
        assert_eq!(RecolorTarget::White.level(1), 0);
        assert_eq!(RecolorTarget::White.level(255), 0);
    }

    #[test]
    fn black_remap_ignores_input() {
        assert_eq!(RecolorTarget::Black.level(0), 0);
        assert_eq!(RecolorTarget::Black.level(128), 0);
        assert_eq!(RecolorTarget::Black.level(255), 0);
    }
}
