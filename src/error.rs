//! Error types for `icondex`

use std::path::PathBuf;

use thiserror::Error;

use crate::catalog::{IconColor, IconSize, IconStyle};

/// The error type for `icondex` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Catalog Errors ====================
    /// The catalog file does not exist at the expected path.
    #[error("catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was checked.
        path: PathBuf,
    },

    /// The catalog file could not be parsed as YAML.
    #[error("failed to parse catalog: {0}")]
    CatalogParse(#[from] serde_yaml::Error),

    /// A catalog leaf's embedded fields disagree with its position in the mapping.
    #[error(
        "catalog entry at [{size}][{color}][{style}][{name}] disagrees with its embedded fields"
    )]
    CatalogInvariant {
        /// The size key the record sits under.
        size: IconSize,
        /// The color key the record sits under.
        color: IconColor,
        /// The style key the record sits under.
        style: IconStyle,
        /// The name key the record sits under.
        name: String,
    },

    // ==================== Lookup Errors ====================
    /// The requested color is not in the color enumeration.
    #[error("unknown icon color '{0}' (valid colors: black, white)")]
    InvalidColor(String),

    /// The requested style is not in the style enumeration.
    #[error("unknown icon style '{0}' (valid styles: outlined, round, sharp, twotone, normal)")]
    InvalidStyle(String),

    /// The requested size is not in the size enumeration.
    #[error("unknown icon size '{0}' (valid sizes: 1x, 2x)")]
    InvalidSize(String),

    /// The requested target dimensions are unusable.
    #[error("invalid target dimensions {width}x{height} (both must be nonzero)")]
    InvalidDimensions {
        /// The requested width.
        width: u32,
        /// The requested height.
        height: u32,
    },

    /// The requested return kind is not recognized.
    #[error(
        "unknown return kind '{0}' (info kinds: color, name, path, size, type, used, info; image kinds: texture, image)"
    )]
    InvalidReturnKind(String),

    /// No icon with the requested name exists in the resolved catalog bucket.
    #[error("icon '{name}' not found for size {size}, color {color}, style {style}")]
    IconNotFound {
        /// The requested icon name.
        name: String,
        /// The requested size.
        size: IconSize,
        /// The requested color.
        color: IconColor,
        /// The requested style.
        style: IconStyle,
    },

    // ==================== Asset / Image Errors ====================
    /// A referenced icon asset file does not exist on disk.
    #[error("icon asset not found: {path}")]
    AssetNotFound {
        /// The resolved asset path.
        path: PathBuf,
    },

    /// Image decode, encode, or transform error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to parse an SVG document.
    #[error("failed to parse SVG {path}: {message}")]
    SvgParse {
        /// The SVG file that failed to parse.
        path: PathBuf,
        /// The parser's error message.
        message: String,
    },

    /// Failed to allocate a raster target for SVG rendering.
    #[error("failed to allocate {width}x{height} pixmap")]
    PixmapCreate {
        /// The requested pixmap width.
        width: u32,
        /// The requested pixmap height.
        height: u32,
    },

    /// Failed to assemble an image buffer from raw pixel data.
    #[error("failed to create image buffer")]
    ImageBufferFailed,

    // ==================== File List Errors ====================
    /// A newline-delimited file list does not exist.
    #[error("file list not found: {path}")]
    FileListNotFound {
        /// The path that was checked.
        path: PathBuf,
    },
}

/// A specialized Result type for `icondex` operations.
pub type Result<T> = std::result::Result<T, Error>;
