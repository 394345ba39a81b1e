//! Icon accessor: validated catalog lookup and image loading
//!
//! [`IconLibrary`] loads the generated catalog once at construction and
//! serves lookups against the immutable in-memory mapping. A lookup either
//! returns catalog metadata or decodes and resizes the referenced asset.
//!
//! All request parameters arrive as strings and are validated against the
//! closed enumerations on every call; a rejected parameter is diagnosed via
//! `tracing` and returned as a typed error, never a panic.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use image::DynamicImage;
use image::imageops::FilterType;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, IconColor, IconRecord, IconSize, IconStyle};
use crate::error::{Error, Result};

/// Conventional catalog path, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "icons.yml";

/// Conventional asset root; record paths are resolved beneath it.
pub const DEFAULT_ASSET_ROOT: &str = "assets";

/// Fixed resampling policy for icon resizing.
pub const RESIZE_FILTER: FilterType = FilterType::Triangle;

/// What a lookup should produce.
///
/// Informational kinds return catalog metadata; image kinds decode and
/// resize the referenced asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnKind {
    /// The record's color field.
    Color,
    /// The record's name field.
    Name,
    /// The record's relative asset path.
    Path,
    /// The record's size field.
    Size,
    /// The record's style field (serialized key `type`).
    Type,
    /// The record's `used` flag.
    Used,
    /// The whole record.
    Info,
    /// A toolkit-ready RGBA texture handle.
    Texture,
    /// The raw decoded image.
    Image,
}

impl ReturnKind {
    /// Whether this kind returns catalog metadata rather than pixels.
    #[must_use]
    pub const fn is_informational(self) -> bool {
        !matches!(self, ReturnKind::Texture | ReturnKind::Image)
    }
}

impl FromStr for ReturnKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "color" => Ok(ReturnKind::Color),
            "name" => Ok(ReturnKind::Name),
            "path" => Ok(ReturnKind::Path),
            "size" => Ok(ReturnKind::Size),
            "type" => Ok(ReturnKind::Type),
            "used" => Ok(ReturnKind::Used),
            "info" => Ok(ReturnKind::Info),
            "texture" => Ok(ReturnKind::Texture),
            "image" => Ok(ReturnKind::Image),
            _ => Err(Error::InvalidReturnKind(s.to_string())),
        }
    }
}

/// A validated-on-lookup icon request.
///
/// Carries the accessor call surface with its conventional defaults:
/// size `2x`, 20x20 output, texture return kind. Parameters stay strings
/// until [`IconLibrary::get_icon`] validates them, so an out-of-set value
/// is reported instead of being unrepresentable.
#[derive(Debug, Clone)]
pub struct IconRequest {
    /// Requested color, one of `black` / `white`.
    pub color: String,
    /// Requested icon name (lowercase identifier).
    pub name: String,
    /// Requested style, one of `outlined` / `round` / `sharp` / `twotone` / `normal`.
    pub style: String,
    /// Requested size tier, one of `1x` / `2x`.
    pub size: String,
    /// Output width in pixels for image kinds.
    pub width: u32,
    /// Output height in pixels for image kinds.
    pub height: u32,
    /// Requested return kind.
    pub kind: String,
}

impl IconRequest {
    /// A request for `name` in the given color and style, with defaults for
    /// everything else.
    #[must_use]
    pub fn new(color: &str, name: &str, style: &str) -> Self {
        IconRequest {
            color: color.to_string(),
            name: name.to_string(),
            style: style.to_string(),
            size: "2x".to_string(),
            width: 20,
            height: 20,
            kind: "texture".to_string(),
        }
    }

    /// Override the size tier.
    #[must_use]
    pub fn size(mut self, size: &str) -> Self {
        self.size = size.to_string();
        self
    }

    /// Override the output dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Override the return kind.
    #[must_use]
    pub fn kind(mut self, kind: &str) -> Self {
        self.kind = kind.to_string();
        self
    }
}

/// A decoded, resized icon ready for upload to a UI toolkit.
///
/// Straight (non-premultiplied) RGBA, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconTexture {
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
    /// Raw RGBA pixel data.
    pub rgba: Vec<u8>,
}

/// The result of a successful lookup.
#[derive(Debug, Clone)]
pub enum IconData {
    /// The whole catalog record (`info` kind).
    Record(IconRecord),
    /// A single record field rendered as a string.
    Field(String),
    /// A toolkit-ready RGBA texture.
    Texture(IconTexture),
    /// The raw decoded image.
    Image(DynamicImage),
}

impl fmt::Display for IconData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconData::Record(record) => write!(f, "{record:?}"),
            IconData::Field(value) => f.write_str(value),
            IconData::Texture(texture) => {
                write!(f, "texture {}x{}", texture.width, texture.height)
            }
            IconData::Image(image) => write!(f, "image {}x{}", image.width(), image.height()),
        }
    }
}

/// Icon catalog accessor.
///
/// Construction loads the catalog file into memory; a missing or malformed
/// catalog is a fatal construction error, not a per-lookup condition. The
/// catalog is never mutated afterwards, so every lookup is independent.
#[derive(Debug, Clone)]
pub struct IconLibrary {
    catalog: Catalog,
    asset_root: PathBuf,
}

impl IconLibrary {
    /// Open the library at the conventional paths (`icons.yml` in the
    /// working directory, assets under `assets/`).
    ///
    /// # Errors
    /// Returns an error if the catalog file is missing or malformed.
    pub fn new() -> Result<Self> {
        Self::open(DEFAULT_CATALOG_PATH, DEFAULT_ASSET_ROOT)
    }

    /// Open the library with explicit catalog and asset-root paths.
    ///
    /// # Errors
    /// Returns an error if the catalog file is missing or malformed.
    pub fn open<P: AsRef<Path>, Q: AsRef<Path>>(catalog_path: P, asset_root: Q) -> Result<Self> {
        let catalog = Catalog::load(catalog_path)?;
        Ok(Self::with_catalog(catalog, asset_root))
    }

    /// Wrap an already-built catalog (tests, embedded catalogs).
    #[must_use]
    pub fn with_catalog<Q: AsRef<Path>>(catalog: Catalog, asset_root: Q) -> Self {
        IconLibrary {
            catalog,
            asset_root: asset_root.as_ref().to_path_buf(),
        }
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Resolve a request to metadata or a decoded, resized image.
    ///
    /// # Errors
    /// Every out-of-set parameter (color, style, size, return kind), a zero
    /// output dimension, and an unknown icon name each yield a dedicated
    /// error after a `warn!` diagnostic. Image kinds additionally fail if
    /// the referenced asset file is missing or cannot be decoded.
    pub fn get_icon(&self, request: &IconRequest) -> Result<IconData> {
        let color: IconColor = parse_param(&request.color)?;
        let style: IconStyle = parse_param(&request.style)?;
        let size: IconSize = parse_param(&request.size)?;
        if request.width == 0 || request.height == 0 {
            let err = Error::InvalidDimensions {
                width: request.width,
                height: request.height,
            };
            warn!("{err}");
            return Err(err);
        }
        let kind: ReturnKind = parse_param(&request.kind)?;

        let record = self
            .catalog
            .get(size, color, style, &request.name)
            .ok_or_else(|| {
                let err = Error::IconNotFound {
                    name: request.name.clone(),
                    size,
                    color,
                    style,
                };
                warn!("{err}");
                err
            })?;
        debug!("resolved icon record: {record:?}");

        let data = match kind {
            ReturnKind::Info => IconData::Record(record.clone()),
            ReturnKind::Color => IconData::Field(record.color.to_string()),
            ReturnKind::Name => IconData::Field(record.name.clone()),
            ReturnKind::Path => IconData::Field(record.path.clone()),
            ReturnKind::Size => IconData::Field(record.size.to_string()),
            ReturnKind::Type => IconData::Field(record.style.to_string()),
            ReturnKind::Used => IconData::Field(record.used.to_string()),
            ReturnKind::Texture | ReturnKind::Image => {
                return self.load_image(record, request.width, request.height, kind);
            }
        };
        Ok(data)
    }

    /// Decode the record's asset, resize it, and package it per `kind`.
    fn load_image(
        &self,
        record: &IconRecord,
        width: u32,
        height: u32,
        kind: ReturnKind,
    ) -> Result<IconData> {
        let path = self.asset_root.join(&record.path);
        if !path.exists() {
            return Err(Error::AssetNotFound { path });
        }

        let image = image::open(&path)?.resize_exact(width, height, RESIZE_FILTER);
        info!(
            "loaded icon '{}' from {} at {width}x{height}",
            record.name,
            path.display()
        );

        match kind {
            ReturnKind::Image => Ok(IconData::Image(image)),
            _ => {
                let rgba = image.into_rgba8();
                Ok(IconData::Texture(IconTexture {
                    width,
                    height,
                    rgba: rgba.into_raw(),
                }))
            }
        }
    }
}

/// Parse one string parameter, diagnosing a rejection before returning it.
fn parse_param<T: FromStr<Err = Error>>(value: &str) -> Result<T> {
    value.parse().map_err(|err: Error| {
        warn!("{err}");
        err
    })
}
