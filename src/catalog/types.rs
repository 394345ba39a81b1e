//! Catalog type definitions
//!
//! The closed enumerations (color, style, size) and the [`IconRecord`] leaf
//! type. Enum string forms match the on-disk catalog keys exactly, so the
//! same parsing handles YAML keys, filenames, and accessor parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Color variant of an icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconColor {
    Black,
    White,
}

impl IconColor {
    /// All catalog colors, in catalog order.
    pub const ALL: [IconColor; 2] = [IconColor::Black, IconColor::White];

    /// The lowercase string form used in catalog keys and filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IconColor::Black => "black",
            IconColor::White => "white",
        }
    }
}

impl fmt::Display for IconColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "black" => Ok(IconColor::Black),
            "white" => Ok(IconColor::White),
            _ => Err(Error::InvalidColor(s.to_string())),
        }
    }
}

/// Visual style variant of an icon family.
///
/// `Normal` is the filled default style; the rest mirror the Material
/// icon style families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    Outlined,
    Round,
    Sharp,
    Twotone,
    Normal,
}

impl IconStyle {
    /// All catalog styles, in catalog order.
    pub const ALL: [IconStyle; 5] = [
        IconStyle::Outlined,
        IconStyle::Round,
        IconStyle::Sharp,
        IconStyle::Twotone,
        IconStyle::Normal,
    ];

    /// The lowercase string form used in catalog keys and filenames.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IconStyle::Outlined => "outlined",
            IconStyle::Round => "round",
            IconStyle::Sharp => "sharp",
            IconStyle::Twotone => "twotone",
            IconStyle::Normal => "normal",
        }
    }

    /// Infer the style from an asset path by substring match.
    ///
    /// Checks `outlined`, `round`, `sharp`, `twotone` in that order and
    /// falls back to `Normal` when none match.
    #[must_use]
    pub fn infer(path: &str) -> IconStyle {
        if path.contains("outlined") {
            IconStyle::Outlined
        } else if path.contains("round") {
            IconStyle::Round
        } else if path.contains("sharp") {
            IconStyle::Sharp
        } else if path.contains("twotone") {
            IconStyle::Twotone
        } else {
            IconStyle::Normal
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "outlined" => Ok(IconStyle::Outlined),
            "round" => Ok(IconStyle::Round),
            "sharp" => Ok(IconStyle::Sharp),
            "twotone" => Ok(IconStyle::Twotone),
            "normal" => Ok(IconStyle::Normal),
            _ => Err(Error::InvalidStyle(s.to_string())),
        }
    }
}

/// Resolution tier of an icon asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IconSize {
    #[serde(rename = "1x")]
    OneX,
    #[serde(rename = "2x")]
    TwoX,
}

impl IconSize {
    /// All catalog sizes, in catalog order.
    pub const ALL: [IconSize; 2] = [IconSize::OneX, IconSize::TwoX];

    /// The string form used in catalog keys and asset paths.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            IconSize::OneX => "1x",
            IconSize::TwoX => "2x",
        }
    }

    /// Infer the size from an asset path: a `2x` path component marks the
    /// high-resolution tier, everything else is `1x`.
    #[must_use]
    pub fn infer(path: &str) -> IconSize {
        if path.contains("2x") {
            IconSize::TwoX
        } else {
            IconSize::OneX
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1x" => Ok(IconSize::OneX),
            "2x" => Ok(IconSize::TwoX),
            _ => Err(Error::InvalidSize(s.to_string())),
        }
    }
}

/// One catalog leaf describing a single rasterized icon asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRecord {
    /// Relative file path to the rasterized asset, under the asset root.
    pub path: String,
    /// Informational flag; never read or updated by lookup.
    pub used: bool,
    /// Visual style of the asset.
    #[serde(rename = "type")]
    pub style: IconStyle,
    /// Lowercase icon identifier, unique within a (size, color, style) bucket.
    pub name: String,
    /// Resolution tier of the asset.
    pub size: IconSize,
    /// Color variant of the asset.
    pub color: IconColor,
}
