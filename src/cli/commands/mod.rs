//! CLI command definitions and dispatch

use std::path::PathBuf;
use std::str::FromStr;

use clap::Subcommand;

use crate::converter::RecolorTarget;

pub mod generate;
pub mod get;
pub mod rasterize;
pub mod recolor;
pub mod validate;

/// Recolor target specification accepted on the command line
#[derive(Debug, Clone, Copy)]
pub struct TargetArg(pub RecolorTarget);

impl FromStr for TargetArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "white" | "w" => Ok(TargetArg(RecolorTarget::White)),
            "black" | "b" => Ok(TargetArg(RecolorTarget::Black)),
            _ => Err(format!(
                "Invalid target '{s}'. Valid values: white/w, black/b"
            )),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Regenerate the icon catalog from per-color file lists
    Generate {
        /// File list of white icon asset paths
        #[arg(long)]
        white: PathBuf,

        /// File list of black icon asset paths
        #[arg(long)]
        black: PathBuf,

        /// Output catalog file
        #[arg(short, long, default_value = "icons.yml")]
        output: PathBuf,
    },

    /// Rasterize SVG icons to cropped transparent PNGs
    Rasterize {
        /// File list of source SVG paths
        #[arg(long)]
        svg_list: PathBuf,

        /// File list of destination PNG paths (same order)
        #[arg(long)]
        png_list: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Recolor raster icons to white or black
    Recolor {
        /// Target color: white/w or black/b
        target: TargetArg,

        /// File list of source image paths
        #[arg(long)]
        source_list: PathBuf,

        /// File list of destination image paths (same order)
        #[arg(long)]
        dest_list: PathBuf,

        /// Suppress progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Look up an icon and print metadata or write the resized image
    Get {
        /// Icon color (black, white)
        #[arg(long)]
        color: String,

        /// Icon name (lowercase identifier)
        #[arg(long)]
        name: String,

        /// Icon style (outlined, round, sharp, twotone, normal)
        #[arg(long)]
        style: String,

        /// Icon size tier (1x, 2x)
        #[arg(long, default_value = "2x")]
        size: String,

        /// Output width for image kinds
        #[arg(long, default_value_t = 20)]
        width: u32,

        /// Output height for image kinds
        #[arg(long, default_value_t = 20)]
        height: u32,

        /// Return kind: color, name, path, size, type, used, info, texture, image
        #[arg(short, long, default_value = "info")]
        kind: String,

        /// Catalog file
        #[arg(long, default_value = "icons.yml")]
        catalog: PathBuf,

        /// Asset root directory
        #[arg(long, default_value = "assets")]
        assets: PathBuf,

        /// Output PNG file (required for image kinds)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Load a catalog file and check its structural invariant
    Validate {
        /// Catalog file
        #[arg(long, default_value = "icons.yml")]
        catalog: PathBuf,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Generate {
                white,
                black,
                output,
            } => generate::execute(white, black, output),
            Commands::Rasterize {
                svg_list,
                png_list,
                quiet,
            } => rasterize::execute(svg_list, png_list, *quiet),
            Commands::Recolor {
                target,
                source_list,
                dest_list,
                quiet,
            } => recolor::execute(target.0, source_list, dest_list, *quiet),
            Commands::Get {
                color,
                name,
                style,
                size,
                width,
                height,
                kind,
                catalog,
                assets,
                output,
            } => get::execute(
                color,
                name,
                style,
                size,
                *width,
                *height,
                kind,
                catalog,
                assets,
                output.as_deref(),
            ),
            Commands::Validate { catalog } => validate::execute(catalog),
        }
    }
}
