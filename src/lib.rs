//! # icondex
//!
//! A small library for working with pre-generated icon catalogs: look up
//! icon metadata by (size, color, style, name), load and resize the
//! referenced assets, and run the offline pipeline that produces them.
//!
//! ## Looking up icons
//!
//! ```no_run
//! use icondex::{IconLibrary, IconRequest};
//!
//! // Loads icons.yml from the working directory
//! let library = IconLibrary::new()?;
//!
//! // Metadata lookup
//! let path = library.get_icon(
//!     &IconRequest::new("black", "add_alert", "outlined").kind("path"),
//! )?;
//!
//! // Decoded 20x20 RGBA texture, ready for upload to a UI toolkit
//! let texture = library.get_icon(&IconRequest::new("black", "add_alert", "outlined"))?;
//! # Ok::<(), icondex::Error>(())
//! ```
//!
//! ## Regenerating the catalog
//!
//! ```no_run
//! use icondex::catalog::generator::generate_catalog;
//!
//! let catalog = generate_catalog("listOfFiles_white.txt", "listOfFiles_black.txt")?;
//! catalog.save("icons.yml")?;
//! # Ok::<(), icondex::Error>(())
//! ```
//!
//! ## Offline conversion
//!
//! ```no_run
//! use icondex::converter::{rasterize_svg, recolor_to_white};
//!
//! rasterize_svg("icons/settings.svg", "icons/settings.png")?;
//! recolor_to_white("icons/settings.png", "icons/settings_white.png")?;
//! # Ok::<(), icondex::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `icondex` command-line binary (default)

pub mod catalog;
pub mod converter;
pub mod error;
pub mod library;
pub mod utils;

// Re-exports for convenience
pub use error::{Error, Result};
pub use library::{IconData, IconLibrary, IconRequest, IconTexture, ReturnKind};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::catalog::{Catalog, IconColor, IconRecord, IconSize, IconStyle};
    pub use crate::catalog::generator::generate_catalog;
    pub use crate::converter::{
        BatchOutcome, RecolorTarget, rasterize_batch, rasterize_svg, recolor_batch,
        recolor_to_black, recolor_to_white,
    };
    pub use crate::error::{Error, Result};
    pub use crate::library::{IconData, IconLibrary, IconRequest, IconTexture, ReturnKind};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
