//! Catalog generation from file-list inputs
//!
//! Builds a [`Catalog`] from two newline-delimited lists of asset paths
//! (one per color), inferring each icon's size, style, and name from the
//! listed path. Run offline; the serving path only ever loads the result.

use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{Catalog, IconColor, IconRecord, IconSize, IconStyle};
use crate::error::Result;
use crate::utils::read_file_list;

/// Subdirectory prefix applied to every generated record path.
pub const ASSET_PREFIX: &str = "png/";

/// Build a catalog from one file list per color.
///
/// Each list holds one asset path per line. Blank lines are ignored; a
/// path from which no icon name can be derived is skipped with a warning.
///
/// # Errors
/// Returns an error if either file list cannot be read.
pub fn generate_catalog<P: AsRef<Path>, Q: AsRef<Path>>(
    white_list: P,
    black_list: Q,
) -> Result<Catalog> {
    let mut catalog = Catalog::default();

    for (list, color) in [
        (white_list.as_ref(), IconColor::White),
        (black_list.as_ref(), IconColor::Black),
    ] {
        let paths = read_file_list(list)?;
        info!("indexing {} {color} icon paths from {}", paths.len(), list.display());
        index_paths(&mut catalog, &paths, color);
    }

    info!("catalog generation complete: {} icons", catalog.len());
    Ok(catalog)
}

/// Index a batch of asset paths of one color into the catalog.
///
/// Insertion is last-write-wins: a later path deriving the same
/// (size, color, style, name) silently replaces the earlier record.
pub fn index_paths(catalog: &mut Catalog, paths: &[String], color: IconColor) {
    for path in paths {
        match record_from_path(path, color) {
            Some(record) => catalog.insert(record),
            None => warn!("skipping listed path with no derivable icon name: {path}"),
        }
    }
}

/// Derive one [`IconRecord`] from a listed asset path.
///
/// Derivation rules:
/// - size: a `2x` substring marks the high-resolution tier, else `1x`;
/// - style: first substring match among the style families, else `normal`;
/// - name: the filename up to the literal `_<color>_` marker, then stripped
///   of everything through the first underscore.
///
/// Returns `None` when the derived name is empty, which would otherwise
/// produce an unaddressable catalog slot.
#[must_use]
pub fn record_from_path(path: &str, color: IconColor) -> Option<IconRecord> {
    let size = IconSize::infer(path);
    let style = IconStyle::infer(path);

    let filename = path.rsplit('/').next().unwrap_or(path);
    let marker = format!("_{color}_");
    let stem = filename.split(marker.as_str()).next().unwrap_or(filename);
    let name = match stem.find('_') {
        Some(idx) => &stem[idx + 1..],
        None => stem,
    };

    if name.is_empty() {
        return None;
    }

    Some(IconRecord {
        path: format!("{ASSET_PREFIX}{path}"),
        used: false,
        style,
        name: name.to_string(),
        size,
        color,
    })
}
