//! CLI interface for catalog validation

use std::path::Path;

use crate::catalog::{Catalog, IconColor, IconSize, IconStyle};

pub fn execute(catalog_path: &Path) -> anyhow::Result<()> {
    // Load already runs the invariant check.
    let catalog = Catalog::load(catalog_path)?;

    println!("Catalog: {}", catalog_path.display());
    println!("Icons: {}", catalog.len());
    println!();

    for size in IconSize::ALL {
        for color in IconColor::ALL {
            for style in IconStyle::ALL {
                let count = catalog
                    .records()
                    .filter(|r| r.size == size && r.color == color && r.style == style)
                    .count();
                if count > 0 {
                    println!("{size}/{color}/{style}: {count}");
                }
            }
        }
    }

    println!();
    println!("Catalog OK");
    Ok(())
}
