//! CLI interface for catalog generation

use std::path::Path;
use std::time::Instant;

use crate::catalog::generator::generate_catalog;
use crate::cli::progress::{self, DISK, LOOKING_GLASS};

pub fn execute(white: &Path, black: &Path, output: &Path) -> anyhow::Result<()> {
    let started = Instant::now();

    progress::print_step(1, 2, LOOKING_GLASS, "Indexing icon file lists...");
    let catalog = generate_catalog(white, black)?;
    println!("  {} icons indexed", catalog.len());

    progress::print_step(2, 2, DISK, &format!("Writing {}...", output.display()));
    catalog.save(output)?;

    progress::print_done(started.elapsed());
    Ok(())
}
