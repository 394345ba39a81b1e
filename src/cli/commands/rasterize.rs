//! CLI interface for batch SVG rasterization

use std::path::Path;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::cli::progress::{self, PICTURE};
use crate::converter::rasterize_batch;

pub fn execute(svg_list: &Path, png_list: &Path, quiet: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    progress::print_step(1, 1, PICTURE, "Rasterizing SVG icons...");

    let mut bar: Option<ProgressBar> = None;
    let outcome = rasterize_batch(svg_list, png_list, |current, total, _path| {
        if quiet {
            return;
        }
        let pb = bar.get_or_insert_with(|| progress::simple_bar(total as u64, "Rasterizing"));
        pb.set_position(current as u64);
    })?;
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    for line in outcome.results.iter().filter(|line| line.starts_with("failed")) {
        eprintln!("{line}");
    }
    println!(
        "{} rasterized, {} failed",
        outcome.success_count, outcome.fail_count
    );
    progress::print_done(started.elapsed());
    Ok(())
}
