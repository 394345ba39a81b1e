//! CLI interface for batch icon recoloring

use std::path::Path;
use std::time::Instant;

use indicatif::ProgressBar;

use crate::cli::progress::{self, PICTURE};
use crate::converter::{RecolorTarget, recolor_batch};

pub fn execute(
    target: RecolorTarget,
    source_list: &Path,
    dest_list: &Path,
    quiet: bool,
) -> anyhow::Result<()> {
    let started = Instant::now();
    progress::print_step(1, 1, PICTURE, &format!("Recoloring icons to {target}..."));

    let mut bar: Option<ProgressBar> = None;
    let outcome = recolor_batch(source_list, dest_list, target, |current, total, _path| {
        if quiet {
            return;
        }
        let pb = bar.get_or_insert_with(|| progress::simple_bar(total as u64, "Recoloring"));
        pb.set_position(current as u64);
    })?;
    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    for line in outcome.results.iter().filter(|line| line.starts_with("failed")) {
        eprintln!("{line}");
    }
    println!(
        "{} recolored, {} failed",
        outcome.success_count, outcome.fail_count
    );
    progress::print_done(started.elapsed());
    Ok(())
}
