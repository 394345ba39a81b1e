//! Sequential batch conversion over file-list pairs
//!
//! Each batch job reads a source list and a destination list (one path per
//! line), pairs them up in order, and applies one transform per pair.
//! Failures are isolated: a bad item is recorded and the run continues.

use std::path::Path;

use tracing::{info, warn};

use crate::converter::recolor::{RecolorTarget, recolor};
use crate::converter::svg_png::rasterize_svg;
use crate::error::Result;
use crate::utils::read_file_list;

/// Result of a batch conversion run.
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    /// Number of successfully converted items.
    pub success_count: usize,
    /// Number of failed items.
    pub fail_count: usize,
    /// One message per processed item.
    pub results: Vec<String>,
}

/// Rasterize every SVG in `svg_list` to the matching PNG path in `png_list`.
///
/// `progress` is called before each item with (current, total, source path).
///
/// # Errors
/// Returns an error if either file list cannot be read. Per-item failures
/// are reported in the outcome, not propagated.
pub fn rasterize_batch<P, Q, F>(svg_list: P, png_list: Q, progress: F) -> Result<BatchOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(usize, usize, &str),
{
    run_batch(svg_list.as_ref(), png_list.as_ref(), "rasterized", progress, |src, dst| {
        rasterize_svg(src, dst)
    })
}

/// Recolor every raster icon in `source_list` to the matching path in
/// `dest_list`.
///
/// `progress` is called before each item with (current, total, source path).
///
/// # Errors
/// Returns an error if either file list cannot be read. Per-item failures
/// are reported in the outcome, not propagated.
pub fn recolor_batch<P, Q, F>(
    source_list: P,
    dest_list: Q,
    target: RecolorTarget,
    progress: F,
) -> Result<BatchOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    F: FnMut(usize, usize, &str),
{
    run_batch(
        source_list.as_ref(),
        dest_list.as_ref(),
        "recolored",
        progress,
        |src, dst| recolor(src, dst, target),
    )
}

/// Drive one transform across a (source list, destination list) pair.
fn run_batch<F, Op>(
    source_list: &Path,
    dest_list: &Path,
    verb: &str,
    mut progress: F,
    op: Op,
) -> Result<BatchOutcome>
where
    F: FnMut(usize, usize, &str),
    Op: Fn(&Path, &Path) -> Result<()>,
{
    let sources = read_file_list(source_list)?;
    let dests = read_file_list(dest_list)?;
    if sources.len() != dests.len() {
        warn!(
            "list length mismatch: {} sources vs {} destinations; extra entries are ignored",
            sources.len(),
            dests.len()
        );
    }

    let total = sources.len().min(dests.len());
    let mut outcome = BatchOutcome {
        success_count: 0,
        fail_count: 0,
        results: Vec::with_capacity(total),
    };

    for (idx, (src, dst)) in sources.iter().zip(&dests).enumerate() {
        progress(idx + 1, total, src);
        match op(Path::new(src), Path::new(dst)) {
            Ok(()) => {
                outcome.success_count += 1;
                outcome.results.push(format!("{verb}: {src} -> {dst}"));
            }
            Err(e) => {
                outcome.fail_count += 1;
                warn!("failed to convert {src}: {e}");
                outcome.results.push(format!("failed {src}: {e}"));
            }
        }
    }

    info!(
        "batch complete: {} {verb}, {} failed",
        outcome.success_count, outcome.fail_count
    );
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn list_file(dir: &Path, name: &str, lines: &[&str]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        for line in lines {
            writeln!(file, "{line}").unwrap();
        }
        path
    }

    #[test]
    fn failures_are_isolated_and_counted() {
        let dir = tempfile::tempdir().unwrap();

        // A real source image next to a missing one.
        let good_src = dir.path().join("good.png");
        image::RgbaImage::new(4, 4).save(&good_src).unwrap();

        let sources = list_file(
            dir.path(),
            "sources.txt",
            &[good_src.to_str().unwrap(), "missing.png"],
        );
        let dests = list_file(
            dir.path(),
            "dests.txt",
            &[
                dir.path().join("good_out.png").to_str().unwrap(),
                dir.path().join("missing_out.png").to_str().unwrap(),
            ],
        );

        let outcome =
            recolor_batch(&sources, &dests, RecolorTarget::White, |_, _, _| {}).unwrap();
        assert_eq!(outcome.success_count, 1);
        assert_eq!(outcome.fail_count, 1);
        assert_eq!(outcome.results.len(), 2);
        assert!(dir.path().join("good_out.png").exists());
    }

    #[test]
    fn shorter_list_bounds_the_run() {
        let dir = tempfile::tempdir().unwrap();

        let src = dir.path().join("only.png");
        image::RgbaImage::new(2, 2).save(&src).unwrap();

        let sources = list_file(
            dir.path(),
            "sources.txt",
            &[src.to_str().unwrap(), "extra.png", "more.png"],
        );
        let dests = list_file(
            dir.path(),
            "dests.txt",
            &[dir.path().join("only_out.png").to_str().unwrap()],
        );

        let mut seen = Vec::new();
        let outcome = recolor_batch(&sources, &dests, RecolorTarget::Black, |current, total, _| {
            seen.push((current, total));
        })
        .unwrap();
        assert_eq!(outcome.success_count + outcome.fail_count, 1);
        assert_eq!(seen, vec![(1, 1)]);
    }
}
