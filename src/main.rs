/// gutwipe - recursive secure-deletion tool
///
/// Given a directory root, every contained file is overwritten in place
/// with a 33-pass destruction sequence, then renamed to the hex SHA256
/// fingerprint of its destroyed content. Files are processed by a bounded
/// worker pool; one file's failure never blocks its siblings.
///
/// Out of scope: hardware-level remanence, wear-leveled flash, filesystem
/// journals and snapshots, free-space wiping.

mod error;
mod naming;
mod report;
mod walker;
mod wipe;

use std::io::{self, Write};
use std::path::Path;
use std::process::exit;
use std::sync::Arc;

use report::Reporter;
use walker::WipeCoordinator;

fn main() {
    let raw = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => prompt_for_path(),
    };

    // Paths pasted from a file manager often arrive quoted
    let cleaned: String = raw.chars().filter(|c| *c != '"').collect();
    let root = Path::new(cleaned.trim());

    if !root.is_dir() {
        eprintln!("❌ Not a directory: {}", root.display());
        exit(1);
    }

    eprintln!("🧹 gutwipe starting on: {}", root.display());

    let reporter = Arc::new(Reporter::stdout());
    let summary = WipeCoordinator::new(reporter).run(root);

    eprintln!(
        "✅ Done: {} files, {} wiped, {} failed, {} subtrees skipped in {:.2?}",
        summary.files, summary.wiped, summary.failed, summary.skipped_dirs, summary.duration
    );

    // Per-file failures are reported above, not escalated
    exit(0);
}

fn prompt_for_path() -> String {
    print!("Enter path to folder: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    let _ = io::stdin().read_line(&mut line);
    line
}
