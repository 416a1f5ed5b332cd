//! Scan command implementation

use anyhow::{bail, Result};
use logstream_core::SortPattern;
use logstream_sort::locate_streams;

use super::check_strict;
use crate::cli::ScanArgs;
use crate::output::print_scan;

pub fn execute(args: ScanArgs) -> Result<()> {
    if !args.directory.is_dir() {
        bail!("Not a directory: {}", args.directory.display());
    }

    let pattern = SortPattern {
        file_match: args.file_match.clone(),
        translation: args.translation_table(),
        priority: args.priority.clone(),
        differentiator: args.differentiator.clone(),
    }
    .compile()?;

    let scan = locate_streams(&args.directory, &pattern);
    print_scan(None, &scan, pattern.priority());

    check_strict(&[&scan], args.strict)
}
