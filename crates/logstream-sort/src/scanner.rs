//! Recursive discovery of candidate log files

use logstream_core::{LogFile, LogFiles};
use regex::Regex;
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Scan a directory recursively for files whose path matches `file_match`.
///
/// Directories are always descended into and never returned. Entries that
/// cannot be read are skipped, so the scan itself never fails. Entries are
/// visited in file name order, which keeps repeated scans of an unchanged
/// tree identical.
pub fn scan_directory_for_logfiles<P: AsRef<Path>>(root: P, file_match: &Regex) -> LogFiles {
    let root = root.as_ref();
    let mut files = LogFiles::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };

        let path = entry.path();
        let is_file = if entry.path_is_symlink() {
            path.is_file()
        } else {
            entry.file_type().is_file()
        };
        if !is_file {
            continue;
        }

        if file_match.is_match(&path.to_string_lossy()) {
            trace!("Matched {}", path.display());
            files.push(LogFile::new(path));
        }
    }

    debug!("Found {} matching files in {}", files.len(), root.display());
    files
}
