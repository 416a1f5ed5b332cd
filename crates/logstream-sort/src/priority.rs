//! Multi-key ordering of parsed log files

use logstream_core::{LogFile, LogFiles, PriorityKey};
use std::cmp::Ordering;

/// Compare two parsed files key by key.
///
/// The first key whose scores differ decides, reversed for descending keys.
/// A key missing from a file scores 0. Files equal on every key compare
/// `Equal`.
pub fn compare(a: &LogFile, b: &LogFile, priority: &[PriorityKey]) -> Ordering {
    for key in priority {
        let ordering = a.score(&key.name).cmp(&b.score(&key.name));
        let ordering = if key.descending {
            ordering.reverse()
        } else {
            ordering
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Whether `a` sorts before `b`
pub fn less(a: &LogFile, b: &LogFile, priority: &[PriorityKey]) -> bool {
    compare(a, b, priority) == Ordering::Less
}

/// Sort files in place, oldest first. Ties keep their current order.
pub fn sort_by_priority(files: &mut LogFiles, priority: &[PriorityKey]) {
    files.sort_by(|a, b| compare(a, b, priority));
}
