//! End-to-end location of ordered log streams

use logstream_core::{CompiledSortPattern, Error, MultipleError, Result, StreamGroups};
use std::path::Path;
use tracing::{info, warn};

use crate::differentiator::group_streams;
use crate::parser::parse_logfiles;
use crate::priority::sort_by_priority;
use crate::scanner::scan_directory_for_logfiles;

/// Ordered streams found under one directory
#[derive(Debug, Clone, Default)]
pub struct StreamScan {
    /// Each logical stream, oldest file first
    pub streams: StreamGroups,
    /// Files that could not be parsed, one message per file
    pub errors: Option<MultipleError>,
}

impl StreamScan {
    /// True when every matching file parsed
    pub fn is_clean(&self) -> bool {
        self.errors.is_none()
    }

    /// Number of files across all streams
    pub fn file_count(&self) -> usize {
        self.streams.values().map(|files| files.len()).sum()
    }

    /// The streams, or the aggregated parse error if any file failed
    pub fn into_result(self) -> Result<StreamGroups> {
        match self.errors {
            Some(errors) => Err(Error::Multiple(errors)),
            None => Ok(self.streams),
        }
    }
}

/// Scan `root`, parse every matching file, split into streams and order each one.
///
/// Files that fail to parse are left out of the streams and reported in
/// [`StreamScan::errors`]; they never prevent the rest from being ordered.
pub fn locate_streams<P: AsRef<Path>>(root: P, pattern: &CompiledSortPattern) -> StreamScan {
    let root = root.as_ref();
    let mut files = scan_directory_for_logfiles(root, pattern.file_match());
    let found = files.len();

    let errors = match parse_logfiles(&mut files, pattern.file_match(), pattern.translation()) {
        Ok(()) => None,
        Err(Error::Multiple(errors)) => {
            warn!(
                "{} of {} files under {} could not be parsed: {}",
                errors.len(),
                found,
                root.display(),
                errors
            );
            Some(errors)
        }
        Err(e) => {
            let mut errors = MultipleError::new();
            errors.add_message(e.to_string());
            Some(errors)
        }
    };
    files.retain_parsed();

    let mut streams = group_streams(files, pattern.differentiator());
    for group in streams.values_mut() {
        sort_by_priority(group, pattern.priority());
    }

    info!(
        "Located {} stream(s) with {} file(s) under {}",
        streams.len(),
        streams.values().map(|files| files.len()).sum::<usize>(),
        root.display()
    );

    StreamScan { streams, errors }
}
