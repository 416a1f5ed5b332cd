//! logstream sort - Discovery, parsing, grouping and ordering of rotated log files
//!
//! The pipeline runs in four synchronous stages:
//!
//! 1. [`scan_directory_for_logfiles`] walks a directory tree and keeps files
//!    whose path matches the file pattern.
//! 2. [`parse_logfiles`] extracts captures from every path and translates them
//!    to scores, collecting failures instead of stopping at the first one.
//! 3. [`group_streams`] splits the files into logical streams by differentiator.
//! 4. [`sort_by_priority`] orders each stream.
//!
//! [`locate_streams`] runs all four for a compiled [`SortPattern`](logstream_core::SortPattern).

mod differentiator;
mod parser;
mod priority;
mod scanner;
mod streams;

pub use differentiator::{group_streams, resolve_differentiated_name};
pub use parser::{parse_captures, parse_logfile, parse_logfiles, score_capture};
pub use priority::{compare, less, sort_by_priority};
pub use scanner::scan_directory_for_logfiles;
pub use streams::{locate_streams, StreamScan};
