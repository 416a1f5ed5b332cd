//! Core types for logstream

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::convert::Infallible;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::warn;

use crate::constants::DESCENDING_MARKER;
use crate::error::Result;

/// Sort score of a single capture
pub type Score = i64;

/// Custom ordering for one capture group: exact raw token -> score
pub type MatchTranslationMap = HashMap<String, Score>;

/// Custom ordering tables keyed by capture group name
pub type TranslationTable = HashMap<String, MatchTranslationMap>;

/// Logical streams keyed by their resolved differentiator name
pub type StreamGroups = BTreeMap<String, LogFiles>;

/// Raw and scored captures from one successful parse
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchParts {
    pub raw: HashMap<String, String>,
    pub scores: HashMap<String, Score>,
}

/// A single discovered log file and the ordering data taken from its path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogFile {
    pub path: PathBuf,
    /// Matched text of each named capture
    raw_parts: HashMap<String, String>,
    /// Translated score of each named capture
    score_parts: HashMap<String, Score>,
    parsed: bool,
}

impl LogFile {
    /// Create an unparsed file record
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            path: path.into(),
            raw_parts: HashMap::new(),
            score_parts: HashMap::new(),
            parsed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Install the result of a successful parse
    pub fn set_match_parts(&mut self, parts: MatchParts) {
        self.raw_parts = parts.raw;
        self.score_parts = parts.scores;
        self.parsed = true;
    }

    /// Drop any captured data, returning the file to its unparsed state
    pub fn clear_match_parts(&mut self) {
        self.raw_parts.clear();
        self.score_parts.clear();
        self.parsed = false;
    }

    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Matched text of a capture group
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.raw_parts.get(name).map(String::as_str)
    }

    /// Score of a capture group. A name that was never captured scores 0.
    pub fn score(&self, name: &str) -> Score {
        self.score_parts.get(name).copied().unwrap_or(0)
    }

    pub fn raw_parts(&self) -> &HashMap<String, String> {
        &self.raw_parts
    }

    pub fn score_parts(&self) -> &HashMap<String, Score> {
        &self.score_parts
    }
}

/// Ordered collection of log files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFiles(Vec<LogFile>);

impl LogFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position of the file with the given path, if present
    pub fn index_of<P: AsRef<Path>>(&self, path: P) -> Option<usize> {
        let path = path.as_ref();
        self.0.iter().position(|f| f.path == path)
    }

    /// Keep only files that parsed successfully
    pub fn retain_parsed(&mut self) {
        self.0.retain(LogFile::is_parsed);
    }

    pub fn paths(&self) -> Vec<&Path> {
        self.0.iter().map(LogFile::path).collect()
    }
}

impl Deref for LogFiles {
    type Target = Vec<LogFile>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LogFiles {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl From<Vec<LogFile>> for LogFiles {
    fn from(files: Vec<LogFile>) -> Self {
        Self(files)
    }
}

impl FromIterator<LogFile> for LogFiles {
    fn from_iter<I: IntoIterator<Item = LogFile>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for LogFiles {
    type Item = LogFile;
    type IntoIter = std::vec::IntoIter<LogFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a LogFiles {
    type Item = &'a LogFile;
    type IntoIter = std::slice::Iter<'a, LogFile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One sort key from a priority list
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PriorityKey {
    pub name: String,
    pub descending: bool,
}

impl PriorityKey {
    pub fn ascending<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            descending: false,
        }
    }

    pub fn descending<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            descending: true,
        }
    }
}

impl From<&str> for PriorityKey {
    /// Only the first `^` is a marker; anything after it is the key name.
    fn from(s: &str) -> Self {
        match s.strip_prefix(DESCENDING_MARKER) {
            Some(name) => PriorityKey::descending(name),
            None => PriorityKey::ascending(s),
        }
    }
}

impl FromStr for PriorityKey {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(PriorityKey::from(s))
    }
}

impl fmt::Display for PriorityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "{}{}", DESCENDING_MARKER, self.name)
        } else {
            write!(f, "{}", self.name)
        }
    }
}

/// Parse a textual priority list
pub fn parse_priority<S: AsRef<str>>(priority: &[S]) -> Vec<PriorityKey> {
    priority.iter().map(|p| PriorityKey::from(p.as_ref())).collect()
}

/// Sorting criteria for one family of log files.
///
/// Example: files named `2013/August/08/xyz-11.log` are recognised by
///
/// ```text
/// (?P<Year>\d{4})/(?P<MonthName>\w+)/(?P<Day>\d+)/\w+-(?P<Seq>\d+)\.log
/// ```
///
/// and ordered oldest first with the priority `["Year", "MonthName", "Day", "^Seq"]`.
/// `Seq` is descending because a higher sequence number means further from
/// the current file, while a higher date means closer to it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortPattern {
    /// Regular expression over the file path. Every part used for sorting
    /// must be a named capture; `MonthName` and `DayName` are translated from
    /// English names. Numeric captures are scored only when they are ASCII
    /// digits, so write `[0-9]` or `(?-u:\d)` instead of the Unicode `\d`.
    pub file_match: String,
    /// Custom score tables for captures with their own ordering
    #[serde(default)]
    pub translation: TranslationTable,
    /// Capture names to sort on, most significant first. Ascending means
    /// oldest first; prefix a name with `^` to sort it descending.
    #[serde(default)]
    pub priority: Vec<String>,
    /// Capture names or literal strings that, concatenated, identify the
    /// logical stream a file belongs to
    #[serde(default)]
    pub differentiator: Vec<String>,
}

impl SortPattern {
    pub fn new<S: Into<String>>(file_match: S) -> Self {
        Self {
            file_match: file_match.into(),
            ..Default::default()
        }
    }

    pub fn with_priority<S: Into<String>>(mut self, priority: impl IntoIterator<Item = S>) -> Self {
        self.priority = priority.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_differentiator<S: Into<String>>(
        mut self,
        differentiator: impl IntoIterator<Item = S>,
    ) -> Self {
        self.differentiator = differentiator.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_translation(mut self, translation: TranslationTable) -> Self {
        self.translation = translation;
        self
    }

    /// Compile the file match expression and priority list
    pub fn compile(&self) -> Result<CompiledSortPattern> {
        let file_match = Regex::new(&self.file_match)?;
        let priority = parse_priority(&self.priority);

        let compiled = CompiledSortPattern {
            file_match,
            translation: self.translation.clone(),
            priority,
            differentiator: self.differentiator.clone(),
        };

        for name in compiled.unknown_priority_names() {
            warn!(
                "Priority key '{}' is not a capture group in {}",
                name, self.file_match
            );
        }

        Ok(compiled)
    }
}

/// A [`SortPattern`] ready for use. Immutable and shareable across threads.
#[derive(Debug, Clone)]
pub struct CompiledSortPattern {
    file_match: Regex,
    translation: TranslationTable,
    priority: Vec<PriorityKey>,
    differentiator: Vec<String>,
}

impl CompiledSortPattern {
    pub fn file_match(&self) -> &Regex {
        &self.file_match
    }

    pub fn translation(&self) -> &TranslationTable {
        &self.translation
    }

    pub fn priority(&self) -> &[PriorityKey] {
        &self.priority
    }

    pub fn differentiator(&self) -> &[String] {
        &self.differentiator
    }

    /// Named capture groups of the file match expression
    pub fn capture_names(&self) -> HashSet<&str> {
        self.file_match.capture_names().flatten().collect()
    }

    /// Priority keys that name no capture group; they always score 0
    pub fn unknown_priority_names(&self) -> Vec<&str> {
        let names = self.capture_names();
        self.priority
            .iter()
            .map(|k| k.name.as_str())
            .filter(|n| !names.contains(n))
            .collect()
    }
}
