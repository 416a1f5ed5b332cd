//! Table and JSON output formatting

use colored::Colorize;
use logstream_core::{LogFile, PriorityKey};
use logstream_sort::StreamScan;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

/// Global flag for JSON output mode
static JSON_MODE: AtomicBool = AtomicBool::new(false);

/// Enable or disable JSON output mode
pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::SeqCst);
}

/// Check if JSON output mode is enabled
pub fn is_json_mode() -> bool {
    JSON_MODE.load(Ordering::SeqCst)
}

#[derive(Tabled)]
pub struct FileRow {
    #[tabled(rename = "#")]
    pub position: usize,
    #[tabled(rename = "path")]
    pub path: String,
    #[tabled(rename = "scores")]
    pub scores: String,
}

impl FileRow {
    fn new(position: usize, file: &LogFile, priority: &[PriorityKey]) -> Self {
        FileRow {
            position,
            path: file.path.display().to_string(),
            scores: format_scores(file, priority),
        }
    }
}

/// JSON representation of one stream
#[derive(Serialize)]
pub struct StreamJson {
    pub name: String,
    pub files: Vec<String>,
}

/// JSON representation of a whole scan
#[derive(Serialize)]
pub struct ScanJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    pub streams: Vec<StreamJson>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ScanJson {
    pub fn new(source: Option<&str>, scan: &StreamScan) -> Self {
        ScanJson {
            source: source.map(str::to_string),
            streams: scan
                .streams
                .iter()
                .map(|(name, files)| StreamJson {
                    name: name.clone(),
                    files: files.iter().map(|f| f.path.display().to_string()).collect(),
                })
                .collect(),
            errors: scan
                .errors
                .as_ref()
                .map(|e| e.messages().to_vec())
                .unwrap_or_default(),
        }
    }
}

/// Render the priority scores of a file, e.g. `Year=2013 ^Seq=11`
pub fn format_scores(file: &LogFile, priority: &[PriorityKey]) -> String {
    priority
        .iter()
        .map(|key| format!("{}={}", key, file.score(&key.name)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Display name for a stream; the empty differentiator gets a placeholder
pub fn stream_label(name: &str) -> String {
    if name.is_empty() {
        "(default)".to_string()
    } else {
        name.to_string()
    }
}

/// Pretty-print any serializable value as JSON
pub fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

pub fn print_scan(source: Option<&str>, scan: &StreamScan, priority: &[PriorityKey]) {
    if is_json_mode() {
        print_json(&ScanJson::new(source, scan));
        return;
    }

    if let Some(source) = source {
        println!("{} {}", "▸".cyan(), source.bold());
    }

    if scan.streams.is_empty() {
        print_info("No matching log files");
    }

    for (name, files) in &scan.streams {
        println!(
            "{} {} ({} file{})",
            "Stream".bold(),
            stream_label(name).green(),
            files.len(),
            if files.len() == 1 { "" } else { "s" }
        );

        let rows: Vec<FileRow> = files
            .iter()
            .enumerate()
            .map(|(i, file)| FileRow::new(i + 1, file, priority))
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::single(0)).with(Alignment::right()))
            .to_string();

        println!("{}", table);
    }

    if let Some(errors) = &scan.errors {
        for message in errors.messages() {
            print_warning(message);
        }
    }
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "!".yellow(), message);
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue(), message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use logstream_core::{parse_priority, LogFiles, MatchParts, MultipleError};
    use std::collections::HashMap;

    fn scored(path: &str, scores: &[(&str, i64)]) -> LogFile {
        let mut file = LogFile::new(path);
        file.set_match_parts(MatchParts {
            raw: HashMap::new(),
            scores: scores.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        });
        file
    }

    #[test]
    fn test_json_mode_toggle() {
        set_json_mode(false);
        assert!(!is_json_mode());

        set_json_mode(true);
        assert!(is_json_mode());

        set_json_mode(false);
        assert!(!is_json_mode());
    }

    #[test]
    fn test_format_scores() {
        let file = scored("/logs/web-11.log", &[("Year", 2013), ("Seq", 11)]);
        let priority = parse_priority(&["Year", "Day", "^Seq"]);
        assert_eq!(format_scores(&file, &priority), "Year=2013 Day=0 ^Seq=11");
    }

    #[test]
    fn test_stream_label() {
        assert_eq!(stream_label(""), "(default)");
        assert_eq!(stream_label("web.log"), "web.log");
    }

    #[test]
    fn test_scan_json() {
        let mut errors = MultipleError::new();
        errors.add_message("Failed to parse /logs/bad.log: Unable to locate month name: Agust");

        let mut scan = StreamScan::default();
        scan.streams.insert(
            "web".to_string(),
            LogFiles::from(vec![scored("/logs/web-2.log", &[]), scored("/logs/web-1.log", &[])]),
        );
        scan.errors = Some(errors);

        let json = ScanJson::new(Some("nginx"), &scan);
        assert_eq!(json.source.as_deref(), Some("nginx"));
        assert_eq!(json.streams.len(), 1);
        assert_eq!(json.streams[0].files, vec!["/logs/web-2.log", "/logs/web-1.log"]);
        assert_eq!(json.errors.len(), 1);

        let value = serde_json::to_value(&json).unwrap();
        assert_eq!(value["streams"][0]["name"], "web");
    }

    #[test]
    fn test_scan_json_omits_empty_fields() {
        let json = ScanJson::new(None, &StreamScan::default());
        let value = serde_json::to_value(&json).unwrap();
        assert!(value.get("source").is_none());
        assert!(value.get("errors").is_none());
    }
}
