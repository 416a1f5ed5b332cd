//! Check command implementation

use anyhow::{bail, Result};
use colored::Colorize;
use logstream_core::StreamConfig;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use super::load_config;
use crate::cli::CheckArgs;
use crate::output::{is_json_mode, print_json, print_success, print_warning};

/// Outcome of checking one configured stream
#[derive(Debug, Serialize)]
pub struct StreamCheck {
    pub name: String,
    pub log_directory: String,
    pub valid: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub problems: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "stream")]
    name: String,
    #[tabled(rename = "directory")]
    log_directory: String,
    #[tabled(rename = "status")]
    status: String,
}

impl From<&StreamCheck> for CheckRow {
    fn from(check: &StreamCheck) -> Self {
        let status = if !check.valid {
            "invalid".red().to_string()
        } else if !check.warnings.is_empty() {
            "warning".yellow().to_string()
        } else {
            "ok".green().to_string()
        };

        CheckRow {
            name: check.name.clone(),
            log_directory: check.log_directory.clone(),
            status,
        }
    }
}

/// Compile a stream's pattern and look for likely mistakes
pub fn check_stream(stream: &StreamConfig) -> StreamCheck {
    let mut problems = Vec::new();
    let mut warnings = Vec::new();

    match stream.compile() {
        Ok(pattern) => {
            for name in pattern.unknown_priority_names() {
                warnings.push(format!("priority key '{}' is not a capture group", name));
            }
            let captures = pattern.capture_names();
            for group in stream.pattern.translation.keys() {
                if !captures.contains(group.as_str()) {
                    warnings.push(format!("translation '{}' is not a capture group", group));
                }
            }
        }
        Err(e) => problems.push(e.to_string()),
    }

    if !stream.log_directory.is_dir() {
        warnings.push(format!(
            "log directory {} does not exist",
            stream.log_directory.display()
        ));
    }

    StreamCheck {
        name: stream.name.clone(),
        log_directory: stream.log_directory.display().to_string(),
        valid: problems.is_empty(),
        problems,
        warnings,
    }
}

pub fn execute(args: CheckArgs) -> Result<()> {
    let (config, path) = load_config(args.config.as_deref())?;
    let checks: Vec<StreamCheck> = config.streams.iter().map(check_stream).collect();
    let invalid = checks.iter().filter(|c| !c.valid).count();

    if is_json_mode() {
        print_json(&checks);
    } else {
        let rows: Vec<CheckRow> = checks.iter().map(CheckRow::from).collect();
        println!("{}", Table::new(rows).with(Style::rounded()));

        for check in &checks {
            for message in check.problems.iter().chain(&check.warnings) {
                print_warning(&format!("{}: {}", check.name, message));
            }
        }
    }

    if invalid > 0 {
        bail!("{} of {} stream(s) in {} are invalid", invalid, checks.len(), path.display());
    }

    if !is_json_mode() {
        print_success(&format!("{} is valid", path.display()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use logstream_core::SortPattern;
    use std::collections::HashMap;
    use tempfile::TempDir;

    #[test]
    fn test_check_valid_stream() {
        let dir = TempDir::new().unwrap();
        let stream = StreamConfig {
            name: "app".to_string(),
            log_directory: dir.path().to_path_buf(),
            pattern: SortPattern::new(r"app-(?P<Seq>\d+)\.log").with_priority(["^Seq"]),
        };

        let check = check_stream(&stream);
        assert!(check.valid);
        assert!(check.problems.is_empty());
        assert!(check.warnings.is_empty());
    }

    #[test]
    fn test_check_reports_warnings() {
        let stream = StreamConfig {
            name: "app".to_string(),
            log_directory: "/nonexistent/logstream".into(),
            pattern: SortPattern::new(r"app-(?P<Seq>\d+)\.log")
                .with_priority(["Year", "^Seq"])
                .with_translation(HashMap::from([("Week".to_string(), HashMap::new())])),
        };

        let check = check_stream(&stream);
        assert!(check.valid);
        assert_eq!(check.warnings.len(), 3);
        assert!(check.warnings[0].contains("'Year'"));
        assert!(check.warnings[1].contains("'Week'"));
    }

    #[test]
    fn test_check_invalid_pattern() {
        let stream = StreamConfig {
            name: "broken".to_string(),
            log_directory: "/var/log".into(),
            pattern: SortPattern::new(r"app-(?P<Seq>\d+"),
        };

        let check = check_stream(&stream);
        assert!(!check.valid);
        assert_eq!(check.problems.len(), 1);
        assert!(check.problems[0].contains("stream 'broken'"));
    }
}
