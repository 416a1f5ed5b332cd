//! Constants, built-in translation tables and default values for logstream

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::types::Score;

/// Capture group name translated through the month table
pub const MONTH_NAME_GROUP: &str = "MonthName";

/// Capture group name translated through the day table
pub const DAY_NAME_GROUP: &str = "DayName";

/// Prefix on a priority key that sorts it in descending order
pub const DESCENDING_MARKER: char = '^';

/// Score for a capture with no ordering information
pub const UNMATCHED_SCORE: Score = -1;

/// Separator between messages of an aggregated error
pub const ERROR_SEPARATOR: &str = " :: ";

/// Directory name under the user config dir searched for config files
pub const CONFIG_DIR: &str = "logstream";

/// Default config file names to search for (in priority order)
pub const CONFIG_FILES: &[&str] = &[
    "logstream.toml",
    "logstream.config.toml",
    "logstream.yaml",
    "logstream.yml",
    "logstream.config.yaml",
    "logstream.config.yml",
    "logstream.json",
    "logstream.config.json",
];

/// English month names, full and abbreviated, January = 1
pub static MONTH_LOOKUP: Lazy<HashMap<&'static str, Score>> = Lazy::new(|| {
    HashMap::from([
        ("january", 1),
        ("jan", 1),
        ("february", 2),
        ("feb", 2),
        ("march", 3),
        ("mar", 3),
        ("april", 4),
        ("apr", 4),
        ("may", 5),
        ("june", 6),
        ("jun", 6),
        ("july", 7),
        ("jul", 7),
        ("august", 8),
        ("aug", 8),
        ("september", 9),
        ("sep", 9),
        ("october", 10),
        ("oct", 10),
        ("november", 11),
        ("nov", 11),
        ("december", 12),
        ("dec", 12),
    ])
});

/// English day names, full and abbreviated, Monday = 0 through Sunday = 6
pub static DAY_LOOKUP: Lazy<HashMap<&'static str, Score>> = Lazy::new(|| {
    HashMap::from([
        ("monday", 0),
        ("mon", 0),
        ("tuesday", 1),
        ("tue", 1),
        ("wednesday", 2),
        ("wed", 2),
        ("thursday", 3),
        ("thu", 3),
        ("friday", 4),
        ("fri", 4),
        ("saturday", 5),
        ("sat", 5),
        ("sunday", 6),
        ("sun", 6),
    ])
});

/// Look up a month name, ignoring case
pub fn lookup_month(token: &str) -> Option<Score> {
    MONTH_LOOKUP.get(token.to_lowercase().as_str()).copied()
}

/// Look up a day name, ignoring case
pub fn lookup_day(token: &str) -> Option<Score> {
    DAY_LOOKUP.get(token.to_lowercase().as_str()).copied()
}

/// Per-user config directory, if the platform has one
pub fn user_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(CONFIG_DIR))
}
