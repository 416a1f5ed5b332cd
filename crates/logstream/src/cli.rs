//! CLI argument definitions

use clap::{Args, Parser, Subcommand};
use logstream_core::{Score, TranslationTable};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "logstream")]
#[command(version, about = "List rotated log files in chronological order per stream")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output in JSON format instead of tables
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan a directory with a pattern given on the command line
    Scan(ScanArgs),

    /// Scan every stream defined in a config file
    Run(RunArgs),

    /// Validate a config file without scanning
    Check(CheckArgs),
}

#[derive(Args)]
pub struct ScanArgs {
    /// Directory to search recursively
    pub directory: PathBuf,

    /// Regular expression with named captures matched against each file path
    #[arg(long = "match", short = 'm')]
    pub file_match: String,

    /// Capture names to sort on, most significant first; prefix with ^ for descending
    #[arg(long, short = 'p', value_delimiter = ',', allow_hyphen_values = true)]
    pub priority: Vec<String>,

    /// Capture names or literals that identify a stream
    #[arg(long, short = 'd', value_delimiter = ',', allow_hyphen_values = true)]
    pub differentiator: Vec<String>,

    /// Custom score for a captured value (GROUP:VALUE=SCORE, repeatable)
    #[arg(long = "translate", value_parser = parse_translation)]
    pub translations: Vec<(String, String, Score)>,

    /// Fail if any matching file cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

impl ScanArgs {
    pub fn translation_table(&self) -> TranslationTable {
        let mut table = TranslationTable::new();
        for (group, value, score) in &self.translations {
            table
                .entry(group.clone())
                .or_default()
                .insert(value.clone(), *score);
        }
        table
    }
}

#[derive(Args)]
pub struct RunArgs {
    /// Config file (default: search the current directory, then the user config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Only run the named stream
    #[arg(long, short = 's')]
    pub stream: Option<String>,

    /// Fail if any matching file cannot be parsed
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args)]
pub struct CheckArgs {
    /// Config file (default: search the current directory, then the user config directory)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

/// Parse GROUP:VALUE=SCORE. VALUE may be empty and may contain ':'.
fn parse_translation(s: &str) -> Result<(String, String, Score), String> {
    let (group, rest) = s
        .split_once(':')
        .ok_or("Expected GROUP:VALUE=SCORE format")?;
    let (value, score) = rest
        .rsplit_once('=')
        .ok_or("Expected GROUP:VALUE=SCORE format")?;

    if group.is_empty() {
        return Err("Translation group must not be empty".to_string());
    }
    let score: Score = score
        .trim()
        .parse()
        .map_err(|_| format!("Invalid score in translation: {}", score))?;

    Ok((group.to_string(), value.to_string(), score))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translation() {
        assert_eq!(
            parse_translation("Week:first=1").unwrap(),
            ("Week".to_string(), "first".to_string(), 1)
        );
        assert_eq!(
            parse_translation("Seq:=0").unwrap(),
            ("Seq".to_string(), String::new(), 0)
        );
        assert_eq!(
            parse_translation("Stamp:a=b=-2").unwrap(),
            ("Stamp".to_string(), "a=b".to_string(), -2)
        );
    }

    #[test]
    fn test_parse_translation_errors() {
        assert!(parse_translation("Week=1").is_err());
        assert!(parse_translation("Week:first").is_err());
        assert!(parse_translation(":first=1").is_err());
        assert!(parse_translation("Week:first=one").is_err());
    }

    #[test]
    fn test_scan_args() {
        let cli = Cli::parse_from([
            "logstream",
            "scan",
            "/var/log",
            "--match",
            r"(?P<Host>\w+)-(?P<Seq>\d+)\.log",
            "--priority",
            "Host,^Seq",
            "--differentiator",
            "Host,-app",
            "--translate",
            "Seq:current=0",
            "--translate",
            "Seq:old=9",
        ]);

        let Commands::Scan(args) = cli.command else {
            panic!("expected scan command");
        };
        assert_eq!(args.directory, PathBuf::from("/var/log"));
        assert_eq!(args.priority, vec!["Host", "^Seq"]);
        assert_eq!(args.differentiator, vec!["Host", "-app"]);

        let table = args.translation_table();
        assert_eq!(table["Seq"]["current"], 0);
        assert_eq!(table["Seq"]["old"], 9);
    }
}
