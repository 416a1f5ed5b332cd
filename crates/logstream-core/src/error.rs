//! Error types for logstream

use std::fmt;
use std::path::PathBuf;

use crate::constants::ERROR_SEPARATOR;

/// logstream error type
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unable to locate month name: {0}")]
    UnknownMonthName(String),

    #[error("Unable to locate day name: {0}")]
    UnknownDayName(String),

    #[error("Unable to locate value: ({value}) in translation map: {group}")]
    UnknownTranslation { group: String, value: String },

    #[error("Path does not match file pattern: {}", .0.display())]
    PatternMismatch(PathBuf),

    #[error("Failed to parse {}: {}", .path.display(), .reasons.join(", "))]
    FileParse { path: PathBuf, reasons: Vec<String> },

    #[error("{0}")]
    Multiple(MultipleError),

    #[error("Invalid file match pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

/// Result type alias for logstream
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::ConfigError(msg.into())
    }

    pub fn unknown_translation<G: Into<String>, V: Into<String>>(group: G, value: V) -> Self {
        Error::UnknownTranslation {
            group: group.into(),
            value: value.into(),
        }
    }
}

/// Collection of independent failure messages reported as one error.
///
/// Every parse attempt is made before the collection is inspected, so one
/// bad filename never hides the others.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipleError {
    messages: Vec<String>,
}

impl MultipleError {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_message<S: Into<String>>(&mut self, message: S) {
        self.messages.push(message.into());
    }

    /// True once at least one message has been recorded
    pub fn is_error(&self) -> bool {
        !self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// `Ok(())` when nothing was recorded, otherwise `Error::Multiple`
    pub fn into_result(self) -> Result<()> {
        if self.is_error() {
            Err(Error::Multiple(self))
        } else {
            Ok(())
        }
    }
}

impl fmt::Display for MultipleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages.join(ERROR_SEPARATOR))
    }
}

impl std::error::Error for MultipleError {}

impl From<MultipleError> for Error {
    fn from(errors: MultipleError) -> Self {
        Error::Multiple(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnknownMonthName("Agust".to_string());
        assert_eq!(err.to_string(), "Unable to locate month name: Agust");

        let err = Error::unknown_translation("Seq", "last");
        assert_eq!(
            err.to_string(),
            "Unable to locate value: (last) in translation map: Seq"
        );
    }

    #[test]
    fn test_file_parse_display() {
        let err = Error::FileParse {
            path: PathBuf::from("/logs/2013/Agust/08/app-1.log"),
            reasons: vec![
                "Unable to locate month name: Agust".to_string(),
                "Unable to locate day name: Thurs".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Failed to parse /logs/2013/Agust/08/app-1.log: \
             Unable to locate month name: Agust, Unable to locate day name: Thurs"
        );
    }

    #[test]
    fn test_multiple_error_joins_messages() {
        let mut errors = MultipleError::new();
        assert!(!errors.is_error());

        errors.add_message("first");
        errors.add_message("second".to_string());

        assert!(errors.is_error());
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.to_string(), "first :: second");
    }

    #[test]
    fn test_multiple_error_into_result() {
        assert!(MultipleError::new().into_result().is_ok());

        let mut errors = MultipleError::new();
        errors.add_message("broken");
        match errors.into_result() {
            Err(Error::Multiple(inner)) => assert_eq!(inner.messages(), ["broken"]),
            other => panic!("expected Error::Multiple, got {:?}", other),
        }
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::IoError(_)));
    }
}
