//! Filename parsing: capture extraction and score translation

use logstream_core::{
    lookup_day, lookup_month, Error, LogFile, LogFiles, MatchParts, MultipleError, Result, Score,
    TranslationTable, DAY_NAME_GROUP, MONTH_NAME_GROUP, UNMATCHED_SCORE,
};
use regex::Regex;
use tracing::debug;

/// Translate one captured value into its sort score.
///
/// Resolution order: `MonthName` and `DayName` through the built-in tables
/// (case-insensitive), then the custom table for `name` (exact case), then
/// plain ASCII decimal digits, otherwise [`UNMATCHED_SCORE`].
///
/// Digits from other scripts score [`UNMATCHED_SCORE`]; patterns should
/// capture numbers with `[0-9]` or `(?-u:\d)` rather than the Unicode `\d`.
pub fn score_capture(name: &str, value: &str, translation: &TranslationTable) -> Result<Score> {
    if name == MONTH_NAME_GROUP {
        lookup_month(value).ok_or_else(|| Error::UnknownMonthName(value.to_string()))
    } else if name == DAY_NAME_GROUP {
        lookup_day(value).ok_or_else(|| Error::UnknownDayName(value.to_string()))
    } else if let Some(table) = translation.get(name) {
        table
            .get(value)
            .copied()
            .ok_or_else(|| Error::unknown_translation(name, value))
    } else if is_decimal(value) {
        // Only overflow can fail here
        Ok(value.parse::<Score>().unwrap_or(Score::MAX))
    } else {
        Ok(UNMATCHED_SCORE)
    }
}

fn is_decimal(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Build raw and scored parts from `(capture name, captured text)` slots.
///
/// Unnamed slots are skipped. Every slot is attempted; if any fails, all
/// failures are returned and no parts are produced.
pub fn parse_captures<'a, I>(
    slots: I,
    translation: &TranslationTable,
) -> std::result::Result<MatchParts, Vec<Error>>
where
    I: IntoIterator<Item = (Option<&'a str>, &'a str)>,
{
    let mut parts = MatchParts::default();
    let mut errors = Vec::new();

    for (name, value) in slots {
        let Some(name) = name else { continue };

        parts.raw.insert(name.to_string(), value.to_string());
        match score_capture(name, value, translation) {
            Ok(score) => {
                parts.scores.insert(name.to_string(), score);
            }
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(parts)
    } else {
        Err(errors)
    }
}

/// Populate one file's match parts from its path.
///
/// On failure the file is left unparsed and one error describing the file is
/// returned.
pub fn parse_logfile(
    file: &mut LogFile,
    file_match: &Regex,
    translation: &TranslationTable,
) -> Result<()> {
    let result = {
        let text = file.path.to_string_lossy();
        match file_match.captures(&text) {
            None => Err(Error::PatternMismatch(file.path.clone())),
            Some(caps) => {
                // Optional groups that did not take part in the match read as ""
                let slots = file_match
                    .capture_names()
                    .enumerate()
                    .map(|(i, name)| (name, caps.get(i).map_or("", |m| m.as_str())));

                parse_captures(slots, translation).map_err(|errors| Error::FileParse {
                    path: file.path.clone(),
                    reasons: errors.iter().map(ToString::to_string).collect(),
                })
            }
        }
    };

    match result {
        Ok(parts) => {
            file.set_match_parts(parts);
            Ok(())
        }
        Err(e) => {
            file.clear_match_parts();
            Err(e)
        }
    }
}

/// Populate every file's match parts.
///
/// All files are attempted. Failures are returned together as
/// [`Error::Multiple`] with one message per failed file; files that parsed
/// keep their scores and failed ones stay in `files` unparsed.
pub fn parse_logfiles(
    files: &mut LogFiles,
    file_match: &Regex,
    translation: &TranslationTable,
) -> Result<()> {
    let mut errors = MultipleError::new();

    for file in files.iter_mut() {
        if let Err(e) = parse_logfile(file, file_match, translation) {
            debug!("Failed to parse {}: {}", file.path.display(), e);
            errors.add_message(e.to_string());
        }
    }

    errors.into_result()
}
