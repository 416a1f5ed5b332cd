//! Splitting a flat file list into logical streams

use logstream_core::{LogFile, LogFiles, StreamGroups};

/// Build a file's stream name from the differentiator tokens.
///
/// A token naming a capture of this file contributes the captured text;
/// any other token is used literally.
pub fn resolve_differentiated_name<S: AsRef<str>>(file: &LogFile, differentiator: &[S]) -> String {
    differentiator
        .iter()
        .map(|d| {
            let d = d.as_ref();
            file.raw(d).unwrap_or(d)
        })
        .collect()
}

/// Group files by resolved stream name, preserving input order within each group
pub fn group_streams<S: AsRef<str>>(files: LogFiles, differentiator: &[S]) -> StreamGroups {
    let mut groups = StreamGroups::new();
    for file in files {
        let name = resolve_differentiated_name(&file, differentiator);
        groups.entry(name).or_default().push(file);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use logstream_core::MatchParts;
    use std::collections::HashMap;
    use std::path::Path;

    fn captured(path: &str, raw: &[(&str, &str)]) -> LogFile {
        let mut file = LogFile::new(path);
        file.set_match_parts(MatchParts {
            raw: raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
            scores: HashMap::new(),
        });
        file
    }

    fn host_files() -> LogFiles {
        LogFiles::from(vec![
            captured("a-1.log", &[("Host", "a"), ("Seq", "1")]),
            captured("a-2.log", &[("Host", "a"), ("Seq", "2")]),
            captured("b-1.log", &[("Host", "b"), ("Seq", "1")]),
        ])
    }

    #[test]
    fn test_resolve_mixes_captures_and_literals() {
        let file = captured("web-access-3.log", &[("Host", "web"), ("Kind", "access")]);
        assert_eq!(
            resolve_differentiated_name(&file, &["Host", "-", "Kind", ".log"]),
            "web-access.log"
        );
    }

    #[test]
    fn test_resolve_empty_differentiator() {
        let file = captured("a-1.log", &[("Host", "a")]);
        let empty: [&str; 0] = [];
        assert_eq!(resolve_differentiated_name(&file, &empty), "");
    }

    #[test]
    fn test_group_by_capture() {
        let groups = group_streams(host_files(), &["Host"]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["a"].len(), 2);
        assert_eq!(groups["b"].len(), 1);
        assert_eq!(
            groups["a"].paths(),
            vec![Path::new("a-1.log"), Path::new("a-2.log")]
        );
    }

    #[test]
    fn test_group_literals_only_is_single_stream() {
        let groups = group_streams(host_files(), &["app", ".log"]);

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["app.log"].len(), 3);
    }

    #[test]
    fn test_group_with_literal_suffix() {
        let groups = group_streams(host_files(), &["Host", "-web"]);

        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["a-web", "b-web"]);
    }
}
