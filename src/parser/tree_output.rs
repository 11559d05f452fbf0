//! Classifier for `mvn dependency:tree` output lines.
//!
//! Turns raw report text into leveled [`TreeEntry`] values, discarding
//! log banners, separators, and anything that does not carry a coordinate.

use regex::Regex;
use std::sync::LazyLock;

use super::types::{Classified, Coordinate, Scope, TreeEntry};

/// Number of indentation characters that encode one tree depth.
///
/// The report format nests children two spaces per level; the rendered
/// output uses the same width so a parse/render cycle is stable.
pub const INDENT_WIDTH: usize = 2;

/// Four colon-delimited segments of word/dot/dash characters:
/// `group:artifact:version:scope`. Find semantics, so trailing annotation
/// text after the match is tolerated.
static COORDINATE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([\w.-]+):([\w.-]+):([\w.-]+):([\w.-]+)")
        .expect("coordinate pattern is valid")
});

/// Classifies one raw report line.
///
/// The nesting level is the count of leading spaces divided by
/// [`INDENT_WIDTH`] (odd widths round down). After counting, the line is
/// trimmed; blank lines, `[INFO]` banners, and `---` separators are noise.
/// A line that fails the coordinate pattern is also treated as noise
/// rather than failing the whole parse.
///
/// Pure function of one line; no side effects beyond a debug trace for
/// skipped lines.
///
/// # Example
///
/// ```
/// use mvnscope::parser::{classify_line, Classified};
///
/// let classified = classify_line("  org.libs:a:2.0:compile");
/// let entry = classified.into_entry().unwrap();
/// assert_eq!(entry.level, 1);
/// assert_eq!(entry.coordinate.artifact, "a");
/// ```
pub fn classify_line(line: &str) -> Classified {
    let indent = line.chars().take_while(|&c| c == ' ').count();
    let level = indent / INDENT_WIDTH;
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with("[INFO]") || trimmed.starts_with("---") {
        return Classified::Skip;
    }

    let Some(caps) = COORDINATE_PATTERN.captures(trimmed) else {
        tracing::debug!(line = trimmed, "line does not match coordinate pattern");
        return Classified::Skip;
    };

    let coordinate = Coordinate::new(&caps[1], &caps[2], &caps[3]);
    let scope = Scope::parse(&caps[4]);

    Classified::Entry(TreeEntry::new(level, coordinate, scope))
}

/// Classifies a whole report, keeping entries in report order.
///
/// Skipped lines are filtered out; the result feeds directly into
/// [`DependencyGraph::from_tree_entries`](crate::graph::DependencyGraph::from_tree_entries).
pub fn classify_report<I, S>(lines: I) -> Vec<TreeEntry>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| classify_line(line.as_ref()).into_entry())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_root_line() {
        let entry = classify_line("com.app:root:1.0:compile").into_entry().unwrap();
        assert_eq!(entry.level, 0);
        assert_eq!(entry.coordinate, Coordinate::new("com.app", "root", "1.0"));
        assert_eq!(entry.scope, Some(Scope::Compile));
    }

    #[test]
    fn test_classify_indented_line() {
        let entry = classify_line("    org.libs:c:0.9:test").into_entry().unwrap();
        assert_eq!(entry.level, 2);
        assert_eq!(entry.coordinate.version, "0.9");
        assert_eq!(entry.scope, Some(Scope::Test));
    }

    #[test]
    fn test_odd_indentation_rounds_down() {
        let entry = classify_line("   org.libs:a:2.0:compile").into_entry().unwrap();
        assert_eq!(entry.level, 1);
    }

    #[test]
    fn test_skip_blank_and_banner_lines() {
        assert_eq!(classify_line(""), Classified::Skip);
        assert_eq!(classify_line("   "), Classified::Skip);
        assert_eq!(classify_line("[INFO] Building my-app 1.0"), Classified::Skip);
        assert_eq!(classify_line("  [INFO] --- maven-dependency-plugin ---"), Classified::Skip);
        assert_eq!(classify_line("------------------------------------"), Classified::Skip);
    }

    #[test]
    fn test_skip_malformed_line() {
        assert_eq!(classify_line("not a coordinate"), Classified::Skip);
        assert_eq!(classify_line("only:two:segments"), Classified::Skip);
    }

    #[test]
    fn test_trailing_annotation_tolerated() {
        let entry = classify_line("  org.libs:a:2.0:compile (optional)")
            .into_entry()
            .unwrap();
        assert_eq!(entry.coordinate.artifact, "a");
        assert_eq!(entry.scope, Some(Scope::Compile));
    }

    #[test]
    fn test_unrecognized_scope_yields_none() {
        let entry = classify_line("g:a:1.0:whatever").into_entry().unwrap();
        assert_eq!(entry.scope, None);
        assert_eq!(entry.coordinate, Coordinate::new("g", "a", "1.0"));
    }

    #[test]
    fn test_dash_and_dot_characters_in_segments() {
        let entry = classify_line("org.apache.commons:commons-lang3:3.14.0:compile")
            .into_entry()
            .unwrap();
        assert_eq!(entry.coordinate.group, "org.apache.commons");
        assert_eq!(entry.coordinate.artifact, "commons-lang3");
        assert_eq!(entry.coordinate.version, "3.14.0");
    }

    #[test]
    fn test_classify_report_filters_noise() {
        let lines = vec![
            "[INFO] Scanning for projects...",
            "",
            "com.app:root:1.0:compile",
            "  org.libs:a:2.0:compile",
            "--- end ---",
        ];

        let entries = classify_report(lines);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, 0);
        assert_eq!(entries[1].level, 1);
    }

    #[test]
    fn test_classify_report_preserves_order() {
        let lines = ["com.app:root:1.0:compile", "  g:b:1:compile", "  g:a:1:compile"];
        let entries = classify_report(lines);

        let artifacts: Vec<&str> = entries
            .iter()
            .map(|e| e.coordinate.artifact.as_str())
            .collect();
        assert_eq!(artifacts, vec!["root", "b", "a"]);
    }
}
