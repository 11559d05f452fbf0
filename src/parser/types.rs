//! Shared types for dependency-tree parsing.
//!
//! This module defines the core data structures used to represent
//! Maven coordinates and classified report lines.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one Maven artifact, independent of where it appears in a report.
///
/// Equality and hashing are structural over `(group, artifact, version)`:
/// two report lines naming the same triple refer to the same dependency and
/// are collapsed into a single graph node. Scope is intentionally NOT part
/// of a coordinate.
///
/// # Example
///
/// ```
/// use mvnscope::parser::types::Coordinate;
///
/// let coord = Coordinate::new("org.example", "my-lib", "1.2.3");
/// assert_eq!(coord.to_string(), "org.example:my-lib:1.2.3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    /// The group id (e.g., "org.apache.commons").
    pub group: String,

    /// The artifact id (e.g., "commons-lang3").
    pub artifact: String,

    /// The resolved version (e.g., "3.14.0").
    pub version: String,
}

impl Coordinate {
    /// Creates a new coordinate.
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version: version.into(),
        }
    }

    /// Returns the canonical `group:artifact:version` id string.
    pub fn id(&self) -> String {
        format!("{}:{}:{}", self.group, self.artifact, self.version)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group, self.artifact, self.version)
    }
}

/// The Maven dependency scope attached to a report line.
///
/// Scope is informational only: it is carried on the graph node but never
/// participates in coordinate identity or deduplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// Default scope - on the compile and runtime classpaths.
    Compile,
    /// Provided by the JDK or container at runtime.
    Provided,
    /// Runtime classpath only.
    Runtime,
    /// Test compilation and execution only.
    Test,
    /// Like provided, but resolved from an explicit system path.
    System,
    /// Dependency-management import (BOM).
    Import,
}

impl Scope {
    /// Parses a scope segment from a report line.
    ///
    /// Returns `None` for text that is not a recognized Maven scope, which
    /// keeps the classifier lenient about trailing annotations.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "compile" => Some(Scope::Compile),
            "provided" => Some(Scope::Provided),
            "runtime" => Some(Scope::Runtime),
            "test" => Some(Scope::Test),
            "system" => Some(Scope::System),
            "import" => Some(Scope::Import),
            _ => None,
        }
    }

    /// Returns the scope label as it appears in report output.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::Compile => "compile",
            Scope::Provided => "provided",
            Scope::Runtime => "runtime",
            Scope::Test => "test",
            Scope::System => "system",
            Scope::Import => "import",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One classified dependency line, ready for graph construction.
///
/// `level` is transient: it drives parent resolution during the single
/// build pass and never appears in the final graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// Nesting depth derived from leading indentation (root = 0).
    pub level: usize,

    /// The coordinate extracted from the line.
    pub coordinate: Coordinate,

    /// The scope segment, when recognized.
    pub scope: Option<Scope>,
}

impl TreeEntry {
    /// Creates a new tree entry.
    pub fn new(level: usize, coordinate: Coordinate, scope: Option<Scope>) -> Self {
        Self {
            level,
            coordinate,
            scope,
        }
    }
}

/// The outcome of classifying one raw report line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classified {
    /// Noise: blank line, log banner, separator, or unmatchable text.
    Skip,
    /// A dependency line with its computed level and coordinate.
    Entry(TreeEntry),
}

impl Classified {
    /// Returns the entry if this line classified as one.
    pub fn into_entry(self) -> Option<TreeEntry> {
        match self {
            Classified::Skip => None,
            Classified::Entry(entry) => Some(entry),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_display() {
        let coord = Coordinate::new("org.example", "my-lib", "1.2.3");
        assert_eq!(format!("{}", coord), "org.example:my-lib:1.2.3");
        assert_eq!(coord.id(), "org.example:my-lib:1.2.3");
    }

    #[test]
    fn test_coordinate_structural_equality() {
        let a = Coordinate::new("org.libs", "c", "0.9");
        let b = Coordinate::new("org.libs".to_string(), "c".to_string(), "0.9".to_string());
        assert_eq!(a, b);

        let c = Coordinate::new("org.libs", "c", "1.0");
        assert_ne!(a, c);
    }

    #[test]
    fn test_coordinate_hash_matches_equality() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(Coordinate::new("org.libs", "c", "0.9"));
        set.insert(Coordinate::new("org.libs", "c", "0.9"));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_scope_parse() {
        assert_eq!(Scope::parse("compile"), Some(Scope::Compile));
        assert_eq!(Scope::parse("test"), Some(Scope::Test));
        assert_eq!(Scope::parse("import"), Some(Scope::Import));
        assert_eq!(Scope::parse("banana"), None);
        assert_eq!(Scope::parse(""), None);
    }

    #[test]
    fn test_scope_label_round_trip() {
        for scope in [
            Scope::Compile,
            Scope::Provided,
            Scope::Runtime,
            Scope::Test,
            Scope::System,
            Scope::Import,
        ] {
            assert_eq!(Scope::parse(scope.label()), Some(scope));
        }
    }

    #[test]
    fn test_classified_into_entry() {
        assert_eq!(Classified::Skip.into_entry(), None);

        let entry = TreeEntry::new(1, Coordinate::new("g", "a", "1"), Some(Scope::Compile));
        assert_eq!(Classified::Entry(entry.clone()).into_entry(), Some(entry));
    }
}
