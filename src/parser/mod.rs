//! Parser module for mvnscope.
//!
//! Classifies raw `mvn dependency:tree` output into leveled coordinate
//! entries. The classifier is deliberately lenient: anything that is not a
//! recognizable dependency line (log banners, separators, annotation text)
//! is skipped rather than failing the parse.
//!
//! # Example
//!
//! ```
//! use mvnscope::parser::classify_report;
//!
//! let report = "\
//! com.app:root:1.0:compile
//!   org.libs:a:2.0:compile
//!     org.libs:c:0.9:compile";
//!
//! let entries = classify_report(report.lines());
//! assert_eq!(entries.len(), 3);
//! assert_eq!(entries[2].level, 2);
//! ```

pub mod tree_output;
pub mod types;

// Re-export commonly used items for convenience
pub use tree_output::{classify_line, classify_report, INDENT_WIDTH};
pub use types::{Classified, Coordinate, Scope, TreeEntry};
