//! Graph module for dependency relationship modeling.
//!
//! Provides the [`DependencyGraph`] struct, built on a directed petgraph
//! graph with coordinate interning, and the single-pass builder that
//! reconstructs a graph from classified report entries.
//!
//! # Example
//!
//! ```
//! use mvnscope::graph::DependencyGraph;
//! use mvnscope::parser::classify_report;
//!
//! let entries = classify_report([
//!     "com.app:root:1.0:compile",
//!     "  org.libs:a:2.0:compile",
//!     "  org.libs:b:3.0:compile",
//! ]);
//! let report = DependencyGraph::from_tree_entries(entries);
//!
//! assert_eq!(report.graph.node_count(), 3);
//! assert!(report.unresolved.is_empty());
//! ```

mod dependency_graph;

pub use dependency_graph::{BuildReport, DependencyGraph, DependencyNode, UnresolvedEntry};
