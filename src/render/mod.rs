//! Textual rendering of a dependency graph.
//!
//! Produces the indentation-formatted preorder view of a graph: two spaces
//! per depth, root at column 0. The traversal uses an explicit work stack
//! so arbitrarily deep (or malformed) graphs cannot exhaust the call stack.
//!
//! A shared dependency reached via two paths (a diamond) is printed once
//! per incoming path - that is the documented behavior, the node itself is
//! still a single graph entry. True cycles are cut with a ` (cycle)` marker
//! instead of looping forever.

use petgraph::graph::NodeIndex;

use crate::graph::{BuildReport, DependencyGraph};
use crate::parser::types::Coordinate;
use crate::parser::INDENT_WIDTH;

/// Rendered when the graph has no nodes at all.
pub const EMPTY_GRAPH_TEXT: &str = "dependency graph is empty";

/// Renders a build report, rooted at its recorded root.
pub fn render_report(report: &BuildReport) -> String {
    render_tree(&report.graph, report.root.as_ref())
}

/// Renders a graph as an indented tree.
///
/// When `root` is `None` (standalone rendering of a graph with no recorded
/// root), the root falls back to any node with no incoming edge, then to
/// an arbitrary first node if every node has one (degenerate input).
///
/// # Example
///
/// ```
/// use mvnscope::graph::DependencyGraph;
/// use mvnscope::parser::classify_report;
/// use mvnscope::render::render_report;
///
/// let entries = classify_report([
///     "com.app:root:1.0:compile",
///     "  org.libs:a:2.0:compile",
/// ]);
/// let report = DependencyGraph::from_tree_entries(entries);
///
/// assert_eq!(render_report(&report), "com.app:root:1.0\n  org.libs:a:2.0\n");
/// ```
pub fn render_tree(graph: &DependencyGraph, root: Option<&Coordinate>) -> String {
    if graph.is_empty() {
        return format!("{EMPTY_GRAPH_TEXT}\n");
    }

    let start = root
        .and_then(|coordinate| graph.index_of(coordinate))
        .or_else(|| graph.fallback_root());
    let Some(start) = start else {
        return format!("{EMPTY_GRAPH_TEXT}\n");
    };

    let mut out = String::new();
    // Explicit preorder work stack; `path` mirrors the ancestor chain of
    // the node being visited and backs the cycle guard.
    let mut stack: Vec<(NodeIndex, usize)> = vec![(start, 0)];
    let mut path: Vec<NodeIndex> = Vec::new();

    while let Some((idx, depth)) = stack.pop() {
        path.truncate(depth);

        let Some(node) = graph.node_at(idx) else {
            continue;
        };

        let on_cycle = path.contains(&idx);
        out.push_str(&" ".repeat(depth * INDENT_WIDTH));
        out.push_str(&node.coordinate.id());
        if on_cycle {
            tracing::warn!(coordinate = %node.coordinate, "cycle detected while rendering");
            out.push_str(" (cycle)");
        }
        out.push('\n');

        if on_cycle {
            continue;
        }

        path.push(idx);
        // Push children in reverse so the first child renders first
        for child in graph.child_indices(idx).into_iter().rev() {
            stack.push((child, depth + 1));
        }
    }

    out
}
