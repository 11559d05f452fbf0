//! JSON export of a build report.
//!
//! The snapshot is fully deterministic: nodes and edges are sorted by
//! coordinate id, so two structurally equal graphs serialize identically
//! regardless of insertion order.

use serde::Serialize;
use std::io::{self, Write};

use crate::graph::BuildReport;

/// One node in the JSON snapshot.
#[derive(Debug, Serialize)]
struct JsonNode {
    id: String,
    group: String,
    artifact: String,
    version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    scope: Option<String>,
}

/// One parent-to-child edge in the JSON snapshot.
#[derive(Debug, Serialize)]
struct JsonEdge {
    from: String,
    to: String,
}

/// A line the builder could not attach to any ancestor.
#[derive(Debug, Serialize)]
struct JsonUnresolved {
    level: usize,
    coordinate: String,
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct JsonReport {
    root: Option<String>,
    node_count: usize,
    edge_count: usize,
    nodes: Vec<JsonNode>,
    edges: Vec<JsonEdge>,
    unresolved: Vec<JsonUnresolved>,
}

impl JsonReport {
    fn from_report(report: &BuildReport) -> Self {
        let mut nodes: Vec<JsonNode> = report
            .graph
            .all_nodes()
            .into_iter()
            .map(|node| JsonNode {
                id: node.coordinate.id(),
                group: node.coordinate.group.clone(),
                artifact: node.coordinate.artifact.clone(),
                version: node.coordinate.version.clone(),
                scope: node.scope.map(|s| s.label().to_string()),
            })
            .collect();
        nodes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut edges: Vec<JsonEdge> = report
            .graph
            .adjacency()
            .into_iter()
            .flat_map(|(from, children)| {
                children.into_iter().map(move |to| JsonEdge {
                    from: from.clone(),
                    to,
                })
            })
            .collect();
        edges.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));

        JsonReport {
            root: report.root.as_ref().map(|c| c.id()),
            node_count: report.graph.node_count(),
            edge_count: report.graph.edge_count(),
            nodes,
            edges,
            unresolved: report
                .unresolved
                .iter()
                .map(|u| JsonUnresolved {
                    level: u.level,
                    coordinate: u.coordinate.id(),
                })
                .collect(),
        }
    }
}

/// Writes the JSON snapshot of a build report.
pub fn export<W: Write>(report: &BuildReport, writer: &mut W) -> io::Result<()> {
    let doc = JsonReport::from_report(report);
    serde_json::to_writer_pretty(&mut *writer, &doc)?;
    writer.write_all(b"\n")
}
