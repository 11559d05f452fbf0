//! Export functionality for build reports.
//!
//! Two formats: the human-oriented indented tree and a deterministic JSON
//! snapshot for machine consumers.

pub mod json;

use crate::graph::BuildReport;
use crate::render;
use std::io::{self, Write};

/// Export format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Indented tree, two spaces per depth.
    Text,
    /// Deterministic JSON snapshot of nodes, edges, and unresolved entries.
    Json,
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "tree" => Ok(ExportFormat::Text),
            "json" => Ok(ExportFormat::Json),
            _ => Err(format!(
                "Unknown export format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Text => write!(f, "text"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Exports a build report to the given writer.
pub fn export<W: Write>(
    format: ExportFormat,
    report: &BuildReport,
    writer: &mut W,
) -> io::Result<()> {
    match format {
        ExportFormat::Text => writer.write_all(render::render_report(report).as_bytes()),
        ExportFormat::Json => json::export(report, writer),
    }
}

/// Exports a build report to a string.
pub fn export_to_string(format: ExportFormat, report: &BuildReport) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
