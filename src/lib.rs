//! mvnscope - Maven dependency tree parser and dependency graph builder
//!
//! This crate reconstructs a deduplicated dependency graph from the flat,
//! indentation-encoded output of `mvn dependency:tree`: one node per
//! distinct coordinate, edges from each dependent to its dependencies.

pub mod export;
pub mod graph;
pub mod parser;
pub mod render;
pub mod runner;
