//! Dependency graph implementation using petgraph.
//!
//! Provides a directed graph with one node per distinct coordinate and the
//! ancestor-stack builder that reconstructs the graph from a classified
//! report in a single forward pass.

use petgraph::algo::is_cyclic_directed;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::Direction;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::parser::types::{Coordinate, Scope, TreeEntry};

/// A node in the dependency graph.
///
/// Exactly one node exists per distinct [`Coordinate`] within a single
/// graph; a dependency pulled in by two different parents shares one node
/// with two incoming edges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyNode {
    /// The artifact coordinate this node represents.
    pub coordinate: Coordinate,
    /// The scope seen when the node was first interned.
    pub scope: Option<Scope>,
}

impl DependencyNode {
    /// Creates a new dependency node.
    pub fn new(coordinate: Coordinate, scope: Option<Scope>) -> Self {
        Self { coordinate, scope }
    }
}

/// An entry that could not be attached to any ancestor.
///
/// Produced when a report line's level has no resolvable parent in the
/// graph built so far (level 0 after the root, or a depth jump of more
/// than one). The entry is dropped, never retroactively re-attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedEntry {
    /// The level the line claimed.
    pub level: usize,
    /// The coordinate that could not be placed.
    pub coordinate: Coordinate,
}

/// The result of one graph construction pass.
///
/// Carries the graph, the root coordinate (the first classified entry), and
/// every entry that could not be placed. A report with no classifiable
/// lines yields `root: None` with an empty graph - an explicit empty
/// outcome, not an error.
#[derive(Debug, Clone)]
pub struct BuildReport {
    /// The reconstructed graph.
    pub graph: DependencyGraph,
    /// Coordinate of the root node, if any entry was classified.
    pub root: Option<Coordinate>,
    /// Entries dropped because no ancestor could be resolved.
    pub unresolved: Vec<UnresolvedEntry>,
}

impl BuildReport {
    /// Returns true if the report classified no entries at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of entries that could not be placed.
    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }
}

/// A directed graph of Maven dependencies.
///
/// The graph uses petgraph's `DiGraph` internally, with an intern map from
/// coordinate to node index guaranteeing at most one node per coordinate
/// for the lifetime of the graph. Edges point from a dependent to its
/// dependency. The intern map is owned by the graph and discarded with it,
/// so coordinates from unrelated parses never merge.
///
/// # Example
///
/// ```
/// use mvnscope::graph::DependencyGraph;
/// use mvnscope::parser::classify_report;
///
/// let entries = classify_report([
///     "com.app:root:1.0:compile",
///     "  org.libs:a:2.0:compile",
/// ]);
/// let report = DependencyGraph::from_tree_entries(entries);
///
/// assert_eq!(report.graph.node_count(), 2);
/// assert_eq!(report.graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// The underlying directed graph
    graph: DiGraph<DependencyNode, ()>,
    /// Maps coordinates to their node indices for O(1) interning
    node_indices: HashMap<Coordinate, NodeIndex>,
}

impl DependencyGraph {
    /// Creates a new empty dependency graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: DiGraph::with_capacity(nodes, edges),
            node_indices: HashMap::with_capacity(nodes),
        }
    }

    /// Interns a coordinate, returning the index of its unique node.
    ///
    /// If the coordinate is already present its existing index is returned
    /// unchanged; the scope recorded at first sight wins.
    pub fn intern(&mut self, coordinate: &Coordinate, scope: Option<Scope>) -> NodeIndex {
        if let Some(&idx) = self.node_indices.get(coordinate) {
            return idx;
        }

        let idx = self
            .graph
            .add_node(DependencyNode::new(coordinate.clone(), scope));
        self.node_indices.insert(coordinate.clone(), idx);
        idx
    }

    /// Adds an edge from a dependent to its dependency.
    ///
    /// Both coordinates must already be interned. Duplicate edges collapse:
    /// adding an edge that already exists is a no-op.
    ///
    /// # Returns
    ///
    /// `true` if both endpoints exist (whether or not a new edge was
    /// created), `false` if either coordinate is unknown.
    pub fn add_edge(&mut self, from: &Coordinate, to: &Coordinate) -> bool {
        let Some(&from_idx) = self.node_indices.get(from) else {
            return false;
        };
        let Some(&to_idx) = self.node_indices.get(to) else {
            return false;
        };

        if self.graph.find_edge(from_idx, to_idx).is_none() {
            self.graph.add_edge(from_idx, to_idx, ());
        }
        true
    }

    /// Builds a graph from classified report entries in a single pass.
    ///
    /// The first entry becomes the root; its level is forced to 0 so that
    /// reports not starting at column 0 still parse. Every later entry at
    /// level L is attached to the ancestor chain: the chain is truncated to
    /// length L and the entry's parent is the chain's last element. An
    /// entry whose level has no resolvable parent (level 0 after the root,
    /// or a jump deeper than one past the chain) is dropped and recorded on
    /// the report, never a panic and never a retroactive fix-up.
    ///
    /// Repeated coordinates collapse to one node accumulating incoming
    /// edges from each distinct parent (the diamond case).
    pub fn from_tree_entries<I>(entries: I) -> BuildReport
    where
        I: IntoIterator<Item = TreeEntry>,
    {
        let mut graph = Self::new();
        let mut root: Option<Coordinate> = None;
        let mut unresolved = Vec::new();
        // Ancestor chain indexed by level: ancestors[d] is the most recent
        // entry seen at depth d on the current path.
        let mut ancestors: Vec<Coordinate> = Vec::new();

        for entry in entries {
            if root.is_none() {
                graph.intern(&entry.coordinate, entry.scope);
                root = Some(entry.coordinate.clone());
                ancestors.push(entry.coordinate);
                continue;
            }

            let level = entry.level;
            if level == 0 || level > ancestors.len() {
                tracing::warn!(
                    coordinate = %entry.coordinate,
                    level,
                    "no resolvable ancestor; dropping entry"
                );
                unresolved.push(UnresolvedEntry {
                    level,
                    coordinate: entry.coordinate,
                });
                continue;
            }

            ancestors.truncate(level);
            let parent = ancestors[level - 1].clone();
            graph.intern(&entry.coordinate, entry.scope);
            graph.add_edge(&parent, &entry.coordinate);
            ancestors.push(entry.coordinate);
        }

        BuildReport {
            graph,
            root,
            unresolved,
        }
    }

    /// Gets a reference to a node by coordinate.
    pub fn get_node(&self, coordinate: &Coordinate) -> Option<&DependencyNode> {
        self.node_indices
            .get(coordinate)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Returns the node index for a coordinate, if interned.
    pub fn index_of(&self, coordinate: &Coordinate) -> Option<NodeIndex> {
        self.node_indices.get(coordinate).copied()
    }

    /// Returns the node weight at an index.
    pub(crate) fn node_at(&self, idx: NodeIndex) -> Option<&DependencyNode> {
        self.graph.node_weight(idx)
    }

    /// Gets the direct dependencies of a coordinate (outgoing edges).
    pub fn dependencies_of(&self, coordinate: &Coordinate) -> Vec<&DependencyNode> {
        let Some(&idx) = self.node_indices.get(coordinate) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .filter_map(|edge| self.graph.node_weight(edge.target()))
            .collect()
    }

    /// Gets the dependents of a coordinate (incoming edges).
    pub fn dependents_of(&self, coordinate: &Coordinate) -> Vec<&DependencyNode> {
        let Some(&idx) = self.node_indices.get(coordinate) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Incoming)
            .filter_map(|edge| self.graph.node_weight(edge.source()))
            .collect()
    }

    /// Child indices of a node in insertion order.
    pub(crate) fn child_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        // edges_directed iterates most-recent-first; reverse to recover
        // report order.
        let mut children: Vec<NodeIndex> = self
            .graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|edge| edge.target())
            .collect();
        children.reverse();
        children
    }

    /// Finds a node with no incoming edges, used as a fallback root for
    /// standalone rendering. Falls back to the first node when every node
    /// has an incoming edge (degenerate or cyclic input).
    pub(crate) fn fallback_root(&self) -> Option<NodeIndex> {
        self.graph
            .node_indices()
            .find(|&idx| {
                self.graph
                    .edges_directed(idx, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .or_else(|| self.graph.node_indices().next())
    }

    /// Gets all nodes in the graph.
    pub fn all_nodes(&self) -> Vec<&DependencyNode> {
        self.graph.node_weights().collect()
    }

    /// Returns the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Checks if the graph is empty.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Checks if a coordinate has been interned.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        self.node_indices.contains_key(coordinate)
    }

    /// Checks if the graph contains cycles.
    ///
    /// Well-formed reports never produce one; the builder does not reject
    /// them, so consumers that care can ask.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.graph)
    }

    /// Returns a structural snapshot: coordinate id to sorted set of child
    /// coordinate ids.
    ///
    /// Node indices are not stable across independent parses, but two
    /// structurally equal graphs always produce equal snapshots, which is
    /// what callers should compare.
    pub fn adjacency(&self) -> BTreeMap<String, BTreeSet<String>> {
        let mut adjacency = BTreeMap::new();

        for idx in self.graph.node_indices() {
            let Some(node) = self.graph.node_weight(idx) else {
                continue;
            };
            let children: BTreeSet<String> = self
                .graph
                .edges_directed(idx, Direction::Outgoing)
                .filter_map(|edge| self.graph.node_weight(edge.target()))
                .map(|child| child.coordinate.id())
                .collect();
            adjacency.insert(node.coordinate.id(), children);
        }

        adjacency
    }
}
