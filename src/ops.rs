use std::ops::Range;

use itertools::Itertools;
use tracing::warn;

use crate::{error::*, repr::VertexLabels, *};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns the range `0..n` of internal node indices.
    /// In contrast to a borrowing iterator, the range may be used while `self` is mutably borrowed.
    fn vertices_range(&self) -> Range<Node> {
        0..self.number_of_nodes()
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Provides getters pertaining to the edge-size of a graph
pub trait GraphEdgeOrder {
    /// Returns the number of edges `{u, v}` with `u != v`.
    /// Every undirected edge is counted once; self-loops are not counted.
    fn number_of_edges(&self) -> NumEdges;
}

/// Maps between the public identity of vertices (labels) and their internal indices
pub trait GraphLabels: GraphNodeOrder {
    /// *true* if raw indices are accepted as [`VertexRef`]s in addition to labels
    const INDEX_ADDRESSABLE: bool;

    /// Returns all labels in creation order, i.e. `labels()[u]` is the label of node `u`
    fn labels(&self) -> &[Label];

    /// Returns the label of node `u`.
    /// ** Panics if `u >= n` **
    fn label_of(&self, u: Node) -> &str {
        &self.labels()[u as usize]
    }

    /// Returns the internal index of the vertex with the given label
    fn node_of(&self, label: &str) -> Option<Node>;

    /// Returns *true* if a vertex with the given label exists
    fn contains_label(&self, label: &str) -> bool {
        self.node_of(label).is_some()
    }

    /// Resolves a vertex reference into an internal index.
    ///
    /// Labels are looked up first. Raw indices are accepted if they are in range and the
    /// representation is index-addressable. Everything else is an `InvalidVertex`-error.
    fn resolve<'a, V>(&self, vertex: V) -> Result<Node>
    where
        V: Into<VertexRef<'a>>,
    {
        let vertex = vertex.into();
        let node = match vertex {
            VertexRef::Label(label) => self.node_of(label),
            VertexRef::Index(u) => {
                (Self::INDEX_ADDRESSABLE && u < self.number_of_nodes()).then_some(u)
            }
        };
        node.ok_or_else(|| invalid_vertex!(vertex))
    }

    /// Resolves both endpoints of an edge
    fn resolve_pair<'a, 'b, U, V>(&self, u: U, v: V) -> Result<(Node, Node)>
    where
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        Ok((self.resolve(u)?, self.resolve(v)?))
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over the neighborhood of a given vertex in storage order.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`. A self-loop counts once.
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns the degrees of all nodes in node order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices_range().map(move |u| self.degree_of(u))
    }

    /// Returns the degrees of all nodes sorted ascendingly
    fn degree_sequence(&self) -> Vec<NumNodes> {
        self.degrees().sorted_unstable().collect()
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all edges `{u, v}` with `u != v`, each exactly once as `Edge(u, v)`
    /// with `u < v`.
    ///
    /// Edges are grouped by their smaller endpoint in node order; within a group they appear in
    /// the order of the neighborhood storage.
    fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.vertices_range().flat_map(move |u| {
            self.neighbors_of(u)
                .filter(move |&v| u < v)
                .map(move |v| Edge(u, v))
        })
    }

    /// Returns an iterator over all nodes with a self-loop
    fn self_loops(&self) -> impl Iterator<Item = Node> + '_ {
        self.vertices_range()
            .filter(move |&u| self.neighbors_of(u).any(|v| v == u))
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest: GraphNodeOrder {
    /// Returns *true* if the egde {u,v} exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;

    /// Returns *true* if a self-loop (u,u) exists.
    /// ** Panics if `u >= n` **
    fn has_self_loop(&self, u: Node) -> bool {
        self.has_edge(u, u)
    }
}

/// Trait for creating a new graph without edges
pub trait GraphNew: Sized {
    /// Creates a graph without edges over the given vertices
    fn from_vertex_labels(labels: VertexLabels) -> Self;

    /// Creates a graph without edges over `n` vertices labelled `"0"` to `"n-1"`.
    ///
    /// # Errors
    /// Fails if `n == 0`.
    fn new(n: NumNodes) -> Result<Self> {
        Ok(Self::from_vertex_labels(VertexLabels::numbered(n)?))
    }

    /// Creates a graph without edges over the given labels in the given order.
    ///
    /// # Errors
    /// Fails if `labels` is empty or contains a label twice.
    fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        Ok(Self::from_vertex_labels(VertexLabels::from_labels(labels)?))
    }
}

/// Provides functions to insert/delete edges
pub trait GraphEdgeEditing: GraphLabels + AdjacencyTest {
    /// Inserts the edge {u,v} by internal indices.
    /// Returns *true* exactly if the edge was not present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn insert_edge(&mut self, u: Node, v: Node) -> bool;

    /// Deletes the edge {u,v} by internal indices.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    fn delete_edge(&mut self, u: Node, v: Node) -> bool;

    /// Adds the edge {u,v}. Adding an existing edge is a no-op.
    /// Returns `Ok(true)` exactly if the edge was not present previously.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if either endpoint does not belong to the graph. The graph is
    /// left unchanged in this case.
    fn add_edge<'a, 'b, U, V>(&mut self, u: U, v: V) -> Result<bool>
    where
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        let (u, v) = self.resolve_pair(u, v).inspect_err(|error| {
            warn!(%error, "rejected edge insertion");
        })?;
        Ok(self.insert_edge(u, v))
    }

    /// Adds all edges in the collection and stops at the first invalid one.
    /// Edges before the invalid one remain added.
    fn add_edges<'a, 'b, I, U, V>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (U, V)>,
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        for (u, v) in edges {
            self.add_edge(u, v)?;
        }
        Ok(())
    }

    /// Removes the edge {u,v}. Removing an absent edge is a no-op.
    /// Returns `Ok(true)` exactly if the edge was present previously.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if either endpoint does not belong to the graph. The graph is
    /// left unchanged in this case.
    fn remove_edge<'a, 'b, U, V>(&mut self, u: U, v: V) -> Result<bool>
    where
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        let (u, v) = self.resolve_pair(u, v).inspect_err(|error| {
            warn!(%error, "rejected edge removal");
        })?;
        Ok(self.delete_edge(u, v))
    }
}

/// A super trait for creating a graph from scratch from a set of vertices and index-edges
pub trait GraphFromScratch {
    /// Create a graph from its vertices and an iterator over Edges
    /// ** Panics if an endpoint is out of range **
    fn from_edges(labels: VertexLabels, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self;
}

impl<G: GraphNew + GraphEdgeEditing> GraphFromScratch for G {
    fn from_edges(labels: VertexLabels, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::from_vertex_labels(labels);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.insert_edge(u, v);
        }
        graph
    }
}

/// The contract shared by all representations.
///
/// Algorithms only depend on this trait, so both sides of a binary relation (subgraph,
/// isomorphism) may be stored differently.
pub trait Graph: GraphLabels + GraphEdgeOrder + AdjacencyList + AdjacencyTest {}

impl<G> Graph for G where G: GraphLabels + GraphEdgeOrder + AdjacencyList + AdjacencyTest {}
