/*!
# Subgraph Algorithms

Provides the subgraph relations between two (possibly differently represented) graphs and the
extraction of vertex-induced subgraphs.

Vertices are matched by label, never by index, and edges are compared as unordered pairs.
Self-loops play no role in any of the relations.
*/

use super::*;

/// Relations between a graph and a possible supergraph
pub trait SubgraphRelations {
    /// Returns *true* if every vertex of `self` is a vertex of `other` and every edge of `self`
    /// is an edge of `other`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = SparseGraph::from_labels(["A", "B", "C"]).unwrap();
    /// g.add_edges([("A", "B"), ("B", "C")]).unwrap();
    ///
    /// let mut h = DenseGraph::from_labels(["C", "B"]).unwrap();
    /// h.add_edge("C", "B").unwrap();
    ///
    /// assert!(h.is_subgraph_of(&g));
    /// assert!(!g.is_subgraph_of(&h));
    /// ```
    fn is_subgraph_of<G: Graph>(&self, other: &G) -> bool;

    /// Returns *true* if `self` is a subgraph of `other` with exactly the same vertices
    fn is_spanning_subgraph_of<G: Graph>(&self, other: &G) -> bool;

    /// Returns *true* if every vertex of `self` is a vertex of `other` and two distinct vertices
    /// of `self` are adjacent in `self` exactly if they are adjacent in `other`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DenseGraph::from_labels(["A", "B", "C"]).unwrap();
    /// g.add_edges([("A", "B"), ("B", "C"), ("A", "C")]).unwrap();
    ///
    /// let mut h = SparseGraph::from_labels(["A", "C"]).unwrap();
    /// assert!(h.is_subgraph_of(&g));
    /// assert!(!h.is_induced_subgraph_of(&g));
    ///
    /// h.add_edge("C", "A").unwrap();
    /// assert!(h.is_induced_subgraph_of(&g));
    /// ```
    fn is_induced_subgraph_of<G: Graph>(&self, other: &G) -> bool;
}

/// Maps every node of `graph` to the node of `other` with the same label.
/// Returns `None` if some label of `graph` does not occur in `other`.
fn embed_vertices<G1: Graph, G2: Graph>(graph: &G1, other: &G2) -> Option<Vec<Node>> {
    graph
        .labels()
        .iter()
        .map(|label| other.node_of(label))
        .collect()
}

impl<G1: Graph> SubgraphRelations for G1 {
    fn is_subgraph_of<G: Graph>(&self, other: &G) -> bool {
        let Some(embedding) = embed_vertices(self, other) else {
            return false;
        };
        self.edges()
            .all(|Edge(u, v)| other.has_edge(embedding[u as usize], embedding[v as usize]))
    }

    fn is_spanning_subgraph_of<G: Graph>(&self, other: &G) -> bool {
        // labels are unique, so equal sizes and inclusion imply equal vertex sets
        self.number_of_nodes() == other.number_of_nodes() && self.is_subgraph_of(other)
    }

    fn is_induced_subgraph_of<G: Graph>(&self, other: &G) -> bool {
        let Some(embedding) = embed_vertices(self, other) else {
            return false;
        };
        self.vertices_range().all(|u| {
            ((u + 1)..self.number_of_nodes()).all(|v| {
                self.has_edge(u, v) == other.has_edge(embedding[u as usize], embedding[v as usize])
            })
        })
    }
}

/// A trait for creating subgraphs from a graph.
pub trait Subgraph: Sized {
    /// Creates the **vertex-induced subgraph** on the given labels as a graph of type `GO`.
    ///
    /// The vertices of the result appear in the given order. It contains every edge (and
    /// self-loop) of `self` whose endpoints are both among `labels`.
    ///
    /// # Errors
    /// Returns `InvalidVertex` if a label does not belong to `self` and a construction error if
    /// `labels` is empty or contains a label twice.
    fn vertex_induced_as<GO, I, S>(&self, labels: I) -> Result<GO>
    where
        GO: GraphNew + GraphEdgeEditing,
        I: IntoIterator<Item = S>,
        S: AsRef<str>;

    /// Creates a vertex-induced subgraph of the same type as `Self`.
    ///
    /// This is shorthand for [`Subgraph::vertex_induced_as`] where
    /// the output graph type matches the input.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = SparseGraph::from_labels(["A", "B", "C", "D"]).unwrap();
    /// g.add_edges([("A", "B"), ("B", "C"), ("C", "D")]).unwrap();
    ///
    /// let h = g.vertex_induced(["B", "C", "D"]).unwrap();
    /// assert_eq!(h.number_of_edges(), 2);
    /// assert!(h.is_induced_subgraph_of(&g));
    /// ```
    fn vertex_induced<I, S>(&self, labels: I) -> Result<Self>
    where
        Self: GraphNew + GraphEdgeEditing,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.vertex_induced_as(labels)
    }

    /// Copies the graph into another representation, keeping labels and vertex order
    fn convert_into<GO>(&self) -> GO
    where
        GO: GraphNew + GraphEdgeEditing;
}

impl<G> Subgraph for G
where
    G: Graph,
{
    fn vertex_induced_as<GO, I, S>(&self, labels: I) -> Result<GO>
    where
        GO: GraphNew + GraphEdgeEditing,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let nodes = labels
            .into_iter()
            .map(|label| self.resolve(label.as_ref()))
            .collect::<Result<Vec<Node>>>()?;
        let vertex_labels =
            VertexLabels::from_labels(nodes.iter().map(|&u| self.label_of(u).to_owned()))?;

        let mut new_ids: Vec<Option<Node>> = vec![None; self.len()];
        for (new, &old) in nodes.iter().enumerate() {
            new_ids[old as usize] = Some(new as Node);
        }

        // Prevent moving new_ids into the closure
        let new_ids = &new_ids;
        Ok(GO::from_edges(
            vertex_labels,
            nodes.iter().enumerate().flat_map(|(new_u, &u)| {
                let new_u = new_u as Node;
                self.neighbors_of(u).filter_map(move |v| {
                    let new_v = new_ids[v as usize]?;
                    (new_u <= new_v).then_some(Edge(new_u, new_v))
                })
            }),
        ))
    }

    fn convert_into<GO>(&self) -> GO
    where
        GO: GraphNew + GraphEdgeEditing,
    {
        let labels = VertexLabels::from_labels(self.labels().iter().cloned())
            .unwrap_or_else(|_| unreachable!("labels of an existing graph are valid"));
        GO::from_edges(
            labels,
            self.vertices_range().flat_map(|u| {
                self.neighbors_of(u)
                    .filter(move |&v| u <= v)
                    .map(move |v| Edge(u, v))
            }),
        )
    }
}
