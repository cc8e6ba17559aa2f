/*!
# Structural Predicates

Basic yes/no questions about a graph that every representation answers identically.
*/

use super::*;

/// Predicates on the structure of a graph
pub trait GraphProperties {
    /// Returns *true* if no vertex has an edge to itself
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DenseGraph::new(3).unwrap();
    /// g.add_edge("0", "1").unwrap();
    /// assert!(g.is_simple());
    ///
    /// g.add_edge("2", "2").unwrap();
    /// assert!(!g.is_simple());
    /// ```
    fn is_simple(&self) -> bool;

    /// Returns *true* if the graph has at least one vertex but no edges
    fn is_null(&self) -> bool;

    /// Returns *true* if every pair of distinct vertices is connected by an edge
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*, gens::*};
    ///
    /// let mut g = SparseGraph::from_labels(["A", "B", "C"]).unwrap();
    /// g.connect_path(["A", "B", "C"]).unwrap();
    /// assert!(!g.is_complete());
    ///
    /// g.add_edge("C", "A").unwrap();
    /// assert!(g.is_complete());
    /// ```
    fn is_complete(&self) -> bool;
}

impl<G: Graph> GraphProperties for G {
    fn is_simple(&self) -> bool {
        self.self_loops().next().is_none()
    }

    fn is_null(&self) -> bool {
        self.number_of_nodes() > 0 && self.number_of_edges() == 0
    }

    fn is_complete(&self) -> bool {
        // edges are counted without loops and without multiplicity
        let n = self.number_of_nodes() as u64;
        self.number_of_edges() as u64 == n * n.saturating_sub(1) / 2
    }
}
