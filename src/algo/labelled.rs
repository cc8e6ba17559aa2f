use fxhash::FxHashSet;

use super::*;

/// Access to the edges of a graph in terms of vertex labels
pub trait LabelledEdges {
    /// Returns every edge between distinct vertices exactly once, with the endpoint created
    /// first as [`LabelledEdge::first`]. The order follows [`AdjacencyList::edges`].
    ///
    /// Orientation depends on creation order, so compare edges of different graphs as
    /// [`LabelledEdge`]s (unordered pairs) rather than as tuples of labels.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = SparseGraph::from_labels(["M", "A", "P"]).unwrap();
    /// g.add_edge("P", "A").unwrap();
    /// g.add_edge("M", "P").unwrap();
    ///
    /// let edges: Vec<_> = g.labelled_edges().collect();
    /// assert_eq!(edges[0].endpoints(), ("M", "P"));
    /// assert_eq!(edges[1].endpoints(), ("A", "P"));
    /// assert_eq!(edges[1], LabelledEdge::new("P", "A"));
    /// ```
    fn labelled_edges(&self) -> impl Iterator<Item = LabelledEdge> + '_;

    /// Returns the set of all edges as unordered label pairs
    fn edge_set(&self) -> FxHashSet<LabelledEdge> {
        self.labelled_edges().collect()
    }
}

impl<G: Graph> LabelledEdges for G {
    fn labelled_edges(&self) -> impl Iterator<Item = LabelledEdge> + '_ {
        self.edges()
            .map(move |Edge(u, v)| LabelledEdge::new(self.label_of(u), self.label_of(v)))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn orientation_differs_but_sets_agree() {
        let mut dense = DenseGraph::from_labels(["A", "B", "C"]).unwrap();
        let mut sparse = SparseGraph::from_labels(["C", "B", "A"]).unwrap();
        for (u, v) in [("A", "B"), ("B", "C")] {
            dense.add_edge(u, v).unwrap();
            sparse.add_edge(u, v).unwrap();
        }

        let dense_edges = dense.labelled_edges().collect_vec();
        let sparse_edges = sparse.labelled_edges().collect_vec();
        assert_eq!(dense_edges[0].endpoints(), ("A", "B"));
        assert_eq!(sparse_edges[0].endpoints(), ("C", "B"));

        assert_eq!(dense.edge_set(), sparse.edge_set());
    }

    #[test]
    fn loops_are_not_reported() {
        let mut g = DenseGraph::new(2).unwrap();
        g.add_edges([("0", "0"), ("0", "1")]).unwrap();
        assert_eq!(
            g.labelled_edges().collect_vec(),
            vec![LabelledEdge::new("0", "1")]
        );
    }
}
