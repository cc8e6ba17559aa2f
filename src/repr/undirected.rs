use tracing::debug;

use super::*;

/// An undirected graph representation over a fixed, labelled vertex set
#[derive(Debug, Clone)]
pub struct UndirectedGraph<Nbs: Neighborhood> {
    labels: VertexLabels,
    nbs: Vec<Nbs>,
    num_edges: NumEdges,
}

/// Representation using a symmetric 0/1 Adjacency-Matrix
pub type DenseGraph = UndirectedGraph<MatrixRow>;

/// Representation using insertion-ordered Adjacency-Lists
pub type SparseGraph = UndirectedGraph<ListNeighborhood>;

impl<Nbs: Neighborhood> UndirectedGraph<Nbs> {
    /// Read access to the stored neighborhood of node `u`.
    /// ** Panics if `u >= n` **
    pub fn neighborhood(&self, u: Node) -> &Nbs {
        &self.nbs[u as usize]
    }

    /// The vertex set of this graph
    pub fn vertex_labels(&self) -> &VertexLabels {
        &self.labels
    }
}

impl<Nbs: Neighborhood> GraphNodeOrder for UndirectedGraph<Nbs> {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }
}

impl<Nbs: Neighborhood> GraphEdgeOrder for UndirectedGraph<Nbs> {
    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl<Nbs: Neighborhood> GraphLabels for UndirectedGraph<Nbs> {
    const INDEX_ADDRESSABLE: bool = Nbs::INDEX_ADDRESSABLE;

    fn labels(&self) -> &[Label] {
        self.labels.as_slice()
    }

    fn label_of(&self, u: Node) -> &str {
        self.labels.label_of(u)
    }

    fn node_of(&self, label: &str) -> Option<Node> {
        self.labels.node_of(label)
    }
}

impl<Nbs: Neighborhood> AdjacencyList for UndirectedGraph<Nbs> {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].neighbors()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].num_of_neighbors()
    }
}

impl<Nbs: Neighborhood> AdjacencyTest for UndirectedGraph<Nbs> {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        self.nbs[u as usize].has_neighbor(v)
    }
}

impl<Nbs: Neighborhood> GraphNew for UndirectedGraph<Nbs> {
    fn from_vertex_labels(labels: VertexLabels) -> Self {
        let n = labels.len();
        debug!(
            nodes = n,
            index_addressable = Nbs::INDEX_ADDRESSABLE,
            "constructing graph"
        );
        Self {
            labels,
            nbs: vec![Nbs::new(n); n as usize],
            num_edges: 0,
        }
    }
}

impl<Nbs: Neighborhood> GraphEdgeEditing for UndirectedGraph<Nbs> {
    fn insert_edge(&mut self, u: Node, v: Node) -> bool {
        if self.nbs[u as usize].try_add_neighbor(v) {
            return false;
        }
        if u != v {
            assert!(!self.nbs[v as usize].try_add_neighbor(u));
            self.num_edges += 1;
        }
        true
    }

    fn delete_edge(&mut self, u: Node, v: Node) -> bool {
        if !self.nbs[u as usize].try_remove_neighbor(v) {
            return false;
        }
        if u != v {
            assert!(self.nbs[v as usize].try_remove_neighbor(u));
            self.num_edges -= 1;
        }
        true
    }
}

crate::testing::test_graph_ops!(test_dense_graph, DenseGraph, true);
crate::testing::test_graph_ops!(test_sparse_graph, SparseGraph, false);
