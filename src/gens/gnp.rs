use super::*;

/// A G(n, p) graph can be defined by either a probability or the average degree which is more
/// common in practice
#[derive(Debug, Copy, Clone, Default)]
enum GnpType {
    /// No value has been set yet
    #[default]
    NotSet,
    /// Direct probability value
    Prob(f64),
    /// Average degree of a node
    AvgDeg(f64),
}

/// `G(n,p)` graphs contain every possible edge `{u, v}` with `u != v` with probability `p`
/// independent from each other.
///
/// Pairs are visited in row-major order of the upper triangle, so a seeded rng always yields
/// the same edges in the same order.
#[derive(Debug, Copy, Clone, Default)]
pub struct Gnp {
    n: NumNodes,
    p: GnpType,
}

impl Gnp {
    /// Creates a new empty `G(n,p)` generator
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates `p` directly
    /// ** Panics if `p` is not in `[0, 1]` **
    pub fn prob(mut self, prob: f64) -> Self {
        assert!(prob.is_valid_probability());
        self.p = GnpType::Prob(prob);
        self
    }

    fn probability(&self) -> f64 {
        match self.p {
            GnpType::NotSet => panic!("Probability of Gnp was not set!"),
            GnpType::Prob(p) => p,
            GnpType::AvgDeg(d) => {
                // every node has n - 1 possible neighbors
                let p = (d / (self.n.max(2) - 1) as f64).min(1.0);
                assert!(
                    p.is_valid_probability(),
                    "The average degree is invalid for the given n!"
                );
                p
            }
        }
    }
}

impl NumNodesGen for Gnp {
    /// Updates `n`
    fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }
}

impl AverageDegreeGen for Gnp {
    /// Updates `p` such that `p = d/(n - 1)`.
    /// Note that this conversion will only be done when calling `stream/generate`.
    fn avg_deg(mut self, deg: f64) -> Self {
        self.p = GnpType::AvgDeg(deg);
        self
    }
}

impl GraphGenerator for Gnp {
    fn num_nodes(&self) -> NumNodes {
        self.n
    }

    /// Creates a streaming generator over random `G(n,p)` edges
    /// ** Panics if no probability was set **
    fn stream<R: Rng>(&self, rng: &mut R) -> impl Iterator<Item = Edge> {
        let p = self.probability();
        let n = self.n;

        (0..n)
            .flat_map(move |u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .filter(move |_| rng.random_bool(p))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::algo::*;

    use super::*;

    #[test]
    fn extreme_probabilities() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);

        let empty: SparseGraph = Gnp::new().nodes(8).prob(0.0).generate(rng).unwrap();
        assert!(empty.is_null());

        let full: DenseGraph = Gnp::new().nodes(8).prob(1.0).generate(rng).unwrap();
        assert!(full.is_complete());
        assert!(full.is_simple());
        assert_eq!(full.labels()[7], "7");
    }

    #[test]
    fn streamed_edges_are_normalized() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);
        let edges = Gnp::new().nodes(20).prob(0.3).stream(rng).collect_vec();

        assert!(edges.iter().all(|e| e.is_normalized() && !e.is_loop()));
        assert!(edges.iter().tuple_windows().all(|(a, b)| a < b));
        assert!(edges.iter().all(|&Edge(_, v)| v < 20));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let a: SparseGraph = SparseGraph::gnp(&mut Pcg64Mcg::seed_from_u64(9), 15, 0.4).unwrap();
        let b: DenseGraph = DenseGraph::gnp(&mut Pcg64Mcg::seed_from_u64(9), 15, 0.4).unwrap();
        assert_eq!(a.edge_set(), b.edge_set());
        assert!(a.is_isomorphic_to(&b));
    }

    #[test]
    fn zero_nodes_is_an_error() {
        let rng = &mut Pcg64Mcg::seed_from_u64(4);
        assert_eq!(
            DenseGraph::gn(rng, 0).unwrap_err(),
            GraphError::from(ConstructionError::MissingVertices)
        );
    }

    #[test]
    #[should_panic]
    fn probability_must_be_valid() {
        let _ = Gnp::new().nodes(3).prob(1.5);
    }
}
