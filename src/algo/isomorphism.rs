/*!
# Graph Isomorphism

Exact isomorphism test by exhaustive search over all bijections between the vertex sets.

Before entering the `O(n! * m)` search, two graphs are compared on cheap invariants (number of
nodes, number of edges, number of self-loops and degree sequence). Graphs that differ in any of
them are rejected immediately. Beyond that, no pruning takes place: this is an exact reference
implementation, not a heuristic.
*/

use fxhash::FxHashMap;
use itertools::Itertools;
use tracing::{debug, trace};

use super::*;

/// A vertex bijection from one graph to another, given by labels
pub type LabelMapping = FxHashMap<Label, Label>;

/// Configurable exhaustive isomorphism search.
///
/// Candidate bijections are enumerated in lexicographic order of permutations of the second
/// graph's vertices (in creation order), assigned to the first graph's vertices (in creation
/// order). The first bijection that preserves adjacency in both directions is returned.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// let mut g = DenseGraph::from_labels(["A", "B", "C", "D"]).unwrap();
/// g.add_edges([("A", "B"), ("B", "C"), ("C", "D"), ("D", "A")]).unwrap();
///
/// let mut h = SparseGraph::new(4).unwrap();
/// h.add_edges([("0", "2"), ("2", "1"), ("1", "3"), ("3", "0")]).unwrap();
///
/// let outcome = IsomorphismSearch::new().budget(1_000).run(&g, &h);
/// let mapping = outcome.found().unwrap();
/// assert_eq!(mapping["A"], "0");
/// assert_eq!(mapping["B"], "2");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct IsomorphismSearch {
    budget: Option<u64>,
}

impl IsomorphismSearch {
    /// Creates a new unbounded search
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits the number of candidate bijections that are checked
    pub fn budget(mut self, max_permutations: u64) -> Self {
        self.budget = Some(max_permutations);
        self
    }

    /// Removes any limit on the number of checked bijections
    pub fn unbounded(mut self) -> Self {
        self.budget = None;
        self
    }

    /// Searches for an isomorphism from `graph` to `other`
    pub fn run<G1, G2>(&self, graph: &G1, other: &G2) -> SearchOutcome<LabelMapping>
    where
        G1: Graph,
        G2: Graph,
    {
        if !have_equal_invariants(graph, other) {
            return SearchOutcome::NotFound;
        }

        let n = graph.number_of_nodes();
        let edges = graph.edges().collect_vec();
        let loops = graph.self_loops().collect_vec();
        let mut budget = Budget::new(self.budget);

        for perm in (0..n).permutations(n as usize) {
            if !budget.try_consume() {
                debug!(checked = budget.used(), "isomorphism search ran out of budget");
                return SearchOutcome::BudgetExhausted;
            }

            // With equal edge counts, an injective edge-preserving map also preserves non-edges
            let preserves_adjacency = edges
                .iter()
                .all(|&Edge(u, v)| other.has_edge(perm[u as usize], perm[v as usize]))
                && loops
                    .iter()
                    .all(|&u| other.has_self_loop(perm[u as usize]));

            if preserves_adjacency {
                debug!(checked = budget.used(), "found isomorphism");
                return SearchOutcome::Found(
                    graph
                        .vertices_range()
                        .map(|u| {
                            (
                                graph.label_of(u).to_owned(),
                                other.label_of(perm[u as usize]).to_owned(),
                            )
                        })
                        .collect(),
                );
            }
        }

        debug!(checked = budget.used(), "graphs are not isomorphic");
        SearchOutcome::NotFound
    }
}

/// Compares the invariants every isomorphism preserves
fn have_equal_invariants<G1: Graph, G2: Graph>(graph: &G1, other: &G2) -> bool {
    if graph.number_of_nodes() != other.number_of_nodes() {
        trace!("number of nodes differs");
        return false;
    }
    if graph.number_of_edges() != other.number_of_edges() {
        trace!("number of edges differs");
        return false;
    }
    if graph.self_loops().count() != other.self_loops().count() {
        trace!("number of self-loops differs");
        return false;
    }
    if graph.degree_sequence() != other.degree_sequence() {
        trace!("degree sequences differ");
        return false;
    }
    true
}

/// Isomorphism between graphs of arbitrary representations
pub trait Isomorphic {
    /// Returns *true* if there is a bijection between the vertices of `self` and `other`
    /// such that two vertices are adjacent in `self` exactly if their images are adjacent in
    /// `other`.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DenseGraph::from_labels(["A", "B", "C"]).unwrap();
    /// g.add_edges([("A", "B"), ("B", "C"), ("C", "A")]).unwrap();
    ///
    /// let mut h = SparseGraph::from_labels(["1", "2", "3"]).unwrap();
    /// h.add_edges([("1", "2"), ("2", "3")]).unwrap();
    /// assert!(!g.is_isomorphic_to(&h));
    ///
    /// h.add_edge("3", "1").unwrap();
    /// assert!(g.is_isomorphic_to(&h));
    /// ```
    fn is_isomorphic_to<G: Graph>(&self, other: &G) -> bool {
        self.find_isomorphism(other).is_some()
    }

    /// Returns the first isomorphism from `self` to `other` or `None` if there is none.
    /// See [`IsomorphismSearch`] for the order in which candidates are checked.
    fn find_isomorphism<G: Graph>(&self, other: &G) -> Option<LabelMapping>;
}

impl<G1: Graph> Isomorphic for G1 {
    fn find_isomorphism<G: Graph>(&self, other: &G) -> Option<LabelMapping> {
        IsomorphismSearch::new().run(self, other).found()
    }
}

#[cfg(test)]
mod tests {
    use rand::{seq::SliceRandom, Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    use crate::gens::*;

    use super::*;

    fn triangle<G: GraphNew + GraphEdgeEditing>(labels: [&str; 3]) -> G {
        let mut g = G::from_labels(labels).unwrap();
        g.connect_cycle(labels).unwrap();
        g
    }

    #[test]
    fn triangles_on_disjoint_labels() {
        let abc: DenseGraph = triangle(["A", "B", "C"]);
        let numbers: SparseGraph = triangle(["1", "2", "3"]);
        assert!(abc.is_isomorphic_to(&numbers));
        assert!(numbers.is_isomorphic_to(&abc));

        let mut path = SparseGraph::from_labels(["1", "2", "3"]).unwrap();
        path.connect_path(["1", "2", "3"]).unwrap();
        assert!(!abc.is_isomorphic_to(&path));
        assert!(!path.is_isomorphic_to(&abc));
    }

    #[test]
    fn same_invariants_but_not_isomorphic() {
        // two triangles vs. a hexagon: both 2-regular on 6 nodes
        let mut triangles = DenseGraph::new(6).unwrap();
        triangles.connect_cycle(["0", "1", "2"]).unwrap();
        triangles.connect_cycle(["3", "4", "5"]).unwrap();

        let mut hexagon = SparseGraph::new(6).unwrap();
        hexagon.connect_cycle(["0", "1", "2", "3", "4", "5"]).unwrap();

        assert_eq!(triangles.degree_sequence(), hexagon.degree_sequence());
        assert_eq!(triangles.number_of_edges(), hexagon.number_of_edges());
        assert!(!triangles.is_isomorphic_to(&hexagon));
        assert_eq!(
            IsomorphismSearch::new().run(&triangles, &hexagon),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn self_loops_must_match() {
        let mut g = DenseGraph::new(2).unwrap();
        g.add_edges([("0", "1"), ("0", "0")]).unwrap();
        let mut h = DenseGraph::new(2).unwrap();
        h.add_edges([("0", "1"), ("1", "1")]).unwrap();
        let mut k = DenseGraph::new(2).unwrap();
        k.add_edge("0", "1").unwrap();

        assert_eq!(
            g.find_isomorphism(&h).unwrap(),
            [("0", "1"), ("1", "0")]
                .into_iter()
                .map(|(a, b)| (a.to_string(), b.to_string()))
                .collect::<LabelMapping>()
        );
        assert!(!g.is_isomorphic_to(&k));
    }

    #[test]
    fn mapping_preserves_adjacency() {
        let mut g = SparseGraph::from_labels(["a", "b", "c", "d", "e"]).unwrap();
        g.add_edges([("a", "b"), ("a", "c"), ("c", "d"), ("d", "e"), ("e", "c")])
            .unwrap();
        let mut h = DenseGraph::from_labels(["v", "w", "x", "y", "z"]).unwrap();
        h.add_edges([("z", "y"), ("y", "x"), ("x", "z"), ("x", "w"), ("w", "v")])
            .unwrap();

        let mapping = g.find_isomorphism(&h).unwrap();
        assert_eq!(mapping.len(), 5);
        for u in g.labels() {
            for v in g.labels() {
                let (gu, gv) = (g.node_of(u).unwrap(), g.node_of(v).unwrap());
                let (hu, hv) = (
                    h.node_of(&mapping[u]).unwrap(),
                    h.node_of(&mapping[v]).unwrap(),
                );
                assert_eq!(g.has_edge(gu, gv), h.has_edge(hu, hv));
            }
        }
    }

    #[test]
    fn budget_cuts_search_short() {
        let mut g = DenseGraph::new(6).unwrap();
        g.connect_cycle(["0", "1", "2", "3", "4", "5"]).unwrap();
        let mut h = DenseGraph::new(6).unwrap();
        h.connect_cycle(["5", "3", "1", "0", "2", "4"]).unwrap();

        assert!(IsomorphismSearch::new().budget(0).run(&g, &h).is_budget_exhausted());
        assert!(IsomorphismSearch::new()
            .budget(2)
            .unbounded()
            .run(&g, &h)
            .is_found());

        // early rejection does not consume any budget
        let k = DenseGraph::new(6).unwrap();
        assert_eq!(
            IsomorphismSearch::new().budget(0).run(&g, &k),
            SearchOutcome::NotFound
        );
    }

    #[test]
    fn relabelled_random_graphs() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1234);
        for n in 1..7 {
            for _ in 0..5 {
                let p = rng.random_range(0.2..0.8);
                let g: SparseGraph = Gnp::new().nodes(n).prob(p).generate(rng).unwrap();

                // rename all labels through a random bijection and shuffle creation order
                let mut renamed = g
                    .labels()
                    .iter()
                    .map(|label| format!("v{label}"))
                    .collect_vec();
                renamed.shuffle(rng);
                let mut h = DenseGraph::from_labels(renamed).unwrap();
                for e in g.labelled_edges() {
                    h.add_edge(
                        format!("v{}", e.second()).as_str(),
                        format!("v{}", e.first()).as_str(),
                    )
                    .unwrap();
                }

                assert!(g.is_isomorphic_to(&g));
                assert!(g.is_isomorphic_to(&h));
                assert!(h.is_isomorphic_to(&g));
            }
        }
    }
}
