/*!
# Vertex Coloring

Proper vertex colorings by backtracking over the vertices in creation order.

Colors are positive integers starting at `1`. Vertex `v` may take color `c` if no already
colored neighbor of `v` holds `c`. Self-loops are ignored, as no color could ever satisfy them.

Two strategies are available:
- [`ColoringStrategy::FirstFit`] tries the colors `1..=n` in increasing order at every vertex and
  returns the first complete coloring. The result is proper but depends on the vertex order and
  may use more colors than necessary.
- [`ColoringStrategy::Minimum`] repeats the search with at most `k = 1, 2, ...` colors. The first
  success uses exactly the chromatic number of the graph.
*/

use fxhash::FxHashMap;
use tracing::{debug, trace};

use super::*;

/// A color assigned to a vertex; valid colors start at `1`
pub type Color = u32;

/// Marker of vertices that have not been assigned a color yet
const UNCOLORED: Color = 0;

/// Order in which colorings are searched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColoringStrategy {
    /// First complete coloring with colors tried in increasing order
    #[default]
    FirstFit,
    /// Coloring with the smallest possible number of colors
    Minimum,
}

/// A proper coloring of a graph, owned by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexColoring {
    entries: Vec<(Label, Color)>,
    num_colors: Color,
}

impl VertexColoring {
    fn new<G: Graph>(graph: &G, colors: &[Color]) -> Self {
        let entries: Vec<_> = graph
            .labels()
            .iter()
            .cloned()
            .zip(colors.iter().copied())
            .collect();
        let num_colors = colors.iter().copied().max().unwrap_or(UNCOLORED);
        Self {
            entries,
            num_colors,
        }
    }

    /// Number of distinct colors, i.e. the largest assigned color
    pub fn num_colors(&self) -> Color {
        self.num_colors
    }

    /// Returns the color of the vertex with the given label
    pub fn color_of(&self, label: &str) -> Option<Color> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|&(_, color)| color)
    }

    /// Iterates over all `(label, color)` pairs in vertex order of the colored graph
    pub fn iter(&self) -> impl Iterator<Item = (&str, Color)> + '_ {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Returns the coloring as a map from label to color
    pub fn as_map(&self) -> FxHashMap<&str, Color> {
        self.iter().collect()
    }

    /// Groups the labels by color: entry `i` holds all vertices of color `i + 1`
    pub fn color_classes(&self) -> Vec<Vec<&str>> {
        let mut classes = vec![Vec::new(); self.num_colors as usize];
        for (label, color) in self.iter() {
            classes[color as usize - 1].push(label);
        }
        classes
    }

    /// Returns *true* if every vertex of `graph` holds a valid color and the endpoints of every
    /// edge hold different colors
    pub fn is_proper_for<G: Graph>(&self, graph: &G) -> bool {
        let map = self.as_map();
        let Some(colors) = graph
            .labels()
            .iter()
            .map(|label| map.get(label.as_str()).copied())
            .collect::<Option<Vec<Color>>>()
        else {
            return false;
        };

        colors.iter().all(|&c| c != UNCOLORED)
            && graph
                .edges()
                .all(|Edge(u, v)| colors[u as usize] != colors[v as usize])
    }
}

/// Configurable backtracking search for proper colorings.
///
/// # Examples
/// ```
/// use lgraphs::{prelude::*, algo::*};
///
/// // a path a - b - c - d, created in the order a, d, b, c
/// let mut g = SparseGraph::from_labels(["a", "d", "b", "c"]).unwrap();
/// g.add_edges([("a", "b"), ("b", "c"), ("c", "d")]).unwrap();
///
/// let first_fit = ColoringSearch::new().run(&g).found().unwrap();
/// assert_eq!(first_fit.num_colors(), 3);
///
/// let minimum = ColoringSearch::new()
///     .strategy(ColoringStrategy::Minimum)
///     .run(&g)
///     .found()
///     .unwrap();
/// assert_eq!(minimum.num_colors(), 2);
/// assert!(minimum.is_proper_for(&g));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ColoringSearch {
    strategy: ColoringStrategy,
    budget: Option<u64>,
}

impl ColoringSearch {
    /// Creates an unbounded `FirstFit` search
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the search strategy
    pub fn strategy(mut self, strategy: ColoringStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Limits the number of vertex visits across the whole search
    pub fn budget(mut self, max_visits: u64) -> Self {
        self.budget = Some(max_visits);
        self
    }

    /// Searches for a proper coloring of `graph`
    pub fn run<G: Graph>(&self, graph: &G) -> SearchOutcome<VertexColoring> {
        let n = graph.number_of_nodes();
        let mut state = Backtracking {
            graph,
            max_colors: n,
            budget: Budget::new(self.budget),
        };
        let mut colors = vec![UNCOLORED; graph.len()];

        let color_limits = match self.strategy {
            ColoringStrategy::FirstFit => n..=n,
            ColoringStrategy::Minimum => 1..=n,
        };

        for max_colors in color_limits {
            state.max_colors = max_colors;
            match state.extend(&mut colors) {
                Step::Complete => {
                    let coloring = VertexColoring::new(graph, &colors);
                    debug!(
                        strategy = ?self.strategy,
                        colors = coloring.num_colors(),
                        visits = state.budget.used(),
                        "found coloring"
                    );
                    return SearchOutcome::Found(coloring);
                }
                Step::Dead => trace!(max_colors, "no coloring with this many colors"),
                Step::OutOfBudget => {
                    debug!(
                        strategy = ?self.strategy,
                        visits = state.budget.used(),
                        "coloring search ran out of budget"
                    );
                    return SearchOutcome::BudgetExhausted;
                }
            }
        }

        // n colors always suffice
        SearchOutcome::NotFound
    }
}

/// Result of extending a partial coloring
enum Step {
    Complete,
    Dead,
    OutOfBudget,
}

struct Backtracking<'g, G> {
    graph: &'g G,
    max_colors: Color,
    budget: Budget,
}

impl<G: Graph> Backtracking<'_, G> {
    /// Colors all vertices in creation order, starting from an uncolored `colors`.
    /// On any outcome but `Complete`, `colors` is left uncolored.
    ///
    /// Each frame holds a vertex and the next color to try for it.
    fn extend(&mut self, colors: &mut [Color]) -> Step {
        let n = self.graph.number_of_nodes();
        if n == 0 {
            return Step::Complete;
        }
        if !self.budget.try_consume() {
            return Step::OutOfBudget;
        }

        let mut frames: Vec<(Node, Color)> = Vec::with_capacity(n as usize);
        frames.push((0, 1));

        while let Some((u, next)) = frames.last_mut() {
            let u = *u;
            // undo the previous attempt at u before trying the next color
            colors[u as usize] = UNCOLORED;

            let Some(color) = (*next..=self.max_colors).find(|&c| self.is_free(colors, u, c))
            else {
                frames.pop();
                continue;
            };
            *next = color + 1;
            colors[u as usize] = color;

            if u + 1 == n {
                return Step::Complete;
            }
            if !self.budget.try_consume() {
                for &(v, _) in &frames {
                    colors[v as usize] = UNCOLORED;
                }
                return Step::OutOfBudget;
            }
            frames.push((u + 1, 1));
        }

        Step::Dead
    }

    fn is_free(&self, colors: &[Color], u: Node, color: Color) -> bool {
        self.graph
            .neighbors_of(u)
            .all(|v| v == u || colors[v as usize] != color)
    }
}

/// Proper vertex colorings of arbitrary representations
pub trait Colorable {
    /// Colors the vertices with the `FirstFit` strategy.
    /// The number of colors is an upper bound on the chromatic number, not necessarily equal.
    ///
    /// # Examples
    /// ```
    /// use lgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = DenseGraph::from_labels(["M", "A", "P"]).unwrap();
    /// g.add_edges([("M", "A"), ("A", "P")]).unwrap();
    ///
    /// let coloring = g.color_vertices();
    /// assert_eq!(coloring.num_colors(), 2);
    /// assert_eq!(coloring.color_of("M"), coloring.color_of("P"));
    /// ```
    fn color_vertices(&self) -> VertexColoring;

    /// Returns the smallest number of colors of a proper coloring
    fn chromatic_number(&self) -> Color;
}

impl<G: Graph> Colorable for G {
    fn color_vertices(&self) -> VertexColoring {
        match ColoringSearch::new().run(self) {
            SearchOutcome::Found(coloring) => coloring,
            _ => unreachable!("an unbounded search always colors a graph with n colors"),
        }
    }

    fn chromatic_number(&self) -> Color {
        match ColoringSearch::new()
            .strategy(ColoringStrategy::Minimum)
            .run(self)
        {
            SearchOutcome::Found(coloring) => coloring.num_colors(),
            _ => unreachable!("an unbounded search always colors a graph with n colors"),
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use crate::gens::*;

    use super::*;

    fn timetable<G: GraphNew + GraphEdgeEditing>() -> G {
        let mut g = G::from_labels(["M", "A", "C", "F", "Q", "P"]).unwrap();
        g.add_edges([
            ("C", "F"),
            ("C", "A"),
            ("F", "A"),
            ("M", "P"),
            ("M", "A"),
            ("P", "A"),
            ("Q", "F"),
        ])
        .unwrap();
        g
    }

    #[test]
    fn timetable_needs_three_colors() {
        let g: SparseGraph = timetable();
        let coloring = g.color_vertices();

        assert_eq!(coloring.num_colors(), 3);
        assert!(coloring.is_proper_for(&g));
        assert_eq!(
            coloring.iter().collect_vec(),
            vec![("M", 1), ("A", 2), ("C", 1), ("F", 3), ("Q", 1), ("P", 3)]
        );
        assert_eq!(
            coloring.color_classes(),
            vec![vec!["M", "C", "Q"], vec!["A"], vec!["F", "P"]]
        );
        assert_eq!(g.chromatic_number(), 3);

        let dense: DenseGraph = timetable();
        assert_eq!(dense.color_vertices(), coloring);
    }

    #[test]
    fn first_fit_is_not_minimal() {
        let mut g = DenseGraph::from_labels(["a", "d", "b", "c"]).unwrap();
        g.connect_path(["a", "b", "c", "d"]).unwrap();

        assert_eq!(g.color_vertices().num_colors(), 3);
        assert_eq!(g.chromatic_number(), 2);
    }

    #[test]
    fn minimum_colorings() {
        let mut cycle = SparseGraph::new(5).unwrap();
        cycle.connect_cycle(["0", "1", "2", "3", "4"]).unwrap();
        assert_eq!(cycle.chromatic_number(), 3);

        let mut even = SparseGraph::new(6).unwrap();
        even.connect_cycle(["0", "1", "2", "3", "4", "5"]).unwrap();
        assert_eq!(even.chromatic_number(), 2);

        let mut clique = DenseGraph::new(5).unwrap();
        clique.connect_clique(["0", "1", "2", "3", "4"]).unwrap();
        assert_eq!(clique.chromatic_number(), 5);
        assert_eq!(clique.color_vertices().num_colors(), 5);

        let null = DenseGraph::new(4).unwrap();
        assert_eq!(null.chromatic_number(), 1);
        assert_eq!(null.color_vertices().color_classes(), vec![vec!["0", "1", "2", "3"]]);
    }

    #[test]
    fn self_loops_are_ignored() {
        let mut g = SparseGraph::new(2).unwrap();
        g.add_edges([("0", "0"), ("0", "1")]).unwrap();
        let coloring = g.color_vertices();
        assert_eq!(coloring.num_colors(), 2);
        assert!(coloring.is_proper_for(&g));
    }

    #[test]
    fn long_paths_do_not_exhaust_the_stack() {
        let n = 100_000;
        let mut g = SparseGraph::new(n).unwrap();
        for u in 0..n - 1 {
            assert!(g.insert_edge(u, u + 1));
        }

        let coloring = g.color_vertices();
        assert_eq!(coloring.num_colors(), 2);
        assert!(coloring.is_proper_for(&g));
        assert_eq!(coloring.color_of("99999"), Some(2));
        assert_eq!(g.chromatic_number(), 2);
    }

    #[test]
    fn improper_colorings_are_detected() {
        let g: DenseGraph = timetable();
        let coloring = g.color_vertices();

        let mut h: DenseGraph = timetable();
        h.add_edge("M", "C").unwrap();
        assert!(!coloring.is_proper_for(&h));

        let other = DenseGraph::from_labels(["M", "X"]).unwrap();
        assert!(!coloring.is_proper_for(&other));
        assert_eq!(coloring.color_of("X"), None);
    }

    #[test]
    fn budget_cuts_search_short() {
        let mut g = DenseGraph::new(6).unwrap();
        g.connect_clique(["0", "1", "2", "3", "4", "5"]).unwrap();

        let search = ColoringSearch::new().strategy(ColoringStrategy::Minimum);
        assert!(search.budget(10).run(&g).is_budget_exhausted());
        assert_eq!(
            search.run(&g).found().map(|c| c.num_colors()),
            Some(6)
        );

        // FirstFit never backtracks, so n visits always suffice
        assert!(ColoringSearch::new().budget(6).run(&g).is_found());
        assert!(ColoringSearch::new().budget(5).run(&g).is_budget_exhausted());
    }

    #[test]
    fn random_colorings_are_proper() {
        let rng = &mut Pcg64Mcg::seed_from_u64(42);
        for n in 1..9 {
            for p in [0.2, 0.5, 0.8] {
                let g: SparseGraph = Gnp::new().nodes(n).prob(p).generate(rng).unwrap();
                let first_fit = g.color_vertices();
                assert!(first_fit.is_proper_for(&g));
                assert!(first_fit.num_colors() <= g.max_degree() + 1);

                let chi = g.chromatic_number();
                assert!(chi <= first_fit.num_colors());
                assert!(chi >= 1);
            }
        }
    }
}
