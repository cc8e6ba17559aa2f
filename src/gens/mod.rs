/*!
# Graph Generators

This module provides builders for random graphs and helpers that add deterministic
**substructures** (paths, cycles, cliques) to an existing graph.

Random generators follow a builder-style pattern:

1. Create a generator instance (e.g., `Gnp::new()`).
2. Set parameters using trait methods (e.g., `.nodes(n).prob(p)`).
3. Generate edges via `stream()` or a whole graph via `generate()`.

Generated graphs are labelled `"0"` to `"n-1"` and never contain self-loops.

```
use lgraphs::{prelude::*, gens::*};
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

let rng = &mut Pcg64Mcg::seed_from_u64(5);
let g: DenseGraph = Gnp::new().nodes(10).avg_deg(3.0).generate(rng).unwrap();
assert_eq!(g.number_of_nodes(), 10);
assert!(g.self_loops().next().is_none());
```
*/

use rand::Rng;

use crate::{error::*, prelude::*};

mod gnp;
mod substructures;

pub use gnp::*;
pub use substructures::*;

/// Trait for generators that allow setting the number of nodes.
pub trait NumNodesGen {
    /// Sets the number of nodes in the graph generator.
    fn nodes(self, n: NumNodes) -> Self;
}

/// Trait for generators that allow setting the average degree.
pub trait AverageDegreeGen {
    /// Set the average degree of this generator.
    fn avg_deg(self, deg: f64) -> Self;
}

/// Helper trait for probabilities
pub trait Probability {
    /// Returns *true* if the probability is valid (ie. between `0` and `1`)
    fn is_valid_probability(&self) -> bool;
}

impl Probability for f64 {
    fn is_valid_probability(&self) -> bool {
        (0.0..=1.0).contains(self)
    }
}

/// General trait for a configurable random edge generator over the nodes `0..n`.
pub trait GraphGenerator {
    /// The number of nodes of generated graphs
    fn num_nodes(&self) -> NumNodes;

    /// Creates a lazy iterator (stream) over generated edges.
    /// Every edge is normalized and no self-loops are produced.
    fn stream<R>(&self, rng: &mut R) -> impl Iterator<Item = Edge>
    where
        R: Rng;

    /// Generates a graph over the numbered labels `"0"` to `"n-1"` with the streamed edges.
    ///
    /// # Errors
    /// Fails if the number of nodes is `0`.
    fn generate<G, R>(&self, rng: &mut R) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing,
        R: Rng,
    {
        let labels = VertexLabels::numbered(self.num_nodes())?;
        Ok(G::from_edges(labels, self.stream(rng)))
    }
}

/// Trait for building full graph instances from common random models.
pub trait RandomGraph: Sized {
    /// Creates a random `G(n,p)` graph using edge probability `p`.
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng;

    /// Creates a random `G(n) = G(n,1/2)` graph, i.e. a uniform sample of all labelled
    /// simple graphs over `n` vertices.
    fn gn<R>(rng: &mut R, n: NumNodes) -> Result<Self>
    where
        R: Rng,
    {
        Self::gnp(rng, n, 0.5)
    }
}

impl<G> RandomGraph for G
where
    G: GraphNew + GraphEdgeEditing,
{
    fn gnp<R>(rng: &mut R, n: NumNodes, p: f64) -> Result<Self>
    where
        R: Rng,
    {
        Gnp::new().nodes(n).prob(p).generate(rng)
    }
}
