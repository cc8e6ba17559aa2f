/*!
`lgraphs` is a small graph library for **l**abelled, undirected graphs:
- Vertices are identified by their **label**, a short string unique within one graph
- Edges are unordered pairs of vertices without weight; self-loops may be stored
- The vertex set is fixed at construction, only edges are added or removed afterwards

# Representation

Internally, each graph numbers its vertices `0..n` in creation order (`Node = u32`) and stores
adjacency by index. The index never leaks into the identity of a vertex: binary relations between
two graphs match vertices by label and compare edges as unordered pairs.

### Available Representations

See the [`repr`] module for details:

- [`DenseGraph`](crate::repr::DenseGraph): symmetric 0/1 adjacency matrix, accepts labels and raw indices
- [`SparseGraph`](crate::repr::SparseGraph): insertion-ordered adjacency lists, accepts labels only

Both implement the same contract ([`ops::Graph`]) and every algorithm works for either of them.

# Design

All algorithms are provided as traits with blanket implementations on the graph itself
(`g.is_isomorphic_to(&h)`, `g.color_vertices()`, ...). Algorithms with exponential worst case
additionally come as configurable structs ([`algo::IsomorphismSearch`], [`algo::ColoringSearch`])
that can be altered using the *Builder* / *Setter* pattern before running them, for example to
bound the search by a budget.

Editing operations report invalid vertices as [`error::GraphError`] and leave the graph
unchanged. Diagnostics are emitted through [`tracing`]; no subscriber is installed by this crate.

# Usage

There are *5* core submodules you probably want to interact with:
- [`prelude`] includes definitions for nodes, edges, errors, basic graph operations, and both representations,
- [`algo`] includes structural predicates, subgraph relations, isomorphism and coloring,
- [`builder`] allows configuring a graph completely before constructing it,
- [`gens`] includes a random `G(n,p)` generator and deterministic substructures such as paths/cycles/cliques,
- [`io`] includes debug dumps of a graph as adjacency matrix or adjacency lists.

In most use-cases, `use lgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use lgraphs::{prelude::*, algo::*};

let mut g = SparseGraph::from_labels(["M", "A", "C", "F", "Q", "P"]).unwrap();
g.add_edges([
    ("C", "F"), ("C", "A"), ("F", "A"),
    ("M", "P"), ("M", "A"), ("P", "A"),
    ("Q", "F"),
])
.unwrap();

let h: DenseGraph = g.vertex_induced_as(["M", "A", "C", "F", "P"]).unwrap();
assert!(h.is_induced_subgraph_of(&g));
assert_eq!(h.number_of_edges(), 6);

let coloring = g.color_vertices();
assert!(coloring.is_proper_for(&g));
assert_eq!(coloring.num_colors(), 3);
```
*/

pub mod algo;
pub mod builder;
pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;

pub use edge::*;
pub use node::*;

/// `lgraphs::prelude` includes definitions for nodes and edges, the error types, all basic graph operation traits as well as both representations.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{ConstructionError, GraphError},
        node::*,
        ops::*,
        repr::*,
    };
}
