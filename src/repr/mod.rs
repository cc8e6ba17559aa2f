/*!
# Graph Representations

All representations are instances of [`UndirectedGraph`], generic over how the neighborhood of a
single vertex is stored:

- [`DenseGraph`] stores one [`MatrixRow`] per vertex, i.e. a symmetric `n x n` 0/1 adjacency
  matrix. Edge lookups by index pair are `O(1)`, neighbors are reported in ascending index order
  and raw indices are accepted as vertex references.
- [`SparseGraph`] stores one [`ListNeighborhood`] per vertex, i.e. an insertion-ordered,
  duplicate-free list of neighbors. Edge lookups are `O(deg)` and vertices are addressed by label
  only.

Both keep the labels of their vertices in a [`VertexLabels`] table fixed at construction. The
vertex set is immutable afterwards; only edges can be added or removed.
*/

use crate::{error::*, ops::*, *};

mod labels;
mod neighborhood;
mod undirected;

pub use labels::*;
pub use neighborhood::*;
pub use undirected::*;
