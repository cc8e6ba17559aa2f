use itertools::Itertools;
use smallvec::{Array, SmallVec};

use super::*;

/// Trait for methods on the Neighborhood of a specified Node
pub trait Neighborhood: Clone {
    /// *true* if graphs built from this neighborhood accept raw indices as vertex references
    const INDEX_ADDRESSABLE: bool;

    /// Creates an empty Neighborhood within a graph of `n` nodes
    fn new(n: NumNodes) -> Self;

    /// Returns the number of neighbors in the Neighborhood
    fn num_of_neighbors(&self) -> NumNodes;

    /// Returns an iterator over all neighbors in the Neighborhood
    fn neighbors(&self) -> impl Iterator<Item = Node> + '_;

    /// Returns *true* if `u` is in the Neighborhood
    /// ** Might panic if `u >= n` **
    fn has_neighbor(&self, v: Node) -> bool {
        self.neighbors().any(|u| u == v)
    }

    /// Tries to add a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_add_neighbor(&mut self, u: Node) -> bool {
        if self.has_neighbor(u) {
            true
        } else {
            self.add_neighbor(u);
            false
        }
    }

    /// Adds a neighbor to the Neighborhood without checking if this neighbor exists beforehand.
    /// For some implementations, this might lead to Multi-Edges
    fn add_neighbor(&mut self, u: Node);

    /// Tries to remove a neighbor to the Neighborhood.
    /// Returns *true* if the node was in the Neighborhood before.
    /// ** Might panic if `u >= n` **
    fn try_remove_neighbor(&mut self, u: Node) -> bool;
}

/// One row of a 0/1 adjacency matrix
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatrixRow(pub Vec<u8>);

impl MatrixRow {
    /// The raw 0/1 entries of this row
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl Neighborhood for MatrixRow {
    const INDEX_ADDRESSABLE: bool = true;

    fn new(n: NumNodes) -> Self {
        Self(vec![0; n as usize])
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.iter().map(|&x| x as NumNodes).sum()
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0
            .iter()
            .positions(|&x| x != 0)
            .map(|v| v as Node)
    }

    fn has_neighbor(&self, v: Node) -> bool {
        self.0[v as usize] != 0
    }

    fn try_add_neighbor(&mut self, u: Node) -> bool {
        std::mem::replace(&mut self.0[u as usize], 1) != 0
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0[u as usize] = 1;
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        std::mem::replace(&mut self.0[u as usize], 0) != 0
    }
}

/// Insertion-ordered neighbor list using `SmallVec<[Node; N]>`.
/// Removal preserves the order of the remaining neighbors.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListNeighborhood<const N: usize = 8>(pub SmallVec<[Node; N]>)
where
    [Node; N]: Array<Item = Node>;

impl<const N: usize> ListNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    /// The neighbors in insertion order
    pub fn as_slice(&self) -> &[Node] {
        &self.0
    }
}

impl<const N: usize> Neighborhood for ListNeighborhood<N>
where
    [Node; N]: Array<Item = Node>,
{
    const INDEX_ADDRESSABLE: bool = false;

    fn new(_n: NumNodes) -> Self {
        Self(Default::default())
    }

    fn num_of_neighbors(&self) -> NumNodes {
        self.0.len() as NumNodes
    }

    fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().copied()
    }

    fn add_neighbor(&mut self, u: Node) {
        self.0.push(u);
    }

    fn try_remove_neighbor(&mut self, u: Node) -> bool {
        if let Some((pos, _)) = self.0.iter().find_position(|&&x| x == u) {
            self.0.remove(pos);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn matrix_row() {
        let mut row = MatrixRow::new(5);
        assert!(!row.try_add_neighbor(3));
        assert!(!row.try_add_neighbor(1));
        assert!(row.try_add_neighbor(3));
        assert_eq!(row.neighbors().collect_vec(), vec![1, 3]);
        assert_eq!(row.num_of_neighbors(), 2);
        assert_eq!(row.as_slice(), [0, 1, 0, 1, 0]);

        assert!(row.try_remove_neighbor(1));
        assert!(!row.try_remove_neighbor(1));
        assert_eq!(row.neighbors().collect_vec(), vec![3]);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let mut list: ListNeighborhood = ListNeighborhood::new(5);
        for u in [4, 0, 2, 0, 3] {
            list.try_add_neighbor(u);
        }
        assert_eq!(list.as_slice(), [4, 0, 2, 3]);

        assert!(list.try_remove_neighbor(0));
        assert!(!list.try_remove_neighbor(1));
        assert_eq!(list.as_slice(), [4, 2, 3]);
        assert_eq!(list.num_of_neighbors(), 3);
    }
}
