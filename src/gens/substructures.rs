/*!
# Substructure Generators

This module provides utility methods to generate additional **substructures**
inside an already existing graph.

It allows adding common motifs such as:

- **Paths**
- **Cycles**
- **Cliques**

Vertices are given as [`VertexRef`]s. All of them are resolved before the first edge is added,
so an invalid vertex leaves the graph unchanged.

# Example

```rust
use lgraphs::{prelude::*, gens::*};

let mut g = SparseGraph::from_labels(["a", "b", "c", "d", "e"]).unwrap();
g.connect_path(["a", "b", "c"]).unwrap();
g.connect_cycle(["c", "d", "e"]).unwrap();
g.connect_clique(["a", "c", "e"]).unwrap();

assert_eq!(g.number_of_edges(), 7);
assert!(g.connect_path(["a", "x"]).is_err());
assert_eq!(g.number_of_edges(), 7);
```
*/

use itertools::Itertools;

use super::*;

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph.
///
/// Implemented for all graphs that support edge editing.
pub trait GeneratorSubstructures {
    /// Connects the given vertices in order with a **simple path**.
    ///
    /// Each consecutive pair of vertices is connected by a single edge.
    ///
    /// # Example
    /// ```rust
    /// use lgraphs::{prelude::*, gens::*};
    ///
    /// let mut g = DenseGraph::new(4).unwrap();
    /// g.connect_path(["0", "1", "2", "3"]).unwrap();
    ///
    /// assert!(g.has_edge(0, 1));
    /// assert!(g.has_edge(1, 2));
    /// assert!(g.has_edge(2, 3));
    /// ```
    fn connect_path<'a, P, V>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>;

    /// Connects the given vertices with a **cycle**.
    ///
    /// - Consecutive vertices are connected by edges.
    /// - Additionally, the last vertex is connected back to the first.
    ///
    /// A single vertex thus receives a self-loop.
    fn connect_cycle<'a, C, V>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>;

    /// Connects all given vertices into a **clique** (complete subgraph) without self-loops.
    fn connect_clique<'a, C, V>(&mut self, vertices: C) -> Result<()>
    where
        C: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>;
}

/// Resolves all vertices or none
fn resolve_all<'a, G, I, V>(graph: &G, vertices: I) -> Result<Vec<Node>>
where
    G: GraphLabels,
    I: IntoIterator<Item = V>,
    V: Into<VertexRef<'a>>,
{
    vertices.into_iter().map(|v| graph.resolve(v)).collect()
}

impl<G> GeneratorSubstructures for G
where
    G: GraphEdgeEditing,
{
    fn connect_path<'a, P, V>(&mut self, vertices_on_path: P) -> Result<()>
    where
        P: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>,
    {
        for (u, v) in resolve_all(&*self, vertices_on_path)?.into_iter().tuple_windows() {
            self.insert_edge(u, v);
        }
        Ok(())
    }

    fn connect_cycle<'a, C, V>(&mut self, vertices_in_cycle: C) -> Result<()>
    where
        C: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>,
    {
        let nodes = resolve_all(&*self, vertices_in_cycle)?;
        if let (Some(&first), Some(&last)) = (nodes.first(), nodes.last()) {
            for (u, v) in nodes.into_iter().tuple_windows() {
                self.insert_edge(u, v);
            }
            self.insert_edge(last, first);
        }
        Ok(())
    }

    fn connect_clique<'a, C, V>(&mut self, vertices: C) -> Result<()>
    where
        C: IntoIterator<Item = V>,
        V: Into<VertexRef<'a>>,
    {
        let nodes = resolve_all(&*self, vertices)?;
        for (u, v) in nodes.into_iter().tuple_combinations() {
            if u != v {
                self.insert_edge(u, v);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_path() {
        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_path(Vec::<&str>::new()).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_path(["1"]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = SparseGraph::new(6).unwrap();
            g.connect_path(["2", "1"]).unwrap();
            assert_eq!(g.number_of_edges(), 1);
            assert!(g.has_edge(2, 1));
        }

        {
            let mut g = SparseGraph::new(6).unwrap();
            g.connect_path(["0", "3", "1", "4"]).unwrap();
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_cycle() {
        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_cycle(Vec::<&str>::new()).unwrap();
            assert_eq!(g.number_of_edges(), 0);
        }

        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_cycle(["1"]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
            assert!(g.has_self_loop(1));
        }

        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_cycle(["0", "3", "1", "4"]).unwrap();
            assert_eq!(
                g.edges().collect_vec(),
                vec![Edge(0, 3), Edge(0, 4), Edge(1, 3), Edge(1, 4)]
            );
        }
    }

    #[test]
    fn test_connect_clique() {
        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_clique(["1"]).unwrap();
            assert_eq!(g.number_of_edges(), 0);
            assert!(!g.has_self_loop(1));
        }

        {
            let mut g = SparseGraph::new(6).unwrap();
            g.connect_clique(["1", "2", "4", "2"]).unwrap();
            assert_eq!(g.number_of_edges(), 3);
            assert!(g.self_loops().next().is_none());
        }

        {
            let mut g = DenseGraph::new(6).unwrap();
            g.connect_clique(["0", "1", "2", "3", "4", "5"]).unwrap();
            assert_eq!(g.number_of_edges(), 15);
        }
    }

    #[test]
    fn invalid_vertices_add_nothing() {
        let mut g = DenseGraph::new(4).unwrap();
        assert_eq!(
            g.connect_cycle(["0", "1", "9"]).unwrap_err(),
            GraphError::InvalidVertex("'9'".into())
        );
        assert_eq!(
            g.connect_clique([0 as Node, 1, 4]).unwrap_err(),
            GraphError::InvalidVertex("#4".into())
        );
        assert_eq!(g.number_of_edges(), 0);

        g.connect_clique([0 as Node, 1, 3]).unwrap();
        assert_eq!(g.number_of_edges(), 3);
    }
}
