/*!
# IO

Utilities for writing human-readable debug dumps of graphs.

## Output Formats

- **Matrix**: a label-headed 0/1 adjacency matrix, one row per vertex.
- **Adjacency**: one line `label -> [neighbors]` per vertex in storage order.

Both list vertices in creation order and only write to an arbitrary [`Write`]; they are meant
for inspection, not as a persistence format, so there is no matching reader.

## Traits

- [`GraphWriter`] is implemented by the configurable writers [`MatrixDump`] and [`AdjacencyDump`].
- [`DebugDump`] writes a graph in the format matching its representation with default settings.
*/

mod dump;

use std::io::{Result, Write};

use crate::prelude::*;

pub use dump::*;

/// Trait for types that can write graphs in a specific format.
pub trait GraphWriter<G> {
    /// Writes the given graph to the provided writer according to the settings in `self`.
    ///
    /// # Errors
    /// Returns an error if writing fails (e.g., IO errors).
    fn try_write_graph<W>(&self, graph: &G, writer: W) -> Result<()>
    where
        W: Write;

    /// Renders the graph into a `String` according to the settings in `self`
    fn to_dump_string(&self, graph: &G) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec<u8> cannot fail and the output is assembled from UTF-8 labels
        let _ = self.try_write_graph(graph, &mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

/// Writes a graph in the dump format natural to its representation:
/// dense graphs as a matrix, sparse graphs as adjacency lists.
pub trait DebugDump {
    /// Writes the dump to `writer`
    fn try_write_dump<W>(&self, writer: W) -> Result<()>
    where
        W: Write;

    /// Renders the dump into a `String`
    fn dump_string(&self) -> String {
        let mut buffer = Vec::new();
        // writing into a Vec<u8> cannot fail and the output is assembled from UTF-8 labels
        let _ = self.try_write_dump(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl DebugDump for DenseGraph {
    fn try_write_dump<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        MatrixDump::default().try_write_graph(self, writer)
    }
}

impl DebugDump for SparseGraph {
    fn try_write_dump<W>(&self, writer: W) -> Result<()>
    where
        W: Write,
    {
        AdjacencyDump::default().try_write_graph(self, writer)
    }
}
