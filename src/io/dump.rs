//! # Dumps
//!
//! A matrix dump of the graph `A - B - C` looks like
//! ```text
//!    A  B  C
//! ──────────
//! A | 0  1  0
//! B | 1  0  1
//! C | 0  1  0
//! ```
//! and its adjacency dump (with insertion order `A-B`, `C-B`) like
//! ```text
//!   A -> [B]
//!   B -> [A, C]
//!   C -> [B]
//! ```
use itertools::Itertools;

use super::*;

/// A writer for the label-headed adjacency matrix of a graph
#[derive(Debug, Clone)]
pub struct MatrixDump {
    /// Separator between two columns (default: two spaces)
    separator: String,
    /// Write the header and the rule below it
    header: bool,
}

impl Default for MatrixDump {
    fn default() -> Self {
        Self {
            separator: "  ".to_string(),
            header: true,
        }
    }
}

impl MatrixDump {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the separator between two columns
    pub fn separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.separator = separator.into();
        self
    }

    /// If *false*, only the rows are written
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

impl<G> GraphWriter<G> for MatrixDump
where
    G: Graph,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        if self.header {
            let header = format!("   {}", graph.labels().join(self.separator.as_str()));
            writeln!(writer, "{header}")?;
            writeln!(writer, "{}", "─".repeat(header.chars().count()))?;
        }

        for u in graph.vertices_range() {
            let row = graph
                .vertices_range()
                .map(|v| if graph.has_edge(u, v) { "1" } else { "0" })
                .join(&self.separator);
            writeln!(writer, "{} | {row}", graph.label_of(u))?;
        }
        Ok(())
    }
}

/// A writer for the adjacency lists of a graph in storage order
#[derive(Debug, Clone)]
pub struct AdjacencyDump {
    /// Prefix of every line (default: two spaces)
    indent: String,
}

impl Default for AdjacencyDump {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
        }
    }
}

impl AdjacencyDump {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the prefix of every line
    pub fn indent<S: Into<String>>(mut self, indent: S) -> Self {
        self.indent = indent.into();
        self
    }
}

impl<G> GraphWriter<G> for AdjacencyDump
where
    G: Graph,
{
    fn try_write_graph<W>(&self, graph: &G, mut writer: W) -> Result<()>
    where
        W: Write,
    {
        for u in graph.vertices_range() {
            writeln!(
                writer,
                "{}{} -> [{}]",
                self.indent,
                graph.label_of(u),
                graph.neighbors_of(u).map(|v| graph.label_of(v)).join(", ")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path<G: GraphNew + GraphEdgeEditing>() -> G {
        let mut g = G::from_labels(["A", "B", "C"]).unwrap();
        g.add_edges([("A", "B"), ("C", "B")]).unwrap();
        g
    }

    #[test]
    fn matrix_dump() {
        let g: DenseGraph = path();
        assert_eq!(
            g.dump_string(),
            "   A  B  C\n──────────\nA | 0  1  0\nB | 1  0  1\nC | 0  1  0\n"
        );

        // the matrix layout does not depend on the representation
        let sparse: SparseGraph = path();
        assert_eq!(MatrixDump::new().to_dump_string(&sparse), g.dump_string());

        assert_eq!(
            MatrixDump::new()
                .header(false)
                .separator(" ")
                .to_dump_string(&g),
            "A | 0 1 0\nB | 1 0 1\nC | 0 1 0\n"
        );
    }

    #[test]
    fn adjacency_dump() {
        let mut g: SparseGraph = path();
        g.add_edge("B", "B").unwrap();
        assert_eq!(
            g.dump_string(),
            "  A -> [B]\n  B -> [A, C, B]\n  C -> [B]\n"
        );

        let dense: DenseGraph = path();
        assert_eq!(
            AdjacencyDump::new().indent("").to_dump_string(&dense),
            "A -> [B]\nB -> [A, C]\nC -> [B]\n"
        );
    }
}
