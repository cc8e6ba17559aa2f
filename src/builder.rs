/*!
# Graph Builder

Collects the vertex set and edges of a graph before constructing it in one go, so a graph is
either built completely or not at all.

```
use lgraphs::{prelude::*, builder::GraphBuilder};

let g: SparseGraph = GraphBuilder::new()
    .labels(["M", "A", "P"])
    .edge("M", "A")
    .edge("A", "P")
    .build()
    .unwrap();
assert_eq!(g.number_of_edges(), 2);

let err = GraphBuilder::new().edge("M", "A").build::<DenseGraph>().unwrap_err();
assert_eq!(err, GraphError::from(ConstructionError::MissingVertices));
```
*/

use tracing::debug;

use crate::{error::*, prelude::*};

/// An owned [`VertexRef`] that outlives the call that supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
enum VertexSpec {
    Label(Label),
    Index(Node),
}

impl VertexSpec {
    fn as_vertex_ref(&self) -> VertexRef<'_> {
        match self {
            VertexSpec::Label(label) => VertexRef::Label(label),
            VertexSpec::Index(u) => VertexRef::Index(*u),
        }
    }
}

impl From<VertexRef<'_>> for VertexSpec {
    fn from(value: VertexRef<'_>) -> Self {
        match value {
            VertexRef::Label(label) => VertexSpec::Label(label.to_owned()),
            VertexRef::Index(u) => VertexSpec::Index(u),
        }
    }
}

/// Configuration of a graph to construct.
///
/// The vertex set is given either by a count (labels `"0"` to `"n-1"`) or by an explicit label
/// list; if both are given, the labels take precedence.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    num_vertices: Option<NumNodes>,
    labels: Option<Vec<Label>>,
    edges: Vec<(VertexSpec, VertexSpec)>,
}

impl GraphBuilder {
    /// Creates a builder without vertices and edges
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `n` vertices labelled `"0"` to `"n-1"` unless labels are given
    pub fn num_vertices(mut self, n: NumNodes) -> Self {
        self.num_vertices = Some(n);
        self
    }

    /// Uses the given labels in the given order as vertex set
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Adds the edge `{u, v}`. References are only resolved on [`GraphBuilder::build`].
    pub fn edge<'a, 'b, U, V>(mut self, u: U, v: V) -> Self
    where
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        self.edges
            .push((VertexSpec::from(u.into()), VertexSpec::from(v.into())));
        self
    }

    /// Adds all given edges
    pub fn edges<'a, 'b, I, U, V>(self, edges: I) -> Self
    where
        I: IntoIterator<Item = (U, V)>,
        U: Into<VertexRef<'a>>,
        V: Into<VertexRef<'b>>,
    {
        edges
            .into_iter()
            .fold(self, |builder, (u, v)| builder.edge(u, v))
    }

    /// Constructs the configured graph.
    ///
    /// # Errors
    /// - `ConstructionError::MissingVertices` if neither a positive count nor labels were given
    /// - `ConstructionError::DuplicateLabel` if a label was given twice
    /// - `InvalidVertex` if an edge refers to a vertex outside of the vertex set
    pub fn build<G>(&self) -> Result<G>
    where
        G: GraphNew + GraphEdgeEditing,
    {
        let labels = match (&self.labels, self.num_vertices) {
            (Some(labels), _) => VertexLabels::from_labels(labels.iter().cloned())?,
            (None, Some(n)) => VertexLabels::numbered(n)?,
            (None, None) => return Err(ConstructionError::MissingVertices.into()),
        };
        debug!(
            nodes = labels.len(),
            edges = self.edges.len(),
            "building graph"
        );

        let mut graph = G::from_vertex_labels(labels);
        for (u, v) in &self.edges {
            graph.add_edge(u.as_vertex_ref(), v.as_vertex_ref())?;
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use crate::algo::*;

    use super::*;

    #[test]
    fn labels_take_precedence() {
        let g: DenseGraph = GraphBuilder::new()
            .num_vertices(10)
            .labels(["x", "y"])
            .edge("x", "y")
            .build()
            .unwrap();
        assert_eq!(g.number_of_nodes(), 2);
        assert!(g.is_complete());
    }

    #[test]
    fn numbered_vertices() {
        let builder = GraphBuilder::new()
            .num_vertices(4)
            .edges([("0", "1"), ("1", "2"), ("2", "3")]);

        let sparse: SparseGraph = builder.build().unwrap();
        let dense: DenseGraph = builder.clone().edge(3 as Node, 0 as Node).build().unwrap();
        assert_eq!(sparse.number_of_edges(), 3);
        assert_eq!(dense.number_of_edges(), 4);
        assert_eq!(sparse.labels(), ["0", "1", "2", "3"]);

        // the sparse representation only knows labels
        assert_eq!(
            builder.edge(3 as Node, 0 as Node).build::<SparseGraph>().unwrap_err(),
            GraphError::InvalidVertex("#3".into())
        );
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            GraphBuilder::new().build::<SparseGraph>().unwrap_err(),
            GraphError::from(ConstructionError::MissingVertices)
        );
        assert_eq!(
            GraphBuilder::new()
                .num_vertices(0)
                .build::<SparseGraph>()
                .unwrap_err(),
            GraphError::from(ConstructionError::MissingVertices)
        );
        assert_eq!(
            GraphBuilder::new()
                .labels(["a", "b", "a"])
                .build::<DenseGraph>()
                .unwrap_err(),
            GraphError::from(ConstructionError::DuplicateLabel("a".into()))
        );
        assert_eq!(
            GraphBuilder::new()
                .labels(["a", "b"])
                .edge("a", "b")
                .edge("b", "c")
                .build::<DenseGraph>()
                .unwrap_err(),
            GraphError::InvalidVertex("'c'".into())
        );
    }
}
