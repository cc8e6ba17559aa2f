/*!
# Errors

Editing a graph can only fail because a vertex reference does not belong to the graph, and
constructing one can only fail because no (valid) vertex set was supplied. Every other operation
is total on a well-formed graph.
*/

use thiserror::Error;

/// Errors raised by graph construction and edge editing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A label or index that does not belong to the graph. The graph is left unchanged.
    #[error("vertex {0} does not belong to the graph")]
    InvalidVertex(String),
    /// The graph could not be constructed; no partial graph exists.
    #[error("cannot construct graph: {0}")]
    Construction(#[from] ConstructionError),
}

/// Reasons for refusing to construct a graph
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    #[error("neither a positive vertex count nor a non-empty label list was given")]
    MissingVertices,
    #[error("label '{0}' occurs more than once")]
    DuplicateLabel(String),
    #[error("{0} vertices exceed the supported maximum")]
    TooManyVertices(usize),
}

/// Shorthand for results of graph construction and editing
pub type Result<T> = std::result::Result<T, GraphError>;

/// Shorthand for creating an `InvalidVertex`-error from anything printable
macro_rules! invalid_vertex {
    ($vertex: expr) => {
        $crate::error::GraphError::InvalidVertex(format!("{}", $vertex))
    };
}

pub(crate) use invalid_vertex;
