/*!
# Vertex Representation

Vertices are identified by their **label**. Internally, every representation numbers its
vertices `0..n` in creation order and stores adjacency in terms of these indices (`Node = u32`).
The index is an implementation detail and never part of a vertex's public identity: two graphs
share a vertex exactly if they share its label.
*/

use std::fmt::{Debug, Display};

/// Internal index of a vertex. Ranges from `0` to `n - 1` in creation order.
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// Public identity of a vertex
pub type Label = String;

/// A reference to a vertex as accepted by the editing operations.
///
/// Labels are always accepted. Raw indices are a convenience of representations that
/// declare themselves index-addressable (see [`Neighborhood::INDEX_ADDRESSABLE`](crate::repr::Neighborhood::INDEX_ADDRESSABLE)).
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
pub enum VertexRef<'a> {
    /// Vertex given by its label
    Label(&'a str),
    /// Vertex given by its internal index
    Index(Node),
}

impl Display for VertexRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexRef::Label(label) => write!(f, "'{label}'"),
            VertexRef::Index(u) => write!(f, "#{u}"),
        }
    }
}

impl Debug for VertexRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<'a> From<&'a str> for VertexRef<'a> {
    fn from(value: &'a str) -> Self {
        VertexRef::Label(value)
    }
}

impl<'a> From<&'a String> for VertexRef<'a> {
    fn from(value: &'a String) -> Self {
        VertexRef::Label(value.as_str())
    }
}

impl<'a, 'b> From<&'b &'a str> for VertexRef<'a> {
    fn from(value: &'b &'a str) -> Self {
        VertexRef::Label(value)
    }
}

impl From<Node> for VertexRef<'_> {
    fn from(value: Node) -> Self {
        VertexRef::Index(value)
    }
}
