use std::{
    fmt::{Debug, Display},
    hash::{Hash, Hasher},
};

use crate::{Label, Node};

/// An edge between two internal indices.
/// Edges are undirected: `Edge(u, v)` and `Edge(v, u)` denote the same edge.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge between two labelled vertices as reported by
/// [`LabelledEdges::labelled_edges`](crate::algo::LabelledEdges::labelled_edges).
///
/// The endpoints keep the orientation in which the graph reported them, but equality and
/// hashing treat the edge as an **unordered pair**: `{A, B} == {B, A}`. Two graphs that store
/// the same edge with different internal orders thus still agree on it.
#[derive(Clone)]
pub struct LabelledEdge {
    first: Label,
    second: Label,
}

impl LabelledEdge {
    /// Creates a new edge between `first` and `second`
    pub fn new<A: Into<Label>, B: Into<Label>>(first: A, second: B) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Endpoint reported first
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Endpoint reported second
    pub fn second(&self) -> &str {
        &self.second
    }

    /// Both endpoints in reported orientation
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.first, &self.second)
    }

    /// Returns *true* if `label` is one of the endpoints
    pub fn is_incident_to(&self, label: &str) -> bool {
        self.first == label || self.second == label
    }

    /// Endpoints with the lexicographically smaller label first
    fn sorted(&self) -> (&str, &str) {
        if self.first <= self.second {
            (&self.first, &self.second)
        } else {
            (&self.second, &self.first)
        }
    }
}

impl PartialEq for LabelledEdge {
    fn eq(&self, other: &Self) -> bool {
        self.sorted() == other.sorted()
    }
}

impl Eq for LabelledEdge {}

impl Hash for LabelledEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sorted().hash(state);
    }
}

impl Display for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.first, self.second)
    }
}

impl Debug for LabelledEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl<A: Into<Label>, B: Into<Label>> From<(A, B)> for LabelledEdge {
    fn from((first, second): (A, B)) -> Self {
        Self::new(first, second)
    }
}
