use fxhash::FxHashMap;

use super::*;

/// The vertex set of a graph: labels in creation order and the inverse lookup table.
///
/// Label `i` belongs to node `i`. Labels are unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexLabels {
    labels: Vec<Label>,
    index: FxHashMap<Label, Node>,
}

impl VertexLabels {
    /// Creates `n` vertices labelled `"0"` to `"n-1"`.
    ///
    /// # Errors
    /// Fails if `n == 0`.
    pub fn numbered(n: NumNodes) -> Result<Self> {
        if n == 0 {
            return Err(ConstructionError::MissingVertices.into());
        }
        Self::from_labels((0..n).map(|u| u.to_string()))
    }

    /// Creates vertices with the given labels in the given order.
    ///
    /// # Errors
    /// Fails if `labels` is empty or contains a label twice.
    pub fn from_labels<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<Label>,
    {
        let labels: Vec<Label> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(ConstructionError::MissingVertices.into());
        }
        if labels.len() >= NumNodes::MAX as usize {
            return Err(ConstructionError::TooManyVertices(labels.len()).into());
        }

        let mut index = FxHashMap::with_capacity_and_hasher(labels.len(), Default::default());
        for (u, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), u as Node).is_some() {
                return Err(ConstructionError::DuplicateLabel(label.clone()).into());
            }
        }

        Ok(Self { labels, index })
    }

    /// Number of vertices
    pub fn len(&self) -> NumNodes {
        self.labels.len() as NumNodes
    }

    /// Always *false*: a vertex set has at least one vertex
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in creation order
    pub fn as_slice(&self) -> &[Label] {
        &self.labels
    }

    /// Label of node `u`.
    /// ** Panics if `u >= n` **
    pub fn label_of(&self, u: Node) -> &str {
        &self.labels[u as usize]
    }

    /// Node of the given label
    pub fn node_of(&self, label: &str) -> Option<Node> {
        self.index.get(label).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_labels() {
        let labels = VertexLabels::numbered(3).unwrap();
        assert_eq!(labels.as_slice(), ["0", "1", "2"]);
        assert_eq!(labels.node_of("2"), Some(2));
        assert_eq!(labels.node_of("3"), None);
        assert_eq!(labels.label_of(1), "1");
    }

    #[test]
    fn construction_errors() {
        assert_eq!(
            VertexLabels::numbered(0),
            Err(GraphError::Construction(ConstructionError::MissingVertices))
        );
        assert_eq!(
            VertexLabels::from_labels(Vec::<String>::new()),
            Err(GraphError::Construction(ConstructionError::MissingVertices))
        );
        assert_eq!(
            VertexLabels::from_labels(["A", "B", "A"]),
            Err(GraphError::Construction(ConstructionError::DuplicateLabel(
                "A".into()
            )))
        );
    }
}
