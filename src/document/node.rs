//! Node types for the document tree.

use ropey::Rope;

/// Identifies a node inside one [`Document`](super::Document).
///
/// Ids are never reused: a node removed from the tree leaves a hole, so a
/// stale id is detected instead of silently pointing at a different node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Raw arena index
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node holds
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// Structural container with ordered children
    Element { tag: String },
    /// Text-bearing leaf; the only kind that contributes to flattened text
    Text(Rope),
    /// Leaf with data that is never part of the document text
    Comment(String),
}

impl NodeKind {
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Self::Element { .. })
    }
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(kind: NodeKind, parent: Option<NodeId>) -> Self {
        Self {
            kind,
            parent,
            children: Vec::new(),
        }
    }

    /// Length of the node as a boundary container: characters for text and
    /// comments, child count for elements.
    pub fn boundary_len(&self) -> usize {
        match &self.kind {
            NodeKind::Element { .. } => self.children.len(),
            NodeKind::Text(rope) => rope.len_chars(),
            NodeKind::Comment(data) => data.chars().count(),
        }
    }
}
