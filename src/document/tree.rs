//! Tree traits and the arena-backed [`Document`].
//!
//! Provides `TextTree` (read-only) and `TextTreeMut` (read-write) traits so the
//! replacement engine can run against any host tree, and `Document`, the tree
//! used by the session, the CLI and the tests.

use std::borrow::Cow;
use std::ops::Range;

use ropey::Rope;

use super::node::{Node, NodeId, NodeKind};

/// Read-only view of a document tree.
pub trait TextTree {
    /// The document root
    fn root(&self) -> NodeId;

    /// Check if a node is (still) part of the tree
    fn contains(&self, node: NodeId) -> bool;

    fn parent(&self, node: NodeId) -> Option<NodeId>;

    /// Ordered children (empty for leaves and unknown nodes)
    fn children(&self, node: NodeId) -> &[NodeId];

    /// Check if a node is a text-bearing leaf
    fn is_text(&self, node: NodeId) -> bool;

    /// Text of a text-bearing leaf, None for every other node
    fn leaf_text(&self, node: NodeId) -> Option<Cow<'_, str>>;

    /// Length of a node as a boundary container (chars or child count)
    fn node_len(&self, node: NodeId) -> Option<usize>;

    /// Character count of a text leaf (0 for other nodes)
    fn text_len(&self, node: NodeId) -> usize {
        self.leaf_text(node)
            .map(|text| text.chars().count())
            .unwrap_or(0)
    }

    /// `node` and everything below it, in document order
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(node) {
            return out;
        }
        let mut stack = vec![node];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    /// Text-bearing leaves under `root`, in document order
    fn text_leaves(&self, root: NodeId) -> Vec<NodeId> {
        self.descendants(root)
            .into_iter()
            .filter(|&node| self.is_text(node))
            .collect()
    }

    /// Flattened text of a node: all text leaves below it, concatenated
    fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for leaf in self.text_leaves(node) {
            if let Some(text) = self.leaf_text(leaf) {
                out.push_str(&text);
            }
        }
        out
    }

    /// `node` followed by its ancestors up to the root
    fn ancestors(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut current = self.contains(node).then_some(node);
        while let Some(id) = current {
            out.push(id);
            current = self.parent(id);
        }
        out
    }

    /// Deepest node that contains both `a` and `b` (a node contains itself)
    fn common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        let of_b = self.ancestors(b);
        self.ancestors(a)
            .into_iter()
            .find(|candidate| of_b.contains(candidate))
    }
}

/// Mutable tree operations. Extends TextTree.
pub trait TextTreeMut: TextTree {
    /// Replace the characters in `range` of a text leaf.
    ///
    /// Returns false (and changes nothing) if `node` is not a text leaf or the
    /// range does not fit.
    fn splice_text(&mut self, node: NodeId, range: Range<usize>, text: &str) -> bool;

    /// Replace a node's entire text content.
    ///
    /// A text leaf keeps its identity. A container loses all of its children
    /// and gets a single text leaf holding `text` (no child at all when `text`
    /// is empty). Returns the text leaf now holding the content.
    fn set_text_content(&mut self, node: NodeId, text: &str) -> Option<NodeId>;
}

// =============================================================================
// Document - arena-backed tree
// =============================================================================

/// Arena-backed document tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Option<Node>>,
    root: NodeId,
}

impl Document {
    /// Create a document with an empty root element
    pub fn new(root_tag: &str) -> Self {
        let root = Node::new(
            NodeKind::Element {
                tag: root_tag.to_string(),
            },
            None,
        );
        Self {
            nodes: vec![Some(root)],
            root: NodeId(0),
        }
    }

    /// Create a `<p>` document with one text leaf per segment.
    ///
    /// Returns the document and the leaf ids in order.
    pub fn from_segments<S: AsRef<str>>(segments: &[S]) -> (Self, Vec<NodeId>) {
        let mut doc = Self::new("p");
        let root = doc.root();
        let leaves = segments
            .iter()
            .filter_map(|segment| doc.append_text(root, segment.as_ref()))
            .collect();
        (doc, leaves)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.0).and_then(Option::as_mut)
    }

    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.node(id).map(|node| &node.kind)
    }

    /// Tag name of an element
    pub fn tag(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::Element { tag } => Some(tag),
            _ => None,
        }
    }

    /// Number of live nodes
    pub fn node_count(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// Append a child element. None if `parent` is not a live element.
    pub fn append_element(&mut self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.append(
            parent,
            NodeKind::Element {
                tag: tag.to_string(),
            },
        )
    }

    /// Append a text leaf. None if `parent` is not a live element.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Option<NodeId> {
        self.append(parent, NodeKind::Text(Rope::from_str(text)))
    }

    /// Append a comment leaf. None if `parent` is not a live element.
    pub fn append_comment(&mut self, parent: NodeId, data: &str) -> Option<NodeId> {
        self.append(parent, NodeKind::Comment(data.to_string()))
    }

    fn append(&mut self, parent: NodeId, kind: NodeKind) -> Option<NodeId> {
        if !self.kind(parent)?.is_element() {
            return None;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Some(Node::new(kind, Some(parent))));
        self.node_mut(parent)?.children.push(id);
        Some(id)
    }

    /// Drop every descendant of `node` from the arena, leaving `node` childless
    fn remove_children(&mut self, node: NodeId) {
        let doomed: Vec<NodeId> = self.descendants(node).into_iter().skip(1).collect();
        for id in doomed {
            self.nodes[id.0] = None;
        }
        if let Some(node) = self.node_mut(node) {
            node.children.clear();
        }
    }
}

impl TextTree for Document {
    fn root(&self) -> NodeId {
        self.root
    }

    fn contains(&self, node: NodeId) -> bool {
        self.node(node).is_some()
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        self.node(node)
            .map(|node| node.children.as_slice())
            .unwrap_or(&[])
    }

    fn is_text(&self, node: NodeId) -> bool {
        self.kind(node).is_some_and(NodeKind::is_text)
    }

    fn leaf_text(&self, node: NodeId) -> Option<Cow<'_, str>> {
        match self.kind(node)? {
            NodeKind::Text(rope) => Some(Cow::Owned(rope.to_string())),
            _ => None,
        }
    }

    fn node_len(&self, node: NodeId) -> Option<usize> {
        self.node(node).map(Node::boundary_len)
    }

    fn text_len(&self, node: NodeId) -> usize {
        match self.kind(node) {
            Some(NodeKind::Text(rope)) => rope.len_chars(),
            _ => 0,
        }
    }
}

impl TextTreeMut for Document {
    fn splice_text(&mut self, node: NodeId, range: Range<usize>, text: &str) -> bool {
        let Some(Node {
            kind: NodeKind::Text(rope),
            ..
        }) = self.node_mut(node)
        else {
            return false;
        };
        if range.start > range.end || range.end > rope.len_chars() {
            return false;
        }
        rope.remove(range.clone());
        rope.insert(range.start, text);
        true
    }

    fn set_text_content(&mut self, node: NodeId, text: &str) -> Option<NodeId> {
        if self.kind(node)?.is_element() {
            self.remove_children(node);
            if text.is_empty() {
                return None;
            }
            return self.append_text(node, text);
        }

        match &mut self.node_mut(node)?.kind {
            NodeKind::Text(rope) => {
                *rope = Rope::from_str(text);
                Some(node)
            }
            NodeKind::Comment(data) => {
                *data = text.to_string();
                None
            }
            NodeKind::Element { .. } => None,
        }
    }
}
