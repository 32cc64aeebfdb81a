//! Boundaries, ranges and the active selection.

use super::node::NodeId;

/// A point in the document: a node and an offset inside it.
///
/// The offset counts characters in text leaves and comments, and children in
/// elements (offset `n` sits just before child `n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Boundary {
    pub node: NodeId,
    pub offset: usize,
}

impl Boundary {
    pub const fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// A range between two boundaries; `start` precedes or equals `end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextRange {
    pub start: Boundary,
    pub end: Boundary,
}

impl TextRange {
    pub fn new(start: Boundary, end: Boundary) -> Self {
        Self { start, end }
    }

    /// Range inside a single node, from `start` to `end` offsets
    pub fn within(node: NodeId, start: usize, end: usize) -> Self {
        Self::new(Boundary::new(node, start), Boundary::new(node, end))
    }

    /// Create a collapsed range (caret with no extent)
    pub fn collapsed(at: Boundary) -> Self {
        Self { start: at, end: at }
    }

    /// Check if both boundaries are the same point
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Check if both boundaries live in the same node
    pub fn is_single_node(&self) -> bool {
        self.start.node == self.end.node
    }
}

/// The host's active selection. Only the first range is ever acted upon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ranges: Vec<TextRange>,
}

impl Selection {
    /// Selection with no ranges
    pub fn empty() -> Self {
        Self::default()
    }

    /// Selection holding exactly one range
    pub fn single(range: TextRange) -> Self {
        Self {
            ranges: vec![range],
        }
    }

    pub fn range_count(&self) -> usize {
        self.ranges.len()
    }

    /// Check if the selection has no ranges
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The range operations act upon
    pub fn first(&self) -> Option<&TextRange> {
        self.ranges.first()
    }

    pub fn ranges(&self) -> &[TextRange] {
        &self.ranges
    }

    pub fn add_range(&mut self, range: TextRange) {
        self.ranges.push(range);
    }

    pub fn remove_all_ranges(&mut self) {
        self.ranges.clear();
    }

    /// Drop every range and select `range` alone
    pub fn replace_with(&mut self, range: TextRange) {
        self.ranges.clear();
        self.ranges.push(range);
    }
}
