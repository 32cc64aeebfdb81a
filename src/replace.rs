//! Range replacement engine
//!
//! Replaces the fragment covered by a [`TextRange`] with its converted form and
//! returns the range that wraps the new text. Two shapes are handled:
//!
//! - **Single leaf**: both boundaries sit in the same text leaf. The leaf is
//!   spliced in place and keeps its identity.
//! - **Across nodes**: anything else. Offsets are measured in the flattened
//!   text of the boundaries' common ancestor, the flattened text is spliced,
//!   and the ancestor's content is replaced by a single text leaf. Inline
//!   structure under that ancestor (formatting elements, comments) is lost.
//!
//! Splicing is always positional. Searching for the fragment's text would hit
//! the wrong occurrence whenever the same text appears twice.
//!
//! Every check runs against a read-only view first ([`locate`]); the tree is
//! only touched once the whole replacement is known to be valid, so a failed
//! replacement leaves no trace.

use std::ops::Range;

use crate::classify::{classify, Direction};
use crate::convert::Converter;
use crate::document::{Boundary, NodeId, TextRange, TextTree, TextTreeMut};
use crate::util::{char_len, slice_chars, splice_chars};

/// Errors that abort a replacement. The document is unchanged when one is
/// returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    /// A boundary refers to a node that is not in the document
    UnknownNode(NodeId),
    /// A boundary offset is past the end of its node
    OffsetOutOfBounds {
        node: NodeId,
        offset: usize,
        len: usize,
    },
    /// The walk under the common ancestor never reached the boundary node.
    /// Means the range is stale or was taken from another tree.
    AnchorNotFound(NodeId),
}

impl std::fmt::Display for ReplaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownNode(node) => write!(f, "node {} is not in the document", node),
            Self::OffsetOutOfBounds { node, offset, len } => write!(
                f,
                "offset {} is out of bounds for node {} (length {})",
                offset, node, len
            ),
            Self::AnchorNotFound(node) => {
                write!(f, "boundary node {} not found under common ancestor", node)
            }
        }
    }
}

impl std::error::Error for ReplaceError {}

/// Why a replacement did nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The selection has no range
    EmptySelection,
    /// The range covers no text
    DegenerateRange,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptySelection => write!(f, "empty selection"),
            Self::DegenerateRange => write!(f, "selection covers no text"),
        }
    }
}

/// A completed replacement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Text the range covered before
    pub original: String,
    /// Text now in its place
    pub converted: String,
    pub direction: Direction,
    /// Range wrapping exactly `converted`
    pub range: TextRange,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplaceOutcome {
    Replaced(Replacement),
    Skipped(SkipReason),
}

impl ReplaceOutcome {
    pub fn replacement(&self) -> Option<&Replacement> {
        match self {
            Self::Replaced(replacement) => Some(replacement),
            Self::Skipped(_) => None,
        }
    }
}

/// Where a fragment gets spliced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceTarget {
    /// Both boundaries in this text leaf
    Leaf(NodeId),
    /// Boundaries spread below this node; its flattened text is spliced
    Ancestor(NodeId),
}

/// A fragment located in the tree, ready to be replaced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub target: SpliceTarget,
    /// Char range inside the leaf, or inside the ancestor's flattened text
    pub chars: Range<usize>,
    pub text: String,
}

/// Find the text a range covers and where it would be spliced.
///
/// Backwards ranges (end before start) are accepted and treated as the same
/// span read forwards.
pub fn locate<T>(tree: &T, range: &TextRange) -> Result<Fragment, ReplaceError>
where
    T: TextTree + ?Sized,
{
    check_boundary(tree, range.start)?;
    check_boundary(tree, range.end)?;

    if range.is_single_node() && tree.is_text(range.start.node) {
        let node = range.start.node;
        let chars = ordered(range.start.offset, range.end.offset);
        let text = tree
            .leaf_text(node)
            .map(|leaf| slice_chars(&leaf, chars.clone()).to_string())
            .unwrap_or_default();
        return Ok(Fragment {
            target: SpliceTarget::Leaf(node),
            chars,
            text,
        });
    }

    let ancestor = tree
        .common_ancestor(range.start.node, range.end.node)
        .ok_or(ReplaceError::AnchorNotFound(range.start.node))?;
    let start = global_offset(tree, ancestor, range.start)?;
    let end = global_offset(tree, ancestor, range.end)?;
    let chars = ordered(start, end);
    let flat = tree.text_content(ancestor);
    let text = slice_chars(&flat, chars.clone()).to_string();
    Ok(Fragment {
        target: SpliceTarget::Ancestor(ancestor),
        chars,
        text,
    })
}

/// Offsets of a range in the flattened text of the whole document
pub fn document_offsets<T>(tree: &T, range: &TextRange) -> Result<Range<usize>, ReplaceError>
where
    T: TextTree + ?Sized,
{
    check_boundary(tree, range.start)?;
    check_boundary(tree, range.end)?;
    let root = tree.root();
    let start = global_offset(tree, root, range.start)?;
    let end = global_offset(tree, root, range.end)?;
    Ok(ordered(start, end))
}

/// Replace the range's fragment, picking the direction from its trailing run
pub fn replace_range<T, C>(
    tree: &mut T,
    range: &TextRange,
    converter: &C,
) -> Result<ReplaceOutcome, ReplaceError>
where
    T: TextTreeMut + ?Sized,
    C: Converter + ?Sized,
{
    replace_with(tree, range, converter, None)
}

/// Replace the range's fragment using a fixed direction
pub fn replace_range_as<T, C>(
    tree: &mut T,
    range: &TextRange,
    converter: &C,
    direction: Direction,
) -> Result<ReplaceOutcome, ReplaceError>
where
    T: TextTreeMut + ?Sized,
    C: Converter + ?Sized,
{
    replace_with(tree, range, converter, Some(direction))
}

fn replace_with<T, C>(
    tree: &mut T,
    range: &TextRange,
    converter: &C,
    forced: Option<Direction>,
) -> Result<ReplaceOutcome, ReplaceError>
where
    T: TextTreeMut + ?Sized,
    C: Converter + ?Sized,
{
    let fragment = locate(tree, range)?;
    if fragment.text.is_empty() {
        tracing::debug!("Range {:?} covers no text, skipping", range);
        return Ok(ReplaceOutcome::Skipped(SkipReason::DegenerateRange));
    }

    let direction = forced.unwrap_or_else(|| classify(&fragment.text));
    let converted = match direction {
        Direction::Unchanged => fragment.text.clone(),
        direction => converter.convert(&fragment.text, direction),
    };
    tracing::debug!(
        target_node = ?fragment.target,
        chars = ?fragment.chars,
        %direction,
        "Replacing {:?} with {:?}",
        fragment.text,
        converted
    );

    let new_range = apply(tree, &fragment, &converted);
    Ok(ReplaceOutcome::Replaced(Replacement {
        original: fragment.text,
        converted,
        direction,
        range: new_range,
    }))
}

/// Splice `converted` in place of a located fragment. Cannot fail for a
/// fragment freshly returned by [`locate`] on the same tree.
fn apply<T>(tree: &mut T, fragment: &Fragment, converted: &str) -> TextRange
where
    T: TextTreeMut + ?Sized,
{
    let start = fragment.chars.start;
    let end = start + char_len(converted);
    match fragment.target {
        SpliceTarget::Leaf(leaf) => {
            let spliced = tree.splice_text(leaf, fragment.chars.clone(), converted);
            debug_assert!(spliced, "located fragment must fit its leaf");
            TextRange::within(leaf, start, end)
        }
        SpliceTarget::Ancestor(ancestor) => {
            let flat = tree.text_content(ancestor);
            let spliced = splice_chars(&flat, fragment.chars.clone(), converted);
            match tree.set_text_content(ancestor, &spliced) {
                Some(leaf) => TextRange::within(leaf, start, end),
                // Nothing left to anchor in
                None => TextRange::collapsed(Boundary::new(ancestor, 0)),
            }
        }
    }
}

fn check_boundary<T>(tree: &T, boundary: Boundary) -> Result<(), ReplaceError>
where
    T: TextTree + ?Sized,
{
    let len = tree
        .node_len(boundary.node)
        .ok_or(ReplaceError::UnknownNode(boundary.node))?;
    if boundary.offset > len {
        return Err(ReplaceError::OffsetOutOfBounds {
            node: boundary.node,
            offset: boundary.offset,
            len,
        });
    }
    Ok(())
}

/// Offset of a boundary in the flattened text of `ancestor`.
///
/// Walks everything under `ancestor` in document order, adding up the text
/// leaves before the boundary node. Elements and comments add nothing.
fn global_offset<T>(tree: &T, ancestor: NodeId, boundary: Boundary) -> Result<usize, ReplaceError>
where
    T: TextTree + ?Sized,
{
    let mut offset = 0;
    for node in tree.descendants(ancestor) {
        if node == boundary.node {
            if tree.is_text(node) {
                return Ok(offset + boundary.offset);
            }
            // Element boundary: text of the children before the offset
            let before: usize = tree
                .children(node)
                .iter()
                .take(boundary.offset)
                .map(|&child| char_len(&tree.text_content(child)))
                .sum();
            return Ok(offset + before);
        }
        offset += tree.text_len(node);
    }

    tracing::error!(
        "Boundary node {} not found under {}; stale range?",
        boundary.node,
        ancestor
    );
    Err(ReplaceError::AnchorNotFound(boundary.node))
}

fn ordered(a: usize, b: usize) -> Range<usize> {
    a.min(b)..a.max(b)
}
