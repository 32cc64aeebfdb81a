//! Structured document model for in-place replacement.
//!
//! # Architecture
//!
//! - [`TextTree`] / [`TextTreeMut`]: traits the replacement engine works
//!   against (read text, walk text leaves, write text content)
//! - [`Document`]: arena-backed tree of elements, text leaves and comments
//! - [`Boundary`], [`TextRange`], [`Selection`]: where the user's selection is
//!
//! Only text leaves contribute characters to a node's flattened text.
//!
//! # Example
//!
//! ```
//! use retype::document::{Document, TextTree};
//!
//! let (doc, leaves) = Document::from_segments(&["ab", "cd"]);
//! assert_eq!(leaves.len(), 2);
//! assert_eq!(doc.text_content(doc.root()), "abcd");
//! ```

mod node;
mod selection;
mod tree;

pub use node::{Node, NodeId, NodeKind};
pub use selection::{Boundary, Selection, TextRange};
pub use tree::{Document, TextTree, TextTreeMut};
