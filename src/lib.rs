//! retype - fix text typed in the wrong keyboard layout
//!
//! This crate converts a selected fragment between Latin keystrokes and Hangul
//! and splices the result back into a structured document, keeping the
//! selection wrapped around the new text.
//!
//! # Example
//!
//! ```
//! use retype::document::Document;
//! use retype::EditSession;
//!
//! let (doc, leaves) = Document::from_segments(&["hello dkssud"]);
//! let mut session = EditSession::new(doc);
//! session.select(leaves[0], 6, leaves[0], 12);
//! session.replace_selection().unwrap();
//!
//! assert_eq!(session.text(), "hello 안녕");
//! ```

pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod convert;
pub mod document;
pub mod replace;
pub mod script;
pub mod session;
pub mod tracing;
pub mod util;

// Re-export commonly used types
pub use classify::{classify, Direction};
pub use commands::Command;
pub use config::RetypeConfig;
pub use convert::{Converter, Dubeolsik};
pub use replace::{ReplaceError, ReplaceOutcome, Replacement, SkipReason};
pub use session::EditSession;
