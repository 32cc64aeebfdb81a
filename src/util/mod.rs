//! Utility modules

pub mod text;

// Re-export text utilities at the util level
pub use text::{char_len, slice_chars, splice_chars};
