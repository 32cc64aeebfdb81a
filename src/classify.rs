//! Direction classifier
//!
//! Decides which way a fragment should be converted by looking at the end of
//! the fragment: the last characters typed are the best hint of what the user
//! meant, even when the fragment is mixed or short.

use crate::script::{script_of, Script};

/// Which conversion applies to a fragment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Latin keystrokes that should have been Hangul
    ToHangul,
    /// Hangul that should have been Latin keystrokes
    ToLatin,
    /// No script-bearing character found; the text is left as is
    #[default]
    Unchanged,
}

impl Direction {
    /// The direction that undoes this one
    pub fn opposite(self) -> Self {
        match self {
            Self::ToHangul => Self::ToLatin,
            Self::ToLatin => Self::ToHangul,
            Self::Unchanged => Self::Unchanged,
        }
    }

    /// Script the converted text ends up in
    pub fn target_script(self) -> Option<Script> {
        match self {
            Self::ToHangul => Some(Script::Hangul),
            Self::ToLatin => Some(Script::Latin),
            Self::Unchanged => None,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ToHangul => write!(f, "to-hangul"),
            Self::ToLatin => write!(f, "to-latin"),
            Self::Unchanged => write!(f, "unchanged"),
        }
    }
}

/// Classify a fragment by its trailing run.
///
/// Trailing characters that belong to neither script are skipped; the first
/// script-bearing character from the end decides the direction.
pub fn classify(text: &str) -> Direction {
    match text.chars().rev().find_map(script_of) {
        Some(Script::Latin) => Direction::ToHangul,
        Some(Script::Hangul) => Direction::ToLatin,
        None => Direction::Unchanged,
    }
}
