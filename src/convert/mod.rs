//! Keyboard-layout conversion
//!
//! The replacement engine only needs something that turns a fragment into its
//! replacement for a given [`Direction`]. [`Converter`] is that seam: the
//! bundled [`Dubeolsik`] layout implements it, and so does any
//! `Fn(&str, Direction) -> String`, which keeps tests free to use closures.

mod dubeolsik;
pub mod jamo;

pub use dubeolsik::Dubeolsik;

use crate::classify::Direction;

/// Converts text typed in one layout into the other.
///
/// Implementations must be pure and total: same input, same output, and
/// always a string back. The output length need not match the input.
pub trait Converter {
    fn convert(&self, text: &str, direction: Direction) -> String;
}

impl<F> Converter for F
where
    F: Fn(&str, Direction) -> String,
{
    fn convert(&self, text: &str, direction: Direction) -> String {
        self(text, direction)
    }
}
