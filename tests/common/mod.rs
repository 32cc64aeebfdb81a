//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use retype::document::{Document, NodeId, TextTree};
use retype::replace::document_offsets;
use retype::{Converter, Direction, EditSession};

/// Converter that replaces whole fragments from a fixed table, identity otherwise
pub fn table(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str, Direction) -> String {
    move |text: &str, _: Direction| {
        pairs
            .iter()
            .find(|(from, _)| *from == text)
            .map(|(_, to)| to.to_string())
            .unwrap_or_else(|| text.to_string())
    }
}

/// Length-preserving test layout: `a..z` <-> `가..`, one char per char
pub fn alphabet_swap(text: &str, direction: Direction) -> String {
    text.chars()
        .map(|ch| match direction {
            Direction::ToHangul if ch.is_ascii_lowercase() => {
                char::from_u32(0xAC00 + (ch as u32 - 'a' as u32)).unwrap()
            }
            Direction::ToLatin if ('\u{AC00}'..='\u{AC19}').contains(&ch) => {
                char::from_u32('a' as u32 + (ch as u32 - 0xAC00)).unwrap()
            }
            _ => ch,
        })
        .collect()
}

/// Create a session over a `<p>` with one text leaf per segment
pub fn test_session<C: Converter>(segments: &[&str], converter: C) -> (EditSession<C>, Vec<NodeId>) {
    let (document, leaves) = Document::from_segments(segments);
    (EditSession::with_converter(document, converter), leaves)
}

/// Flattened text of the whole document
pub fn doc_text<C: Converter>(session: &EditSession<C>) -> String {
    session.document().text_content(session.document().root())
}

/// Active selection as offsets into the flattened document text
pub fn selection_offsets<C: Converter>(session: &EditSession<C>) -> (usize, usize) {
    let range = session.selection().first().expect("selection should have a range");
    let offsets = document_offsets(session.document(), range).unwrap();
    (offsets.start, offsets.end)
}
