//! Replacement inside a single text leaf

mod common;

use common::{doc_text, selection_offsets, table, test_session};
use retype::document::{Document, TextRange, TextTree};
use retype::{Direction, Dubeolsik, EditSession, ReplaceOutcome};

// ========================================================================
// Offsets and selection
// ========================================================================

#[test]
fn test_replace_word_at_end() {
    let (mut session, leaves) = test_session(&["hello WORLD"], table(&[("WORLD", "xyz")]));
    session.select(leaves[0], 6, leaves[0], 11);

    let outcome = session.replace_selection().unwrap();

    assert_eq!(doc_text(&session), "hello xyz");
    assert_eq!(
        session.selection().first(),
        Some(&TextRange::within(leaves[0], 6, 9))
    );
    let replacement = outcome.replacement().unwrap();
    assert_eq!(replacement.original, "WORLD");
    assert_eq!(replacement.converted, "xyz");
}

#[test]
fn test_replace_keeps_leaf_identity() {
    let (mut session, leaves) = test_session(&["abc def"], table(&[("abc", "X")]));
    session.select(leaves[0], 0, leaves[0], 3);
    session.replace_selection().unwrap();

    assert_eq!(session.document().text_leaves(session.document().root()), leaves);
    assert_eq!(doc_text(&session), "X def");
    assert_eq!(selection_offsets(&session), (0, 1));
}

#[test]
fn test_replacement_longer_than_original() {
    let (mut session, leaves) = test_session(&["a b c"], table(&[("b", "bbbb")]));
    session.select(leaves[0], 2, leaves[0], 3);
    session.replace_selection().unwrap();

    assert_eq!(doc_text(&session), "a bbbb c");
    assert_eq!(selection_offsets(&session), (2, 6));
}

#[test]
fn test_second_occurrence_replaced_by_offset() {
    let (mut session, leaves) = test_session(&["foo foo"], table(&[("foo", "bar")]));
    session.select(leaves[0], 4, leaves[0], 7);
    session.replace_selection().unwrap();

    assert_eq!(doc_text(&session), "foo bar");
    assert_eq!(selection_offsets(&session), (4, 7));
}

#[test]
fn test_backwards_selection_is_normalized() {
    let (mut session, leaves) = test_session(&["hello WORLD"], table(&[("WORLD", "xyz")]));
    session.select(leaves[0], 11, leaves[0], 6);
    session.replace_selection().unwrap();

    assert_eq!(doc_text(&session), "hello xyz");
    assert_eq!(
        session.selection().first(),
        Some(&TextRange::within(leaves[0], 6, 9))
    );
}

// ========================================================================
// Real layout conversion
// ========================================================================

#[test]
fn test_latin_word_becomes_hangul() {
    let (doc, leaves) = Document::from_segments(&["hello dkssud"]);
    let mut session = EditSession::new(doc);
    session.select(leaves[0], 6, leaves[0], 12);

    let outcome = session.replace_selection().unwrap();

    assert_eq!(session.text(), "hello 안녕");
    assert_eq!(selection_offsets(&session), (6, 8));
    assert_eq!(outcome.replacement().unwrap().direction, Direction::ToHangul);
}

#[test]
fn test_hangul_word_becomes_latin() {
    let (doc, leaves) = Document::from_segments(&["say ㅗ디ㅣㅐ 한글"]);
    let mut session = EditSession::new(doc);
    session.select(leaves[0], 9, leaves[0], 11);
    session.replace_selection().unwrap();

    assert_eq!(session.text(), "say ㅗ디ㅣㅐ gksrmf");
    assert_eq!(selection_offsets(&session), (9, 15));
}

#[test]
fn test_offsets_count_characters_not_bytes() {
    // Multi-byte text before the selection must not shift the splice point
    let (doc, leaves) = Document::from_segments(&["안녕 gksrmf!"]);
    let mut session = EditSession::new(doc);
    session.select(leaves[0], 3, leaves[0], 9);
    session.replace_selection().unwrap();

    assert_eq!(session.text(), "안녕 한글!");
    assert_eq!(selection_offsets(&session), (3, 5));
}

#[test]
fn test_trailing_punctuation_converted_with_word() {
    let (doc, leaves) = Document::from_segments(&["dkssud?"]);
    let mut session = EditSession::new(doc);
    session.select(leaves[0], 0, leaves[0], 7);
    session.replace_selection().unwrap();

    assert_eq!(session.text(), "안녕?");
    assert_eq!(selection_offsets(&session), (0, 3));
}

// ========================================================================
// No-op conversions
// ========================================================================

#[test]
fn test_no_script_text_left_unchanged_but_reselected() {
    let (doc, leaves) = Document::from_segments(&["call 555-1234 now"]);
    let mut session = EditSession::new(doc);
    session.select(leaves[0], 5, leaves[0], 13);

    let outcome = session.replace_selection().unwrap();

    assert_eq!(session.text(), "call 555-1234 now");
    assert_eq!(selection_offsets(&session), (5, 13));
    match outcome {
        ReplaceOutcome::Replaced(replacement) => {
            assert_eq!(replacement.direction, Direction::Unchanged);
            assert_eq!(replacement.original, replacement.converted);
        }
        other => panic!("Expected replacement, got {:?}", other),
    }
}

#[test]
fn test_converter_returning_empty_string() {
    let (mut session, leaves) = test_session(&["abc"], table(&[("b", "")]));
    session.select(leaves[0], 1, leaves[0], 2);
    session.replace_selection().unwrap();

    assert_eq!(doc_text(&session), "ac");
    assert_eq!(
        session.selection().first(),
        Some(&TextRange::within(leaves[0], 1, 1))
    );
}

#[test]
fn test_dubeolsik_session_defaults() {
    let (doc, leaves) = Document::from_segments(&["gksrmf"]);
    let mut session = EditSession::with_converter(doc, Dubeolsik::new());
    session.select(leaves[0], 0, leaves[0], 6);
    assert_eq!(session.selected_text(), "gksrmf");
    session.replace_selection().unwrap();
    assert_eq!(session.selected_text(), "한글");
}
