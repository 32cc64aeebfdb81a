//! Direction classification as seen by the engine

mod common;

use common::test_session;
use retype::{classify, Direction};

#[test]
fn test_trailing_run_decides() {
    assert_eq!(classify("dkssud"), Direction::ToHangul);
    assert_eq!(classify("안녕"), Direction::ToLatin);
    assert_eq!(classify("안녕 hello"), Direction::ToHangul);
    assert_eq!(classify("hello 안녕"), Direction::ToLatin);
}

#[test]
fn test_neutral_suffix_is_skipped() {
    assert_eq!(classify("hello!!!"), classify("hello"));
    assert_eq!(classify("안녕 :) 42"), Direction::ToLatin);
    assert_eq!(classify("x\t\n"), Direction::ToHangul);
}

#[test]
fn test_text_without_script_is_unchanged() {
    assert_eq!(classify("123"), Direction::Unchanged);
    assert_eq!(classify(""), Direction::Unchanged);
    // Accented and CJK letters belong to neither script
    assert_eq!(classify("é漢字"), Direction::Unchanged);
}

#[test]
fn test_compatibility_jamo_count_as_hangul() {
    assert_eq!(classify("ㅋㅋㅋ"), Direction::ToLatin);
    assert_eq!(classify("gksrmf ㅎ"), Direction::ToLatin);
}

#[test]
fn test_engine_passes_detected_direction_to_converter() {
    let seen = std::cell::RefCell::new(Vec::new());
    let spy = |text: &str, direction: Direction| {
        seen.borrow_mut().push(direction);
        text.to_string()
    };
    let (mut session, leaves) = test_session(&["한글 abc", "안녕"], &spy);

    session.select(leaves[0], 0, leaves[0], 6);
    session.replace_selection().unwrap();
    session.select(leaves[0], 0, leaves[1], 2);
    session.replace_selection().unwrap();

    assert_eq!(*seen.borrow(), vec![Direction::ToHangul, Direction::ToLatin]);
}
