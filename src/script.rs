//! Script membership for the two keyboard layouts
//!
//! A character belongs to the Latin alphabet (what the alphabetic keyboard
//! produces), to Hangul (what the Korean 2-set keyboard produces), or to
//! neither (digits, punctuation, whitespace, everything else).

/// The two scripts a fragment can be converted between
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Script {
    /// ASCII letters produced by the alphabetic layout
    Latin,
    /// Hangul jamo and syllables produced by the Korean layout
    Hangul,
}

/// Hangul Compatibility Jamo (ㄱ..ㆎ)
const COMPAT_JAMO: std::ops::RangeInclusive<char> = '\u{3131}'..='\u{318E}';
/// Conjoining Hangul Jamo
const JAMO: std::ops::RangeInclusive<char> = '\u{1100}'..='\u{11FF}';
/// Precomposed Hangul Syllables (가..힣)
const SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// Check if a character is a Latin letter (`A-Z`, `a-z`)
pub fn is_latin(ch: char) -> bool {
    ch.is_ascii_alphabetic()
}

/// Check if a character is Hangul (jamo or precomposed syllable)
pub fn is_hangul(ch: char) -> bool {
    COMPAT_JAMO.contains(&ch) || SYLLABLES.contains(&ch) || JAMO.contains(&ch)
}

/// Check if a character is a precomposed Hangul syllable
pub fn is_hangul_syllable(ch: char) -> bool {
    SYLLABLES.contains(&ch)
}

/// Get the script a character belongs to, if any
pub fn script_of(ch: char) -> Option<Script> {
    if is_latin(ch) {
        Some(Script::Latin)
    } else if is_hangul(ch) {
        Some(Script::Hangul)
    } else {
        None
    }
}
