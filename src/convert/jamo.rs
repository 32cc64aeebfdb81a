//! Hangul jamo tables and syllable arithmetic.
//!
//! All jamo are handled as Hangul Compatibility Jamo (`ㄱ`, `ㅏ`, ...), which is
//! what a keyboard produces for a lone consonant or vowel. Conjoining jamo
//! (U+1100 block) are folded into compatibility jamo before lookup.

/// First precomposed syllable (가)
const SYLLABLE_BASE: u32 = 0xAC00;
const JUNGSEONG_COUNT: u32 = 21;
const JONGSEONG_COUNT: u32 = 28;

/// Initial consonants in syllable order
pub const CHOSEONG: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ', 'ㅋ',
    'ㅌ', 'ㅍ', 'ㅎ',
];

/// Medial vowels in syllable order
pub const JUNGSEONG: [char; 21] = [
    'ㅏ', 'ㅐ', 'ㅑ', 'ㅒ', 'ㅓ', 'ㅔ', 'ㅕ', 'ㅖ', 'ㅗ', 'ㅘ', 'ㅙ', 'ㅚ', 'ㅛ', 'ㅜ', 'ㅝ', 'ㅞ',
    'ㅟ', 'ㅠ', 'ㅡ', 'ㅢ', 'ㅣ',
];

/// Final consonants in syllable order. Index 0 of the syllable formula means
/// "no final", so `JONGSEONG[i]` has syllable index `i + 1`.
pub const JONGSEONG: [char; 27] = [
    'ㄱ', 'ㄲ', 'ㄳ', 'ㄴ', 'ㄵ', 'ㄶ', 'ㄷ', 'ㄹ', 'ㄺ', 'ㄻ', 'ㄼ', 'ㄽ', 'ㄾ', 'ㄿ', 'ㅀ', 'ㅁ',
    'ㅂ', 'ㅄ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅊ', 'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

fn index_of(table: &[char], ch: char) -> Option<usize> {
    table.iter().position(|&c| c == ch)
}

/// Check if a compatibility jamo can start a syllable
pub fn is_initial(ch: char) -> bool {
    index_of(&CHOSEONG, ch).is_some()
}

/// Check if a compatibility jamo is a vowel (simple or compound)
pub fn is_vowel(ch: char) -> bool {
    index_of(&JUNGSEONG, ch).is_some()
}

/// Check if a compatibility jamo can close a syllable
pub fn is_final(ch: char) -> bool {
    index_of(&JONGSEONG, ch).is_some()
}

/// Compose a syllable from compatibility jamo.
///
/// Returns None if any part is not valid in its position.
pub fn compose(initial: char, vowel: char, final_: Option<char>) -> Option<char> {
    let cho = index_of(&CHOSEONG, initial)? as u32;
    let jung = index_of(&JUNGSEONG, vowel)? as u32;
    let jong = match final_ {
        Some(ch) => index_of(&JONGSEONG, ch)? as u32 + 1,
        None => 0,
    };
    char::from_u32(SYLLABLE_BASE + (cho * JUNGSEONG_COUNT + jung) * JONGSEONG_COUNT + jong)
}

/// Split a precomposed syllable into (initial, vowel, final)
pub fn decompose(syllable: char) -> Option<(char, char, Option<char>)> {
    if !crate::script::is_hangul_syllable(syllable) {
        return None;
    }
    let index = syllable as u32 - SYLLABLE_BASE;
    let cho = (index / (JUNGSEONG_COUNT * JONGSEONG_COUNT)) as usize;
    let jung = ((index % (JUNGSEONG_COUNT * JONGSEONG_COUNT)) / JONGSEONG_COUNT) as usize;
    let jong = (index % JONGSEONG_COUNT) as usize;
    let final_ = if jong == 0 {
        None
    } else {
        Some(JONGSEONG[jong - 1])
    };
    Some((CHOSEONG[cho], JUNGSEONG[jung], final_))
}

/// Fold a conjoining jamo (U+1100 block) into its compatibility form
pub fn to_compatibility(ch: char) -> Option<char> {
    let code = ch as u32;
    match code {
        0x1100..=0x1112 => Some(CHOSEONG[(code - 0x1100) as usize]),
        0x1161..=0x1175 => Some(JUNGSEONG[(code - 0x1161) as usize]),
        0x11A8..=0x11C2 => Some(JONGSEONG[(code - 0x11A8) as usize]),
        _ => None,
    }
}

/// Combine two vowels typed in sequence (ㅗ + ㅏ = ㅘ)
pub fn combine_vowels(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㅗ', 'ㅏ') => Some('ㅘ'),
        ('ㅗ', 'ㅐ') => Some('ㅙ'),
        ('ㅗ', 'ㅣ') => Some('ㅚ'),
        ('ㅜ', 'ㅓ') => Some('ㅝ'),
        ('ㅜ', 'ㅔ') => Some('ㅞ'),
        ('ㅜ', 'ㅣ') => Some('ㅟ'),
        ('ㅡ', 'ㅣ') => Some('ㅢ'),
        _ => None,
    }
}

/// Combine two final consonants typed in sequence (ㄹ + ㄱ = ㄺ)
pub fn combine_finals(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('ㄱ', 'ㅅ') => Some('ㄳ'),
        ('ㄴ', 'ㅈ') => Some('ㄵ'),
        ('ㄴ', 'ㅎ') => Some('ㄶ'),
        ('ㄹ', 'ㄱ') => Some('ㄺ'),
        ('ㄹ', 'ㅁ') => Some('ㄻ'),
        ('ㄹ', 'ㅂ') => Some('ㄼ'),
        ('ㄹ', 'ㅅ') => Some('ㄽ'),
        ('ㄹ', 'ㅌ') => Some('ㄾ'),
        ('ㄹ', 'ㅍ') => Some('ㄿ'),
        ('ㄹ', 'ㅎ') => Some('ㅀ'),
        ('ㅂ', 'ㅅ') => Some('ㅄ'),
        _ => None,
    }
}

/// Split a compound final back into the consonants it was typed from
pub fn split_final(compound: char) -> Option<(char, char)> {
    match compound {
        'ㄳ' => Some(('ㄱ', 'ㅅ')),
        'ㄵ' => Some(('ㄴ', 'ㅈ')),
        'ㄶ' => Some(('ㄴ', 'ㅎ')),
        'ㄺ' => Some(('ㄹ', 'ㄱ')),
        'ㄻ' => Some(('ㄹ', 'ㅁ')),
        'ㄼ' => Some(('ㄹ', 'ㅂ')),
        'ㄽ' => Some(('ㄹ', 'ㅅ')),
        'ㄾ' => Some(('ㄹ', 'ㅌ')),
        'ㄿ' => Some(('ㄹ', 'ㅍ')),
        'ㅀ' => Some(('ㄹ', 'ㅎ')),
        'ㅄ' => Some(('ㅂ', 'ㅅ')),
        _ => None,
    }
}
