//! Dubeolsik (standard Korean 2-set) keyboard conversion
//!
//! `ToHangul` replays Latin keystrokes through the layout and composes the
//! resulting jamo into syllables. `ToLatin` does the reverse: every syllable
//! is split back into the keys that type it.

use super::jamo;
use super::Converter;
use crate::classify::Direction;

/// The standard Korean 2-set layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dubeolsik;

impl Dubeolsik {
    pub fn new() -> Self {
        Self
    }

    /// Convert Latin keystrokes into Hangul
    pub fn to_hangul(&self, text: &str) -> String {
        let mut composer = Composer::default();
        for ch in text.chars() {
            match key_to_jamo(ch) {
                Some(jamo) if jamo::is_vowel(jamo) => composer.push_vowel(jamo),
                Some(jamo) => composer.push_consonant(jamo),
                None => composer.push_other(ch),
            }
        }
        composer.finish()
    }

    /// Convert Hangul back into the Latin keystrokes that type it
    pub fn to_latin(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for ch in text.chars() {
            if let Some((initial, vowel, final_)) = jamo::decompose(ch) {
                push_keys(&mut out, initial);
                push_keys(&mut out, vowel);
                if let Some(final_) = final_ {
                    push_keys(&mut out, final_);
                }
                continue;
            }
            let jamo = jamo::to_compatibility(ch).unwrap_or(ch);
            match jamo_to_keys(jamo) {
                Some(keys) => out.push_str(keys),
                None => out.push(ch),
            }
        }
        out
    }
}

impl Converter for Dubeolsik {
    fn convert(&self, text: &str, direction: Direction) -> String {
        match direction {
            Direction::ToHangul => self.to_hangul(text),
            Direction::ToLatin => self.to_latin(text),
            Direction::Unchanged => text.to_string(),
        }
    }
}

fn push_keys(out: &mut String, jamo: char) {
    match jamo_to_keys(jamo) {
        Some(keys) => out.push_str(keys),
        None => out.push(jamo),
    }
}

/// Jamo produced by a Latin key. Shift only matters for the tense consonants
/// and `ㅒ`/`ㅖ`; any other uppercase key types the same jamo as lowercase.
fn key_to_jamo(key: char) -> Option<char> {
    let jamo = match key {
        'Q' => 'ㅃ',
        'W' => 'ㅉ',
        'E' => 'ㄸ',
        'R' => 'ㄲ',
        'T' => 'ㅆ',
        'O' => 'ㅒ',
        'P' => 'ㅖ',
        _ => match key.to_ascii_lowercase() {
            'q' => 'ㅂ',
            'w' => 'ㅈ',
            'e' => 'ㄷ',
            'r' => 'ㄱ',
            't' => 'ㅅ',
            'y' => 'ㅛ',
            'u' => 'ㅕ',
            'i' => 'ㅑ',
            'o' => 'ㅐ',
            'p' => 'ㅔ',
            'a' => 'ㅁ',
            's' => 'ㄴ',
            'd' => 'ㅇ',
            'f' => 'ㄹ',
            'g' => 'ㅎ',
            'h' => 'ㅗ',
            'j' => 'ㅓ',
            'k' => 'ㅏ',
            'l' => 'ㅣ',
            'z' => 'ㅋ',
            'x' => 'ㅌ',
            'c' => 'ㅊ',
            'v' => 'ㅍ',
            'b' => 'ㅠ',
            'n' => 'ㅜ',
            'm' => 'ㅡ',
            _ => return None,
        },
    };
    Some(jamo)
}

/// Keys that type a compatibility jamo, compound jamo included
fn jamo_to_keys(jamo: char) -> Option<&'static str> {
    let keys = match jamo {
        'ㄱ' => "r",
        'ㄲ' => "R",
        'ㄳ' => "rt",
        'ㄴ' => "s",
        'ㄵ' => "sw",
        'ㄶ' => "sg",
        'ㄷ' => "e",
        'ㄸ' => "E",
        'ㄹ' => "f",
        'ㄺ' => "fr",
        'ㄻ' => "fa",
        'ㄼ' => "fq",
        'ㄽ' => "ft",
        'ㄾ' => "fx",
        'ㄿ' => "fv",
        'ㅀ' => "fg",
        'ㅁ' => "a",
        'ㅂ' => "q",
        'ㅃ' => "Q",
        'ㅄ' => "qt",
        'ㅅ' => "t",
        'ㅆ' => "T",
        'ㅇ' => "d",
        'ㅈ' => "w",
        'ㅉ' => "W",
        'ㅊ' => "c",
        'ㅋ' => "z",
        'ㅌ' => "x",
        'ㅍ' => "v",
        'ㅎ' => "g",
        'ㅏ' => "k",
        'ㅐ' => "o",
        'ㅑ' => "i",
        'ㅒ' => "O",
        'ㅓ' => "j",
        'ㅔ' => "p",
        'ㅕ' => "u",
        'ㅖ' => "P",
        'ㅗ' => "h",
        'ㅘ' => "hk",
        'ㅙ' => "ho",
        'ㅚ' => "hl",
        'ㅛ' => "y",
        'ㅜ' => "n",
        'ㅝ' => "nj",
        'ㅞ' => "np",
        'ㅟ' => "nl",
        'ㅠ' => "b",
        'ㅡ' => "m",
        'ㅢ' => "ml",
        'ㅣ' => "l",
        _ => return None,
    };
    Some(keys)
}

/// Syllable composition state machine.
///
/// Holds the syllable under construction; a final consonant is only ever set
/// once both an initial and a vowel are present. Without a vowel, `initial`
/// may hold a compound consonant (ㄳ) typed as two keys.
#[derive(Debug, Default)]
struct Composer {
    initial: Option<char>,
    vowel: Option<char>,
    final_: Option<char>,
    out: String,
}

impl Composer {
    fn push_consonant(&mut self, consonant: char) {
        match (self.initial, self.vowel, self.final_) {
            // Syllable with initial and vowel: try to close it
            (Some(_), Some(_), None) if jamo::is_final(consonant) => {
                self.final_ = Some(consonant);
            }
            (Some(_), Some(_), Some(final_)) => {
                match jamo::combine_finals(final_, consonant) {
                    Some(compound) => self.final_ = Some(compound),
                    None => self.start_with(consonant),
                }
            }
            // Lone consonants typed back to back pair up like a final would
            (Some(initial), None, None) => match jamo::combine_finals(initial, consonant) {
                Some(compound) => self.initial = Some(compound),
                None => self.start_with(consonant),
            },
            _ => self.start_with(consonant),
        }
    }

    fn push_vowel(&mut self, vowel: char) {
        // A lone compound (ㄳ) cannot start a syllable: its second half does
        let lone_compound = self
            .initial
            .filter(|&c| self.vowel.is_none() && !jamo::is_initial(c));
        if let Some(compound) = lone_compound {
            if let Some((kept, moved)) = jamo::split_final(compound) {
                self.out.push(kept);
                self.initial = Some(moved);
                self.vowel = Some(vowel);
                return;
            }
        }

        if let Some(final_) = self.final_.take() {
            // The final consonant (or the second half of a compound final)
            // becomes the initial of the next syllable.
            let (kept, moved) = match jamo::split_final(final_) {
                Some((kept, moved)) => (Some(kept), moved),
                None => (None, final_),
            };
            self.final_ = kept;
            self.flush();
            self.initial = Some(moved);
            self.vowel = Some(vowel);
            return;
        }

        match self.vowel {
            Some(current) => match jamo::combine_vowels(current, vowel) {
                Some(compound) => self.vowel = Some(compound),
                None => {
                    self.flush();
                    self.vowel = Some(vowel);
                }
            },
            None => self.vowel = Some(vowel),
        }
    }

    fn push_other(&mut self, ch: char) {
        self.flush();
        self.out.push(ch);
    }

    fn start_with(&mut self, consonant: char) {
        self.flush();
        self.initial = Some(consonant);
    }

    fn flush(&mut self) {
        let initial = self.initial.take();
        let vowel = self.vowel.take();
        let final_ = self.final_.take();
        match (initial, vowel) {
            (Some(initial), Some(vowel)) => match jamo::compose(initial, vowel, final_) {
                Some(syllable) => self.out.push(syllable),
                None => {
                    self.out.push(initial);
                    self.out.push(vowel);
                    self.out.extend(final_);
                }
            },
            (Some(initial), None) => self.out.push(initial),
            (None, Some(vowel)) => self.out.push(vowel),
            (None, None) => {}
        }
    }

    fn finish(mut self) -> String {
        self.flush();
        self.out
    }
}
