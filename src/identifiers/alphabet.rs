//! Māori alphabet.
//!
//! See <https://en.wikipedia.org/wiki/M%C4%81ori_language#Orthography>
use std::collections::HashSet;

use lazy_static::lazy_static;

pub const CONSONANTS: [char; 8] = ['h', 'k', 'm', 'n', 'p', 'r', 't', 'w'];
pub const DIGRAPHS: [&str; 2] = ["ng", "wh"];
pub const SHORT_VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
pub const LONG_VOWELS: [char; 5] = ['ā', 'ē', 'ī', 'ō', 'ū'];

/// ASCII punctuation.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;
pub const WHITESPACE: &str = " \t\n\r\x0b\x0c";

lazy_static! {
    /// Single characters of the alphabet, lower case.
    pub static ref LETTERS: HashSet<char> = CONSONANTS
        .iter()
        .chain(SHORT_VOWELS.iter())
        .chain(LONG_VOWELS.iter())
        .copied()
        .collect();

    /// Characters removed before scoring.
    pub static ref IGNORED: HashSet<char> = PUNCTUATION.chars().chain(WHITESPACE.chars()).collect();
}

pub fn is_vowel(c: char) -> bool {
    SHORT_VOWELS.contains(&c) || LONG_VOWELS.contains(&c)
}

pub fn is_long_vowel(c: char) -> bool {
    LONG_VOWELS.contains(&c)
}
