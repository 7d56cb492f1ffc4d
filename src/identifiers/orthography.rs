/*! Word-level Māori identification.

[WordClassifier] is the seam for per-word language identification.
Closures `Fn(&str, bool) -> bool` implement it, so an external identifier
can be plugged in.

[Orthography] is the default implementation, checking that a word could be written in Māori:
- every letter belongs to the Māori alphabet (`g` only in `ng`),
- every consonant (`ng` and `wh` counting as one) is followed by a vowel.

In weak mode, non-alphabetic characters are ignored. In strict mode, they disqualify the word.
!*/
use super::alphabet::{self, CONSONANTS};

pub trait WordClassifier {
    /// Whether `word` is Māori.
    fn is_target(&self, word: &str, strict: bool) -> bool;
}

impl<F> WordClassifier for F
where
    F: Fn(&str, bool) -> bool,
{
    fn is_target(&self, word: &str, strict: bool) -> bool {
        self(word, strict)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Orthography;

impl Orthography {
    /// Length of the consonant starting `letters`, if any.
    fn consonant_len(letters: &[char]) -> Option<usize> {
        match letters {
            ['n', 'g', ..] | ['w', 'h', ..] => Some(2),
            [c, ..] if CONSONANTS.contains(c) => Some(1),
            _ => None,
        }
    }

    fn is_maori(letters: &[char]) -> bool {
        let mut rest = letters;
        while let Some(c) = rest.first() {
            if alphabet::is_vowel(*c) {
                rest = &rest[1..];
                continue;
            }

            // consonants must be followed by a vowel
            match Self::consonant_len(rest) {
                Some(len) if rest.get(len).map_or(false, |v| alphabet::is_vowel(*v)) => {
                    rest = &rest[len + 1..];
                }
                _ => return false,
            }
        }
        true
    }
}

impl WordClassifier for Orthography {
    fn is_target(&self, word: &str, strict: bool) -> bool {
        let lowered = word.to_lowercase();
        if strict && lowered.chars().any(|c| !c.is_alphabetic()) {
            return false;
        }

        let letters: Vec<char> = lowered.chars().filter(|c| c.is_alphabetic()).collect();
        !letters.is_empty() && Self::is_maori(&letters)
    }
}

#[cfg(test)]
mod tests {
    use super::{Orthography, WordClassifier};

    #[test]
    fn maori_words() {
        for word in ["kia", "ora", "Whānau", "ngā", "te", "reo", "Aotearoa", "kiwi", "ā"] {
            assert!(Orthography.is_target(word, true), "{word}");
        }
    }

    #[test]
    fn non_maori_words() {
        for word in ["hello", "tank", "street", "g", "kng", "whh", "mt", ""] {
            assert!(!Orthography.is_target(word, false), "{word}");
        }
    }

    #[test]
    fn strictness() {
        assert!(Orthography.is_target("ora!", false));
        assert!(!Orthography.is_target("ora!", true));

        // nothing left once non-letters are ignored
        assert!(!Orthography.is_target("2023", false));
        assert!(!Orthography.is_target("2023", true));
    }
}
