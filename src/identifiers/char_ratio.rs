/*! Character-ratio identification

Text is lower-cased and stripped of whitespace and punctuation, then:
- the non-Māori ratio is the share of characters that are not part of the Māori alphabet,
- the Māori ratio is the share of long vowels.

Both ratios are 0 for text that is empty once normalized.
 * !*/
use super::alphabet::{self, DIGRAPHS, IGNORED, LETTERS};
use super::{Scorer, Scores};

#[derive(Debug, Clone, Copy, Default)]
pub struct CharRatio;

impl CharRatio {
    /// lower-cases `text` and removes whitespace and punctuation.
    pub fn normalize(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .filter(|c| !IGNORED.contains(c))
            .collect()
    }

    /// Ratio of characters outside of the alphabet.
    ///
    /// `ng` and `wh` are removed as a whole before single letters.
    pub fn non_target_ratio(normalized: &str) -> f64 {
        let full_len = normalized.chars().count();
        if full_len == 0 {
            return 0.0;
        }

        let without_digraphs = DIGRAPHS
            .iter()
            .fold(normalized.to_string(), |s, digraph| s.replace(digraph, ""));
        let remaining = without_digraphs
            .chars()
            .filter(|c| !LETTERS.contains(c))
            .count();

        remaining as f64 / full_len as f64
    }

    /// Ratio of long vowels.
    pub fn target_ratio(normalized: &str) -> f64 {
        let full_len = normalized.chars().count();
        if full_len == 0 {
            return 0.0;
        }

        let remaining = normalized
            .chars()
            .filter(|c| !alphabet::is_long_vowel(*c))
            .count();

        1.0 - remaining as f64 / full_len as f64
    }
}

impl Scorer for CharRatio {
    fn score(&self, text: &str) -> Scores {
        let normalized = Self::normalize(text);
        Scores::new(
            Self::target_ratio(&normalized),
            Some(Self::non_target_ratio(&normalized)),
        )
    }
}
