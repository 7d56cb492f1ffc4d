/*! Word-ratio identification

Text is split on whitespace and hyphens, and each word goes through a [WordClassifier].
The score is the ratio of accepted words.
 * !*/
use super::{Orthography, Scorer, Scores, WordClassifier};

fn is_splitter(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

pub struct WordRatio<C = Orthography> {
    classifier: C,
    strict: bool,
}

impl<C: WordClassifier> WordRatio<C> {
    pub fn new(classifier: C, strict: bool) -> Self {
        Self { classifier, strict }
    }

    /// Splits text into words.
    ///
    /// If no splitter is found, the trimmed text (possibly empty) is the only word.
    pub fn tokens(text: &str) -> Vec<&str> {
        let text = text.trim();
        if text.contains(is_splitter) {
            text.split(is_splitter).filter(|t| !t.is_empty()).collect()
        } else {
            vec![text]
        }
    }
}

impl Default for WordRatio<Orthography> {
    fn default() -> Self {
        Self::new(Orthography, false)
    }
}

impl<C: WordClassifier> Scorer for WordRatio<C> {
    fn score(&self, text: &str) -> Scores {
        let tokens = Self::tokens(text);
        let ratio = if tokens.is_empty() {
            0.0
        } else {
            let accepted = tokens
                .iter()
                .filter(|t| self.classifier.is_target(t, self.strict))
                .count();
            accepted as f64 / tokens.len() as f64
        };

        Scores::new(ratio, None)
    }
}
