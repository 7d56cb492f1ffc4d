//! Scorer trait.
use std::fmt;

/// Ratios computed on a single text.
///
/// Both are in `[0, 1]`. Scorers that only compute a target ratio leave `non_target` empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Scores {
    target: f64,
    non_target: Option<f64>,
}

impl Scores {
    pub fn new(target: f64, non_target: Option<f64>) -> Self {
        Self { target, non_target }
    }

    /// Get the ratio of Māori content.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Get the ratio of non-Māori content, if computed.
    pub fn non_target(&self) -> Option<f64> {
        self.non_target
    }
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.non_target {
            Some(non_target) => {
                write!(f, "non-Māori={:.6}, Māori={:.6}", non_target, self.target)
            }
            None => write!(f, "ratio={:.3}", self.target),
        }
    }
}

/// Pure text to score function.
pub trait Scorer {
    fn score(&self, text: &str) -> Scores;
}
