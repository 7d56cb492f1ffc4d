/*! Māori text identification.

Holds the [Scorer] plug point used by scoring filters, and its implementations:
- [CharRatio] scores text on the characters it is made of,
- [WordRatio] scores text on the ratio of words a [WordClassifier] accepts.

The default word classifier is [Orthography]. !*/
mod alphabet;
mod char_ratio;
mod orthography;
mod scorer;
mod word_ratio;

pub use char_ratio::CharRatio;
pub use orthography::{Orthography, WordClassifier};
pub use scorer::{Scorer, Scores};
pub use word_ratio::WordRatio;
