//! Character-based Māori detection filter.
use super::{Action, Policy, ScoreFilter, Thresholds};
use crate::identifiers::CharRatio;
use crate::record::{Languages, Locations, Variant};

/// Scores text with [CharRatio] and applies max non-Māori/min Māori thresholds.
pub type DetectMaori = ScoreFilter<CharRatio>;

impl DetectMaori {
    pub const NAME: &'static str = "detect-maori";
    pub const DESCRIPTION: &'static str = "Detects whether text is Māori or not, by calculating scores based on encountered characters after lower-casing the text and removing all white spaces/punctuation.";
    pub const ACCEPTS: &'static [Variant] = &[
        Variant::Pair,
        Variant::Pretrain,
        Variant::Translation,
        Variant::Classification,
    ];

    pub fn new(
        locations: Locations,
        languages: Option<Languages>,
        thresholds: Thresholds,
        action: Action,
    ) -> Self {
        Self::build(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ACCEPTS,
            locations,
            languages,
            Policy::new(thresholds, action),
            CharRatio,
        )
    }
}

impl Default for DetectMaori {
    fn default() -> Self {
        Self::new(
            Locations::default(),
            None,
            Thresholds::default(),
            Action::default(),
        )
    }
}
