//! Word-based Māori detection filter.
use super::{Action, Policy, ScoreFilter, Thresholds};
use crate::error::ConfigError;
use crate::identifiers::{Orthography, WordClassifier, WordRatio};
use crate::record::{Locations, Variant};

/// Scores text with [WordRatio] and applies a min Māori threshold.
pub type IsMaori<C = Orthography> = ScoreFilter<WordRatio<C>>;

impl<C: WordClassifier> IsMaori<C> {
    pub const NAME: &'static str = "is-maori";
    pub const DESCRIPTION: &'static str = "Determines whether text is Māori or not (weak or strict mode), using the supplied threshold. The filter action then determines what to do with the record.";
    pub const ACCEPTS: &'static [Variant] =
        &[Variant::Pair, Variant::Pretrain, Variant::Classification];

    pub fn new(
        locations: Locations,
        min_maori: f64,
        strict: bool,
        action: Action,
        classifier: C,
    ) -> Result<Self, ConfigError> {
        let thresholds = Thresholds::with_min_target(min_maori)?;
        Ok(Self::build(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ACCEPTS,
            locations,
            None,
            Policy::new(thresholds, action),
            WordRatio::new(classifier, strict),
        ))
    }
}

impl Default for IsMaori {
    fn default() -> Self {
        Self::build(
            Self::NAME,
            Self::DESCRIPTION,
            Self::ACCEPTS,
            Locations::default(),
            None,
            Policy::default(),
            WordRatio::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::IsMaori;
    use crate::error::{ConfigError, Error};
    use crate::filtering::{Action, RecordFilter};
    use crate::identifiers::Orthography;
    use crate::record::{Location, Locations, Record, Variant};

    type KiaFilter = IsMaori<fn(&str, bool) -> bool>;

    fn is_kia(word: &str, _: bool) -> bool {
        word == "kia"
    }

    #[test]
    fn ratio_threshold() {
        let f = KiaFilter::new(Locations::default(), 0.5, false, Action::Keep, is_kia).unwrap();
        let r = Record::pretrain("kia ora");
        assert_eq!(f.process(r.clone()).unwrap(), Some(r));
        assert_eq!(f.process(Record::pretrain("kia ora koe")).unwrap(), None);

        let f =
            KiaFilter::new(Locations::default(), 0.5, false, Action::Discard, is_kia).unwrap();
        assert_eq!(f.process(Record::pretrain("kia ora")).unwrap(), None);
    }

    #[test]
    fn default_classifier() {
        let f = IsMaori::<Orthography>::new(
            Locations::default(),
            1.0,
            true,
            Action::Keep,
            Orthography,
        )
        .unwrap();
        assert!(f
            .process(Record::pretrain("Tēnā koutou katoa"))
            .unwrap()
            .is_some());
        assert!(f
            .process(Record::pretrain("Tēnā koutou, katoa"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn classification_text() {
        let f = KiaFilter::new(Locations::default(), 1.0, false, Action::Keep, is_kia).unwrap();
        let r = Record::classification("kia", "greeting");
        assert_eq!(f.process(r.clone()).unwrap(), Some(r));
    }

    #[test]
    fn pair_output_only() {
        let f = KiaFilter::new(
            Locations::from(Location::Output),
            1.0,
            false,
            Action::Keep,
            is_kia,
        )
        .unwrap();
        assert!(f.process(Record::pair("hello", "", "kia")).unwrap().is_some());
        assert!(f.process(Record::pair("kia", "", "hello")).unwrap().is_none());
    }

    #[test]
    fn translation_is_unhandled() {
        let f = IsMaori::default();
        let err = f
            .process(Record::translation([("mi", "kia ora")]))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::UnhandledVariant {
                filter: "is-maori",
                variant: Variant::Translation
            }
        ));
    }

    #[test]
    fn invalid_threshold() {
        let f = KiaFilter::new(Locations::default(), 2.0, false, Action::Keep, is_kia);
        assert!(matches!(f, Err(ConfigError::ThresholdOutOfRange { .. })));
    }
}
