//! Generic scoring filter.
//!
//! Resolves the configured locations of a record, scores each field
//! and forwards or drops the record according to a [Policy].
use itertools::Itertools;
use log::{debug, info, warn};

use super::{Policy, RecordFilter};
use crate::error::Error;
use crate::identifiers::{Scorer, Scores};
use crate::record::{Field, Languages, Locations, Record, Variant};

pub struct ScoreFilter<S> {
    name: &'static str,
    description: &'static str,
    accepts: &'static [Variant],
    locations: Locations,
    languages: Option<Languages>,
    policy: Policy,
    scorer: S,
}

impl<S: Scorer> ScoreFilter<S> {
    pub(super) fn build(
        name: &'static str,
        description: &'static str,
        accepts: &'static [Variant],
        locations: Locations,
        languages: Option<Languages>,
        policy: Policy,
        scorer: S,
    ) -> Self {
        if !accepts.iter().any(|v| locations.applies_to(*v)) {
            warn!(
                "{name}: locations {locations} do not exist on any accepted record type, \
                 every record will be forwarded"
            );
        }

        Self {
            name,
            description,
            accepts,
            locations,
            languages,
            policy,
            scorer,
        }
    }

    /// Scores every resolved field of `record`.
    ///
    /// Missing fields (such as unknown languages) are scored as empty text.
    pub fn score(&self, record: &Record) -> Vec<(Field, Scores)> {
        self.locations
            .resolve(record, self.languages.as_ref())
            .into_iter()
            .map(|field| {
                let scores = self.scorer.score(record.text(&field).unwrap_or_default());
                (field, scores)
            })
            .collect()
    }
}

impl<S: Scorer + Sync> RecordFilter for ScoreFilter<S> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn description(&self) -> &'static str {
        self.description
    }

    fn accepts(&self) -> &'static [Variant] {
        self.accepts
    }

    fn process(&self, record: Record) -> Result<Option<Record>, Error> {
        self.check_variant(&record)?;

        let scores = self.score(&record);
        if scores.is_empty() {
            debug!("{}: no field to inspect, forward=true", self.name);
            return Ok(Some(record));
        }

        let decision = self.policy.decide(scores.iter().map(|(_, s)| s));

        info!(
            "{}, within={}, forward={}",
            scores
                .iter()
                .zip(&decision.within)
                .map(|((field, s), within)| format!("{field}: {s}, within={within}"))
                .join("; "),
            decision.within_all,
            decision.forward
        );

        Ok(decision.forward.then_some(record))
    }
}
