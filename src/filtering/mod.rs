/*! Record filters.

All filters implement [RecordFilter], the per-record operation used by the host pipeline.

Scoring filters ([DetectMaori], [IsMaori]) are [ScoreFilter]s:
the configured locations are resolved against each record, every field is scored,
and a [Policy] decides whether the record is forwarded or dropped.
The de-macronization filter lives in [crate::transformers] and never drops records.

[FilterKind] regroups every filter, for dispatch from the command line.
! */
mod detect_maori;
mod filter;
mod is_maori;
mod policy;
mod score_filter;

pub use detect_maori::DetectMaori;
pub use filter::RecordFilter;
pub use is_maori::IsMaori;
pub use policy::{Action, Decision, Policy, Thresholds};
pub use score_filter::ScoreFilter;

use crate::error::Error;
use crate::record::{Record, Variant};
use crate::transformers::Demacronize;

pub enum FilterKind {
    Demacronize(Demacronize),
    DetectMaori(DetectMaori),
    IsMaori(IsMaori),
}

impl FilterKind {
    fn inner(&self) -> &dyn RecordFilter {
        match self {
            Self::Demacronize(f) => f,
            Self::DetectMaori(f) => f,
            Self::IsMaori(f) => f,
        }
    }
}

impl RecordFilter for FilterKind {
    fn name(&self) -> &'static str {
        self.inner().name()
    }

    fn description(&self) -> &'static str {
        self.inner().description()
    }

    fn accepts(&self) -> &'static [Variant] {
        self.inner().accepts()
    }

    fn generates(&self) -> &'static [Variant] {
        self.inner().generates()
    }

    fn process(&self, record: Record) -> Result<Option<Record>, Error> {
        self.inner().process(record)
    }
}

impl From<Demacronize> for FilterKind {
    fn from(f: Demacronize) -> Self {
        Self::Demacronize(f)
    }
}

impl From<DetectMaori> for FilterKind {
    fn from(f: DetectMaori) -> Self {
        Self::DetectMaori(f)
    }
}

impl From<IsMaori> for FilterKind {
    fn from(f: IsMaori) -> Self {
        Self::IsMaori(f)
    }
}

#[cfg(test)]
mod tests {
    use super::{DetectMaori, FilterKind, IsMaori, RecordFilter};
    use crate::record::Record;
    use crate::transformers::Demacronize;

    #[test]
    fn dispatch() {
        let filters: Vec<FilterKind> = vec![
            Demacronize::default().into(),
            DetectMaori::default().into(),
            IsMaori::default().into(),
        ];
        let names: Vec<&str> = filters.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["de-macronize", "detect-maori", "is-maori"]);

        let r = Record::pretrain("Kia ora");
        for f in &filters {
            assert_eq!(f.generates(), f.accepts());
            assert_eq!(f.process(r.clone()).unwrap(), Some(r.clone()));
        }
    }
}
