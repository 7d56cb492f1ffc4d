//! Filtering traits.
use crate::error::Error;
use crate::record::{Record, Variant};

/// Record-level filter, as seen by the host pipeline.
///
/// Filters hold no state once built, so that they can be shared between threads.
pub trait RecordFilter: Sync {
    /// name used as sub-command
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// record variants the filter can process.
    fn accepts(&self) -> &'static [Variant];

    /// record variants the filter can produce.
    fn generates(&self) -> &'static [Variant] {
        self.accepts()
    }

    /// Processes a record.
    /// Returns the (possibly transformed) record, or [None] if it has to be dropped.
    fn process(&self, record: Record) -> Result<Option<Record>, Error>;

    /// Errors if `record` is of a variant the filter does not accept.
    fn check_variant(&self, record: &Record) -> Result<(), Error> {
        let variant = record.variant();
        if self.accepts().contains(&variant) {
            Ok(())
        } else {
            Err(Error::UnhandledVariant {
                filter: self.name(),
                variant,
            })
        }
    }
}
