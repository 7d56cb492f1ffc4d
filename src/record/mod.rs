/*! Record types.

A record is one of four fixed shapes (see [Variant]).
Filters address the text of a record through [Location]s,
which resolve to concrete [Field]s for a given record.
* !*/
mod data;
mod location;

pub use data::{ClassificationData, PairData, PretrainData, Record, TranslationData, Variant};
pub use location::{Field, Languages, Location, Locations};
