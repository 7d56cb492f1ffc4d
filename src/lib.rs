/*! # TinT filters

Record-level filters for Māori text in LLM datasets.

Records ([record::Record]) are pairs, pretrain content, translations or classification texts.
Filters select the fields to act on through [record::Location]s, then either
- rewrite them ([transformers::Demacronize]), or
- score them and forward or drop the record ([filtering::DetectMaori], [filtering::IsMaori]).

Every filter implements [filtering::RecordFilter].
!*/
pub mod error;
pub mod filtering;
pub mod identifiers;
pub mod pipeline;
pub mod record;
pub mod transformers;
