//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait,
//! and [JsonLines], running a filter over a stream of JSON records.
mod jsonl;
pub mod pipeline;

pub use jsonl::{JsonLines, Summary};
