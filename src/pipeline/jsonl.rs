//! JSON lines pipeline.
//!
//! Reads one record per line, runs a [RecordFilter] on each of them
//! and writes the forwarded ones, one per line.
//!
//! Records are processed in parallel by chunks, and written in input order.
use std::io::{BufRead, Write};

use log::{debug, info};
use rayon::prelude::*;

use super::pipeline::Pipeline;
use crate::error::Error;
use crate::filtering::RecordFilter;
use crate::record::{Record, Variant};

/// Record counts of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub read: usize,
    pub forwarded: usize,
}

impl Summary {
    pub fn dropped(&self) -> usize {
        self.read - self.forwarded
    }
}

pub struct JsonLines<F> {
    filter: F,
    domain: Variant,
    chunk_size: usize,
}

impl<F: RecordFilter> JsonLines<F> {
    /// Errors if `filter` does not accept `domain` records.
    pub fn new(filter: F, domain: Variant, chunk_size: usize) -> Result<Self, Error> {
        if !filter.accepts().contains(&domain) {
            return Err(Error::UnhandledVariant {
                filter: filter.name(),
                variant: domain,
            });
        }

        Ok(Self {
            filter,
            domain,
            chunk_size: chunk_size.max(1),
        })
    }

    fn process_line(&self, line: &str) -> Result<Option<Record>, Error> {
        let record = Record::from_json(self.domain, line)?;
        self.filter.process(record)
    }
}

impl<F: RecordFilter> Pipeline<Summary> for JsonLines<F> {
    fn run<R: BufRead, W: Write>(&self, src: R, mut dst: W) -> Result<Summary, Error> {
        let mut summary = Summary::default();
        let mut lines = src.lines();

        loop {
            let chunk: Vec<String> = lines
                .by_ref()
                .take(self.chunk_size)
                .collect::<Result<_, _>>()?;
            if chunk.is_empty() {
                break;
            }
            debug!("[{}] processing {} lines", self.filter.name(), chunk.len());

            let results: Vec<Option<Record>> = chunk
                .par_iter()
                .filter(|line| !line.trim().is_empty())
                .map(|line| self.process_line(line))
                .collect::<Result<_, Error>>()?;

            summary.read += results.len();
            for record in results.into_iter().flatten() {
                serde_json::to_writer(&mut dst, &record)?;
                dst.write_all(b"\n")?;
                summary.forwarded += 1;
            }
        }

        dst.flush()?;
        info!(
            "[{}] read={}, forwarded={}, dropped={}",
            self.filter.name(),
            summary.read,
            summary.forwarded,
            summary.dropped()
        );
        Ok(summary)
    }
}
