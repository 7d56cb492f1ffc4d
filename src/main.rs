//! # TinT
//!
//! Runs a Māori text filter over a JSON lines dataset.
//!
//! ```sh
//! tint 0.1.0
//! Māori text filters for LLM datasets.
//!
//! USAGE:
//!     tint [OPTIONS] --domain <domain> <SUBCOMMAND>
//!
//! SUBCOMMANDS:
//!     de-macronize    Removes macrons from text, e.g., Ā -> Aa and ā -> aa (double mode)
//!     detect-maori    Detects whether text is Māori or not, by calculating scores [...]
//!     help            Prints this message or the help of the given subcommand(s)
//!     is-maori        Determines whether text is Māori or not (weak or strict mode) [...]
//! ```
//!
//! Verbosity is set through `RUST_LOG`, `RUST_LOG=info` prints scores of every record.
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use structopt::StructOpt;
use tint::error::Error;
use tint::pipeline::{pipeline::Pipeline, JsonLines};

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = cli::Tint::from_args();
    debug!("cli args\n{:#?}", opt);

    let filter = opt.filter.build()?;
    let pipeline = JsonLines::new(filter, opt.domain, opt.chunk_size)?;

    let src: Box<dyn BufRead> = match opt.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let dst: Box<dyn Write> = match opt.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    pipeline.run(src, dst)?;
    Ok(())
}
