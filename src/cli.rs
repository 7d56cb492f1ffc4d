//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

use tint::error::Error;
use tint::filtering::{Action, DetectMaori, FilterKind, IsMaori, Thresholds};
use tint::identifiers::Orthography;
use tint::record::{Languages, Location, Locations, Variant};
use tint::transformers::{Demacronize, MacronMode};

#[derive(Debug, StructOpt)]
#[structopt(name = "tint", about = "Māori text filters for LLM datasets.")]
/// Runs a filter over JSON lines records.
/// ```sh
/// USAGE:
///     tint [OPTIONS] --domain <domain> <SUBCOMMAND>
///
/// OPTIONS:
///     -D, --domain <domain>            record type: pairs, pretrain, translation or classification
///     -i, --input <input>              JSON lines file to read. Default is stdin.
///     -o, --output <output>            JSON lines file to write. Default is stdout.
///     -c, --chunk-size <chunk-size>    number of records processed at once [default: 500]
///
/// SUBCOMMANDS:
///     de-macronize
///     detect-maori
///     is-maori
/// ```
pub struct Tint {
    #[structopt(
        short = "D",
        long = "domain",
        help = "record type: pairs, pretrain, translation or classification"
    )]
    pub domain: Variant,
    #[structopt(
        parse(from_os_str),
        short = "i",
        long = "input",
        help = "JSON lines file to read. Default is stdin."
    )]
    pub input: Option<PathBuf>,
    #[structopt(
        parse(from_os_str),
        short = "o",
        long = "output",
        help = "JSON lines file to write. Default is stdout."
    )]
    pub output: Option<PathBuf>,
    #[structopt(
        short = "c",
        long = "chunk-size",
        default_value = "500",
        help = "number of records processed at once"
    )]
    pub chunk_size: usize,
    #[structopt(subcommand)]
    pub filter: Filter,
}

#[derive(Debug, StructOpt)]
/// Holds every filter that is callable by the `tint` command.
pub enum Filter {
    #[structopt(
        name = "de-macronize",
        about = "Removes macrons from text, e.g., Ā -> Aa and ā -> aa (double mode)"
    )]
    Demacronize(DemacronizeOpts),
    #[structopt(
        name = "detect-maori",
        about = "Detects whether text is Māori or not, by calculating scores based on encountered characters after lower-casing the text and removing all white spaces/punctuation."
    )]
    DetectMaori(DetectMaoriOpts),
    #[structopt(
        name = "is-maori",
        about = "Determines whether text is Māori or not (weak or strict mode), using the supplied threshold. The filter action then determines what to do with the record."
    )]
    IsMaori(IsMaoriOpts),
}

#[derive(Debug, StructOpt)]
pub struct DemacronizeOpts {
    #[structopt(
        short = "L",
        long = "location",
        help = "where to look for the macrons; pairs: instruction,input,output, pretrain/translation: content, classification: text. Default is any."
    )]
    pub location: Vec<Location>,
    #[structopt(
        short = "g",
        long = "language",
        help = "the languages to inspect; inspects all if not specified"
    )]
    pub language: Vec<String>,
    #[structopt(
        short = "d",
        long = "mode",
        default_value = "double",
        help = "how to replace macroned vowels: strip, double or triple"
    )]
    pub mode: MacronMode,
}

#[derive(Debug, StructOpt)]
pub struct DetectMaoriOpts {
    #[structopt(short = "L", long = "location", help = "where to look for text. Default is any.")]
    pub location: Vec<Location>,
    #[structopt(
        short = "g",
        long = "language",
        help = "the languages to inspect (translation); inspects all if not specified"
    )]
    pub language: Vec<String>,
    #[structopt(
        short = "M",
        long = "max-non-maori",
        default_value = "1.0",
        help = "the maximum allowed ratio (0-1) of non-Māori characters in the text"
    )]
    pub max_non_maori: f64,
    #[structopt(
        short = "m",
        long = "min-maori",
        default_value = "0.0",
        help = "the minimum required ratio (0-1) of Māori characters (ie long vowels) in the text"
    )]
    pub min_maori: f64,
    #[structopt(
        short = "a",
        long = "action",
        default_value = "keep",
        help = "how to react when the thresholds are met: keep or discard"
    )]
    pub action: Action,
}

#[derive(Debug, StructOpt)]
pub struct IsMaoriOpts {
    #[structopt(short = "L", long = "location", help = "where to look for text. Default is any.")]
    pub location: Vec<Location>,
    #[structopt(
        short = "m",
        long = "min-maori",
        default_value = "0.0",
        help = "the minimum required ratio (0-1) of Māori words in the text"
    )]
    pub min_maori: f64,
    #[structopt(
        short = "s",
        long = "strict",
        help = "whether to use strict mode rather than weak one"
    )]
    pub strict: bool,
    #[structopt(
        short = "a",
        long = "action",
        default_value = "keep",
        help = "how to react when the thresholds are met: keep or discard"
    )]
    pub action: Action,
}

/// no location means any
fn locations(location: Vec<Location>) -> Locations {
    Locations::new(location).unwrap_or_default()
}

impl Filter {
    /// Builds the filter, checking thresholds.
    pub fn build(self) -> Result<FilterKind, Error> {
        let filter: FilterKind = match self {
            Self::Demacronize(o) => Demacronize::new(
                locations(o.location),
                Languages::new(o.language),
                o.mode,
            )
            .into(),
            Self::DetectMaori(o) => DetectMaori::new(
                locations(o.location),
                Languages::new(o.language),
                Thresholds::new(o.max_non_maori, o.min_maori)?,
                o.action,
            )
            .into(),
            Self::IsMaori(o) => IsMaori::new(
                locations(o.location),
                o.min_maori,
                o.strict,
                o.action,
                Orthography,
            )?
            .into(),
        };
        Ok(filter)
    }
}
