//! Removes macrons from text.
//!
//! Each macroned vowel is replaced depending on the [MacronMode]:
//! ```text
//! strip:  Ā -> A,   ā -> a
//! double: Ā -> Aa,  ā -> aa
//! triple: Ā -> Aaa, ā -> aaa
//! ```
use std::fmt;
use std::str::FromStr;

use log::debug;

use super::Transform;
use crate::error::{ConfigError, Error};
use crate::filtering::RecordFilter;
use crate::record::{Languages, Locations, Record, Variant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MacronMode {
    Strip,
    #[default]
    Double,
    Triple,
}

impl MacronMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strip => "strip",
            Self::Double => "double",
            Self::Triple => "triple",
        }
    }

    /// number of vowels a macroned vowel is replaced with
    fn width(&self) -> usize {
        match self {
            Self::Strip => 1,
            Self::Double => 2,
            Self::Triple => 3,
        }
    }

    /// Bare vowel for a macroned one.
    fn bare(c: char) -> Option<char> {
        match c {
            'Ā' => Some('A'),
            'ā' => Some('a'),
            'Ē' => Some('E'),
            'ē' => Some('e'),
            'Ī' => Some('I'),
            'ī' => Some('i'),
            'Ō' => Some('O'),
            'ō' => Some('o'),
            'Ū' => Some('U'),
            'ū' => Some('u'),
            _ => None,
        }
    }

    /// Replaces every macroned vowel of `text`.
    ///
    /// Case is kept on the first vowel, repetitions are lower case.
    pub fn apply(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match Self::bare(c) {
                Some(vowel) => {
                    out.push(vowel);
                    for _ in 1..self.width() {
                        out.push(vowel.to_ascii_lowercase());
                    }
                }
                None => out.push(c),
            }
        }
        out
    }
}

impl fmt::Display for MacronMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MacronMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "strip" => Ok(Self::Strip),
            "double" => Ok(Self::Double),
            "triple" => Ok(Self::Triple),
            _ => Err(ConfigError::InvalidMode(s.to_string())),
        }
    }
}

/// De-macronization filter.
/// Never drops records.
#[derive(Debug, Clone, Default)]
pub struct Demacronize {
    locations: Locations,
    languages: Option<Languages>,
    mode: MacronMode,
}

impl Demacronize {
    pub const NAME: &'static str = "de-macronize";
    pub const DESCRIPTION: &'static str =
        "Removes macrons from text, e.g., Ā -> Aa and ā -> aa (double mode)";
    pub const ACCEPTS: &'static [Variant] = &[
        Variant::Pair,
        Variant::Pretrain,
        Variant::Translation,
        Variant::Classification,
    ];

    pub fn new(locations: Locations, languages: Option<Languages>, mode: MacronMode) -> Self {
        Self {
            locations,
            languages,
            mode,
        }
    }
}

impl Transform for Demacronize {
    fn transform_own(&self, record: Record) -> Record {
        let fields = self.locations.resolve(&record, self.languages.as_ref());
        debug!("{}: rewriting {:?}", Self::NAME, fields);
        record.map_fields(&fields, |text| self.mode.apply(text))
    }
}

impl RecordFilter for Demacronize {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn description(&self) -> &'static str {
        Self::DESCRIPTION
    }

    fn accepts(&self) -> &'static [Variant] {
        Self::ACCEPTS
    }

    fn process(&self, record: Record) -> Result<Option<Record>, Error> {
        self.check_variant(&record)?;
        Ok(Some(self.transform_own(record)))
    }
}
