//! Location resolution.
//!
//! A [Location] names a text field across record variants.
//! Filters are configured with a set of [Locations] (and optionally [Languages]),
//! that is resolved against each record into the concrete [Field]s to act on.
use std::fmt;
use std::str::FromStr;

use itertools::Itertools;

use super::{Record, Variant};
use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    Instruction,
    Input,
    Output,
    Content,
    Text,
    /// every location valid for the record's variant
    Any,
}

impl Location {
    pub const ALL: [Location; 6] = [
        Location::Instruction,
        Location::Input,
        Location::Output,
        Location::Content,
        Location::Text,
        Location::Any,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Instruction => "instruction",
            Self::Input => "input",
            Self::Output => "output",
            Self::Content => "content",
            Self::Text => "text",
            Self::Any => "any",
        }
    }

    /// Concrete locations this one stands for on `variant`.
    /// Empty if the location does not exist on the variant.
    fn expand(self, variant: Variant) -> &'static [Location] {
        let valid = variant.locations();
        match self {
            Self::Any => valid,
            _ => valid
                .iter()
                .position(|l| *l == self)
                .map(|idx| &valid[idx..=idx])
                .unwrap_or(&[]),
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Location {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Location::ALL
            .into_iter()
            .find(|l| l.name() == s)
            .ok_or_else(|| ConfigError::InvalidLocation(s.to_string()))
    }
}

/// Concrete field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Instruction,
    Input,
    Output,
    Content,
    Text,
    /// translation entry, holds a language code
    Language(String),
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Instruction => f.write_str("instruction"),
            Self::Input => f.write_str("input"),
            Self::Output => f.write_str("output"),
            Self::Content => f.write_str("content"),
            Self::Text => f.write_str("text"),
            Self::Language(lang) => write!(f, "translation[{lang}]"),
        }
    }
}

/// Non-empty, duplicate-free set of locations, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Locations(Vec<Location>);

impl Locations {
    pub fn new<I>(locations: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = Location>,
    {
        let locations: Vec<Location> = locations.into_iter().unique().collect();
        if locations.is_empty() {
            return Err(ConfigError::NoLocation);
        }
        Ok(Self(locations))
    }

    /// Parses location tokens.
    /// No tokens at all means [Location::Any].
    pub fn parse<I, S>(tokens: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let locations = tokens
            .into_iter()
            .map(|t| t.as_ref().parse())
            .collect::<Result<Vec<Location>, _>>()?;

        if locations.is_empty() {
            Ok(Self::default())
        } else {
            Self::new(locations)
        }
    }

    /// Whether at least one location exists on `variant`.
    pub fn applies_to(&self, variant: Variant) -> bool {
        self.0.iter().any(|l| !l.expand(variant).is_empty())
    }

    /// Resolves the locations against `record`.
    ///
    /// Locations that do not exist on the record's variant resolve to nothing.
    /// On translations, `languages` restricts the entries to the selected codes,
    /// including codes absent from the record.
    pub fn resolve(&self, record: &Record, languages: Option<&Languages>) -> Vec<Field> {
        let variant = record.variant();
        self.0
            .iter()
            .flat_map(|location| location.expand(variant))
            .flat_map(|location| Self::fields(*location, record, languages))
            .unique()
            .collect()
    }

    fn fields(location: Location, record: &Record, languages: Option<&Languages>) -> Vec<Field> {
        match (location, record) {
            (Location::Content, Record::Translation(t)) => match languages {
                Some(languages) => languages.iter().cloned().map(Field::Language).collect(),
                None => t.translations.keys().cloned().map(Field::Language).collect(),
            },
            (Location::Instruction, _) => vec![Field::Instruction],
            (Location::Input, _) => vec![Field::Input],
            (Location::Output, _) => vec![Field::Output],
            (Location::Content, _) => vec![Field::Content],
            (Location::Text, _) => vec![Field::Text],
            (Location::Any, _) => Vec::new(),
        }
    }
}

impl Default for Locations {
    fn default() -> Self {
        Self(vec![Location::Any])
    }
}

impl From<Location> for Locations {
    fn from(location: Location) -> Self {
        Self(vec![location])
    }
}

impl fmt::Display for Locations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// Lower-cased language codes restricting which translations are touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages(Vec<String>);

impl Languages {
    /// Returns [None] when no code is given, meaning "all present languages".
    pub fn new<I, S>(codes: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let codes: Vec<String> = codes
            .into_iter()
            .map(|c| c.as_ref().trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .unique()
            .collect();

        if codes.is_empty() {
            None
        } else {
            Some(Self(codes))
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lang(code: &str) -> Field {
        Field::Language(code.to_string())
    }

    #[test]
    fn invalid_location_token() {
        assert_eq!(
            Locations::parse(["content", "title"]),
            Err(ConfigError::InvalidLocation("title".to_string()))
        );
    }

    #[test]
    fn no_token_is_any() {
        let l = Locations::parse(Vec::<String>::new()).unwrap();
        assert_eq!(l, Locations::default());
        assert_eq!(l, Locations::from(Location::Any));
    }

    #[test]
    fn empty_set_is_rejected() {
        assert_eq!(Locations::new([]), Err(ConfigError::NoLocation));
    }

    #[test]
    fn any_on_pair() {
        let r = Record::pair("a", "b", "c");
        let fields = Locations::default().resolve(&r, None);
        assert_eq!(fields, vec![Field::Instruction, Field::Input, Field::Output]);
    }

    #[test]
    fn declaration_order_and_duplicates() {
        let r = Record::pair("a", "b", "c");
        let l = Locations::parse(["output", "instruction", "output"]).unwrap();
        assert_eq!(l.resolve(&r, None), vec![Field::Output, Field::Instruction]);

        let l = Locations::parse(["output", "any"]).unwrap();
        assert_eq!(
            l.resolve(&r, None),
            vec![Field::Output, Field::Instruction, Field::Input]
        );
    }

    #[test]
    fn invalid_for_variant_is_skipped() {
        let r = Record::pretrain("kia ora");
        let l = Locations::from(Location::Instruction);
        assert!(l.resolve(&r, None).is_empty());
        assert!(!l.applies_to(Variant::Pretrain));
        assert!(l.applies_to(Variant::Pair));

        let l = Locations::parse(["instruction", "content"]).unwrap();
        assert_eq!(l.resolve(&r, None), vec![Field::Content]);
    }

    #[test]
    fn classification_text() {
        let r = Record::classification("kia ora", "greeting");
        assert_eq!(Locations::default().resolve(&r, None), vec![Field::Text]);
    }

    #[test]
    fn translation_all_languages() {
        let r = Record::translation([("mi", "kia ora"), ("en", "hello")]);
        let fields = Locations::default().resolve(&r, None);
        assert_eq!(fields, vec![lang("en"), lang("mi")]);
    }

    #[test]
    fn translation_keys_kept_as_is() {
        let r = Record::translation([("mi", "kia ora"), ("MI", "kia ora")]);
        let fields = Locations::default().resolve(&r, None);
        assert_eq!(fields, vec![lang("MI"), lang("mi")]);
        assert_eq!(r.text(&fields[0]), Some("kia ora"));
    }

    #[test]
    fn translation_selected_languages() {
        let r = Record::translation([("mi", "kia ora"), ("en", "hello")]);
        let languages = Languages::new(["MI"]).unwrap();
        let fields = Locations::default().resolve(&r, Some(&languages));
        assert_eq!(fields, vec![lang("mi")]);

        let languages = Languages::new(["fr", "mi"]).unwrap();
        let fields = Locations::default().resolve(&r, Some(&languages));
        assert_eq!(fields, vec![lang("fr"), lang("mi")]);
        assert_eq!(r.text(&fields[0]), None);
    }

    #[test]
    fn languages_without_codes() {
        assert_eq!(Languages::new(Vec::<&str>::new()), None);
        assert_eq!(Languages::new(["", " "]), None);
    }

    #[test]
    fn languages_ignored_outside_translations() {
        let r = Record::pretrain("kia ora");
        let languages = Languages::new(["mi"]).unwrap();
        let fields = Locations::default().resolve(&r, Some(&languages));
        assert_eq!(fields, vec![Field::Content]);
    }
}
