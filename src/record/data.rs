use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{Field, Location};
use crate::error::ConfigError;

/// Instruction/input/output triple.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PairData {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

/// Single content blob.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PretrainData {
    pub content: String,
}

/// Language-keyed translations.
///
/// Keys are kept sorted, so iterating over all languages is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    pub translations: BTreeMap<String, String>,
}

impl TranslationData {
    /// Lookup of a language code.
    ///
    /// An exact key wins, otherwise a key whose lower-cased form equals `lang`.
    pub fn get(&self, lang: &str) -> Option<&str> {
        self.translations
            .get(lang)
            .or_else(|| {
                self.translations
                    .iter()
                    .find(|(k, _)| k.to_lowercase() == lang)
                    .map(|(_, v)| v)
            })
            .map(String::as_str)
    }

    fn get_mut(&mut self, lang: &str) -> Option<&mut String> {
        let key = if self.translations.contains_key(lang) {
            Some(lang.to_string())
        } else {
            self.translations
                .keys()
                .find(|k| k.to_lowercase() == lang)
                .cloned()
        };
        key.and_then(move |k| self.translations.get_mut(&k))
    }
}

/// Text with a classification label.
/// The label is never inspected by filters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationData {
    pub text: String,
    pub label: String,
}

/// Record shape tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    Pair,
    Pretrain,
    Translation,
    Classification,
}

impl Variant {
    pub const ALL: [Variant; 4] = [
        Variant::Pair,
        Variant::Pretrain,
        Variant::Translation,
        Variant::Classification,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Pair => "pairs",
            Self::Pretrain => "pretrain",
            Self::Translation => "translation",
            Self::Classification => "classification",
        }
    }

    /// Concrete locations addressable on this variant, in resolution order.
    pub fn locations(&self) -> &'static [Location] {
        match self {
            Self::Pair => &[Location::Instruction, Location::Input, Location::Output],
            Self::Pretrain | Self::Translation => &[Location::Content],
            Self::Classification => &[Location::Text],
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        Variant::ALL
            .into_iter()
            .find(|v| v.name() == lowered)
            .ok_or_else(|| ConfigError::InvalidVariant(s.to_string()))
    }
}

/// A dataset record.
///
/// Serializes as the bare inner data, so a JSON line holds no type tag.
/// Deserialization needs the [Variant], see [Record::from_json].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Record {
    Pair(PairData),
    Pretrain(PretrainData),
    Translation(TranslationData),
    Classification(ClassificationData),
}

impl Record {
    pub fn pair(instruction: &str, input: &str, output: &str) -> Self {
        Record::Pair(PairData {
            instruction: instruction.to_string(),
            input: input.to_string(),
            output: output.to_string(),
        })
    }

    pub fn pretrain(content: &str) -> Self {
        Record::Pretrain(PretrainData {
            content: content.to_string(),
        })
    }

    pub fn translation<'a, I>(translations: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        Record::Translation(TranslationData {
            translations: translations
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        })
    }

    pub fn classification(text: &str, label: &str) -> Self {
        Record::Classification(ClassificationData {
            text: text.to_string(),
            label: label.to_string(),
        })
    }

    pub fn variant(&self) -> Variant {
        match self {
            Self::Pair(_) => Variant::Pair,
            Self::Pretrain(_) => Variant::Pretrain,
            Self::Translation(_) => Variant::Translation,
            Self::Classification(_) => Variant::Classification,
        }
    }

    /// Get the text held at `field`.
    ///
    /// Returns [None] if the field does not exist on this record
    /// (wrong variant, or a language missing from the translations).
    pub fn text(&self, field: &Field) -> Option<&str> {
        match (self, field) {
            (Self::Pair(p), Field::Instruction) => Some(p.instruction.as_str()),
            (Self::Pair(p), Field::Input) => Some(p.input.as_str()),
            (Self::Pair(p), Field::Output) => Some(p.output.as_str()),
            (Self::Pretrain(p), Field::Content) => Some(p.content.as_str()),
            (Self::Translation(t), Field::Language(lang)) => t.get(lang),
            (Self::Classification(c), Field::Text) => Some(c.text.as_str()),
            _ => None,
        }
    }

    fn text_mut(&mut self, field: &Field) -> Option<&mut String> {
        match (self, field) {
            (Self::Pair(p), Field::Instruction) => Some(&mut p.instruction),
            (Self::Pair(p), Field::Input) => Some(&mut p.input),
            (Self::Pair(p), Field::Output) => Some(&mut p.output),
            (Self::Pretrain(p), Field::Content) => Some(&mut p.content),
            (Self::Translation(t), Field::Language(lang)) => t.get_mut(lang),
            (Self::Classification(c), Field::Text) => Some(&mut c.text),
            _ => None,
        }
    }

    /// Builds a new record where every field of `fields` is replaced by `f(text)`.
    ///
    /// Fields that do not exist on the record are skipped.
    pub fn map_fields<F>(mut self, fields: &[Field], f: F) -> Record
    where
        F: Fn(&str) -> String,
    {
        for field in fields {
            if let Some(text) = self.text_mut(field) {
                *text = f(text);
            }
        }
        self
    }

    /// Parses a JSON object as a record of the given variant.
    pub fn from_json(variant: Variant, json: &str) -> Result<Record, serde_json::Error> {
        let record = match variant {
            Variant::Pair => Record::Pair(serde_json::from_str(json)?),
            Variant::Pretrain => Record::Pretrain(serde_json::from_str(json)?),
            Variant::Translation => Record::Translation(serde_json::from_str(json)?),
            Variant::Classification => Record::Classification(serde_json::from_str(json)?),
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_from_str() {
        assert_eq!("pairs".parse::<Variant>(), Ok(Variant::Pair));
        assert_eq!("Translation".parse::<Variant>(), Ok(Variant::Translation));
        assert_eq!(
            "audio".parse::<Variant>(),
            Err(ConfigError::InvalidVariant("audio".to_string()))
        );
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let r = Record::from_json(Variant::Pair, r#"{"instruction": "kōrero"}"#).unwrap();
        assert_eq!(r, Record::pair("kōrero", "", ""));
    }

    #[test]
    fn serialize_has_no_tag() {
        let r = Record::classification("kia ora", "greeting");
        let json = serde_json::to_string(&r).unwrap();
        assert_eq!(json, r#"{"text":"kia ora","label":"greeting"}"#);
        assert_eq!(Record::from_json(Variant::Classification, &json).unwrap(), r);
    }

    #[test]
    fn translation_lookup_ignores_key_case() {
        let r = Record::translation([("MI", "kia ora"), ("en", "hello")]);
        assert_eq!(r.text(&Field::Language("mi".to_string())), Some("kia ora"));
        assert_eq!(r.text(&Field::Language("fr".to_string())), None);

        let r = r.map_fields(&[Field::Language("mi".to_string())], str::to_uppercase);
        assert_eq!(r, Record::translation([("MI", "KIA ORA"), ("en", "hello")]));
    }

    #[test]
    fn text_on_wrong_variant() {
        let r = Record::pretrain("kia ora");
        assert_eq!(r.text(&Field::Instruction), None);
        assert_eq!(r.text(&Field::Content), Some("kia ora"));
    }

    #[test]
    fn map_fields_leaves_others_untouched() {
        let r = Record::pair("a", "b", "c");
        let r = r.map_fields(&[Field::Input, Field::Content], |t| format!("{t}{t}"));
        assert_eq!(r, Record::pair("a", "bb", "c"));
    }
}
