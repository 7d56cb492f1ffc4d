//! Threshold decision policy.
//!
//! Per inspected field, scores are checked against [Thresholds].
//! A record is within thresholds only if every inspected field is.
//! The [Action] then tells whether such a record is forwarded or dropped.
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::identifiers::Scores;

/// What to do with records that are within thresholds.
/// Records outside of the thresholds get the opposite treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Action {
    #[default]
    Keep,
    Discard,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::Discard => "discard",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keep" => Ok(Self::Keep),
            "discard" => Ok(Self::Discard),
            _ => Err(ConfigError::InvalidAction(s.to_string())),
        }
    }
}

/// Acceptance bounds, both in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    max_non_target: f64,
    min_target: f64,
}

impl Thresholds {
    pub fn new(max_non_target: f64, min_target: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            max_non_target: Self::check("max_non_maori", max_non_target)?,
            min_target: Self::check("min_maori", min_target)?,
        })
    }

    /// Only a lower bound on the Māori ratio.
    pub fn with_min_target(min_target: f64) -> Result<Self, ConfigError> {
        Self::new(1.0, min_target)
    }

    fn check(name: &'static str, value: f64) -> Result<f64, ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(value)
        } else {
            Err(ConfigError::ThresholdOutOfRange { name, value })
        }
    }

    /// Whether `scores` are within thresholds.
    /// A missing non-target score is not checked.
    pub fn within(&self, scores: &Scores) -> bool {
        let non_target_ok = scores
            .non_target()
            .map_or(true, |non_target| non_target <= self.max_non_target);

        non_target_ok && scores.target() >= self.min_target
    }
}

impl Default for Thresholds {
    /// accepts everything
    fn default() -> Self {
        Self {
            max_non_target: 1.0,
            min_target: 0.0,
        }
    }
}

/// Outcome of [Policy::decide].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    /// per-field verdicts, in inspection order
    pub within: Vec<bool>,
    pub within_all: bool,
    pub forward: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Policy {
    thresholds: Thresholds,
    action: Action,
}

impl Policy {
    pub fn new(thresholds: Thresholds, action: Action) -> Self {
        Self { thresholds, action }
    }

    /// Whether a record with the given overall verdict is forwarded.
    pub fn forward(&self, within_all: bool) -> bool {
        match (within_all, self.action) {
            (true, Action::Keep) | (false, Action::Discard) => true,
            (true, Action::Discard) | (false, Action::Keep) => false,
        }
    }

    pub fn decide<'a, I>(&self, scores: I) -> Decision
    where
        I: IntoIterator<Item = &'a Scores>,
    {
        let within: Vec<bool> = scores
            .into_iter()
            .map(|s| self.thresholds.within(s))
            .collect();
        let within_all = within.iter().all(|w| *w);

        Decision {
            within,
            within_all,
            forward: self.forward(within_all),
        }
    }
}
