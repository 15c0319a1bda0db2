//! Draw sequencer and session configuration

use super::traits::{parse_value, TombolaConfig};
use super::validation::ConfigValidator;
use crate::items::{DEFAULT_AVOID_COUNT, DEFAULT_ITEM_COUNT, DEFAULT_MAX_OVERLAP};
use crate::TombolaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Tuning for the anti-repetition session generator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SequencerConfig {
    /// Size of the item set `1..=item_count`
    pub item_count: usize,
    /// Window compared between the new head and the previous tail
    pub avoid_count: usize,
    /// Largest tolerated overlap; candidates above it are reshuffled
    pub max_overlap: usize,
    /// Cap on reshuffles before falling back to the first candidate.
    /// `None` retries until the overlap rule is satisfied.
    pub max_attempts: Option<u32>,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            item_count: DEFAULT_ITEM_COUNT,
            avoid_count: DEFAULT_AVOID_COUNT,
            max_overlap: DEFAULT_MAX_OVERLAP,
            max_attempts: None,
        }
    }
}

impl SequencerConfig {
    /// Validate the sequencer settings
    pub fn validate(&self) -> Result<(), TombolaError> {
        let mut validator = ConfigValidator::new();
        self.validate_into(&mut validator);
        validator.result().map_err(Into::into)
    }

    pub(crate) fn validate_into(&self, validator: &mut ConfigValidator) {
        validator
            .range(
                "item_count",
                self.item_count as u64,
                Some(1),
                Some(u64::from(u32::MAX)),
            )
            .range(
                "avoid_count",
                self.avoid_count as u64,
                Some(1),
                Some(self.item_count.saturating_sub(1) as u64),
            )
            .custom(
                "max_overlap",
                &self.max_overlap,
                |overlap| *overlap < self.avoid_count,
                "must be smaller than avoid_count",
            )
            .custom(
                "max_attempts",
                &self.max_attempts,
                |attempts| *attempts != Some(0),
                "must be positive when set",
            );
    }
}

/// Pacing presets for automatic drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DrawSpeed {
    /// One draw every six seconds
    Slow,
    /// One draw every five seconds
    #[default]
    Normal,
    /// One draw every four seconds
    Fast,
    /// One draw every three seconds
    VeryFast,
}

impl DrawSpeed {
    /// Delay between consecutive automatic draws
    pub fn interval(self) -> Duration {
        let millis = match self {
            Self::Slow => 6000,
            Self::Normal => 5000,
            Self::Fast => 4000,
            Self::VeryFast => 3000,
        };
        Duration::from_millis(millis)
    }
}

impl fmt::Display for DrawSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::VeryFast => "very-fast",
        };
        f.write_str(name)
    }
}

impl FromStr for DrawSpeed {
    type Err = TombolaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "slow" => Ok(Self::Slow),
            "normal" => Ok(Self::Normal),
            "fast" => Ok(Self::Fast),
            "very-fast" => Ok(Self::VeryFast),
            other => Err(TombolaError::config(format!(
                "Unknown draw speed {other:?} (expected slow, normal, fast or very-fast)"
            ))),
        }
    }
}

/// Top-level configuration for a drawing application
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Sequencer tuning
    pub sequencer: SequencerConfig,
    /// Pacing for automatic drawing
    pub speed: DrawSpeed,
}

const SESSION_KEYS: &[&str] = &[
    "item-count",
    "avoid-count",
    "max-overlap",
    "max-attempts",
    "speed",
];

impl TombolaConfig for SessionConfig {
    fn accepts_key(&self, key: &str) -> bool {
        SESSION_KEYS.contains(&key.replace('_', "-").as_str())
    }

    fn set_from_string(&mut self, key: &str, value: &str) -> Result<(), TombolaError> {
        match key.replace('_', "-").as_str() {
            "item-count" => self.sequencer.item_count = parse_value(key, value)?,
            "avoid-count" => self.sequencer.avoid_count = parse_value(key, value)?,
            "max-overlap" => self.sequencer.max_overlap = parse_value(key, value)?,
            "max-attempts" => {
                self.sequencer.max_attempts = match value.trim() {
                    "" | "none" | "unbounded" => None,
                    other => Some(parse_value(key, other)?),
                };
            }
            "speed" => self.speed = value.parse()?,
            _ => {
                return Err(TombolaError::config(format!(
                    "Unknown configuration key: {key}"
                )))
            }
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), TombolaError> {
        let mut root = ConfigValidator::new();
        let mut sequencer = root.for_field("sequencer");
        self.sequencer.validate_into(&mut sequencer);
        root.merge(sequencer);
        root.result().map_err(Into::into)
    }
}
