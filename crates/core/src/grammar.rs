//! Grammar knobs for spelling numbers in Arabic
//!
//! Each knob is a closed two-valued enum, so an out-of-range setting cannot
//! be represented. Numeric flags (`1`/`2`) and names coming from a config
//! file or a caller boundary convert through `TryFrom<u8>` / `FromStr` and
//! are rejected with [`Error::InvalidConfiguration`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Gender of the counted noun
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Masculine,
    #[default]
    Feminine,
}

impl Gender {
    pub fn is_feminine(&self) -> bool {
        matches!(self, Self::Feminine)
    }

    pub fn is_masculine(&self) -> bool {
        !self.is_feminine()
    }
}

impl TryFrom<u8> for Gender {
    type Error = Error;

    /// `1` for masculine, `2` for feminine
    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            1 => Ok(Self::Masculine),
            2 => Ok(Self::Feminine),
            other => Err(Error::invalid("gender", other)),
        }
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "masculine" | "male" | "1" => Ok(Self::Masculine),
            "feminine" | "female" | "2" => Ok(Self::Feminine),
            other => Err(Error::invalid("gender", other)),
        }
    }
}

/// Grammatical position of the counted noun
///
/// Nominative is the subject form (marfoua); accusative covers the object
/// and genitive positions (mansoub / majrour). Only a handful of lexicon
/// entries differ between the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GrammaticalCase {
    #[default]
    Nominative,
    Accusative,
}

impl TryFrom<u8> for GrammaticalCase {
    type Error = Error;

    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            1 => Ok(Self::Nominative),
            2 => Ok(Self::Accusative),
            other => Err(Error::invalid("case", other)),
        }
    }
}

impl FromStr for GrammaticalCase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "nominative" | "1" => Ok(Self::Nominative),
            "accusative" | "genitive" | "2" => Ok(Self::Accusative),
            other => Err(Error::invalid("case", other)),
        }
    }
}

/// Counting (cardinal) or ranking (ordinal) form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NumberMode {
    #[default]
    Cardinal,
    Ordinal,
}

impl NumberMode {
    pub fn is_ordinal(&self) -> bool {
        matches!(self, Self::Ordinal)
    }
}

impl TryFrom<u8> for NumberMode {
    type Error = Error;

    fn try_from(flag: u8) -> Result<Self> {
        match flag {
            1 => Ok(Self::Cardinal),
            2 => Ok(Self::Ordinal),
            other => Err(Error::invalid("mode", other)),
        }
    }
}

impl FromStr for NumberMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "cardinal" | "1" => Ok(Self::Cardinal),
            "ordinal" | "2" => Ok(Self::Ordinal),
            other => Err(Error::invalid("mode", other)),
        }
    }
}

/// Per-call spelling configuration
///
/// Immutable once built; pass it by reference to every conversion. The
/// default is feminine, nominative, cardinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct SpellerConfig {
    #[serde(default)]
    pub gender: Gender,
    #[serde(default)]
    pub case: GrammaticalCase,
    #[serde(default)]
    pub mode: NumberMode,
}

impl SpellerConfig {
    pub fn new(gender: Gender, case: GrammaticalCase, mode: NumberMode) -> Self {
        Self { gender, case, mode }
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_case(mut self, case: GrammaticalCase) -> Self {
        self.case = case;
        self
    }

    pub fn with_mode(mut self, mode: NumberMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn masculine(self) -> Self {
        self.with_gender(Gender::Masculine)
    }

    pub fn feminine(self) -> Self {
        self.with_gender(Gender::Feminine)
    }

    pub fn ordinal(self) -> Self {
        self.with_mode(NumberMode::Ordinal)
    }

    pub fn cardinal(self) -> Self {
        self.with_mode(NumberMode::Cardinal)
    }

    pub fn is_ordinal(&self) -> bool {
        self.mode.is_ordinal()
    }
}
