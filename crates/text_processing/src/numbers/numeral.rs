//! Decimal numeral input
//!
//! Callers hand the speller strings, integers or floats. Everything is
//! normalized into a [`Numeral`]: a sign flag plus the integer and fraction
//! digit strings, so leading zeros (`0.0001`) survive into the speller.

use crate::error::{Result, TextProcessingError};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

static NUMERAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([+-]?)([0-9]*)(?:\.([0-9]*))?$").unwrap());

/// A parsed decimal numeral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numeral {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Numeral {
    /// Whether a minus sign applies; `-0` is not negative
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Integer digits, at least one digit long
    pub fn integer(&self) -> &str {
        &self.integer
    }

    /// Fraction digits as written, if any were given
    pub fn fraction(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// Fraction digits worth spelling: present and not all zeros
    pub fn significant_fraction(&self) -> Option<&str> {
        self.fraction().filter(|digits| !is_all_zeros(digits))
    }

    /// Exactly one, ignoring leading zeros and an all-zero fraction
    pub fn is_one(&self) -> bool {
        !self.negative
            && self.integer.trim_start_matches('0') == "1"
            && self.significant_fraction().is_none()
    }
}

pub(crate) fn is_all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

impl FromStr for Numeral {
    type Err = TextProcessingError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let invalid = || TextProcessingError::InvalidNumber(s.to_string());

        let caps = NUMERAL_PATTERN.captures(trimmed).ok_or_else(invalid)?;
        let integer = caps.get(2).map_or("", |m| m.as_str());
        let fraction = caps.get(3).map_or("", |m| m.as_str());

        if integer.is_empty() && fraction.is_empty() {
            return Err(invalid());
        }

        let is_zero = is_all_zeros(integer) && is_all_zeros(fraction);
        let negative = caps.get(1).map_or(false, |m| m.as_str() == "-") && !is_zero;

        Ok(Self {
            negative,
            integer: if integer.is_empty() {
                "0".to_string()
            } else {
                integer.to_string()
            },
            fraction: (!fraction.is_empty()).then(|| fraction.to_string()),
        })
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str(&self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

/// Anything the speller accepts as a number
pub trait IntoNumeral {
    fn into_numeral(self) -> Result<Numeral>;
}

impl IntoNumeral for Numeral {
    fn into_numeral(self) -> Result<Numeral> {
        Ok(self)
    }
}

impl IntoNumeral for &Numeral {
    fn into_numeral(self) -> Result<Numeral> {
        Ok(self.clone())
    }
}

impl IntoNumeral for &str {
    fn into_numeral(self) -> Result<Numeral> {
        self.parse()
    }
}

impl IntoNumeral for String {
    fn into_numeral(self) -> Result<Numeral> {
        self.parse()
    }
}

impl IntoNumeral for &String {
    fn into_numeral(self) -> Result<Numeral> {
        self.parse()
    }
}

macro_rules! impl_into_numeral_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoNumeral for $t {
                fn into_numeral(self) -> Result<Numeral> {
                    self.to_string().parse()
                }
            }
        )*
    };
}

impl_into_numeral_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Significant digits kept when a float is turned into a numeral
pub const FLOAT_PRECISION: usize = 14;

impl IntoNumeral for f64 {
    /// Rounds to [`FLOAT_PRECISION`] significant digits first, so binary
    /// noise such as `0.1 + 0.2 == 0.30000000000000004` reads as `0.3`
    fn into_numeral(self) -> Result<Numeral> {
        if !self.is_finite() {
            return Err(TextProcessingError::InvalidNumber(self.to_string()));
        }

        let rounded: f64 = format!("{:.*e}", FLOAT_PRECISION - 1, self)
            .parse()
            .map_err(|_| TextProcessingError::InvalidNumber(self.to_string()))?;

        // Display never uses exponent notation, so 0.0001 stays "0.0001"
        rounded.to_string().parse()
    }
}

impl IntoNumeral for f32 {
    fn into_numeral(self) -> Result<Numeral> {
        if !self.is_finite() {
            return Err(TextProcessingError::InvalidNumber(self.to_string()));
        }
        self.to_string().parse()
    }
}
