//! Arabic-Indic digit utilities
//!
//! Substitutes Latin digits with Arabic-Indic ones. Floats can first be laid
//! out with fixed decimals and thousands grouping.

use crate::error::{Result, TextProcessingError};
use crate::numbers::{Lexicon, Numeral};
use arabic_config::{DigitSettings, MAX_DECIMALS};

/// Latin to Arabic-Indic digit pairs
pub fn all_digits() -> &'static [(char, char); 10] {
    Lexicon::global().arabic_indic_digits()
}

/// Replace every ASCII digit with its Arabic-Indic glyph
///
/// # Examples
/// ```
/// use arabic_text_processing::digits::to_arabic_indic;
/// assert_eq!(to_arabic_indic("2014-12-12 12:00:00"), "٢٠١٤-١٢-١٢ ١٢:٠٠:٠٠");
/// ```
pub fn to_arabic_indic(text: &str) -> String {
    let lexicon = Lexicon::global();
    text.chars()
        .map(|c| lexicon.arabic_indic_digit(c).unwrap_or(c))
        .collect()
}

/// Replace every ASCII digit with the HTML entity of its Arabic-Indic glyph
pub fn to_arabic_indic_entities(text: &str) -> String {
    let lexicon = Lexicon::global();
    let mut result = String::with_capacity(text.len() * 7);
    for c in text.chars() {
        match lexicon.arabic_indic_digit(c) {
            Some(glyph) => result.push_str(&format!("&#{};", glyph as u32)),
            None => result.push(c),
        }
    }
    result
}

/// Substitute digits, optionally requiring at least one digit in `text`
pub fn convert(text: &str, must_contain_digits: bool) -> Result<String> {
    if must_contain_digits && !text.chars().any(|c| c.is_ascii_digit()) {
        return Err(TextProcessingError::DigitsNotFound(text.to_string()));
    }

    Ok(to_arabic_indic(text))
}

/// Substitute the digits of a numeric value in its shortest float form
///
/// `"125.50"` becomes `١٢٥.٥`, matching a round trip through a float.
pub fn convert_number(value: impl ToString) -> Result<String> {
    let number = parse_numeric(&value.to_string())?;
    convert(&number.to_string(), true)
}

/// Format a numeric value with grouping and fixed decimals, then substitute
pub fn convert_float(value: impl ToString, format: &FloatFormat) -> Result<String> {
    let number = parse_numeric(&value.to_string())?;
    convert(&format.format(number)?, true)
}

fn parse_numeric(text: &str) -> Result<f64> {
    let numeral: Numeral = text.parse()?;
    numeral
        .to_string()
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
        .ok_or_else(|| TextProcessingError::InvalidNumber(text.to_string()))
}

/// Largest scaled magnitude that is still pre-rounded before the final rounding
const PRE_ROUNDING_LIMIT: f64 = 1e15;

/// Float layout for [`convert_float`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FloatFormat {
    pub decimals: usize,
    pub decimal_mark: String,
    pub thousands_mark: String,
}

impl FloatFormat {
    /// `decimals` is capped at [`MAX_DECIMALS`]
    pub fn new(decimals: usize, decimal_mark: &str, thousands_mark: &str) -> Self {
        Self {
            decimals: decimals.min(MAX_DECIMALS),
            decimal_mark: decimal_mark.to_string(),
            thousands_mark: thousands_mark.to_string(),
        }
    }

    /// Round half away from zero to `decimals`, group the integer digits
    ///
    /// The scaled value is first rounded to 15 significant digits so that
    /// binary representation error does not flip a half: `1.005` gives
    /// `1.01`.
    ///
    /// # Errors
    ///
    /// [`TextProcessingError::InvalidNumber`] if scaling overflows.
    pub fn format(&self, value: f64) -> Result<String> {
        let decimals = self.decimals.min(MAX_DECIMALS);
        let mut scaled = value.abs() * 10f64.powi(decimals as i32);
        if !scaled.is_finite() {
            return Err(TextProcessingError::InvalidNumber(value.to_string()));
        }

        if scaled < PRE_ROUNDING_LIMIT {
            scaled = format!("{:.14e}", scaled).parse().unwrap_or(scaled);
        }
        let scaled = scaled.round();

        let mut digits = format!("{:.0}", scaled);
        if digits.len() <= decimals {
            digits = format!("{:0>width$}", digits, width = decimals + 1);
        }

        let (integer, fraction) = digits.split_at(digits.len() - decimals);

        let mut result = String::new();
        if value < 0.0 && scaled != 0.0 {
            result.push('-');
        }
        result.push_str(&group_thousands(integer, &self.thousands_mark));
        if decimals > 0 {
            result.push_str(&self.decimal_mark);
            result.push_str(fraction);
        }
        Ok(result)
    }
}

impl Default for FloatFormat {
    fn default() -> Self {
        Self::new(2, ".", ",")
    }
}

impl From<&DigitSettings> for FloatFormat {
    fn from(settings: &DigitSettings) -> Self {
        Self::new(
            settings.decimals,
            &settings.decimal_mark,
            &settings.thousands_mark,
        )
    }
}

fn group_thousands(digits: &str, mark: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + (len / 3) * mark.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push_str(mark);
        }
        grouped.push(c);
    }
    grouped
}
