//! Number to Arabic words
//!
//! Spells a decimal numeral block by block (groups of three digits from the
//! least-significant end), applying Arabic count agreement to the scale
//! nouns (thousand, million, billion, trillion).

use super::lexicon::{Lexicon, Word};
use super::numeral::{is_all_zeros, IntoNumeral};
use crate::digits;
use crate::error::{Result, TextProcessingError};
use arabic_core::SpellerConfig;
use std::fmt::Display;

/// Longest integer part accepted, and the most significant digits a
/// fraction may carry after its leading zeros
pub const MAX_DIGITS: usize = 14;

const STR_NEGATIVE: &str = "سالب ";
const STR_ZERO: &str = "صفر";
const STR_COMMA: &str = " فاصلة";
const STR_AND: &str = " و ";
const STR_PRE: &str = "ال";
const STR_FIRST_MASCULINE: &str = "الأول";
const STR_FIRST_FEMININE: &str = "الأولى";
const STR_TEEN_MASCULINE: &str = " عشر";
const STR_TEEN_FEMININE: &str = " عشرة";

/// `floor(number / coefficient) * coefficient`
pub fn calculate_key(number: u32, coefficient: u32) -> u32 {
    (number / coefficient) * coefficient
}

/// Arabic number speller
///
/// Stateless apart from the shared lexicon: the grammar settings travel
/// with every call in a [`SpellerConfig`], so one speller can serve
/// concurrent callers.
#[derive(Debug, Clone, Copy)]
pub struct NumberSpeller {
    lexicon: &'static Lexicon,
}

impl NumberSpeller {
    pub fn new() -> Self {
        Self::with_lexicon(Lexicon::global())
    }

    pub fn with_lexicon(lexicon: &'static Lexicon) -> Self {
        Self { lexicon }
    }

    /// Spell a number in Arabic words
    ///
    /// # Errors
    ///
    /// - [`TextProcessingError::InvalidNumber`] if the input is not a decimal numeral
    /// - [`TextProcessingError::MaximumLength`] if the integer part has more
    ///   than [`MAX_DIGITS`] digits, or the fraction more than [`MAX_DIGITS`]
    ///   digits after its leading zeros. Floats are rounded to
    ///   [`FLOAT_PRECISION`](super::FLOAT_PRECISION) significant digits and
    ///   never fail this way unless their integer part is too long.
    pub fn convert(&self, number: impl IntoNumeral, config: &SpellerConfig) -> Result<String> {
        let numeral = number.into_numeral()?;

        tracing::debug!(
            number = %numeral,
            gender = ?config.gender,
            case = ?config.case,
            mode = ?config.mode,
            "Spelling number"
        );

        if config.is_ordinal() && numeral.is_one() {
            return Ok(if config.gender.is_masculine() {
                STR_FIRST_MASCULINE
            } else {
                STR_FIRST_FEMININE
            }
            .to_string());
        }

        check_length(numeral.integer().trim())?;

        let mut text = String::new();
        if numeral.is_negative() {
            text.push_str(STR_NEGATIVE);
        }

        text.push_str(&self.spell_digits(numeral.integer(), config)?);

        if let Some(fraction) = numeral.significant_fraction() {
            let decimal = self.spell_digits(fraction, config)?;
            text.push_str(STR_COMMA);
            text.push(' ');
            text.push_str(&decimal);
        }

        Ok(text)
    }

    /// Render the digits of `number` as Arabic-Indic glyphs
    pub fn to_arabic_indic(&self, number: impl Display) -> String {
        digits::to_arabic_indic(&number.to_string())
    }

    /// Render the digits of `number` as Arabic-Indic HTML entities
    pub fn to_arabic_indic_entities(&self, number: impl Display) -> String {
        digits::to_arabic_indic_entities(&number.to_string())
    }

    /// Spell one run of digits (the integer or the fraction part)
    ///
    /// Leading zeros are read out one by one, so only the significant
    /// digits count against [`MAX_DIGITS`].
    fn spell_digits(&self, digits: &str, config: &SpellerConfig) -> Result<String> {
        let digits = digits.trim();

        if is_all_zeros(digits) {
            return Ok(STR_ZERO.to_string());
        }

        let significant = digits.trim_start_matches('0');
        check_length(significant)?;
        let mut zeros = format!("{} ", STR_ZERO).repeat(digits.len() - significant.len());

        let blocks = split_blocks(significant);
        let mut items = Vec::with_capacity(blocks.len());

        for (index, &value) in blocks.iter().enumerate().rev() {
            let mut text = self.written_block(value, config);
            if text.is_empty() {
                continue;
            }

            if index > 0 {
                text = self.with_scale(text, value, index, config);
            }

            // The zero prefix belongs in front of the first spelled block only
            if !zeros.is_empty() {
                text = format!("{} {}", zeros, text);
                zeros.clear();
            }

            items.push(text);
        }

        Ok(items.join(STR_AND))
    }

    /// Apply count agreement between a block and its scale noun
    fn with_scale(&self, text: String, value: u32, index: usize, config: &SpellerConfig) -> String {
        let scale = self.lexicon.scale(index);

        let phrase = match value {
            1 => scale.singular.to_string(),
            2 => scale.dual(config.case).to_string(),
            3..=10 => format!("{} {}", text, scale.plural),
            _ => format!("{} {}", text, scale.singular),
        };

        // In ordinal mode the article leads the whole count-plus-noun phrase
        if config.is_ordinal() && !phrase.starts_with(STR_PRE) {
            format!("{}{}", STR_PRE, phrase)
        } else {
            phrase
        }
    }

    /// Spell a block of at most three digits (0..=999)
    fn written_block(&self, number: u32, config: &SpellerConfig) -> String {
        let mut items: Vec<String> = Vec::with_capacity(3);
        let mut number = number;

        if number > 99 {
            let hundred = calculate_key(number, 100);
            items.push(self.lexicon.hundred(hundred).form(config.case).to_string());
            number %= 100;
        }

        if number != 0 {
            if config.is_ordinal() {
                self.ordinal_items(number, config, &mut items);
            } else {
                self.cardinal_items(number, config, &mut items);
            }
        }

        items.retain(|item| !item.is_empty());
        items.join(STR_AND)
    }

    fn ordinal_items(&self, number: u32, config: &SpellerConfig, items: &mut Vec<String>) {
        if number <= 10 {
            items.push(self.ordinal_word(number, config));
        } else if number < 20 {
            let suffix = if config.gender.is_masculine() {
                STR_TEEN_MASCULINE
            } else {
                STR_TEEN_FEMININE
            };
            items.push(format!("{}{}", self.ordinal_word(number - 10, config), suffix));
        } else {
            let ones = number % 10;
            if self.lexicon.has_ordinal(ones) {
                items.push(self.ordinal_word(ones, config));
            }

            let tens = calculate_key(number, 10);
            items.push(format!("{}{}", STR_PRE, self.lexicon.tens(tens).form(config.case)));
        }
    }

    fn cardinal_items(&self, number: u32, config: &SpellerConfig, items: &mut Vec<String>) {
        // 2 and 12 are duals and pick their form from the case
        if number < 20 {
            items.push(self.cardinal_word(number, config).to_string());
        } else {
            let ones = number % 10;
            if ones > 0 {
                items.push(self.cardinal_word(ones, config).to_string());
            }

            let tens = calculate_key(number, 10);
            items.push(self.lexicon.tens(tens).form(config.case).to_string());
        }
    }

    fn cardinal_word(&self, number: u32, config: &SpellerConfig) -> &'static str {
        let word: Word = self.lexicon.cardinal_one(number).get(config.gender);
        word.form(config.case)
    }

    fn ordinal_word(&self, number: u32, config: &SpellerConfig) -> String {
        format!("{}{}", STR_PRE, self.lexicon.ordinal(number).get(config.gender))
    }
}

impl Default for NumberSpeller {
    fn default() -> Self {
        Self::new()
    }
}

fn check_length(digits: &str) -> Result<()> {
    if digits.len() > MAX_DIGITS {
        tracing::warn!(length = digits.len(), max = MAX_DIGITS, "Number too long to spell");
        return Err(TextProcessingError::MaximumLength {
            length: digits.len(),
            max: MAX_DIGITS,
        });
    }
    Ok(())
}

/// Split a digit string into numeric blocks of three, least-significant first
fn split_blocks(digits: &str) -> Vec<u32> {
    digits
        .as_bytes()
        .rchunks(3)
        .map(|chunk| {
            chunk
                .iter()
                .fold(0, |acc, digit| acc * 10 + u32::from(digit - b'0'))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use arabic_core::{Gender, GrammaticalCase};

    fn feminine() -> SpellerConfig {
        SpellerConfig::default()
    }

    fn masculine() -> SpellerConfig {
        SpellerConfig::default().masculine()
    }

    #[test]
    fn test_calculate_key() {
        assert_eq!(calculate_key(234, 100), 200);
        assert_eq!(calculate_key(34, 10), 30);
        assert_eq!(calculate_key(9, 10), 0);
    }

    #[test]
    fn test_split_blocks() {
        assert_eq!(split_blocks("1234567"), vec![567, 234, 1]);
        assert_eq!(split_blocks("999"), vec![999]);
        assert_eq!(split_blocks("1000"), vec![0, 1]);
    }

    #[test]
    fn test_zero() {
        let speller = NumberSpeller::new();
        assert_eq!(speller.convert(0, &feminine()).unwrap(), "صفر");
        assert_eq!(speller.convert("000", &feminine()).unwrap(), "صفر");
    }

    #[test]
    fn test_gender_agreement() {
        let speller = NumberSpeller::new();
        assert_eq!(speller.convert(1, &feminine()).unwrap(), "واحدة");
        assert_eq!(speller.convert(10, &feminine()).unwrap(), "عشرة");
        assert_eq!(speller.convert(1, &masculine()).unwrap(), "واحد");
        assert_eq!(speller.convert(10, &masculine()).unwrap(), "عشر");
    }

    #[test]
    fn test_dual_follows_case() {
        let speller = NumberSpeller::new();
        let accusative = masculine().with_case(GrammaticalCase::Accusative);

        assert_eq!(speller.convert(2, &masculine()).unwrap(), "اثنان");
        assert_eq!(speller.convert(2, &accusative).unwrap(), "اثنين");
        assert_eq!(speller.convert(12, &accusative).unwrap(), "اثني عشر");
        assert_eq!(speller.convert(22, &accusative).unwrap(), "اثنين و عشرين");
        assert_eq!(speller.convert(200, &accusative).unwrap(), "مئتين");
        assert_eq!(speller.convert(2000, &accusative).unwrap(), "ألفين");
    }

    #[test]
    fn test_tens_and_hundreds() {
        let speller = NumberSpeller::new();
        assert_eq!(speller.convert(20, &feminine()).unwrap(), "عشرون");
        assert_eq!(speller.convert(45, &feminine()).unwrap(), "خمسة و أربعون");
        assert_eq!(speller.convert(101, &feminine()).unwrap(), "مئة و واحدة");
        assert_eq!(speller.convert(999, &masculine()).unwrap(), "تسعمئة و تسع و تسعون");
    }

    #[test]
    fn test_scale_agreement() {
        let speller = NumberSpeller::new();
        let config = feminine();
        assert_eq!(speller.convert(1000, &config).unwrap(), "ألف");
        assert_eq!(speller.convert(2000, &config).unwrap(), "ألفان");
        assert_eq!(speller.convert(3000, &config).unwrap(), "ثلاثة آلاف");
        assert_eq!(speller.convert(11000, &config).unwrap(), "إحدى عشرة ألف");
        assert_eq!(speller.convert(5_000_000, &config).unwrap(), "خمسة ملايين");
        assert_eq!(speller.convert(2_000_000_000, &config).unwrap(), "ملياران");
    }

    #[test]
    fn test_ordinal() {
        let speller = NumberSpeller::new();
        let ordinal = feminine().ordinal();
        assert_eq!(speller.convert(1, &ordinal).unwrap(), "الأولى");
        assert_eq!(speller.convert(1, &ordinal.masculine()).unwrap(), "الأول");
        assert_eq!(speller.convert(2, &ordinal).unwrap(), "الثانية");
        assert_eq!(speller.convert(10, &ordinal).unwrap(), "العاشرة");
        assert_eq!(speller.convert(11, &ordinal.masculine()).unwrap(), "الأول عشر");
        assert_eq!(speller.convert(13, &ordinal).unwrap(), "الثالثة عشرة");
        assert_eq!(speller.convert(21, &ordinal.masculine()).unwrap(), "الأول و العشرون");
        assert_eq!(speller.convert(30, &ordinal).unwrap(), "الثلاثون");
        assert_eq!(speller.convert(100, &ordinal).unwrap(), "مئة");
        assert_eq!(speller.convert(1000, &ordinal).unwrap(), "الألف");
        assert_eq!(speller.convert(2000, &ordinal).unwrap(), "الألفان");
        assert_eq!(speller.convert(3000, &ordinal).unwrap(), "الثالثة آلاف");
        assert_eq!(speller.convert(11000, &ordinal).unwrap(), "الأولى عشرة ألف");
        assert_eq!(speller.convert(300_000, &ordinal).unwrap(), "الثلاثمئة ألف");
        assert_eq!(
            speller.convert(5_000_000, &ordinal.masculine()).unwrap(),
            "الخامس ملايين"
        );
    }

    #[test]
    fn test_maximum_length() {
        let speller = NumberSpeller::new();
        let config = feminine();

        assert!(speller.convert("99999999999999", &config).is_ok());
        assert_eq!(
            speller.convert("100000000000000", &config),
            Err(TextProcessingError::MaximumLength {
                length: 15,
                max: MAX_DIGITS
            })
        );
        assert!(matches!(
            speller.convert("1.123456789012345", &config),
            Err(TextProcessingError::MaximumLength { length: 15, .. })
        ));
        assert!(matches!(
            speller.convert("000000000000001", &config),
            Err(TextProcessingError::MaximumLength { length: 15, .. })
        ));
    }

    #[test]
    fn test_float_noise_is_not_too_long() {
        let speller = NumberSpeller::new();
        assert_eq!(
            speller.convert(0.1_f64 + 0.2, &feminine()).unwrap(),
            "صفر فاصلة ثلاثة"
        );
        assert!(speller.convert(1.0_f64 / 3.0, &feminine()).is_ok());
        assert!(speller.convert(0.000012345678901234_f64, &feminine()).is_ok());
    }

    #[test]
    fn test_leading_zeros_in_integer_part() {
        let speller = NumberSpeller::new();
        assert_eq!(speller.convert("007", &feminine()).unwrap(), "صفر صفر  سبعة");
    }

    #[test]
    fn test_zero_fraction_is_omitted() {
        let speller = NumberSpeller::new();
        assert_eq!(speller.convert("5.00", &feminine()).unwrap(), "خمسة");
        assert_eq!(speller.convert(5.0, &feminine()).unwrap(), "خمسة");
    }

    #[test]
    fn test_invalid_number() {
        let speller = NumberSpeller::new();
        assert!(matches!(
            speller.convert("twelve", &feminine()),
            Err(TextProcessingError::InvalidNumber(_))
        ));
    }

    #[test]
    fn test_gender_key_is_independent_of_case() {
        let speller = NumberSpeller::new();
        let config = SpellerConfig::new(
            Gender::Masculine,
            GrammaticalCase::Accusative,
            arabic_core::NumberMode::Cardinal,
        );
        assert_eq!(speller.convert(3, &config).unwrap(), "ثلاث");
    }
}
