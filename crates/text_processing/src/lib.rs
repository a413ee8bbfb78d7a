//! Arabic Text Processing
//!
//! This crate provides:
//! - **Number spelling**: render numbers as Arabic words, cardinal or
//!   ordinal, with gender and grammatical case agreement
//! - **Arabic-Indic digits**: substitute Latin digits with their
//!   Arabic-Indic glyphs (or HTML entities), with fixed-decimal grouped
//!   float rendering
//!
//! # Example
//!
//! ```
//! use arabic_core::SpellerConfig;
//! use arabic_text_processing::NumberSpeller;
//!
//! let speller = NumberSpeller::new();
//! let config = SpellerConfig::default();
//!
//! assert_eq!(speller.convert(1234, &config).unwrap(), "ألف و مئتان و أربعة و ثلاثون");
//! assert_eq!(speller.to_arabic_indic(2014), "٢٠١٤");
//! ```

pub mod digits;
pub mod numbers;

mod error;

pub use digits::FloatFormat;
pub use error::{Result, TextProcessingError};
pub use numbers::{IntoNumeral, Lexicon, NumberSpeller, Numeral, MAX_DIGITS};
