//! Arabic number spelling
//!
//! - [`Lexicon`]: the static word tables
//! - [`Numeral`]: normalized decimal input
//! - [`NumberSpeller`]: the block algorithm with gender, case and
//!   cardinal/ordinal agreement

pub mod lexicon;
mod numeral;
mod speller;

pub use lexicon::{Gendered, Lexicon, ScaleWord, Word, ARABIC_INDIC_DIGITS};
pub use numeral::{IntoNumeral, Numeral, FLOAT_PRECISION};
pub use speller::{calculate_key, NumberSpeller, MAX_DIGITS};
