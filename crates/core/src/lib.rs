//! Core types shared by the Arabic text crates
//!
//! This crate provides the value types used across the workspace:
//! - Grammar knobs for number spelling (gender, case, cardinal/ordinal)
//! - Gregorian and Hijri date values
//! - Error types

pub mod calendar;
pub mod error;
pub mod grammar;

pub use calendar::{GregorianDate, HijriDate};
pub use error::{Error, Result};
pub use grammar::{Gender, GrammaticalCase, NumberMode, SpellerConfig};
