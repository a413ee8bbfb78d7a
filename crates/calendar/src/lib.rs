//! Gregorian to Hijri Conversion
//!
//! Converts Gregorian dates to the tabular (civil) Islamic calendar in two
//! pure numeric stages:
//! - **Julian Day**: Gregorian triple to a Julian Day Number
//! - **Hijri**: Julian Day Number to a Hijri triple (fixed epoch 1948440)
//!
//! The result is the well-known arithmetic approximation, not a date based
//! on lunar observation.
//!
//! # Example
//!
//! ```
//! use arabic_calendar::HijriConverter;
//! use arabic_core::HijriDate;
//!
//! let converter = HijriConverter::new();
//! assert_eq!(converter.convert(2014, 12, 12).unwrap(), HijriDate::new(1436, 2, 19));
//! ```

pub mod hijri;
pub mod julian;

pub use hijri::{jd_to_hijri, HijriConverter};
pub use julian::gregorian_to_jd;

use thiserror::Error;

/// Calendar errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid Gregorian date: {year:04}-{month:02}-{day:02}")]
    InvalidCalendarDate { year: i32, month: u32, day: u32 },
}

impl From<CalendarError> for arabic_core::Error {
    fn from(err: CalendarError) -> Self {
        arabic_core::Error::Calendar(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CalendarError>;
