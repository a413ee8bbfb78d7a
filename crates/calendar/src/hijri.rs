//! Julian Day Number to tabular Hijri date

use crate::julian::gregorian_to_jd;
use crate::{CalendarError, Result};
use arabic_config::CalendarSettings;
use arabic_core::{GregorianDate, HijriDate};
use chrono::NaiveDate;

/// Julian Day of 1 Muharram 1 AH in the civil reckoning
pub const ISLAMIC_EPOCH: i64 = 1948440;

/// Days in a 30-year tabular cycle
const CYCLE_DAYS: i64 = 10631;

fn floor_div(numerator: i64, denominator: i64) -> i64 {
    numerator.div_euclid(denominator)
}

/// Hijri date for a Julian Day Number
///
/// Operation order matters: every division is a floor division and the
/// sequence must stay as is to reproduce published results.
pub fn jd_to_hijri(jd: i64) -> HijriDate {
    let jd = jd - ISLAMIC_EPOCH + 10632;
    let n = floor_div(jd - 1, CYCLE_DAYS);
    let jd = jd - CYCLE_DAYS * n + 354;

    let j = floor_div(10985 - jd, 5316) * floor_div(50 * jd, 17719)
        + floor_div(jd, 5670) * floor_div(43 * jd, 15238);

    let jd = jd
        - floor_div(30 - j, 15) * floor_div(17719 * j, 50)
        - floor_div(j, 16) * floor_div(15238 * j, 43)
        + 29;

    let month = floor_div(24 * jd, 709);
    let day = jd - floor_div(709 * month, 24);
    let year = 30 * n + j - 30;

    HijriDate::new(year as i32, month as u32, day as u32)
}

/// Gregorian to Hijri converter
///
/// A strict converter (the default) rejects triples that are not real
/// Gregorian dates. An unchecked converter accepts anything and returns
/// whatever the arithmetic yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HijriConverter {
    strict: bool,
}

impl HijriConverter {
    pub fn new() -> Self {
        Self { strict: true }
    }

    pub fn unchecked() -> Self {
        Self { strict: false }
    }

    pub fn from_settings(settings: &CalendarSettings) -> Self {
        Self {
            strict: settings.strict,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Convert a Gregorian year/month/day to a Hijri date
    pub fn convert(&self, year: i32, month: u32, day: u32) -> Result<HijriDate> {
        if self.strict && GregorianDate::new(year, month, day).to_naive_date().is_none() {
            tracing::warn!(year, month, day, "Rejecting invalid Gregorian date");
            return Err(CalendarError::InvalidCalendarDate { year, month, day });
        }

        let jd = gregorian_to_jd(year, month, day);
        let hijri = jd_to_hijri(jd);

        tracing::trace!(year, month, day, jd, hijri = %hijri, "Converted to Hijri");

        Ok(hijri)
    }

    pub fn convert_date(&self, date: GregorianDate) -> Result<HijriDate> {
        self.convert(date.year, date.month, date.day)
    }

    /// Convert an already valid date; cannot fail
    pub fn convert_naive_date(&self, date: NaiveDate) -> HijriDate {
        let date = GregorianDate::from(date);
        jd_to_hijri(gregorian_to_jd(date.year, date.month, date.day))
    }
}

impl Default for HijriConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_is_first_muharram() {
        assert_eq!(jd_to_hijri(ISLAMIC_EPOCH), HijriDate::new(1, 1, 1));
    }

    #[test]
    fn test_jd_to_hijri() {
        assert_eq!(jd_to_hijri(2457004), HijriDate::new(1436, 2, 19));
        assert_eq!(jd_to_hijri(2451545), HijriDate::new(1420, 9, 24));
    }

    #[test]
    fn test_convert() {
        let converter = HijriConverter::new();
        assert_eq!(
            converter.convert(2014, 12, 12).unwrap(),
            HijriDate::new(1436, 2, 19)
        );
    }

    #[test]
    fn test_strict_rejects_invalid_dates() {
        let converter = HijriConverter::new();
        assert_eq!(
            converter.convert(2014, 13, 1),
            Err(CalendarError::InvalidCalendarDate {
                year: 2014,
                month: 13,
                day: 1
            })
        );
        assert!(converter.convert(2015, 2, 29).is_err());
        assert!(converter.convert(2014, 4, 31).is_err());
        assert!(converter.convert(2014, 0, 10).is_err());
    }

    #[test]
    fn test_unchecked_accepts_anything() {
        let converter = HijriConverter::unchecked();
        assert!(!converter.is_strict());
        assert!(converter.convert(2014, 13, 1).is_ok());
        assert!(converter.convert(2014, 2, 31).is_ok());
    }

    #[test]
    fn test_from_settings() {
        let settings = CalendarSettings { strict: false };
        assert!(!HijriConverter::from_settings(&settings).is_strict());
        assert!(HijriConverter::from_settings(&CalendarSettings::default()).is_strict());
    }

    #[test]
    fn test_convert_naive_date() {
        let date = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        assert_eq!(
            HijriConverter::new().convert_naive_date(date),
            HijriDate::new(1420, 9, 24)
        );
    }
}
