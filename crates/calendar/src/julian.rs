//! Gregorian date to Julian Day Number
//!
//! Follows the classic Meeus-style formula. Dates up to and including
//! 1582-10-15 skip the Gregorian correction term instead of switching to the
//! proleptic Julian leap rule; this legacy shortcut is kept so historical
//! results stay identical.

/// Julian Day Number of a Gregorian date
///
/// Inputs are not validated; see [`crate::HijriConverter`] for checked use.
pub fn gregorian_to_jd(year: i32, month: u32, day: u32) -> i64 {
    let mut year = i64::from(year);
    let mut month = i64::from(month);
    let day = i64::from(day);

    // January and February count as months 13 and 14 of the prior year
    if month < 3 {
        year -= 1;
        month += 12;
    }

    let b = if year < 1582
        || (year == 1582 && month < 10)
        || (year == 1582 && month == 10 && day <= 15)
    {
        0
    } else {
        let a = year.div_euclid(100);
        2 - a + a.div_euclid(4)
    };

    let jd = (365.25 * (year + 4716) as f64).floor() + (30.6001 * (month + 1) as f64).floor()
        + (day + b) as f64
        - 1524.5;

    jd.round() as i64
}
