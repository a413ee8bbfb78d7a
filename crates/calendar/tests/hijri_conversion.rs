//! Gregorian to Hijri conversion over real date ranges

use arabic_calendar::{gregorian_to_jd, jd_to_hijri, CalendarError, HijriConverter};
use arabic_config::CalendarSettings;
use arabic_core::{GregorianDate, HijriDate};
use chrono::NaiveDate;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_published_vectors() {
    init_tracing();
    assert_eq!(gregorian_to_jd(2014, 12, 12), 2457004);
    assert_eq!(gregorian_to_jd(1581, 2, 12), 2298561);

    let converter = HijriConverter::new();
    assert_eq!(
        converter.convert_date(GregorianDate::new(2014, 12, 12)).unwrap(),
        HijriDate::new(1436, 2, 19)
    );
    assert_eq!(
        converter.convert(2014, 12, 12).unwrap().to_string(),
        "1436-02-19"
    );
}

#[test]
fn test_days_advance_monotonically() {
    let converter = HijriConverter::new();
    let mut date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2100, 1, 1).unwrap();
    let mut previous = converter.convert_naive_date(date);

    while date < end {
        date = date.succ_opt().unwrap();
        let current = converter.convert_naive_date(date);

        assert!(current > previous, "{} -> {} at {}", previous, current, date);
        assert!((1..=12).contains(&current.month), "month out of range at {}", date);
        assert!((1..=30).contains(&current.day), "day out of range at {}", date);

        previous = current;
    }
}

#[test]
fn test_strict_and_unchecked_agree_on_valid_dates() {
    let strict = HijriConverter::new();
    let unchecked = HijriConverter::unchecked();

    for (year, month, day) in [(1999, 12, 31), (2000, 2, 29), (2024, 3, 11), (1583, 1, 1)] {
        assert_eq!(
            strict.convert(year, month, day),
            unchecked.convert(year, month, day)
        );
    }
}

#[test]
fn test_settings_select_validation() {
    init_tracing();
    let lenient = HijriConverter::from_settings(&CalendarSettings { strict: false });
    assert!(lenient.convert(2014, 2, 30).is_ok());

    let strict = HijriConverter::from_settings(&CalendarSettings::default());
    let err = strict.convert(2014, 2, 30).unwrap_err();
    assert_eq!(
        err,
        CalendarError::InvalidCalendarDate {
            year: 2014,
            month: 2,
            day: 30
        }
    );
    assert_eq!(err.to_string(), "Invalid Gregorian date: 2014-02-30");

    let core: arabic_core::Error = err.into();
    assert!(matches!(core, arabic_core::Error::Calendar(_)));
}

#[test]
fn test_thirty_year_cycle() {
    // 10631 days advance the tabular calendar by exactly 30 years
    let start = jd_to_hijri(2457004);
    let later = jd_to_hijri(2457004 + 10631);
    assert_eq!(later, HijriDate::new(start.year + 30, start.month, start.day));
}
