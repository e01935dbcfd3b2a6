//! Calendar stepping for schedule expansion
//!
//! Occurrence dates are always computed from the original start date with a
//! step multiplier, never iteratively from the previous occurrence. A
//! monthly schedule anchored on the 31st therefore clamps to the last day
//! of shorter months and returns to the 31st when the month is long enough.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::Frequency;

/// The date of occurrence `k` of a schedule starting at `start`
///
/// Occurrence 0 is the start date itself. For one-time schedules every
/// step lands on the start date.
pub fn occurrence_date(start: NaiveDate, frequency: Frequency, k: u32) -> NaiveDate {
    match frequency {
        Frequency::OneTime => start,
        Frequency::Weekly => start + Duration::weeks(k as i64),
        Frequency::Monthly => add_months(start, k),
        Frequency::Yearly => add_years(start, k),
    }
}

/// `anchor` moved forward by whole months, day clamped to the target month
pub fn add_months(anchor: NaiveDate, months: u32) -> NaiveDate {
    let mut year = anchor.year();
    let mut month = anchor.month() as i32 + months as i32;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    let day = anchor.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

/// `anchor` moved forward by whole years, Feb 29 clamped off leap years
pub fn add_years(anchor: NaiveDate, years: u32) -> NaiveDate {
    let year = anchor.year() + years as i32;
    let day = anchor.day().min(days_in_month(year, anchor.month()));
    NaiveDate::from_ymd_opt(year, anchor.month(), day).unwrap()
}

/// Number of days in a calendar month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1).unwrap();
    (first_of_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_add_months_plain() {
        assert_eq!(add_months(date(2024, 1, 15), 1), date(2024, 2, 15));
        assert_eq!(add_months(date(2024, 1, 15), 2), date(2024, 3, 15));
        assert_eq!(add_months(date(2024, 1, 15), 0), date(2024, 1, 15));
    }

    #[test]
    fn test_add_months_across_years() {
        assert_eq!(add_months(date(2024, 11, 5), 3), date(2025, 2, 5));
        assert_eq!(add_months(date(2024, 1, 5), 25), date(2026, 2, 5));
    }

    #[test]
    fn test_add_months_clamps_then_recovers() {
        let anchor = date(2024, 1, 31);
        // February clamps to its last day, March returns to the 31st
        assert_eq!(add_months(anchor, 1), date(2024, 2, 29));
        assert_eq!(add_months(anchor, 2), date(2024, 3, 31));
        assert_eq!(add_months(anchor, 3), date(2024, 4, 30));

        // Off leap years February clamps to the 28th
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
    }

    #[test]
    fn test_add_years() {
        assert_eq!(add_years(date(2024, 3, 10), 1), date(2025, 3, 10));
        assert_eq!(add_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(add_years(date(2024, 2, 29), 4), date(2028, 2, 29));
    }

    #[test]
    fn test_occurrence_date() {
        let start = date(2024, 1, 15);
        assert_eq!(occurrence_date(start, Frequency::OneTime, 0), start);
        assert_eq!(
            occurrence_date(start, Frequency::Weekly, 2),
            date(2024, 1, 29)
        );
        assert_eq!(
            occurrence_date(start, Frequency::Monthly, 2),
            date(2024, 3, 15)
        );
        assert_eq!(
            occurrence_date(start, Frequency::Yearly, 1),
            date(2025, 1, 15)
        );
    }
}
