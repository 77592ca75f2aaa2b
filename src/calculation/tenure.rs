//! Tenure derivation.
//!
//! This module computes whole years of service from a hire date, used by
//! the seniority bonus and savings-fund eligibility rules.

use chrono::{Datelike, NaiveDate};

/// Returns the whole years of service completed between `hire_date` and
/// `as_of`.
///
/// A year counts only once its anniversary has been reached. The result is
/// floored at zero when `as_of` precedes the hire date.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::years_of_service;
/// use chrono::NaiveDate;
///
/// let hired = NaiveDate::from_ymd_opt(2018, 1, 15).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(years_of_service(hired, as_of), 6);
/// ```
pub fn years_of_service(hire_date: NaiveDate, as_of: NaiveDate) -> u32 {
    let mut years = as_of.year() - hire_date.year();

    // Not yet reached this year's anniversary
    if (as_of.month(), as_of.day()) < (hire_date.month(), hire_date.day()) {
        years -= 1;
    }

    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_full_years_after_anniversary() {
        assert_eq!(years_of_service(date(2018, 1, 15), date(2024, 6, 1)), 6);
    }

    #[test]
    fn test_year_not_counted_before_anniversary() {
        assert_eq!(years_of_service(date(2018, 6, 15), date(2024, 6, 1)), 5);
    }

    #[test]
    fn test_anniversary_day_counts() {
        assert_eq!(years_of_service(date(2018, 6, 15), date(2024, 6, 15)), 6);
    }

    #[test]
    fn test_day_before_anniversary_does_not_count() {
        assert_eq!(years_of_service(date(2018, 6, 15), date(2024, 6, 14)), 5);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(years_of_service(date(2024, 3, 1), date(2024, 3, 1)), 0);
    }

    #[test]
    fn test_under_one_year_is_zero() {
        assert_eq!(years_of_service(date(2024, 3, 1), date(2024, 12, 31)), 0);
    }

    #[test]
    fn test_as_of_before_hire_floors_at_zero() {
        assert_eq!(years_of_service(date(2024, 3, 1), date(2023, 3, 1)), 0);
    }
}
