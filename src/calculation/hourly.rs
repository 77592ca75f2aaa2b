//! Hourly-scheme calculation rules.
//!
//! Hourly employees are paid per hour worked, with hours beyond the regular
//! limit paid at the overtime multiplier. They receive no bonuses; eligible
//! employees who opted in receive a savings-fund benefit of 2% of gross,
//! which is not salary and is excluded from the deduction basis.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EmployeeProfile, HourlyEmployee};

use super::Compensation;

/// Hours per pay period paid at the base rate.
pub const REGULAR_HOURS_LIMIT: Decimal = Decimal::from_parts(40, 0, 0, false, 0);

/// Multiplier applied to the base rate for overtime hours.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(15, 0, 0, false, 1);

/// Savings-fund contribution rate: 2% of gross pay.
pub const SAVINGS_FUND_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Years of service that must be exceeded for savings-fund eligibility.
pub const SAVINGS_FUND_MIN_YEARS: u32 = 1;

/// The split of worked hours into regular and overtime portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoursSplit {
    /// Hours paid at the base rate (capped at [`REGULAR_HOURS_LIMIT`]).
    pub regular: Decimal,
    /// Hours beyond the limit, paid at the overtime multiplier.
    pub overtime: Decimal,
}

/// Splits worked hours into regular and overtime portions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::split_hours;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let split = split_hours(Decimal::from_str("45").unwrap());
/// assert_eq!(split.regular, Decimal::from_str("40").unwrap());
/// assert_eq!(split.overtime, Decimal::from_str("5").unwrap());
/// ```
pub fn split_hours(hours_worked: Decimal) -> HoursSplit {
    if hours_worked > REGULAR_HOURS_LIMIT {
        HoursSplit {
            regular: REGULAR_HOURS_LIMIT,
            overtime: hours_worked - REGULAR_HOURS_LIMIT,
        }
    } else {
        HoursSplit {
            regular: hours_worked,
            overtime: Decimal::ZERO,
        }
    }
}

/// Computes the savings-fund benefit for an hourly employee.
///
/// The fund is 2% of gross pay, granted only when the employee has completed
/// more than [`SAVINGS_FUND_MIN_YEARS`] years of service and opted in.
pub fn savings_fund(gross: Decimal, years_of_service: u32, accepts_savings_fund: bool) -> Decimal {
    if accepts_savings_fund && years_of_service > SAVINGS_FUND_MIN_YEARS {
        gross * SAVINGS_FUND_RATE
    } else {
        Decimal::ZERO
    }
}

impl Compensation for HourlyEmployee {
    fn profile(&self) -> &EmployeeProfile {
        self.profile()
    }

    fn gross_pay(&self) -> Decimal {
        let split = split_hours(self.hours_worked());
        let regular_pay = split.regular * self.hourly_rate();
        let overtime_pay = split.overtime * self.hourly_rate() * OVERTIME_MULTIPLIER;
        regular_pay + overtime_pay
    }

    fn bonuses(&self, _as_of: NaiveDate) -> Decimal {
        // No bonuses or food allowance for the hourly scheme
        Decimal::ZERO
    }

    fn savings_fund(&self, as_of: NaiveDate) -> Decimal {
        let years = self.profile().years_of_service(as_of);
        savings_fund(self.gross_pay(), years, self.accepts_savings_fund())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn employee(hired: NaiveDate, rate: &str, hours: &str, accepts: bool) -> HourlyEmployee {
        let profile = EmployeeProfile::new("emp_003", "Carlos Rodriguez", hired, None).unwrap();
        HourlyEmployee::new(profile, dec(rate), dec(hours), accepts).unwrap()
    }

    /// HR-001: 45 hours splits into 40 regular and 5 overtime
    #[test]
    fn test_split_hours_with_overtime() {
        let split = split_hours(dec("45"));
        assert_eq!(split.regular, dec("40"));
        assert_eq!(split.overtime, dec("5"));
    }

    /// HR-002: at or under the limit there is no overtime
    #[test]
    fn test_split_hours_without_overtime() {
        let at_limit = split_hours(dec("40"));
        assert_eq!(at_limit.regular, dec("40"));
        assert_eq!(at_limit.overtime, Decimal::ZERO);

        let under_limit = split_hours(dec("35"));
        assert_eq!(under_limit.regular, dec("35"));
        assert_eq!(under_limit.overtime, Decimal::ZERO);
    }

    /// HR-003: worked example — 45 hours at 20,000
    #[test]
    fn test_worked_example_gross_pay() {
        let employee = employee(date(2022, 3, 10), "20000", "45", true);

        // regular 800,000 + overtime 5 * 20,000 * 1.5 = 150,000
        assert_eq!(employee.gross_pay(), dec("950000.0"));
    }

    /// HR-004: no bonuses for the hourly scheme
    #[test]
    fn test_no_bonuses() {
        let employee = employee(date(2015, 1, 1), "20000", "45", true);
        assert_eq!(employee.bonuses(date(2024, 6, 1)), Decimal::ZERO);
    }

    /// HR-005: savings fund requires tenure and acceptance
    #[test]
    fn test_savings_fund_eligibility() {
        let as_of = date(2024, 6, 1);

        // Tenure and acceptance: 2% of 950,000
        let eligible = employee(date(2022, 3, 10), "20000", "45", true);
        assert_eq!(Compensation::savings_fund(&eligible, as_of), dec("19000.000"));

        // Tenure but declined
        let declined = employee(date(2022, 3, 10), "20000", "45", false);
        assert_eq!(Compensation::savings_fund(&declined, as_of), Decimal::ZERO);

        // Accepted but not enough tenure
        let recent = employee(date(2023, 8, 1), "20000", "45", true);
        assert_eq!(Compensation::savings_fund(&recent, as_of), Decimal::ZERO);
    }

    /// HR-006: exactly one year of service is not eligible
    #[test]
    fn test_savings_fund_at_exactly_one_year() {
        let employee = employee(date(2023, 6, 1), "20000", "40", true);
        let as_of = date(2024, 6, 1);

        assert_eq!(employee.profile().years_of_service(as_of), 1);
        assert_eq!(Compensation::savings_fund(&employee, as_of), Decimal::ZERO);
    }

    /// HR-007: worked example — net pay with and without the fund
    #[test]
    fn test_worked_example_net_pay() {
        let as_of = date(2024, 6, 1);

        // gross 950,000; deductions 38,000; no fund
        let without_fund = employee(date(2024, 1, 10), "20000", "45", false);
        assert_eq!(without_fund.net_pay(as_of, Decimal::ZERO), dec("912000.0"));

        // Same pay plus the 19,000 fund
        let with_fund = employee(date(2022, 3, 10), "20000", "45", true);
        assert_eq!(with_fund.net_pay(as_of, Decimal::ZERO), dec("931000.0"));
    }

    /// HR-008: the fund is excluded from the deduction basis
    #[test]
    fn test_fund_not_subject_to_deductions() {
        let employee = employee(date(2022, 3, 10), "20000", "45", true);
        let gross = employee.gross_pay();

        // Deductions are computed on gross only
        assert_eq!(
            employee.statutory_deductions(gross, Decimal::ZERO),
            dec("38000.000")
        );
    }

    #[test]
    fn test_zero_hours_zero_gross() {
        let employee = employee(date(2022, 3, 10), "20000", "0", true);
        assert_eq!(employee.gross_pay(), Decimal::ZERO);
    }

    #[test]
    fn test_constants() {
        assert_eq!(REGULAR_HOURS_LIMIT, dec("40"));
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.5"));
        assert_eq!(SAVINGS_FUND_RATE, dec("0.02"));
    }
}
