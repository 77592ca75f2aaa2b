//! Salaried-scheme calculation rules.
//!
//! Salaried employees earn a fixed monthly salary, a seniority bonus of 10%
//! of the salary once they have completed more than five years of service,
//! and the fixed monthly food allowance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EmployeeProfile, SalariedEmployee};

use super::Compensation;

/// Fixed monthly food allowance paid to salaried and commission employees.
pub const FOOD_ALLOWANCE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Seniority bonus rate: 10% of the monthly salary.
pub const SENIORITY_BONUS_RATE: Decimal = Decimal::from_parts(10, 0, 0, false, 2);

/// Years of service that must be exceeded before the seniority bonus applies.
pub const SENIORITY_BONUS_MIN_YEARS: u32 = 5;

/// Computes the seniority bonus for a salaried employee.
///
/// The bonus is 10% of the monthly salary once the employee has completed
/// more than [`SENIORITY_BONUS_MIN_YEARS`] years of service, zero otherwise.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::seniority_bonus;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let salary = Decimal::from_str("5000000").unwrap();
/// assert_eq!(seniority_bonus(salary, 6), Decimal::from_str("500000.00").unwrap());
/// assert_eq!(seniority_bonus(salary, 5), Decimal::ZERO);
/// ```
pub fn seniority_bonus(monthly_salary: Decimal, years_of_service: u32) -> Decimal {
    if years_of_service > SENIORITY_BONUS_MIN_YEARS {
        monthly_salary * SENIORITY_BONUS_RATE
    } else {
        Decimal::ZERO
    }
}

impl Compensation for SalariedEmployee {
    fn profile(&self) -> &EmployeeProfile {
        self.profile()
    }

    fn gross_pay(&self) -> Decimal {
        self.monthly_salary()
    }

    fn bonuses(&self, as_of: NaiveDate) -> Decimal {
        let years = self.profile().years_of_service(as_of);
        seniority_bonus(self.monthly_salary(), years) + FOOD_ALLOWANCE
    }
}
