//! Commission-scheme calculation rules.
//!
//! Commission employees earn a base salary plus a commission on sales. High
//! sellers earn an additional 3% of sales once the pay period's sales exceed
//! the bonus threshold, and the scheme always includes the food allowance.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{CommissionEmployee, EmployeeProfile};

use super::{Compensation, FOOD_ALLOWANCE};

/// Sales that must be exceeded before the high-sales bonus applies.
pub const SALES_BONUS_THRESHOLD: Decimal = Decimal::from_parts(20_000_000, 0, 0, false, 0);

/// High-sales bonus rate: 3% of the period's sales.
pub const SALES_BONUS_RATE: Decimal = Decimal::from_parts(3, 0, 0, false, 2);

/// Computes the commission earned on sales.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::commission_amount;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let sales = Decimal::from_str("25000000").unwrap();
/// let rate = Decimal::from_str("0.05").unwrap();
/// assert_eq!(commission_amount(sales, rate), Decimal::from_str("1250000.00").unwrap());
/// ```
pub fn commission_amount(sales_amount: Decimal, commission_rate: Decimal) -> Decimal {
    sales_amount * commission_rate
}

/// Computes the high-sales bonus.
///
/// The bonus is 3% of sales once the period's sales exceed
/// [`SALES_BONUS_THRESHOLD`], zero otherwise.
pub fn sales_bonus(sales_amount: Decimal) -> Decimal {
    if sales_amount > SALES_BONUS_THRESHOLD {
        sales_amount * SALES_BONUS_RATE
    } else {
        Decimal::ZERO
    }
}

impl Compensation for CommissionEmployee {
    fn profile(&self) -> &EmployeeProfile {
        self.profile()
    }

    fn gross_pay(&self) -> Decimal {
        self.base_salary() + commission_amount(self.sales_amount(), self.commission_rate())
    }

    fn bonuses(&self, _as_of: NaiveDate) -> Decimal {
        sales_bonus(self.sales_amount()) + FOOD_ALLOWANCE
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

    fn employee(base: &str, rate: &str, sales: &str) -> CommissionEmployee {
        let profile = EmployeeProfile::new(
            "emp_005",
            "Luis Torres",
            date(2020, 5, 20),
            None,
        )
        .unwrap();
        CommissionEmployee::new(profile, dec(base), dec(rate), dec(sales)).unwrap()
    }

    /// COM-001: gross pay is base salary plus commission
    #[test]
    fn test_gross_pay_includes_commission() {
        let employee = employee("1000000", "0.05", "25000000");

        // base 1,000,000 + commission 1,250,000
        assert_eq!(employee.gross_pay(), dec("2250000.00"));
    }

    /// COM-002: sales above the threshold earn the 3% bonus
    #[test]
    fn test_sales_bonus_above_threshold() {
        let employee = employee("1000000", "0.05", "25000000");

        // 3% of 25,000,000 plus the food allowance
        assert_eq!(employee.bonuses(date(2024, 6, 1)), dec("1750000.00"));
    }

    /// COM-003: sales at or below the threshold earn no bonus
    #[test]
    fn test_no_sales_bonus_at_threshold() {
        let at_threshold = employee("2500000", "0.04", "20000000");
        assert_eq!(at_threshold.bonuses(date(2024, 6, 1)), FOOD_ALLOWANCE);

        let below = employee("2500000", "0.04", "15000000");
        assert_eq!(below.bonuses(date(2024, 6, 1)), FOOD_ALLOWANCE);
    }

    /// COM-004: worked example net pay
    #[test]
    fn test_worked_example_net_pay() {
        let employee = employee("1000000", "0.05", "25000000");

        // gross 2,250,000 + bonuses 1,750,000 - deductions 90,000
        assert_eq!(
            employee.net_pay(date(2024, 6, 1), Decimal::ZERO),
            dec("3910000")
        );
    }

    #[test]
    fn test_commission_amount_function() {
        assert_eq!(
            commission_amount(dec("25000000"), dec("0.05")),
            dec("1250000")
        );
        assert_eq!(commission_amount(Decimal::ZERO, dec("0.05")), Decimal::ZERO);
        assert_eq!(commission_amount(dec("25000000"), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_sales_bonus_function_edges() {
        assert_eq!(sales_bonus(dec("20000001")), dec("600000.03"));
        assert_eq!(sales_bonus(dec("20000000")), Decimal::ZERO);
        assert_eq!(sales_bonus(Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_constants() {
        assert_eq!(SALES_BONUS_THRESHOLD, dec("20000000"));
        assert_eq!(SALES_BONUS_RATE, dec("0.03"));
    }
}
