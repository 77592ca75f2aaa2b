//! The shared calculation contract for all pay schemes.
//!
//! [`Compensation`] is the capability every concrete employee type must
//! satisfy: scheme-specific gross pay and bonuses, the shared statutory
//! deduction rule, and the net-pay orchestration with its zero floor.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{Employee, EmployeeProfile};

use super::deductions;

/// The calculation contract satisfied by every compensation scheme.
///
/// New schemes implement `profile`, [`gross_pay`](Compensation::gross_pay)
/// and [`bonuses`](Compensation::bonuses); the deduction rule and the
/// net-pay orchestration are provided by the trait and only overridden when
/// a scheme genuinely deviates.
pub trait Compensation {
    /// Returns the shared identity and tenure data.
    fn profile(&self) -> &EmployeeProfile;

    /// Returns the gross pay before bonuses and deductions.
    fn gross_pay(&self) -> Decimal;

    /// Returns the total bonus amount for the scheme. May be zero.
    fn bonuses(&self, as_of: NaiveDate) -> Decimal;

    /// Returns the savings-fund benefit.
    ///
    /// Zero for every scheme except hourly employees who qualify. The fund
    /// is not a bonus: it is excluded from the deduction basis and added to
    /// net pay after the zero floor.
    fn savings_fund(&self, _as_of: NaiveDate) -> Decimal {
        Decimal::ZERO
    }

    /// Returns the mandatory deductions for the given gross salary.
    ///
    /// The shared rule deducts social security and pension at 4% of gross
    /// plus the occupational-risk rate resolved from configuration.
    fn statutory_deductions(&self, gross: Decimal, arl_rate: Decimal) -> Decimal {
        deductions::statutory_deductions(gross, arl_rate)
    }

    /// Computes the net pay: `max(0, gross + bonuses - deductions)` plus
    /// the savings-fund benefit. Never negative.
    fn net_pay(&self, as_of: NaiveDate, arl_rate: Decimal) -> Decimal {
        let gross = self.gross_pay();
        let bonuses = self.bonuses(as_of);
        let deductions = self.statutory_deductions(gross, arl_rate);

        let floored = (gross + bonuses - deductions).max(Decimal::ZERO);
        floored + self.savings_fund(as_of)
    }
}

impl Compensation for Employee {
    fn profile(&self) -> &EmployeeProfile {
        match self {
            Employee::Salaried(e) => e.profile(),
            Employee::Hourly(e) => e.profile(),
            Employee::Commission(e) => e.profile(),
            Employee::Temporary(e) => e.profile(),
        }
    }

    fn gross_pay(&self) -> Decimal {
        match self {
            Employee::Salaried(e) => e.gross_pay(),
            Employee::Hourly(e) => e.gross_pay(),
            Employee::Commission(e) => e.gross_pay(),
            Employee::Temporary(e) => e.gross_pay(),
        }
    }

    fn bonuses(&self, as_of: NaiveDate) -> Decimal {
        match self {
            Employee::Salaried(e) => e.bonuses(as_of),
            Employee::Hourly(e) => e.bonuses(as_of),
            Employee::Commission(e) => e.bonuses(as_of),
            Employee::Temporary(e) => e.bonuses(as_of),
        }
    }

    fn savings_fund(&self, as_of: NaiveDate) -> Decimal {
        match self {
            Employee::Salaried(e) => Compensation::savings_fund(e, as_of),
            Employee::Hourly(e) => Compensation::savings_fund(e, as_of),
            Employee::Commission(e) => Compensation::savings_fund(e, as_of),
            Employee::Temporary(e) => Compensation::savings_fund(e, as_of),
        }
    }
}
