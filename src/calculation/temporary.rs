//! Temporary-scheme calculation rules.
//!
//! Temporary employees work a fixed-term contract for a flat monthly salary.
//! The scheme pays no bonuses or benefits regardless of tenure; only the
//! shared statutory deductions apply.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{EmployeeProfile, TemporaryEmployee};

use super::Compensation;

impl Compensation for TemporaryEmployee {
    fn profile(&self) -> &EmployeeProfile {
        self.profile()
    }

    fn gross_pay(&self) -> Decimal {
        self.monthly_salary()
    }

    fn bonuses(&self, _as_of: NaiveDate) -> Decimal {
        // No bonuses or benefits for fixed-term contracts
        Decimal::ZERO
    }
}
