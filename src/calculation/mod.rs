//! Calculation logic for the payroll engine.
//!
//! This module contains the [`Compensation`] contract every pay scheme
//! satisfies, the per-scheme gross-pay and bonus rules, the statutory
//! deduction rule shared by all schemes, tenure derivation, and payslip
//! assembly.

mod commission;
mod compensation;
mod deductions;
mod hourly;
mod payslip;
mod salaried;
mod temporary;
mod tenure;

pub use commission::{SALES_BONUS_RATE, SALES_BONUS_THRESHOLD, commission_amount, sales_bonus};
pub use compensation::Compensation;
pub use deductions::{SOCIAL_SECURITY_RATE, statutory_deductions};
pub use hourly::{
    HoursSplit, OVERTIME_MULTIPLIER, REGULAR_HOURS_LIMIT, SAVINGS_FUND_MIN_YEARS,
    SAVINGS_FUND_RATE, savings_fund, split_hours,
};
pub use payslip::build_payslip;
pub use salaried::{
    FOOD_ALLOWANCE, SENIORITY_BONUS_MIN_YEARS, SENIORITY_BONUS_RATE, seniority_bonus,
};
pub use tenure::years_of_service;
