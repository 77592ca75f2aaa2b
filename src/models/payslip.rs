//! Payslip models for the payroll engine.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture all outputs from a net-pay calculation, including itemized
//! earnings, bonuses, deductions, and aggregated totals.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayScheme;

/// The pay concept a payslip line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayComponent {
    /// Fixed monthly salary (salaried and temporary schemes).
    BasePay,
    /// Hours paid at the base hourly rate.
    RegularHours,
    /// Hours beyond the regular limit, paid at the overtime multiplier.
    Overtime,
    /// Fixed base salary of a commission employee.
    BaseSalary,
    /// Commission earned on sales.
    Commission,
    /// Seniority bonus for long-tenured salaried employees.
    SeniorityBonus,
    /// High-sales bonus for commission employees.
    SalesBonus,
    /// Fixed monthly food allowance.
    FoodAllowance,
    /// Savings-fund benefit for eligible hourly employees.
    SavingsFund,
    /// Social security and pension deduction.
    SocialSecurity,
    /// Occupational-risk (ARL) deduction.
    OccupationalRisk,
}

/// A single line item in a payslip.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayComponent, PayslipLine};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = PayslipLine {
///     component: PayComponent::FoodAllowance,
///     description: "Monthly food allowance".to_string(),
///     amount: Decimal::from_str("1000000").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipLine {
    /// The pay concept this line represents.
    pub component: PayComponent,
    /// Human-readable description of the line.
    pub description: String,
    /// The amount for this line. Deduction lines carry positive amounts;
    /// their sign is implied by the section they appear in.
    pub amount: Decimal,
}

/// Aggregated totals for a payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipTotals {
    /// Pay before bonuses and deductions.
    pub gross_pay: Decimal,
    /// Total bonus amount (may be zero).
    pub bonuses_total: Decimal,
    /// Savings-fund benefit, kept outside the deduction basis.
    pub savings_fund: Decimal,
    /// Total mandatory deductions.
    pub deductions_total: Decimal,
    /// Final net pay, never negative.
    pub net_pay: Decimal,
}

/// The complete, itemized result of a net-pay calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayScheme, Payslip, PayslipTotals};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let payslip = Payslip {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "1.0.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     employee_name: "Juan Perez".to_string(),
///     scheme: PayScheme::Salaried,
///     as_of: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     earnings: vec![],
///     benefits: vec![],
///     deductions: vec![],
///     totals: PayslipTotals {
///         gross_pay: Decimal::ZERO,
///         bonuses_total: Decimal::ZERO,
///         savings_fund: Decimal::ZERO,
///         deductions_total: Decimal::ZERO,
///         net_pay: Decimal::ZERO,
///     },
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The ID of the employee the payslip is for.
    pub employee_id: String,
    /// The name of the employee the payslip is for.
    pub employee_name: String,
    /// The compensation scheme the employee is paid under.
    pub scheme: PayScheme,
    /// The date tenure-dependent rules were evaluated against.
    pub as_of: NaiveDate,
    /// Earning lines making up gross pay.
    pub earnings: Vec<PayslipLine>,
    /// Bonus and benefit lines (the savings fund appears here, though it is
    /// tracked separately in the totals).
    pub benefits: Vec<PayslipLine>,
    /// Mandatory deduction lines.
    pub deductions: Vec<PayslipLine>,
    /// Aggregated totals.
    pub totals: PayslipTotals,
}
