//! Employee models and related types.
//!
//! This module defines the shared [`EmployeeProfile`], the four concrete
//! compensation-scheme types, and the [`Employee`] enum that unifies them
//! for dispatch and serialization.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::years_of_service;
use crate::error::{EngineError, EngineResult};

/// Identifies the compensation scheme an employee is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayScheme {
    /// Fixed monthly salary with seniority bonus and food allowance.
    Salaried,
    /// Paid per hour worked, with overtime and an optional savings fund.
    Hourly,
    /// Base salary plus commission on sales, with a high-sales bonus.
    Commission,
    /// Fixed-term contract with a flat monthly salary and no benefits.
    Temporary,
}

/// Identity and tenure data shared by every compensation scheme.
///
/// A profile is validated at construction: the id and name must be
/// non-empty and the hire date must not be in the future. Once built it
/// is immutable.
///
/// # Example
///
/// ```
/// use payroll_engine::models::EmployeeProfile;
/// use chrono::NaiveDate;
///
/// let profile = EmployeeProfile::new(
///     "emp_001",
///     "Juan Perez",
///     NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
///     None,
/// ).unwrap();
/// assert_eq!(profile.id(), "emp_001");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeProfile {
    id: String,
    name: String,
    hire_date: NaiveDate,
    risk_class: Option<String>,
}

impl EmployeeProfile {
    /// Creates a validated employee profile.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the id or name is empty,
    /// or if the hire date is after the current date.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        hire_date: NaiveDate,
        risk_class: Option<String>,
    ) -> EngineResult<Self> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "id".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if name.trim().is_empty() {
            return Err(EngineError::InvalidEmployee {
                field: "name".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if hire_date > Utc::now().date_naive() {
            return Err(EngineError::InvalidEmployee {
                field: "hire_date".to_string(),
                message: "cannot be in the future".to_string(),
            });
        }

        Ok(Self {
            id,
            name,
            hire_date,
            risk_class,
        })
    }

    /// Returns the unique employee identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the employee's full name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the date the employee was hired.
    pub fn hire_date(&self) -> NaiveDate {
        self.hire_date
    }

    /// Returns the occupational-risk class code, if one is assigned.
    pub fn risk_class(&self) -> Option<&str> {
        self.risk_class.as_deref()
    }

    /// Returns the whole years of service completed as of the given date.
    pub fn years_of_service(&self, as_of: NaiveDate) -> u32 {
        years_of_service(self.hire_date, as_of)
    }
}

/// An employee paid a fixed monthly salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalariedEmployee {
    profile: EmployeeProfile,
    monthly_salary: Decimal,
}

impl SalariedEmployee {
    /// Creates a salaried employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the monthly salary is
    /// negative.
    pub fn new(profile: EmployeeProfile, monthly_salary: Decimal) -> EngineResult<Self> {
        validate_non_negative("monthly_salary", monthly_salary)?;
        Ok(Self {
            profile,
            monthly_salary,
        })
    }

    /// Returns the shared profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }
}

/// An employee paid per hour worked in the pay period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyEmployee {
    profile: EmployeeProfile,
    hourly_rate: Decimal,
    hours_worked: Decimal,
    accepts_savings_fund: bool,
}

impl HourlyEmployee {
    /// Creates an hourly employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the hourly rate or the
    /// hours worked are negative.
    pub fn new(
        profile: EmployeeProfile,
        hourly_rate: Decimal,
        hours_worked: Decimal,
        accepts_savings_fund: bool,
    ) -> EngineResult<Self> {
        validate_non_negative("hourly_rate", hourly_rate)?;
        validate_non_negative("hours_worked", hours_worked)?;
        Ok(Self {
            profile,
            hourly_rate,
            hours_worked,
            accepts_savings_fund,
        })
    }

    /// Returns the shared profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the base rate paid per hour.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Returns the hours worked in the pay period.
    pub fn hours_worked(&self) -> Decimal {
        self.hours_worked
    }

    /// Returns whether the employee opted into the savings fund.
    pub fn accepts_savings_fund(&self) -> bool {
        self.accepts_savings_fund
    }
}

/// An employee paid a base salary plus commission on sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommissionEmployee {
    profile: EmployeeProfile,
    base_salary: Decimal,
    commission_rate: Decimal,
    sales_amount: Decimal,
}

impl CommissionEmployee {
    /// Creates a commission employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the base salary or sales
    /// amount is negative, or if the commission rate is outside `[0, 1]`.
    pub fn new(
        profile: EmployeeProfile,
        base_salary: Decimal,
        commission_rate: Decimal,
        sales_amount: Decimal,
    ) -> EngineResult<Self> {
        validate_non_negative("base_salary", base_salary)?;
        validate_non_negative("sales_amount", sales_amount)?;
        if commission_rate < Decimal::ZERO || commission_rate > Decimal::ONE {
            return Err(EngineError::InvalidEmployee {
                field: "commission_rate".to_string(),
                message: "must be between 0 and 1".to_string(),
            });
        }
        Ok(Self {
            profile,
            base_salary,
            commission_rate,
            sales_amount,
        })
    }

    /// Returns the shared profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the fixed base salary.
    pub fn base_salary(&self) -> Decimal {
        self.base_salary
    }

    /// Returns the commission rate as a fraction (e.g. `0.05` for 5%).
    pub fn commission_rate(&self) -> Decimal {
        self.commission_rate
    }

    /// Returns the total sales for the pay period.
    pub fn sales_amount(&self) -> Decimal {
        self.sales_amount
    }
}

/// An employee on a fixed-term contract with a flat monthly salary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemporaryEmployee {
    profile: EmployeeProfile,
    monthly_salary: Decimal,
    contract_end_date: NaiveDate,
}

impl TemporaryEmployee {
    /// Creates a temporary employee.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidEmployee`] if the monthly salary is
    /// negative or the contract end date is not after the hire date.
    pub fn new(
        profile: EmployeeProfile,
        monthly_salary: Decimal,
        contract_end_date: NaiveDate,
    ) -> EngineResult<Self> {
        validate_non_negative("monthly_salary", monthly_salary)?;
        if contract_end_date <= profile.hire_date() {
            return Err(EngineError::InvalidEmployee {
                field: "contract_end_date".to_string(),
                message: "must be after the hire date".to_string(),
            });
        }
        Ok(Self {
            profile,
            monthly_salary,
            contract_end_date,
        })
    }

    /// Returns the shared profile.
    pub fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    /// Returns the fixed monthly salary.
    pub fn monthly_salary(&self) -> Decimal {
        self.monthly_salary
    }

    /// Returns the date the contract ends (inclusive).
    pub fn contract_end_date(&self) -> NaiveDate {
        self.contract_end_date
    }

    /// Returns whether the contract is still active on the given date.
    pub fn is_contract_active(&self, as_of: NaiveDate) -> bool {
        as_of <= self.contract_end_date
    }

    /// Returns the days left on the contract as of the given date.
    ///
    /// Negative when the contract has already ended.
    pub fn contract_days_remaining(&self, as_of: NaiveDate) -> i64 {
        (self.contract_end_date - as_of).num_days()
    }
}

/// An employee under one of the four compensation schemes.
///
/// The variants are mutually exclusive; the enum dispatches the
/// [`Compensation`](crate::calculation::Compensation) contract to the
/// concrete scheme.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum Employee {
    /// Fixed monthly salary.
    Salaried(SalariedEmployee),
    /// Paid per hour worked.
    Hourly(HourlyEmployee),
    /// Base salary plus commission.
    Commission(CommissionEmployee),
    /// Fixed-term contract.
    Temporary(TemporaryEmployee),
}

impl Employee {
    /// Returns the scheme label for this employee.
    pub fn scheme(&self) -> PayScheme {
        match self {
            Employee::Salaried(_) => PayScheme::Salaried,
            Employee::Hourly(_) => PayScheme::Hourly,
            Employee::Commission(_) => PayScheme::Commission,
            Employee::Temporary(_) => PayScheme::Temporary,
        }
    }
}

fn validate_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidEmployee {
            field: field.to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    Ok(())
}
