//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! endpoint and their fallible conversion into validated domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{
    CommissionEmployee, Employee, EmployeeProfile, HourlyEmployee, SalariedEmployee,
    TemporaryEmployee,
};

/// Request body for the `/calculate` endpoint.
///
/// Contains the employee to calculate a payslip for and an optional
/// evaluation date for tenure-dependent rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The employee information, tagged by compensation scheme.
    pub employee: EmployeeRequest,
    /// The date tenure-dependent rules are evaluated against.
    /// Defaults to the current date when omitted.
    #[serde(default)]
    pub as_of: Option<NaiveDate>,
}

/// Employee information in a calculation request, tagged by scheme.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "scheme", rename_all = "snake_case")]
pub enum EmployeeRequest {
    /// A salaried employee.
    Salaried(SalariedRequest),
    /// An hourly employee.
    Hourly(HourlyRequest),
    /// A commission employee.
    Commission(CommissionRequest),
    /// A temporary employee.
    Temporary(TemporaryRequest),
}

/// Salaried employee fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalariedRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional occupational-risk class code.
    #[serde(default)]
    pub risk_class: Option<String>,
    /// The fixed monthly salary.
    pub monthly_salary: Decimal,
}

/// Hourly employee fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional occupational-risk class code.
    #[serde(default)]
    pub risk_class: Option<String>,
    /// The base rate paid per hour.
    pub hourly_rate: Decimal,
    /// The hours worked in the pay period.
    pub hours_worked: Decimal,
    /// Whether the employee opted into the savings fund.
    #[serde(default)]
    pub accepts_savings_fund: bool,
}

/// Commission employee fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommissionRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional occupational-risk class code.
    #[serde(default)]
    pub risk_class: Option<String>,
    /// The fixed base salary.
    pub base_salary: Decimal,
    /// The commission rate as a fraction (e.g. `0.05` for 5%).
    pub commission_rate: Decimal,
    /// The total sales for the pay period.
    pub sales_amount: Decimal,
}

/// Temporary employee fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporaryRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// The date the employee was hired.
    pub hire_date: NaiveDate,
    /// Optional occupational-risk class code.
    #[serde(default)]
    pub risk_class: Option<String>,
    /// The fixed monthly salary.
    pub monthly_salary: Decimal,
    /// The date the contract ends (inclusive).
    pub contract_end_date: NaiveDate,
}

impl TryFrom<EmployeeRequest> for Employee {
    type Error = EngineError;

    fn try_from(req: EmployeeRequest) -> Result<Self, Self::Error> {
        match req {
            EmployeeRequest::Salaried(r) => {
                let profile = EmployeeProfile::new(r.id, r.name, r.hire_date, r.risk_class)?;
                Ok(Employee::Salaried(SalariedEmployee::new(
                    profile,
                    r.monthly_salary,
                )?))
            }
            EmployeeRequest::Hourly(r) => {
                let profile = EmployeeProfile::new(r.id, r.name, r.hire_date, r.risk_class)?;
                Ok(Employee::Hourly(HourlyEmployee::new(
                    profile,
                    r.hourly_rate,
                    r.hours_worked,
                    r.accepts_savings_fund,
                )?))
            }
            EmployeeRequest::Commission(r) => {
                let profile = EmployeeProfile::new(r.id, r.name, r.hire_date, r.risk_class)?;
                Ok(Employee::Commission(CommissionEmployee::new(
                    profile,
                    r.base_salary,
                    r.commission_rate,
                    r.sales_amount,
                )?))
            }
            EmployeeRequest::Temporary(r) => {
                let profile = EmployeeProfile::new(r.id, r.name, r.hire_date, r.risk_class)?;
                Ok(Employee::Temporary(TemporaryEmployee::new(
                    profile,
                    r.monthly_salary,
                    r.contract_end_date,
                )?))
            }
        }
    }
}
