//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payslip;

pub use employee::{
    CommissionEmployee, Employee, EmployeeProfile, HourlyEmployee, PayScheme, SalariedEmployee,
    TemporaryEmployee,
};
pub use payslip::{PayComponent, Payslip, PayslipLine, PayslipTotals};
