//! Payroll calculation engine.
//!
//! This crate computes net pay for employees under four compensation schemes
//! (salaried, hourly, commission-based, temporary), applying scheme-specific
//! bonuses, benefits, and the statutory deductions shared by all schemes.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
