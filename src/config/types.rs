//! Configuration types for payroll deductions.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

/// An occupational-risk (ARL) class and its contribution rate.
///
/// The schedule is external data: classes and rates come entirely from the
/// configuration file, so a deployment can carry whatever schedule its
/// jurisdiction prescribes.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskClass {
    /// The human-readable name of the risk class.
    pub name: String,
    /// The contribution rate as a fraction of gross salary.
    pub rate: Decimal,
}

/// The deduction configuration loaded from `deductions.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct DeductionConfig {
    /// Map of risk-class code to risk class details.
    pub risk_classes: HashMap<String, RiskClass>,
}
