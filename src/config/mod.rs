//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load the deduction configuration
//! from YAML files, including the occupational-risk (ARL) rate schedule.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll").unwrap();
//! let rate = config.resolve_arl_rate(Some("class_i")).unwrap();
//! println!("ARL rate: {}", rate);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DeductionConfig, RiskClass};
