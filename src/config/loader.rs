//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the deduction
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{DeductionConfig, RiskClass};

/// Loads and provides access to the deduction configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// resolves occupational-risk rates by risk-class code.
///
/// # Directory Structure
///
/// ```text
/// config/payroll/
/// └── deductions.yaml   # occupational-risk (ARL) rate schedule
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll").unwrap();
///
/// // Employees without a risk class contribute nothing
/// assert!(loader.resolve_arl_rate(None).unwrap().is_zero());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: DeductionConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/payroll")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if the
    /// file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let deductions_path = path.join("deductions.yaml");
        let config = Self::load_yaml::<DeductionConfig>(&deductions_path)?;

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying deduction configuration.
    pub fn config(&self) -> &DeductionConfig {
        &self.config
    }

    /// Gets a risk class by its code.
    ///
    /// # Arguments
    ///
    /// * `code` - The risk class code (e.g., "class_i")
    ///
    /// # Returns
    ///
    /// Returns the risk class if found, or `RiskClassNotFound` error.
    pub fn get_risk_class(&self, code: &str) -> EngineResult<&RiskClass> {
        self.config
            .risk_classes
            .get(code)
            .ok_or_else(|| EngineError::RiskClassNotFound {
                code: code.to_string(),
            })
    }

    /// Resolves an employee's optional risk class to an ARL rate.
    ///
    /// Employees without a risk class contribute nothing; an unknown code
    /// is an error.
    pub fn resolve_arl_rate(&self, risk_class: Option<&str>) -> EngineResult<Decimal> {
        match risk_class {
            None => Ok(Decimal::ZERO),
            Some(code) => Ok(self.get_risk_class(code)?.rate),
        }
    }
}
