//! Pay-run loading functionality.
//!
//! This module provides the [`PayrunLoader`] type for loading a pay run
//! from YAML files.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::calculation::generate_payslips;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeDetails, EmployeePayslip};

use super::types::{EmployeeEntry, EmployeesConfig, PayrunConfig, PayrunMetadata};

/// Loads and provides access to a pay run.
///
/// # Directory Structure
///
/// ```text
/// config/payruns/2021-03/
/// ├── payrun.yaml     # Run name and pay period
/// └── employees.yaml  # Employees to pay
/// ```
///
/// Pay period dates are not validated at load time; an invalid period is
/// reported when payslips are generated.
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::PayrunLoader;
///
/// let loader = PayrunLoader::load("./config/payruns/2021-03")?;
/// for payslip in loader.generate_payslips()? {
///     println!("{} {}: {}", payslip.first_name, payslip.last_name, payslip.net_income);
/// }
/// # Ok::<(), payslip_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrunLoader {
    config: PayrunConfig,
}

impl PayrunLoader {
    /// Loads a pay run from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the pay-run directory (e.g., "./config/payruns/2021-03")
    ///
    /// # Returns
    ///
    /// Returns a `PayrunLoader` instance on success, or an error if:
    /// - Any required file is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or is missing a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PayrunMetadata>(&path.join("payrun.yaml"))?;
        let employees = Self::load_yaml::<EmployeesConfig>(&path.join("employees.yaml"))?;

        info!(
            payrun = %metadata.name,
            start = %metadata.payment_start_date,
            end = %metadata.payment_end_date,
            employees = employees.employees.len(),
            "Loaded pay run"
        );

        Ok(Self {
            config: PayrunConfig::new(metadata, employees.employees),
        })
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

    /// Returns the pay-run metadata.
    pub fn payrun(&self) -> &PayrunMetadata {
        self.config.payrun()
    }

    /// Returns the employees in file order.
    pub fn employees(&self) -> &[EmployeeEntry] {
        self.config.employees()
    }

    /// Returns the payslip inputs for every employee in the run.
    pub fn employee_details(&self) -> Vec<EmployeeDetails> {
        self.config.employee_details()
    }

    /// Generates a payslip for every employee in the run, in file order.
    pub fn generate_payslips(&self) -> EngineResult<Vec<EmployeePayslip>> {
        generate_payslips(&self.employee_details())
    }
}
