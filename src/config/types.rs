//! Pay-run configuration types.
//!
//! This module contains the strongly-typed structures that are deserialized
//! from a pay-run directory's YAML files.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::EmployeeDetails;

/// Metadata about a pay run, read from `payrun.yaml`.
///
/// Every employee in the run is paid for the same period.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrunMetadata {
    /// A human-readable name for the run (e.g., "March 2021").
    pub name: String,
    /// First day of the pay period (inclusive).
    pub payment_start_date: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub payment_end_date: NaiveDate,
}

/// One employee listed in `employees.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeeEntry {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual gross salary.
    pub annual_salary: Decimal,
    /// Superannuation rate as a fraction.
    pub super_rate: Decimal,
}

/// Employees file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct EmployeesConfig {
    /// The employees to pay, in payslip order.
    pub employees: Vec<EmployeeEntry>,
}

/// A complete pay run loaded from YAML files.
#[derive(Debug, Clone)]
pub struct PayrunConfig {
    metadata: PayrunMetadata,
    employees: Vec<EmployeeEntry>,
}

impl PayrunConfig {
    /// Creates a new PayrunConfig from its component parts.
    pub fn new(metadata: PayrunMetadata, employees: Vec<EmployeeEntry>) -> Self {
        Self {
            metadata,
            employees,
        }
    }

    /// Returns the pay-run metadata.
    pub fn payrun(&self) -> &PayrunMetadata {
        &self.metadata
    }

    /// Returns the employees in file order.
    pub fn employees(&self) -> &[EmployeeEntry] {
        &self.employees
    }

    /// Combines each employee with the run's pay period.
    pub fn employee_details(&self) -> Vec<EmployeeDetails> {
        self.employees
            .iter()
            .map(|entry| EmployeeDetails {
                first_name: entry.first_name.clone(),
                last_name: entry.last_name.clone(),
                annual_salary: entry.annual_salary,
                super_rate: entry.super_rate,
                payment_start_date: self.metadata.payment_start_date,
                payment_end_date: self.metadata.payment_end_date,
            })
            .collect()
    }
}
