//! Pay-run loading for the Payslip Engine.
//!
//! This module provides functionality to load a pay run (a pay period plus
//! the employees to pay for it) from YAML files and generate its payslips.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::PayrunLoader;
//!
//! let loader = PayrunLoader::load("./config/payruns/2021-03").unwrap();
//! println!("Loaded pay run: {}", loader.payrun().name);
//! ```

mod loader;
mod types;

pub use loader::PayrunLoader;
pub use types::{EmployeeEntry, EmployeesConfig, PayrunConfig, PayrunMetadata};
