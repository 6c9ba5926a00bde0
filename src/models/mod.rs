//! Core data models for the Payslip Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod audit;
mod employee;
mod payslip;
mod tax_bracket;

pub use audit::{AuditStep, AuditTrace, AuditWarning};
pub use employee::EmployeeDetails;
pub use payslip::EmployeePayslip;
pub use tax_bracket::TaxBracket;
