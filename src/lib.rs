//! Payslip Engine for Australian employees
//!
//! This crate calculates progressive annual income tax, the fraction of a year
//! covered by a whole-month pay period, and the resulting payslip (gross income,
//! tax withheld, net income and superannuation) for an employee.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
