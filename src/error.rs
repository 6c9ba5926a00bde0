//! Error types for the Payslip Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while calculating tax and payslips.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Broad classification of an [`EngineError`].
///
/// Callers that only need to distinguish bad input from a defect in the
/// engine can match on this instead of on individual variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied a value that violates an input constraint.
    InvalidInput,
    /// The engine's own static data is inconsistent.
    Internal,
    /// A pay-run input file was missing or malformed.
    Config,
}

/// The main error type for the Payslip Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::{EngineError, ErrorKind};
/// use rust_decimal::Decimal;
///
/// let error = EngineError::NegativeGrossIncome {
///     gross_income: Decimal::new(-1, 0),
/// };
/// assert_eq!(error.to_string(), "Gross income must not be negative, got -1");
/// assert_eq!(error.kind(), ErrorKind::InvalidInput);
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// Gross income passed to the tax calculator was below zero.
    #[error("Gross income must not be negative, got {gross_income}")]
    NegativeGrossIncome {
        /// The rejected gross income.
        gross_income: Decimal,
    },

    /// The pay period starts after it ends.
    #[error("Pay period start {start} is after its end {end}")]
    PeriodStartAfterEnd {
        /// The requested start date.
        start: NaiveDate,
        /// The requested end date.
        end: NaiveDate,
    },

    /// The pay period does not start on the first day of a month.
    #[error("Pay period must start on the first day of a month, got {date}")]
    PeriodStartNotFirstOfMonth {
        /// The rejected start date.
        date: NaiveDate,
    },

    /// The pay period does not end on the last day of a month.
    #[error("Pay period must end on the last day of a month, got {date}")]
    PeriodEndNotLastOfMonth {
        /// The rejected end date.
        date: NaiveDate,
    },

    /// A prorated or derived amount exceeded the range of a decimal.
    #[error("Amount {amount} is too large to calculate a payslip for")]
    AmountOverflow {
        /// The amount whose calculation overflowed.
        amount: Decimal,
    },

    /// No bracket in the tax table covered a non-negative income.
    #[error("No tax bracket covers gross income {gross_income}")]
    NoTaxBracket {
        /// The income that could not be placed in a bracket.
        gross_income: Decimal,
    },

    /// Pay-run file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Pay-run file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Returns the broad category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::NegativeGrossIncome { .. }
            | EngineError::PeriodStartAfterEnd { .. }
            | EngineError::PeriodStartNotFirstOfMonth { .. }
            | EngineError::PeriodEndNotLastOfMonth { .. }
            | EngineError::AmountOverflow { .. } => ErrorKind::InvalidInput,
            EngineError::NoTaxBracket { .. } => ErrorKind::Internal,
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ErrorKind::Config
            }
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
