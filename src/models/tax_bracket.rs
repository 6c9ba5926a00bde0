//! Progressive tax bracket model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One bracket of a progressive income tax schedule.
///
/// A bracket applies to incomes from the previous bracket's threshold
/// (inclusive) up to its own `threshold` (exclusive). `offset` is the tax
/// already owed at the previous threshold, so only the excess is taxed at
/// `rate`.
///
/// # Example
///
/// ```
/// use payslip_engine::models::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let top = TaxBracket::unbounded(Decimal::new(45, 2), Decimal::new(54547, 0));
/// assert!(top.covers(Decimal::new(1_000_000, 0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Exclusive upper bound of income for this bracket; `None` is unbounded.
    pub threshold: Option<Decimal>,
    /// Marginal rate applied to income above the previous threshold.
    pub rate: Decimal,
    /// Tax owed on all income up to the previous threshold.
    pub offset: Decimal,
}

impl TaxBracket {
    /// Creates a bracket ending (exclusively) at `threshold`.
    pub const fn bounded(threshold: Decimal, rate: Decimal, offset: Decimal) -> Self {
        Self {
            threshold: Some(threshold),
            rate,
            offset,
        }
    }

    /// Creates the final, unbounded bracket of a schedule.
    pub const fn unbounded(rate: Decimal, offset: Decimal) -> Self {
        Self {
            threshold: None,
            rate,
            offset,
        }
    }

    /// Returns true if `income` is strictly below this bracket's threshold.
    pub fn covers(&self, income: Decimal) -> bool {
        self.threshold.is_none_or(|threshold| income < threshold)
    }
}
