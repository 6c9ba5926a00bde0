//! Progressive annual income tax calculation.
//!
//! This module holds the resident tax schedule and the functions that apply
//! it to an annual gross income.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, TaxBracket};

/// The resident individual income tax schedule, sorted by ascending threshold.
///
/// | Taxable income   | Tax on this income                         |
/// |------------------|--------------------------------------------|
/// | 0 – 18,200       | Nil                                        |
/// | 18,201 – 37,000  | 19c for each $1 over 18,200                |
/// | 37,001 – 80,000  | $3,572 plus 32.5c for each $1 over 37,000  |
/// | 80,001 – 180,000 | $17,547 plus 37c for each $1 over 80,000   |
/// | 180,001 and over | $54,547 plus 45c for each $1 over 180,000  |
pub static TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::bounded(whole(18_200), Decimal::ZERO, Decimal::ZERO),
    TaxBracket::bounded(whole(37_000), scaled(19, 2), Decimal::ZERO),
    TaxBracket::bounded(whole(80_000), scaled(325, 3), whole(3_572)),
    TaxBracket::bounded(whole(180_000), scaled(37, 2), whole(17_547)),
    TaxBracket::unbounded(scaled(45, 2), whole(54_547)),
];

const fn whole(amount: u32) -> Decimal {
    scaled(amount, 0)
}

const fn scaled(digits: u32, scale: u32) -> Decimal {
    Decimal::from_parts(digits, 0, 0, false, scale)
}

/// The result of an annual tax assessment, including the bracket used and audit step.
#[derive(Debug, Clone)]
pub struct AnnualTaxResult {
    /// Annual tax owed, unrounded.
    pub annual_tax: Decimal,
    /// Index into [`TAX_BRACKETS`] of the bracket that was applied.
    pub bracket_index: usize,
    /// Threshold of the bracket below the applied one (zero for the first).
    pub previous_threshold: Decimal,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Calculates the annual income tax owed on a gross income.
///
/// No rounding is applied; the result may contain fractions of a cent.
///
/// # Errors
///
/// - [`EngineError::NegativeGrossIncome`] if `gross_income` is below zero.
/// - [`EngineError::NoTaxBracket`] if the schedule has no bracket for the
///   income, which cannot happen with [`TAX_BRACKETS`].
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_annual_tax;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = calculate_annual_tax(Decimal::new(60050, 0)).unwrap();
/// assert_eq!(tax, Decimal::from_str("11063.25").unwrap());
/// ```
pub fn calculate_annual_tax(gross_income: Decimal) -> EngineResult<Decimal> {
    assess_annual_tax(gross_income, 1).map(|result| result.annual_tax)
}

/// Assesses annual income tax and records which bracket was applied.
///
/// The brackets are scanned in ascending order; the first one whose threshold
/// is strictly greater than `gross_income` applies, and its rate is charged on
/// the income above the previous bracket's threshold.
///
/// # Arguments
///
/// * `gross_income` - Annual gross income, must not be negative
/// * `step_number` - The step number for audit trail sequencing
pub fn assess_annual_tax(gross_income: Decimal, step_number: u32) -> EngineResult<AnnualTaxResult> {
    assess_with_schedule(gross_income, &TAX_BRACKETS, step_number)
}

fn assess_with_schedule(
    gross_income: Decimal,
    brackets: &[TaxBracket],
    step_number: u32,
) -> EngineResult<AnnualTaxResult> {
    if gross_income < Decimal::ZERO {
        warn!(gross_income = %gross_income, "Rejected negative gross income");
        return Err(EngineError::NegativeGrossIncome { gross_income });
    }

    let mut previous_threshold = Decimal::ZERO;
    let mut selected = None;
    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.covers(gross_income) {
            selected = Some((index, bracket));
            break;
        }
        if let Some(threshold) = bracket.threshold {
            previous_threshold = threshold;
        }
    }

    let Some((bracket_index, bracket)) = selected else {
        return Err(EngineError::NoTaxBracket { gross_income });
    };

    let taxable_excess = gross_income - previous_threshold;
    let annual_tax = bracket.offset + taxable_excess * bracket.rate;

    debug!(
        gross_income = %gross_income,
        bracket_index,
        rate = %bracket.rate,
        annual_tax = %annual_tax,
        "Assessed annual tax"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "annual_tax".to_string(),
        rule_name: "Annual Income Tax".to_string(),
        input: serde_json::json!({
            "gross_income": gross_income.normalize().to_string()
        }),
        output: serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "bracket_index": bracket_index,
            "previous_threshold": previous_threshold.to_string(),
            "rate": bracket.rate.to_string(),
            "offset": bracket.offset.to_string()
        }),
        reasoning: format!(
            "${} + (${} - ${}) x {} = ${}",
            bracket.offset,
            gross_income.normalize(),
            previous_threshold,
            bracket.rate,
            annual_tax.normalize()
        ),
    };

    Ok(AnnualTaxResult {
        annual_tax,
        bracket_index,
        previous_threshold,
        audit_step,
    })
}
