//! Payslip generation.
//!
//! Combines the annual tax assessment and the pay period fraction into a
//! payslip with whole-unit monetary fields. Gross income and super round
//! down; income tax rounds up.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, EmployeeDetails, EmployeePayslip};

use super::income_tax::assess_annual_tax;
use super::pay_period::assess_pay_period;

/// Warning code recorded when a super rate falls outside `[0, 1]`.
pub const SUPER_RATE_OUT_OF_RANGE: &str = "SUPER_RATE_OUT_OF_RANGE";

/// A generated payslip together with the audit trace that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayslipCalculation {
    /// The generated payslip.
    pub payslip: EmployeePayslip,
    /// Every decision made while generating the payslip, in order.
    pub audit_trace: AuditTrace,
}

/// Generates a payslip for an employee over their whole-month pay period.
///
/// - `gross_income = floor(annual_salary * fraction)`
/// - `income_tax = ceil(annual_tax * fraction)`
/// - `net_income = gross_income - income_tax`
/// - `superannuation = floor(gross_income * super_rate)`
///
/// # Errors
///
/// Returns any error from [`calculate_annual_tax`](super::calculate_annual_tax)
/// or [`calculate_pay_period_percentage`](super::calculate_pay_period_percentage)
/// unchanged, or [`EngineError::AmountOverflow`] if a prorated amount or the
/// super contribution does not fit in a `Decimal`. No partial payslip is
/// produced.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::generate_employee_payslip;
/// use payslip_engine::models::EmployeeDetails;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let details = EmployeeDetails {
///     first_name: "David".to_string(),
///     last_name: "Rudd".to_string(),
///     annual_salary: Decimal::new(60050, 0),
///     super_rate: Decimal::new(9, 2),
///     payment_start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///     payment_end_date: NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
/// };
///
/// let payslip = generate_employee_payslip(&details).unwrap();
/// assert_eq!(payslip.gross_income, Decimal::new(5004, 0));
/// assert_eq!(payslip.income_tax, Decimal::new(922, 0));
/// assert_eq!(payslip.net_income, Decimal::new(4082, 0));
/// assert_eq!(payslip.superannuation, Decimal::new(450, 0));
/// ```
pub fn generate_employee_payslip(details: &EmployeeDetails) -> EngineResult<EmployeePayslip> {
    calculate_payslip(details).map(|calculation| calculation.payslip)
}

/// Generates a payslip and records each step of the calculation.
pub fn calculate_payslip(details: &EmployeeDetails) -> EngineResult<PayslipCalculation> {
    let mut audit_trace = AuditTrace::default();
    let mut step_number: u32 = 1;

    let tax_result = assess_annual_tax(details.annual_salary, step_number)?;
    let annual_tax = tax_result.annual_tax;
    audit_trace.steps.push(tax_result.audit_step);
    step_number += 1;

    let period_result = assess_pay_period(
        details.payment_start_date,
        details.payment_end_date,
        step_number,
    )?;
    let fraction = period_result.fraction;
    audit_trace.steps.push(period_result.audit_step);
    step_number += 1;

    let gross_income = fraction.prorate(details.annual_salary)?.floor();
    audit_trace.steps.push(derived_step(
        step_number,
        "gross_income",
        "Gross Income",
        serde_json::json!({
            "annual_salary": details.annual_salary.normalize().to_string(),
            "months": fraction.months()
        }),
        gross_income,
        format!(
            "floor(${} x {}/12) = ${}",
            details.annual_salary.normalize(),
            fraction.months(),
            gross_income
        ),
    ));
    step_number += 1;

    let income_tax = fraction.prorate(annual_tax)?.ceil();
    audit_trace.steps.push(derived_step(
        step_number,
        "income_tax",
        "Income Tax",
        serde_json::json!({
            "annual_tax": annual_tax.normalize().to_string(),
            "months": fraction.months()
        }),
        income_tax,
        format!(
            "ceil(${} x {}/12) = ${}",
            annual_tax.normalize(),
            fraction.months(),
            income_tax
        ),
    ));
    step_number += 1;

    let net_income = gross_income - income_tax;
    audit_trace.steps.push(derived_step(
        step_number,
        "net_income",
        "Net Income",
        serde_json::json!({
            "gross_income": gross_income.to_string(),
            "income_tax": income_tax.to_string()
        }),
        net_income,
        format!("${} - ${} = ${}", gross_income, income_tax, net_income),
    ));
    step_number += 1;

    if details.super_rate < Decimal::ZERO || details.super_rate > Decimal::ONE {
        warn!(
            employee = %details.full_name(),
            super_rate = %details.super_rate,
            "Super rate outside [0, 1]"
        );
        audit_trace.warnings.push(AuditWarning {
            code: SUPER_RATE_OUT_OF_RANGE.to_string(),
            message: format!(
                "Super rate {} is outside the expected range [0, 1]",
                details.super_rate.normalize()
            ),
            severity: "medium".to_string(),
        });
    }

    let superannuation = gross_income
        .checked_mul(details.super_rate)
        .ok_or(EngineError::AmountOverflow {
            amount: gross_income,
        })?
        .floor();
    audit_trace.steps.push(derived_step(
        step_number,
        "superannuation",
        "Superannuation",
        serde_json::json!({
            "gross_income": gross_income.to_string(),
            "super_rate": details.super_rate.normalize().to_string()
        }),
        superannuation,
        format!(
            "floor(${} x {}) = ${}",
            gross_income,
            details.super_rate.normalize(),
            superannuation
        ),
    ));

    debug!(
        employee = %details.full_name(),
        months = fraction.months(),
        gross_income = %gross_income,
        income_tax = %income_tax,
        net_income = %net_income,
        superannuation = %superannuation,
        "Generated payslip"
    );

    let payslip = EmployeePayslip {
        first_name: details.first_name.clone(),
        last_name: details.last_name.clone(),
        payment_start_date: details.payment_start_date,
        payment_end_date: details.payment_end_date,
        gross_income,
        income_tax,
        net_income,
        superannuation,
    };

    Ok(PayslipCalculation {
        payslip,
        audit_trace,
    })
}

/// Generates payslips for a batch of employees, in input order.
///
/// Stops at the first employee whose payslip cannot be generated and returns
/// that error; no payslips are returned in that case.
pub fn generate_payslips(details: &[EmployeeDetails]) -> EngineResult<Vec<EmployeePayslip>> {
    let payslips = details
        .iter()
        .map(generate_employee_payslip)
        .collect::<EngineResult<Vec<_>>>()?;

    debug!(count = payslips.len(), "Generated payslip batch");
    Ok(payslips)
}

fn derived_step(
    step_number: u32,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    amount: Decimal,
    reasoning: String,
) -> AuditStep {
    let mut output = serde_json::Map::new();
    output.insert(
        rule_id.to_string(),
        serde_json::Value::String(amount.to_string()),
    );

    AuditStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output: serde_json::Value::Object(output),
        reasoning,
    }
}
