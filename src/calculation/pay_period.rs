//! Pay period fraction calculation.
//!
//! Pay periods are always a whole number of calendar months, starting on the
//! first day of a month and ending on the last day of a month. This module
//! validates a period and expresses it as a fraction of a year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// Number of months in a year, the denominator of every pay period fraction.
pub const MONTHS_PER_YEAR: u32 = 12;

/// The fraction of a year covered by a whole-month pay period.
///
/// Stored as a month count so that prorating can multiply before dividing,
/// which keeps evenly divisible amounts exact. Only a validated pay period
/// produces one, so it always covers at least one month.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_pay_period_percentage;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let march = calculate_pay_period_percentage(
///     NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(march.prorate(Decimal::new(120000, 0)).unwrap(), Decimal::new(10000, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PayPeriodFraction {
    months: u32,
}

impl PayPeriodFraction {
    pub(crate) const fn from_months(months: u32) -> Self {
        Self { months }
    }

    /// Returns the number of whole months covered.
    pub fn months(&self) -> u32 {
        self.months
    }

    /// Returns `months / 12`.
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.months) / Decimal::from(MONTHS_PER_YEAR)
    }

    /// Returns `amount * months / 12`.
    ///
    /// # Errors
    ///
    /// [`EngineError::AmountOverflow`] if `amount * months` does not fit in a
    /// `Decimal`.
    pub fn prorate(&self, amount: Decimal) -> EngineResult<Decimal> {
        amount
            .checked_mul(Decimal::from(self.months))
            .and_then(|scaled| scaled.checked_div(Decimal::from(MONTHS_PER_YEAR)))
            .ok_or(EngineError::AmountOverflow { amount })
    }
}

/// The result of a pay period assessment, including the fraction and audit step.
#[derive(Debug, Clone)]
pub struct PayPeriodResult {
    /// The fraction of a year covered by the period.
    pub fraction: PayPeriodFraction,
    /// The audit step recording this assessment.
    pub audit_step: AuditStep,
}

/// Calculates what fraction of a year the pay period from `start` to `end` covers.
///
/// Both dates are inclusive. The fraction is the number of calendar months
/// spanned divided by twelve.
///
/// # Errors
///
/// Checked in this order:
/// - [`EngineError::PeriodStartAfterEnd`] if `start` is after `end`
/// - [`EngineError::PeriodStartNotFirstOfMonth`] if `start` is not day 1
/// - [`EngineError::PeriodEndNotLastOfMonth`] if `end` is not the month's last day
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_pay_period_percentage;
/// use chrono::NaiveDate;
///
/// let fraction = calculate_pay_period_percentage(
///     NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2021, 12, 31).unwrap(),
/// )
/// .unwrap();
/// assert_eq!(fraction.months(), 12);
/// ```
pub fn calculate_pay_period_percentage(
    start: NaiveDate,
    end: NaiveDate,
) -> EngineResult<PayPeriodFraction> {
    assess_pay_period(start, end, 1).map(|result| result.fraction)
}

/// Validates a pay period and records the month count in an audit step.
pub fn assess_pay_period(
    start: NaiveDate,
    end: NaiveDate,
    step_number: u32,
) -> EngineResult<PayPeriodResult> {
    validate_period(start, end).inspect_err(|err| {
        warn!(start = %start, end = %end, error = %err, "Rejected pay period");
    })?;

    // start <= end, so the year difference is never negative
    let year_span = (end.year() - start.year()) as u32;
    let months = year_span * MONTHS_PER_YEAR + end.month() + 1 - start.month();
    let fraction = PayPeriodFraction::from_months(months);

    debug!(start = %start, end = %end, months, "Calculated pay period fraction");

    let audit_step = AuditStep {
        step_number,
        rule_id: "pay_period".to_string(),
        rule_name: "Pay Period Fraction".to_string(),
        input: serde_json::json!({
            "payment_start_date": start.to_string(),
            "payment_end_date": end.to_string()
        }),
        output: serde_json::json!({
            "months": months,
            "fraction": fraction.as_decimal().round_dp(6).normalize().to_string()
        }),
        reasoning: format!(
            "{} to {} spans {} month(s) = {}/{} of a year",
            start, end, months, months, MONTHS_PER_YEAR
        ),
    };

    Ok(PayPeriodResult {
        fraction,
        audit_step,
    })
}

fn validate_period(start: NaiveDate, end: NaiveDate) -> EngineResult<()> {
    if start > end {
        return Err(EngineError::PeriodStartAfterEnd { start, end });
    }
    if start.day() != 1 {
        return Err(EngineError::PeriodStartNotFirstOfMonth { date: start });
    }
    if !is_last_day_of_month(end) {
        return Err(EngineError::PeriodEndNotLastOfMonth { date: end });
    }
    Ok(())
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_single_month_is_one_twelfth() {
        let fraction = calculate_pay_period_percentage(date(2021, 1, 1), date(2021, 1, 31)).unwrap();
        assert_eq!(fraction, PayPeriodFraction::from_months(1));
        assert_eq!(fraction.as_decimal(), Decimal::ONE / Decimal::from(12));
    }

    #[test]
    fn test_whole_year_is_one() {
        let fraction = calculate_pay_period_percentage(date(2021, 1, 1), date(2021, 12, 31)).unwrap();
        assert_eq!(fraction.months(), 12);
        assert_eq!(fraction.as_decimal(), Decimal::ONE);
    }

    #[test]
    fn test_period_spanning_year_boundary() {
        let fraction = calculate_pay_period_percentage(date(2020, 11, 1), date(2021, 2, 28)).unwrap();
        assert_eq!(fraction.months(), 4);
    }

    #[test]
    fn test_multi_year_period_exceeds_one() {
        let fraction = calculate_pay_period_percentage(date(2020, 7, 1), date(2022, 6, 30)).unwrap();
        assert_eq!(fraction.months(), 24);
        assert_eq!(fraction.as_decimal(), Decimal::from(2));
    }

    #[test]
    fn test_leap_year_february() {
        assert!(calculate_pay_period_percentage(date(2020, 2, 1), date(2020, 2, 29)).is_ok());

        let result = calculate_pay_period_percentage(date(2020, 2, 1), date(2020, 2, 28));
        assert_eq!(
            result.unwrap_err(),
            EngineError::PeriodEndNotLastOfMonth {
                date: date(2020, 2, 28)
            }
        );
    }

    #[test]
    fn test_non_leap_year_february() {
        let fraction = calculate_pay_period_percentage(date(2021, 2, 1), date(2021, 2, 28)).unwrap();
        assert_eq!(fraction.months(), 1);
    }

    #[test]
    fn test_reversed_dates_return_error() {
        let result = calculate_pay_period_percentage(date(2021, 1, 31), date(2021, 1, 1));
        assert_eq!(
            result.unwrap_err(),
            EngineError::PeriodStartAfterEnd {
                start: date(2021, 1, 31),
                end: date(2021, 1, 1)
            }
        );
    }

    #[test]
    fn test_start_not_first_of_month_returns_error() {
        let result = calculate_pay_period_percentage(date(2021, 1, 2), date(2021, 1, 31));
        assert_eq!(
            result.unwrap_err(),
            EngineError::PeriodStartNotFirstOfMonth {
                date: date(2021, 1, 2)
            }
        );
    }

    #[test]
    fn test_end_not_last_of_month_returns_error() {
        let result = calculate_pay_period_percentage(date(2021, 1, 1), date(2021, 1, 14));
        assert_eq!(
            result.unwrap_err(),
            EngineError::PeriodEndNotLastOfMonth {
                date: date(2021, 1, 14)
            }
        );
    }

    #[test]
    fn test_ordering_checked_before_boundaries() {
        // Neither date is a month boundary, but the ordering error wins
        let err = calculate_pay_period_percentage(date(2021, 3, 15), date(2021, 2, 10)).unwrap_err();
        assert!(matches!(err, EngineError::PeriodStartAfterEnd { .. }));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_prorate_multiplies_before_dividing() {
        let one_month = PayPeriodFraction::from_months(1);
        assert_eq!(
            one_month.prorate(Decimal::from(120000)).unwrap(),
            Decimal::from(10000)
        );

        let quarter = PayPeriodFraction::from_months(3);
        assert_eq!(
            quarter.prorate(Decimal::from(60000)).unwrap(),
            Decimal::from(15000)
        );
    }

    #[test]
    fn test_prorate_overflow_returns_error() {
        let year = PayPeriodFraction::from_months(12);
        let amount = Decimal::MAX / Decimal::from(4);

        assert_eq!(
            year.prorate(amount).unwrap_err(),
            EngineError::AmountOverflow { amount }
        );
    }

    #[test]
    fn test_audit_step_records_months() {
        let result = assess_pay_period(date(2021, 3, 1), date(2021, 5, 31), 2).unwrap();
        assert_eq!(result.audit_step.step_number, 2);
        assert_eq!(result.audit_step.rule_id, "pay_period");
        assert_eq!(result.audit_step.output["months"], 3);
        assert_eq!(result.audit_step.output["fraction"], "0.25");
    }
}
