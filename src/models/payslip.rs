//! Payslip output model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A generated payslip for one employee and pay period.
///
/// The four monetary fields are whole currency units. `net_income` is always
/// `gross_income - income_tax`.
///
/// # Example
///
/// ```
/// use payslip_engine::models::EmployeePayslip;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let payslip = EmployeePayslip {
///     first_name: "David".to_string(),
///     last_name: "Rudd".to_string(),
///     payment_start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
///     payment_end_date: NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
///     gross_income: Decimal::new(5004, 0),
///     income_tax: Decimal::new(922, 0),
///     net_income: Decimal::new(4082, 0),
///     superannuation: Decimal::new(450, 0),
/// };
/// assert_eq!(payslip.net_income + payslip.income_tax, payslip.gross_income);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeePayslip {
    /// The employee's first name, as supplied.
    pub first_name: String,
    /// The employee's last name, as supplied.
    pub last_name: String,
    /// First day of the pay period, as supplied.
    pub payment_start_date: NaiveDate,
    /// Last day of the pay period, as supplied.
    pub payment_end_date: NaiveDate,
    /// Gross income for the period, rounded down.
    pub gross_income: Decimal,
    /// Income tax withheld for the period, rounded up.
    pub income_tax: Decimal,
    /// Gross income less income tax.
    pub net_income: Decimal,
    /// Superannuation contribution, rounded down.
    #[serde(rename = "super")]
    pub superannuation: Decimal,
}
