//! Employee input model.
//!
//! This module defines [`EmployeeDetails`], the value a caller supplies to
//! generate a payslip.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The details needed to generate a payslip for one employee and pay period.
///
/// Identity fields are opaque and not validated. `super_rate` is expected to
/// lie in `[0, 1]`; values outside that range are reported as audit warnings
/// but still used as given.
///
/// # Example
///
/// ```
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
/// assert_eq!(details.full_name(), "David Rudd");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDetails {
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// Annual gross salary in whole or fractional currency units.
    pub annual_salary: Decimal,
    /// Superannuation rate as a fraction of gross income (e.g. 0.09 for 9%).
    pub super_rate: Decimal,
    /// First day of the pay period (inclusive).
    pub payment_start_date: NaiveDate,
    /// Last day of the pay period (inclusive).
    pub payment_end_date: NaiveDate,
}

impl EmployeeDetails {
    /// Returns the first and last name joined by a space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_employee_details() {
        let json = r#"{
            "first_name": "Ryan",
            "last_name": "Chen",
            "annual_salary": "120000",
            "super_rate": "0.10",
            "payment_start_date": "2021-03-01",
            "payment_end_date": "2021-03-31"
        }"#;

        let details: EmployeeDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.first_name, "Ryan");
        assert_eq!(details.last_name, "Chen");
        assert_eq!(details.annual_salary, dec("120000"));
        assert_eq!(details.super_rate, dec("0.10"));
        assert_eq!(
            details.payment_start_date,
            NaiveDate::from_ymd_opt(2021, 3, 1).unwrap()
        );
        assert_eq!(
            details.payment_end_date,
            NaiveDate::from_ymd_opt(2021, 3, 31).unwrap()
        );
    }

    #[test]
    fn test_deserialize_rejects_missing_salary() {
        let json = r#"{
            "first_name": "Ryan",
            "last_name": "Chen",
            "super_rate": "0.10",
            "payment_start_date": "2021-03-01",
            "payment_end_date": "2021-03-31"
        }"#;

        let result: Result<EmployeeDetails, _> = serde_json::from_str(json);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("annual_salary"));
    }

    #[test]
    fn test_serialize_employee_details_uses_string_decimals() {
        let details = EmployeeDetails {
            first_name: "David".to_string(),
            last_name: "Rudd".to_string(),
            annual_salary: dec("60050"),
            super_rate: dec("0.09"),
            payment_start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            payment_end_date: NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
        };

        let json = serde_json::to_string(&details).unwrap();
        assert!(json.contains("\"annual_salary\":\"60050\""));
        assert!(json.contains("\"super_rate\":\"0.09\""));
        assert!(json.contains("\"payment_start_date\":\"2021-03-01\""));
    }

    #[test]
    fn test_full_name() {
        let details = EmployeeDetails {
            first_name: "Ryan".to_string(),
            last_name: "Chen".to_string(),
            annual_salary: dec("120000"),
            super_rate: dec("0.10"),
            payment_start_date: NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
            payment_end_date: NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
        };
        assert_eq!(details.full_name(), "Ryan Chen");
    }
}
