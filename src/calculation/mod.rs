//! Calculation logic for the Payslip Engine.
//!
//! This module contains the progressive annual income tax calculation, the
//! pay period fraction calculation for whole-month periods, and payslip
//! generation that combines the two.

mod income_tax;
mod pay_period;
mod payslip;

pub use income_tax::{AnnualTaxResult, TAX_BRACKETS, assess_annual_tax, calculate_annual_tax};
pub use pay_period::{
    MONTHS_PER_YEAR, PayPeriodFraction, PayPeriodResult, assess_pay_period,
    calculate_pay_period_percentage,
};
pub use payslip::{
    PayslipCalculation, SUPER_RATE_OUT_OF_RANGE, calculate_payslip, generate_employee_payslip,
    generate_payslips,
};
