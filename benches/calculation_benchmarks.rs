//! Performance benchmarks for the Payslip Engine.
//!
//! Covers each calculation on its own, a single payslip with and without the
//! audit trace, and batches of 100 and 1000 payslips.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use payslip_engine::calculation::{
    calculate_annual_tax, calculate_pay_period_percentage, calculate_payslip,
    generate_employee_payslip, generate_payslips,
};
use payslip_engine::models::EmployeeDetails;

fn march_2021() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2021, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2021, 3, 31).unwrap(),
    )
}

/// Creates employee details spread across every tax bracket.
fn create_details(count: usize) -> Vec<EmployeeDetails> {
    let (start, end) = march_2021();
    (0..count)
        .map(|i| EmployeeDetails {
            first_name: format!("Employee{:04}", i),
            last_name: "Bench".to_string(),
            annual_salary: Decimal::from(15_000 + (i as u64 % 50) * 5_000),
            super_rate: Decimal::new(95, 3),
            payment_start_date: start,
            payment_end_date: end,
        })
        .collect()
}

fn bench_annual_tax(c: &mut Criterion) {
    let mut group = c.benchmark_group("annual_tax");
    for income in [10_000u32, 60_050, 120_000, 250_000] {
        let gross = Decimal::from(income);
        group.bench_with_input(BenchmarkId::from_parameter(income), &gross, |b, gross| {
            b.iter(|| calculate_annual_tax(black_box(*gross)).unwrap())
        });
    }
    group.finish();
}

fn bench_pay_period(c: &mut Criterion) {
    let (start, end) = march_2021();
    c.bench_function("pay_period_single_month", |b| {
        b.iter(|| calculate_pay_period_percentage(black_box(start), black_box(end)).unwrap())
    });
}

fn bench_single_payslip(c: &mut Criterion) {
    let details = create_details(1).remove(0);

    c.bench_function("single_payslip", |b| {
        b.iter(|| generate_employee_payslip(black_box(&details)).unwrap())
    });

    c.bench_function("single_payslip_with_audit", |b| {
        b.iter(|| calculate_payslip(black_box(&details)).unwrap())
    });
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_processing");
    for size in [100usize, 1000] {
        let batch = create_details(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &batch, |b, batch| {
            b.iter(|| generate_payslips(black_box(batch)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_annual_tax,
    bench_pay_period,
    bench_single_payslip,
    bench_batches
);
criterion_main!(benches);
