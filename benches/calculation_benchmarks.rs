//! Performance benchmarks for the payroll engine.
//!
//! This benchmark suite verifies that the calculation engine stays fast:
//! - Single payslip through the API router
//! - Library-level payslip batches of 100 and 1000 employees
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::api::{AppState, create_router};
use payroll_engine::calculation::build_payslip;
use payroll_engine::config::ConfigLoader;
use payroll_engine::models::{Employee, EmployeeProfile, HourlyEmployee, SalariedEmployee};

use axum::{body::Body, http::Request};
use tower::ServiceExt;

/// Creates a test state with loaded configuration.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/payroll").expect("Failed to load config");
    AppState::new(config)
}

fn salaried_request_body() -> String {
    serde_json::json!({
        "employee": {
            "scheme": "salaried",
            "id": "emp_bench_001",
            "name": "Juan Perez",
            "hire_date": "2018-01-15",
            "monthly_salary": "5000000"
        },
        "as_of": "2024-06-01"
    })
    .to_string()
}

fn build_employee_batch(count: usize) -> Vec<Employee> {
    (0..count)
        .map(|i| {
            let profile = EmployeeProfile::new(
                format!("emp_{:04}", i),
                "Batch Employee",
                NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
                None,
            )
            .unwrap();

            if i % 2 == 0 {
                Employee::Salaried(
                    SalariedEmployee::new(profile, Decimal::from_str("5000000").unwrap()).unwrap(),
                )
            } else {
                Employee::Hourly(
                    HourlyEmployee::new(
                        profile,
                        Decimal::from_str("20000").unwrap(),
                        Decimal::from_str("45").unwrap(),
                        true,
                    )
                    .unwrap(),
                )
            }
        })
        .collect()
}

fn bench_single_request(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("api_single_payslip", |b| {
        b.to_async(&rt).iter(|| async {
            let router = create_router(create_test_state());
            let response = router
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/calculate")
                        .header("Content-Type", "application/json")
                        .body(Body::from(salaried_request_body()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response.status());
        });
    });
}

fn bench_payslip_batches(c: &mut Criterion) {
    let as_of = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let mut group = c.benchmark_group("payslip_batches");

    for count in [100usize, 1000] {
        let employees = build_employee_batch(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            &employees,
            |b, employees| {
                b.iter(|| {
                    for employee in employees {
                        black_box(build_payslip(employee, as_of, Decimal::ZERO));
                    }
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_single_request, bench_payslip_batches);
criterion_main!(benches);
