//! Payslip assembly.
//!
//! This module turns a calculated employee into an itemized [`Payslip`]
//! with earning, benefit, and deduction lines plus aggregated totals.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{Employee, PayComponent, Payslip, PayslipLine, PayslipTotals};

use super::{
    Compensation, FOOD_ALLOWANCE, SOCIAL_SECURITY_RATE, commission_amount, sales_bonus,
    seniority_bonus, split_hours,
};

/// Builds an itemized payslip for an employee.
///
/// # Arguments
///
/// * `employee` - The employee to build the payslip for
/// * `as_of` - The date tenure-dependent rules are evaluated against
/// * `arl_rate` - The occupational-risk rate resolved from configuration
///   (zero when the employee has no risk class)
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::build_payslip;
/// use payroll_engine::models::{Employee, EmployeeProfile, SalariedEmployee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let profile = EmployeeProfile::new(
///     "emp_001",
///     "Juan Perez",
///     NaiveDate::from_ymd_opt(2018, 1, 15).unwrap(),
///     None,
/// ).unwrap();
/// let employee = Employee::Salaried(
///     SalariedEmployee::new(profile, Decimal::from_str("5000000").unwrap()).unwrap(),
/// );
///
/// let payslip = build_payslip(
///     &employee,
///     NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
///     Decimal::ZERO,
/// );
/// assert_eq!(payslip.totals.net_pay, Decimal::from_str("6300000").unwrap());
/// ```
pub fn build_payslip(employee: &Employee, as_of: NaiveDate, arl_rate: Decimal) -> Payslip {
    let mut earnings: Vec<PayslipLine> = Vec::new();
    let mut benefits: Vec<PayslipLine> = Vec::new();

    match employee {
        Employee::Salaried(e) => {
            earnings.push(PayslipLine {
                component: PayComponent::BasePay,
                description: "Monthly salary".to_string(),
                amount: e.monthly_salary(),
            });

            let years = e.profile().years_of_service(as_of);
            let bonus = seniority_bonus(e.monthly_salary(), years);
            if bonus > Decimal::ZERO {
                benefits.push(PayslipLine {
                    component: PayComponent::SeniorityBonus,
                    description: format!("Seniority bonus ({} years of service)", years),
                    amount: bonus,
                });
            }
            benefits.push(food_allowance_line());
        }
        Employee::Hourly(e) => {
            let split = split_hours(e.hours_worked());
            earnings.push(PayslipLine {
                component: PayComponent::RegularHours,
                description: format!(
                    "{} regular hours at {}",
                    split.regular.normalize(),
                    e.hourly_rate().normalize()
                ),
                amount: split.regular * e.hourly_rate(),
            });
            if split.overtime > Decimal::ZERO {
                earnings.push(PayslipLine {
                    component: PayComponent::Overtime,
                    description: format!(
                        "{} overtime hours at 1.5x",
                        split.overtime.normalize()
                    ),
                    amount: split.overtime
                        * e.hourly_rate()
                        * super::OVERTIME_MULTIPLIER,
                });
            }

            let fund = Compensation::savings_fund(e, as_of);
            if fund > Decimal::ZERO {
                benefits.push(PayslipLine {
                    component: PayComponent::SavingsFund,
                    description: "Savings fund (2% of gross pay)".to_string(),
                    amount: fund,
                });
            }
        }
        Employee::Commission(e) => {
            earnings.push(PayslipLine {
                component: PayComponent::BaseSalary,
                description: "Base salary".to_string(),
                amount: e.base_salary(),
            });
            earnings.push(PayslipLine {
                component: PayComponent::Commission,
                description: format!(
                    "{}% commission on sales",
                    (e.commission_rate() * Decimal::ONE_HUNDRED).normalize()
                ),
                amount: commission_amount(e.sales_amount(), e.commission_rate()),
            });

            let bonus = sales_bonus(e.sales_amount());
            if bonus > Decimal::ZERO {
                benefits.push(PayslipLine {
                    component: PayComponent::SalesBonus,
                    description: "High-sales bonus (3% of sales)".to_string(),
                    amount: bonus,
                });
            }
            benefits.push(food_allowance_line());
        }
        Employee::Temporary(e) => {
            earnings.push(PayslipLine {
                component: PayComponent::BasePay,
                description: "Monthly salary".to_string(),
                amount: e.monthly_salary(),
            });
        }
    }

    let gross_pay = employee.gross_pay();
    let bonuses_total = employee.bonuses(as_of);
    let savings_fund = Compensation::savings_fund(employee, as_of);
    let deductions_total = employee.statutory_deductions(gross_pay, arl_rate);
    let net_pay = employee.net_pay(as_of, arl_rate);

    let mut deductions = vec![PayslipLine {
        component: PayComponent::SocialSecurity,
        description: "Social security and pension (4%)".to_string(),
        amount: gross_pay * SOCIAL_SECURITY_RATE,
    }];
    if arl_rate > Decimal::ZERO {
        deductions.push(PayslipLine {
            component: PayComponent::OccupationalRisk,
            description: "Occupational risk insurance".to_string(),
            amount: gross_pay * arl_rate,
        });
    }

    let profile = Compensation::profile(employee);

    Payslip {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: profile.id().to_string(),
        employee_name: profile.name().to_string(),
        scheme: employee.scheme(),
        as_of,
        earnings,
        benefits,
        deductions,
        totals: PayslipTotals {
            gross_pay,
            bonuses_total,
            savings_fund,
            deductions_total,
            net_pay,
        },
    }
}

fn food_allowance_line() -> PayslipLine {
    PayslipLine {
        component: PayComponent::FoodAllowance,
        description: "Monthly food allowance".to_string(),
        amount: FOOD_ALLOWANCE,
    }
}
