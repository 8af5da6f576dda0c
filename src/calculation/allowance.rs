//! Allowance calculation.
//!
//! Permanent employees receive an allowance on top of their base pay that
//! depends on marital status. Contract employees receive none.

use rust_decimal::Decimal;

use crate::config::PayRates;
use crate::models::Employee;

use super::calculate_base_pay;

/// Returns the standard allowance rate for married permanent employees (10%).
pub fn married_allowance_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the standard allowance rate for unmarried permanent employees (8%).
pub fn single_allowance_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Calculates the allowance for an employee.
///
/// # Arguments
///
/// * `employee` - The employee to calculate the allowance for
/// * `rates` - The rate table supplying the married and single percentages
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_allowance;
/// use payroll_ledger::config::PayRates;
/// use payroll_ledger::models::{Employee, PermanentEmployee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::Permanent(
///     PermanentEmployee::new("Budi", Decimal::new(1_000_000, 0), false).unwrap(),
/// );
/// let allowance = calculate_allowance(&employee, &PayRates::default());
/// assert_eq!(allowance, Decimal::new(80_000, 0));
/// ```
pub fn calculate_allowance(employee: &Employee, rates: &PayRates) -> Decimal {
    match employee {
        Employee::Permanent(e) => {
            let rate = if e.is_married() {
                rates.married_allowance
            } else {
                rates.single_allowance
            };
            calculate_base_pay(employee) * rate
        }
        Employee::Contract(_) => Decimal::ZERO,
    }
}
