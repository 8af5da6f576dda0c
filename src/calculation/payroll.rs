//! Full payroll calculation for one employee.

use tracing::debug;

use crate::config::PayRates;
use crate::models::{Employee, PayrollRecord};

use super::{calculate_net_pay, calculate_work_units};

/// Runs every rule for an employee and collects the ledger record.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_payroll;
/// use payroll_ledger::config::PayRates;
/// use payroll_ledger::models::{ContractEmployee, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::Contract(
///     ContractEmployee::new("Ayu", Decimal::new(50_000, 0), 20).unwrap(),
/// );
/// let record = calculate_payroll(&employee, &PayRates::default());
/// assert!(record.to_line().contains("TotalGaji: 970000"));
/// ```
pub fn calculate_payroll(employee: &Employee, rates: &PayRates) -> PayrollRecord {
    let net = calculate_net_pay(employee, rates);
    let work_units = calculate_work_units(employee, rates);

    debug!(
        category = %employee.category(),
        base_pay = %net.base_pay,
        allowance = %net.allowance,
        deduction = %net.deduction,
        net_pay = %net.net_pay,
        work_units,
        "Payroll calculated"
    );

    PayrollRecord {
        name: employee.name().to_string(),
        category: employee.category(),
        base_pay: net.base_pay,
        allowance: net.allowance,
        work_units,
        net_pay: net.net_pay,
    }
}
