//! Net pay calculation.
//!
//! Net pay adds the allowance to base pay and subtracts a flat percentage
//! deduction of base pay. The deduction does not depend on the amount.

use rust_decimal::Decimal;

use crate::config::PayRates;
use crate::models::Employee;

use super::{calculate_allowance, calculate_base_pay};

/// Returns the standard deduction rate for permanent employees (5%).
pub fn permanent_deduction_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the standard deduction rate for contract employees (3%).
pub fn contract_deduction_rate() -> Decimal {
    Decimal::new(3, 2)
}

/// The breakdown of a net pay calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetPayResult {
    /// Base pay before allowance and deduction.
    pub base_pay: Decimal,
    /// Allowance added to the base pay.
    pub allowance: Decimal,
    /// Amount deducted from the base pay.
    pub deduction: Decimal,
    /// `base_pay + allowance - deduction`.
    pub net_pay: Decimal,
}

/// Calculates net pay for an employee.
///
/// - Permanent: `base + allowance - base × permanent_deduction`
/// - Contract: `base - base × contract_deduction`
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_net_pay;
/// use payroll_ledger::config::PayRates;
/// use payroll_ledger::models::{Employee, PermanentEmployee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::Permanent(
///     PermanentEmployee::new("Budi", Decimal::new(1_000_000, 0), true).unwrap(),
/// );
/// let result = calculate_net_pay(&employee, &PayRates::default());
/// assert_eq!(result.deduction, Decimal::new(50_000, 0));
/// assert_eq!(result.net_pay, Decimal::new(1_050_000, 0));
/// ```
pub fn calculate_net_pay(employee: &Employee, rates: &PayRates) -> NetPayResult {
    let base_pay = calculate_base_pay(employee);
    let allowance = calculate_allowance(employee, rates);

    let deduction_rate = match employee {
        Employee::Permanent(_) => rates.permanent_deduction,
        Employee::Contract(_) => rates.contract_deduction,
    };
    let deduction = base_pay * deduction_rate;

    NetPayResult {
        base_pay,
        allowance,
        deduction,
        net_pay: base_pay + allowance - deduction,
    }
}
