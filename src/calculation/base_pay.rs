//! Base pay calculation.

use rust_decimal::Decimal;

use crate::models::Employee;

/// Returns the base pay before allowance and deduction.
///
/// Permanent employees carry their base pay directly. Contract employees
/// earn `hourly_rate × hours_worked`.
///
/// # Examples
///
/// ```
/// use payroll_ledger::calculation::calculate_base_pay;
/// use payroll_ledger::models::{ContractEmployee, Employee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::Contract(
///     ContractEmployee::new("Ayu", Decimal::new(50_000, 0), 20).unwrap(),
/// );
/// assert_eq!(calculate_base_pay(&employee), Decimal::new(1_000_000, 0));
/// ```
pub fn calculate_base_pay(employee: &Employee) -> Decimal {
    match employee {
        Employee::Permanent(e) => e.base_pay(),
        Employee::Contract(e) => e.hourly_rate() * Decimal::from(e.hours_worked()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContractEmployee, PermanentEmployee};
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_permanent_base_pay_is_stored_value() {
        let employee =
            Employee::Permanent(PermanentEmployee::new("Budi", dec("4500000.75"), false).unwrap());
        assert_eq!(calculate_base_pay(&employee), dec("4500000.75"));
    }

    #[test]
    fn test_contract_base_pay_is_rate_times_hours() {
        let employee =
            Employee::Contract(ContractEmployee::new("Ayu", dec("37500.50"), 12).unwrap());
        assert_eq!(calculate_base_pay(&employee), dec("450006"));
    }

    #[test]
    fn test_contract_with_zero_hours_has_zero_base() {
        let employee = Employee::Contract(ContractEmployee::new("Ayu", dec("50000"), 0).unwrap());
        assert_eq!(calculate_base_pay(&employee), Decimal::ZERO);
    }
}
