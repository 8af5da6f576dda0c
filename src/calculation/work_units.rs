//! Work hours recorded per employee.

use crate::config::PayRates;
use crate::models::Employee;

/// Standard monthly hours recorded for every permanent employee.
pub const PERMANENT_WORK_HOURS: u32 = 160;

/// Returns the work hours recorded for an employee.
///
/// Permanent employees are recorded with the fixed hours from the rate
/// table; contract employees with the hours they actually worked.
pub fn calculate_work_units(employee: &Employee, rates: &PayRates) -> u32 {
    match employee {
        Employee::Permanent(_) => rates.permanent_work_hours,
        Employee::Contract(e) => e.hours_worked(),
    }
}
