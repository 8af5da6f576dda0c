//! Calculation logic for the payroll ledger.
//!
//! This module contains the payroll rule set: base pay, the marital-status
//! allowance for permanent employees, net pay after the flat deduction, and
//! the work hours recorded per employee.

mod allowance;
mod base_pay;
mod net_pay;
mod payroll;
mod work_units;

pub use allowance::{calculate_allowance, married_allowance_rate, single_allowance_rate};
pub use base_pay::calculate_base_pay;
pub use net_pay::{
    NetPayResult, calculate_net_pay, contract_deduction_rate, permanent_deduction_rate,
};
pub use payroll::calculate_payroll;
pub use work_units::{PERMANENT_WORK_HOURS, calculate_work_units};
