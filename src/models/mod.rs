//! Core data models for the payroll ledger.
//!
//! This module contains the employee sum type and the computed record
//! written to the ledger.

mod employee;
mod payroll_record;

pub use employee::{ContractEmployee, Employee, EmployeeCategory, PermanentEmployee, max_amount};
pub use payroll_record::{FIELD_DELIMITER, PayrollRecord};
