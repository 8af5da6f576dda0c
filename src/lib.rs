//! Payroll ledger for permanent and contract employees
//!
//! This crate computes base pay, allowance and net pay for the two employee
//! categories, collects input interactively, and appends one formatted
//! record per run to an append-only text ledger.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod terminal;
