//! Ledger formatting and persistence.
//!
//! This module formats amounts for display and appends payroll records to
//! the ledger file.

mod format;
mod writer;

pub use format::format_number;
pub use writer::{FileLedger, Ledger};
