//! Payroll record model.
//!
//! A [`PayrollRecord`] holds the already-computed figures for one employee
//! and renders them as a single ledger line.

use std::fmt;

use rust_decimal::Decimal;

use crate::ledger::format_number;

use super::EmployeeCategory;

/// Separator between fields of a ledger line.
pub const FIELD_DELIMITER: &str = " | ";

/// The computed payroll figures for one employee.
///
/// # Example
///
/// ```
/// use payroll_ledger::models::{EmployeeCategory, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let record = PayrollRecord {
///     name: "Ayu".to_string(),
///     category: EmployeeCategory::Contract,
///     base_pay: Decimal::new(1_000_000, 0),
///     allowance: Decimal::ZERO,
///     work_units: 20,
///     net_pay: Decimal::new(970_000, 0),
/// };
/// assert_eq!(
///     record.to_line(),
///     "Nama: Ayu | Jenis: Kontrak | Gaji: 1000000 | Tunjangan: 0 | JamKerja: 20 | TotalGaji: 970000"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayrollRecord {
    /// Employee name, as entered.
    pub name: String,
    /// Employee category.
    pub category: EmployeeCategory,
    /// Base pay before allowance and deduction.
    pub base_pay: Decimal,
    /// Allowance added to the base pay.
    pub allowance: Decimal,
    /// Recorded work hours.
    pub work_units: u32,
    /// Final pay after allowance and deduction.
    pub net_pay: Decimal,
}

impl PayrollRecord {
    /// Renders the record as a ledger line, without the trailing newline.
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PayrollRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields = [
            format!("Nama: {}", self.name),
            format!("Jenis: {}", self.category.label()),
            format!("Gaji: {}", format_number(self.base_pay)),
            format!("Tunjangan: {}", format_number(self.allowance)),
            format!("JamKerja: {}", self.work_units),
            format!("TotalGaji: {}", format_number(self.net_pay)),
        ];
        f.write_str(&fields.join(FIELD_DELIMITER))
    }
}
