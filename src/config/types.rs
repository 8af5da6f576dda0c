//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so an empty file (or no file at all) yields the standard rates.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

use crate::calculation::{
    PERMANENT_WORK_HOURS, contract_deduction_rate, married_allowance_rate,
    permanent_deduction_rate, single_allowance_rate,
};
use crate::error::{PayrollError, PayrollResult};

/// Default location of the ledger file, relative to the working directory.
pub const DEFAULT_LEDGER_PATH: &str = "database.txt";

/// The rate table used by the payroll rule set.
///
/// Percentages are stored as fractions of base pay (`0.10` is 10%).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayRates {
    /// Allowance for married permanent employees.
    pub married_allowance: Decimal,
    /// Allowance for unmarried permanent employees.
    pub single_allowance: Decimal,
    /// Deduction taken from permanent employees' base pay.
    pub permanent_deduction: Decimal,
    /// Deduction taken from contract employees' base pay.
    pub contract_deduction: Decimal,
    /// Work hours recorded for every permanent employee.
    pub permanent_work_hours: u32,
}

impl Default for PayRates {
    fn default() -> Self {
        Self {
            married_allowance: married_allowance_rate(),
            single_allowance: single_allowance_rate(),
            permanent_deduction: permanent_deduction_rate(),
            contract_deduction: contract_deduction_rate(),
            permanent_work_hours: PERMANENT_WORK_HOURS,
        }
    }
}

impl PayRates {
    /// Checks that every percentage lies within `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_ledger::config::PayRates;
    /// use rust_decimal::Decimal;
    ///
    /// assert!(PayRates::default().validate().is_ok());
    ///
    /// let rates = PayRates {
    ///     contract_deduction: Decimal::new(15, 1),
    ///     ..PayRates::default()
    /// };
    /// assert!(rates.validate().is_err());
    /// ```
    pub fn validate(&self) -> PayrollResult<()> {
        let fractions = [
            ("rates.married_allowance", self.married_allowance),
            ("rates.single_allowance", self.single_allowance),
            ("rates.permanent_deduction", self.permanent_deduction),
            ("rates.contract_deduction", self.contract_deduction),
        ];

        for (field, value) in fractions {
            if value.is_sign_negative() || value > Decimal::ONE {
                return Err(PayrollError::InvalidConfig {
                    field: field.to_string(),
                    message: format!("{} must be between 0 and 1", value),
                });
            }
        }

        Ok(())
    }
}

/// Where records are appended.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LedgerConfig {
    /// Path of the append-only ledger file.
    pub path: PathBuf,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LEDGER_PATH),
        }
    }
}

/// The complete configuration loaded from YAML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PayrollConfig {
    /// Rate table for the rule set.
    pub rates: PayRates,
    /// Ledger output settings.
    pub ledger: LedgerConfig,
}
