//! Configuration loading and management for the payroll ledger.
//!
//! This module loads the rate table and ledger location from a YAML file.
//! Every value has a built-in default, so the file is optional.
//!
//! # Example
//!
//! ```no_run
//! use payroll_ledger::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payroll.yaml").unwrap();
//! println!("Married allowance: {}", config.rates().married_allowance);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_LEDGER_PATH, LedgerConfig, PayRates, PayrollConfig};
