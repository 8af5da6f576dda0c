//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};

use super::types::{PayRates, PayrollConfig};

/// Loads and provides access to payroll configuration.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml").unwrap();
/// println!("Ledger: {}", loader.ledger_path().display());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns an error if:
    /// - The file does not exist (`ConfigNotFound`) or cannot be read (`ConfigUnreadable`)
    /// - The file contains invalid YAML or unknown keys
    /// - A rate lies outside `[0, 1]`
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_ledger::config::ConfigLoader;
    ///
    /// let loader = ConfigLoader::load("./config/payroll.yaml")?;
    /// # Ok::<(), payroll_ledger::error::PayrollError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PayrollError::ConfigNotFound {
                path: path_str.clone(),
            },
            _ => PayrollError::ConfigUnreadable {
                path: path_str.clone(),
                source: e,
            },
        })?;

        // serde_yaml rejects an empty document, which should mean "all defaults".
        let config: PayrollConfig = if content.trim().is_empty() {
            PayrollConfig::default()
        } else {
            serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
                path: path_str.clone(),
                message: e.to_string(),
            })?
        };

        config.rates.validate()?;
        debug!(
            path = %path_str,
            ledger = %config.ledger.path.display(),
            "Loaded payroll configuration"
        );

        Ok(Self { config })
    }

    /// Loads from `path` when given, otherwise falls back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> PayrollResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the rate table.
    pub fn rates(&self) -> &PayRates {
        &self.config.rates
    }

    /// Returns the ledger file path.
    pub fn ledger_path(&self) -> &Path {
        &self.config.ledger.path
    }

    /// Replaces the ledger path, e.g. from a command-line override.
    pub fn with_ledger_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config.ledger.path = path.as_ref().to_path_buf();
        self
    }
}
