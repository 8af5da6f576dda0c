//! Append-only ledger storage.
//!
//! Records are written one per line. The file is created when missing and
//! never truncated or read back.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::PayrollRecord;

/// Destination for computed payroll records.
pub trait Ledger {
    /// Appends one record as a single line.
    fn append(&mut self, record: &PayrollRecord) -> PayrollResult<()>;

    /// Human-readable location of the ledger, used in status messages.
    fn location(&self) -> String;
}

/// A ledger backed by a text file opened in append mode.
///
/// # Example
///
/// ```no_run
/// use payroll_ledger::ledger::{FileLedger, Ledger};
/// use payroll_ledger::models::{EmployeeCategory, PayrollRecord};
/// use rust_decimal::Decimal;
///
/// let mut ledger = FileLedger::new("database.txt");
/// let record = PayrollRecord {
///     name: "Ayu".to_string(),
///     category: EmployeeCategory::Contract,
///     base_pay: Decimal::new(1_000_000, 0),
///     allowance: Decimal::ZERO,
///     work_units: 20,
///     net_pay: Decimal::new(970_000, 0),
/// };
/// ledger.append(&record)?;
/// # Ok::<(), payroll_ledger::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct FileLedger {
    path: PathBuf,
}

impl FileLedger {
    /// Creates a ledger that appends to `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The ledger file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Ledger for FileLedger {
    fn append(&mut self, record: &PayrollRecord) -> PayrollResult<()> {
        let mut line = record.to_line();
        line.push('\n');

        // Single write_all so the line lands in one append.
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        match result {
            Ok(()) => {
                debug!(path = %self.path.display(), bytes = line.len(), "Record appended");
                Ok(())
            }
            Err(source) => {
                warn!(path = %self.path.display(), error = %source, "Ledger append failed");
                Err(PayrollError::Ledger {
                    path: self.path.display().to_string(),
                    source,
                })
            }
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
