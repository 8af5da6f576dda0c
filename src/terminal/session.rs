//! The interactive payroll session.
//!
//! One session collects one employee, computes their pay, shows the net
//! amount, and appends the record to the ledger.

use std::io::{BufRead, Write};

use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::calculate_payroll;
use crate::config::PayRates;
use crate::error::{PayrollError, PayrollResult};
use crate::ledger::{Ledger, format_number};
use crate::models::{
    ContractEmployee, Employee, EmployeeCategory, PayrollRecord, PermanentEmployee,
};

use super::Prompter;

/// Message shown when the category is neither `Tetap` nor `Kontrak`.
pub const UNKNOWN_CATEGORY_MESSAGE: &str = "Jenis pegawai tidak dikenal.";

/// How a session ended.
#[derive(Debug)]
pub enum SessionOutcome {
    /// Pay was computed and the record appended.
    Recorded(PayrollRecord),
    /// Pay was computed and shown, but the append failed.
    PersistFailed {
        /// The computed record.
        record: PayrollRecord,
        /// Why the append failed.
        error: PayrollError,
    },
    /// The category was not recognised; nothing was computed or written.
    UnknownCategory {
        /// The trimmed category text.
        input: String,
    },
}

/// Runs one payroll session.
///
/// Malformed numbers, negative amounts, and closed input end the session
/// with an error. An unknown category and a failed append are reported on
/// `prompter` and returned as a normal [`SessionOutcome`].
///
/// # Example
///
/// ```
/// use payroll_ledger::config::PayRates;
/// use payroll_ledger::error::PayrollResult;
/// use payroll_ledger::ledger::Ledger;
/// use payroll_ledger::models::PayrollRecord;
/// use payroll_ledger::terminal::{Prompter, SessionOutcome, run_session};
/// use std::io::Cursor;
///
/// struct Lines(Vec<String>);
///
/// impl Ledger for Lines {
///     fn append(&mut self, record: &PayrollRecord) -> PayrollResult<()> {
///         self.0.push(record.to_line());
///         Ok(())
///     }
///     fn location(&self) -> String {
///         "memory".to_string()
///     }
/// }
///
/// let input = Cursor::new("Ayu\nKontrak\n50000\n20\n");
/// let mut prompter = Prompter::new(input, Vec::new());
/// let mut ledger = Lines(Vec::new());
///
/// let outcome = run_session(&mut prompter, &mut ledger, &PayRates::default()).unwrap();
/// assert!(matches!(outcome, SessionOutcome::Recorded(_)));
/// assert!(ledger.0[0].ends_with("TotalGaji: 970000"));
/// ```
pub fn run_session<R, W, L>(
    prompter: &mut Prompter<R, W>,
    ledger: &mut L,
    rates: &PayRates,
) -> PayrollResult<SessionOutcome>
where
    R: BufRead,
    W: Write,
    L: Ledger + ?Sized,
{
    let session_id = Uuid::new_v4();
    info!(session_id = %session_id, "Starting payroll session");

    let name = prompter.ask("Masukkan nama pegawai: ", "nama")?;
    let category_input = prompter.ask("Masukkan jenis pegawai (Tetap/Kontrak): ", "jenis")?;

    let category = match category_input.parse::<EmployeeCategory>() {
        Ok(category) => category,
        Err(PayrollError::UnknownCategory { input }) => {
            warn!(session_id = %session_id, category = %input, "Unknown employee category");
            prompter.say(UNKNOWN_CATEGORY_MESSAGE)?;
            return Ok(SessionOutcome::UnknownCategory { input });
        }
        Err(err) => return Err(err),
    };

    let employee = read_employee(prompter, name, category)?;
    let record = calculate_payroll(&employee, rates);

    prompter.say(&format!(
        "Gaji untuk {} adalah: {}",
        record.name,
        format_number(record.net_pay)
    ))?;

    match ledger.append(&record) {
        Ok(()) => {
            info!(
                session_id = %session_id,
                category = %record.category,
                net_pay = %record.net_pay,
                ledger = %ledger.location(),
                "Payroll record stored"
            );
            prompter.say(&format!(
                "Data berhasil ditambahkan ke {}",
                ledger.location()
            ))?;
            Ok(SessionOutcome::Recorded(record))
        }
        Err(error) => {
            warn!(session_id = %session_id, error = %error, "Payroll record not stored");
            prompter.say(&format!("Gagal menyimpan ke file: {}", error))?;
            Ok(SessionOutcome::PersistFailed { record, error })
        }
    }
}

fn read_employee<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    name: String,
    category: EmployeeCategory,
) -> PayrollResult<Employee> {
    let employee = match category {
        EmployeeCategory::Permanent => {
            let base_pay = prompter.ask_decimal("Masukkan gaji pokok: ", "gaji pokok")?;
            let married =
                prompter.ask_yes_no("Apakah sudah menikah? (ya/tidak): ", "status menikah")?;
            PermanentEmployee::new(name, base_pay, married)?.into()
        }
        EmployeeCategory::Contract => {
            let hourly_rate = prompter.ask_decimal("Masukkan honor per jam: ", "honor per jam")?;
            let hours = prompter.ask_hours("Masukkan jumlah jam kerja: ", "jumlah jam kerja")?;
            ContractEmployee::new(name, hourly_rate, hours)?.into()
        }
    };
    Ok(employee)
}
