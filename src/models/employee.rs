//! Employee model and related types.
//!
//! This module defines the [`Employee`] sum type and its two variants,
//! [`PermanentEmployee`] and [`ContractEmployee`]. Variants are only built
//! through validating constructors, so every `Employee` in hand satisfies
//! the non-negative invariants.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::calculation::{
    calculate_allowance, calculate_base_pay, calculate_net_pay, calculate_work_units,
};
use crate::config::PayRates;
use crate::error::{PayrollError, PayrollResult};

/// Largest accepted base pay or hourly rate.
///
/// Keeps `rate × hours × percentage` comfortably inside `Decimal` range for
/// any `u32` hour count.
pub fn max_amount() -> Decimal {
    Decimal::new(1_000_000_000_000_000, 0)
}

/// The category an employee is paid under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeCategory {
    /// Salaried employee with a fixed monthly base pay.
    Permanent,
    /// Hourly employee paid rate × hours.
    Contract,
}

impl EmployeeCategory {
    /// Returns the label written to the ledger (`Tetap` or `Kontrak`).
    pub fn label(self) -> &'static str {
        match self {
            EmployeeCategory::Permanent => "Tetap",
            EmployeeCategory::Contract => "Kontrak",
        }
    }
}

impl fmt::Display for EmployeeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeCategory {
    type Err = PayrollError;

    /// Parses a category label, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_ledger::models::EmployeeCategory;
    ///
    /// let category: EmployeeCategory = "  KONTRAK ".parse().unwrap();
    /// assert_eq!(category, EmployeeCategory::Contract);
    /// assert!("freelance".parse::<EmployeeCategory>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "tetap" => Ok(EmployeeCategory::Permanent),
            "kontrak" => Ok(EmployeeCategory::Contract),
            _ => Err(PayrollError::UnknownCategory {
                input: s.trim().to_string(),
            }),
        }
    }
}

fn validate_amount(field: &str, value: Decimal) -> PayrollResult<()> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if value > max_amount() {
        return Err(PayrollError::InvalidEmployee {
            field: field.to_string(),
            message: format!("exceeds the maximum of {}", max_amount()),
        });
    }
    Ok(())
}

/// A permanent (`Tetap`) employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermanentEmployee {
    name: String,
    base_pay: Decimal,
    married: bool,
}

impl PermanentEmployee {
    /// Creates a permanent employee, rejecting a negative or oversized base pay.
    pub fn new(name: impl Into<String>, base_pay: Decimal, married: bool) -> PayrollResult<Self> {
        validate_amount("base_pay", base_pay)?;
        Ok(Self {
            name: name.into(),
            base_pay,
            married,
        })
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Monthly base pay.
    pub fn base_pay(&self) -> Decimal {
        self.base_pay
    }

    /// Whether the employee is married.
    pub fn is_married(&self) -> bool {
        self.married
    }
}

/// A contract (`Kontrak`) employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractEmployee {
    name: String,
    hourly_rate: Decimal,
    hours_worked: u32,
}

impl ContractEmployee {
    /// Creates a contract employee, rejecting a negative or oversized rate.
    pub fn new(
        name: impl Into<String>,
        hourly_rate: Decimal,
        hours_worked: u32,
    ) -> PayrollResult<Self> {
        validate_amount("hourly_rate", hourly_rate)?;
        Ok(Self {
            name: name.into(),
            hourly_rate,
            hours_worked,
        })
    }

    /// The employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Pay per hour worked.
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Hours worked in the period.
    pub fn hours_worked(&self) -> u32 {
        self.hours_worked
    }
}

/// An employee subject to payroll calculation.
///
/// The rule methods (`base_amount`, `allowance`, `net_pay`, `work_units`)
/// apply the standard [`PayRates`]. Use the functions in
/// [`crate::calculation`] to apply a configured rate table instead.
///
/// # Examples
///
/// ```
/// use payroll_ledger::models::{Employee, PermanentEmployee};
/// use rust_decimal::Decimal;
///
/// let employee = Employee::Permanent(
///     PermanentEmployee::new("Sari", Decimal::new(1_000_000, 0), true).unwrap(),
/// );
/// assert_eq!(employee.allowance(), Decimal::new(100_000, 0));
/// assert_eq!(employee.net_pay(), Decimal::new(1_050_000, 0));
/// assert_eq!(employee.work_units(), 160);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Employee {
    /// A permanent employee.
    Permanent(PermanentEmployee),
    /// A contract employee.
    Contract(ContractEmployee),
}

impl Employee {
    /// The employee's name.
    pub fn name(&self) -> &str {
        match self {
            Employee::Permanent(e) => e.name(),
            Employee::Contract(e) => e.name(),
        }
    }

    /// The category this employee is paid under.
    pub fn category(&self) -> EmployeeCategory {
        match self {
            Employee::Permanent(_) => EmployeeCategory::Permanent,
            Employee::Contract(_) => EmployeeCategory::Contract,
        }
    }

    /// Base pay before allowance and deduction.
    pub fn base_amount(&self) -> Decimal {
        calculate_base_pay(self)
    }

    /// Allowance under the standard rates.
    pub fn allowance(&self) -> Decimal {
        calculate_allowance(self, &PayRates::default())
    }

    /// Net pay under the standard rates.
    pub fn net_pay(&self) -> Decimal {
        calculate_net_pay(self, &PayRates::default()).net_pay
    }

    /// Hours recorded for the employee under the standard rates.
    pub fn work_units(&self) -> u32 {
        calculate_work_units(self, &PayRates::default())
    }
}

impl From<PermanentEmployee> for Employee {
    fn from(employee: PermanentEmployee) -> Self {
        Employee::Permanent(employee)
    }
}

impl From<ContractEmployee> for Employee {
    fn from(employee: ContractEmployee) -> Self {
        Employee::Contract(employee)
    }
}
