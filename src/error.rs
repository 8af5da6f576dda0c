//! Error types for the payroll ledger.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while collecting input, computing pay,
//! loading configuration, or appending to the ledger.

use thiserror::Error;

/// The main error type for the payroll ledger.
///
/// # Example
///
/// ```
/// use payroll_ledger::error::PayrollError;
///
/// let error = PayrollError::UnknownCategory {
///     input: "freelance".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown employee category: freelance");
/// ```
#[derive(Debug, Error)]
pub enum PayrollError {
    /// The employee category matched neither `Tetap` nor `Kontrak`.
    #[error("Unknown employee category: {input}")]
    UnknownCategory {
        /// The text the user entered, after trimming.
        input: String,
    },

    /// A line read from the terminal could not be parsed.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The prompt field being answered.
        field: String,
        /// A description of the parse failure.
        message: String,
    },

    /// Input ended before a prompt was answered.
    #[error("Input ended before '{field}' was provided")]
    UnexpectedEndOfInput {
        /// The prompt field that was left unanswered.
        field: String,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration file exists but could not be read.
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigUnreadable {
        /// The path that could not be read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration parsed but held an unusable value.
    #[error("Invalid configuration value '{field}': {message}")]
    InvalidConfig {
        /// The configuration key.
        field: String,
        /// A description of the problem.
        message: String,
    },

    /// Appending a record to the ledger file failed.
    #[error("{path}: {source}")]
    Ledger {
        /// The ledger file path.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Reading a prompt answer or writing a prompt failed.
    #[error("Terminal I/O error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;
