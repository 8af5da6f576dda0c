//! Terminal interaction for the payroll ledger.
//!
//! The reader, writer and ledger are passed in explicitly, so the session
//! runs the same against stdin/stdout and against in-memory test doubles.

mod prompt;
mod session;

pub use prompt::Prompter;
pub use session::{SessionOutcome, UNKNOWN_CATEGORY_MESSAGE, run_session};
