//! Line-oriented prompting over any reader/writer pair.
//!
//! Each question writes a prompt, reads one whole line, and parses it. A
//! line that does not parse is an error; nothing is retried.

use std::io::{BufRead, Write};
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};

/// Asks questions on `output` and reads answers from `input`.
///
/// # Example
///
/// ```
/// use payroll_ledger::terminal::Prompter;
/// use std::io::Cursor;
///
/// let mut prompter = Prompter::new(Cursor::new("Sari\n"), Vec::new());
/// let name = prompter.ask("Nama: ", "nama").unwrap();
/// assert_eq!(name, "Sari");
/// assert_eq!(prompter.output(), b"Nama: ");
/// ```
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Creates a prompter over the given input and output.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `prompt` and returns the next line without its terminator.
    pub fn ask(&mut self, prompt: &str, field: &str) -> PayrollResult<String> {
        self.output.write_all(prompt.as_bytes())?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PayrollError::UnexpectedEndOfInput {
                field: field.to_string(),
            });
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(line)
    }

    /// Asks for a decimal amount.
    pub fn ask_decimal(&mut self, prompt: &str, field: &str) -> PayrollResult<Decimal> {
        let answer = self.ask(prompt, field)?;
        let answer = answer.trim();
        Decimal::from_str(answer).map_err(|_| PayrollError::InvalidInput {
            field: field.to_string(),
            message: format!("'{}' is not a number", answer),
        })
    }

    /// Asks for a whole, non-negative number of hours.
    pub fn ask_hours(&mut self, prompt: &str, field: &str) -> PayrollResult<u32> {
        let answer = self.ask(prompt, field)?;
        let answer = answer.trim();
        answer.parse::<u32>().map_err(|_| PayrollError::InvalidInput {
            field: field.to_string(),
            message: format!("'{}' is not a whole number of hours", answer),
        })
    }

    /// Asks a `ya/tidak` question. Only `ya` (any case) counts as yes.
    pub fn ask_yes_no(&mut self, prompt: &str, field: &str) -> PayrollResult<bool> {
        let answer = self.ask(prompt, field)?;
        Ok(answer.trim().eq_ignore_ascii_case("ya"))
    }

    /// Writes a full line of output.
    pub fn say(&mut self, message: &str) -> PayrollResult<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;
        Ok(())
    }

    /// Returns the output written so far.
    pub fn output(&self) -> &W {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<String>, Vec<u8>> {
        Prompter::new(Cursor::new(input.to_string()), Vec::new())
    }

    #[test]
    fn test_ask_strips_line_terminators() {
        let mut p = prompter("Budi Santoso\r\nnext\n");
        assert_eq!(p.ask("> ", "nama").unwrap(), "Budi Santoso");
        assert_eq!(p.ask("> ", "nama").unwrap(), "next");
    }

    #[test]
    fn test_ask_accepts_last_line_without_newline() {
        let mut p = prompter("Ayu");
        assert_eq!(p.ask("> ", "nama").unwrap(), "Ayu");
    }

    #[test]
    fn test_ask_at_end_of_input() {
        let mut p = prompter("");
        let err = p.ask("> ", "nama").unwrap_err();
        assert!(matches!(
            err,
            PayrollError::UnexpectedEndOfInput { ref field } if field == "nama"
        ));
    }

    #[test]
    fn test_ask_writes_prompt() {
        let mut p = prompter("x\n");
        p.ask("Masukkan nama pegawai: ", "nama").unwrap();
        assert_eq!(p.output().as_slice(), b"Masukkan nama pegawai: ");
    }

    #[test]
    fn test_ask_decimal_parses_trimmed_value() {
        let mut p = prompter("  950.5 \n");
        assert_eq!(
            p.ask_decimal("> ", "gaji pokok").unwrap(),
            Decimal::new(9505, 1)
        );
    }

    #[test]
    fn test_ask_decimal_rejects_text() {
        let mut p = prompter("sejuta\n");
        let err = p.ask_decimal("> ", "gaji pokok").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input for 'gaji pokok': 'sejuta' is not a number"
        );
    }

    #[test]
    fn test_ask_hours_rejects_negative_and_fractional() {
        let mut p = prompter("-5\n20.5\n40\n");
        assert!(matches!(
            p.ask_hours("> ", "jam kerja"),
            Err(PayrollError::InvalidInput { .. })
        ));
        assert!(matches!(
            p.ask_hours("> ", "jam kerja"),
            Err(PayrollError::InvalidInput { .. })
        ));
        assert_eq!(p.ask_hours("> ", "jam kerja").unwrap(), 40);
    }

    #[test]
    fn test_ask_yes_no() {
        let mut p = prompter("ya\n YA \ntidak\nyes\n");
        assert!(p.ask_yes_no("> ", "menikah").unwrap());
        assert!(p.ask_yes_no("> ", "menikah").unwrap());
        assert!(!p.ask_yes_no("> ", "menikah").unwrap());
        assert!(!p.ask_yes_no("> ", "menikah").unwrap());
    }

    #[test]
    fn test_say_appends_newline() {
        let mut p = prompter("");
        p.say("Jenis pegawai tidak dikenal.").unwrap();
        assert_eq!(
            String::from_utf8(p.output().clone()).unwrap(),
            "Jenis pegawai tidak dikenal.\n"
        );
    }
}
