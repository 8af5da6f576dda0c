//! Number formatting for ledger lines and terminal output.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount for display.
///
/// Whole amounts are rendered without a decimal point. Anything with a
/// fractional part is rounded half away from zero to exactly two decimals.
///
/// # Examples
///
/// ```
/// use payroll_ledger::ledger::format_number;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_number(Decimal::new(9500, 1)), "950");
/// assert_eq!(format_number(Decimal::new(9505, 1)), "950.50");
/// assert_eq!(format_number(Decimal::ZERO), "0");
/// ```
pub fn format_number(value: Decimal) -> String {
    if value.fract().is_zero() {
        return value.trunc().normalize().to_string();
    }

    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_whole_number_has_no_decimal_point() {
        assert_eq!(format_number(dec("950")), "950");
        assert_eq!(format_number(dec("950.0")), "950");
        assert_eq!(format_number(dec("1050000.0000")), "1050000");
    }

    #[test]
    fn test_fraction_has_two_decimals() {
        assert_eq!(format_number(dec("950.5")), "950.50");
        assert_eq!(format_number(dec("950.55")), "950.55");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_number(Decimal::ZERO), "0");
        assert_eq!(format_number(dec("0.00")), "0");
    }

    #[test]
    fn test_rounds_half_away_from_zero() {
        assert_eq!(format_number(dec("1197.465")), "1197.47");
        assert_eq!(format_number(dec("0.125")), "0.13");
        assert_eq!(format_number(dec("35925.8997")), "35925.90");
    }

    #[test]
    fn test_tiny_fraction_rounds_to_zero_cents() {
        assert_eq!(format_number(dec("950.001")), "950.00");
    }

    #[test]
    fn test_large_whole_number_is_not_scientific() {
        assert_eq!(format_number(dec("1000000000000000")), "1000000000000000");
    }
}
