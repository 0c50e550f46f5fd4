//! Presentation helpers in the Brazilian Portuguese locale.

use std::fmt::{Debug, Display, Formatter};

use chrono::Datelike;

const MONTH_ABBREVIATIONS: [&str; 12] =
    ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez"];

/// Digits rendered past the requested precision to tell an exact tie from a near one.
const TIE_DIGITS: usize = 20;

/// Render the value as Brazilian reais: `R$ 1.234,56`.
///
/// The symbol is separated with a no-break space, as the `pt-BR` locale does.
#[must_use]
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }
    let rendered = to_fixed(value.abs(), 2);
    let (integer, fraction) = rendered.split_once('.').unwrap_or((&rendered, "00"));
    let is_negative =
        value.is_sign_negative() && rendered.bytes().any(|byte| matches!(byte, b'1'..=b'9'));
    format!(
        "{}R$\u{a0}{},{fraction}",
        if is_negative { "-" } else { "" },
        group_thousands(integer),
    )
}

/// Render the value in fixed-point notation, rounding ties away from zero.
#[must_use]
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{value:.decimals$}");
    }
    let fixed = to_fixed(value.abs(), decimals);
    if value < 0.0 { format!("-{fixed}") } else { fixed }
}

/// Fixed-point rendering of a non-negative finite value.
///
/// The standard formatter rounds exact ties to even, this rounds them up.
fn to_fixed(value: f64, decimals: usize) -> String {
    let precision = decimals + TIE_DIGITS;
    let precise = format!("{value:.precision$}");
    let (kept, tail) = precise.split_at(precise.len() - TIE_DIGITS);
    if tail.starts_with('5') && tail.bytes().skip(1).all(|digit| digit == b'0') {
        round_up_last_digit(kept.trim_end_matches('.'))
    } else {
        format!("{value:.decimals$}")
    }
}

fn round_up_last_digit(digits: &str) -> String {
    let mut digits = digits.as_bytes().to_vec();
    let mut is_carried = true;
    for digit in digits.iter_mut().rev().filter(|digit| **digit != b'.') {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            is_carried = false;
            break;
        }
    }
    if is_carried {
        digits.insert(0, b'1');
    }
    digits.into_iter().map(char::from).collect()
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i).is_multiple_of(3) {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Short Portuguese month name, capitalized.
#[must_use]
pub fn month_abbreviation(date: &impl Datelike) -> &'static str {
    MONTH_ABBREVIATIONS[date.month0() as usize]
}

/// Abbreviations of the `count` last months including the current one, oldest first.
#[must_use]
pub fn last_months(count: usize, today: &impl Datelike) -> Vec<&'static str> {
    let current = today.month0() as usize;
    (0..count)
        .rev()
        .map(|offset| MONTH_ABBREVIATIONS[(current + 12 - offset % 12) % 12])
        .collect()
}

/// Relative change, already in percent.
pub struct FormattedPercentage(pub f64);

impl Debug for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedPercentage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:+.1}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(105.8), "R$\u{a0}105,80");
        assert_eq!(format_currency(0.0), "R$\u{a0}0,00");
        assert_eq!(format_currency(1_234_567.891), "R$\u{a0}1.234.567,89");
        assert_eq!(format_currency(-42.5), "-R$\u{a0}42,50");
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
    }

    #[test]
    fn test_format_currency_rounds_ties_up() {
        assert_eq!(format_currency(0.125), "R$\u{a0}0,13");
        assert_eq!(format_currency(105.125), "R$\u{a0}105,13");
        assert_eq!(format_currency(999.995), "R$\u{a0}1.000,00");
        assert_eq!(format_currency(-0.125), "-R$\u{a0}0,13");
    }

    #[test]
    fn test_format_currency_non_finite() {
        assert_eq!(format_currency(f64::NAN), "NaN");
        assert_eq!(format_currency(f64::INFINITY), "inf");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(100.0, 2), "100.00");
        assert_eq!(format_number(10.0 / 3.0, 3), "3.333");
        assert_eq!(format_number(143.611, 0), "144");
    }

    #[test]
    fn test_format_number_rounds_ties_up() {
        assert_eq!(format_number(0.125, 2), "0.13");
        assert_eq!(format_number(2.5, 0), "3");
        assert_eq!(format_number(9.5, 0), "10");
        assert_eq!(format_number(0.375, 2), "0.38");
        assert_eq!(format_number(-2.5, 0), "-3");
        assert_eq!(format_number(1.005, 2), "1.00");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1.234");
        assert_eq!(group_thousands("123456"), "123.456");
    }

    #[test]
    fn test_last_months() {
        let today = NaiveDate::from_ymd_opt(2025, 2, 14).unwrap();
        assert_eq!(last_months(4, &today), ["Nov", "Dez", "Jan", "Fev"]);
        assert_eq!(last_months(1, &today), ["Fev"]);
        assert_eq!(last_months(13, &today).len(), 13);
        assert_eq!(month_abbreviation(&today), "Fev");
    }

    #[test]
    fn test_formatted_percentage() {
        assert_eq!(FormattedPercentage(12.345).to_string(), "+12.3%");
        assert_eq!(FormattedPercentage(-5.0).to_string(), "-5.0%");
    }
}
