//! Display formatting for monetary and rate values. One fixed format,
//! no locale handling.

use rust_decimal::Decimal;

/// Format a monetary value with thousands separators and exactly two
/// decimal places: `682912.43` -> `682,912.43`.
pub fn money(value: Decimal) -> String {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    let s = rounded.to_string();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    // rescale(2) guarantees a decimal point with two digits after it
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}.{frac_part}")
}

/// Format a decimal rate as a percentage with two decimal places:
/// `0.0599` -> `5.99`.
pub fn percent(rate: Decimal) -> String {
    let mut pct = (rate * Decimal::ONE_HUNDRED).round_dp(2);
    pct.rescale(2);
    pct.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_grouping() {
        assert_eq!(money(dec!(682912.43)), "682,912.43");
        assert_eq!(money(dec!(1000)), "1,000.00");
        assert_eq!(money(dec!(999.999)), "1,000.00");
        assert_eq!(money(dec!(0.5)), "0.50");
        assert_eq!(money(dec!(1234567.891)), "1,234,567.89");
        assert_eq!(money(dec!(-12345.6)), "-12,345.60");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(dec!(0.0599)), "5.99");
        assert_eq!(percent(dec!(0.0519)), "5.19");
        assert_eq!(percent(dec!(0.06)), "6.00");
    }
}
