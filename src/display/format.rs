//! Formatting utilities for terminal output
//!
//! Amount formatting honours the display settings: currency symbol and
//! thousands grouping. Cents are only printed when they are nonzero.

use chrono::{Datelike, NaiveDate};

use crate::config::Settings;
use crate::models::{Category, Money};

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "June", "July", "Aug", "Sept", "Oct", "Nov", "Dec",
];

/// Insert a comma between every group of three digits
pub fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Format the magnitude of an amount without a sign
fn format_magnitude(amount: Money, settings: &Settings) -> String {
    let abs = amount.abs();
    let whole = abs.dollars().to_string();
    let whole = if settings.thousands_separator {
        group_thousands(&whole)
    } else {
        whole
    };

    if abs.cents_part() == 0 {
        format!("{}{}", settings.currency_symbol, whole)
    } else {
        format!(
            "{}{}.{:02}",
            settings.currency_symbol,
            whole,
            abs.cents_part()
        )
    }
}

/// Format an amount, with a leading `-` when negative
pub fn format_amount(amount: Money, settings: &Settings) -> String {
    if amount.is_negative() {
        format!("-{}", format_magnitude(amount, settings))
    } else {
        format_magnitude(amount, settings)
    }
}

/// Format net income: `+` when positive, `-` when negative, bare when zero
pub fn format_net_income(amount: Money, settings: &Settings) -> String {
    if amount.is_positive() {
        format!("+{}", format_magnitude(amount, settings))
    } else {
        format_amount(amount, settings)
    }
}

/// Format an item value with the sign of its category
pub fn format_signed(category: Category, amount: Money, settings: &Settings) -> String {
    format!("{} {}", category.sign(), format_magnitude(amount, settings))
}

/// Short month and year, e.g. "Sept 2026"
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1,000");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("100000"), "100,000");
    }

    #[test]
    fn test_format_amount() {
        let settings = Settings::default();
        assert_eq!(format_amount(Money::from_dollars(1000), &settings), "$1,000");
        assert_eq!(format_amount(Money::from_cents(100050), &settings), "$1,000.50");
        assert_eq!(format_amount(Money::from_dollars(-500), &settings), "-$500");
        assert_eq!(format_amount(Money::zero(), &settings), "$0");
    }

    #[test]
    fn test_format_amount_without_grouping() {
        let settings = Settings {
            thousands_separator: false,
            currency_symbol: "€".into(),
            ..Settings::default()
        };
        assert_eq!(format_amount(Money::from_dollars(12000), &settings), "€12000");
    }

    #[test]
    fn test_format_net_income() {
        let settings = Settings::default();
        assert_eq!(format_net_income(Money::from_dollars(700), &settings), "+$700");
        assert_eq!(format_net_income(Money::zero(), &settings), "$0");
        assert_eq!(format_net_income(Money::from_dollars(-500), &settings), "-$500");
    }

    #[test]
    fn test_format_signed() {
        let settings = Settings::default();
        assert_eq!(
            format_signed(Category::Income, Money::from_dollars(1000), &settings),
            "+ $1,000"
        );
        assert_eq!(
            format_signed(Category::Expense, Money::from_dollars(300), &settings),
            "- $300"
        );
    }

    #[test]
    fn test_month_label() {
        let date = NaiveDate::from_ymd_opt(2026, 9, 14).unwrap();
        assert_eq!(month_label(date), "Sept 2026");
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(month_label(date), "Jan 2025");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Hello World", 5), "He...");
        assert_eq!(truncate("Hi", 5), "Hi");
        assert_eq!(truncate("Test", 4), "Test");
    }
}
