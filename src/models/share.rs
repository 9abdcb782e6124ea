//! Percentage of income
//!
//! Percentages are whole numbers between 0 and 100. Anything that would
//! round above 100, or that has no income to divide by, is reported as
//! [`Share::OverBudget`] instead of a number.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// A part's share of a whole, or the over-budget sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Share {
    /// Rounded percentage, always `<= 100`
    Percent(u8),
    /// The whole is zero, or the part exceeds it
    OverBudget,
}

impl Share {
    /// Share of `part` in `whole`
    ///
    /// A zero part is always `Percent(0)`. A zero or negative whole with a
    /// nonzero part is `OverBudget`.
    ///
    /// # Examples
    /// ```
    /// use budget_tracker::models::{Money, Share};
    /// let income = Money::from_dollars(1000);
    /// assert_eq!(Share::of(Money::from_dollars(300), income), Share::Percent(30));
    /// assert_eq!(Share::of(Money::from_dollars(1500), income), Share::OverBudget);
    /// assert_eq!(Share::of(Money::from_dollars(10), Money::zero()), Share::OverBudget);
    /// ```
    pub fn of(part: Money, whole: Money) -> Self {
        if part.is_zero() {
            return Self::Percent(0);
        }
        match round_percent(part, whole) {
            Some(p) if (0..=100).contains(&p) => Self::Percent(p as u8),
            _ => Self::OverBudget,
        }
    }

    /// The numeric percentage, if any
    pub fn percent(&self) -> Option<u8> {
        match self {
            Self::Percent(p) => Some(*p),
            Self::OverBudget => None,
        }
    }
}

impl Default for Share {
    fn default() -> Self {
        Self::Percent(0)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(p) => write!(f, "{}%", p),
            Self::OverBudget => write!(f, "Over Budget"),
        }
    }
}

/// `part / whole * 100` rounded half away from zero, or `None` when `whole <= 0`
///
/// Works on integer cents so ties such as 12.5% are exact.
pub fn round_percent(part: Money, whole: Money) -> Option<i64> {
    if !whole.is_positive() {
        return None;
    }

    let numerator = i128::from(part.cents()) * 100;
    let denominator = i128::from(whole.cents());
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    let rounded = if numerator < 0 { -magnitude } else { magnitude };

    i64::try_from(rounded).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(d: i64) -> Money {
        Money::from_dollars(d)
    }

    #[test]
    fn test_round_percent_exact() {
        assert_eq!(round_percent(dollars(300), dollars(1000)), Some(30));
        assert_eq!(round_percent(dollars(1000), dollars(1000)), Some(100));
    }

    #[test]
    fn test_round_percent_ties_away_from_zero() {
        // 12.5% and 0.5%
        assert_eq!(round_percent(dollars(125), dollars(1000)), Some(13));
        assert_eq!(round_percent(dollars(5), dollars(1000)), Some(1));
        assert_eq!(round_percent(dollars(-125), dollars(1000)), Some(-13));
        // 2.5% should not become 2 (banker's rounding would)
        assert_eq!(round_percent(dollars(25), dollars(1000)), Some(3));
    }

    #[test]
    fn test_round_percent_below_half() {
        // 1/3 = 33.33%
        assert_eq!(round_percent(dollars(1), dollars(3)), Some(33));
        // 2/3 = 66.67%
        assert_eq!(round_percent(dollars(2), dollars(3)), Some(67));
    }

    #[test]
    fn test_round_percent_zero_whole() {
        assert_eq!(round_percent(dollars(5), Money::zero()), None);
        assert_eq!(round_percent(dollars(5), dollars(-5)), None);
    }

    #[test]
    fn test_share_of() {
        assert_eq!(Share::of(dollars(300), dollars(1000)), Share::Percent(30));
        assert_eq!(Share::of(Money::zero(), Money::zero()), Share::Percent(0));
        assert_eq!(Share::of(dollars(1500), dollars(1000)), Share::OverBudget);
        assert_eq!(Share::of(dollars(1), Money::zero()), Share::OverBudget);
    }

    #[test]
    fn test_share_rounds_before_over_budget_check() {
        // 100.4% rounds to 100 and is still a percentage
        let share = Share::of(Money::from_cents(100_400), dollars(1000));
        assert_eq!(share, Share::Percent(100));
        // 100.5% rounds to 101
        let share = Share::of(Money::from_cents(100_500), dollars(1000));
        assert_eq!(share, Share::OverBudget);
    }

    #[test]
    fn test_share_display() {
        assert_eq!(Share::Percent(30).to_string(), "30%");
        assert_eq!(Share::OverBudget.to_string(), "Over Budget");
        assert_eq!(Share::Percent(7).percent(), Some(7));
        assert_eq!(Share::OverBudget.percent(), None);
    }

    #[test]
    fn test_share_serialization() {
        assert_eq!(
            serde_json::to_string(&Share::Percent(30)).unwrap(),
            r#"{"percent":30}"#
        );
        assert_eq!(
            serde_json::to_string(&Share::OverBudget).unwrap(),
            r#""over_budget""#
        );
    }
}
