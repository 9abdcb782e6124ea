//! Item category
//!
//! Every item is either income or an expense, and each report holds items of
//! exactly one category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The two kinds of budget line item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Expense,
}

impl Category {
    /// Both categories, income first
    pub const ALL: [Category; 2] = [Category::Income, Category::Expense];

    /// Long lowercase name, also used as the item reference prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign shown in front of values of this category
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// Error returned when a category name is not recognized
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected 'inc', 'income', 'exp' or 'expense')")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "inc" | "income" => Ok(Self::Income),
            "exp" | "expense" => Ok(Self::Expense),
            _ => Err(UnknownCategory(s.to_string())),
        }
    }
}
