//! Item identifiers
//!
//! An `ItemId` is assigned once by the owning report when the item is
//! inserted and never changes or gets reused, regardless of deletions. An
//! `ItemRef` pairs it with the category so a single string such as
//! `expense-3` can name an item across both reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::Category;
use crate::error::BudgetError;

/// Identifier of an item, unique within its owning report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn value(&self) -> u64 {
        self.0
    }

    /// The id that follows this one
    pub(crate) const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A category-qualified item identifier, displayed as `income-<id>` or `expense-<id>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub category: Category,
    pub id: ItemId,
}

impl ItemRef {
    pub fn new(category: Category, id: ItemId) -> Self {
        Self { category, id }
    }
}

impl fmt::Display for ItemRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category.as_str(), self.id)
    }
}

impl FromStr for ItemRef {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || {
            BudgetError::validation(format!(
                "Invalid item reference '{}' (expected e.g. 'income-0' or 'expense-2')",
                s
            ))
        };

        let (prefix, raw_id) = s.trim().split_once('-').ok_or_else(malformed)?;
        let category: Category = prefix.parse().map_err(|_| malformed())?;
        if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        let id: u64 = raw_id.parse().map_err(|_| malformed())?;

        Ok(Self::new(category, ItemId(id)))
    }
}
