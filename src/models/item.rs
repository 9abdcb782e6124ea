//! Budget line item
//!
//! An item is a single income or expense entry. Its id and, for expenses,
//! its percentage of income are filled in by the report that owns it.

use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::ItemId;
use super::money::Money;
use super::share::Share;
use crate::error::{BudgetError, BudgetResult};

/// A single income or expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    description: String,
    value: Money,
    category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<ItemId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    percent_of_income: Option<Share>,
}

impl Item {
    /// Create a new, unassigned item
    ///
    /// Fails with a validation error when the description is blank or the
    /// value is not positive.
    pub fn new(
        description: impl Into<String>,
        value: Money,
        category: Category,
    ) -> BudgetResult<Self> {
        let description = description.into();

        if description.trim().is_empty() {
            return Err(BudgetError::validation("Description cannot be empty"));
        }
        if !value.is_positive() {
            return Err(BudgetError::validation(format!(
                "Value must be positive, got {}",
                value
            )));
        }

        Ok(Self {
            description,
            value,
            category,
            id: None,
            percent_of_income: None,
        })
    }

    /// Create an item from raw text input
    pub fn from_input(description: &str, value: &str, category: &str) -> BudgetResult<Self> {
        let category = category
            .parse::<Category>()
            .map_err(|e| BudgetError::validation(e.to_string()))?;
        let value = Money::parse(value)
            .map_err(|e| BudgetError::validation(format!("Invalid value: {}", e)))?;

        Self::new(description, value, category)
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn value(&self) -> Money {
        self.value
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Id assigned by the owning report, `None` until inserted
    pub fn id(&self) -> Option<ItemId> {
        self.id
    }

    /// Share of total income at the last recompute; always `None` for income items
    pub fn percent_of_income(&self) -> Option<Share> {
        self.percent_of_income
    }

    pub(crate) fn assign_id(&mut self, id: ItemId) {
        self.id = Some(id);
    }

    pub(crate) fn set_percent_of_income(&mut self, share: Share) {
        if self.category.is_expense() {
            self.percent_of_income = Some(share);
        }
    }
}

/// Create an item from a description, a floating-point value and a category name
///
/// # Examples
/// ```
/// use budget_tracker::models::create_item;
/// let rent = create_item("Rent", 300.0, "exp").unwrap();
/// assert_eq!(rent.value().cents(), 30000);
/// assert!(create_item("", 50.0, "income").is_err());
/// ```
pub fn create_item(description: &str, value: f64, category: &str) -> BudgetResult<Item> {
    let category = category
        .parse::<Category>()
        .map_err(|e| BudgetError::validation(e.to_string()))?;
    let value = Money::from_amount(value)
        .map_err(|e| BudgetError::validation(format!("Invalid value: {}", e)))?;

    Item::new(description, value, category)
}
