//! Budget session
//!
//! Owns the budget for one run of the program and turns raw user input into
//! budget mutations. Items are referred to from the outside by their
//! `income-<id>` / `expense-<id>` references.

use tracing::{info, warn};

use crate::error::BudgetResult;
use crate::models::{Budget, Item, ItemRef};

/// Service for a single interactive budgeting session
#[derive(Debug, Default)]
pub struct BudgetSession {
    budget: Budget,
}

impl BudgetSession {
    /// Start a session with an empty budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the session's budget
    pub fn budget(&self) -> &Budget {
        &self.budget
    }

    /// Validate form-style input and add the resulting item
    pub fn submit(
        &mut self,
        description: &str,
        value: &str,
        category: &str,
    ) -> BudgetResult<ItemRef> {
        let item = Item::from_input(description, value, category)
            .inspect_err(|e| warn!(error = %e, "rejected item input"))?;
        self.add(item)
    }

    /// Add an already validated item
    pub fn add(&mut self, item: Item) -> BudgetResult<ItemRef> {
        let category = item.category();
        let id = self.budget.add_item(item)?;
        let item_ref = ItemRef::new(category, id);

        info!(item = %item_ref, "item added");
        Ok(item_ref)
    }

    /// Remove the item named by a reference such as `expense-2`
    ///
    /// Returns the parsed reference along with the removed item.
    pub fn delete(&mut self, reference: &str) -> BudgetResult<(ItemRef, Item)> {
        let item_ref: ItemRef = reference.parse()?;
        let removed = self.remove(item_ref)?;
        Ok((item_ref, removed))
    }

    /// Remove the item named by `item_ref`
    pub fn remove(&mut self, item_ref: ItemRef) -> BudgetResult<Item> {
        let removed = self.budget.remove_item(item_ref.category, item_ref.id)?;

        info!(item = %item_ref, "item removed");
        Ok(removed)
    }
}
