//! Report: the ordered items of one category and their running total
//!
//! Items keep insertion order. Each gets an id from a monotonic counter when
//! it is added, so ids stay stable when earlier items are removed and are
//! never handed out twice. Expense reports also keep every item's share of
//! the income total they were last given.

use tracing::debug;

use super::category::Category;
use super::ids::ItemId;
use super::item::Item;
use super::money::Money;
use super::share::Share;
use crate::error::{BudgetError, BudgetResult};

/// An ordered collection of items of a single category
///
/// Reports are only built up through [`Report::add_item`], so `total` always
/// equals the sum of the item values and `next_id` is above every item's id.
/// They are not deserializable for the same reason.
///
/// ```compile_fail
/// let report: budget_tracker::models::Report = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    category: Category,
    items: Vec<Item>,
    total: Money,
    next_id: ItemId,
    income_basis: Money,
}

impl Report {
    /// Create an empty report
    pub fn new(category: Category) -> Self {
        Self {
            category,
            items: Vec::new(),
            total: Money::zero(),
            next_id: ItemId::new(0),
            income_basis: Money::zero(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Sum of all item values
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Income total the expense percentages were last computed against
    pub fn income_basis(&self) -> Money {
        self.income_basis
    }

    /// Current position of an item in the sequence
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == Some(id))
    }

    /// Look up an item by id
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.position(id).map(|index| &self.items[index])
    }

    /// Append an item and return the id assigned to it
    ///
    /// Fails without modifying the report if the item belongs to the other
    /// category, its value is not positive, or the total would overflow.
    pub fn add_item(&mut self, mut item: Item) -> BudgetResult<ItemId> {
        if item.category() != self.category {
            return Err(BudgetError::validation(format!(
                "{} item '{}' cannot be added to the {} report",
                item.category(),
                item.description(),
                self.category.as_str()
            )));
        }
        if !item.value().is_positive() {
            return Err(BudgetError::validation(format!(
                "Value must be positive, got {}",
                item.value()
            )));
        }
        let total = self.total.checked_add(item.value()).ok_or_else(|| {
            BudgetError::validation(format!(
                "Adding {} would overflow the {} total",
                item.value(),
                self.category.as_str()
            ))
        })?;

        let id = self.next_id;
        self.next_id = id.next();

        item.assign_id(id);
        item.set_percent_of_income(Share::of(item.value(), self.income_basis));
        self.total = total;

        debug!(
            category = self.category.as_str(),
            id = id.value(),
            value = item.value().cents(),
            total = self.total.cents(),
            "item added"
        );

        self.items.push(item);
        Ok(id)
    }

    /// Remove an item by id and return it
    ///
    /// The remaining items keep their ids. Fails without modifying the report
    /// if no item has that id.
    pub fn remove_item(&mut self, id: ItemId) -> BudgetResult<Item> {
        let index = self.position(id).ok_or_else(|| {
            BudgetError::item_not_found(format!("{}-{}", self.category.as_str(), id))
        })?;

        let removed = self.items.remove(index);
        self.total -= removed.value();
        self.recompute_item_percentages(self.income_basis);

        debug!(
            category = self.category.as_str(),
            id = id.value(),
            total = self.total.cents(),
            "item removed"
        );

        Ok(removed)
    }

    /// Recompute every item's share of `income_total`
    ///
    /// Has no effect on income reports.
    pub fn recompute_item_percentages(&mut self, income_total: Money) {
        if !self.category.is_expense() {
            return;
        }

        self.income_basis = income_total;
        for item in &mut self.items {
            item.set_percent_of_income(Share::of(item.value(), income_total));
        }
    }
}
