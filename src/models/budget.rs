//! Budget: income and expense reports combined
//!
//! The budget owns one report of each category and keeps the derived
//! figures (net income and the expense percentage) in step with them. All
//! mutations go through the budget so the derived figures are recomputed
//! before the caller gets control back.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::Category;
use super::ids::ItemId;
use super::item::Item;
use super::money::Money;
use super::report::Report;
use super::share::Share;
use crate::error::{BudgetError, BudgetResult};

/// Aggregate of an income report and an expense report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    income_report: Report,
    expense_report: Report,
    net_income: Money,
    expense_percent: Share,
}

impl Budget {
    /// Create a budget with two empty reports
    pub fn new() -> Self {
        Self {
            income_report: Report::new(Category::Income),
            expense_report: Report::new(Category::Expense),
            net_income: Money::zero(),
            expense_percent: Share::Percent(0),
        }
    }

    /// Create a budget from existing reports
    ///
    /// Fails if either report holds the wrong category.
    pub fn with_reports(income_report: Report, expense_report: Report) -> BudgetResult<Self> {
        if income_report.category() != Category::Income {
            return Err(BudgetError::validation(
                "First report of a budget must be the income report",
            ));
        }
        if expense_report.category() != Category::Expense {
            return Err(BudgetError::validation(
                "Second report of a budget must be the expense report",
            ));
        }

        let mut budget = Self {
            income_report,
            expense_report,
            net_income: Money::zero(),
            expense_percent: Share::Percent(0),
        };
        budget.recompute();
        Ok(budget)
    }

    /// Recompute net income, expense percentages and the overall expense share
    pub fn recompute(&mut self) {
        let income_total = self.income_report.total();
        let expense_total = self.expense_report.total();

        // Reports keep totals within 0..=i64::MAX cents, so this cannot overflow
        self.net_income = income_total - expense_total;
        self.expense_report.recompute_item_percentages(income_total);
        self.expense_percent = if expense_total.is_zero() {
            Share::Percent(0)
        } else {
            Share::of(expense_total, income_total)
        };

        debug!(
            income = income_total.cents(),
            expenses = expense_total.cents(),
            net = self.net_income.cents(),
            expense_percent = %self.expense_percent,
            "budget recomputed"
        );
    }

    /// Add an item to the report matching its category, then recompute
    pub fn add_item(&mut self, item: Item) -> BudgetResult<ItemId> {
        let id = self.report_mut(item.category()).add_item(item)?;
        self.recompute();
        Ok(id)
    }

    /// Remove an item from the given report, then recompute
    pub fn remove_item(&mut self, category: Category, id: ItemId) -> BudgetResult<Item> {
        let removed = self.report_mut(category).remove_item(id)?;
        self.recompute();
        Ok(removed)
    }

    pub fn income_report(&self) -> &Report {
        &self.income_report
    }

    pub fn expense_report(&self) -> &Report {
        &self.expense_report
    }

    /// The report holding items of `category`
    pub fn report(&self, category: Category) -> &Report {
        match category {
            Category::Income => &self.income_report,
            Category::Expense => &self.expense_report,
        }
    }

    fn report_mut(&mut self, category: Category) -> &mut Report {
        match category {
            Category::Income => &mut self.income_report,
            Category::Expense => &mut self.expense_report,
        }
    }

    /// Income total minus expense total
    pub fn net_income(&self) -> Money {
        self.net_income
    }

    /// Expense total as a share of income total
    pub fn expense_percent(&self) -> Share {
        self.expense_percent
    }

    /// Check if expenses exceed income
    pub fn is_over_budget(&self) -> bool {
        self.net_income.is_negative()
    }

    /// Snapshot of the current state
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary {
            income_total: self.income_report.total(),
            expense_total: self.expense_report.total(),
            net_income: self.net_income,
            expense_percent: self.expense_percent,
            income: self.income_report.items().to_vec(),
            expenses: self.expense_report.items().to_vec(),
        }
    }
}

impl Default for Budget {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time copy of a budget's figures and items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub income_total: Money,
    pub expense_total: Money,
    pub net_income: Money,
    pub expense_percent: Share,
    pub income: Vec<Item>,
    pub expenses: Vec<Item>,
}
