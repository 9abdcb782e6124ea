//! Core data models for budget-tracker
//!
//! This module contains the budget computation model: items, the reports
//! that collect them by category, and the budget that combines both reports.

pub mod budget;
pub mod category;
pub mod ids;
pub mod item;
pub mod money;
pub mod report;
pub mod share;

pub use budget::{Budget, BudgetSummary};
pub use category::{Category, UnknownCategory};
pub use ids::{ItemId, ItemRef};
pub use item::{create_item, Item};
pub use money::{Money, MoneyParseError};
pub use report::Report;
pub use share::Share;
