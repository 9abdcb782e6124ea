//! Display formatting for terminal output
//!
//! Provides utilities for formatting the budget for terminal display:
//! amounts, headline figures and item tables.

pub mod budget;
pub mod format;

pub use budget::{format_budget_header, format_item_line, format_item_table};
pub use format::{format_amount, format_net_income, format_signed, month_label};
