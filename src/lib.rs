//! budget-tracker - Terminal income and expense tracker
//!
//! This library keeps a running budget of income and expense items, all in
//! memory for the length of one session. It reports the net income, each
//! expense as a percentage of total income, and total expenses as a
//! percentage of total income.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: The budget computation model (items, reports, budget)
//! - `services`: Session service turning user input into budget mutations
//! - `cli`: Line-oriented session command parsing and handlers
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//!
//! # Example
//!
//! ```rust
//! use budget_tracker::models::{create_item, Budget, Share};
//!
//! let mut budget = Budget::new();
//! budget.add_item(create_item("Salary", 1000.0, "inc")?)?;
//! budget.add_item(create_item("Rent", 300.0, "exp")?)?;
//!
//! assert_eq!(budget.net_income().dollars(), 700);
//! assert_eq!(budget.expense_percent(), Share::Percent(30));
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
