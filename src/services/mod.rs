//! Service layer for budget-tracker
//!
//! The service layer sits between user input and the budget model, handling
//! input validation and item references.

pub mod session;

pub use session::BudgetSession;
