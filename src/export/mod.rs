//! Export functionality for budget-tracker
//!
//! Writes the current budget to CSV or JSON. Nothing is read back; exports
//! are for use in other tools.

pub mod csv;
pub mod json;

pub use self::csv::export_items_csv;
pub use self::json::{export_budget_json, BudgetExport, EXPORT_SCHEMA_VERSION};

use std::fmt;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
        }
    }
}
