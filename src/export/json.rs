//! JSON export of the budget summary

use serde::Serialize;
use std::io::Write;

use crate::error::BudgetResult;
use crate::models::BudgetSummary;

/// Full JSON export structure
#[derive(Debug, Serialize)]
pub struct BudgetExport<'a> {
    /// Schema version for the export format
    pub schema_version: u32,
    /// Export timestamp
    pub exported_at: String,
    #[serde(flatten)]
    pub summary: &'a BudgetSummary,
}

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: u32 = 1;

/// Write a budget summary as pretty-printed JSON
pub fn export_budget_json<W: Write>(summary: &BudgetSummary, writer: &mut W) -> BudgetResult<()> {
    let export = BudgetExport {
        schema_version: EXPORT_SCHEMA_VERSION,
        exported_at: chrono::Utc::now().to_rfc3339(),
        summary,
    };

    serde_json::to_writer_pretty(&mut *writer, &export)?;
    writeln!(writer)?;
    Ok(())
}
