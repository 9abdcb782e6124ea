//! CSV export of budget items
//!
//! One row per item, income first, each report in insertion order.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetSummary, Item, ItemRef};

const HEADER: [&str; 5] = ["Ref", "Type", "Description", "Value", "Percent of Income"];

/// Export all items of a budget summary to CSV
pub fn export_items_csv<W: Write>(summary: &BudgetSummary, writer: &mut W) -> BudgetResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(HEADER)?;

    for item in summary.income.iter().chain(&summary.expenses) {
        csv_writer.write_record(item_record(item))?;
    }

    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

fn item_record(item: &Item) -> [String; 5] {
    let reference = item
        .id()
        .map(|id| ItemRef::new(item.category(), id).to_string())
        .unwrap_or_default();
    let percent = item
        .percent_of_income()
        .map(|share| share.to_string())
        .unwrap_or_default();

    [
        reference,
        item.category().as_str().to_string(),
        item.description().to_string(),
        format!("{:.2}", item.value().cents() as f64 / 100.0),
        percent,
    ]
}
