//! Budget display formatting
//!
//! Renders the budget headline figures and the item lists of each report.

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::format::{format_amount, format_net_income, format_signed, month_label, truncate};
use crate::config::Settings;
use crate::models::{Budget, Category, Item, ItemRef, Report};

/// One line of the item table
#[derive(Tabled)]
struct ItemRow {
    #[tabled(rename = "Ref")]
    reference: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "% of Income")]
    percent: String,
}

impl ItemRow {
    fn new(item: &Item, settings: &Settings) -> Self {
        let reference = item
            .id()
            .map(|id| ItemRef::new(item.category(), id).to_string())
            .unwrap_or_default();

        Self {
            reference,
            description: truncate(item.description(), 40),
            value: format_signed(item.category(), item.value(), settings),
            percent: item
                .percent_of_income()
                .map(|share| share.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Format the headline figures of a budget
///
/// `month` is shown as the title when given and enabled in the settings.
pub fn format_budget_header(
    budget: &Budget,
    settings: &Settings,
    month: Option<NaiveDate>,
) -> String {
    let mut output = String::new();

    match month.filter(|_| settings.show_month_label) {
        Some(date) => output.push_str(&format!("Available Budget in {}\n", month_label(date))),
        None => output.push_str("Available Budget\n"),
    }
    output.push_str(&format!(
        "  {}\n",
        format_net_income(budget.net_income(), settings)
    ));
    output.push_str(&format!(
        "  {:<10} {:>14}\n",
        "Income",
        format_amount(budget.income_report().total(), settings)
    ));
    output.push_str(&format!(
        "  {:<10} {:>14}  {}\n",
        "Expenses",
        format_amount(budget.expense_report().total(), settings),
        budget.expense_percent()
    ));

    output
}

/// Format the items of a report as a table
pub fn format_item_table(report: &Report, settings: &Settings) -> String {
    if report.is_empty() {
        let noun = match report.category() {
            Category::Income => "income",
            Category::Expense => "expense",
        };
        return format!("No {} items.\n", noun);
    }

    let rows: Vec<ItemRow> = report
        .items()
        .iter()
        .map(|item| ItemRow::new(item, settings))
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

/// Format one line describing a single item, used after add and delete
pub fn format_item_line(item_ref: ItemRef, item: &Item, settings: &Settings) -> String {
    let mut line = format!(
        "{}: {} ({})",
        item_ref,
        item.description(),
        format_signed(item.category(), item.value(), settings)
    );
    if let Some(share) = item.percent_of_income() {
        line.push_str(&format!(" [{}]", share));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn sample_budget() -> Budget {
        let mut budget = Budget::new();
        budget
            .add_item(Item::new("Salary", Money::from_dollars(1000), Category::Income).unwrap())
            .unwrap();
        budget
            .add_item(Item::new("Rent", Money::from_dollars(300), Category::Expense).unwrap())
            .unwrap();
        budget
    }

    #[test]
    fn test_header_with_month() {
        let budget = sample_budget();
        let month = NaiveDate::from_ymd_opt(2026, 10, 19);
        let output = format_budget_header(&budget, &Settings::default(), month);

        assert!(output.starts_with("Available Budget in Oct 2026"));
        assert!(output.contains("+$700"));
        assert!(output.contains("$1,000"));
        assert!(output.contains("30%"));
    }

    #[test]
    fn test_header_month_disabled() {
        let settings = Settings {
            show_month_label: false,
            ..Settings::default()
        };
        let output =
            format_budget_header(&Budget::new(), &settings, NaiveDate::from_ymd_opt(2026, 1, 1));

        assert!(output.starts_with("Available Budget\n"));
        assert!(output.contains("0%"));
    }

    #[test]
    fn test_item_table() {
        let budget = sample_budget();
        let table = format_item_table(budget.expense_report(), &Settings::default());

        assert!(table.contains("expense-0"));
        assert!(table.contains("Rent"));
        assert!(table.contains("- $300"));
        assert!(table.contains("30%"));
        assert!(table.contains("% of Income"));
    }

    #[test]
    fn test_empty_item_table() {
        let budget = Budget::new();
        assert_eq!(
            format_item_table(budget.income_report(), &Settings::default()),
            "No income items.\n"
        );
    }

    #[test]
    fn test_item_line() {
        let budget = sample_budget();
        let rent = &budget.expense_report().items()[0];
        let item_ref = ItemRef::new(Category::Expense, rent.id().unwrap());

        assert_eq!(
            format_item_line(item_ref, rent, &Settings::default()),
            "expense-0: Rent (- $300) [30%]"
        );
    }
}
