//! Session CLI commands
//!
//! Each input line is split shell-style and parsed as one of the session
//! subcommands. Errors are reported and the session keeps going; only
//! `quit` or the end of input stops it.

use std::io::{BufRead, Write};

use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{format_budget_header, format_item_line, format_item_table};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_budget_json, export_items_csv, ExportFormat};
use crate::models::{Category, Item, ItemRef};
use crate::services::BudgetSession;

/// One line of session input
#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "budget", disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add an income or expense item
    Add {
        /// Item type: inc, income, exp or expense
        category: String,
        /// What the item is
        description: String,
        /// Amount (e.g., "1000" or "12.50")
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Delete an item by reference (e.g., "expense-0")
    #[command(alias = "del", alias = "rm")]
    Delete {
        /// Item reference as shown by `list`
        reference: String,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Only show one type (income or expense)
        #[arg(short = 't', long = "type")]
        category: Option<String>,
    },

    /// Show available budget, totals and expense percentage
    #[command(alias = "show")]
    Summary,

    /// Write all items to stdout
    Export {
        /// Output format
        #[arg(value_enum)]
        format: ExportFormat,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

/// Whether the session should keep reading input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionFlow {
    Continue,
    Quit,
}

/// Handle a single session command
pub fn handle_session_command<W: Write>(
    session: &mut BudgetSession,
    settings: &Settings,
    month: Option<NaiveDate>,
    cmd: SessionCommand,
    out: &mut W,
) -> BudgetResult<SessionFlow> {
    match cmd {
        SessionCommand::Add {
            category,
            description,
            value,
        } => {
            let item_ref = session.submit(&description, &value, &category)?;
            let item = lookup(session, item_ref)?;

            writeln!(out, "Added {}", format_item_line(item_ref, item, settings))?;
            write!(
                out,
                "{}",
                format_budget_header(session.budget(), settings, month)
            )?;
        }

        SessionCommand::Delete { reference } => {
            let (item_ref, removed) = session.delete(&reference)?;

            writeln!(
                out,
                "Deleted {}",
                format_item_line(item_ref, &removed, settings)
            )?;
            write!(
                out,
                "{}",
                format_budget_header(session.budget(), settings, month)
            )?;
        }

        SessionCommand::List { category } => {
            let categories = match category {
                Some(name) => vec![name
                    .parse::<Category>()
                    .map_err(|e| BudgetError::validation(e.to_string()))?],
                None => Category::ALL.to_vec(),
            };

            for category in categories {
                writeln!(out, "{}", category)?;
                write!(
                    out,
                    "{}",
                    format_item_table(session.budget().report(category), settings)
                )?;
            }
        }

        SessionCommand::Summary => {
            write!(
                out,
                "{}",
                format_budget_header(session.budget(), settings, month)
            )?;
        }

        SessionCommand::Export { format } => {
            let summary = session.budget().summary();
            match format {
                ExportFormat::Csv => export_items_csv(&summary, out)?,
                ExportFormat::Json => export_budget_json(&summary, out)?,
            }
        }

        SessionCommand::Quit => return Ok(SessionFlow::Quit),
    }

    Ok(SessionFlow::Continue)
}

fn lookup(session: &BudgetSession, item_ref: ItemRef) -> BudgetResult<&Item> {
    session
        .budget()
        .report(item_ref.category)
        .get(item_ref.id)
        .ok_or_else(|| BudgetError::item_not_found(item_ref.to_string()))
}

/// Options for running a session over an input stream
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub settings: Settings,
    /// Month shown in the budget title
    pub month: Option<NaiveDate>,
    /// Print a prompt before each line
    pub interactive: bool,
}

/// Run a session until `quit` or end of input, returning the final state
pub fn run_session<R, W, E>(
    input: R,
    out: &mut W,
    err: &mut E,
    options: &SessionOptions,
) -> BudgetResult<BudgetSession>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut session = BudgetSession::new();

    if options.interactive {
        write!(
            out,
            "{}",
            format_budget_header(session.budget(), &options.settings, options.month)
        )?;
        writeln!(out, "Type 'help' for commands, 'quit' to leave.")?;
    }

    let mut lines = input.lines();
    loop {
        if options.interactive {
            write!(out, "> ")?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let words = match shell_words::split(line) {
            Ok(words) => words,
            Err(e) => {
                warn!(error = %e, "could not split input line");
                writeln!(err, "Error: could not parse line: {}", e)?;
                continue;
            }
        };

        let cmd = match SessionLine::try_parse_from(words) {
            Ok(parsed) => parsed.command,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp) => {
                write!(out, "{}", e)?;
                continue;
            }
            Err(e) => {
                write!(err, "{}", e)?;
                continue;
            }
        };

        debug!(?cmd, "session command");
        let result =
            handle_session_command(&mut session, &options.settings, options.month, cmd, out);
        match result {
            Ok(SessionFlow::Continue) => {}
            Ok(SessionFlow::Quit) => break,
            Err(e) => writeln!(err, "Error: {}", e)?,
        }
    }

    out.flush()?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, Share};

    fn options() -> SessionOptions {
        SessionOptions {
            settings: Settings::default(),
            month: NaiveDate::from_ymd_opt(2026, 10, 1),
            interactive: false,
        }
    }

    fn run(script: &str) -> (BudgetSession, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let session = run_session(script.as_bytes(), &mut out, &mut err, &options()).unwrap();
        (
            session,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_add_and_summary() {
        let (session, out, err) = run("add inc Salary 1000\nadd exp Rent 300\nsummary\n");

        assert!(err.is_empty(), "unexpected errors: {err}");
        assert!(out.contains("Added income-0: Salary (+ $1,000)"));
        assert!(out.contains("Added expense-0: Rent (- $300) [30%]"));
        assert!(out.contains("Available Budget in Oct 2026"));
        assert!(out.contains("+$700"));
        assert_eq!(session.budget().expense_percent(), Share::Percent(30));
    }

    #[test]
    fn test_quoted_description() {
        let (session, _, err) = run("add expense \"Car insurance\" 120.50\n");

        assert!(err.is_empty());
        let item = &session.budget().expense_report().items()[0];
        assert_eq!(item.description(), "Car insurance");
        assert_eq!(item.value(), Money::from_cents(12050));
    }

    #[test]
    fn test_delete() {
        let (session, out, err) = run("add inc Salary 1000\nadd exp Rent 300\ndel expense-0\n");

        assert!(err.is_empty());
        assert!(out.contains("Deleted expense-0: Rent"));
        assert!(session.budget().expense_report().is_empty());
        assert_eq!(session.budget().net_income(), Money::from_dollars(1000));
    }

    #[test]
    fn test_errors_do_not_stop_session() {
        let (session, _, err) =
            run("add inc \"\" 50\ndelete expense-9\nfrobnicate\nadd inc Salary 1000\n");

        assert!(err.contains("Validation error: Description cannot be empty"));
        assert!(err.contains("Item not found: expense-9"));
        assert!(err.contains("frobnicate"));
        assert_eq!(session.budget().income_report().len(), 1);
    }

    #[test]
    fn test_delete_rejects_signed_reference() {
        let (session, out, err) = run("add inc Salary 1000\nrm income-+0\n");

        assert!(err.contains("Invalid item reference 'income-+0'"));
        assert!(!out.contains("Deleted"));
        assert_eq!(session.budget().income_report().len(), 1);
    }

    #[test]
    fn test_negative_value_reported_as_validation_error() {
        let (session, _, err) = run("add exp Refund -20\n");

        assert!(err.contains("Value must be positive"));
        assert!(session.budget().expense_report().is_empty());
    }

    #[test]
    fn test_quit_stops_reading() {
        let (session, _, _) = run("add inc Salary 1000\nquit\nadd inc Bonus 200\n");
        assert_eq!(session.budget().income_report().len(), 1);
    }

    #[test]
    fn test_comments_and_blank_lines_ignored() {
        let (session, out, err) = run("# setup\n\n   \nadd inc Salary 1000\n");
        assert!(err.is_empty());
        assert!(out.contains("Added income-0"));
        assert_eq!(session.budget().income_report().len(), 1);
    }

    #[test]
    fn test_list_by_type() {
        let (_, out, err) = run("add inc Salary 1000\nadd exp Rent 300\nlist --type expense\n");

        assert!(err.is_empty());
        assert!(out.contains("expense-0"));
        assert!(!out.contains("No income items"));
    }

    #[test]
    fn test_list_empty() {
        let (_, out, _) = run("list\n");
        assert!(out.contains("No income items."));
        assert!(out.contains("No expense items."));
    }

    #[test]
    fn test_export_csv() {
        let (_, out, err) = run("add inc Salary 1000\nexport csv\n");
        assert!(err.is_empty());
        assert!(out.contains("Ref,Type,Description,Value,Percent of Income"));
        assert!(out.contains("income-0,income,Salary,1000.00,"));
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let (_, out, err) = run("help\n");
        assert!(err.is_empty());
        assert!(out.contains("add"));
        assert!(out.contains("delete"));
    }
}
