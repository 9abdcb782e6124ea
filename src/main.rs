use std::io::IsTerminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{run_session, SessionOptions};
use budget_tracker::config::{BudgetPaths, Settings};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Track income and expenses for the month",
    long_about = "Enter income and expense items and see your available budget, \
                  each expense as a share of income, and total expenses as a \
                  share of income. Items live in memory for the session only."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a budgeting session reading commands from stdin (default)
    Run {
        /// Don't show the current month above the budget
        #[arg(long)]
        no_month: bool,
    },

    /// Write default settings to the config directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Run { no_month: false }) {
        Commands::Run { no_month } => {
            let stdin = std::io::stdin();
            let options = SessionOptions {
                settings,
                month: (!no_month).then(|| chrono::Local::now().date_naive()),
                interactive: stdin.is_terminal(),
            };

            info!(interactive = options.interactive, "starting session");
            let session = run_session(
                stdin.lock(),
                &mut std::io::stdout().lock(),
                &mut std::io::stderr().lock(),
                &options,
            )?;
            info!(
                income_items = session.budget().income_report().len(),
                expense_items = session.budget().expense_report().len(),
                "session ended"
            );
        }
        Commands::Init => {
            println!("Writing settings to: {}", paths.settings_file().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
        }
        Commands::Config => {
            println!("budget-tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            let note = if paths.is_initialized() {
                ""
            } else {
                " (not written, using defaults)"
            };
            println!("Settings file:    {}{}", paths.settings_file().display(), note);
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Thousands separator: {}", settings.thousands_separator);
            println!("  Show month label:    {}", settings.show_month_label);
        }
    }

    Ok(())
}
