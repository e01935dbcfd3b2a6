use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ledgerscope::cli::{
    handle_budget_command, handle_config_command, handle_dashboard_command,
    handle_spending_command, handle_trend_command, ConfigArgs, ReportArgs,
};
use ledgerscope::config::{LedgerPaths, Settings};

#[derive(Parser)]
#[command(
    name = "ledgerscope",
    version,
    about = "Deterministic aggregation engine for personal finance dashboards",
    long_about = "ledgerscope reads a JSON snapshot of recurring records, budget \
                  allocations, and portfolio positions, and computes the figures a \
                  finance dashboard displays: balances, monthly spending, budget \
                  utilization with alerts, and spending trends."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Overview: balance, month totals, portfolio, recent activity, trend
    #[command(alias = "dash")]
    Dashboard(ReportArgs),

    /// Budget utilization per category with unbudgeted spend and alerts
    Budget(ReportArgs),

    /// Per-category expense breakdown for one month
    Spending(ReportArgs),

    /// Monthly expense totals over a trailing window
    Trend {
        #[command(flatten)]
        args: ReportArgs,

        /// How many trailing months to cover
        #[arg(long)]
        months: Option<u32>,
    },

    /// Show current configuration, or write a default config file
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard(args)) => {
            handle_dashboard_command(&settings, args)?;
        }
        Some(Commands::Budget(args)) => {
            handle_budget_command(&settings, args)?;
        }
        Some(Commands::Spending(args)) => {
            handle_spending_command(&settings, args)?;
        }
        Some(Commands::Trend { args, months }) => {
            handle_trend_command(&settings, args, months)?;
        }
        Some(Commands::Config(args)) => {
            handle_config_command(&paths, &settings, args)?;
        }
        None => {
            println!("ledgerscope - personal finance aggregation engine");
            println!();
            println!("Run 'ledgerscope --help' for usage information.");
            println!("Run 'ledgerscope dashboard --input snapshot.json' to get started.");
        }
    }

    Ok(())
}
