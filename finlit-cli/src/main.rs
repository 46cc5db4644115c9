use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Personal-finance calculators: progressive taxes, savings growth, option
/// scoring, and emergency-fund planning.
#[derive(Debug, Parser)]
#[command(name = "finlit", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Federal, FICA, and state tax breakdown for a year of income.
    Tax(commands::tax::TaxArgs),

    /// Compound-growth projection for a savings plan.
    Growth(commands::growth::GrowthArgs),

    /// Rank options from a CSV by weighted criteria.
    Score(commands::score::ScoreArgs),

    /// Emergency-fund recommendation and savings timeline.
    Fund(commands::fund::FundArgs),
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `warn` so clamping advisories show but normal runs stay
///   quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.command {
        Command::Tax(args) => commands::tax::run(args),
        Command::Growth(args) => commands::growth::run(args),
        Command::Score(args) => commands::score::run(args),
        Command::Fund(args) => commands::fund::run(args),
    }
}
