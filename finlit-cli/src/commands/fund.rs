use anyhow::{Result, anyhow};
use clap::Args;
use finlit_core::calculations::risk::{self, RiskTier};
use finlit_core::calculations::growth;
use finlit_core::{DebtLoad, GrowthScenario, HealthOutlook, JobStability, RiskProfile};
use rust_decimal::Decimal;
use serde::Serialize;

use super::money;

#[derive(Debug, Args)]
pub struct FundArgs {
    /// Monthly household expenses.
    #[arg(long)]
    expenses: Decimal,

    /// Job stability: stable, variable, or unstable.
    #[arg(long, default_value = "stable")]
    job: String,

    /// Health outlook: good, managed, or chronic.
    #[arg(long, default_value = "good")]
    health: String,

    /// Debt load: light, moderate, or heavy.
    #[arg(long, default_value = "light")]
    debt: String,

    /// Number of dependents.
    #[arg(long, default_value_t = 0)]
    dependents: u32,

    /// Household has a second income.
    #[arg(long)]
    dual_income: bool,

    /// Current emergency savings, for the timeline.
    #[arg(long, default_value = "0")]
    initial: Decimal,

    /// Planned monthly saving, for the timeline.
    #[arg(long, default_value = "0")]
    monthly: Decimal,

    /// Annual growth rate on savings in percent.
    #[arg(long, default_value = "0")]
    rate: Decimal,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct FundReport {
    months: u32,
    tier: RiskTier,
    target_amount: Decimal,
    months_to_target: Option<u32>,
}

pub fn run(args: FundArgs) -> Result<()> {
    let profile = RiskProfile {
        job_stability: parse_job(&args.job)?,
        health: parse_health(&args.health)?,
        debt: parse_debt(&args.debt)?,
        dependents: args.dependents,
        dual_income: args.dual_income,
    };

    let recommendation = risk::assess(&profile);
    let target = risk::target_amount(recommendation.months, args.expenses);

    let scenario = GrowthScenario {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_rate_percent: args.rate,
        months: 0,
    };
    let months_to_target = growth::months_until(&scenario, target);

    if args.json {
        let report = FundReport {
            months: recommendation.months,
            tier: recommendation.tier,
            target_amount: target,
            months_to_target,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "Recommended fund:  {} months of expenses ({:?} risk)",
        recommendation.months, recommendation.tier
    );
    println!("Target amount:     {}", money(target));
    match months_to_target {
        Some(0) => println!("Timeline:          target already reached"),
        Some(month) => println!("Timeline:          target reached in month {month}"),
        None => println!("Timeline:          target not reachable with this plan"),
    }
    Ok(())
}

fn parse_job(s: &str) -> Result<JobStability> {
    match s.to_ascii_lowercase().as_str() {
        "stable" => Ok(JobStability::Stable),
        "variable" => Ok(JobStability::Variable),
        "unstable" => Ok(JobStability::Unstable),
        _ => Err(anyhow!("unknown job stability '{s}'")),
    }
}

fn parse_health(s: &str) -> Result<HealthOutlook> {
    match s.to_ascii_lowercase().as_str() {
        "good" => Ok(HealthOutlook::Good),
        "managed" => Ok(HealthOutlook::Managed),
        "chronic" => Ok(HealthOutlook::Chronic),
        _ => Err(anyhow!("unknown health outlook '{s}'")),
    }
}

fn parse_debt(s: &str) -> Result<DebtLoad> {
    match s.to_ascii_lowercase().as_str() {
        "light" => Ok(DebtLoad::Light),
        "moderate" => Ok(DebtLoad::Moderate),
        "heavy" => Ok(DebtLoad::Heavy),
        _ => Err(anyhow!("unknown debt load '{s}'")),
    }
}
