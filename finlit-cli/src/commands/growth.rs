use anyhow::{Result, bail};
use clap::Args;
use finlit_core::GrowthScenario;
use finlit_core::calculations::growth::{self, GrowthProjection};
use rust_decimal::Decimal;
use serde::Serialize;

use super::money;

#[derive(Debug, Args)]
pub struct GrowthArgs {
    /// Starting balance.
    #[arg(long, default_value = "0")]
    initial: Decimal,

    /// Contribution added at the end of each month.
    #[arg(long, default_value = "0")]
    monthly: Decimal,

    /// Annual growth rate in percent.
    #[arg(long, default_value = "0")]
    rate: Decimal,

    /// Projection horizon in years.
    #[arg(long, conflicts_with = "months")]
    years: Option<u32>,

    /// Projection horizon in months.
    #[arg(long)]
    months: Option<u32>,

    /// Also report the first month the balance reaches this target.
    #[arg(long)]
    target: Option<Decimal>,

    /// Print the month-by-month schedule.
    #[arg(long)]
    schedule: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct GrowthReport {
    #[serde(flatten)]
    projection: GrowthProjection,
    #[serde(skip_serializing_if = "Option::is_none")]
    months_to_target: Option<Option<u32>>,
}

pub fn run(args: GrowthArgs) -> Result<()> {
    let months = match (args.years, args.months) {
        (Some(years), None) => years.saturating_mul(12),
        (None, Some(months)) => months,
        (None, None) => bail!("provide a horizon with --years or --months"),
        (Some(_), Some(_)) => unreachable!("clap rejects --years with --months"),
    };

    let scenario = GrowthScenario {
        initial_amount: args.initial,
        monthly_contribution: args.monthly,
        annual_rate_percent: args.rate,
        months,
    };

    let projection = growth::project(&scenario);
    let months_to_target = args.target.map(|target| growth::months_until(&scenario, target));

    if args.json {
        let report = GrowthReport {
            projection,
            months_to_target,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if args.schedule {
        println!("{:>5}  {:>14}  {:>14}", "month", "balance", "contributed");
        for entry in &projection.schedule {
            println!(
                "{:>5}  {:>14}  {:>14}",
                entry.month,
                money(entry.balance),
                money(entry.contributed)
            );
        }
        println!();
    }

    println!("Future value:        {}", money(projection.future_value));
    println!(
        "Total contributions: {}",
        money(projection.total_contributions)
    );
    println!("Growth:              {}", money(projection.growth));

    if let Some(reached) = months_to_target {
        match reached {
            Some(0) => println!("Target already reached."),
            Some(month) => println!("Target reached in month {month}."),
            None => println!("Target is not reachable with this plan."),
        }
    }
    Ok(())
}
