use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::Args;
use finlit_core::FilingStatus;
use finlit_core::calculations::{TaxBreakdown, TaxCalculator, TaxInput};
use rust_decimal::Decimal;

use super::{load_tables, money};

#[derive(Debug, Args)]
pub struct TaxArgs {
    /// Gross annual income.
    #[arg(long)]
    income: Decimal,

    /// Filing status: single, married-joint, married-separate, or
    /// head-of-household (short codes S/MFJ/MFS/HOH also work).
    #[arg(long, default_value = "single")]
    status: String,

    /// Pre-tax contributions (401k, IRA, HSA).
    #[arg(long, default_value = "0")]
    pretax: Decimal,

    /// Flat state income tax rate in percent.
    #[arg(long, default_value = "0")]
    state_rate: Decimal,

    /// Brackets CSV overriding the bundled 2024 table.
    #[arg(long, requires = "deductions")]
    brackets: Option<PathBuf>,

    /// Standard-deduction CSV overriding the bundled 2024 table.
    #[arg(long, requires = "brackets")]
    deductions: Option<PathBuf>,

    /// Emit JSON instead of text.
    #[arg(long)]
    json: bool,
}

pub fn run(args: TaxArgs) -> Result<()> {
    let status = FilingStatus::parse(&args.status)
        .ok_or_else(|| anyhow!("unknown filing status '{}'", args.status))?;
    let tables = load_tables(args.brackets.as_deref(), args.deductions.as_deref())?;
    let fica = finlit_data::fica_2024();

    let calculator = TaxCalculator::new(tables.profile(status), &fica);
    let breakdown = calculator.calculate(&TaxInput {
        gross_income: args.income,
        pretax_contributions: args.pretax,
        state_rate_percent: args.state_rate,
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        print_breakdown(status, &breakdown);
    }
    Ok(())
}

fn print_breakdown(status: FilingStatus, breakdown: &TaxBreakdown) {
    println!("Filing status:      {}", status.display_name());
    println!("Taxable income:     {}", money(breakdown.taxable_income));
    println!();
    println!("Federal tax:        {}", money(breakdown.federal_tax));
    for bracket in &breakdown.bracket_taxes {
        println!(
            "  {:>5}% on {:>13}  {}",
            bracket.rate_percent,
            money(bracket.taxed_amount),
            money(bracket.tax)
        );
    }
    println!(
        "Social security:    {}",
        money(breakdown.social_security_tax)
    );
    println!(
        "Medicare:           {}",
        money(breakdown.medicare_tax + breakdown.additional_medicare_tax)
    );
    println!("State tax:          {}", money(breakdown.state_tax));
    println!("Total tax:          {}", money(breakdown.total_tax));
    println!();
    println!("Effective rate:     {}%", breakdown.effective_rate_percent);
    println!("Marginal rate:      {}%", breakdown.marginal_rate_percent);
}
