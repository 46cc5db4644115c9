pub mod fund;
pub mod growth;
pub mod score;
pub mod tax;

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};
use finlit_data::{TableLoader, TaxTables};
use rust_decimal::Decimal;

/// Loads tax tables from override CSVs, or the bundled 2024 tables when no
/// overrides are given. The two files describe one table set, so either both
/// paths are provided or neither.
pub fn load_tables(brackets: Option<&Path>, deductions: Option<&Path>) -> Result<TaxTables> {
    match (brackets, deductions) {
        (Some(brackets_path), Some(deductions_path)) => {
            let brackets_file = File::open(brackets_path)
                .with_context(|| format!("failed to open: {}", brackets_path.display()))?;
            let bracket_records = TableLoader::parse_brackets(brackets_file)
                .with_context(|| format!("failed to parse: {}", brackets_path.display()))?;

            let deductions_file = File::open(deductions_path)
                .with_context(|| format!("failed to open: {}", deductions_path.display()))?;
            let deduction_records = TableLoader::parse_deductions(deductions_file)
                .with_context(|| format!("failed to parse: {}", deductions_path.display()))?;

            TableLoader::assemble(&bracket_records, &deduction_records)
                .context("failed to assemble tax tables")
        }
        (None, None) => finlit_data::tax_tables_2024().context("bundled tax tables failed to load"),
        _ => bail!("--brackets and --deductions must be provided together"),
    }
}

/// Formats a monetary amount for text output.
pub fn money(value: Decimal) -> String {
    format!("${:.2}", value)
}
