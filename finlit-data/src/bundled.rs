//! Bundled 2024 federal reference data.
//!
//! The CSV tables are embedded at compile time so every calculator works out
//! of the box; callers can still load their own tables through
//! [`TableLoader`](crate::TableLoader).

use finlit_core::FicaConfig;
use rust_decimal::Decimal;

use crate::loader::{TableError, TableLoader, TaxTables};

const BRACKETS_2024: &str = include_str!("../data/brackets_2024.csv");
const DEDUCTIONS_2024: &str = include_str!("../data/deductions_2024.csv");

/// The 2024 federal brackets and standard deductions for all four filing
/// statuses.
///
/// # Errors
///
/// Returns [`TableError`] only if the embedded CSVs are malformed; the
/// bundled-table tests keep that from shipping.
pub fn tax_tables_2024() -> Result<TaxTables, TableError> {
    let brackets = TableLoader::parse_brackets(BRACKETS_2024.as_bytes())?;
    let deductions = TableLoader::parse_deductions(DEDUCTIONS_2024.as_bytes())?;
    TableLoader::assemble(&brackets, &deductions)
}

/// 2024 FICA rates: 6.2% social security up to the $168,600 wage cap, 1.45%
/// Medicare uncapped, and 0.9% additional Medicare above $200,000.
pub fn fica_2024() -> FicaConfig {
    FicaConfig {
        social_security_rate_percent: Decimal::new(62, 1),
        social_security_wage_cap: Decimal::from(168_600),
        medicare_rate_percent: Decimal::new(145, 2),
        additional_medicare_rate_percent: Decimal::new(9, 1),
        additional_medicare_threshold: Decimal::from(200_000),
    }
}
