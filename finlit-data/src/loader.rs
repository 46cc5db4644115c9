use std::io::Read;

use finlit_core::{FilingProfile, FilingStatus, ProfileError, TaxBracket};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading tax table data.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("unknown filing status code '{0}'")]
    UnknownStatus(String),

    #[error("no standard deduction provided for {0:?}")]
    MissingDeduction(FilingStatus),

    #[error("no brackets provided for {0:?}")]
    MissingBrackets(FilingStatus),

    #[error(transparent)]
    Profile(#[from] ProfileError),
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        TableError::CsvParse(err.to_string())
    }
}

/// A single row of the brackets CSV.
///
/// Columns:
/// - `status`: filing status code (S, MFJ, MFS, HOH)
/// - `lower_bound`: income where this bracket starts
/// - `upper_bound`: income where it ends (empty for the unbounded bracket)
/// - `rate_percent`: marginal rate as a plain percentage (e.g. 22)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketRecord {
    pub status: String,
    pub lower_bound: Decimal,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
}

/// A single row of the standard-deduction CSV: `status,amount`.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DeductionRecord {
    pub status: String,
    pub amount: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// A validated filing profile for each of the four statuses.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxTables {
    single: FilingProfile,
    married_joint: FilingProfile,
    married_separate: FilingProfile,
    head_of_household: FilingProfile,
}

impl TaxTables {
    pub fn profile(&self, status: FilingStatus) -> &FilingProfile {
        match status {
            FilingStatus::Single => &self.single,
            FilingStatus::MarriedFilingJointly => &self.married_joint,
            FilingStatus::MarriedFilingSeparately => &self.married_separate,
            FilingStatus::HeadOfHousehold => &self.head_of_household,
        }
    }
}

/// Loader for tax tables from CSV data.
///
/// Two files feed a table set: a brackets CSV and a standard-deduction CSV.
/// Assembly groups brackets by status, sorts them by lower bound, and
/// validates every resulting profile, so a loaded [`TaxTables`] always
/// satisfies the schedule invariants.
pub struct TableLoader;

impl TableLoader {
    /// Parses bracket rows from a CSV reader.
    pub fn parse_brackets<R: Read>(reader: R) -> Result<Vec<BracketRecord>, TableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: BracketRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Parses standard-deduction rows from a CSV reader.
    pub fn parse_deductions<R: Read>(reader: R) -> Result<Vec<DeductionRecord>, TableError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();
        for result in csv_reader.deserialize() {
            let record: DeductionRecord = result?;
            records.push(record);
        }
        Ok(records)
    }

    /// Assembles parsed records into validated per-status profiles.
    ///
    /// # Errors
    ///
    /// Returns [`TableError`] for an unknown status code, a status missing
    /// its brackets or deduction, or a profile failing schedule validation.
    pub fn assemble(
        brackets: &[BracketRecord],
        deductions: &[DeductionRecord],
    ) -> Result<TaxTables, TableError> {
        // Surface a typo'd status code instead of silently dropping rows.
        for code in brackets
            .iter()
            .map(|r| &r.status)
            .chain(deductions.iter().map(|r| &r.status))
        {
            if FilingStatus::parse(code).is_none() {
                return Err(TableError::UnknownStatus(code.clone()));
            }
        }

        Ok(TaxTables {
            single: Self::profile_for(FilingStatus::Single, brackets, deductions)?,
            married_joint: Self::profile_for(
                FilingStatus::MarriedFilingJointly,
                brackets,
                deductions,
            )?,
            married_separate: Self::profile_for(
                FilingStatus::MarriedFilingSeparately,
                brackets,
                deductions,
            )?,
            head_of_household: Self::profile_for(
                FilingStatus::HeadOfHousehold,
                brackets,
                deductions,
            )?,
        })
    }

    fn profile_for(
        status: FilingStatus,
        brackets: &[BracketRecord],
        deductions: &[DeductionRecord],
    ) -> Result<FilingProfile, TableError> {
        let mut status_brackets: Vec<TaxBracket> = brackets
            .iter()
            .filter(|r| FilingStatus::parse(&r.status) == Some(status))
            .map(|r| TaxBracket {
                lower_bound: r.lower_bound,
                upper_bound: r.upper_bound,
                rate_percent: r.rate_percent,
            })
            .collect();
        if status_brackets.is_empty() {
            return Err(TableError::MissingBrackets(status));
        }
        status_brackets.sort_by(|a, b| a.lower_bound.cmp(&b.lower_bound));

        let deduction = deductions
            .iter()
            .find(|r| FilingStatus::parse(&r.status) == Some(status))
            .ok_or(TableError::MissingDeduction(status))?;

        let profile = FilingProfile {
            status,
            standard_deduction: deduction.amount,
            brackets: status_brackets,
        };
        profile.validate()?;
        Ok(profile)
    }
}
