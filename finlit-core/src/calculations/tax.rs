//! Progressive income tax calculation.
//!
//! Computes a full take-home breakdown from gross income: federal tax summed
//! bracket by bracket at each bracket's marginal rate, FICA payroll taxes
//! (social security up to the wage cap, Medicare uncapped, additional
//! Medicare above a threshold), a flat state tax on taxable income, and the
//! effective and marginal rates.
//!
//! User-supplied amounts are never rejected: negative values clamp to zero
//! with an advisory warning, and taxable income below zero after deductions
//! clamps to zero tax. Only a structurally invalid rate schedule or FICA
//! configuration is an error.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use finlit_core::calculations::{TaxCalculator, TaxInput};
//! use finlit_core::{FicaConfig, FilingProfile, FilingStatus, TaxBracket};
//!
//! let profile = FilingProfile {
//!     status: FilingStatus::Single,
//!     standard_deduction: dec!(14600),
//!     brackets: vec![
//!         TaxBracket { lower_bound: dec!(0), upper_bound: Some(dec!(11600)), rate_percent: dec!(10) },
//!         TaxBracket { lower_bound: dec!(11600), upper_bound: Some(dec!(47150)), rate_percent: dec!(12) },
//!         TaxBracket { lower_bound: dec!(47150), upper_bound: None, rate_percent: dec!(22) },
//!     ],
//! };
//! let fica = FicaConfig {
//!     social_security_rate_percent: dec!(6.2),
//!     social_security_wage_cap: dec!(168600),
//!     medicare_rate_percent: dec!(1.45),
//!     additional_medicare_rate_percent: dec!(0.9),
//!     additional_medicare_threshold: dec!(200000),
//! };
//!
//! let calculator = TaxCalculator::new(&profile, &fica);
//! let breakdown = calculator
//!     .calculate(&TaxInput {
//!         gross_income: dec!(75000),
//!         pretax_contributions: dec!(0),
//!         state_rate_percent: dec!(0),
//!     })
//!     .unwrap();
//!
//! assert_eq!(breakdown.taxable_income, dec!(60400));
//! assert_eq!(breakdown.federal_tax, dec!(8341.00));
//! assert_eq!(breakdown.marginal_rate_percent, dec!(22));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::{clamp_non_negative, fraction, max, round_half_up};
use crate::models::{FicaConfig, FicaConfigError, FilingProfile, ProfileError};

/// Errors that can occur during a tax calculation.
///
/// Both variants describe malformed configuration; user inputs are clamped
/// rather than rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxError {
    #[error(transparent)]
    Profile(#[from] ProfileError),

    #[error(transparent)]
    Fica(#[from] FicaConfigError),
}

/// User-supplied inputs for a tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    /// Gross annual income before any deductions.
    pub gross_income: Decimal,

    /// Pre-tax contributions (401k, IRA, HSA) subtracted before the
    /// standard deduction.
    pub pretax_contributions: Decimal,

    /// Flat state income tax rate as a plain percentage, applied to taxable
    /// income.
    pub state_rate_percent: Decimal,
}

/// Federal tax owed within a single bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTax {
    pub rate_percent: Decimal,

    /// Portion of taxable income that fell within this bracket.
    pub taxed_amount: Decimal,

    /// Tax owed on that portion.
    pub tax: Decimal,
}

/// Complete result of a tax calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Income remaining after pre-tax contributions and the standard
    /// deduction, floored at zero.
    pub taxable_income: Decimal,

    /// Federal tax, equal to the sum of the per-bracket amounts.
    pub federal_tax: Decimal,

    /// Per-bracket federal tax amounts, in schedule order. Brackets the
    /// taxable income never reached are omitted.
    pub bracket_taxes: Vec<BracketTax>,

    /// Social security tax on gross income up to the wage cap.
    pub social_security_tax: Decimal,

    /// Medicare tax on all gross income.
    pub medicare_tax: Decimal,

    /// Additional Medicare tax on gross income above the threshold.
    pub additional_medicare_tax: Decimal,

    /// Flat state tax on taxable income.
    pub state_tax: Decimal,

    /// Federal + FICA + state.
    pub total_tax: Decimal,

    /// Total tax divided by gross income, as a percentage. Zero when gross
    /// income is zero.
    pub effective_rate_percent: Decimal,

    /// Rate of the bracket containing the last dollar of taxable income.
    /// Zero when taxable income is zero.
    pub marginal_rate_percent: Decimal,
}

/// Calculator binding a filing profile to a FICA configuration.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    profile: &'a FilingProfile,
    fica: &'a FicaConfig,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(profile: &'a FilingProfile, fica: &'a FicaConfig) -> Self {
        Self { profile, fica }
    }

    /// Runs the full calculation.
    ///
    /// # Errors
    ///
    /// Returns [`TaxError`] if the filing profile's bracket schedule or the
    /// FICA configuration fails validation.
    pub fn calculate(&self, input: &TaxInput) -> Result<TaxBreakdown, TaxError> {
        self.profile.validate()?;
        self.fica.validate()?;

        let gross = clamp_non_negative(input.gross_income, "gross_income");
        let pretax = clamp_non_negative(input.pretax_contributions, "pretax_contributions");
        let state_rate = clamp_non_negative(input.state_rate_percent, "state_rate_percent");

        let taxable_income = self.taxable_income(gross, pretax);
        let bracket_taxes = self.bracket_taxes(taxable_income);
        let federal_tax = bracket_taxes.iter().map(|b| b.tax).sum();

        let social_security_tax = self.social_security_tax(gross);
        let medicare_tax = self.medicare_tax(gross);
        let additional_medicare_tax = self.additional_medicare_tax(gross);
        let state_tax = self.state_tax(taxable_income, state_rate);

        let total_tax = federal_tax
            + social_security_tax
            + medicare_tax
            + additional_medicare_tax
            + state_tax;

        Ok(TaxBreakdown {
            taxable_income,
            federal_tax,
            bracket_taxes,
            social_security_tax,
            medicare_tax,
            additional_medicare_tax,
            state_tax,
            total_tax,
            effective_rate_percent: self.effective_rate(total_tax, gross),
            marginal_rate_percent: self.marginal_rate(taxable_income),
        })
    }

    /// Gross income minus pre-tax contributions and the standard deduction,
    /// floored at zero.
    fn taxable_income(&self, gross: Decimal, pretax: Decimal) -> Decimal {
        max(
            gross - pretax - self.profile.standard_deduction,
            Decimal::ZERO,
        )
    }

    /// Federal tax per bracket: each bracket taxes the span of income that
    /// falls within it at that bracket's marginal rate.
    fn bracket_taxes(&self, taxable_income: Decimal) -> Vec<BracketTax> {
        let mut taxes = Vec::new();

        for bracket in &self.profile.brackets {
            if taxable_income <= bracket.lower_bound {
                break;
            }
            let span_top = match bracket.upper_bound {
                Some(upper) => taxable_income.min(upper),
                None => taxable_income,
            };
            let taxed_amount = span_top - bracket.lower_bound;
            taxes.push(BracketTax {
                rate_percent: bracket.rate_percent,
                taxed_amount,
                tax: round_half_up(taxed_amount * fraction(bracket.rate_percent)),
            });
        }

        taxes
    }

    fn social_security_tax(&self, gross: Decimal) -> Decimal {
        let capped = gross.min(self.fica.social_security_wage_cap);
        round_half_up(capped * fraction(self.fica.social_security_rate_percent))
    }

    fn medicare_tax(&self, gross: Decimal) -> Decimal {
        round_half_up(gross * fraction(self.fica.medicare_rate_percent))
    }

    fn additional_medicare_tax(&self, gross: Decimal) -> Decimal {
        let above = max(gross - self.fica.additional_medicare_threshold, Decimal::ZERO);
        round_half_up(above * fraction(self.fica.additional_medicare_rate_percent))
    }

    fn state_tax(&self, taxable_income: Decimal, state_rate_percent: Decimal) -> Decimal {
        round_half_up(taxable_income * fraction(state_rate_percent))
    }

    fn effective_rate(&self, total_tax: Decimal, gross: Decimal) -> Decimal {
        if gross <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        round_half_up(total_tax / gross * Decimal::ONE_HUNDRED)
    }

    fn marginal_rate(&self, taxable_income: Decimal) -> Decimal {
        self.profile
            .brackets
            .iter()
            .find(|b| b.contains(taxable_income))
            .map(|b| b.rate_percent)
            .unwrap_or(Decimal::ZERO)
    }
}
