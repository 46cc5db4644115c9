use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when FICA configuration values are out of range.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FicaConfigError {
    #[error("social security rate must be between 0 and 100, got {0}")]
    InvalidSocialSecurityRate(Decimal),

    #[error("social security wage cap must be positive, got {0}")]
    InvalidWageCap(Decimal),

    #[error("medicare rate must be between 0 and 100, got {0}")]
    InvalidMedicareRate(Decimal),

    #[error("additional medicare rate must be between 0 and 100, got {0}")]
    InvalidAdditionalMedicareRate(Decimal),

    #[error("additional medicare threshold must be non-negative, got {0}")]
    InvalidAdditionalMedicareThreshold(Decimal),
}

/// Payroll tax rates and limits for a tax year.
///
/// Rates are plain percentages (`6.2` means 6.2%). For 2024 the wage cap is
/// $168,600 and the additional Medicare threshold is $200,000.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FicaConfig {
    /// Social security rate, applied up to [`Self::social_security_wage_cap`].
    pub social_security_rate_percent: Decimal,

    /// Maximum earnings subject to social security tax.
    pub social_security_wage_cap: Decimal,

    /// Medicare rate, applied to all earnings with no cap.
    pub medicare_rate_percent: Decimal,

    /// Additional Medicare rate, applied above
    /// [`Self::additional_medicare_threshold`].
    pub additional_medicare_rate_percent: Decimal,

    /// Earnings threshold above which the additional Medicare rate applies.
    pub additional_medicare_threshold: Decimal,
}

impl FicaConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`FicaConfigError`] if any rate is outside 0–100, the wage cap
    /// is not positive, or the additional Medicare threshold is negative.
    pub fn validate(&self) -> Result<(), FicaConfigError> {
        let percent_range = Decimal::ZERO..=Decimal::ONE_HUNDRED;

        if !percent_range.contains(&self.social_security_rate_percent) {
            return Err(FicaConfigError::InvalidSocialSecurityRate(
                self.social_security_rate_percent,
            ));
        }
        if self.social_security_wage_cap <= Decimal::ZERO {
            return Err(FicaConfigError::InvalidWageCap(
                self.social_security_wage_cap,
            ));
        }
        if !percent_range.contains(&self.medicare_rate_percent) {
            return Err(FicaConfigError::InvalidMedicareRate(
                self.medicare_rate_percent,
            ));
        }
        if !percent_range.contains(&self.additional_medicare_rate_percent) {
            return Err(FicaConfigError::InvalidAdditionalMedicareRate(
                self.additional_medicare_rate_percent,
            ));
        }
        if self.additional_medicare_threshold < Decimal::ZERO {
            return Err(FicaConfigError::InvalidAdditionalMedicareThreshold(
                self.additional_medicare_threshold,
            ));
        }
        Ok(())
    }
}
