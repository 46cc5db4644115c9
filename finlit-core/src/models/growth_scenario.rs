use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to a compound-growth projection.
///
/// `annual_rate_percent` is a plain percentage (`7` means 7% per year); the
/// projector compounds monthly at `annual_rate_percent / 12 / 100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthScenario {
    pub initial_amount: Decimal,
    pub monthly_contribution: Decimal,
    pub annual_rate_percent: Decimal,
    pub months: u32,
}

impl GrowthScenario {
    /// Convenience constructor for a horizon expressed in whole years.
    ///
    /// Saturates rather than overflowing on absurd year counts; the projector
    /// caps the horizon anyway.
    pub fn over_years(
        initial_amount: Decimal,
        monthly_contribution: Decimal,
        annual_rate_percent: Decimal,
        years: u32,
    ) -> Self {
        Self {
            initial_amount,
            monthly_contribution,
            annual_rate_percent,
            months: years.saturating_mul(12),
        }
    }
}
