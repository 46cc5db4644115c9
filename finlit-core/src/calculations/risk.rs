//! Emergency-fund risk heuristic.
//!
//! A lookup-table-plus-summation scorer: each household risk factor adds a
//! fixed number of months to a base recommendation, and the total clamps to
//! 1–12 months of expenses. No iteration beyond summation and clamping.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{clamp_non_negative, round_half_up};
use crate::models::{DebtLoad, HealthOutlook, JobStability, RiskProfile};

/// Starting point before any risk factors apply.
const BASE_MONTHS: i32 = 3;

/// Recommendation bounds, in months of expenses.
const MIN_MONTHS: i32 = 1;
const MAX_MONTHS: i32 = 12;

/// Dependents add one month each, up to this many.
const MAX_DEPENDENT_MONTHS: u32 = 3;

/// Coarse tier derived from the recommended months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// Up to three months: stable income, light obligations.
    Low,
    /// Four to six months: the common middle ground.
    Moderate,
    /// Seven or more months: fragile income or heavy obligations.
    Elevated,
}

/// Output of the emergency-fund assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FundRecommendation {
    /// Recommended months of expenses, always within 1–12.
    pub months: u32,
    pub tier: RiskTier,
}

/// Scores a risk profile into a months-of-expenses recommendation.
pub fn assess(profile: &RiskProfile) -> FundRecommendation {
    let job = match profile.job_stability {
        JobStability::Stable => 0,
        JobStability::Variable => 2,
        JobStability::Unstable => 3,
    };
    let health = match profile.health {
        HealthOutlook::Good => 0,
        HealthOutlook::Managed => 1,
        HealthOutlook::Chronic => 2,
    };
    let debt = match profile.debt {
        DebtLoad::Light => 0,
        DebtLoad::Moderate => 1,
        DebtLoad::Heavy => 2,
    };
    // Cap before widening so huge counts cannot wrap negative.
    let dependents = profile.dependents.min(MAX_DEPENDENT_MONTHS) as i32;
    let dual_income = if profile.dual_income { -1 } else { 0 };

    let months = (BASE_MONTHS + job + health + debt + dependents + dual_income)
        .clamp(MIN_MONTHS, MAX_MONTHS) as u32;

    FundRecommendation {
        months,
        tier: tier_for(months),
    }
}

/// Dollar target for a recommendation: months times monthly expenses.
pub fn target_amount(months: u32, monthly_expenses: Decimal) -> Decimal {
    let expenses = clamp_non_negative(monthly_expenses, "monthly_expenses");
    round_half_up(Decimal::from(months) * expenses)
}

fn tier_for(months: u32) -> RiskTier {
    match months {
        0..=3 => RiskTier::Low,
        4..=6 => RiskTier::Moderate,
        _ => RiskTier::Elevated,
    }
}
