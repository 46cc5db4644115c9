//! Compound growth and savings-timeline projections.
//!
//! One projector serves every parameter framing in the suite: emergency-fund
//! timelines, retirement projections, and ROI payback periods. Growth is
//! iterative monthly compounding: each month the balance grows by
//! `annual_rate_percent / 12 / 100` and then receives the contribution.
//!
//! When the contribution is zero this reduces to pure compound interest;
//! when the rate is zero it reduces to a linear contribution sum.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use finlit_core::GrowthScenario;
//! use finlit_core::calculations::growth;
//!
//! let scenario = GrowthScenario {
//!     initial_amount: dec!(1000),
//!     monthly_contribution: dec!(100),
//!     annual_rate_percent: dec!(12),
//!     months: 2,
//! };
//!
//! let projection = growth::project(&scenario);
//!
//! // 1000 * 1.01 + 100 = 1110; 1110 * 1.01 + 100 = 1221.10
//! assert_eq!(projection.future_value, dec!(1221.10));
//! assert_eq!(projection.total_contributions, dec!(200));
//! assert_eq!(projection.growth, dec!(21.10));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, fraction, round_half_up};
use crate::models::GrowthScenario;

/// Longest supported horizon, 100 years. [`project`] truncates longer
/// scenarios to it, and [`months_until`] treats targets beyond it as
/// unreachable.
pub const MAX_TIMELINE_MONTHS: u32 = 1200;

/// Balance at the end of one month of the projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthEnd {
    /// 1-based month number.
    pub month: u32,

    /// Balance after growth and that month's contribution.
    pub balance: Decimal,

    /// Cumulative contributions through this month (excluding the initial
    /// amount).
    pub contributed: Decimal,
}

/// Result of a growth projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthProjection {
    pub future_value: Decimal,

    /// Sum of the monthly contributions over the horizon.
    pub total_contributions: Decimal,

    /// Interest earned: future value minus the initial amount and the
    /// contributions.
    pub growth: Decimal,

    /// Month-by-month balances, one entry per month of the horizon.
    pub schedule: Vec<MonthEnd>,
}

/// Projects a scenario over its horizon.
///
/// Negative inputs clamp to zero; a zero-month horizon returns the initial
/// amount unchanged, and horizons past [`MAX_TIMELINE_MONTHS`] truncate to
/// it. Balances are rounded to cents in the output while the running balance
/// keeps full precision.
pub fn project(scenario: &GrowthScenario) -> GrowthProjection {
    let initial = clamp_non_negative(scenario.initial_amount, "initial_amount");
    let contribution = clamp_non_negative(scenario.monthly_contribution, "monthly_contribution");
    let rate = clamp_non_negative(scenario.annual_rate_percent, "annual_rate_percent");
    let monthly_rate = fraction(rate) / Decimal::from(12);

    let months = scenario.months.min(MAX_TIMELINE_MONTHS);
    if months < scenario.months {
        warn!(
            months = scenario.months,
            cap = MAX_TIMELINE_MONTHS,
            "horizon truncated to the supported maximum"
        );
    }

    let mut balance = initial;
    let mut contributed = Decimal::ZERO;
    let mut schedule = Vec::with_capacity(months as usize);

    for month in 1..=months {
        balance = balance * (Decimal::ONE + monthly_rate) + contribution;
        contributed += contribution;
        schedule.push(MonthEnd {
            month,
            balance: round_half_up(balance),
            contributed,
        });
    }

    let future_value = round_half_up(balance);
    GrowthProjection {
        future_value,
        total_contributions: contributed,
        growth: future_value - initial - contributed,
        schedule,
    }
}

/// Returns the first month at which the balance reaches `target`, or `None`
/// if the target cannot be reached within [`MAX_TIMELINE_MONTHS`].
///
/// The scenario's own `months` horizon is ignored; only its balance, rate,
/// and contribution matter. A balance already at or above the target returns
/// `Some(0)`.
pub fn months_until(scenario: &GrowthScenario, target: Decimal) -> Option<u32> {
    let target = clamp_non_negative(target, "target");
    let initial = clamp_non_negative(scenario.initial_amount, "initial_amount");
    let contribution = clamp_non_negative(scenario.monthly_contribution, "monthly_contribution");
    let rate = clamp_non_negative(scenario.annual_rate_percent, "annual_rate_percent");
    let monthly_rate = fraction(rate) / Decimal::from(12);

    if initial >= target {
        return Some(0);
    }
    // A balance that neither grows nor receives contributions is stuck.
    if contribution == Decimal::ZERO && (monthly_rate == Decimal::ZERO || initial == Decimal::ZERO)
    {
        return None;
    }

    let mut balance = initial;
    for month in 1..=MAX_TIMELINE_MONTHS {
        balance = balance * (Decimal::ONE + monthly_rate) + contribution;
        if balance >= target {
            return Some(month);
        }
    }
    None
}
