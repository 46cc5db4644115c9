use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One marginal bracket of a progressive rate schedule.
///
/// `rate_percent` is a plain percentage (`22` means 22%); the last bracket of
/// a schedule has `upper_bound: None` (unbounded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub lower_bound: Decimal,
    pub upper_bound: Option<Decimal>,
    pub rate_percent: Decimal,
}

impl TaxBracket {
    /// Whether `income`'s last dollar falls within this bracket.
    pub fn contains(&self, income: Decimal) -> bool {
        income > self.lower_bound
            && self.upper_bound.map_or(true, |upper| income <= upper)
    }
}
