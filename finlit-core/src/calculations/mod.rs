//! Calculation modules for the personal-finance suite.
//!
//! Each module is a pure, synchronous transformation from an input record to
//! an output record: progressive tax, compound growth, weighted multi-criteria
//! scoring, and the emergency-fund risk heuristic.

pub mod common;
pub mod growth;
pub mod risk;
pub mod scoring;
pub mod tax;

pub use growth::{GrowthProjection, MonthEnd, months_until, project};
pub use risk::{FundRecommendation, RiskTier, assess, target_amount};
pub use scoring::{
    AttributeValue, Candidate, Criterion, CriterionKind, ScoredCandidate, ScoringError, rank,
};
pub use tax::{BracketTax, TaxBreakdown, TaxCalculator, TaxError, TaxInput};
