use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStability {
    /// Salaried with a steady employment history.
    Stable,
    /// Commission, hourly with variable schedules, or a shaky employer.
    Variable,
    /// Contract, seasonal, or otherwise unpredictable income.
    Unstable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HealthOutlook {
    Good,
    /// Managed conditions with predictable costs.
    Managed,
    /// Chronic conditions with recurring, hard-to-predict costs.
    Chronic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DebtLoad {
    Light,
    Moderate,
    Heavy,
}

/// Household risk factors for the emergency-fund recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    pub job_stability: JobStability,
    pub health: HealthOutlook,
    pub debt: DebtLoad,
    pub dependents: u32,
    /// A second household income softens the recommendation.
    pub dual_income: bool,
}
