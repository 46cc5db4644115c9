mod fica_config;
mod filing_profile;
mod filing_status;
mod growth_scenario;
mod risk_profile;
mod tax_bracket;

pub use fica_config::{FicaConfig, FicaConfigError};
pub use filing_profile::{FilingProfile, ProfileError};
pub use filing_status::FilingStatus;
pub use growth_scenario::GrowthScenario;
pub use risk_profile::{DebtLoad, HealthOutlook, JobStability, RiskProfile};
pub use tax_bracket::TaxBracket;
