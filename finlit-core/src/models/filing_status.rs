use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedFilingJointly,
    MarriedFilingSeparately,
    HeadOfHousehold,
}

impl FilingStatus {
    pub const ALL: [FilingStatus; 4] = [
        Self::Single,
        Self::MarriedFilingJointly,
        Self::MarriedFilingSeparately,
        Self::HeadOfHousehold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedFilingJointly => "MFJ",
            Self::MarriedFilingSeparately => "MFS",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedFilingJointly => "Married Filing Jointly",
            Self::MarriedFilingSeparately => "Married Filing Separately",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    /// Parses a short status code. Accepts the canonical codes (`S`, `MFJ`,
    /// `MFS`, `HOH`) as well as the spelled-out CLI forms.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_uppercase().as_str() {
            "S" | "SINGLE" => Some(Self::Single),
            "MFJ" | "MARRIED-JOINT" => Some(Self::MarriedFilingJointly),
            "MFS" | "MARRIED-SEPARATE" => Some(Self::MarriedFilingSeparately),
            "HOH" | "HEAD-OF-HOUSEHOLD" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}
