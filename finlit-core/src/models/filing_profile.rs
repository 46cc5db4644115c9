use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{FilingStatus, TaxBracket};

/// Errors produced when a rate schedule is structurally invalid.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProfileError {
    /// The profile has no brackets at all.
    #[error("no tax brackets provided for {0:?}")]
    NoBrackets(FilingStatus),

    /// The first bracket must start at zero income.
    #[error("first bracket must start at 0, got {0}")]
    FirstBracketNotZero(Decimal),

    /// Adjacent brackets must be contiguous: each lower bound equals the
    /// previous upper bound.
    #[error("bracket starting at {found} does not continue from {expected}")]
    NotContiguous { expected: Decimal, found: Decimal },

    /// Only the final bracket may be unbounded.
    #[error("unbounded bracket found before the final bracket")]
    UnboundedBeforeLast,

    /// The final bracket must be unbounded.
    #[error("final bracket must have no upper bound")]
    LastBracketBounded,

    /// A bracket's upper bound must exceed its lower bound.
    #[error("bracket at {0} has an upper bound at or below its lower bound")]
    EmptyBracketSpan(Decimal),

    /// Rates must be non-negative percentages.
    #[error("bracket at {lower} has negative rate {rate}")]
    NegativeRate { lower: Decimal, rate: Decimal },

    /// The standard deduction must be non-negative.
    #[error("standard deduction must be non-negative, got {0}")]
    NegativeDeduction(Decimal),
}

/// A filing status together with its standard deduction and rate schedule.
///
/// Brackets are ordered ascending by `lower_bound`, contiguous and
/// non-overlapping, with the final bracket unbounded. [`Self::validate`]
/// checks those invariants; the tax calculator relies on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilingProfile {
    pub status: FilingStatus,
    pub standard_deduction: Decimal,
    pub brackets: Vec<TaxBracket>,
}

impl FilingProfile {
    /// Validates the rate schedule invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the brackets are empty, do not start at
    /// zero, are not contiguous, have a bounded final bracket or an unbounded
    /// non-final one, or carry a negative rate or deduction.
    pub fn validate(&self) -> Result<(), ProfileError> {
        if self.standard_deduction < Decimal::ZERO {
            return Err(ProfileError::NegativeDeduction(self.standard_deduction));
        }

        let Some(first) = self.brackets.first() else {
            return Err(ProfileError::NoBrackets(self.status));
        };
        if first.lower_bound != Decimal::ZERO {
            return Err(ProfileError::FirstBracketNotZero(first.lower_bound));
        }

        let mut expected_lower = Decimal::ZERO;
        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate_percent < Decimal::ZERO {
                return Err(ProfileError::NegativeRate {
                    lower: bracket.lower_bound,
                    rate: bracket.rate_percent,
                });
            }
            if bracket.lower_bound != expected_lower {
                return Err(ProfileError::NotContiguous {
                    expected: expected_lower,
                    found: bracket.lower_bound,
                });
            }

            let is_last = index == self.brackets.len() - 1;
            match bracket.upper_bound {
                Some(upper) if upper <= bracket.lower_bound => {
                    return Err(ProfileError::EmptyBracketSpan(bracket.lower_bound));
                }
                Some(_) if is_last => return Err(ProfileError::LastBracketBounded),
                Some(upper) => expected_lower = upper,
                None if !is_last => return Err(ProfileError::UnboundedBeforeLast),
                None => {}
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn bracket(lower: Decimal, upper: Option<Decimal>, rate: Decimal) -> TaxBracket {
        TaxBracket {
            lower_bound: lower,
            upper_bound: upper,
            rate_percent: rate,
        }
    }

    fn valid_profile() -> FilingProfile {
        FilingProfile {
            status: FilingStatus::Single,
            standard_deduction: dec!(14600),
            brackets: vec![
                bracket(dec!(0), Some(dec!(11600)), dec!(10)),
                bracket(dec!(11600), Some(dec!(47150)), dec!(12)),
                bracket(dec!(47150), None, dec!(22)),
            ],
        }
    }

    #[test]
    fn validate_accepts_contiguous_schedule() {
        assert_eq!(valid_profile().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_empty_brackets() {
        let mut profile = valid_profile();
        profile.brackets.clear();

        assert_eq!(
            profile.validate(),
            Err(ProfileError::NoBrackets(FilingStatus::Single))
        );
    }

    #[test]
    fn validate_rejects_nonzero_first_bracket() {
        let mut profile = valid_profile();
        profile.brackets[0].lower_bound = dec!(100);

        assert_eq!(
            profile.validate(),
            Err(ProfileError::FirstBracketNotZero(dec!(100)))
        );
    }

    #[test]
    fn validate_rejects_gap_between_brackets() {
        let mut profile = valid_profile();
        profile.brackets[1].lower_bound = dec!(12000);

        assert_eq!(
            profile.validate(),
            Err(ProfileError::NotContiguous {
                expected: dec!(11600),
                found: dec!(12000),
            })
        );
    }

    #[test]
    fn validate_rejects_overlapping_brackets() {
        let mut profile = valid_profile();
        profile.brackets[1].lower_bound = dec!(11000);

        assert_eq!(
            profile.validate(),
            Err(ProfileError::NotContiguous {
                expected: dec!(11600),
                found: dec!(11000),
            })
        );
    }

    #[test]
    fn validate_rejects_bounded_final_bracket() {
        let mut profile = valid_profile();
        profile.brackets[2].upper_bound = Some(dec!(100000));

        assert_eq!(profile.validate(), Err(ProfileError::LastBracketBounded));
    }

    #[test]
    fn validate_rejects_unbounded_middle_bracket() {
        let mut profile = valid_profile();
        profile.brackets[1].upper_bound = None;

        assert_eq!(profile.validate(), Err(ProfileError::UnboundedBeforeLast));
    }

    #[test]
    fn validate_rejects_negative_rate() {
        let mut profile = valid_profile();
        profile.brackets[0].rate_percent = dec!(-1);

        assert_eq!(
            profile.validate(),
            Err(ProfileError::NegativeRate {
                lower: dec!(0),
                rate: dec!(-1),
            })
        );
    }

    #[test]
    fn validate_rejects_negative_deduction() {
        let mut profile = valid_profile();
        profile.standard_deduction = dec!(-1);

        assert_eq!(
            profile.validate(),
            Err(ProfileError::NegativeDeduction(dec!(-1)))
        );
    }

    #[test]
    fn validate_rejects_empty_span() {
        let mut profile = valid_profile();
        profile.brackets[0].upper_bound = Some(dec!(0));

        // The contiguity check still expects the next lower bound to match,
        // so collapse the schedule to a single degenerate bracket.
        profile.brackets.truncate(1);
        profile.brackets.push(bracket(dec!(0), None, dec!(12)));

        assert_eq!(
            profile.validate(),
            Err(ProfileError::EmptyBracketSpan(dec!(0)))
        );
    }
}
