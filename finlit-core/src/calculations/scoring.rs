//! Weighted multi-criteria scoring.
//!
//! Ranks candidate options (career paths, side hustles, skill investments) by
//! a composite of normalized sub-scores weighted by user-assigned importance.
//! Numeric attributes normalize to 0–100 against the maximum observed across
//! all candidates; qualitative attributes map through a discrete
//! label-to-score table (e.g. job security High/Medium/Low).
//!
//! Weights form a vector that should sum to at most 100: negative weights
//! clamp to zero and an over-100 total scales all weights down
//! proportionally, so uniformly rescaling every weight never changes the
//! ranking. Composites are therefore bounded to 0–100.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::calculations::common::{clamp_non_negative, fraction, round_half_up};

/// Errors for structurally unusable scoring requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("no criteria provided")]
    NoCriteria,

    #[error("all criterion weights are zero")]
    ZeroWeights,
}

/// How a criterion reads and normalizes a candidate attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CriterionKind {
    /// Raw numeric value, normalized against the maximum observed across all
    /// candidates and scaled to 0–100. Higher is better.
    Numeric,

    /// Discrete label lookup mapping each label to a 0–100 score.
    Categorical(BTreeMap<String, Decimal>),
}

/// A scoring dimension with its user-assigned importance weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    /// Attribute name this criterion reads from each candidate.
    pub name: String,

    /// Importance weight as a plain percentage of the composite.
    pub weight: Decimal,

    pub kind: CriterionKind,
}

/// A candidate attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Number(Decimal),
    Label(String),
}

/// An option to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub attributes: BTreeMap<String, AttributeValue>,
}

/// A candidate with its composite score, produced by [`rank`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub name: String,

    /// Composite score, 0–100, rounded to two decimal places.
    pub score: Decimal,
}

/// Scores and ranks `candidates` against `criteria`, descending by composite
/// score. Equal scores keep their insertion order (stable sort).
///
/// A candidate missing an attribute, holding the wrong attribute type, or
/// carrying an unknown categorical label contributes zero for that criterion
/// with an advisory warning.
///
/// # Errors
///
/// Returns [`ScoringError`] when the criteria list is empty or every weight
/// clamps to zero.
pub fn rank(
    criteria: &[Criterion],
    candidates: &[Candidate],
) -> Result<Vec<ScoredCandidate>, ScoringError> {
    if criteria.is_empty() {
        return Err(ScoringError::NoCriteria);
    }

    let weights = effective_weights(criteria)?;
    let maxima = numeric_maxima(criteria, candidates);

    let mut scored: Vec<ScoredCandidate> = candidates
        .iter()
        .map(|candidate| {
            let composite: Decimal = criteria
                .iter()
                .zip(&weights)
                .map(|(criterion, weight)| {
                    normalized_sub_score(criterion, candidate, &maxima) * fraction(*weight)
                })
                .sum();
            ScoredCandidate {
                name: candidate.name.clone(),
                score: round_half_up(composite),
            }
        })
        .collect();

    // Stable: ties preserve candidate insertion order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    Ok(scored)
}

/// Negative weights clamp to zero; a total above 100 scales every weight
/// down proportionally so the composite stays within 0–100.
fn effective_weights(criteria: &[Criterion]) -> Result<Vec<Decimal>, ScoringError> {
    let clamped: Vec<Decimal> = criteria
        .iter()
        .map(|c| clamp_non_negative(c.weight, "criterion weight"))
        .collect();

    let total: Decimal = clamped.iter().copied().sum();
    if total == Decimal::ZERO {
        return Err(ScoringError::ZeroWeights);
    }
    if total <= Decimal::ONE_HUNDRED {
        return Ok(clamped);
    }

    warn!(%total, "criterion weights exceed 100, scaling down proportionally");
    let scale = Decimal::ONE_HUNDRED / total;
    Ok(clamped.into_iter().map(|w| w * scale).collect())
}

/// Maximum observed value per numeric criterion, used as the normalization
/// denominator.
fn numeric_maxima(criteria: &[Criterion], candidates: &[Candidate]) -> BTreeMap<String, Decimal> {
    let mut maxima = BTreeMap::new();

    for criterion in criteria {
        if !matches!(criterion.kind, CriterionKind::Numeric) {
            continue;
        }
        let max = candidates
            .iter()
            .filter_map(|c| match c.attributes.get(&criterion.name) {
                Some(AttributeValue::Number(value)) => {
                    Some(clamp_non_negative(*value, &criterion.name))
                }
                _ => None,
            })
            .max()
            .unwrap_or(Decimal::ZERO);
        maxima.insert(criterion.name.clone(), max);
    }

    maxima
}

fn normalized_sub_score(
    criterion: &Criterion,
    candidate: &Candidate,
    maxima: &BTreeMap<String, Decimal>,
) -> Decimal {
    let Some(value) = candidate.attributes.get(&criterion.name) else {
        warn!(
            candidate = %candidate.name,
            criterion = %criterion.name,
            "missing attribute scores zero"
        );
        return Decimal::ZERO;
    };

    match (&criterion.kind, value) {
        (CriterionKind::Numeric, AttributeValue::Number(raw)) => {
            let max = maxima
                .get(&criterion.name)
                .copied()
                .unwrap_or(Decimal::ZERO);
            if max == Decimal::ZERO {
                return Decimal::ZERO;
            }
            clamp_non_negative(*raw, &criterion.name) / max * Decimal::ONE_HUNDRED
        }
        (CriterionKind::Categorical(table), AttributeValue::Label(label)) => {
            match table.get(label) {
                Some(score) => clamp_non_negative(*score, "category score").min(Decimal::ONE_HUNDRED),
                None => {
                    warn!(
                        candidate = %candidate.name,
                        criterion = %criterion.name,
                        %label,
                        "unknown category label scores zero"
                    );
                    Decimal::ZERO
                }
            }
        }
        _ => {
            warn!(
                candidate = %candidate.name,
                criterion = %criterion.name,
                "attribute type does not match criterion, scores zero"
            );
            Decimal::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn numeric(name: &str, weight: Decimal) -> Criterion {
        Criterion {
            name: name.to_string(),
            weight,
            kind: CriterionKind::Numeric,
        }
    }

    fn security_criterion(weight: Decimal) -> Criterion {
        let table = BTreeMap::from([
            ("High".to_string(), dec!(100)),
            ("Medium".to_string(), dec!(60)),
            ("Low".to_string(), dec!(20)),
        ]);
        Criterion {
            name: "security".to_string(),
            weight,
            kind: CriterionKind::Categorical(table),
        }
    }

    fn candidate(name: &str, attributes: &[(&str, AttributeValue)]) -> Candidate {
        Candidate {
            name: name.to_string(),
            attributes: attributes
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        }
    }

    fn number(value: Decimal) -> AttributeValue {
        AttributeValue::Number(value)
    }

    fn label(value: &str) -> AttributeValue {
        AttributeValue::Label(value.to_string())
    }

    #[test]
    fn ranks_descending_by_composite() {
        let criteria = vec![numeric("earnings", dec!(60)), numeric("balance", dec!(40))];
        let candidates = vec![
            candidate(
                "nursing",
                &[("earnings", number(dec!(75000))), ("balance", number(dec!(6)))],
            ),
            candidate(
                "software",
                &[("earnings", number(dec!(120000))), ("balance", number(dec!(5)))],
            ),
            candidate(
                "trades",
                &[("earnings", number(dec!(60000))), ("balance", number(dec!(8)))],
            ),
        ];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].name, "software");
        // Max earner with max balance would score 100; software: 60 + 40*(5/8) = 85.
        assert_eq!(ranked[0].score, dec!(85.00));
        assert!(ranked[1].score >= ranked[2].score);
    }

    #[test]
    fn max_observed_candidate_normalizes_to_full_sub_score() {
        let criteria = vec![numeric("earnings", dec!(100))];
        let candidates = vec![
            candidate("a", &[("earnings", number(dec!(50000)))]),
            candidate("b", &[("earnings", number(dec!(100000)))]),
        ];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].name, "b");
        assert_eq!(ranked[0].score, dec!(100.00));
        assert_eq!(ranked[1].score, dec!(50.00));
    }

    #[test]
    fn doubling_all_weights_leaves_scores_unchanged() {
        let candidates = vec![
            candidate(
                "a",
                &[("earnings", number(dec!(80))), ("security", label("High"))],
            ),
            candidate(
                "b",
                &[("earnings", number(dec!(100))), ("security", label("Low"))],
            ),
        ];
        let original = vec![numeric("earnings", dec!(40)), security_criterion(dec!(60))];
        let doubled = vec![numeric("earnings", dec!(80)), security_criterion(dec!(120))];

        let ranked_original = rank(&original, &candidates).unwrap();
        let ranked_doubled = rank(&doubled, &candidates).unwrap();

        assert_eq!(ranked_original, ranked_doubled);
    }

    #[test]
    fn equal_scores_keep_insertion_order() {
        let criteria = vec![numeric("earnings", dec!(100))];
        let candidates = vec![
            candidate("first", &[("earnings", number(dec!(50)))]),
            candidate("second", &[("earnings", number(dec!(50)))]),
            candidate("third", &[("earnings", number(dec!(100)))]),
        ];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].name, "third");
        assert_eq!(ranked[1].name, "first");
        assert_eq!(ranked[2].name, "second");
    }

    #[test]
    fn categorical_labels_map_through_the_table() {
        let criteria = vec![security_criterion(dec!(100))];
        let candidates = vec![
            candidate("steady", &[("security", label("High"))]),
            candidate("gig", &[("security", label("Low"))]),
        ];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].score, dec!(100.00));
        assert_eq!(ranked[1].score, dec!(20.00));
    }

    #[test]
    fn missing_attribute_scores_zero() {
        let criteria = vec![numeric("earnings", dec!(50)), numeric("balance", dec!(50))];
        let candidates = vec![
            candidate("full", &[("earnings", number(dec!(100))), ("balance", number(dec!(10)))]),
            candidate("partial", &[("earnings", number(dec!(100)))]),
        ];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].name, "full");
        assert_eq!(ranked[0].score, dec!(100.00));
        assert_eq!(ranked[1].score, dec!(50.00));
    }

    #[test]
    fn unknown_label_scores_zero() {
        let criteria = vec![security_criterion(dec!(100))];
        let candidates = vec![candidate("odd", &[("security", label("Excellent"))])];

        let ranked = rank(&criteria, &candidates).unwrap();

        assert_eq!(ranked[0].score, dec!(0.00));
    }

    #[test]
    fn weights_under_100_are_used_as_is() {
        let criteria = vec![numeric("earnings", dec!(50))];
        let candidates = vec![candidate("only", &[("earnings", number(dec!(42)))])];

        let ranked = rank(&criteria, &candidates).unwrap();

        // Sole candidate is the max, so it gets the full 50-point weight.
        assert_eq!(ranked[0].score, dec!(50.00));
    }

    #[test]
    fn empty_criteria_is_an_error() {
        let result = rank(&[], &[candidate("a", &[])]);

        assert_eq!(result, Err(ScoringError::NoCriteria));
    }

    #[test]
    fn all_zero_weights_is_an_error() {
        let criteria = vec![numeric("earnings", dec!(0)), numeric("balance", dec!(-10))];

        let result = rank(&criteria, &[candidate("a", &[])]);

        assert_eq!(result, Err(ScoringError::ZeroWeights));
    }

    #[test]
    fn empty_candidates_rank_to_empty() {
        let criteria = vec![numeric("earnings", dec!(100))];

        let ranked = rank(&criteria, &[]).unwrap();

        assert!(ranked.is_empty());
    }
}
