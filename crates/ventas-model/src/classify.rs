//! Tier selection from a customer aggregate.

use ventas_core::{CustomerAggregate, Tier};

use crate::error::{ModelError, Result};
use crate::scorer::Scorer;

/// Classify a customer aggregate into a tier.
///
/// Builds the feature vector, scores it, and picks the tier with the highest
/// probability. Ties go to the first-occurring maximum.
///
/// # Errors
///
/// Returns an error if scoring fails or the scorer does not produce exactly
/// one probability per tier.
pub fn classify(scorer: &dyn Scorer, aggregate: &CustomerAggregate) -> Result<Tier> {
    let probs = scorer.score(&aggregate.features())?;
    if probs.len() != Tier::COUNT {
        return Err(ModelError::Arity {
            expected: Tier::COUNT,
            got: probs.len(),
        });
    }

    Ok(Tier::ALL[argmax(&probs)])
}

/// Index of the largest value, first index on ties.
fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, v) in values.iter().enumerate().skip(1) {
        if *v > values[best] {
            best = i;
        }
    }
    best
}
