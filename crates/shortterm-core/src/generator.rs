//! Random sequence generation.
//!
//! Each value is uniform over `[0, max)` conditioned on being at least `min`,
//! which is the same as a single uniform draw from `[max(min, 0), max)`. The
//! upper bound is exclusive: with the default range of 10..99 the value 99 is
//! never shown.

use rand::{Rng, RngCore};

use crate::error::TrialError;

/// Generate `count` values in `[min, max)`.
///
/// Duplicates are allowed. Returns [`TrialError::InvalidRange`] when no value
/// can satisfy the bounds.
pub fn generate_sequence<R: RngCore>(
    rng: &mut R,
    min: i64,
    max: i64,
    count: usize,
) -> Result<Vec<i64>, TrialError> {
    if max <= 0 || min >= max {
        return Err(TrialError::InvalidRange { min, max });
    }

    // Draws below zero were never possible, so a negative min only widens to 0.
    let low = min.max(0);
    Ok((0..count).map(|_| rng.gen_range(low..max)).collect())
}
