//! Synthetic identifier generation
//!
//! Identifiers are sampled without replacement from `[1, ID_UPPER_BOUND)`, so
//! a generated list never holds the same value twice. The random source is
//! always passed in; seed it with [`seeded_rng`] for reproducible runs.

use crate::defaults::ID_UPPER_BOUND;
use crate::error::{AppError, Result};
use crate::types::Identifier;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of distinct identifiers the value range can produce
pub const ID_RANGE_LEN: usize = (ID_UPPER_BOUND - 1) as usize;

/// Generate `n` distinct random identifiers.
///
/// Fails with [`AppError::Sampling`] when `n` exceeds [`ID_RANGE_LEN`].
pub fn generate_user_ids<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Result<Vec<Identifier>> {
    if n > ID_RANGE_LEN {
        return Err(AppError::sampling(format!(
            "requested {} identifiers but only {} distinct values exist in [1, {})",
            n, ID_RANGE_LEN, ID_UPPER_BOUND
        )));
    }

    Ok(rand::seq::index::sample(rng, ID_RANGE_LEN, n)
        .into_iter()
        .map(|index| index as Identifier + 1)
        .collect())
}

/// Build the generator used for one run
pub fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
