use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::error::{GeneratorError, Result};

/// Picks exactly `n` items from `pool`, as varied as possible.
///
/// # Behavior
/// - `n == 0`: empty result, whatever the pool
/// - `n <= pool.len()`: `n` distinct items drawn uniformly without
///   replacement, in draw order
/// - `n > pool.len()`: items are drawn in rounds; each round is a fresh
///   shuffle of the whole pool, consumed until `n` items are collected or
///   the round runs out. No item repeats before every item has been used,
///   so item counts differ by at most one.
///
/// # Errors
/// Returns `GeneratorError::Range` if `pool` is empty and `n > 0`.
pub fn pick<T, R>(pool: &[T], n: usize, rng: &mut R) -> Result<Vec<T>>
where
	T: Clone,
	R: Rng + ?Sized,
{
	if n == 0 {
		return Ok(Vec::new());
	}
	if pool.is_empty() {
		return Err(GeneratorError::Range(format!("cannot pick {n} item(s) from an empty pool")));
	}

	if n <= pool.len() {
		let mut working = pool.to_vec();
		let (chosen, _) = working.partial_shuffle(rng, n);
		return Ok(chosen.to_vec());
	}

	debug!(requested = n, available = pool.len(), "pool smaller than request, reusing entries in rounds");

	let mut result = Vec::with_capacity(n);
	while result.len() < n {
		let mut round = pool.to_vec();
		round.shuffle(rng);
		let take = (n - result.len()).min(round.len());
		result.extend(round.into_iter().take(take));
	}

	Ok(result)
}
