use std::collections::BTreeSet;

use shopseed_core::EntityId;

use crate::errors::ContentError;
use crate::generators::ContentProvider;

/// Pick a random subset of `pool` without replacement.
///
/// The count is drawn uniformly from `[min_count, min(max_count, |pool|)]`,
/// with `min_count` clamped into `1..=upper` so a small pool never fails.
/// Duplicate ids in the pool count once. `max_count` must be at least one and
/// no smaller than `min_count`.
pub fn sample(
    provider: &mut dyn ContentProvider,
    pool: &[EntityId],
    min_count: usize,
    max_count: usize,
) -> Result<Vec<EntityId>, ContentError> {
    if max_count == 0 || min_count > max_count {
        return Err(ContentError::InvalidRange {
            min: min_count as i64,
            max: max_count as i64,
        });
    }
    let candidates = distinct(pool);
    if candidates.is_empty() {
        return Err(ContentError::EmptyPool);
    }

    let upper = max_count.min(candidates.len());
    let lower = min_count.clamp(1, upper);
    let count = provider.number_between(lower as i64, upper as i64)? as usize;
    let picked = provider.random_indices(candidates.len(), count)?;
    Ok(picked.into_iter().map(|idx| candidates[idx]).collect())
}

/// Pick a single id from a non-empty pool.
pub fn sample_one(
    provider: &mut dyn ContentProvider,
    pool: &[EntityId],
) -> Result<EntityId, ContentError> {
    if pool.is_empty() {
        return Err(ContentError::EmptyPool);
    }
    let idx = provider.random_index(pool.len())?;
    Ok(pool[idx])
}

/// Sample `1..=cap` ids, or `None` when the pool is empty.
pub fn sample_optional(
    provider: &mut dyn ContentProvider,
    pool: &[EntityId],
    cap: usize,
) -> Result<Option<Vec<EntityId>>, ContentError> {
    if pool.is_empty() {
        return Ok(None);
    }
    sample(provider, pool, 1, cap).map(Some)
}

fn distinct(pool: &[EntityId]) -> Vec<EntityId> {
    let mut seen = BTreeSet::new();
    pool.iter().copied().filter(|id| seen.insert(*id)).collect()
}
