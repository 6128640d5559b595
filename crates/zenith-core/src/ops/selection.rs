//! Random quote selection with caller-owned exclusion
//!
//! The exclusion set belongs to the caller: the server keeps no history
//! and every call starts from the full catalog. When every quote for an
//! emotion is excluded the pool wraps around to the full set, so a client
//! cycling through quotes never runs dry.

use std::collections::HashSet;
use std::time::Instant;

use rand::seq::SliceRandom;
use rand::Rng;

use super::store::CatalogStore;
use crate::errors::{Result, ZenithError};
use crate::model::Quote;
use crate::{log_op_end, log_op_error, log_op_start};

/// Candidate pool after applying the exclusion set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePool<'a> {
    pub quotes: Vec<&'a Quote>,
    /// True when exclusion emptied the pool and it was reset to the full set
    pub wrapped: bool,
}

/// Drop excluded quotes from `pool`, resetting to the full pool if that
/// leaves nothing
pub fn candidate_pool<'a>(pool: &[&'a Quote], exclude_ids: &HashSet<String>) -> CandidatePool<'a> {
    let remaining: Vec<&Quote> = pool
        .iter()
        .copied()
        .filter(|q| !exclude_ids.contains(&q.id))
        .collect();

    if remaining.is_empty() && !pool.is_empty() {
        CandidatePool {
            quotes: pool.to_vec(),
            wrapped: true,
        }
    } else {
        CandidatePool {
            quotes: remaining,
            wrapped: false,
        }
    }
}

/// Pick one quote uniformly at random from `pool`, honoring `exclude_ids`
///
/// Pure function of its inputs: the same pool, exclusion set and RNG state
/// always give the same answer. Returns `None` only for an empty pool.
pub fn select_from_pool<'a, R>(
    pool: &[&'a Quote],
    exclude_ids: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Quote>
where
    R: Rng + ?Sized,
{
    candidate_pool(pool, exclude_ids).quotes.choose(rng).copied()
}

/// Pick a random quote for `emotion_key`, skipping `exclude_ids`
///
/// # Errors
///
/// Returns `QuotesNotFound` if the emotion has no quotes, including when
/// the key is not a seeded emotion at all. A fully excluded pool is not an
/// error; it wraps around.
pub fn pick_random<'a, R>(
    store: &'a CatalogStore,
    emotion_key: &str,
    exclude_ids: &HashSet<String>,
    rng: &mut R,
) -> Result<&'a Quote>
where
    R: Rng + ?Sized,
{
    let start = Instant::now();
    log_op_start!(
        "pick_random",
        emotion = emotion_key,
        exclude_len = exclude_ids.len() as u64
    );

    let all = store.list_quotes_by_emotion(emotion_key);
    let pool = candidate_pool(&all, exclude_ids);

    let Some(quote) = pool.quotes.choose(rng).copied() else {
        let err = ZenithError::QuotesNotFound {
            emotion: emotion_key.to_string(),
        };
        log_op_error!(
            "pick_random",
            err,
            duration_ms = start.elapsed().as_millis() as u64,
            emotion = emotion_key
        );
        return Err(err);
    };

    log_op_end!(
        "pick_random",
        duration_ms = start.elapsed().as_millis() as u64,
        emotion = emotion_key,
        quote_id = quote.id.as_str(),
        pool_len = pool.quotes.len() as u64,
        wrapped = pool.wrapped
    );

    Ok(quote)
}
