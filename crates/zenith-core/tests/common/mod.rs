use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use zenith_core::{CatalogStore, NewEmotion, NewQuote};

/// Store loaded with the built-in dataset
#[allow(dead_code)]
pub fn seeded_store() -> CatalogStore {
    CatalogStore::seeded().expect("built-in dataset should seed cleanly")
}

/// Store with a single emotion and `n` quotes, bypassing the seed data
#[allow(dead_code)]
pub fn store_with_quotes(emotion: &str, n: usize) -> CatalogStore {
    let mut store = CatalogStore::new();
    store
        .add_emotion(NewEmotion::keyed(emotion, "•", emotion))
        .unwrap();
    for i in 0..n {
        store
            .add_quote(NewQuote::new(&format!("quote {}", i), "Tester", emotion))
            .unwrap();
    }
    store
}

/// Deterministic RNG for selection tests
#[allow(dead_code)]
pub fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
pub fn id_set<'a>(ids: impl IntoIterator<Item = &'a str>) -> HashSet<String> {
    ids.into_iter().map(str::to_string).collect()
}
