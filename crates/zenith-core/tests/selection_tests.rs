mod common;

use std::collections::HashSet;

use common::{id_set, rng, seeded_store, store_with_quotes};
use proptest::prelude::*;
use zenith_core::{pick_random, ZenithError};

const CICERO: &str = "Gratitude is not only the greatest of virtues but the parent of all others.";

#[test]
fn test_pick_random_happy_returns_a_happy_quote() {
    let store = seeded_store();
    let happy: HashSet<String> = store
        .list_quotes_by_emotion("happy")
        .iter()
        .map(|q| q.id.clone())
        .collect();

    let mut rng = rng(3);
    for _ in 0..50 {
        let quote = pick_random(&store, "happy", &HashSet::new(), &mut rng).unwrap();
        assert!(happy.contains(&quote.id));
        assert_eq!(quote.emotion, "happy");
    }
}

#[test]
fn test_pick_random_unknown_emotion_is_not_found() {
    let store = seeded_store();
    let result = pick_random(&store, "bored", &HashSet::new(), &mut rng(0));

    assert_eq!(
        result.unwrap_err(),
        ZenithError::QuotesNotFound {
            emotion: "bored".to_string()
        }
    );
}

#[test]
fn test_pick_random_unknown_emotion_with_exclusions_is_still_not_found() {
    let store = seeded_store();
    let result = pick_random(&store, "bored", &id_set(["a", "b"]), &mut rng(0));
    assert!(matches!(result, Err(ZenithError::QuotesNotFound { .. })));
}

#[test]
fn test_accumulating_exclusions_walks_the_pool_then_wraps() {
    let store = seeded_store();
    let all: HashSet<String> = store
        .list_quotes_by_emotion("motivated")
        .iter()
        .map(|q| q.id.clone())
        .collect();
    let mut rng = rng(11);
    let mut used = HashSet::new();

    for _ in 0..5 {
        let quote = pick_random(&store, "motivated", &used, &mut rng).unwrap();
        assert!(!used.contains(&quote.id), "repeated {} before wrap", quote.id);
        used.insert(quote.id.clone());
    }
    assert_eq!(used, all);

    let sixth = pick_random(&store, "motivated", &used, &mut rng).unwrap();
    assert!(all.contains(&sixth.id));
}

#[test]
fn test_grateful_single_remaining_candidate_is_deterministic() {
    let store = seeded_store();
    let grateful = store.list_quotes_by_emotion("grateful");
    let cicero = grateful.iter().find(|q| q.text == CICERO).unwrap();
    let others: HashSet<String> = grateful
        .iter()
        .filter(|q| q.id != cicero.id)
        .map(|q| q.id.clone())
        .collect();
    assert_eq!(others.len(), 4);

    for seed in 0..20 {
        let quote = pick_random(&store, "grateful", &others, &mut rng(seed)).unwrap();
        assert_eq!(quote.id, cicero.id);
        assert_eq!(quote.author, "Cicero");
    }
}

#[test]
fn test_foreign_exclusions_are_ignored() {
    let store = seeded_store();
    let sad_ids: HashSet<String> = store
        .list_quotes_by_emotion("sad")
        .iter()
        .map(|q| q.id.clone())
        .collect();

    let quote = pick_random(&store, "happy", &sad_ids, &mut rng(5)).unwrap();
    assert_eq!(quote.emotion, "happy");
}

#[test]
fn test_pick_random_does_not_touch_the_store() {
    let store = seeded_store();
    let before = store.list_quotes().to_vec();

    let mut rng = rng(9);
    for _ in 0..10 {
        pick_random(&store, "hopeful", &HashSet::new(), &mut rng).unwrap();
    }

    assert_eq!(store.list_quotes(), before.as_slice());
}

proptest! {
    #[test]
    fn prop_never_returns_excluded_unless_wrapped(
        pool_size in 1usize..8,
        excluded_mask in proptest::collection::vec(any::<bool>(), 8),
        seed in any::<u64>(),
    ) {
        let store = store_with_quotes("calm", pool_size);
        let quotes = store.list_quotes_by_emotion("calm");
        let exclude: HashSet<String> = quotes
            .iter()
            .zip(excluded_mask.iter())
            .filter(|(_, excluded)| **excluded)
            .map(|(q, _)| q.id.clone())
            .collect();
        let fully_excluded = exclude.len() == quotes.len();

        let picked = pick_random(&store, "calm", &exclude, &mut rng(seed)).unwrap();

        prop_assert!(quotes.iter().any(|q| q.id == picked.id));
        if !fully_excluded {
            prop_assert!(!exclude.contains(&picked.id));
        }
    }
}
