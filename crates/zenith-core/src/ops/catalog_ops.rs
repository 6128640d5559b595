use std::time::Instant;

use super::store::CatalogStore;
use crate::errors::{Result, ZenithError};
use crate::model::{Emotion, Quote};
use crate::{log_op_end, log_op_error, log_op_start};

/// List every emotion in insertion order
///
/// Never fails; empty only for an unseeded store.
pub fn list_emotions(store: &CatalogStore) -> &[Emotion] {
    let start = Instant::now();
    log_op_start!("list_emotions");

    let emotions = store.list_emotions();

    log_op_end!(
        "list_emotions",
        duration_ms = start.elapsed().as_millis() as u64,
        count = emotions.len() as u64
    );
    emotions
}

/// List the quotes for one emotion
///
/// # Errors
///
/// Returns `QuotesNotFound` when the emotion has no quotes, whether the key
/// is unknown or the emotion is simply empty.
pub fn list_quotes_for_emotion<'a>(store: &'a CatalogStore, emotion_key: &str) -> Result<Vec<&'a Quote>> {
    let start = Instant::now();
    log_op_start!("list_quotes_for_emotion", emotion = emotion_key);

    let quotes = store.list_quotes_by_emotion(emotion_key);
    if quotes.is_empty() {
        let err = ZenithError::QuotesNotFound {
            emotion: emotion_key.to_string(),
        };
        log_op_error!(
            "list_quotes_for_emotion",
            err,
            duration_ms = start.elapsed().as_millis() as u64,
            emotion = emotion_key
        );
        return Err(err);
    }

    log_op_end!(
        "list_quotes_for_emotion",
        duration_ms = start.elapsed().as_millis() as u64,
        emotion = emotion_key,
        count = quotes.len() as u64
    );
    Ok(quotes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_emotions_on_empty_store() {
        let store = CatalogStore::new();
        assert!(list_emotions(&store).is_empty());
    }

    #[test]
    fn test_list_quotes_for_unknown_emotion_fails() {
        let store = CatalogStore::seeded().unwrap();
        let result = list_quotes_for_emotion(&store, "bored");
        assert_eq!(
            result.unwrap_err(),
            ZenithError::QuotesNotFound {
                emotion: "bored".to_string()
            }
        );
    }
}
