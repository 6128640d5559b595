#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::Level;
use zenith_core::logging_facility::test_capture::init_test_capture;
use zenith_core::ops::list_quotes_for_emotion;
use zenith_core::types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use zenith_core::{log_op_end, log_op_error, log_op_start, pick_random, CatalogStore, ZenithError};

#[test]
fn test_log_op_start_macro() {
    let capture = init_test_capture();
    let op_name = "test_log_op_start_unique_1";

    log_op_start!(op_name, emotion = "happy");

    let starts = capture.count_events(|e| {
        e.op.as_deref() == Some(op_name) && e.event.as_deref() == Some(EVENT_START)
    });
    assert_eq!(starts, 1);
}

#[test]
fn test_log_op_end_records_duration() {
    let capture = init_test_capture();
    let op_name = "test_log_op_end_unique_2";

    log_op_end!(op_name, duration_ms = 42);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event.as_deref(), Some(EVENT_END));
    assert_eq!(events[0].field("duration_ms"), Some("42"));
}

#[test]
fn test_log_op_error_includes_kind_and_code() {
    let capture = init_test_capture();
    let op_name = "test_log_op_error_unique_3";

    let err = ZenithError::QuotesNotFound {
        emotion: "bored".to_string(),
    };
    log_op_error!(op_name, err, duration_ms = 10);

    let events = capture.events_for_op(op_name);
    assert_eq!(events.len(), 1);
    let event = &events[0];
    assert_eq!(event.event.as_deref(), Some(EVENT_END_ERROR));
    assert_eq!(event.level, Level::WARN);
    assert_eq!(event.field("err_code"), Some("ERR_NOT_FOUND"));
    assert_eq!(event.field("err_kind"), Some("NotFound"));
}

#[test]
fn test_pick_random_emits_start_and_end_with_quote_id() {
    let capture = init_test_capture();
    let store = CatalogStore::seeded().unwrap();
    let mut rng = StdRng::seed_from_u64(1);

    let quote = pick_random(&store, "peaceful", &HashSet::new(), &mut rng).unwrap();

    let ends: Vec<_> = capture
        .events_for_op("pick_random")
        .into_iter()
        .filter(|e| {
            e.event.as_deref() == Some(EVENT_END) && e.field("quote_id") == Some(quote.id.as_str())
        })
        .collect();
    assert_eq!(ends.len(), 1);
    assert_eq!(ends[0].field("emotion"), Some("peaceful"));
    assert_eq!(ends[0].field("wrapped"), Some("false"));
    capture.assert_event_exists("pick_random", EVENT_START);
}

#[test]
fn test_pick_random_logs_wrap_around() {
    let capture = init_test_capture();
    let store = CatalogStore::seeded().unwrap();
    let all: HashSet<String> = store
        .list_quotes_by_emotion("hopeful")
        .iter()
        .map(|q| q.id.clone())
        .collect();

    let quote = pick_random(&store, "hopeful", &all, &mut StdRng::seed_from_u64(2)).unwrap();

    let wrapped = capture.count_events(|e| {
        e.op.as_deref() == Some("pick_random")
            && e.field("quote_id") == Some(quote.id.as_str())
            && e.field("wrapped") == Some("true")
    });
    assert_eq!(wrapped, 1);
}

#[test]
fn test_list_quotes_not_found_emits_end_error() {
    let capture = init_test_capture();
    let store = CatalogStore::seeded().unwrap();

    let result = list_quotes_for_emotion(&store, "logging-test-unknown");
    assert!(result.is_err());

    let errors = capture.count_events(|e| {
        e.op.as_deref() == Some("list_quotes_for_emotion")
            && e.event.as_deref() == Some(EVENT_END_ERROR)
            && e.field("emotion") == Some("logging-test-unknown")
    });
    assert_eq!(errors, 1);
}
