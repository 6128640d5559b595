//! HTTP handlers
//!
//! Thin adapters: decode the request, call the catalog operation, encode
//! the result. All selection policy lives in `zenith_core::ops`.

use std::collections::HashSet;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use zenith_core::ops::{list_emotions as catalog_emotions, list_quotes_for_emotion};
use zenith_core::types::RequestContext;
use zenith_core::{pick_random, Emotion, Quote, ZenithError};

use crate::error::ApiError;
use crate::router::AppState;

/// Body of `POST /api/quotes/:emotion/random`
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomQuoteRequest {
    #[serde(default)]
    pub exclude_ids: Vec<String>,
}

impl RandomQuoteRequest {
    /// Decode a request body; an empty body means "exclude nothing"
    pub fn from_body(body: &[u8]) -> Result<Self, ZenithError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ZenithError::InvalidRequest {
            reason: e.to_string(),
        })
    }
}

/// GET /api/emotions
pub async fn list_emotions(State(state): State<AppState>) -> Json<Vec<Emotion>> {
    Json(catalog_emotions(&state.catalog).to_vec())
}

/// GET /api/quotes/:emotion
pub async fn list_quotes(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(emotion): Path<String>,
) -> Result<Json<Vec<Quote>>, ApiError> {
    let quotes = list_quotes_for_emotion(&state.catalog, &emotion)
        .map_err(|e| ApiError::from_domain(e, "list_quotes", &ctx))?;

    Ok(Json(quotes.into_iter().cloned().collect()))
}

/// POST /api/quotes/:emotion/random
pub async fn random_quote(
    State(state): State<AppState>,
    Extension(ctx): Extension<RequestContext>,
    Path(emotion): Path<String>,
    body: Bytes,
) -> Result<Json<Quote>, ApiError> {
    let request = RandomQuoteRequest::from_body(&body)
        .map_err(|e| ApiError::from_domain(e, "random_quote", &ctx))?;
    let exclude: HashSet<String> = request.exclude_ids.into_iter().collect();

    let quote = pick_with_thread_rng(&state, &emotion, &exclude)
        .map_err(|e| ApiError::from_domain(e, "random_quote", &ctx))?;

    Ok(Json(quote))
}

// Kept synchronous so the thread-local RNG never lives inside the handler future.
fn pick_with_thread_rng(
    state: &AppState,
    emotion: &str,
    exclude: &HashSet<String>,
) -> Result<Quote, ZenithError> {
    let mut rng = rand::thread_rng();
    pick_random(&state.catalog, emotion, exclude, &mut rng).cloned()
}

/// Health response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub uptime_secs: u64,
    pub emotions: usize,
    pub quotes: usize,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        uptime_secs: state.started_at.elapsed().as_secs(),
        emotions: state.catalog.emotion_count(),
        quotes: state.catalog.quote_count(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_means_no_exclusions() {
        assert!(RandomQuoteRequest::from_body(b"").unwrap().exclude_ids.is_empty());
        assert!(RandomQuoteRequest::from_body(b"  \n").unwrap().exclude_ids.is_empty());
    }

    #[test]
    fn test_missing_field_defaults_to_empty() {
        let request = RandomQuoteRequest::from_body(b"{}").unwrap();
        assert!(request.exclude_ids.is_empty());
    }

    #[test]
    fn test_exclude_ids_are_decoded() {
        let request = RandomQuoteRequest::from_body(br#"{"excludeIds":["a","b"]}"#).unwrap();
        assert_eq!(request.exclude_ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_wrong_shape_is_invalid_request() {
        let result = RandomQuoteRequest::from_body(br#"{"excludeIds":"a"}"#);
        assert!(matches!(result, Err(ZenithError::InvalidRequest { .. })));
    }
}
