use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use zenith_api::{create_router, AppState};
use zenith_core::CatalogStore;

/// Router over a freshly seeded catalog
#[allow(dead_code)]
pub fn app() -> Router {
    let catalog = CatalogStore::seeded().expect("seed");
    create_router(AppState::new(catalog))
}

/// Response status, headers and decoded JSON body
#[allow(dead_code)]
pub struct TestResponse {
    pub status: StatusCode,
    pub request_id: Option<String>,
    pub json: Value,
}

#[allow(dead_code)]
pub async fn send(app: Router, request: Request<Body>) -> TestResponse {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    TestResponse {
        status,
        request_id,
        json,
    }
}

#[allow(dead_code)]
pub async fn get(app: Router, uri: &str) -> TestResponse {
    send(
        app,
        Request::builder().uri(uri).body(Body::empty()).unwrap(),
    )
    .await
}

#[allow(dead_code)]
pub async fn post_json(app: Router, uri: &str, body: Value) -> TestResponse {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// Ids of a JSON array of quotes
#[allow(dead_code)]
pub fn ids(quotes: &Value) -> Vec<String> {
    quotes
        .as_array()
        .expect("array")
        .iter()
        .map(|q| q["id"].as_str().expect("id").to_string())
        .collect()
}
