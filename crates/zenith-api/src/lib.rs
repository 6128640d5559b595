//! Zenith API - HTTP surface for the quote catalog
//!
//! Exposes the catalog over three JSON endpoints plus a health probe:
//! - `GET /api/emotions`
//! - `GET /api/quotes/:emotion`
//! - `POST /api/quotes/:emotion/random` with optional `{"excludeIds": [...]}`
//! - `GET /health`

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use error::ApiError;
pub use router::{bind, create_router, serve, AppState};
