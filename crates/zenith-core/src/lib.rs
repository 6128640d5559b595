//! Zenith Core - in-memory quote catalog and selection kernel
//!
//! This crate provides the data structures and operations behind the
//! Zenith quotes service:
//! - Emotion and Quote models, plus an independent User model
//! - `CatalogStore`, seeded once and read-only afterwards
//! - Random quote selection with caller-owned exclusion and wrap-around
//! - The canonical error facility and structured logging facility
//!
//! Transport concerns (HTTP, CLI) live in the `zenith-api` and `zenith-cli` crates.

pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;

pub use zenith_core_types as types;

#[doc(hidden)]
pub use tracing as __tracing;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, Result, ZenithError};
pub use model::{Emotion, NewEmotion, NewQuote, Quote, User};
pub use ops::{pick_random, select_from_pool, CatalogStore, UserStore};
