pub mod catalog_ops;
pub mod seed;
pub mod selection;
pub mod store;
pub mod user_store;

pub use catalog_ops::{list_emotions, list_quotes_for_emotion};
pub use selection::{candidate_pool, pick_random, select_from_pool, CandidatePool};
pub use store::CatalogStore;
pub use user_store::UserStore;
