pub mod emotions;
pub mod quotes;
pub mod serve;

use zenith_core::{CatalogStore, ExError};

/// Build the seeded catalog every command works from
pub(crate) fn load_catalog() -> anyhow::Result<CatalogStore> {
    CatalogStore::seeded().map_err(|e| ExError::from(e).into())
}
