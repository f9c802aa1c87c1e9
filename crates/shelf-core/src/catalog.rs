//! Catalog loader: reads the raw `[{ "id": .., "name": .. }]` JSON list.
//!
//! The whole file is materialized before indexing; there is no streaming.
//! Emptiness and duplicate ids are checked by [`CatalogIndex::build`], so a
//! catalog that parses here may still be rejected there.
//!
//! [`CatalogIndex::build`]: crate::index::CatalogIndex::build

use std::path::Path;

use crate::error::CatalogError;
use crate::types::Item;

/// Read and parse the catalog file at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Item>, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let items = parse_catalog(&raw)?;
    tracing::info!(path = %path.display(), items = items.len(), "catalog read");
    Ok(items)
}

/// Parse a catalog from an in-memory JSON document.
pub fn parse_catalog(raw: &str) -> Result<Vec<Item>, CatalogError> {
    let items: Vec<Item> = serde_json::from_str(raw)?;
    if let Some(first) = items.first() {
        tracing::debug!(id = first.id, name = %first.name, "first catalog record");
    }
    Ok(items)
}
