//! Load-time errors.
//!
//! Every variant is fatal: the service refuses to start rather than serve a
//! partial index. Query resolution has no error path.

use std::path::PathBuf;

use crate::types::ItemId;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalog contains no items")]
    Empty,

    #[error("duplicate item id {0} in catalog")]
    DuplicateId(ItemId),
}
