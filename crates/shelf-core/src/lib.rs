//! shelf-core: catalog, keyword index and query resolution for shelf.
//!
//! # Architecture
//!
//! ```text
//! Catalog ──► Index Builder ──► CatalogIndex ──► Query Resolver
//!  (JSON)        (once)          (immutable)       (per query)
//! ```
//!
//! The index is built exactly once before any query is served and is never
//! mutated afterwards, so it can be shared across request tasks behind an
//! `Arc` without locking.

pub mod catalog;
pub mod config;
pub mod error;
pub mod index;
pub mod resolver;
pub mod types;

pub use catalog::{load_catalog, parse_catalog};
pub use error::CatalogError;
pub use index::{CatalogIndex, KeywordIndex};
pub use resolver::{MatchMode, Query, Resolver};
pub use types::{Item, ItemId, SearchResponse};
