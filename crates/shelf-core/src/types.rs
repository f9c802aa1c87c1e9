//! Core types shared by the index, the resolver and the transport layer.

use serde::{Deserialize, Serialize};

/// Stable, unique identifier of a catalog item.
pub type ItemId = i64;

/// A catalog item.
///
/// Only `id` and `name` cross the wire. `keywords` is derived by the index
/// builder at load time and never serialized; anything supplied for it on
/// input is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Lowercased, space-split words of `name`, in order.
    #[serde(skip)]
    pub keywords: Vec<String>,
}

impl Item {
    /// Create a raw item with no keywords yet.
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            keywords: Vec::new(),
        }
    }
}

/// Result envelope returned for every query.
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub count: usize,
    pub items: Vec<&'a Item>,
}

impl<'a> SearchResponse<'a> {
    pub fn new(items: Vec<&'a Item>) -> Self {
        Self {
            count: items.len(),
            items,
        }
    }
}
