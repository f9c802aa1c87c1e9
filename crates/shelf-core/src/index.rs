//! Index Builder: turns the raw catalog into an immutable [`CatalogIndex`].
//!
//! One pass over the items derives each item's keywords, fills the keyword
//! buckets and the id map; the sorted vocabulary is materialized from the
//! bucket keys right after. Nothing is mutated once `build` returns.
//!
//! # Invariants
//!
//! - `vocabulary` holds exactly the key set of the keyword index, sorted
//!   ascending in byte order.
//! - Every id in a bucket resolves through the id map.
//! - A bucket lists an id at most once.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::error::CatalogError;
use crate::resolver::Resolver;
use crate::types::{Item, ItemId};

/// Lowercased keyword → ids of the items whose name contains it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordIndex {
    buckets: HashMap<String, Vec<ItemId>>,
}

impl KeywordIndex {
    /// Ids recorded under `keyword`, in catalog order. Empty if unknown.
    pub fn get(&self, keyword: &str) -> &[ItemId] {
        self.buckets.get(keyword).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ItemId])> {
        self.buckets.iter().map(|(k, ids)| (k.as_str(), ids.as_slice()))
    }

    fn insert(&mut self, keyword: &str, id: ItemId) {
        match self.buckets.get_mut(keyword) {
            // Items are indexed one at a time, so a repeated word in the same
            // name always lands on the tail of the bucket.
            Some(ids) if ids.last() == Some(&id) => {}
            Some(ids) => ids.push(id),
            None => {
                self.buckets.insert(keyword.to_owned(), vec![id]);
            }
        }
    }
}

/// The shared, read-only search context: keyword buckets, sorted vocabulary
/// and the owned item records.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    keywords: KeywordIndex,
    vocabulary: Vec<String>,
    items: HashMap<ItemId, Item>,
}

impl CatalogIndex {
    /// Build the index from raw catalog items.
    ///
    /// Fails on an empty catalog or on a repeated id; no partial index is
    /// ever returned.
    pub fn build(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut keywords = KeywordIndex::default();
        let mut by_id = HashMap::with_capacity(items.len());

        for mut item in items {
            match by_id.entry(item.id) {
                Entry::Occupied(_) => return Err(CatalogError::DuplicateId(item.id)),
                Entry::Vacant(slot) => {
                    item.keywords = derive_keywords(&item.name);
                    for keyword in &item.keywords {
                        keywords.insert(keyword, item.id);
                    }
                    slot.insert(item);
                }
            }
        }

        let mut vocabulary: Vec<String> = keywords.buckets.keys().cloned().collect();
        vocabulary.sort_unstable();

        tracing::info!(
            items = by_id.len(),
            keywords = vocabulary.len(),
            "catalog indexed"
        );

        Ok(Self {
            keywords,
            vocabulary,
            items: by_id,
        })
    }

    pub fn keyword_index(&self) -> &KeywordIndex {
        &self.keywords
    }

    /// All distinct keywords, sorted ascending.
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// Item records in no particular order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of indexed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always `false` for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(self)
    }
}

/// Lowercase `name` and split it on single spaces.
///
/// Runs of spaces yield empty keywords; they are kept as-is.
pub fn derive_keywords(name: &str) -> Vec<String> {
    name.to_lowercase().split(' ').map(str::to_owned).collect()
}
