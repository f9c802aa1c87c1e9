//! Test builders: ergonomic constructors for catalogs and indexes.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use shelf_core::{CatalogIndex, Item, ItemId};

use super::fixtures::CATALOG_PRODUCTS;

// ---------------------------------------------------------------------------
// CatalogBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for catalog fixtures. Ids are assigned sequentially from 1
/// unless given explicitly.
///
/// # Example
///
/// ```rust
/// let index = CatalogBuilder::new()
///     .item("Red Shoes")
///     .item_with_id(40, "Red Hat")
///     .build_index();
/// ```
pub struct CatalogBuilder {
    items: Vec<Item>,
    next_id: ItemId,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn item(mut self, name: &str) -> Self {
        let id = self.next_id;
        self.items.push(Item::new(id, name));
        self.next_id += 1;
        self
    }

    pub fn item_with_id(mut self, id: ItemId, name: &str) -> Self {
        self.items.push(Item::new(id, name));
        self.next_id = self.next_id.max(id + 1);
        self
    }

    pub fn items(self) -> Vec<Item> {
        self.items
    }

    /// Serialize as the on-disk catalog format.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.items).unwrap()
    }

    pub fn build_index(self) -> CatalogIndex {
        CatalogIndex::build(self.items).expect("test catalog must index")
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// `[{1,"Red Shoes"},{2,"Red Hat"},{3,"Blue Shoes"}]`
pub fn shoes_and_hats() -> CatalogIndex {
    CatalogBuilder::new()
        .item("Red Shoes")
        .item("Red Hat")
        .item("Blue Shoes")
        .build_index()
}

/// Index over [`CATALOG_PRODUCTS`](super::fixtures::CATALOG_PRODUCTS).
pub fn products() -> CatalogIndex {
    CATALOG_PRODUCTS
        .iter()
        .fold(CatalogBuilder::new(), |builder, name| builder.item(name))
        .build_index()
}

/// Ids of a result set, sorted, for order-independent comparisons.
pub fn ids(items: &[&Item]) -> Vec<ItemId> {
    let mut ids: Vec<ItemId> = items.iter().map(|item| item.id).collect();
    ids.sort_unstable();
    ids
}
