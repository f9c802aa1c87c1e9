//! Domain-specific assertion macros for shelf harnesses.
//!
//! These wrap `pretty_assertions` and add context-rich failure messages that
//! make it clear *which* query produced the unexpected result set.

/// Assert that a query resolves to exactly the given ids, in any order.
///
/// ```rust
/// assert_resolves!(index, "red shoes", [1]);
/// assert_resolves!(index, "red blue", any, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! assert_resolves {
    ($index:expr, $query:expr, any, [$($id:expr),* $(,)?]) => {{
        let index: &shelf_core::CatalogIndex = &$index;
        let actual = $crate::common::ids(&index.resolver().resolve_any($query));
        let mut expected: Vec<shelf_core::ItemId> = vec![$($id),*];
        expected.sort_unstable();
        pretty_assertions::assert_eq!(actual, expected, "resolve_any({:?})", $query);
    }};
    ($index:expr, $query:expr, [$($id:expr),* $(,)?]) => {{
        let index: &shelf_core::CatalogIndex = &$index;
        let actual = $crate::common::ids(&index.resolver().resolve_all($query));
        let mut expected: Vec<shelf_core::ItemId> = vec![$($id),*];
        expected.sort_unstable();
        pretty_assertions::assert_eq!(actual, expected, "resolve_all({:?})", $query);
    }};
}

/// Assert that `subset` ⊆ `superset`, reporting the stray ids.
pub fn assert_subset(subset: &[shelf_core::ItemId], superset: &[shelf_core::ItemId], context: &str) {
    let stray: Vec<_> = subset.iter().filter(|id| !superset.contains(id)).collect();
    if !stray.is_empty() {
        panic!(
            "assert_subset failed ({context}): ids {stray:?} missing from superset {superset:?}"
        );
    }
}
