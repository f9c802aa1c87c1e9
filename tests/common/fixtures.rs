//! Static catalogs used across harnesses.

use std::path::Path;

/// Product names with shared words, shared prefixes ("red"/"redwood"),
/// mixed case, repeated words and irregular spacing.
pub const CATALOG_PRODUCTS: &[&str] = &[
    "Red Shoes",
    "Red Hat",
    "Blue Shoes",
    "Redwood Dining Table",
    "Blue Denim Jacket",
    "Running Shoes Pro",
    "Wool Scarf",
    "Wool  Socks",
    "Silk Scarf Red",
    "Bora Bora Beach Towel",
    "USB-C Cable",
    "Crème Brûlée Torch",
];

/// The checked-in catalog used by the binary harness.
pub fn fixture_catalog() -> &'static Path {
    Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/products.json"))
}

/// Generate `n` synthetic items with a small vocabulary so that keywords are
/// heavily shared between items.
pub fn synthetic_names(n: usize) -> Vec<String> {
    const COLOURS: &[&str] = &["red", "blue", "green", "black", "white"];
    const KINDS: &[&str] = &["shoes", "hat", "scarf", "jacket", "socks", "table"];
    (0..n)
        .map(|i| {
            format!(
                "{} {} model{}",
                COLOURS[i % COLOURS.len()],
                KINDS[i % KINDS.len()],
                i % 97
            )
        })
        .collect()
}
