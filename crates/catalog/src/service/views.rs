//! Render-time computations over the cached collection. Everything here is
//! pure: identical inputs always give identical output in stable order.

use crate::{domain::responses::CategoryCount, model::Product};

/// Synthetic category that matches every product. Shown first in the
/// storefront category strip.
pub const ALL_PRODUCTS_CATEGORY: &str = "All Product";

/// Occurrence count per category, preceded by the synthetic all-entry whose
/// count is the total. Categories appear in first-seen order, not sorted.
pub fn category_counts(products: &[Product]) -> Vec<CategoryCount> {
    let mut counts = vec![CategoryCount {
        name: ALL_PRODUCTS_CATEGORY.to_string(),
        count: products.len(),
    }];

    for product in products {
        match counts
            .iter_mut()
            .skip(1)
            .find(|c| c.name == product.category)
        {
            Some(entry) => entry.count += 1,
            None => counts.push(CategoryCount {
                name: product.category.clone(),
                count: 1,
            }),
        }
    }

    counts
}

/// Combined search + category predicate. A product matches when the active
/// category is the synthetic all-entry or equals its category exactly, and
/// the trimmed search text is empty or a case-insensitive substring of its
/// name or description.
pub fn filter_products(products: &[Product], search: &str, active_category: &str) -> Vec<Product> {
    let needle = search.trim().to_lowercase();

    products
        .iter()
        .filter(|product| {
            let matches_category = active_category == ALL_PRODUCTS_CATEGORY
                || product.category == active_category;

            let matches_search = needle.is_empty()
                || product.name.to_lowercase().contains(&needle)
                || product
                    .description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&needle))
                    .unwrap_or(false);

            matches_category && matches_search
        })
        .cloned()
        .collect()
}
