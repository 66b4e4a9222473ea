use std::collections::HashSet;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::source::{CatalogSnapshot, CatalogSource};
use crate::error::AppResult;
use crate::models::{Category, ColorOption, Product, SizeOption};

/// Result of one catalog search: de-duplicated products plus the facet
/// entries the query hit.
#[derive(Debug, Clone, Default, Serialize, ToSchema)]
pub struct SearchOutcome {
    pub products: Vec<Product>,
    pub categories: Vec<Category>,
    pub sizes: Vec<SizeOption>,
    pub colors: Vec<ColorOption>,
}

/// Trim and lowercase a raw query.
pub fn normalize_query(raw: &str) -> String {
    fold(raw)
}

// Every comparison in the search path and the filter path goes through
// fold/contains_fold so the matching rules cannot drift apart.
pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}

pub(crate) fn contains_fold(haystack: &str, needle: &str) -> bool {
    fold(haystack).contains(needle)
}

/// Search the catalog for `raw_query`.
///
/// A blank query is a defined zero-result state, not an error, and never
/// touches the store. A failed store read fails the whole search; there is
/// no partial result.
pub async fn search<C: CatalogSource>(source: &C, raw_query: &str) -> AppResult<SearchOutcome> {
    let needle = normalize_query(raw_query);
    if needle.is_empty() {
        return Ok(SearchOutcome::default());
    }
    let snapshot = source.load().await?;
    Ok(run(&snapshot, &needle))
}

/// Pure matcher over one snapshot. `needle` must already be normalized.
///
/// Product order is a documented contract: direct matches first, then
/// color-, size-, and category-implied products, each in snapshot order.
/// Consumers that do not care should treat `products` as a set.
pub fn run(snapshot: &CatalogSnapshot, needle: &str) -> SearchOutcome {
    let categories: Vec<Category> = snapshot
        .categories
        .iter()
        .filter(|c| c.is_live() && c.name.any_variant(|v| contains_fold(v, needle)))
        .cloned()
        .collect();
    let sizes: Vec<SizeOption> = snapshot
        .sizes
        .iter()
        .filter(|s| s.is_live() && contains_fold(&s.value, needle))
        .cloned()
        .collect();
    let colors: Vec<ColorOption> = snapshot
        .colors
        .iter()
        .filter(|c| c.is_live() && contains_fold(&c.name, needle))
        .cloned()
        .collect();

    let live: Vec<&Product> = snapshot.products.iter().filter(|p| p.is_live()).collect();

    let mut merged: Vec<Product> = Vec::new();
    let mut seen: HashSet<Uuid> = HashSet::new();

    for &product in &live {
        if direct_match(product, needle) {
            push_unique(&mut merged, &mut seen, product);
        }
    }

    // Facet-implied expansion: a matched color/size/category pulls in every
    // live product carrying that value, by folded equality.
    let color_names: Vec<String> = colors.iter().map(|c| fold(&c.name)).collect();
    if !color_names.is_empty() {
        for &product in &live {
            if product.colors.iter().any(|c| color_names.contains(&fold(c))) {
                push_unique(&mut merged, &mut seen, product);
            }
        }
    }

    let size_values: Vec<String> = sizes.iter().map(|s| fold(&s.value)).collect();
    if !size_values.is_empty() {
        for &product in &live {
            if product.sizes.iter().any(|s| size_values.contains(&fold(s))) {
                push_unique(&mut merged, &mut seen, product);
            }
        }
    }

    let category_names: Vec<String> = categories
        .iter()
        .flat_map(|c| c.name.variants())
        .map(fold)
        .collect();
    if !category_names.is_empty() {
        for &product in &live {
            if category_names.contains(&fold(&product.category)) {
                push_unique(&mut merged, &mut seen, product);
            }
        }
    }

    SearchOutcome {
        products: merged,
        categories,
        sizes,
        colors,
    }
}

fn direct_match(product: &Product, needle: &str) -> bool {
    product.name.any_variant(|v| contains_fold(v, needle))
        || contains_fold(&product.category, needle)
        || product.sizes.iter().any(|s| contains_fold(s, needle))
        || product.colors.iter().any(|c| contains_fold(c, needle))
}

fn push_unique(merged: &mut Vec<Product>, seen: &mut HashSet<Uuid>, product: &Product) {
    if seen.insert(product.id) {
        merged.push(product.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_query("  Red Sneaker "), "red sneaker");
        assert_eq!(normalize_query("\t\n"), "");
    }

    #[test]
    fn contains_fold_is_case_insensitive_substring() {
        assert!(contains_fold("Red Carpet Collection", "red"));
        assert!(contains_fold("  SANDALS ", "sandal"));
        assert!(!contains_fold("Boots", "sandal"));
    }
}
