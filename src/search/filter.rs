use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::engine::fold;
use crate::models::Product;

/// Inclusive selling-price range in minor units; a `max` of `None` is
/// open-ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PriceBucket {
    pub min: i64,
    pub max: Option<i64>,
}

impl PriceBucket {
    pub fn holds(&self, price: i64) -> bool {
        price >= self.min && self.max.map_or(true, |max| price <= max)
    }
}

/// Accumulated multi-select facet state. OR within a facet, AND across
/// facets; an empty list leaves that facet unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FilterSelection {
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub price_buckets: Vec<PriceBucket>,
    #[serde(default)]
    pub categories: Vec<String>,
}

impl FilterSelection {
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
            && self.sizes.is_empty()
            && self.price_buckets.is_empty()
            && self.categories.is_empty()
    }

    pub fn matches(&self, product: &Product) -> bool {
        facet_holds(&self.colors, &product.colors)
            && facet_holds(&self.sizes, &product.sizes)
            && (self.categories.is_empty()
                || self
                    .categories
                    .iter()
                    .any(|c| fold(c) == fold(&product.category)))
            && (self.price_buckets.is_empty()
                || self
                    .price_buckets
                    .iter()
                    .any(|b| b.holds(product.selling_price)))
    }
}

fn facet_holds(selected: &[String], values: &[String]) -> bool {
    selected.is_empty()
        || selected
            .iter()
            .any(|s| values.iter().any(|v| fold(v) == fold(s)))
}

/// The list-view side of the filter contract: compute the visible subset for
/// a selection map. Only live products are considered.
pub fn apply_selection(products: &[Product], selection: &FilterSelection) -> Vec<Product> {
    products
        .iter()
        .filter(|p| p.is_live() && selection.matches(p))
        .cloned()
        .collect()
}

/// Stateful facet selector backing the storefront's filter drawer. Toggles
/// accumulate until `apply` hands the selection to the consumer; `clear`
/// resets every facet. The panel itself never matches products.
#[derive(Debug, Clone, Default)]
pub struct FilterPanel {
    selection: FilterSelection,
}

impl FilterPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_color(&mut self, value: &str) {
        toggle(&mut self.selection.colors, value);
    }

    pub fn toggle_size(&mut self, value: &str) {
        toggle(&mut self.selection.sizes, value);
    }

    pub fn toggle_category(&mut self, value: &str) {
        toggle(&mut self.selection.categories, value);
    }

    pub fn toggle_price_bucket(&mut self, bucket: PriceBucket) {
        if let Some(pos) = self
            .selection
            .price_buckets
            .iter()
            .position(|b| *b == bucket)
        {
            self.selection.price_buckets.remove(pos);
        } else {
            self.selection.price_buckets.push(bucket);
        }
    }

    pub fn apply(&self) -> FilterSelection {
        self.selection.clone()
    }

    pub fn clear(&mut self) {
        self.selection = FilterSelection::default();
    }
}

fn toggle(list: &mut Vec<String>, value: &str) {
    if let Some(pos) = list.iter().position(|v| v == value) {
        list.remove(pos);
    } else {
        list.push(value.to_string());
    }
}
