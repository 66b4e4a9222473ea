use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::locale::LocalizedText;
use crate::models::{ImageRef, Product};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProductRequest {
    pub name: LocalizedText,
    pub category: String,
    pub description: Option<String>,
    pub price: i64,
    pub selling_price: i64,
    pub sale: Option<i32>,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageRef>,
    pub stock: i32,
    #[serde(default)]
    pub is_new: bool,
    pub parents_id: Option<Uuid>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProductRequest {
    pub name: Option<LocalizedText>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub selling_price: Option<i64>,
    pub sale: Option<i32>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub images: Option<Vec<ImageRef>>,
    pub stock: Option<i32>,
    pub is_active: Option<bool>,
    pub is_new: Option<bool>,
}

#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct ProductList {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}

/// One silhouette and its color variants: the parent plus every product
/// whose `parents_id` points at it.
#[derive(Serialize, ToSchema)]
#[serde(transparent)]
pub struct VariantFamily {
    #[schema(value_type = Vec<Product>)]
    pub items: Vec<Product>,
}
