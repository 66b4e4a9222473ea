use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::entity;
use crate::locale::LocalizedText;

/// Image entry as the legacy admin forms stored it: a bare URL or an object
/// wrapping one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum ImageRef {
    Plain(String),
    Object { url: String },
}

impl ImageRef {
    pub fn url(&self) -> &str {
        match self {
            ImageRef::Plain(url) => url,
            ImageRef::Object { url } => url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub role: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: LocalizedText,
    /// Denormalized category name, matched against `Category.name` by folded
    /// string equality. No referential integrity.
    pub category: String,
    pub description: Option<String>,
    pub price: i64,
    pub selling_price: i64,
    /// Discount percentage, if the product is on sale.
    pub sale: Option<i32>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub images: Vec<ImageRef>,
    pub stock: i32,
    pub is_active: Option<bool>,
    pub is_new: bool,
    /// Parent product of this color variant, when part of a variant family.
    pub parents_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Soft-delete semantics: only an explicit `false` hides the product.
    pub fn is_live(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: LocalizedText,
    pub slug: String,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    pub fn is_live(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SizeOption {
    pub id: Uuid,
    pub value: String,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl SizeOption {
    pub fn is_live(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ColorOption {
    pub id: Uuid,
    pub name: String,
    pub code: String,
    pub is_active: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl ColorOption {
    pub fn is_live(&self) -> bool {
        self.is_active != Some(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Favorite {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub id: Uuid,
    pub product_id: Uuid,
    pub user_id: Uuid,
    pub size: Option<String>,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: Uuid,
    pub user_id: Uuid,
    pub total_amount: i64,
    pub status: String,
    pub payment_status: String,
    pub invoice_number: String,
    pub paid_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub size: Option<String>,
    pub quantity: i32,
    pub price: i64,
    pub created_at: DateTime<Utc>,
}

impl From<entity::products::Model> for Product {
    fn from(model: entity::products::Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            category: model.category,
            description: model.description,
            price: model.price,
            selling_price: model.selling_price,
            sale: model.sale,
            sizes: model.sizes.0,
            colors: model.colors.0,
            images: model.images.0,
            stock: model.stock,
            is_active: model.is_active,
            is_new: model.is_new,
            parents_id: model.parents_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::categories::Model> for Category {
    fn from(model: entity::categories::Model) -> Self {
        Category {
            id: model.id,
            name: model.name,
            slug: model.slug,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::sizes::Model> for SizeOption {
    fn from(model: entity::sizes::Model) -> Self {
        SizeOption {
            id: model.id,
            value: model.value,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::colors::Model> for ColorOption {
    fn from(model: entity::colors::Model) -> Self {
        ColorOption {
            id: model.id,
            name: model.name,
            code: model.code,
            is_active: model.is_active,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::favorites::Model> for Favorite {
    fn from(model: entity::favorites::Model) -> Self {
        Favorite {
            id: model.id,
            product_id: model.product_id,
            user_id: model.user_id,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::cart_items::Model> for CartItem {
    fn from(model: entity::cart_items::Model) -> Self {
        CartItem {
            id: model.id,
            product_id: model.product_id,
            user_id: model.user_id,
            size: model.size,
            quantity: model.quantity,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::orders::Model> for Order {
    fn from(model: entity::orders::Model) -> Self {
        Order {
            id: model.id,
            user_id: model.user_id,
            total_amount: model.total_amount,
            status: model.status,
            payment_status: model.payment_status,
            invoice_number: model.invoice_number,
            paid_at: model.paid_at.map(|dt| dt.with_timezone(&Utc)),
            created_at: model.created_at.with_timezone(&Utc),
            updated_at: model.updated_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::order_items::Model> for OrderItem {
    fn from(model: entity::order_items::Model) -> Self {
        OrderItem {
            id: model.id,
            order_id: model.order_id,
            product_id: model.product_id,
            size: model.size,
            quantity: model.quantity,
            price: model.price,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

impl From<entity::users::Model> for User {
    fn from(model: entity::users::Model) -> Self {
        User {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            created_at: model.created_at.with_timezone(&Utc),
            role: model.role,
        }
    }
}
