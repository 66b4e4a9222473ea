use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};

use crate::models::ImageRef;

pub mod audit_logs;
pub mod cart_items;
pub mod categories;
pub mod colors;
pub mod favorites;
pub mod order_items;
pub mod orders;
pub mod products;
pub mod sizes;
pub mod users;

pub use audit_logs::Entity as AuditLogs;
pub use cart_items::Entity as CartItems;
pub use categories::Entity as Categories;
pub use colors::Entity as Colors;
pub use favorites::Entity as Favorites;
pub use order_items::Entity as OrderItems;
pub use orders::Entity as Orders;
pub use products::Entity as Products;
pub use sizes::Entity as Sizes;
pub use users::Entity as Users;

/// Denormalized string list stored as a JSONB column (sizes, colors).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct TextList(pub Vec<String>);

/// Image list stored as a JSONB column; entries keep their original shape.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct ImageList(pub Vec<ImageRef>);
