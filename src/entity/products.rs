use sea_orm::entity::prelude::*;

use super::{ImageList, TextList};
use crate::locale::LocalizedText;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub name: LocalizedText,
    pub category: String,
    pub description: Option<String>,
    pub price: i64,
    pub selling_price: i64,
    pub sale: Option<i32>,
    #[sea_orm(column_type = "JsonBinary")]
    pub sizes: TextList,
    #[sea_orm(column_type = "JsonBinary")]
    pub colors: TextList,
    #[sea_orm(column_type = "JsonBinary")]
    pub images: ImageList,
    pub stock: i32,
    pub is_active: Option<bool>,
    pub is_new: bool,
    pub parents_id: Option<Uuid>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::favorites::Entity")]
    Favorites,
    #[sea_orm(has_many = "super::cart_items::Entity")]
    CartItems,
    #[sea_orm(has_many = "super::order_items::Entity")]
    OrderItems,
}

impl Related<super::favorites::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Favorites.def()
    }
}

impl Related<super::cart_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CartItems.def()
    }
}

impl Related<super::order_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
