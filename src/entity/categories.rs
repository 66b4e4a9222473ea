use sea_orm::entity::prelude::*;

use crate::locale::LocalizedText;

// Products reference categories by denormalized name, not by key, so there
// is no relation to the products table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(column_type = "JsonBinary")]
    pub name: LocalizedText,
    pub slug: String,
    pub is_active: Option<bool>,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
