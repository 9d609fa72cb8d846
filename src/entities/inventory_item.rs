use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub part_number: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub quantity_in_stock: i32,
    pub minimum_stock: i32,
    pub unit_cost: Option<Decimal>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::inventory_category::Entity",
        from = "Column::CategoryId",
        to = "super::inventory_category::Column::Id"
    )]
    Category,
    #[sea_orm(has_many = "super::work_order_part::Entity")]
    WorkOrderParts,
}

impl Related<super::inventory_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl Related<super::work_order_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrderParts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
