use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "work_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-readable running number, e.g. "WO-007".
    #[sea_orm(unique)]
    pub work_order_number: String,
    pub title: String,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub asset_id: Option<i32>,
    /// One of "low", "medium", "high", "critical".
    pub priority: String,
    /// One of "requested", "approved", "scheduled", "in_progress",
    /// "on_hold", "completed", "cancelled".
    pub status: String,
    pub requested_by_id: Option<i32>,
    pub assigned_to_id: Option<i32>,
    pub date_requested: DateTime<Utc>,
    pub date_needed: Option<NaiveDate>,
    pub date_scheduled: Option<NaiveDate>,
    pub date_started: Option<DateTime<Utc>>,
    pub date_completed: Option<DateTime<Utc>>,
    pub estimated_hours: Option<Decimal>,
    pub actual_hours: Option<Decimal>,
    pub estimated_cost: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub completion_notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::asset::Entity",
        from = "Column::AssetId",
        to = "super::asset::Column::Id"
    )]
    Asset,
    #[sea_orm(
        belongs_to = "super::work_order_type::Entity",
        from = "Column::TypeId",
        to = "super::work_order_type::Column::Id"
    )]
    WorkOrderType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::RequestedById",
        to = "super::user::Column::Id"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedToId",
        to = "super::user::Column::Id"
    )]
    AssignedTo,
    #[sea_orm(has_many = "super::work_order_labor::Entity")]
    Labor,
    #[sea_orm(has_many = "super::work_order_part::Entity")]
    Parts,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::work_order_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrderType.def()
    }
}

impl Related<super::work_order_labor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Labor.def()
    }
}

impl Related<super::work_order_part::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Parts.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
