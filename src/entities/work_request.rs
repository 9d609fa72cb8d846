use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "work_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Human-readable running number, e.g. "WR-014".
    #[sea_orm(unique)]
    pub request_number: String,
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    /// One of "low", "medium", "high", "critical".
    pub priority: String,
    /// One of "requested", "approved", "scheduled", "in_progress",
    /// "on_hold", "completed", "cancelled".
    pub status: String,
    pub requested_by_id: Option<i32>,
    pub date_requested: DateTime<Utc>,
    pub date_needed: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
    /// True iff `converted_to_work_order_id` is set.
    pub is_converted: bool,
    pub converted_to_work_order_id: Option<i32>,
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
        belongs_to = "super::user::Entity",
        from = "Column::RequestedById",
        to = "super::user::Column::Id"
    )]
    RequestedBy,
    #[sea_orm(
        belongs_to = "super::work_order::Entity",
        from = "Column::ConvertedToWorkOrderId",
        to = "super::work_order::Column::Id"
    )]
    ConvertedToWorkOrder,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RequestedBy.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
