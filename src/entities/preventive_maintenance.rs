use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "preventive_maintenance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    pub maintenance_type: String,
    pub priority: String,
    pub start_date: NaiveDate,
    /// Estimated duration of one occurrence, in hours.
    pub duration: Decimal,
    pub created_by_id: Option<i32>,
    pub is_recurring: bool,
    /// One of "daily", "weekly", "biweekly", "monthly", "quarterly",
    /// "semiannually", "annually". Required together with `occurrences`
    /// for a recurring schedule to expand.
    pub recurring_period: Option<String>,
    pub occurrences: Option<i32>,
    pub is_active: bool,
    pub notes: Option<String>,
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
        from = "Column::CreatedById",
        to = "super::user::Column::Id"
    )]
    CreatedBy,
    #[sea_orm(has_many = "super::pm_technician::Entity")]
    Technicians,
    #[sea_orm(has_many = "super::pm_work_order::Entity")]
    GeneratedWorkOrders,
}

impl Related<super::asset::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Asset.def()
    }
}

impl Related<super::pm_technician::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technicians.def()
    }
}

impl Related<super::pm_work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GeneratedWorkOrders.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
