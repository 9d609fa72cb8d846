use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One row per generated PM occurrence, linking a schedule to the concrete
/// work order it produced.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "pm_work_orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pm_id: i32,
    pub work_order_id: i32,
    pub scheduled_date: NaiveDate,
    /// 1-based position in the generated series.
    pub occurrence_number: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::preventive_maintenance::Entity",
        from = "Column::PmId",
        to = "super::preventive_maintenance::Column::Id"
    )]
    PreventiveMaintenance,
    #[sea_orm(
        belongs_to = "super::work_order::Entity",
        from = "Column::WorkOrderId",
        to = "super::work_order::Column::Id"
    )]
    WorkOrder,
}

impl Related<super::preventive_maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreventiveMaintenance.def()
    }
}

impl Related<super::work_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::WorkOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
