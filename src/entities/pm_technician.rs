use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Many-to-many assignment of technicians to a PM schedule. The full set is
/// replaced on each assignment call; row order (by id) carries the primary
/// technician first.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize, utoipa::ToSchema)]
#[sea_orm(table_name = "pm_technicians")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub pm_id: i32,
    pub technician_id: i32,
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
        belongs_to = "super::user::Entity",
        from = "Column::TechnicianId",
        to = "super::user::Column::Id"
    )]
    Technician,
}

impl Related<super::preventive_maintenance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PreventiveMaintenance.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Technician.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
