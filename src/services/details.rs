//! Read-side detail composition.
//!
//! Each `*_details` call fetches the base record and then resolves its
//! foreign keys one by one, nesting the referenced rows as sub-objects.
//! Lookups are deliberately sequential per id; at the data volumes of a
//! single organization's maintenance records that is the simplest thing
//! that works. List variants skip records that fail to compose instead of
//! failing the whole listing.

use crate::{
    db::DbPool,
    entities::{
        asset, asset_type, document, inventory_category, inventory_item, pm_technician,
        pm_work_order, preventive_maintenance, user, work_order, work_order_labor,
        work_order_part, work_order_type, work_request,
    },
    errors::ServiceError,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use serde::Serialize;
use std::sync::Arc;
use tracing::{instrument, warn};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkOrderDetails {
    #[serde(flatten)]
    pub work_order: work_order::Model,
    pub asset: Option<asset::Model>,
    pub work_order_type: Option<work_order_type::Model>,
    pub requested_by: Option<user::Model>,
    pub assigned_to: Option<user::Model>,
    pub labor: Vec<work_order_labor::Model>,
    pub parts: Vec<PartUsage>,
    pub documents: Vec<document::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PartUsage {
    #[serde(flatten)]
    pub usage: work_order_part::Model,
    pub item: Option<inventory_item::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WorkRequestDetails {
    #[serde(flatten)]
    pub work_request: work_request::Model,
    pub asset: Option<asset::Model>,
    pub requested_by: Option<user::Model>,
    pub converted_to_work_order: Option<work_order::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssetDetails {
    #[serde(flatten)]
    pub asset: asset::Model,
    pub asset_type: Option<asset_type::Model>,
    pub work_orders: Vec<work_order::Model>,
    pub documents: Vec<document::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct InventoryItemDetails {
    #[serde(flatten)]
    pub item: inventory_item::Model,
    pub category: Option<inventory_category::Model>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PreventiveMaintenanceDetails {
    #[serde(flatten)]
    pub schedule: preventive_maintenance::Model,
    pub asset: Option<asset::Model>,
    pub created_by: Option<user::Model>,
    pub technicians: Vec<user::Model>,
    pub generated_work_orders: Vec<pm_work_order::Model>,
}

/// Composes nested read models by resolving foreign keys of a record.
#[derive(Clone)]
pub struct DetailService {
    db_pool: Arc<DbPool>,
}

impl DetailService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    async fn find_user(&self, id: Option<i32>) -> Result<Option<user::Model>, ServiceError> {
        match id {
            Some(id) => Ok(user::Entity::find_by_id(id).one(&*self.db_pool).await?),
            None => Ok(None),
        }
    }

    async fn find_asset(&self, id: Option<i32>) -> Result<Option<asset::Model>, ServiceError> {
        match id {
            Some(id) => Ok(asset::Entity::find_by_id(id).one(&*self.db_pool).await?),
            None => Ok(None),
        }
    }

    /// Documents are attached polymorphically via (related_type, related_id).
    async fn find_documents(
        &self,
        related_type: &str,
        related_id: i32,
    ) -> Result<Vec<document::Model>, ServiceError> {
        let rows = document::Entity::find()
            .filter(document::Column::RelatedType.eq(related_type))
            .filter(document::Column::RelatedId.eq(related_id))
            .order_by_asc(document::Column::Id)
            .all(&*self.db_pool)
            .await?;
        Ok(rows)
    }

    #[instrument(skip(self))]
    pub async fn work_order_details(&self, id: i32) -> Result<WorkOrderDetails, ServiceError> {
        let db = &*self.db_pool;

        let work_order = work_order::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_order", id))?;

        let asset = self.find_asset(work_order.asset_id).await?;
        let work_order_type = match work_order.type_id {
            Some(type_id) => work_order_type::Entity::find_by_id(type_id).one(db).await?,
            None => None,
        };
        let requested_by = self.find_user(work_order.requested_by_id).await?;
        let assigned_to = self.find_user(work_order.assigned_to_id).await?;

        let labor = work_order_labor::Entity::find()
            .filter(work_order_labor::Column::WorkOrderId.eq(id))
            .order_by_asc(work_order_labor::Column::Id)
            .all(db)
            .await?;

        let part_rows = work_order_part::Entity::find()
            .filter(work_order_part::Column::WorkOrderId.eq(id))
            .order_by_asc(work_order_part::Column::Id)
            .all(db)
            .await?;
        let mut parts = Vec::with_capacity(part_rows.len());
        for usage in part_rows {
            let item = inventory_item::Entity::find_by_id(usage.item_id).one(db).await?;
            parts.push(PartUsage { usage, item });
        }

        let documents = self.find_documents("work_order", id).await?;

        Ok(WorkOrderDetails {
            work_order,
            asset,
            work_order_type,
            requested_by,
            assigned_to,
            labor,
            parts,
            documents,
        })
    }

    #[instrument(skip(self))]
    pub async fn work_request_details(&self, id: i32) -> Result<WorkRequestDetails, ServiceError> {
        let db = &*self.db_pool;

        let work_request = work_request::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_request", id))?;

        let asset = self.find_asset(work_request.asset_id).await?;
        let requested_by = self.find_user(work_request.requested_by_id).await?;
        let converted_to_work_order = match work_request.converted_to_work_order_id {
            Some(wo_id) => work_order::Entity::find_by_id(wo_id).one(db).await?,
            None => None,
        };

        Ok(WorkRequestDetails {
            work_request,
            asset,
            requested_by,
            converted_to_work_order,
        })
    }

    #[instrument(skip(self))]
    pub async fn asset_details(&self, id: i32) -> Result<AssetDetails, ServiceError> {
        let db = &*self.db_pool;

        let asset = asset::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("asset", id))?;

        let asset_type = match asset.type_id {
            Some(type_id) => asset_type::Entity::find_by_id(type_id).one(db).await?,
            None => None,
        };

        let work_orders = work_order::Entity::find()
            .filter(work_order::Column::AssetId.eq(id))
            .order_by_desc(work_order::Column::Id)
            .all(db)
            .await?;

        let documents = self.find_documents("asset", id).await?;

        Ok(AssetDetails {
            asset,
            asset_type,
            work_orders,
            documents,
        })
    }

    #[instrument(skip(self))]
    pub async fn inventory_item_details(
        &self,
        id: i32,
    ) -> Result<InventoryItemDetails, ServiceError> {
        let db = &*self.db_pool;

        let item = inventory_item::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("inventory_item", id))?;

        let category = match item.category_id {
            Some(category_id) => {
                inventory_category::Entity::find_by_id(category_id)
                    .one(db)
                    .await?
            }
            None => None,
        };

        Ok(InventoryItemDetails { item, category })
    }

    #[instrument(skip(self))]
    pub async fn preventive_maintenance_details(
        &self,
        id: i32,
    ) -> Result<PreventiveMaintenanceDetails, ServiceError> {
        let db = &*self.db_pool;

        let schedule = preventive_maintenance::Entity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("preventive_maintenance", id))?;

        let asset = self.find_asset(schedule.asset_id).await?;
        let created_by = self.find_user(schedule.created_by_id).await?;

        let assignments = pm_technician::Entity::find()
            .filter(pm_technician::Column::PmId.eq(id))
            .order_by_asc(pm_technician::Column::Id)
            .all(db)
            .await?;
        let mut technicians = Vec::with_capacity(assignments.len());
        for assignment in assignments {
            if let Some(technician) = user::Entity::find_by_id(assignment.technician_id)
                .one(db)
                .await?
            {
                technicians.push(technician);
            }
        }

        let generated_work_orders = pm_work_order::Entity::find()
            .filter(pm_work_order::Column::PmId.eq(id))
            .order_by_asc(pm_work_order::Column::OccurrenceNumber)
            .all(db)
            .await?;

        Ok(PreventiveMaintenanceDetails {
            schedule,
            asset,
            created_by,
            technicians,
            generated_work_orders,
        })
    }

    /// Composes details for every work order, skipping any that fail.
    #[instrument(skip(self))]
    pub async fn list_work_order_details(&self) -> Result<Vec<WorkOrderDetails>, ServiceError> {
        let db = &*self.db_pool;
        let orders = work_order::Entity::find()
            .order_by_desc(work_order::Column::Id)
            .all(db)
            .await?;

        let mut details = Vec::with_capacity(orders.len());
        for order in orders {
            match self.work_order_details(order.id).await {
                Ok(d) => details.push(d),
                Err(e) => {
                    warn!(work_order_id = order.id, error = %e, "Skipping work order that failed to compose");
                }
            }
        }
        Ok(details)
    }
}
