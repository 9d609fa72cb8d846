use crate::{
    db::DbPool,
    entities::work_order::{
        self, ActiveModel as WorkOrderActiveModel, Entity as WorkOrderEntity,
        Model as WorkOrderModel,
    },
    entities::{work_order_labor, work_order_part},
    errors::ServiceError,
    events::{Event, EventSender},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

/// Formats a running count as a work-order number. Zero-padded to three
/// digits; past 999 the longer digit string is used as-is.
pub(crate) fn format_work_order_number(n: u64) -> String {
    format!("WO-{:03}", n)
}

/// Computes the next work-order number by counting existing rows. Must run on
/// the same transaction as the insert it feeds; the unique index on
/// `work_order_number` catches any writer that slips in between.
pub(crate) async fn next_work_order_number<C: ConnectionTrait>(
    conn: &C,
) -> Result<String, ServiceError> {
    let count = WorkOrderEntity::find().count(conn).await?;
    Ok(format_work_order_number(count + 1))
}

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateWorkOrderRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub asset_id: Option<i32>,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub requested_by_id: Option<i32>,
    pub assigned_to_id: Option<i32>,
    pub date_needed: Option<NaiveDate>,
    pub date_scheduled: Option<NaiveDate>,
    pub estimated_hours: Option<Decimal>,
    pub estimated_cost: Option<Decimal>,
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateWorkOrderRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub asset_id: Option<i32>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to_id: Option<i32>,
    pub date_needed: Option<NaiveDate>,
    pub date_scheduled: Option<NaiveDate>,
    pub date_started: Option<DateTime<Utc>>,
    pub date_completed: Option<DateTime<Utc>>,
    pub actual_hours: Option<Decimal>,
    pub actual_cost: Option<Decimal>,
    pub completion_notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct AddLaborRequest {
    pub user_id: Option<i32>,
    pub description: Option<String>,
    pub hours: Decimal,
    pub labor_date: Option<NaiveDate>,
    pub hourly_rate: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct AddPartRequest {
    pub item_id: i32,
    #[validate(range(min = 1, message = "Quantity must be positive"))]
    pub quantity_used: i32,
    pub unit_cost: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkOrderListResponse {
    pub work_orders: Vec<WorkOrderModel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Service for managing work orders
#[derive(Clone)]
pub struct WorkOrderService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl WorkOrderService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a new work order directly (not via conversion or PM expansion).
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_work_order(
        &self,
        request: CreateWorkOrderRequest,
    ) -> Result<WorkOrderModel, ServiceError> {
        request.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, "Failed to start transaction for work order creation");
            ServiceError::DatabaseError(e)
        })?;

        let number = next_work_order_number(&txn).await?;

        let active = WorkOrderActiveModel {
            work_order_number: Set(number.clone()),
            title: Set(request.title),
            description: Set(request.description),
            type_id: Set(request.type_id),
            asset_id: Set(request.asset_id),
            priority: Set(request.priority),
            status: Set("approved".to_string()),
            requested_by_id: Set(request.requested_by_id),
            assigned_to_id: Set(request.assigned_to_id),
            date_requested: Set(now),
            date_needed: Set(request.date_needed),
            date_scheduled: Set(request.date_scheduled),
            estimated_hours: Set(request.estimated_hours),
            estimated_cost: Set(request.estimated_cost),
            created_at: Set(now),
            ..Default::default()
        };

        let model = active
            .insert(&txn)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "work order number"))?;

        txn.commit().await?;

        info!(work_order_id = model.id, number = %number, "Work order created");
        self.emit(Event::WorkOrderCreated(model.id)).await;

        Ok(model)
    }

    /// Retrieves a work order by id.
    #[instrument(skip(self))]
    pub async fn get_work_order(&self, id: i32) -> Result<Option<WorkOrderModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = WorkOrderEntity::find_by_id(id).one(db).await?;
        Ok(model)
    }

    /// Lists work orders with pagination, newest first.
    #[instrument(skip(self))]
    pub async fn list_work_orders(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<WorkOrderListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = WorkOrderEntity::find()
            .order_by_desc(work_order::Column::Id)
            .paginate(db, per_page);

        let total = paginator.num_items().await?;
        let work_orders = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(WorkOrderListResponse {
            work_orders,
            total,
            page,
            per_page,
        })
    }

    /// Applies a partial update to a work order.
    #[instrument(skip(self, request))]
    pub async fn update_work_order(
        &self,
        id: i32,
        request: UpdateWorkOrderRequest,
    ) -> Result<WorkOrderModel, ServiceError> {
        let db = &*self.db_pool;

        let model = WorkOrderEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_order", id))?;

        let old_status = model.status.clone();
        let mut active: WorkOrderActiveModel = model.into();

        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(type_id) = request.type_id {
            active.type_id = Set(Some(type_id));
        }
        if let Some(asset_id) = request.asset_id {
            active.asset_id = Set(Some(asset_id));
        }
        if let Some(priority) = request.priority {
            active.priority = Set(priority);
        }
        if let Some(status) = request.status.clone() {
            active.status = Set(status);
        }
        if let Some(assigned_to_id) = request.assigned_to_id {
            active.assigned_to_id = Set(Some(assigned_to_id));
        }
        if let Some(date_needed) = request.date_needed {
            active.date_needed = Set(Some(date_needed));
        }
        if let Some(date_scheduled) = request.date_scheduled {
            active.date_scheduled = Set(Some(date_scheduled));
        }
        if let Some(date_started) = request.date_started {
            active.date_started = Set(Some(date_started));
        }
        if let Some(date_completed) = request.date_completed {
            active.date_completed = Set(Some(date_completed));
        }
        if let Some(actual_hours) = request.actual_hours {
            active.actual_hours = Set(Some(actual_hours));
        }
        if let Some(actual_cost) = request.actual_cost {
            active.actual_cost = Set(Some(actual_cost));
        }
        if let Some(completion_notes) = request.completion_notes {
            active.completion_notes = Set(Some(completion_notes));
        }

        let updated = active.update(db).await?;

        if let Some(new_status) = request.status {
            if new_status != old_status {
                self.emit(Event::WorkOrderStatusChanged {
                    work_order_id: id,
                    old_status,
                    new_status,
                })
                .await;
            }
        }

        Ok(updated)
    }

    /// Deletes a work order.
    #[instrument(skip(self))]
    pub async fn delete_work_order(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = WorkOrderEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("work_order", id));
        }
        info!(work_order_id = id, "Work order deleted");
        Ok(())
    }

    /// Records a labor entry against a work order.
    #[instrument(skip(self, request))]
    pub async fn add_labor(
        &self,
        work_order_id: i32,
        request: AddLaborRequest,
    ) -> Result<work_order_labor::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        WorkOrderEntity::find_by_id(work_order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_order", work_order_id))?;

        let active = work_order_labor::ActiveModel {
            work_order_id: Set(work_order_id),
            user_id: Set(request.user_id),
            description: Set(request.description),
            hours: Set(request.hours),
            labor_date: Set(request.labor_date),
            hourly_rate: Set(request.hourly_rate),
            ..Default::default()
        };

        let model = active.insert(db).await?;
        Ok(model)
    }

    /// Lists labor entries for a work order.
    #[instrument(skip(self))]
    pub async fn list_labor(
        &self,
        work_order_id: i32,
    ) -> Result<Vec<work_order_labor::Model>, ServiceError> {
        let db = &*self.db_pool;
        let rows = work_order_labor::Entity::find()
            .filter(work_order_labor::Column::WorkOrderId.eq(work_order_id))
            .order_by_asc(work_order_labor::Column::Id)
            .all(db)
            .await?;
        Ok(rows)
    }

    /// Records spare-part usage against a work order.
    #[instrument(skip(self, request))]
    pub async fn add_part(
        &self,
        work_order_id: i32,
        request: AddPartRequest,
    ) -> Result<work_order_part::Model, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        WorkOrderEntity::find_by_id(work_order_id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_order", work_order_id))?;

        let active = work_order_part::ActiveModel {
            work_order_id: Set(work_order_id),
            item_id: Set(request.item_id),
            quantity_used: Set(request.quantity_used),
            unit_cost: Set(request.unit_cost),
            ..Default::default()
        };

        let model = active.insert(db).await?;
        Ok(model)
    }

    /// Lists part-usage entries for a work order.
    #[instrument(skip(self))]
    pub async fn list_parts(
        &self,
        work_order_id: i32,
    ) -> Result<Vec<work_order_part::Model>, ServiceError> {
        let db = &*self.db_pool;
        let rows = work_order_part::Entity::find()
            .filter(work_order_part::Column::WorkOrderId.eq(work_order_id))
            .order_by_asc(work_order_part::Column::Id)
            .all(db)
            .await?;
        Ok(rows)
    }

    async fn emit(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                warn!(error = %e, "Failed to send work order event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_are_zero_padded_to_three_digits() {
        assert_eq!(format_work_order_number(1), "WO-001");
        assert_eq!(format_work_order_number(7), "WO-007");
        assert_eq!(format_work_order_number(42), "WO-042");
        assert_eq!(format_work_order_number(999), "WO-999");
    }

    #[test]
    fn numbers_past_padding_keep_full_digit_string() {
        assert_eq!(format_work_order_number(1000), "WO-1000");
        assert_eq!(format_work_order_number(12345), "WO-12345");
    }
}
