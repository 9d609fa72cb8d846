use crate::{
    db::DbPool,
    entities::work_order::{ActiveModel as WorkOrderActiveModel, Model as WorkOrderModel},
    entities::work_request::{
        self, ActiveModel as WorkRequestActiveModel, Entity as WorkRequestEntity,
        Model as WorkRequestModel,
    },
    errors::ServiceError,
    events::{Event, EventSender},
    services::work_orders::next_work_order_number,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, EntityTrait, PaginatorTrait, QueryOrder, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info, instrument, warn};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateWorkRequestRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub requested_by_id: Option<i32>,
    pub date_needed: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateWorkRequestRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub date_needed: Option<NaiveDate>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Field overrides a caller may apply at conversion time. Defaults computed
/// from the request win unless the caller supplies a value here; that
/// includes the computed status and number.
#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ConvertOverrides {
    pub work_order_number: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to_id: Option<i32>,
    pub date_scheduled: Option<NaiveDate>,
    pub estimated_hours: Option<Decimal>,
    pub estimated_cost: Option<Decimal>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorkRequestListResponse {
    pub work_requests: Vec<WorkRequestModel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

fn format_request_number(n: u64) -> String {
    format!("WR-{:03}", n)
}

/// Service for managing work requests and their conversion into work orders.
#[derive(Clone)]
pub struct WorkRequestService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl WorkRequestService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a new work request in status "requested".
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_work_request(
        &self,
        request: CreateWorkRequestRequest,
    ) -> Result<WorkRequestModel, ServiceError> {
        request.validate()?;

        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await?;

        let count = WorkRequestEntity::find().count(&txn).await?;
        let number = format_request_number(count + 1);

        let active = WorkRequestActiveModel {
            request_number: Set(number.clone()),
            title: Set(request.title),
            description: Set(request.description),
            asset_id: Set(request.asset_id),
            priority: Set(request.priority),
            status: Set("requested".to_string()),
            requested_by_id: Set(request.requested_by_id),
            date_requested: Set(now),
            date_needed: Set(request.date_needed),
            location: Set(request.location),
            notes: Set(request.notes),
            is_converted: Set(false),
            converted_to_work_order_id: Set(None),
            created_at: Set(now),
            ..Default::default()
        };

        let model = active
            .insert(&txn)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "request number"))?;

        txn.commit().await?;

        info!(request_id = model.id, number = %number, "Work request created");
        self.emit(Event::WorkRequestCreated(model.id)).await;

        Ok(model)
    }

    /// Retrieves a work request by id.
    #[instrument(skip(self))]
    pub async fn get_work_request(
        &self,
        id: i32,
    ) -> Result<Option<WorkRequestModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = WorkRequestEntity::find_by_id(id).one(db).await?;
        Ok(model)
    }

    /// Lists work requests with pagination, newest first.
    #[instrument(skip(self))]
    pub async fn list_work_requests(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<WorkRequestListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = WorkRequestEntity::find()
            .order_by_desc(work_request::Column::Id)
            .paginate(db, per_page);

        let total = paginator.num_items().await?;
        let work_requests = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(WorkRequestListResponse {
            work_requests,
            total,
            page,
            per_page,
        })
    }

    /// Applies a partial update to a work request.
    #[instrument(skip(self, request))]
    pub async fn update_work_request(
        &self,
        id: i32,
        request: UpdateWorkRequestRequest,
    ) -> Result<WorkRequestModel, ServiceError> {
        let db = &*self.db_pool;

        let model = WorkRequestEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_request", id))?;

        let mut active: WorkRequestActiveModel = model.into();

        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(asset_id) = request.asset_id {
            active.asset_id = Set(Some(asset_id));
        }
        if let Some(priority) = request.priority {
            active.priority = Set(priority);
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if let Some(date_needed) = request.date_needed {
            active.date_needed = Set(Some(date_needed));
        }
        if let Some(location) = request.location {
            active.location = Set(Some(location));
        }
        if let Some(notes) = request.notes {
            active.notes = Set(Some(notes));
        }

        let updated = active.update(db).await?;
        Ok(updated)
    }

    /// Deletes a work request.
    #[instrument(skip(self))]
    pub async fn delete_work_request(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = WorkRequestEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("work_request", id));
        }
        info!(request_id = id, "Work request deleted");
        Ok(())
    }

    /// Converts a work request into a work order.
    ///
    /// The new work order copies title, description, asset, priority,
    /// requester and dates from the request, defaults to status "approved",
    /// then applies caller overrides on top. The request is marked converted
    /// (`is_converted`, `converted_to_work_order_id`, status "completed") in
    /// the same transaction, so a failure at any step leaves no orphan.
    #[instrument(skip(self, overrides))]
    pub async fn convert(
        &self,
        request_id: i32,
        overrides: ConvertOverrides,
    ) -> Result<WorkOrderModel, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await.map_err(|e| {
            error!(error = %e, request_id, "Failed to start conversion transaction");
            ServiceError::DatabaseError(e)
        })?;

        let request = WorkRequestEntity::find_by_id(request_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("work_request", request_id))?;

        if request.is_converted {
            // Permitted, but leaves the prior work order without a
            // back-reference from the request.
            warn!(
                request_id,
                prior_work_order_id = ?request.converted_to_work_order_id,
                "Converting an already-converted work request"
            );
        }

        let number = match overrides.work_order_number.clone() {
            Some(number) => number,
            None => next_work_order_number(&txn).await?,
        };

        let active = WorkOrderActiveModel {
            work_order_number: Set(number),
            title: Set(overrides.title.unwrap_or_else(|| request.title.clone())),
            description: Set(overrides.description.or_else(|| request.description.clone())),
            type_id: Set(overrides.type_id),
            asset_id: Set(request.asset_id),
            priority: Set(overrides.priority.unwrap_or_else(|| request.priority.clone())),
            status: Set(overrides.status.unwrap_or_else(|| "approved".to_string())),
            requested_by_id: Set(request.requested_by_id),
            assigned_to_id: Set(overrides.assigned_to_id),
            date_requested: Set(request.date_requested),
            date_needed: Set(request.date_needed),
            date_scheduled: Set(overrides.date_scheduled),
            estimated_hours: Set(overrides.estimated_hours),
            estimated_cost: Set(overrides.estimated_cost),
            created_at: Set(now),
            ..Default::default()
        };

        let work_order = active
            .insert(&txn)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "work order number"))?;

        let mut request_active: WorkRequestActiveModel = request.into();
        request_active.is_converted = Set(true);
        request_active.converted_to_work_order_id = Set(Some(work_order.id));
        request_active.status = Set("completed".to_string());
        request_active.update(&txn).await?;

        txn.commit().await.map_err(|e| {
            error!(error = %e, request_id, "Failed to commit conversion transaction");
            ServiceError::DatabaseError(e)
        })?;

        info!(
            request_id,
            work_order_id = work_order.id,
            number = %work_order.work_order_number,
            "Work request converted"
        );
        self.emit(Event::WorkRequestConverted {
            request_id,
            work_order_id: work_order.id,
        })
        .await;

        Ok(work_order)
    }

    async fn emit(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                warn!(error = %e, "Failed to send work request event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_numbers_follow_work_order_format() {
        assert_eq!(format_request_number(14), "WR-014");
        assert_eq!(format_request_number(1000), "WR-1000");
    }
}
