use crate::{
    db::DbPool,
    entities::pm_technician::{self, Entity as PmTechnicianEntity, Model as PmTechnicianModel},
    entities::pm_work_order::{self, Entity as PmWorkOrderEntity, Model as PmWorkOrderModel},
    entities::preventive_maintenance::{
        self, ActiveModel as PmActiveModel, Entity as PmEntity, Model as PmModel,
    },
    entities::work_order::ActiveModel as WorkOrderActiveModel,
    errors::ServiceError,
    events::{Event, EventSender},
    services::work_orders::next_work_order_number,
};
use chrono::{Days, Months, NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

/// Calendar period between occurrences of a recurring schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurringPeriod {
    Daily,
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
    Semiannually,
    Annually,
}

impl FromStr for RecurringPeriod {
    type Err = ServiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "weekly" => Ok(Self::Weekly),
            "biweekly" => Ok(Self::Biweekly),
            "monthly" => Ok(Self::Monthly),
            "quarterly" => Ok(Self::Quarterly),
            "semiannually" => Ok(Self::Semiannually),
            "annually" => Ok(Self::Annually),
            other => Err(ServiceError::InvalidInput(format!(
                "Unknown recurring period: {other}"
            ))),
        }
    }
}

impl RecurringPeriod {
    /// Advances `start` by `i` periods. Month-based periods clamp to the last
    /// day of shorter months (Jan 31 + 1 month = Feb 28).
    pub fn advance(&self, start: NaiveDate, i: u32) -> Option<NaiveDate> {
        match self {
            Self::Daily => start.checked_add_days(Days::new(u64::from(i))),
            Self::Weekly => start.checked_add_days(Days::new(u64::from(i) * 7)),
            Self::Biweekly => start.checked_add_days(Days::new(u64::from(i) * 14)),
            Self::Monthly => start.checked_add_months(Months::new(i)),
            Self::Quarterly => start.checked_add_months(Months::new(i * 3)),
            Self::Semiannually => start.checked_add_months(Months::new(i * 6)),
            Self::Annually => start.checked_add_months(Months::new(i * 12)),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreatePmRequest {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    pub maintenance_type: String,
    #[serde(default = "default_priority")]
    pub priority: String,
    pub start_date: NaiveDate,
    pub duration: Decimal,
    pub created_by_id: Option<i32>,
    #[serde(default)]
    pub is_recurring: bool,
    pub recurring_period: Option<String>,
    pub occurrences: Option<i32>,
    pub notes: Option<String>,
}

fn default_priority() -> String {
    "medium".to_string()
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdatePmRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub asset_id: Option<i32>,
    pub maintenance_type: Option<String>,
    pub priority: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub duration: Option<Decimal>,
    pub is_recurring: Option<bool>,
    pub recurring_period: Option<String>,
    pub occurrences: Option<i32>,
    pub is_active: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PmListResponse {
    pub schedules: Vec<PmModel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Service for preventive-maintenance schedules: CRUD, technician assignment
/// and expansion into concrete work orders.
#[derive(Clone)]
pub struct PreventiveMaintenanceService {
    db_pool: Arc<DbPool>,
    event_sender: Option<Arc<EventSender>>,
}

impl PreventiveMaintenanceService {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Option<Arc<EventSender>>) -> Self {
        Self {
            db_pool,
            event_sender,
        }
    }

    /// Creates a new PM schedule.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_schedule(&self, request: CreatePmRequest) -> Result<PmModel, ServiceError> {
        request.validate()?;

        if let Some(period) = &request.recurring_period {
            // Reject unknown period names at the door rather than at expansion.
            period.parse::<RecurringPeriod>()?;
        }

        let db = &*self.db_pool;
        let active = PmActiveModel {
            title: Set(request.title),
            description: Set(request.description),
            asset_id: Set(request.asset_id),
            maintenance_type: Set(request.maintenance_type),
            priority: Set(request.priority),
            start_date: Set(request.start_date),
            duration: Set(request.duration),
            created_by_id: Set(request.created_by_id),
            is_recurring: Set(request.is_recurring),
            recurring_period: Set(request.recurring_period),
            occurrences: Set(request.occurrences),
            is_active: Set(true),
            notes: Set(request.notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active.insert(db).await?;
        info!(pm_id = model.id, "Preventive maintenance schedule created");
        Ok(model)
    }

    /// Retrieves a PM schedule by id.
    #[instrument(skip(self))]
    pub async fn get_schedule(&self, id: i32) -> Result<Option<PmModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = PmEntity::find_by_id(id).one(db).await?;
        Ok(model)
    }

    /// Lists PM schedules with pagination.
    #[instrument(skip(self))]
    pub async fn list_schedules(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<PmListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = PmEntity::find()
            .order_by_desc(preventive_maintenance::Column::Id)
            .paginate(db, per_page);

        let total = paginator.num_items().await?;
        let schedules = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(PmListResponse {
            schedules,
            total,
            page,
            per_page,
        })
    }

    /// Applies a partial update to a PM schedule.
    #[instrument(skip(self, request))]
    pub async fn update_schedule(
        &self,
        id: i32,
        request: UpdatePmRequest,
    ) -> Result<PmModel, ServiceError> {
        let db = &*self.db_pool;

        let model = PmEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("preventive_maintenance", id))?;

        if let Some(period) = &request.recurring_period {
            period.parse::<RecurringPeriod>()?;
        }

        let mut active: PmActiveModel = model.into();

        if let Some(title) = request.title {
            active.title = Set(title);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(asset_id) = request.asset_id {
            active.asset_id = Set(Some(asset_id));
        }
        if let Some(maintenance_type) = request.maintenance_type {
            active.maintenance_type = Set(maintenance_type);
        }
        if let Some(priority) = request.priority {
            active.priority = Set(priority);
        }
        if let Some(start_date) = request.start_date {
            active.start_date = Set(start_date);
        }
        if let Some(duration) = request.duration {
            active.duration = Set(duration);
        }
        if let Some(is_recurring) = request.is_recurring {
            active.is_recurring = Set(is_recurring);
        }
        if let Some(recurring_period) = request.recurring_period {
            active.recurring_period = Set(Some(recurring_period));
        }
        if let Some(occurrences) = request.occurrences {
            active.occurrences = Set(Some(occurrences));
        }
        if let Some(is_active) = request.is_active {
            active.is_active = Set(is_active);
        }
        if let Some(notes) = request.notes {
            active.notes = Set(Some(notes));
        }

        let updated = active.update(db).await?;
        Ok(updated)
    }

    /// Deletes a PM schedule along with its technician assignments.
    #[instrument(skip(self))]
    pub async fn delete_schedule(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let txn = db.begin().await?;

        PmTechnicianEntity::delete_many()
            .filter(pm_technician::Column::PmId.eq(id))
            .exec(&txn)
            .await?;

        let result = PmEntity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("preventive_maintenance", id));
        }

        txn.commit().await?;
        info!(pm_id = id, "Preventive maintenance schedule deleted");
        Ok(())
    }

    /// Replaces the full technician assignment set for a schedule.
    ///
    /// Existing rows are deleted and the given ids inserted in order; the
    /// first id becomes the primary technician that expansion auto-assigns.
    #[instrument(skip(self))]
    pub async fn assign_technicians(
        &self,
        pm_id: i32,
        technician_ids: Vec<i32>,
    ) -> Result<Vec<PmTechnicianModel>, ServiceError> {
        let db = &*self.db_pool;
        let txn = db.begin().await?;

        PmEntity::find_by_id(pm_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("preventive_maintenance", pm_id))?;

        PmTechnicianEntity::delete_many()
            .filter(pm_technician::Column::PmId.eq(pm_id))
            .exec(&txn)
            .await?;

        let mut assignments = Vec::with_capacity(technician_ids.len());
        for technician_id in &technician_ids {
            let active = pm_technician::ActiveModel {
                pm_id: Set(pm_id),
                technician_id: Set(*technician_id),
                ..Default::default()
            };
            assignments.push(active.insert(&txn).await?);
        }

        txn.commit().await?;

        info!(pm_id, count = assignments.len(), "Technicians assigned");
        self.emit(Event::PmTechniciansAssigned {
            pm_id,
            technician_ids,
        })
        .await;

        Ok(assignments)
    }

    /// Removes a single technician from a schedule.
    #[instrument(skip(self))]
    pub async fn remove_technician(
        &self,
        pm_id: i32,
        technician_id: i32,
    ) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = PmTechnicianEntity::delete_many()
            .filter(pm_technician::Column::PmId.eq(pm_id))
            .filter(pm_technician::Column::TechnicianId.eq(technician_id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("pm_technician", technician_id));
        }
        Ok(())
    }

    /// Lists the technician assignments for a schedule, primary first.
    #[instrument(skip(self))]
    pub async fn list_technicians(
        &self,
        pm_id: i32,
    ) -> Result<Vec<PmTechnicianModel>, ServiceError> {
        let db = &*self.db_pool;
        let rows = PmTechnicianEntity::find()
            .filter(pm_technician::Column::PmId.eq(pm_id))
            .order_by_asc(pm_technician::Column::Id)
            .all(db)
            .await?;
        Ok(rows)
    }

    /// Expands a PM schedule into concrete work orders.
    ///
    /// Non-recurring schedules produce one work order dated at `start_date`.
    /// Recurring schedules produce `occurrences` work orders, the i-th dated
    /// `start_date` advanced by i periods and titled
    /// `"<title> (<i+1>/<occurrences>)"`. A recurring schedule missing its
    /// period or occurrence count produces nothing.
    ///
    /// A schedule that already has generated work orders is refused with a
    /// `Conflict` unless `force` is set, in which case a new series is
    /// appended. All inserts share one transaction.
    #[instrument(skip(self))]
    pub async fn generate_work_orders(
        &self,
        pm_id: i32,
        force: bool,
    ) -> Result<Vec<PmWorkOrderModel>, ServiceError> {
        let db = &*self.db_pool;
        let now = Utc::now();

        let txn = db.begin().await?;

        let pm = PmEntity::find_by_id(pm_id)
            .one(&txn)
            .await?
            .ok_or_else(|| ServiceError::not_found("preventive_maintenance", pm_id))?;

        let already_generated = PmWorkOrderEntity::find()
            .filter(pm_work_order::Column::PmId.eq(pm_id))
            .count(&txn)
            .await?;
        if already_generated > 0 && !force {
            return Err(ServiceError::Conflict(format!(
                "schedule {pm_id} already has {already_generated} generated work orders; pass force to re-expand"
            )));
        }

        let technicians = PmTechnicianEntity::find()
            .filter(pm_technician::Column::PmId.eq(pm_id))
            .order_by_asc(pm_technician::Column::Id)
            .all(&txn)
            .await?;
        let primary_technician = technicians.first().map(|t| t.technician_id);

        let occurrences: Vec<(NaiveDate, String, i32)> = if pm.is_recurring {
            match (pm.recurring_period.as_deref(), pm.occurrences) {
                (Some(period), Some(total)) if total > 0 => {
                    let period: RecurringPeriod = period.parse()?;
                    let mut out = Vec::with_capacity(total as usize);
                    for i in 0..total {
                        let date = period.advance(pm.start_date, i as u32).ok_or_else(|| {
                            ServiceError::InvalidInput(format!(
                                "occurrence {} of schedule {pm_id} falls outside the calendar",
                                i + 1
                            ))
                        })?;
                        let title = format!("{} ({}/{})", pm.title, i + 1, total);
                        out.push((date, title, i + 1));
                    }
                    out
                }
                _ => {
                    warn!(
                        pm_id,
                        "Recurring schedule missing period or occurrence count; nothing generated"
                    );
                    Vec::new()
                }
            }
        } else {
            vec![(pm.start_date, pm.title.clone(), 1)]
        };

        let mut links = Vec::with_capacity(occurrences.len());
        for (scheduled_date, title, occurrence_number) in occurrences {
            let number = next_work_order_number(&txn).await?;

            let work_order = WorkOrderActiveModel {
                work_order_number: Set(number),
                title: Set(title),
                description: Set(pm.description.clone()),
                asset_id: Set(pm.asset_id),
                priority: Set(pm.priority.clone()),
                status: Set("scheduled".to_string()),
                requested_by_id: Set(pm.created_by_id),
                assigned_to_id: Set(primary_technician),
                date_requested: Set(now),
                date_scheduled: Set(Some(scheduled_date)),
                estimated_hours: Set(Some(pm.duration)),
                created_at: Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "work order number"))?;

            let link = pm_work_order::ActiveModel {
                pm_id: Set(pm_id),
                work_order_id: Set(work_order.id),
                scheduled_date: Set(scheduled_date),
                occurrence_number: Set(occurrence_number),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            links.push(link);
        }

        txn.commit().await?;

        info!(pm_id, count = links.len(), "PM schedule expanded");
        self.emit(Event::PmWorkOrdersGenerated {
            pm_id,
            count: links.len(),
        })
        .await;
        for link in &links {
            self.emit(Event::PmOccurrenceScheduled {
                pm_id,
                work_order_id: link.work_order_id,
                scheduled_date: link.scheduled_date,
                occurrence_number: link.occurrence_number,
            })
            .await;
        }

        Ok(links)
    }

    async fn emit(&self, event: Event) {
        if let Some(sender) = &self.event_sender {
            if let Err(e) = sender.send(event).await {
                warn!(error = %e, "Failed to send PM event");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn monthly_advances_by_calendar_months() {
        let start = date(2025, 1, 15);
        let period = RecurringPeriod::Monthly;
        assert_eq!(period.advance(start, 0), Some(date(2025, 1, 15)));
        assert_eq!(period.advance(start, 1), Some(date(2025, 2, 15)));
        assert_eq!(period.advance(start, 2), Some(date(2025, 3, 15)));
    }

    #[test]
    fn weekly_advances_by_seven_days() {
        let start = date(2025, 6, 1);
        let period = RecurringPeriod::Weekly;
        assert_eq!(period.advance(start, 0), Some(date(2025, 6, 1)));
        assert_eq!(period.advance(start, 1), Some(date(2025, 6, 8)));
    }

    #[test]
    fn biweekly_advances_by_fourteen_days() {
        let start = date(2025, 6, 1);
        assert_eq!(
            RecurringPeriod::Biweekly.advance(start, 2),
            Some(date(2025, 6, 29))
        );
    }

    #[rstest::rstest]
    #[case(RecurringPeriod::Daily, 3, date(2025, 2, 3))]
    #[case(RecurringPeriod::Quarterly, 1, date(2025, 4, 30))]
    #[case(RecurringPeriod::Semiannually, 1, date(2025, 7, 31))]
    #[case(RecurringPeriod::Annually, 2, date(2027, 1, 31))]
    fn longer_periods_advance_from_month_end(
        #[case] period: RecurringPeriod,
        #[case] offset: u32,
        #[case] expected: NaiveDate,
    ) {
        let start = date(2025, 1, 31);
        assert_eq!(period.advance(start, offset), Some(expected));
    }

    #[test]
    fn month_end_clamps_to_shorter_months() {
        let start = date(2025, 1, 31);
        assert_eq!(
            RecurringPeriod::Monthly.advance(start, 1),
            Some(date(2025, 2, 28))
        );
    }

    #[test]
    fn unknown_period_is_rejected() {
        assert!("fortnightly".parse::<RecurringPeriod>().is_err());
        assert_eq!(
            "biweekly".parse::<RecurringPeriod>().unwrap(),
            RecurringPeriod::Biweekly
        );
    }
}
