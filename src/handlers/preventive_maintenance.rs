use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    errors::ServiceError,
    services::preventive_maintenance::{CreatePmRequest, UpdatePmRequest},
    AppState, ListQuery,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_schedules).post(create_schedule))
        .route(
            "/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
        .route("/:id/details", get(get_schedule_details))
        .route("/:id/generate", post(generate_work_orders))
        .route("/:id/technicians", get(list_technicians).post(assign_technicians))
        .route("/:id/technicians/:technician_id", delete(remove_technician))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GenerateQuery {
    /// Re-expand even if the schedule already has generated work orders
    #[serde(default)]
    pub force: bool,
}

/// List PM schedules
#[utoipa::path(
    get,
    path = "/api/v1/preventive-maintenance",
    responses((status = 200, description = "List preventive maintenance schedules")),
    tag = "preventive-maintenance"
)]
pub async fn list_schedules(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let response = state
        .services
        .preventive_maintenance
        .list_schedules(query.page, query.limit)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Create a PM schedule
#[utoipa::path(
    post,
    path = "/api/v1/preventive-maintenance",
    request_body = CreatePmRequest,
    responses(
        (status = 201, description = "Schedule created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn create_schedule(
    State(state): State<AppState>,
    Json(payload): Json<CreatePmRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .preventive_maintenance
        .create_schedule(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Get a PM schedule by id
#[utoipa::path(
    get,
    path = "/api/v1/preventive-maintenance/{id}",
    params(("id" = i32, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .preventive_maintenance
        .get_schedule(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("preventive_maintenance", id))?;
    Ok((StatusCode::OK, Json(model)))
}

/// Get a PM schedule with technicians and generated work orders nested
#[utoipa::path(
    get,
    path = "/api/v1/preventive-maintenance/{id}/details",
    params(("id" = i32, Path, description = "Schedule id")),
    responses(
        (status = 200, description = "Schedule details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn get_schedule_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state
        .services
        .details
        .preventive_maintenance_details(id)
        .await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Update a PM schedule
#[utoipa::path(
    put,
    path = "/api/v1/preventive-maintenance/{id}",
    params(("id" = i32, Path, description = "Schedule id")),
    request_body = UpdatePmRequest,
    responses(
        (status = 200, description = "Schedule updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePmRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .preventive_maintenance
        .update_schedule(id, payload)
        .await?;
    Ok((StatusCode::OK, Json(model)))
}

/// Delete a PM schedule
#[utoipa::path(
    delete,
    path = "/api/v1/preventive-maintenance/{id}",
    params(("id" = i32, Path, description = "Schedule id")),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .preventive_maintenance
        .delete_schedule(id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Expand a PM schedule into concrete work orders
#[utoipa::path(
    post,
    path = "/api/v1/preventive-maintenance/{id}/generate",
    params(
        ("id" = i32, Path, description = "Schedule id"),
        GenerateQuery
    ),
    responses(
        (status = 201, description = "Generated occurrence links"),
        (status = 404, description = "Schedule not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Schedule already expanded", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn generate_work_orders(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<GenerateQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let links = state
        .services
        .preventive_maintenance
        .generate_work_orders(id, query.force)
        .await?;
    Ok((StatusCode::CREATED, Json(links)))
}

/// List technician assignments for a PM schedule
pub async fn list_technicians(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state
        .services
        .preventive_maintenance
        .list_technicians(id)
        .await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// Replace the technician assignment set for a PM schedule
///
/// The body is an array of user ids; the first becomes the primary
/// technician auto-assigned to generated work orders.
#[utoipa::path(
    post,
    path = "/api/v1/preventive-maintenance/{id}/technicians",
    params(("id" = i32, Path, description = "Schedule id")),
    request_body = Vec<i32>,
    responses(
        (status = 200, description = "Assignment rows"),
        (status = 404, description = "Schedule not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn assign_technicians(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(technician_ids): Json<Vec<i32>>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state
        .services
        .preventive_maintenance
        .assign_technicians(id, technician_ids)
        .await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// Remove one technician from a PM schedule
#[utoipa::path(
    delete,
    path = "/api/v1/preventive-maintenance/{id}/technicians/{technician_id}",
    params(
        ("id" = i32, Path, description = "Schedule id"),
        ("technician_id" = i32, Path, description = "Technician user id")
    ),
    responses(
        (status = 204, description = "Technician removed"),
        (status = 404, description = "Assignment not found", body = crate::errors::ErrorResponse)
    ),
    tag = "preventive-maintenance"
)]
pub async fn remove_technician(
    State(state): State<AppState>,
    Path((id, technician_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, ServiceError> {
    state
        .services
        .preventive_maintenance
        .remove_technician(id, technician_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
