use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::{
    errors::ServiceError,
    services::work_requests::{
        ConvertOverrides, CreateWorkRequestRequest, UpdateWorkRequestRequest,
    },
    AppState, ListQuery,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_work_requests).post(create_work_request))
        .route(
            "/:id",
            get(get_work_request)
                .put(update_work_request)
                .delete(delete_work_request),
        )
        .route("/:id/details", get(get_work_request_details))
        .route("/:id/convert", post(convert_work_request))
}

/// List work requests
#[utoipa::path(
    get,
    path = "/api/v1/work-requests",
    responses((status = 200, description = "List work requests")),
    tag = "work-requests"
)]
pub async fn list_work_requests(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let response = state
        .services
        .work_requests
        .list_work_requests(query.page, query.limit)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Submit a new work request
#[utoipa::path(
    post,
    path = "/api/v1/work-requests",
    request_body = CreateWorkRequestRequest,
    responses(
        (status = 201, description = "Work request created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn create_work_request(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkRequestRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .work_requests
        .create_work_request(payload)
        .await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Get a work request by id
#[utoipa::path(
    get,
    path = "/api/v1/work-requests/{id}",
    params(("id" = i32, Path, description = "Work request id")),
    responses(
        (status = 200, description = "Work request"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn get_work_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .work_requests
        .get_work_request(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("work_request", id))?;
    Ok((StatusCode::OK, Json(model)))
}

/// Get a work request with its referenced records nested
#[utoipa::path(
    get,
    path = "/api/v1/work-requests/{id}/details",
    params(("id" = i32, Path, description = "Work request id")),
    responses(
        (status = 200, description = "Work request details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn get_work_request_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.details.work_request_details(id).await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Update a work request
#[utoipa::path(
    put,
    path = "/api/v1/work-requests/{id}",
    params(("id" = i32, Path, description = "Work request id")),
    request_body = UpdateWorkRequestRequest,
    responses(
        (status = 200, description = "Work request updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn update_work_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWorkRequestRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .work_requests
        .update_work_request(id, payload)
        .await?;
    Ok((StatusCode::OK, Json(model)))
}

/// Delete a work request
#[utoipa::path(
    delete,
    path = "/api/v1/work-requests/{id}",
    params(("id" = i32, Path, description = "Work request id")),
    responses(
        (status = 204, description = "Work request deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn delete_work_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.work_requests.delete_work_request(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Convert a work request into a work order
///
/// The body may carry partial work-order fields that override the defaults
/// copied from the request.
#[utoipa::path(
    post,
    path = "/api/v1/work-requests/{id}/convert",
    params(("id" = i32, Path, description = "Work request id")),
    request_body = ConvertOverrides,
    responses(
        (status = 201, description = "Work order created from request"),
        (status = 404, description = "Request not found", body = crate::errors::ErrorResponse),
        (status = 409, description = "Duplicate work order number", body = crate::errors::ErrorResponse)
    ),
    tag = "work-requests"
)]
pub async fn convert_work_request(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    payload: Option<Json<ConvertOverrides>>,
) -> Result<impl IntoResponse, ServiceError> {
    let overrides = payload.map(|Json(o)| o).unwrap_or_default();
    let work_order = state.services.work_requests.convert(id, overrides).await?;
    Ok((StatusCode::CREATED, Json(work_order)))
}
