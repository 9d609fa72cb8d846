use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    errors::ServiceError,
    services::work_orders::{
        AddLaborRequest, AddPartRequest, CreateWorkOrderRequest, UpdateWorkOrderRequest,
    },
    AppState, ListQuery,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_work_orders).post(create_work_order))
        .route("/details", get(list_work_order_details))
        .route(
            "/:id",
            get(get_work_order)
                .put(update_work_order)
                .delete(delete_work_order),
        )
        .route("/:id/details", get(get_work_order_details))
        .route("/:id/labor", get(list_labor).post(add_labor))
        .route("/:id/parts", get(list_parts).post(add_part))
}

/// List work orders
#[utoipa::path(
    get,
    path = "/api/v1/work-orders",
    responses((status = 200, description = "List work orders")),
    tag = "work-orders"
)]
pub async fn list_work_orders(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let response = state
        .services
        .work_orders
        .list_work_orders(query.page, query.limit)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Create a work order directly
#[utoipa::path(
    post,
    path = "/api/v1/work-orders",
    request_body = CreateWorkOrderRequest,
    responses(
        (status = 201, description = "Work order created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn create_work_order(
    State(state): State<AppState>,
    Json(payload): Json<CreateWorkOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state.services.work_orders.create_work_order(payload).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Get a work order by id
#[utoipa::path(
    get,
    path = "/api/v1/work-orders/{id}",
    params(("id" = i32, Path, description = "Work order id")),
    responses(
        (status = 200, description = "Work order"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn get_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .work_orders
        .get_work_order(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("work_order", id))?;
    Ok((StatusCode::OK, Json(model)))
}

/// List every work order with its referenced records nested
#[utoipa::path(
    get,
    path = "/api/v1/work-orders/details",
    responses((status = 200, description = "Work order details list")),
    tag = "work-orders"
)]
pub async fn list_work_order_details(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.details.list_work_order_details().await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Get a work order with its referenced records nested
#[utoipa::path(
    get,
    path = "/api/v1/work-orders/{id}/details",
    params(("id" = i32, Path, description = "Work order id")),
    responses(
        (status = 200, description = "Work order details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn get_work_order_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.details.work_order_details(id).await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Update a work order
#[utoipa::path(
    put,
    path = "/api/v1/work-orders/{id}",
    params(("id" = i32, Path, description = "Work order id")),
    request_body = UpdateWorkOrderRequest,
    responses(
        (status = 200, description = "Work order updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn update_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateWorkOrderRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .work_orders
        .update_work_order(id, payload)
        .await?;
    Ok((StatusCode::OK, Json(model)))
}

/// Delete a work order
#[utoipa::path(
    delete,
    path = "/api/v1/work-orders/{id}",
    params(("id" = i32, Path, description = "Work order id")),
    responses(
        (status = 204, description = "Work order deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn delete_work_order(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.work_orders.delete_work_order(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List labor entries for a work order
pub async fn list_labor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state.services.work_orders.list_labor(id).await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// Record a labor entry against a work order
#[utoipa::path(
    post,
    path = "/api/v1/work-orders/{id}/labor",
    params(("id" = i32, Path, description = "Work order id")),
    request_body = AddLaborRequest,
    responses(
        (status = 201, description = "Labor entry recorded"),
        (status = 404, description = "Work order not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn add_labor(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddLaborRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.work_orders.add_labor(id, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}

/// List part-usage entries for a work order
pub async fn list_parts(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let rows = state.services.work_orders.list_parts(id).await?;
    Ok((StatusCode::OK, Json(rows)))
}

/// Record spare-part usage against a work order
#[utoipa::path(
    post,
    path = "/api/v1/work-orders/{id}/parts",
    params(("id" = i32, Path, description = "Work order id")),
    request_body = AddPartRequest,
    responses(
        (status = 201, description = "Part usage recorded"),
        (status = 404, description = "Work order not found", body = crate::errors::ErrorResponse)
    ),
    tag = "work-orders"
)]
pub async fn add_part(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<AddPartRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let row = state.services.work_orders.add_part(id, payload).await?;
    Ok((StatusCode::CREATED, Json(row)))
}
