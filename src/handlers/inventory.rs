use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    errors::ServiceError,
    services::inventory::{CreateInventoryItemRequest, UpdateInventoryItemRequest},
    AppState, ListQuery,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/:id", get(get_item).put(update_item).delete(delete_item))
        .route("/:id/details", get(get_item_details))
        .route("/barcode/:code", get(get_item_by_barcode))
}

/// List inventory items
#[utoipa::path(
    get,
    path = "/api/v1/inventory",
    responses((status = 200, description = "List inventory items")),
    tag = "inventory"
)]
pub async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let response = state
        .services
        .inventory
        .list_items(query.page, query.limit)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Add a spare part to the inventory
#[utoipa::path(
    post,
    path = "/api/v1/inventory",
    request_body = CreateInventoryItemRequest,
    responses(
        (status = 201, description = "Item created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 409, description = "Duplicate part number", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn create_item(
    State(state): State<AppState>,
    Json(payload): Json<CreateInventoryItemRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state.services.inventory.create_item(payload).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Get an inventory item by id
#[utoipa::path(
    get,
    path = "/api/v1/inventory/{id}",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Inventory item"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .inventory
        .get_item(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("inventory_item", id))?;
    Ok((StatusCode::OK, Json(model)))
}

/// Get an inventory item with its category and usage history nested
#[utoipa::path(
    get,
    path = "/api/v1/inventory/{id}/details",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 200, description = "Item details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn get_item_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.details.inventory_item_details(id).await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Look an inventory item up by barcode
#[utoipa::path(
    get,
    path = "/api/v1/inventory/barcode/{code}",
    params(("code" = String, Path, description = "Barcode value")),
    responses(
        (status = 200, description = "Inventory item"),
        (status = 404, description = "No item with that barcode", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn get_item_by_barcode(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .inventory
        .get_item_by_barcode(&code)
        .await?
        .ok_or_else(|| ServiceError::NotFoundByBarcode {
            entity: "inventory_item",
            code: code.clone(),
        })?;
    Ok((StatusCode::OK, Json(model)))
}

/// Update an inventory item
#[utoipa::path(
    put,
    path = "/api/v1/inventory/{id}",
    params(("id" = i32, Path, description = "Item id")),
    request_body = UpdateInventoryItemRequest,
    responses(
        (status = 200, description = "Item updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateInventoryItemRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state.services.inventory.update_item(id, payload).await?;
    Ok((StatusCode::OK, Json(model)))
}

/// Delete an inventory item
#[utoipa::path(
    delete,
    path = "/api/v1/inventory/{id}",
    params(("id" = i32, Path, description = "Item id")),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "inventory"
)]
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.inventory.delete_item(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
