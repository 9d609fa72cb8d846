use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};

use crate::{
    errors::ServiceError,
    services::assets::{CreateAssetRequest, UpdateAssetRequest},
    AppState, ListQuery,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_assets).post(create_asset))
        .route("/:id", get(get_asset).put(update_asset).delete(delete_asset))
        .route("/:id/details", get(get_asset_details))
        .route("/barcode/:code", get(get_asset_by_barcode))
}

/// List assets
#[utoipa::path(
    get,
    path = "/api/v1/assets",
    responses((status = 200, description = "List assets")),
    tag = "assets"
)]
pub async fn list_assets(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse, ServiceError> {
    let response = state
        .services
        .assets
        .list_assets(query.page, query.limit)
        .await?;
    Ok((StatusCode::OK, Json(response)))
}

/// Register a new asset
#[utoipa::path(
    post,
    path = "/api/v1/assets",
    request_body = CreateAssetRequest,
    responses(
        (status = 201, description = "Asset created"),
        (status = 400, description = "Invalid request", body = crate::errors::ErrorResponse),
        (status = 409, description = "Duplicate asset number", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn create_asset(
    State(state): State<AppState>,
    Json(payload): Json<CreateAssetRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state.services.assets.create_asset(payload).await?;
    Ok((StatusCode::CREATED, Json(model)))
}

/// Get an asset by id
#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .assets
        .get_asset(id)
        .await?
        .ok_or_else(|| ServiceError::not_found("asset", id))?;
    Ok((StatusCode::OK, Json(model)))
}

/// Get an asset with its type and open work nested
#[utoipa::path(
    get,
    path = "/api/v1/assets/{id}/details",
    params(("id" = i32, Path, description = "Asset id")),
    responses(
        (status = 200, description = "Asset details"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn get_asset_details(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    let details = state.services.details.asset_details(id).await?;
    Ok((StatusCode::OK, Json(details)))
}

/// Look an asset up by barcode
#[utoipa::path(
    get,
    path = "/api/v1/assets/barcode/{code}",
    params(("code" = String, Path, description = "Barcode value")),
    responses(
        (status = 200, description = "Asset"),
        (status = 404, description = "No asset with that barcode", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn get_asset_by_barcode(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state
        .services
        .assets
        .get_asset_by_barcode(&code)
        .await?
        .ok_or_else(|| ServiceError::NotFoundByBarcode {
            entity: "asset",
            code: code.clone(),
        })?;
    Ok((StatusCode::OK, Json(model)))
}

/// Update an asset
#[utoipa::path(
    put,
    path = "/api/v1/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    request_body = UpdateAssetRequest,
    responses(
        (status = 200, description = "Asset updated"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn update_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAssetRequest>,
) -> Result<impl IntoResponse, ServiceError> {
    let model = state.services.assets.update_asset(id, payload).await?;
    Ok((StatusCode::OK, Json(model)))
}

/// Delete an asset
#[utoipa::path(
    delete,
    path = "/api/v1/assets/{id}",
    params(("id" = i32, Path, description = "Asset id")),
    responses(
        (status = 204, description = "Asset deleted"),
        (status = 404, description = "Not found", body = crate::errors::ErrorResponse)
    ),
    tag = "assets"
)]
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, ServiceError> {
    state.services.assets.delete_asset(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
