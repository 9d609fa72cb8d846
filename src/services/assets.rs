use crate::{
    db::DbPool,
    entities::asset::{self, ActiveModel as AssetActiveModel, Entity as AssetEntity, Model as AssetModel},
    errors::ServiceError,
};
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateAssetRequest {
    #[validate(length(min = 1, message = "Asset number is required"))]
    pub asset_number: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub location: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub barcode: Option<String>,
    pub notes: Option<String>,
}

fn default_status() -> String {
    "operational".to_string()
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateAssetRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub type_id: Option<i32>,
    pub location: Option<String>,
    pub status: Option<String>,
    pub purchase_date: Option<NaiveDate>,
    pub purchase_cost: Option<Decimal>,
    pub manufacturer: Option<String>,
    pub model_number: Option<String>,
    pub serial_number: Option<String>,
    pub barcode: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AssetListResponse {
    pub assets: Vec<AssetModel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Service for managing physical assets.
#[derive(Clone)]
pub struct AssetService {
    db_pool: Arc<DbPool>,
}

impl AssetService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request), fields(asset_number = %request.asset_number))]
    pub async fn create_asset(&self, request: CreateAssetRequest) -> Result<AssetModel, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let active = AssetActiveModel {
            asset_number: Set(request.asset_number),
            name: Set(request.name),
            description: Set(request.description),
            type_id: Set(request.type_id),
            location: Set(request.location),
            status: Set(request.status),
            purchase_date: Set(request.purchase_date),
            purchase_cost: Set(request.purchase_cost),
            manufacturer: Set(request.manufacturer),
            model_number: Set(request.model_number),
            serial_number: Set(request.serial_number),
            barcode: Set(request.barcode),
            notes: Set(request.notes),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "asset number"))?;
        info!(asset_id = model.id, "Asset created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn get_asset(&self, id: i32) -> Result<Option<AssetModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = AssetEntity::find_by_id(id).one(db).await?;
        Ok(model)
    }

    /// Looks an asset up by its barcode, for scanner-driven clients.
    #[instrument(skip(self))]
    pub async fn get_asset_by_barcode(&self, code: &str) -> Result<Option<AssetModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = AssetEntity::find()
            .filter(asset::Column::Barcode.eq(code))
            .one(db)
            .await?;
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_assets(&self, page: u64, per_page: u64) -> Result<AssetListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = AssetEntity::find()
            .order_by_asc(asset::Column::Id)
            .paginate(db, per_page);

        let total = paginator.num_items().await?;
        let assets = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(AssetListResponse {
            assets,
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update_asset(&self, id: i32, request: UpdateAssetRequest) -> Result<AssetModel, ServiceError> {
        let db = &*self.db_pool;

        let model = AssetEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("asset", id))?;

        let mut active: AssetActiveModel = model.into();

        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(type_id) = request.type_id {
            active.type_id = Set(Some(type_id));
        }
        if let Some(location) = request.location {
            active.location = Set(Some(location));
        }
        if let Some(status) = request.status {
            active.status = Set(status);
        }
        if let Some(purchase_date) = request.purchase_date {
            active.purchase_date = Set(Some(purchase_date));
        }
        if let Some(purchase_cost) = request.purchase_cost {
            active.purchase_cost = Set(Some(purchase_cost));
        }
        if let Some(manufacturer) = request.manufacturer {
            active.manufacturer = Set(Some(manufacturer));
        }
        if let Some(model_number) = request.model_number {
            active.model_number = Set(Some(model_number));
        }
        if let Some(serial_number) = request.serial_number {
            active.serial_number = Set(Some(serial_number));
        }
        if let Some(barcode) = request.barcode {
            active.barcode = Set(Some(barcode));
        }
        if let Some(notes) = request.notes {
            active.notes = Set(Some(notes));
        }

        let updated = active.update(db).await?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_asset(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = AssetEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("asset", id));
        }
        info!(asset_id = id, "Asset deleted");
        Ok(())
    }
}
