use crate::{
    db::DbPool,
    entities::inventory_item::{
        self, ActiveModel as ItemActiveModel, Entity as ItemEntity, Model as ItemModel,
    },
    errors::ServiceError,
};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, instrument, warn};
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, utoipa::ToSchema)]
pub struct CreateInventoryItemRequest {
    #[validate(length(min = 1, message = "Part number is required"))]
    pub part_number: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    #[serde(default)]
    pub quantity_in_stock: i32,
    #[serde(default)]
    pub minimum_stock: i32,
    pub unit_cost: Option<Decimal>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateInventoryItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category_id: Option<i32>,
    pub quantity_in_stock: Option<i32>,
    pub minimum_stock: Option<i32>,
    pub unit_cost: Option<Decimal>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub barcode: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InventoryListResponse {
    pub items: Vec<ItemModel>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
}

/// Service for managing the spare-parts inventory.
#[derive(Clone)]
pub struct InventoryService {
    db_pool: Arc<DbPool>,
}

impl InventoryService {
    pub fn new(db_pool: Arc<DbPool>) -> Self {
        Self { db_pool }
    }

    #[instrument(skip(self, request), fields(part_number = %request.part_number))]
    pub async fn create_item(
        &self,
        request: CreateInventoryItemRequest,
    ) -> Result<ItemModel, ServiceError> {
        request.validate()?;
        let db = &*self.db_pool;

        let active = ItemActiveModel {
            part_number: Set(request.part_number),
            name: Set(request.name),
            description: Set(request.description),
            category_id: Set(request.category_id),
            quantity_in_stock: Set(request.quantity_in_stock),
            minimum_stock: Set(request.minimum_stock),
            unit_cost: Set(request.unit_cost),
            location: Set(request.location),
            supplier: Set(request.supplier),
            barcode: Set(request.barcode),
            created_at: Set(Utc::now()),
            ..Default::default()
        };

        let model = active
            .insert(db)
            .await
            .map_err(|e| ServiceError::from_insert_error(e, "part number"))?;
        info!(item_id = model.id, "Inventory item created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> Result<Option<ItemModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = ItemEntity::find_by_id(id).one(db).await?;
        Ok(model)
    }

    /// Looks an item up by its barcode, for scanner-driven clients.
    #[instrument(skip(self))]
    pub async fn get_item_by_barcode(&self, code: &str) -> Result<Option<ItemModel>, ServiceError> {
        let db = &*self.db_pool;
        let model = ItemEntity::find()
            .filter(inventory_item::Column::Barcode.eq(code))
            .one(db)
            .await?;
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list_items(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<InventoryListResponse, ServiceError> {
        let db = &*self.db_pool;

        let paginator = ItemEntity::find()
            .order_by_asc(inventory_item::Column::Id)
            .paginate(db, per_page);

        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page.saturating_sub(1)).await?;

        Ok(InventoryListResponse {
            items,
            total,
            page,
            per_page,
        })
    }

    #[instrument(skip(self, request))]
    pub async fn update_item(
        &self,
        id: i32,
        request: UpdateInventoryItemRequest,
    ) -> Result<ItemModel, ServiceError> {
        let db = &*self.db_pool;

        let model = ItemEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| ServiceError::not_found("inventory_item", id))?;

        let mut active: ItemActiveModel = model.into();

        if let Some(name) = request.name {
            active.name = Set(name);
        }
        if let Some(description) = request.description {
            active.description = Set(Some(description));
        }
        if let Some(category_id) = request.category_id {
            active.category_id = Set(Some(category_id));
        }
        if let Some(quantity) = request.quantity_in_stock {
            active.quantity_in_stock = Set(quantity);
        }
        if let Some(minimum) = request.minimum_stock {
            active.minimum_stock = Set(minimum);
        }
        if let Some(unit_cost) = request.unit_cost {
            active.unit_cost = Set(Some(unit_cost));
        }
        if let Some(location) = request.location {
            active.location = Set(Some(location));
        }
        if let Some(supplier) = request.supplier {
            active.supplier = Set(Some(supplier));
        }
        if let Some(barcode) = request.barcode {
            active.barcode = Set(Some(barcode));
        }

        let updated = active.update(db).await?;

        if updated.quantity_in_stock < updated.minimum_stock {
            warn!(
                item_id = updated.id,
                part_number = %updated.part_number,
                quantity = updated.quantity_in_stock,
                minimum = updated.minimum_stock,
                "Inventory item below minimum stock"
            );
        }

        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> Result<(), ServiceError> {
        let db = &*self.db_pool;
        let result = ItemEntity::delete_by_id(id).exec(db).await?;
        if result.rows_affected == 0 {
            return Err(ServiceError::not_found("inventory_item", id));
        }
        info!(item_id = id, "Inventory item deleted");
        Ok(())
    }
}
