pub mod assets;
pub mod health;
pub mod inventory;
pub mod preventive_maintenance;
pub mod work_orders;
pub mod work_requests;

use crate::db::DbPool;
use crate::events::EventSender;
use std::sync::Arc;

/// Services layer that encapsulates business logic used by HTTP handlers
#[derive(Clone)]
pub struct AppServices {
    pub assets: Arc<crate::services::assets::AssetService>,
    pub inventory: Arc<crate::services::inventory::InventoryService>,
    pub work_orders: Arc<crate::services::work_orders::WorkOrderService>,
    pub work_requests: Arc<crate::services::work_requests::WorkRequestService>,
    pub preventive_maintenance:
        Arc<crate::services::preventive_maintenance::PreventiveMaintenanceService>,
    pub details: Arc<crate::services::details::DetailService>,
}

impl AppServices {
    pub fn new(db_pool: Arc<DbPool>, event_sender: Arc<EventSender>) -> Self {
        let assets = Arc::new(crate::services::assets::AssetService::new(db_pool.clone()));
        let inventory = Arc::new(crate::services::inventory::InventoryService::new(
            db_pool.clone(),
        ));
        let work_orders = Arc::new(crate::services::work_orders::WorkOrderService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
        ));
        let work_requests = Arc::new(crate::services::work_requests::WorkRequestService::new(
            db_pool.clone(),
            Some(event_sender.clone()),
        ));
        let preventive_maintenance = Arc::new(
            crate::services::preventive_maintenance::PreventiveMaintenanceService::new(
                db_pool.clone(),
                Some(event_sender),
            ),
        );
        let details = Arc::new(crate::services::details::DetailService::new(db_pool));

        Self {
            assets,
            inventory,
            work_orders,
            work_requests,
            preventive_maintenance,
            details,
        }
    }
}
