use utoipa::OpenApi;

use crate::handlers;

/// Aggregated OpenAPI document for the versioned API surface.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upkeep API",
        version = "0.1.0",
        description = "Maintenance-management backend: assets, work requests, \
work orders, preventive maintenance schedules, and spare-parts inventory.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers((url = "http://localhost:8080", description = "Local development")),
    tags(
        (name = "work-requests", description = "Work request intake and conversion"),
        (name = "work-orders", description = "Work order lifecycle, labor and parts"),
        (name = "preventive-maintenance", description = "PM schedules, technicians and expansion"),
        (name = "assets", description = "Asset registry"),
        (name = "inventory", description = "Spare-parts inventory"),
        (name = "health", description = "Health checks")
    ),
    paths(
        handlers::health::health_check,
        handlers::work_requests::list_work_requests,
        handlers::work_requests::create_work_request,
        handlers::work_requests::get_work_request,
        handlers::work_requests::get_work_request_details,
        handlers::work_requests::update_work_request,
        handlers::work_requests::delete_work_request,
        handlers::work_requests::convert_work_request,
        handlers::work_orders::list_work_orders,
        handlers::work_orders::create_work_order,
        handlers::work_orders::list_work_order_details,
        handlers::work_orders::get_work_order,
        handlers::work_orders::get_work_order_details,
        handlers::work_orders::update_work_order,
        handlers::work_orders::delete_work_order,
        handlers::work_orders::add_labor,
        handlers::work_orders::add_part,
        handlers::preventive_maintenance::list_schedules,
        handlers::preventive_maintenance::create_schedule,
        handlers::preventive_maintenance::get_schedule,
        handlers::preventive_maintenance::get_schedule_details,
        handlers::preventive_maintenance::update_schedule,
        handlers::preventive_maintenance::delete_schedule,
        handlers::preventive_maintenance::generate_work_orders,
        handlers::preventive_maintenance::assign_technicians,
        handlers::preventive_maintenance::remove_technician,
        handlers::assets::list_assets,
        handlers::assets::create_asset,
        handlers::assets::get_asset,
        handlers::assets::get_asset_details,
        handlers::assets::get_asset_by_barcode,
        handlers::assets::update_asset,
        handlers::assets::delete_asset,
        handlers::inventory::list_items,
        handlers::inventory::create_item,
        handlers::inventory::get_item,
        handlers::inventory::get_item_details,
        handlers::inventory::get_item_by_barcode,
        handlers::inventory::update_item,
        handlers::inventory::delete_item,
    ),
    components(schemas(
        crate::errors::ErrorResponse,
        crate::services::work_requests::CreateWorkRequestRequest,
        crate::services::work_requests::UpdateWorkRequestRequest,
        crate::services::work_requests::ConvertOverrides,
        crate::services::work_orders::CreateWorkOrderRequest,
        crate::services::work_orders::UpdateWorkOrderRequest,
        crate::services::work_orders::AddLaborRequest,
        crate::services::work_orders::AddPartRequest,
        crate::services::preventive_maintenance::CreatePmRequest,
        crate::services::preventive_maintenance::UpdatePmRequest,
        crate::services::assets::CreateAssetRequest,
        crate::services::assets::UpdateAssetRequest,
        crate::services::inventory::CreateInventoryItemRequest,
        crate::services::inventory::UpdateInventoryItemRequest,
    ))
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_the_conversion_and_generation_paths() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;
        assert!(paths.contains_key("/api/v1/work-requests/{id}/convert"));
        assert!(paths.contains_key("/api/v1/preventive-maintenance/{id}/generate"));
        assert!(paths.contains_key("/api/v1/assets/barcode/{code}"));
    }
}
