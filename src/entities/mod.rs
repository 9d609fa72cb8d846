pub mod asset;
pub mod asset_type;
pub mod document;
pub mod inventory_category;
pub mod inventory_item;
pub mod notification;
pub mod pm_technician;
pub mod pm_work_order;
pub mod preventive_maintenance;
pub mod user;
pub mod work_order;
pub mod work_order_labor;
pub mod work_order_part;
pub mod work_order_type;
pub mod work_request;
