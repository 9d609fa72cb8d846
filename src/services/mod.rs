// Core services
pub mod assets;
pub mod details;
pub mod inventory;
pub mod preventive_maintenance;
pub mod work_orders;
pub mod work_requests;
