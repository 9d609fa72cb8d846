//! Upkeep API Library
//!
//! Core functionality for the maintenance-management backend: assets,
//! work requests, work orders, preventive maintenance, and spare-parts
//! inventory.
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![allow(elided_lifetimes_in_paths)]
#![warn(clippy::all, clippy::perf, clippy::dbg_macro)]

pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod events;
pub mod handlers;
pub mod migrator;
pub mod openapi;
pub mod services;

use axum::Router;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub config: config::AppConfig,
    pub event_sender: events::EventSender,
    pub services: handlers::AppServices,
}

impl AppState {
    pub fn new(
        db: Arc<DatabaseConnection>,
        config: config::AppConfig,
        event_sender: events::EventSender,
    ) -> Self {
        let services = handlers::AppServices::new(db.clone(), Arc::new(event_sender.clone()));
        Self {
            db,
            config,
            event_sender,
            services,
        }
    }
}

// Common query parameters for list endpoints
#[derive(Debug, Deserialize, ToSchema)]
pub struct ListQuery {
    #[serde(default = "default_page")]
    pub page: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

fn default_page() -> u64 {
    1
}
fn default_limit() -> u64 {
    20
}

/// All versioned API routes, nested under `/api/v1` by [`app_router`].
pub fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", handlers::assets::router())
        .nest("/inventory", handlers::inventory::router())
        .nest("/work-requests", handlers::work_requests::router())
        .nest("/work-orders", handlers::work_orders::router())
        .nest(
            "/preventive-maintenance",
            handlers::preventive_maintenance::router(),
        )
}

/// Builds the full application router with middleware layers applied.
pub fn app_router(state: AppState) -> Router {
    use tower_http::{
        compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer,
        trace::TraceLayer,
    };

    use utoipa::OpenApi;

    Router::new()
        .nest("/api/v1", api_v1_routes())
        .nest("/health", handlers::health::router())
        .route(
            "/api-docs/openapi.json",
            axum::routing::get(|| async { axum::Json(openapi::ApiDoc::openapi()) }),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(std::time::Duration::from_secs(30)))
        .with_state(state)
}

#[cfg(test)]
mod list_query_tests {
    use super::*;

    #[test]
    fn defaults_fill_missing_fields() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.limit, 20);
    }

    #[test]
    fn explicit_values_win() {
        let query: ListQuery = serde_json::from_str(r#"{"page": 3, "limit": 50}"#).unwrap();
        assert_eq!(query.page, 3);
        assert_eq!(query.limit, 50);
    }
}
