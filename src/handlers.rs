// src/handlers.rs

use axum::{routing::get, Router};

use crate::config::AppState;

pub mod warehouse;

// Rotas da API (somente leitura)
pub fn router(app_state: AppState) -> Router {
    let warehouse_routes = Router::new()
        .route("/zones", get(warehouse::list_zones))
        .route("/zones/{zone_code}/sections", get(warehouse::list_sections))
        .route("/sections/{section_code}/shelves", get(warehouse::list_shelves))
        .route("/shelves/{shelf_code}/storage-units", get(warehouse::list_storage_units))
        .route("/hierarchy", get(warehouse::get_hierarchy));

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/warehouse", warehouse_routes)
        .with_state(app_state)
}
