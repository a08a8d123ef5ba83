// src/handlers/warehouse.rs

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    common::error::AppError,
    config::AppState,
    // Importamos os models para referenciar no Swagger
    models::warehouse::{Section, Shelf, StorageUnitView, WarehouseHierarchy, Zone},
};

// GET /api/warehouse/zones
#[utoipa::path(
    get,
    path = "/api/warehouse/zones",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Todas as zonas do armazém", body = Vec<Zone>),
        (status = 502, description = "Falha na origem dos dados"),
        (status = 504, description = "Origem dos dados não respondeu a tempo")
    )
)]
pub async fn list_zones(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<Zone>>, AppError> {
    let zones = app_state.warehouse_service.list_zones().await?;
    Ok(Json(zones))
}

// GET /api/warehouse/zones/{zone_code}/sections
#[utoipa::path(
    get,
    path = "/api/warehouse/zones/{zone_code}/sections",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Seções da zona (vazio se o código não existir)", body = Vec<Section>)
    ),
    params(
        ("zone_code" = String, Path, description = "Código da Zona", example = "B")
    )
)]
pub async fn list_sections(
    State(app_state): State<AppState>,
    Path(zone_code): Path<String>,
) -> Result<Json<Vec<Section>>, AppError> {
    let sections = app_state.warehouse_service.list_sections(&zone_code).await?;
    Ok(Json(sections))
}

// GET /api/warehouse/sections/{section_code}/shelves
#[utoipa::path(
    get,
    path = "/api/warehouse/sections/{section_code}/shelves",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Prateleiras da seção", body = Vec<Shelf>)
    ),
    params(
        ("section_code" = String, Path, description = "Código da Seção", example = "B01")
    )
)]
pub async fn list_shelves(
    State(app_state): State<AppState>,
    Path(section_code): Path<String>,
) -> Result<Json<Vec<Shelf>>, AppError> {
    let shelves = app_state.warehouse_service.list_shelves(&section_code).await?;
    Ok(Json(shelves))
}

// GET /api/warehouse/shelves/{shelf_code}/storage-units
#[utoipa::path(
    get,
    path = "/api/warehouse/shelves/{shelf_code}/storage-units",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Unidades da prateleira, com taxa de ocupação", body = Vec<StorageUnitView>)
    ),
    params(
        ("shelf_code" = String, Path, description = "Código da Prateleira", example = "B01-S01")
    )
)]
pub async fn list_storage_units(
    State(app_state): State<AppState>,
    Path(shelf_code): Path<String>,
) -> Result<Json<Vec<StorageUnitView>>, AppError> {
    let units = app_state.warehouse_service.list_storage_units(&shelf_code).await?;
    Ok(Json(units))
}

// GET /api/warehouse/hierarchy
#[utoipa::path(
    get,
    path = "/api/warehouse/hierarchy",
    tag = "Warehouse",
    responses(
        (status = 200, description = "Hierarquia completa", body = WarehouseHierarchy)
    )
)]
pub async fn get_hierarchy(
    State(app_state): State<AppState>,
) -> Result<Json<WarehouseHierarchy>, AppError> {
    let hierarchy = app_state.warehouse_service.full_hierarchy().await?;
    Ok(Json(hierarchy))
}
