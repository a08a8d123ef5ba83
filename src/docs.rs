// src/docs.rs

use utoipa::OpenApi;
use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- WAREHOUSE ---
        handlers::warehouse::list_zones,
        handlers::warehouse::list_sections,
        handlers::warehouse::list_shelves,
        handlers::warehouse::list_storage_units,
        handlers::warehouse::get_hierarchy,
    ),
    components(
        schemas(
            models::warehouse::HierarchyLevel,
            models::warehouse::Zone,
            models::warehouse::Section,
            models::warehouse::Shelf,
            models::warehouse::StorageUnit,
            models::warehouse::StorageUnitView,
            models::warehouse::OccupancyClass,
            models::warehouse::WarehouseHierarchy,
            models::warehouse::LocationSelection,
        )
    ),
    tags(
        (name = "Warehouse", description = "Navegação da hierarquia do armazém (Zona → Seção → Prateleira → Unidade)")
    )
)]
pub struct ApiDoc;
