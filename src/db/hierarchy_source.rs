// src/db/hierarchy_source.rs

use async_trait::async_trait;

use crate::{
    common::error::AppError,
    models::warehouse::{Section, Shelf, StorageUnit, WarehouseHierarchy, Zone},
};

/// Origem dos dados da hierarquia do armazém.
///
/// Cada consulta recebe o código do pai e devolve os filhos diretos, na ordem
/// do dataset. Código sem filhos devolve lista vazia, nunca erro; erros são
/// reservados para falhas da própria origem (rede, backend, timeout).
#[async_trait]
pub trait HierarchySource: Send + Sync {
    async fn list_zones(&self) -> Result<Vec<Zone>, AppError>;

    async fn list_sections(&self, zone_code: &str) -> Result<Vec<Section>, AppError>;

    async fn list_shelves(&self, section_code: &str) -> Result<Vec<Shelf>, AppError>;

    async fn list_storage_units(&self, shelf_code: &str) -> Result<Vec<StorageUnit>, AppError>;

    async fn full_hierarchy(&self) -> Result<WarehouseHierarchy, AppError>;
}
