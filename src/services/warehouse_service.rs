// src/services/warehouse_service.rs

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::HierarchySource,
    models::warehouse::{Section, Shelf, StorageUnitView, WarehouseHierarchy, Zone},
    services::stepper::SelectionStepper,
};

// Fachada somente leitura sobre a origem da hierarquia.
#[derive(Clone)]
pub struct WarehouseService {
    source: Arc<dyn HierarchySource>,
}

impl WarehouseService {
    pub fn new(source: Arc<dyn HierarchySource>) -> Self {
        Self { source }
    }

    /// Um stepper novo (uma sessão de navegação) sobre a mesma origem.
    pub fn stepper(&self) -> SelectionStepper {
        SelectionStepper::new(Arc::clone(&self.source))
    }

    pub async fn list_zones(&self) -> Result<Vec<Zone>, AppError> {
        self.source.list_zones().await
    }

    pub async fn list_sections(&self, zone_code: &str) -> Result<Vec<Section>, AppError> {
        self.source.list_sections(zone_code).await
    }

    pub async fn list_shelves(&self, section_code: &str) -> Result<Vec<Shelf>, AppError> {
        self.source.list_shelves(section_code).await
    }

    // As unidades já saem com a taxa e a classe de ocupação calculadas
    pub async fn list_storage_units(&self, shelf_code: &str) -> Result<Vec<StorageUnitView>, AppError> {
        let units = self.source.list_storage_units(shelf_code).await?;
        Ok(units.into_iter().map(StorageUnitView::from).collect())
    }

    pub async fn full_hierarchy(&self) -> Result<WarehouseHierarchy, AppError> {
        self.source.full_hierarchy().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::WarehouseRepository, models::warehouse::OccupancyClass};
    use std::time::Duration;

    fn service() -> WarehouseService {
        WarehouseService::new(Arc::new(WarehouseRepository::seeded(Duration::ZERO).unwrap()))
    }

    #[tokio::test]
    async fn storage_units_carry_occupancy() {
        let units = service().list_storage_units("B01-S01").await.unwrap();

        let rates: Vec<&str> = units.iter().map(|u| u.occupancy_rate.as_str()).collect();
        assert_eq!(rates, ["75.0%", "87.5%", "50.0%"]);
        assert_eq!(units[2].occupancy_class, Some(OccupancyClass::Low));
    }

    #[tokio::test]
    async fn each_stepper_is_an_independent_session() {
        let service = service();
        let mut first = service.stepper();
        let second = service.stepper();

        first.start().await.unwrap();
        assert_eq!(first.zones().items().len(), 5);
        assert!(second.zones().items().is_empty());
    }
}
