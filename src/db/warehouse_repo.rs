// src/db/warehouse_repo.rs

use async_trait::async_trait;
use std::{collections::HashSet, sync::Arc, time::Duration};

use crate::{
    common::error::AppError,
    db::{hierarchy_source::HierarchySource, seed::seed_hierarchy},
    models::warehouse::{HierarchyRecord, Section, Shelf, StorageUnit, WarehouseHierarchy, Zone},
};

/// Latência simulada padrão de cada consulta.
pub const DEFAULT_LOOKUP_DELAY: Duration = Duration::from_millis(300);

// O repositório do armazém: dataset imutável em memória, compartilhado via Arc.
#[derive(Clone)]
pub struct WarehouseRepository {
    data: Arc<WarehouseHierarchy>,
    latency: Duration,
}

impl WarehouseRepository {
    /// Valida a integridade do dataset antes de aceitá-lo.
    pub fn new(data: WarehouseHierarchy, latency: Duration) -> Result<Self, AppError> {
        validate_hierarchy(&data)?;
        Ok(Self {
            data: Arc::new(data),
            latency,
        })
    }

    pub fn seeded(latency: Duration) -> Result<Self, AppError> {
        Self::new(seed_hierarchy(), latency)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    // Simula a latência de rede antes de responder
    async fn respond<T>(&self, value: T) -> Result<T, AppError> {
        tokio::time::sleep(self.latency).await;
        Ok(value)
    }
}

#[async_trait]
impl HierarchySource for WarehouseRepository {
    async fn list_zones(&self) -> Result<Vec<Zone>, AppError> {
        tracing::debug!("Listando zonas");
        self.respond(self.data.zones.clone()).await
    }

    async fn list_sections(&self, zone_code: &str) -> Result<Vec<Section>, AppError> {
        tracing::debug!(zone_code, "Listando seções");
        let sections = children_of(&self.data.sections, zone_code);
        self.respond(sections).await
    }

    async fn list_shelves(&self, section_code: &str) -> Result<Vec<Shelf>, AppError> {
        tracing::debug!(section_code, "Listando prateleiras");
        let shelves = children_of(&self.data.shelves, section_code);
        self.respond(shelves).await
    }

    async fn list_storage_units(&self, shelf_code: &str) -> Result<Vec<StorageUnit>, AppError> {
        tracing::debug!(shelf_code, "Listando unidades de armazenamento");
        let units = children_of(&self.data.storage_units, shelf_code);
        self.respond(units).await
    }

    async fn full_hierarchy(&self) -> Result<WarehouseHierarchy, AppError> {
        self.respond(self.data.as_ref().clone()).await
    }
}

fn children_of<T: HierarchyRecord + Clone>(records: &[T], parent_code: &str) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.parent_code() == Some(parent_code))
        .cloned()
        .collect()
}

// ---
// Integridade: códigos únicos por nível e cadeia de pais existente
// ---
fn unique_codes<'a, T: HierarchyRecord>(records: &'a [T]) -> Result<HashSet<&'a str>, AppError> {
    let mut codes = HashSet::with_capacity(records.len());
    for record in records {
        if !codes.insert(record.code()) {
            return Err(AppError::IntegrityViolation(format!(
                "{} '{}' duplicado",
                T::LEVEL,
                record.code()
            )));
        }
    }
    Ok(codes)
}

fn missing_parent(level: &str, code: &str, parent: &str) -> AppError {
    AppError::IntegrityViolation(format!("{level} '{code}' referencia pai inexistente '{parent}'"))
}

fn broken_chain(level: &str, code: &str, parent: &str) -> AppError {
    AppError::IntegrityViolation(format!("{level} '{code}' tem cadeia de pais divergente de '{parent}'"))
}

pub fn validate_hierarchy(data: &WarehouseHierarchy) -> Result<(), AppError> {
    let zones = unique_codes(&data.zones)?;
    let sections = unique_codes(&data.sections)?;
    let shelves = unique_codes(&data.shelves)?;
    unique_codes(&data.storage_units)?;

    for s in &data.sections {
        if !zones.contains(s.zone_code.as_str()) {
            return Err(missing_parent("Section", &s.section_code, &s.zone_code));
        }
    }

    // A cadeia de pais de cada registro precisa bater com a do pai imediato
    for shelf in &data.shelves {
        if !sections.contains(shelf.section_code.as_str()) {
            return Err(missing_parent("Shelf", &shelf.shelf_code, &shelf.section_code));
        }
        let chain_ok = data
            .sections
            .iter()
            .any(|s| s.section_code == shelf.section_code && s.zone_code == shelf.zone_code);
        if !chain_ok {
            return Err(broken_chain("Shelf", &shelf.shelf_code, &shelf.section_code));
        }
    }

    for unit in &data.storage_units {
        if !shelves.contains(unit.shelf_code.as_str()) {
            return Err(missing_parent("Storage Unit", &unit.storage_unit_code, &unit.shelf_code));
        }
        let chain_ok = data.shelves.iter().any(|s| {
            s.shelf_code == unit.shelf_code
                && s.section_code == unit.section_code
                && s.zone_code == unit.zone_code
        });
        if !chain_ok {
            return Err(broken_chain("Storage Unit", &unit.storage_unit_code, &unit.shelf_code));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo() -> WarehouseRepository {
        WarehouseRepository::seeded(Duration::ZERO).unwrap()
    }

    #[tokio::test]
    async fn sections_belong_to_the_requested_zone() {
        let repo = repo();
        let zones = repo.list_zones().await.unwrap();
        assert_eq!(zones.len(), 5);

        for zone in &zones {
            let sections = repo.list_sections(&zone.zone_code).await.unwrap();
            assert!(!sections.is_empty());
            assert!(sections.iter().all(|s| s.zone_code == zone.zone_code));
        }
    }

    #[tokio::test]
    async fn unknown_parent_codes_yield_empty_lists() {
        let repo = repo();
        assert!(repo.list_sections("Z").await.unwrap().is_empty());
        // D01 existe, mas não tem prateleiras
        assert!(repo.list_shelves("D01").await.unwrap().is_empty());
        assert!(repo.list_storage_units("A01-S02").await.unwrap().is_empty());
        assert!(repo.list_storage_units("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_units_of_aisle_a() {
        let repo = repo();
        let codes: Vec<String> = repo
            .list_storage_units("B01-S01")
            .await
            .unwrap()
            .into_iter()
            .map(|u| u.storage_unit_code)
            .collect();
        assert_eq!(codes, vec!["B01-S01-U01", "B01-S01-U02", "B01-S01-U03"]);
    }

    #[tokio::test(start_paused = true)]
    async fn every_lookup_waits_for_the_simulated_latency() {
        let repo = WarehouseRepository::seeded(DEFAULT_LOOKUP_DELAY).unwrap();
        let started = tokio::time::Instant::now();
        repo.list_shelves("B01").await.unwrap();
        assert!(started.elapsed() >= DEFAULT_LOOKUP_DELAY);
    }

    #[tokio::test]
    async fn full_hierarchy_returns_the_whole_dataset() {
        let all = repo().full_hierarchy().await.unwrap();
        assert_eq!(all, seed_hierarchy());
        assert_eq!(all.storage_units.len(), 10);
    }

    #[test]
    fn seed_dataset_is_consistent() {
        assert!(validate_hierarchy(&seed_hierarchy()).is_ok());
    }

    #[test]
    fn rejects_orphan_sections() {
        let mut data = seed_hierarchy();
        data.sections[0].zone_code = "Q".into();
        let err = WarehouseRepository::new(data, Duration::ZERO).err().unwrap();
        assert!(matches!(err, AppError::IntegrityViolation(_)));
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut data = seed_hierarchy();
        let dup = data.zones[0].clone();
        data.zones.push(dup);
        assert!(matches!(validate_hierarchy(&data), Err(AppError::IntegrityViolation(_))));
    }

    #[test]
    fn rejects_units_with_a_broken_ancestor_chain() {
        let mut data = seed_hierarchy();
        data.storage_units[3].zone_code = "A".into();
        assert!(matches!(validate_hierarchy(&data), Err(AppError::IntegrityViolation(_))));
    }
}
