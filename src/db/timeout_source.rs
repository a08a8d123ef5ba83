// src/db/timeout_source.rs

use async_trait::async_trait;
use std::{future::Future, time::Duration};

use crate::{
    common::error::AppError,
    db::hierarchy_source::HierarchySource,
    models::warehouse::{HierarchyLevel, Section, Shelf, StorageUnit, WarehouseHierarchy, Zone},
};

/// Decorador que limita o tempo de cada consulta da origem interna.
/// Estourar o prazo vira `AppError::LookupTimeout`.
pub struct TimeoutSource<S> {
    inner: S,
    timeout: Duration,
}

impl<S: HierarchySource> TimeoutSource<S> {
    pub fn new(inner: S, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    async fn guard<T>(
        &self,
        level: HierarchyLevel,
        parent_code: &str,
        lookup: impl Future<Output = Result<T, AppError>>,
    ) -> Result<T, AppError> {
        match tokio::time::timeout(self.timeout, lookup).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(%level, parent_code, timeout = ?self.timeout, "Consulta excedeu o tempo limite");
                Err(AppError::LookupTimeout {
                    level,
                    parent_code: parent_code.to_string(),
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                })
            }
        }
    }
}

#[async_trait]
impl<S: HierarchySource> HierarchySource for TimeoutSource<S> {
    async fn list_zones(&self) -> Result<Vec<Zone>, AppError> {
        self.guard(HierarchyLevel::Zone, "", self.inner.list_zones()).await
    }

    async fn list_sections(&self, zone_code: &str) -> Result<Vec<Section>, AppError> {
        self.guard(HierarchyLevel::Section, zone_code, self.inner.list_sections(zone_code))
            .await
    }

    async fn list_shelves(&self, section_code: &str) -> Result<Vec<Shelf>, AppError> {
        self.guard(HierarchyLevel::Shelf, section_code, self.inner.list_shelves(section_code))
            .await
    }

    async fn list_storage_units(&self, shelf_code: &str) -> Result<Vec<StorageUnit>, AppError> {
        self.guard(
            HierarchyLevel::StorageUnit,
            shelf_code,
            self.inner.list_storage_units(shelf_code),
        )
        .await
    }

    async fn full_hierarchy(&self) -> Result<WarehouseHierarchy, AppError> {
        self.guard(HierarchyLevel::Zone, "", self.inner.full_hierarchy()).await
    }
}
