// src/models/warehouse.rs

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

// ---
// 0. Nível da hierarquia
// ---
// Zona -> Seção -> Prateleira -> Unidade de Armazenamento
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HierarchyLevel {
    Zone,
    Section,
    Shelf,
    StorageUnit,
}

impl HierarchyLevel {
    pub const ALL: [HierarchyLevel; 4] = [
        HierarchyLevel::Zone,
        HierarchyLevel::Section,
        HierarchyLevel::Shelf,
        HierarchyLevel::StorageUnit,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            HierarchyLevel::Zone => Some(HierarchyLevel::Section),
            HierarchyLevel::Section => Some(HierarchyLevel::Shelf),
            HierarchyLevel::Shelf => Some(HierarchyLevel::StorageUnit),
            HierarchyLevel::StorageUnit => None,
        }
    }

    pub fn previous(self) -> Option<Self> {
        match self {
            HierarchyLevel::Zone => None,
            HierarchyLevel::Section => Some(HierarchyLevel::Zone),
            HierarchyLevel::Shelf => Some(HierarchyLevel::Section),
            HierarchyLevel::StorageUnit => Some(HierarchyLevel::Shelf),
        }
    }

    /// Rótulo exibido no resumo da seleção ("Zone", "Storage Unit"...).
    pub fn label(self) -> &'static str {
        match self {
            HierarchyLevel::Zone => "Zone",
            HierarchyLevel::Section => "Section",
            HierarchyLevel::Shelf => "Shelf",
            HierarchyLevel::StorageUnit => "Storage Unit",
        }
    }
}

impl fmt::Display for HierarchyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---
// Registro genérico da hierarquia
// ---
// Tudo o que a tela de cada passo precisa: código, nome e o texto pesquisável.
pub trait HierarchyRecord {
    const LEVEL: HierarchyLevel;

    fn code(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> Option<&str>;

    /// Código do pai imediato (None para Zona).
    fn parent_code(&self) -> Option<&str>;

    /// Filtro da tabela: `needle` já vem aparado e em minúsculas.
    fn matches_filter(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.code().to_lowercase().contains(needle)
            || self.name().to_lowercase().contains(needle)
            || self
                .description()
                .is_some_and(|d| d.to_lowercase().contains(needle))
    }
}

// --- 1. Zona ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Zone {
    #[schema(example = "B")]
    pub zone_code: String,
    #[schema(example = "Storage Zone")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Main storage area")]
    pub description: Option<String>,
}

// --- 2. Seção ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[schema(example = "B01")]
    pub section_code: String,
    #[schema(example = "General Storage 1")]
    pub name: String,
    pub zone_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// --- 3. Prateleira ---
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    #[schema(example = "B01-S01")]
    pub shelf_code: String,
    #[schema(example = "Aisle A")]
    pub name: String,
    pub section_code: String,
    pub zone_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// --- 4. Unidade de Armazenamento ---
// A folha da árvore. Capacidade e ocupação são apenas para exibição:
// `current_occupancy <= capacity` é esperado, mas não validado aqui.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnit {
    #[schema(example = "B01-S01-U01")]
    pub storage_unit_code: String,
    #[schema(example = "Bin 1A")]
    pub name: String,
    pub shelf_code: String,
    pub section_code: String,
    pub zone_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 200)]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = 150)]
    pub current_occupancy: Option<u32>,
}

// ---
// Classe de severidade da ocupação
// ---
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyClass {
    Low,
    Medium,
    High,
}

impl OccupancyClass {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= 90.0 {
            OccupancyClass::High
        } else if rate >= 70.0 {
            OccupancyClass::Medium
        } else {
            OccupancyClass::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OccupancyClass::Low => "low",
            OccupancyClass::Medium => "medium",
            OccupancyClass::High => "high",
        }
    }

    /// Nome da classe CSS usada pelo front-end.
    pub fn css_class(self) -> &'static str {
        match self {
            OccupancyClass::Low => "occupancy-low",
            OccupancyClass::Medium => "occupancy-medium",
            OccupancyClass::High => "occupancy-high",
        }
    }
}

impl fmt::Display for OccupancyClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StorageUnit {
    /// Percentual de ocupação.
    ///
    /// Zero conta como "ausente" tanto na capacidade quanto na ocupação,
    /// então uma unidade vazia também fica sem taxa.
    pub fn occupancy_rate(&self) -> Option<f64> {
        let capacity = self.capacity.filter(|c| *c != 0)?;
        let occupancy = self.current_occupancy.filter(|o| *o != 0)?;
        Some(f64::from(occupancy) / f64::from(capacity) * 100.0)
    }

    /// "75.0%" ou "N/A". Empates sobem (6.25 -> "6.3%").
    pub fn occupancy_label(&self) -> String {
        match self.occupancy_rate() {
            Some(rate) => format!("{:.1}%", (rate * 10.0).round() / 10.0),
            None => "N/A".to_string(),
        }
    }

    pub fn occupancy_class(&self) -> Option<OccupancyClass> {
        self.occupancy_rate().map(OccupancyClass::from_rate)
    }
}

// ---
// Unidade + ocupação já calculada (resposta da API)
// ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorageUnitView {
    #[serde(flatten)]
    pub unit: StorageUnit,
    #[schema(example = "75.0%")]
    pub occupancy_rate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occupancy_class: Option<OccupancyClass>,
}

impl From<StorageUnit> for StorageUnitView {
    fn from(unit: StorageUnit) -> Self {
        Self {
            occupancy_rate: unit.occupancy_label(),
            occupancy_class: unit.occupancy_class(),
            unit,
        }
    }
}

impl HierarchyRecord for Zone {
    const LEVEL: HierarchyLevel = HierarchyLevel::Zone;

    fn code(&self) -> &str {
        &self.zone_code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn parent_code(&self) -> Option<&str> {
        None
    }
}

impl HierarchyRecord for Section {
    const LEVEL: HierarchyLevel = HierarchyLevel::Section;

    fn code(&self) -> &str {
        &self.section_code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn parent_code(&self) -> Option<&str> {
        Some(&self.zone_code)
    }
}

impl HierarchyRecord for Shelf {
    const LEVEL: HierarchyLevel = HierarchyLevel::Shelf;

    fn code(&self) -> &str {
        &self.shelf_code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn parent_code(&self) -> Option<&str> {
        Some(&self.section_code)
    }
}

impl HierarchyRecord for StorageUnit {
    const LEVEL: HierarchyLevel = HierarchyLevel::StorageUnit;

    fn code(&self) -> &str {
        &self.storage_unit_code
    }
    fn name(&self) -> &str {
        &self.name
    }
    fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }
    fn parent_code(&self) -> Option<&str> {
        Some(&self.shelf_code)
    }
}

// ---
// 5. Hierarquia completa (o "dataset")
// ---
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WarehouseHierarchy {
    pub zones: Vec<Zone>,
    pub sections: Vec<Section>,
    pub shelves: Vec<Shelf>,
    pub storage_units: Vec<StorageUnit>,
}

// ---
// 6. Seleção do usuário (uma por sessão, nunca persistida)
// ---
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_zone: Option<Zone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_shelf: Option<Shelf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_storage_unit: Option<StorageUnit>,
}

impl LocationSelection {
    pub fn is_empty(&self) -> bool {
        self.selected_zone.is_none()
            && self.selected_section.is_none()
            && self.selected_shelf.is_none()
            && self.selected_storage_unit.is_none()
    }

    pub fn is_complete(&self) -> bool {
        self.selected_storage_unit.is_some()
    }

    /// Limpa todos os níveis abaixo de `level` (o próprio `level` fica).
    pub fn clear_below(&mut self, level: HierarchyLevel) {
        if level < HierarchyLevel::Section {
            self.selected_section = None;
        }
        if level < HierarchyLevel::Shelf {
            self.selected_shelf = None;
        }
        if level < HierarchyLevel::StorageUnit {
            self.selected_storage_unit = None;
        }
    }

    /// Código do item selecionado em `level`, se houver.
    pub fn code_at(&self, level: HierarchyLevel) -> Option<&str> {
        match level {
            HierarchyLevel::Zone => self.selected_zone.as_ref().map(|z| z.code()),
            HierarchyLevel::Section => self.selected_section.as_ref().map(|s| s.code()),
            HierarchyLevel::Shelf => self.selected_shelf.as_ref().map(|s| s.code()),
            HierarchyLevel::StorageUnit => self.selected_storage_unit.as_ref().map(|u| u.code()),
        }
    }

    fn name_at(&self, level: HierarchyLevel) -> Option<&str> {
        match level {
            HierarchyLevel::Zone => self.selected_zone.as_ref().map(|z| z.name()),
            HierarchyLevel::Section => self.selected_section.as_ref().map(|s| s.name()),
            HierarchyLevel::Shelf => self.selected_shelf.as_ref().map(|s| s.name()),
            HierarchyLevel::StorageUnit => self.selected_storage_unit.as_ref().map(|u| u.name()),
        }
    }

    /// Trilha legível: "Zone: Storage Zone → Section: General Storage 1".
    /// Só aparecem os níveis preenchidos.
    pub fn summary(&self) -> String {
        HierarchyLevel::ALL
            .iter()
            .filter_map(|level| self.name_at(*level).map(|name| format!("{}: {}", level.label(), name)))
            .collect::<Vec<_>>()
            .join(" → ")
    }
}
