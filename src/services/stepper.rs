// src/services/stepper.rs

//! Stepper de seleção de localização: Zona -> Seção -> Prateleira -> Unidade.
//!
//! Cada passo tem sua lista carregada, um filtro de texto, a flag de
//! carregamento e um erro recuperável. Selecionar um item no nível `L`
//! registra o item, limpa tudo o que depende dele e pede os filhos ao
//! `HierarchySource`; a resposta só avança o passo se ainda for a esperada.
//!
//! As consultas podem ser feitas em duas metades (`begin_*` devolve um
//! [`LookupTicket`], [`fetch_children`] busca, [`SelectionStepper::complete`]
//! aplica) ou numa chamada só (`select_*`).

use std::sync::Arc;

use crate::{
    common::error::AppError,
    db::HierarchySource,
    models::warehouse::{
        HierarchyLevel, HierarchyRecord, LocationSelection, OccupancyClass, Section, Shelf,
        StorageUnit, Zone,
    },
};

// ---
// Estado de um passo
// ---
#[derive(Debug, Clone, Default)]
pub struct StepStatus {
    filter: String,
    loading: bool,
    error: Option<AppError>,
    // Id da consulta em andamento para este passo
    pending: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct StepState<T> {
    items: Vec<T>,
    status: StepStatus,
}

impl<T> Default for StepState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            status: StepStatus::default(),
        }
    }
}

impl<T: HierarchyRecord> StepState<T> {
    /// Lista completa carregada para o passo.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Lista filtrada pelo texto de busca do passo (sem acessar a origem).
    pub fn visible(&self) -> Vec<&T> {
        let needle = self.status.filter.trim().to_lowercase();
        self.items.iter().filter(|item| item.matches_filter(&needle)).collect()
    }

    pub fn filter(&self) -> &str {
        &self.status.filter
    }

    pub fn is_loading(&self) -> bool {
        self.status.loading
    }

    pub fn error(&self) -> Option<&AppError> {
        self.status.error.as_ref()
    }

    fn clear(&mut self) {
        self.items.clear();
        self.status.loading = false;
        self.status.error = None;
        self.status.pending = None;
    }
}

// ---
// Consulta em andamento
// ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTicket {
    level: HierarchyLevel,
    parent_code: String,
    request_id: u64,
}

impl LookupTicket {
    /// Nível que será preenchido pela resposta.
    pub fn level(&self) -> HierarchyLevel {
        self.level
    }

    pub fn parent_code(&self) -> &str {
        &self.parent_code
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChildRecords {
    Zones(Vec<Zone>),
    Sections(Vec<Section>),
    Shelves(Vec<Shelf>),
    StorageUnits(Vec<StorageUnit>),
}

impl ChildRecords {
    pub fn level(&self) -> HierarchyLevel {
        match self {
            ChildRecords::Zones(_) => HierarchyLevel::Zone,
            ChildRecords::Sections(_) => HierarchyLevel::Section,
            ChildRecords::Shelves(_) => HierarchyLevel::Shelf,
            ChildRecords::StorageUnits(_) => HierarchyLevel::StorageUnit,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ChildRecords::Zones(v) => v.len(),
            ChildRecords::Sections(v) => v.len(),
            ChildRecords::Shelves(v) => v.len(),
            ChildRecords::StorageUnits(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A resposta preencheu `level` com `count` registros.
    Applied { level: HierarchyLevel, count: usize },
    /// A seleção mudou (ou houve reset) enquanto a consulta estava em voo.
    Stale,
}

/// Executa a consulta descrita pelo ticket.
pub async fn fetch_children(
    source: &dyn HierarchySource,
    ticket: &LookupTicket,
) -> Result<ChildRecords, AppError> {
    let code = ticket.parent_code.as_str();
    match ticket.level {
        HierarchyLevel::Zone => source.list_zones().await.map(ChildRecords::Zones),
        HierarchyLevel::Section => source.list_sections(code).await.map(ChildRecords::Sections),
        HierarchyLevel::Shelf => source.list_shelves(code).await.map(ChildRecords::Shelves),
        HierarchyLevel::StorageUnit => source
            .list_storage_units(code)
            .await
            .map(ChildRecords::StorageUnits),
    }
}

// ---
// O stepper
// ---
pub struct SelectionStepper {
    source: Arc<dyn HierarchySource>,
    current: HierarchyLevel,
    selection: LocationSelection,
    zones: StepState<Zone>,
    sections: StepState<Section>,
    shelves: StepState<Shelf>,
    storage_units: StepState<StorageUnit>,
    next_request_id: u64,
}

impl SelectionStepper {
    pub fn new(source: Arc<dyn HierarchySource>) -> Self {
        Self {
            source,
            current: HierarchyLevel::Zone,
            selection: LocationSelection::default(),
            zones: StepState::default(),
            sections: StepState::default(),
            shelves: StepState::default(),
            storage_units: StepState::default(),
            next_request_id: 0,
        }
    }

    // --- Leitura ---

    pub fn current_step(&self) -> HierarchyLevel {
        self.current
    }

    pub fn selection(&self) -> &LocationSelection {
        &self.selection
    }

    pub fn is_complete(&self) -> bool {
        self.selection.is_complete()
    }

    pub fn zones(&self) -> &StepState<Zone> {
        &self.zones
    }

    pub fn sections(&self) -> &StepState<Section> {
        &self.sections
    }

    pub fn shelves(&self) -> &StepState<Shelf> {
        &self.shelves
    }

    pub fn storage_units(&self) -> &StepState<StorageUnit> {
        &self.storage_units
    }

    pub fn is_loading(&self, level: HierarchyLevel) -> bool {
        self.status(level).loading
    }

    pub fn error(&self, level: HierarchyLevel) -> Option<&AppError> {
        self.status(level).error.as_ref()
    }

    pub fn filter(&self, level: HierarchyLevel) -> &str {
        &self.status(level).filter
    }

    /// Atualiza o texto de busca de um passo. Nunca consulta a origem.
    pub fn set_filter(&mut self, level: HierarchyLevel, text: impl Into<String>) {
        self.status_mut(level).filter = text.into();
    }

    pub fn summary(&self) -> String {
        self.selection.summary()
    }

    /// "75.0%" / "N/A" da unidade selecionada.
    pub fn selected_occupancy_label(&self) -> Option<String> {
        self.selection
            .selected_storage_unit
            .as_ref()
            .map(StorageUnit::occupancy_label)
    }

    pub fn selected_occupancy_class(&self) -> Option<OccupancyClass> {
        self.selection
            .selected_storage_unit
            .as_ref()
            .and_then(StorageUnit::occupancy_class)
    }

    // --- Transições ---

    /// Carrega as zonas (passo inicial).
    pub async fn start(&mut self) -> Result<LookupOutcome, AppError> {
        let ticket = self.begin_zone_load();
        self.run(ticket).await
    }

    pub fn begin_zone_load(&mut self) -> LookupTicket {
        self.begin_lookup(HierarchyLevel::Zone, String::new())
    }

    pub fn begin_zone_selection(&mut self, zone: Zone) -> LookupTicket {
        let parent_code = zone.zone_code.clone();
        self.selection.selected_zone = Some(zone);
        self.selection.clear_below(HierarchyLevel::Zone);
        self.current = HierarchyLevel::Zone;
        self.begin_lookup(HierarchyLevel::Section, parent_code)
    }

    pub fn begin_section_selection(&mut self, section: Section) -> Result<LookupTicket, AppError> {
        self.check_parent(&section)?;
        let parent_code = section.section_code.clone();
        self.selection.selected_section = Some(section);
        self.selection.clear_below(HierarchyLevel::Section);
        self.current = HierarchyLevel::Section;
        Ok(self.begin_lookup(HierarchyLevel::Shelf, parent_code))
    }

    pub fn begin_shelf_selection(&mut self, shelf: Shelf) -> Result<LookupTicket, AppError> {
        self.check_parent(&shelf)?;
        let parent_code = shelf.shelf_code.clone();
        self.selection.selected_shelf = Some(shelf);
        self.selection.clear_below(HierarchyLevel::Shelf);
        self.current = HierarchyLevel::Shelf;
        Ok(self.begin_lookup(HierarchyLevel::StorageUnit, parent_code))
    }

    pub async fn select_zone(&mut self, zone: Zone) -> Result<LookupOutcome, AppError> {
        let ticket = self.begin_zone_selection(zone);
        self.run(ticket).await
    }

    pub async fn select_section(&mut self, section: Section) -> Result<LookupOutcome, AppError> {
        let ticket = self.begin_section_selection(section)?;
        self.run(ticket).await
    }

    pub async fn select_shelf(&mut self, shelf: Shelf) -> Result<LookupOutcome, AppError> {
        let ticket = self.begin_shelf_selection(shelf)?;
        self.run(ticket).await
    }

    /// Passo final: não há consulta nem avanço automático.
    pub fn select_storage_unit(&mut self, unit: StorageUnit) -> Result<(), AppError> {
        self.check_parent(&unit)?;
        self.selection.selected_storage_unit = Some(unit);
        self.current = HierarchyLevel::StorageUnit;
        tracing::info!(summary = %self.selection.summary(), "Seleção final concluída");
        Ok(())
    }

    /// Refaz a consulta de `level` para o pai atualmente selecionado.
    /// A seleção abaixo do pai é descartada, assim como as listas.
    pub async fn retry(&mut self, level: HierarchyLevel) -> Result<LookupOutcome, AppError> {
        let parent_code = match level.previous() {
            None => {
                self.selection = LocationSelection::default();
                String::new()
            }
            Some(parent) => {
                let code = self
                    .selection
                    .code_at(parent)
                    .map(str::to_string)
                    .ok_or(AppError::SelectionOutOfOrder { level })?;
                self.selection.clear_below(parent);
                code
            }
        };
        let ticket = self.begin_lookup(level, parent_code);
        self.run(ticket).await
    }

    /// Aplica a resposta de uma consulta. Respostas obsoletas são descartadas
    /// sem alterar nada.
    pub fn complete(
        &mut self,
        ticket: LookupTicket,
        result: Result<ChildRecords, AppError>,
    ) -> Result<LookupOutcome, AppError> {
        let level = ticket.level;
        if self.status(level).pending != Some(ticket.request_id) {
            tracing::debug!(%level, parent_code = %ticket.parent_code, "Descartando resposta obsoleta");
            return Ok(LookupOutcome::Stale);
        }

        let status = self.status_mut(level);
        status.pending = None;
        status.loading = false;

        let records = match result {
            Ok(records) if records.level() == level => records,
            Ok(records) => {
                return Err(self.fail(
                    &ticket,
                    format!("resposta de {} para consulta de {}", records.level(), level),
                ));
            }
            Err(err) => {
                tracing::warn!(%level, parent_code = %ticket.parent_code, "Erro ao carregar: {}", err);
                self.status_mut(level).error = Some(err.clone());
                return Err(err);
            }
        };

        let count = records.len();
        match records {
            ChildRecords::Zones(v) => self.zones.items = v,
            ChildRecords::Sections(v) => self.sections.items = v,
            ChildRecords::Shelves(v) => self.shelves.items = v,
            ChildRecords::StorageUnits(v) => self.storage_units.items = v,
        }
        self.current = level;

        tracing::debug!(%level, count, "Passo carregado");
        Ok(LookupOutcome::Applied { level, count })
    }

    /// Volta um passo sem descartar dados nem seleção.
    pub fn back(&mut self) {
        if let Some(previous) = self.current.previous() {
            self.current = previous;
        }
    }

    /// Limpa a seleção, as listas dependentes e todos os filtros.
    /// As zonas continuam carregadas.
    pub fn reset(&mut self) {
        self.selection = LocationSelection::default();
        self.sections.clear();
        self.shelves.clear();
        self.storage_units.clear();
        for level in HierarchyLevel::ALL {
            self.status_mut(level).filter.clear();
        }
        self.zones.status.error = None;
        self.current = HierarchyLevel::Zone;
        tracing::info!("Seleção reiniciada");
    }

    // --- Internos ---

    async fn run(&mut self, ticket: LookupTicket) -> Result<LookupOutcome, AppError> {
        let source = Arc::clone(&self.source);
        let result = fetch_children(source.as_ref(), &ticket).await;
        self.complete(ticket, result)
    }

    // Marca `level` como carregando e invalida tudo o que estiver abaixo.
    fn begin_lookup(&mut self, level: HierarchyLevel, parent_code: String) -> LookupTicket {
        self.next_request_id += 1;
        let request_id = self.next_request_id;

        for deeper in HierarchyLevel::ALL.into_iter().filter(|l| *l > level) {
            self.clear_step(deeper);
        }
        // Os filhos antigos pertencem a outro pai
        if level != HierarchyLevel::Zone {
            self.clear_step(level);
        }

        let status = self.status_mut(level);
        status.loading = true;
        status.error = None;
        status.pending = Some(request_id);

        tracing::debug!(%level, parent_code = %parent_code, request_id, "Consultando filhos");
        LookupTicket {
            level,
            parent_code,
            request_id,
        }
    }

    fn fail(&mut self, ticket: &LookupTicket, reason: String) -> AppError {
        let err = AppError::LookupFailure {
            level: ticket.level,
            parent_code: ticket.parent_code.clone(),
            reason,
        };
        self.status_mut(ticket.level).error = Some(err.clone());
        err
    }

    // O pai do registro precisa ser o item selecionado no nível acima.
    fn check_parent<T: HierarchyRecord>(&self, record: &T) -> Result<(), AppError> {
        let level = T::LEVEL;
        let Some(parent_level) = level.previous() else {
            return Ok(());
        };
        let selected = self
            .selection
            .code_at(parent_level)
            .ok_or(AppError::SelectionOutOfOrder { level })?;
        let actual = record.parent_code().unwrap_or_default();
        if selected != actual {
            return Err(AppError::ParentMismatch {
                level,
                code: record.code().to_string(),
                expected_parent: selected.to_string(),
                actual_parent: actual.to_string(),
            });
        }
        Ok(())
    }

    fn clear_step(&mut self, level: HierarchyLevel) {
        match level {
            HierarchyLevel::Zone => self.zones.clear(),
            HierarchyLevel::Section => self.sections.clear(),
            HierarchyLevel::Shelf => self.shelves.clear(),
            HierarchyLevel::StorageUnit => self.storage_units.clear(),
        }
    }

    fn status(&self, level: HierarchyLevel) -> &StepStatus {
        match level {
            HierarchyLevel::Zone => &self.zones.status,
            HierarchyLevel::Section => &self.sections.status,
            HierarchyLevel::Shelf => &self.shelves.status,
            HierarchyLevel::StorageUnit => &self.storage_units.status,
        }
    }

    fn status_mut(&mut self, level: HierarchyLevel) -> &mut StepStatus {
        match level {
            HierarchyLevel::Zone => &mut self.zones.status,
            HierarchyLevel::Section => &mut self.sections.status,
            HierarchyLevel::Shelf => &mut self.shelves.status,
            HierarchyLevel::StorageUnit => &mut self.storage_units.status,
        }
    }
}
