use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tui_dispatch_debug::debug::{ron_string, DebugSection, DebugState};

use crate::cache::RecordCache;
use crate::dex::{Generation, GENERATIONS, TOTAL_RECORDS};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchState {
    pub active: bool,
    pub query: String,
}

/// One pokemon's core attributes from the primary endpoint. Immutable once
/// fetched; physical attributes are nullable upstream and resolved to
/// options at the API boundary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DexRecord {
    pub id: u16,
    pub name: String,
    pub types: Vec<String>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub height: Option<u16>,
    pub weight: Option<u16>,
    pub base_experience: Option<u16>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub name: String,
    pub value: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub name: String,
    pub is_hidden: bool,
}

/// Secondary per-pokemon data, fetched lazily for the detail view.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesInfo {
    pub id: u16,
    pub generation: Option<String>,
    pub is_legendary: bool,
    pub is_mythical: bool,
    pub flavor_text: Option<String>,
    pub genus: Option<String>,
    pub habitat: Option<String>,
    pub shape: Option<String>,
    pub growth_rate: Option<String>,
    pub capture_rate: Option<u8>,
    pub base_happiness: Option<u8>,
    pub egg_groups: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncounterLocation {
    pub location: String,
    pub version_details: Vec<EncounterVersion>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncounterVersion {
    pub version: String,
    pub encounters: Vec<EncounterSlot>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncounterSlot {
    pub method: String,
    pub min_level: u8,
    pub max_level: u8,
    pub chance: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum CaughtFilter {
    #[default]
    All,
    Caught,
    Uncaught,
}

impl CaughtFilter {
    pub fn cycle(self) -> Self {
        match self {
            CaughtFilter::All => CaughtFilter::Caught,
            CaughtFilter::Caught => CaughtFilter::Uncaught,
            CaughtFilter::Uncaught => CaughtFilter::All,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CaughtFilter::All => "ALL",
            CaughtFilter::Caught => "CAUGHT",
            CaughtFilter::Uncaught => "UNCAUGHT",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum DetailTab {
    Stats,
    About,
    Marks,
    Locations,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum FocusArea {
    Grid,
    Detail,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppState {
    pub terminal_size: (u16, u16),
    pub focus: FocusArea,

    pub generation_index: usize,
    pub cache: RecordCache,
    /// Published ids for the selected generation, ascending. Grows
    /// monotonically while a batch load is in flight.
    pub roster: Vec<u16>,
    pub filtered_indices: Vec<usize>,
    pub selected_index: usize,
    /// Chunk queue for the in-flight batch load of the selected generation.
    pub pending_chunks: Vec<Vec<u16>>,

    pub detail_id: Option<u16>,
    pub detail_tab: DetailTab,
    pub species_pending: bool,
    pub encounter_pending: bool,

    pub search: SearchState,
    pub type_filter: Option<String>,
    pub caught_filter: CaughtFilter,

    pub caught: HashMap<u16, bool>,
    pub show_shiny: bool,

    pub list_loading: bool,
    pub message: Option<String>,
    pub tick: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            terminal_size: (80, 24),
            focus: FocusArea::Grid,
            generation_index: 0,
            cache: RecordCache::default(),
            roster: Vec::new(),
            filtered_indices: Vec::new(),
            selected_index: 0,
            pending_chunks: Vec::new(),
            detail_id: None,
            detail_tab: DetailTab::Stats,
            species_pending: false,
            encounter_pending: false,
            search: SearchState::default(),
            type_filter: None,
            caught_filter: CaughtFilter::All,
            caught: HashMap::new(),
            show_shiny: false,
            list_loading: false,
            message: None,
            tick: 0,
        }
    }
}

/// The three AND-combined grid predicates. Pure; callers preserve roster
/// order, so the filtered view is never re-sorted.
pub fn record_matches(
    record: &DexRecord,
    query: &str,
    type_filter: Option<&str>,
    caught_filter: CaughtFilter,
    caught: &HashMap<u16, bool>,
) -> bool {
    let matches_query = query.is_empty()
        || record.name.to_lowercase().contains(query)
        || record.id.to_string().contains(query);
    let matches_type = match type_filter {
        Some(selector) => record.types.iter().any(|name| name == selector),
        None => true,
    };
    let is_caught = caught.get(&record.id).copied().unwrap_or(false);
    let matches_caught = match caught_filter {
        CaughtFilter::All => true,
        CaughtFilter::Caught => is_caught,
        CaughtFilter::Uncaught => !is_caught,
    };
    matches_query && matches_type && matches_caught
}

impl AppState {
    pub fn selected_generation(&self) -> &'static Generation {
        &GENERATIONS[self.generation_index]
    }

    pub fn selected_id(&self) -> Option<u16> {
        self.filtered_indices
            .get(self.selected_index)
            .and_then(|idx| self.roster.get(*idx))
            .copied()
    }

    pub fn selected_record(&self) -> Option<&DexRecord> {
        self.cache.record(self.selected_id()?)
    }

    pub fn detail_record(&self) -> Option<&DexRecord> {
        self.cache.record(self.detail_id?)
    }

    pub fn detail_species(&self) -> Option<&SpeciesInfo> {
        self.cache.species(self.detail_id?)
    }

    pub fn detail_encounters(&self) -> Option<&[EncounterLocation]> {
        self.cache.encounters(self.detail_id?)
    }

    /// The detail view is settled once both lazy branches have resolved,
    /// whether each succeeded or failed.
    pub fn detail_loading(&self) -> bool {
        self.detail_id.is_some() && (self.species_pending || self.encounter_pending)
    }

    pub fn is_caught(&self, id: u16) -> bool {
        self.caught.get(&id).copied().unwrap_or(false)
    }

    pub fn set_selected_index(&mut self, index: usize) -> bool {
        if self.filtered_indices.is_empty() {
            self.selected_index = 0;
            return false;
        }
        let bounded = index.min(self.filtered_indices.len() - 1);
        if bounded != self.selected_index {
            self.selected_index = bounded;
            return true;
        }
        false
    }

    /// Re-derive the published roster from the cache for the selected
    /// generation. Always ascending, never with duplicates.
    pub fn republish_roster(&mut self) {
        let generation = self.selected_generation();
        self.roster = self.cache.present_records(generation.ids());
        self.rebuild_filtered();
    }

    pub fn rebuild_filtered(&mut self) {
        let query = self.search.query.trim().to_lowercase();
        self.filtered_indices = self
            .roster
            .iter()
            .enumerate()
            .filter(|(_, id)| {
                self.cache.record(**id).is_some_and(|record| {
                    record_matches(
                        record,
                        &query,
                        self.type_filter.as_deref(),
                        self.caught_filter,
                        &self.caught,
                    )
                })
            })
            .map(|(idx, _)| idx)
            .collect();

        if self.selected_index >= self.filtered_indices.len() {
            self.selected_index = 0;
        }
    }

    /// Distinct type tags present in the published roster, sorted.
    pub fn available_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .roster
            .iter()
            .filter_map(|id| self.cache.record(*id))
            .flat_map(|record| record.types.iter().cloned())
            .collect();
        types.sort();
        types.dedup();
        types
    }

    pub fn caught_in_generation(&self) -> usize {
        self.selected_generation()
            .ids()
            .filter(|id| self.is_caught(*id))
            .count()
    }

    pub fn total_caught(&self) -> usize {
        self.caught.values().filter(|caught| **caught).count()
    }

    pub fn total_records(&self) -> usize {
        TOTAL_RECORDS as usize
    }

    pub fn reset_detail(&mut self) {
        self.detail_id = None;
        self.detail_tab = DetailTab::Stats;
        self.species_pending = false;
        self.encounter_pending = false;
    }
}

impl DebugState for AppState {
    fn debug_sections(&self) -> Vec<DebugSection> {
        vec![
            DebugSection::new("Dex")
                .entry("generation", ron_string(&self.selected_generation().label))
                .entry("roster", ron_string(&self.roster.len()))
                .entry("filtered", ron_string(&self.filtered_indices.len()))
                .entry("selected", ron_string(&self.selected_index))
                .entry("detail", ron_string(&self.detail_id))
                .entry("pending_chunks", ron_string(&self.pending_chunks.len())),
            DebugSection::new("Filters")
                .entry("search", ron_string(&self.search.query))
                .entry("search_active", ron_string(&self.search.active))
                .entry("type", ron_string(&self.type_filter))
                .entry("caught", ron_string(&self.caught_filter.label()))
                .entry("shiny", ron_string(&self.show_shiny)),
            DebugSection::new("Status")
                .entry("list_loading", ron_string(&self.list_loading))
                .entry("species_pending", ron_string(&self.species_pending))
                .entry("encounter_pending", ron_string(&self.encounter_pending))
                .entry("caught_total", ron_string(&self.total_caught()))
                .entry("message", ron_string(&self.message)),
        ]
    }
}
