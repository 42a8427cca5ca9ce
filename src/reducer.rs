use tui_dispatch::DispatchResult;

use crate::action::Action;
use crate::api::CHUNK_SIZE;
use crate::dex::GENERATIONS;
use crate::effect::Effect;
use crate::state::{AppState, DetailTab, FocusArea};

pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        Action::Init => {
            state.list_loading = true;
            state.message = None;
            DispatchResult::changed_with(Effect::LoadPrefs)
        }

        Action::PrefsDidLoad(prefs) => {
            state.caught = prefs.caught;
            state.generation_index = prefs.generation_index;
            changed_with_effects(start_generation_load(state))
        }

        Action::PrefsDidSave => DispatchResult::unchanged(),

        Action::GenerationSelect(index) => select_generation(state, index),

        Action::GenerationNext => {
            let next = (state.generation_index + 1) % GENERATIONS.len();
            select_generation(state, next)
        }

        Action::GenerationPrev => {
            let prev = state
                .generation_index
                .checked_sub(1)
                .unwrap_or(GENERATIONS.len() - 1);
            select_generation(state, prev)
        }

        Action::GenerationRetry => {
            state.message = None;
            changed_with_effects(start_generation_load(state))
        }

        Action::RecordChunkDidLoad {
            generation,
            records,
        } => {
            // Cache writes are idempotent inserts, so results for an
            // abandoned generation are still worth keeping.
            for record in records {
                state.cache.put_record(record);
            }
            if generation != state.generation_index {
                return DispatchResult::changed();
            }
            state.republish_roster();
            if state.pending_chunks.is_empty() {
                state.list_loading = false;
                return DispatchResult::changed();
            }
            let ids = state.pending_chunks.remove(0);
            DispatchResult::changed_with(Effect::FetchRecordChunk { generation, ids })
        }

        Action::RecordChunkDidError { generation, error } => {
            if generation != state.generation_index {
                return DispatchResult::changed();
            }
            state.list_loading = false;
            state.pending_chunks.clear();
            state.message = Some(format!("Load failed: {error}"));
            DispatchResult::changed()
        }

        Action::SelectionMove(delta) => {
            let index = (state.selected_index as i32 + delta as i32).max(0);
            if !state.set_selected_index(index as usize) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionPage(delta) => {
            let page = grid_page_size(state) as i32;
            let index = (state.selected_index as i32 + delta as i32 * page).max(0);
            if !state.set_selected_index(index as usize) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpTop => {
            if !state.set_selected_index(0) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::SelectionJumpBottom => {
            let last = state.filtered_indices.len().saturating_sub(1);
            if !state.set_selected_index(last) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::GridSelect(index) => {
            if !state.set_selected_index(index) {
                return DispatchResult::unchanged();
            }
            DispatchResult::changed()
        }

        Action::DetailOpen => {
            let Some(id) = state.selected_id() else {
                return DispatchResult::unchanged();
            };
            state.detail_id = Some(id);
            state.detail_tab = DetailTab::Stats;
            state.focus = FocusArea::Detail;

            let mut effects = Vec::new();
            state.species_pending = !state.cache.has_species(id);
            if state.species_pending {
                effects.push(Effect::FetchSpecies { id });
            }
            state.encounter_pending = !state.cache.has_encounters(id);
            if state.encounter_pending {
                effects.push(Effect::FetchEncounters { id });
            }
            changed_with_effects(effects)
        }

        Action::DetailClose => {
            if state.detail_id.is_none() {
                return DispatchResult::unchanged();
            }
            state.reset_detail();
            state.focus = FocusArea::Grid;
            DispatchResult::changed()
        }

        Action::DetailTabNext => cycle_detail_tab(state, 1),
        Action::DetailTabPrev => cycle_detail_tab(state, -1),

        Action::SpeciesDidLoad { id, species } => {
            state.cache.put_species(species);
            if state.detail_id == Some(id) {
                state.species_pending = false;
            }
            DispatchResult::changed()
        }

        Action::SpeciesDidError { id, error } => {
            if state.detail_id == Some(id) {
                state.species_pending = false;
            }
            state.message = Some(format!("Species unavailable: {error}"));
            DispatchResult::changed()
        }

        Action::EncountersDidLoad { id, encounters } => {
            state.cache.put_encounters(id, encounters);
            if state.detail_id == Some(id) {
                state.encounter_pending = false;
            }
            DispatchResult::changed()
        }

        Action::EncountersDidError { id, error } => {
            if state.detail_id == Some(id) {
                state.encounter_pending = false;
            }
            state.message = Some(format!("Encounters unavailable: {error}"));
            DispatchResult::changed()
        }

        Action::SearchStart => {
            state.search.active = true;
            state.search.query.clear();
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::SearchCancel => {
            if !state.search.active && state.search.query.is_empty() {
                return DispatchResult::unchanged();
            }
            state.search.active = false;
            state.search.query.clear();
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            state.search.active = false;
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::SearchInput(ch) => {
            state.search.query.push(ch);
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::SearchBackspace => {
            state.search.query.pop();
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::TypeFilterNext => cycle_type_filter(state, 1),
        Action::TypeFilterPrev => cycle_type_filter(state, -1),

        Action::TypeFilterClear => {
            if state.type_filter.is_none() {
                return DispatchResult::unchanged();
            }
            state.type_filter = None;
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::CaughtFilterCycle => {
            state.caught_filter = state.caught_filter.cycle();
            state.rebuild_filtered();
            DispatchResult::changed()
        }

        Action::ToggleCaught => {
            let Some(id) = state.detail_id.or_else(|| state.selected_id()) else {
                return DispatchResult::unchanged();
            };
            let flipped = !state.is_caught(id);
            state.caught.insert(id, flipped);
            state.rebuild_filtered();
            DispatchResult::changed_with(save_effect(state))
        }

        Action::ToggleShiny => {
            state.show_shiny = !state.show_shiny;
            DispatchResult::changed()
        }

        Action::FocusNext | Action::FocusPrev => {
            state.focus = match state.focus {
                FocusArea::Grid => FocusArea::Detail,
                FocusArea::Detail => FocusArea::Grid,
            };
            DispatchResult::changed()
        }

        Action::UiTerminalResize(width, height) => {
            if state.terminal_size == (width, height) {
                return DispatchResult::unchanged();
            }
            state.terminal_size = (width, height);
            DispatchResult::changed()
        }

        Action::Tick => {
            if !state.list_loading && !state.detail_loading() {
                return DispatchResult::unchanged();
            }
            state.tick = state.tick.wrapping_add(1);
            DispatchResult::changed()
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Kick off (or finish) the batch load for the selected generation: publish
/// what the cache already holds, then queue the missing ids in fixed-size
/// chunks, strictly ascending. Returns the first chunk's fetch effect, or
/// nothing when the generation is fully cached.
fn start_generation_load(state: &mut AppState) -> Vec<Effect> {
    let generation = state.selected_generation();
    let missing = state.cache.missing_records(generation.ids());
    state.republish_roster();

    if missing.is_empty() {
        state.list_loading = false;
        state.pending_chunks.clear();
        return Vec::new();
    }

    state.list_loading = true;
    let mut chunks: Vec<Vec<u16>> = missing
        .chunks(CHUNK_SIZE)
        .map(|chunk| chunk.to_vec())
        .collect();
    let first = chunks.remove(0);
    state.pending_chunks = chunks;
    vec![Effect::FetchRecordChunk {
        generation: state.generation_index,
        ids: first,
    }]
}

fn select_generation(state: &mut AppState, index: usize) -> DispatchResult<Effect> {
    debug_assert!(index < GENERATIONS.len(), "generation index out of range");
    if index >= GENERATIONS.len() || index == state.generation_index {
        return DispatchResult::unchanged();
    }
    state.generation_index = index;
    state.selected_index = 0;
    state.reset_detail();
    state.focus = FocusArea::Grid;
    state.message = None;

    let mut effects = start_generation_load(state);
    effects.push(save_effect(state));
    DispatchResult::changed_with_many(effects)
}

fn cycle_detail_tab(state: &mut AppState, step: i16) -> DispatchResult<Effect> {
    if state.detail_id.is_none() {
        return DispatchResult::unchanged();
    }
    let tabs = [
        DetailTab::Stats,
        DetailTab::About,
        DetailTab::Marks,
        DetailTab::Locations,
    ];
    let current = tabs
        .iter()
        .position(|tab| *tab == state.detail_tab)
        .unwrap_or(0) as i16;
    let len = tabs.len() as i16;
    let next = (current + step).rem_euclid(len);
    state.detail_tab = tabs[next as usize];
    DispatchResult::changed()
}

/// Walk the type selector through None plus every type present in the
/// roster. Position 0 is "all types".
fn cycle_type_filter(state: &mut AppState, step: i16) -> DispatchResult<Effect> {
    let types = state.available_types();
    if types.is_empty() {
        return DispatchResult::unchanged();
    }
    let current = state
        .type_filter
        .as_ref()
        .and_then(|name| types.iter().position(|tag| tag == name))
        .map(|idx| idx as i16 + 1)
        .unwrap_or(0);
    let len = types.len() as i16 + 1;
    let next = (current + step).rem_euclid(len);
    state.type_filter = if next == 0 {
        None
    } else {
        Some(types[(next - 1) as usize].clone())
    };
    state.rebuild_filtered();
    DispatchResult::changed()
}

fn save_effect(state: &AppState) -> Effect {
    Effect::SavePrefs {
        caught: state.caught.clone(),
        generation_index: state.generation_index,
    }
}

fn changed_with_effects(effects: Vec<Effect>) -> DispatchResult<Effect> {
    if effects.is_empty() {
        DispatchResult::changed()
    } else {
        DispatchResult::changed_with_many(effects)
    }
}

fn grid_page_size(state: &AppState) -> usize {
    state.terminal_size.1.saturating_sub(8) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persist::Prefs;
    use crate::state::DexRecord;

    fn record(id: u16) -> DexRecord {
        DexRecord {
            id,
            name: format!("mon-{id}"),
            types: vec!["normal".to_string()],
            stats: Vec::new(),
            abilities: Vec::new(),
            height: Some(7),
            weight: Some(69),
            base_experience: None,
        }
    }

    #[test]
    fn init_loads_prefs_before_anything_else() {
        let mut state = AppState::default();
        let result = reducer(&mut state, Action::Init);
        assert!(result.changed);
        assert!(state.list_loading);
        assert_eq!(result.effects, vec![Effect::LoadPrefs]);
    }

    #[test]
    fn prefs_restore_generation_and_caught_set() {
        let mut state = AppState::default();
        let mut prefs = Prefs::default();
        prefs.generation_index = 5;
        prefs.caught.insert(650, true);

        let result = reducer(&mut state, Action::PrefsDidLoad(prefs));
        assert_eq!(state.generation_index, 5);
        assert!(state.is_caught(650));
        assert_eq!(
            result.effects,
            vec![Effect::FetchRecordChunk {
                generation: 5,
                ids: (650..=689).collect(),
            }]
        );
    }

    #[test]
    fn chunk_error_surfaces_once_and_stops_the_run() {
        let mut state = AppState::default();
        reducer(&mut state, Action::PrefsDidLoad(Prefs::default()));
        let result = reducer(
            &mut state,
            Action::RecordChunkDidError {
                generation: 0,
                error: "pokemon 7: connection reset".to_string(),
            },
        );
        assert!(result.effects.is_empty());
        assert!(!state.list_loading);
        assert!(state.pending_chunks.is_empty());
        assert!(state.message.as_deref().unwrap().contains("pokemon 7"));
    }

    #[test]
    fn stale_generation_error_is_ignored() {
        let mut state = AppState::default();
        reducer(&mut state, Action::PrefsDidLoad(Prefs::default()));
        let result = reducer(
            &mut state,
            Action::RecordChunkDidError {
                generation: 3,
                error: "pokemon 400: timeout".to_string(),
            },
        );
        assert!(result.effects.is_empty());
        assert!(state.list_loading);
        assert!(state.message.is_none());
    }

    #[test]
    fn detail_open_skips_cached_branches() {
        let mut state = AppState::default();
        state.cache.put_record(record(25));
        state.republish_roster();
        state.cache.put_species(crate::state::SpeciesInfo {
            id: 25,
            ..Default::default()
        });

        let result = reducer(&mut state, Action::DetailOpen);
        assert_eq!(state.detail_id, Some(25));
        assert!(!state.species_pending);
        assert!(state.encounter_pending);
        assert_eq!(result.effects, vec![Effect::FetchEncounters { id: 25 }]);
    }

    #[test]
    fn tab_cycle_wraps_both_ways() {
        let mut state = AppState::default();
        state.cache.put_record(record(1));
        state.republish_roster();
        reducer(&mut state, Action::DetailOpen);

        assert_eq!(state.detail_tab, DetailTab::Stats);
        reducer(&mut state, Action::DetailTabPrev);
        assert_eq!(state.detail_tab, DetailTab::Locations);
        reducer(&mut state, Action::DetailTabNext);
        assert_eq!(state.detail_tab, DetailTab::Stats);
    }

    #[test]
    fn type_filter_cycles_through_all_position() {
        let mut state = AppState::default();
        let mut fire = record(4);
        fire.types = vec!["fire".to_string()];
        state.cache.put_record(fire);
        state.cache.put_record(record(1));
        state.republish_roster();

        reducer(&mut state, Action::TypeFilterNext);
        assert_eq!(state.type_filter.as_deref(), Some("fire"));
        reducer(&mut state, Action::TypeFilterNext);
        assert_eq!(state.type_filter.as_deref(), Some("normal"));
        reducer(&mut state, Action::TypeFilterNext);
        assert_eq!(state.type_filter, None);
        reducer(&mut state, Action::TypeFilterPrev);
        assert_eq!(state.type_filter.as_deref(), Some("normal"));
    }
}
