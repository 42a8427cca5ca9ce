//! Store-level tests: dispatch actions against the real reducer and assert
//! on state and emitted effects.

use dextrack::{
    action::Action,
    api::CHUNK_SIZE,
    effect::Effect,
    persist::Prefs,
    reducer::reducer,
    state::{AppState, CaughtFilter, DexRecord, EncounterLocation, SpeciesInfo},
};
use tui_dispatch::EffectStore;

fn record(id: u16) -> DexRecord {
    DexRecord {
        id,
        name: format!("mon-{id}"),
        types: vec!["normal".to_string()],
        stats: Vec::new(),
        abilities: Vec::new(),
        height: Some(7),
        weight: Some(69),
        base_experience: Some(64),
    }
}

fn records(ids: impl IntoIterator<Item = u16>) -> Vec<DexRecord> {
    ids.into_iter().map(record).collect()
}

fn chunk_ids(effect: &Effect) -> Vec<u16> {
    match effect {
        Effect::FetchRecordChunk { ids, .. } => ids.clone(),
        other => panic!("expected FetchRecordChunk, got {other:?}"),
    }
}

/// Drive the whole batch load for the currently selected generation by
/// answering each chunk effect with a successful load.
fn complete_load(store: &mut EffectStore<AppState, Action, Effect>, mut effects: Vec<Effect>) {
    while let Some(effect) = effects.pop() {
        let Effect::FetchRecordChunk { generation, ids } = effect else {
            continue;
        };
        let result = store.dispatch(Action::RecordChunkDidLoad {
            generation,
            records: records(ids),
        });
        effects.extend(result.effects);
    }
}

#[test]
fn kanto_loads_in_four_chunks_and_publishes_progressively() {
    let mut store = EffectStore::new(AppState::default(), reducer);

    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    assert_eq!(result.effects.len(), 1);
    let first = chunk_ids(&result.effects[0]);
    assert_eq!(first, (1..=40).collect::<Vec<u16>>());
    assert_eq!(store.state().pending_chunks.len(), 3);

    // First chunk publishes immediately; the rest are still queued.
    let result = store.dispatch(Action::RecordChunkDidLoad {
        generation: 0,
        records: records(1..=40),
    });
    assert_eq!(store.state().roster.len(), 40);
    assert!(store.state().list_loading);
    assert_eq!(chunk_ids(&result.effects[0]), (41..=80).collect::<Vec<u16>>());

    complete_load(&mut store, result.effects);

    let state = store.state();
    assert_eq!(state.roster.len(), 151);
    assert_eq!(state.roster, (1..=151).collect::<Vec<u16>>());
    assert!(!state.list_loading);
    assert!(state.pending_chunks.is_empty());

    // Chunk sizes were CHUNK_SIZE except the tail.
    assert_eq!(151 % CHUNK_SIZE, 31);
}

#[test]
fn reload_of_a_cached_generation_fetches_nothing() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);
    let roster = store.state().roster.clone();

    let result = store.dispatch(Action::GenerationRetry);
    assert!(result.effects.is_empty());
    assert!(!store.state().list_loading);
    assert_eq!(store.state().roster, roster);
}

#[test]
fn generation_switch_discards_stale_publishes_but_keeps_the_cache() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::PrefsDidLoad(Prefs::default()));

    // Switch away while the first Kanto chunk is still in flight.
    let result = store.dispatch(Action::GenerationSelect(1));
    assert_eq!(store.state().generation_index, 1);
    assert_eq!(
        chunk_ids(&result.effects[0]),
        (152..=191).collect::<Vec<u16>>()
    );

    // The late Kanto chunk lands in the cache without touching the roster.
    let result = store.dispatch(Action::RecordChunkDidLoad {
        generation: 0,
        records: records(1..=40),
    });
    assert!(result.effects.is_empty());
    assert!(store.state().roster.is_empty());
    assert!(store.state().cache.has_record(25));

    // Coming back, the cached prefix is published at once and only the
    // remainder is fetched.
    let result = store.dispatch(Action::GenerationSelect(0));
    assert_eq!(store.state().roster, (1..=40).collect::<Vec<u16>>());
    assert_eq!(
        chunk_ids(&result.effects[0]),
        (41..=80).collect::<Vec<u16>>()
    );
}

#[test]
fn detail_branches_fail_independently() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);

    let result = store.dispatch(Action::DetailOpen);
    assert_eq!(store.state().detail_id, Some(1));
    assert_eq!(
        result.effects,
        vec![
            Effect::FetchSpecies { id: 1 },
            Effect::FetchEncounters { id: 1 }
        ]
    );

    store.dispatch(Action::SpeciesDidError {
        id: 1,
        error: "species 1: timeout".to_string(),
    });
    assert!(!store.state().species_pending);
    assert!(store.state().encounter_pending);

    store.dispatch(Action::EncountersDidLoad {
        id: 1,
        encounters: Vec::new(),
    });
    let state = store.state();
    assert!(!state.detail_loading());
    assert!(state.detail_species().is_none());
    assert_eq!(state.detail_encounters(), Some(&[] as &[EncounterLocation]));
    assert!(state.message.as_deref().unwrap().contains("species 1"));
}

#[test]
fn reopening_a_detail_reuses_cached_branches() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);

    store.dispatch(Action::DetailOpen);
    store.dispatch(Action::SpeciesDidLoad {
        id: 1,
        species: SpeciesInfo {
            id: 1,
            ..Default::default()
        },
    });
    store.dispatch(Action::EncountersDidLoad {
        id: 1,
        encounters: Vec::new(),
    });
    store.dispatch(Action::DetailClose);

    let result = store.dispatch(Action::DetailOpen);
    assert!(result.effects.is_empty());
    assert!(!store.state().detail_loading());
}

#[test]
fn toggle_caught_twice_restores_state_with_one_save_each() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);

    let result = store.dispatch(Action::ToggleCaught);
    assert!(store.state().is_caught(1));
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::SavePrefs { .. }));

    let result = store.dispatch(Action::ToggleCaught);
    assert!(!store.state().is_caught(1));
    assert_eq!(result.effects.len(), 1);
    assert!(matches!(result.effects[0], Effect::SavePrefs { .. }));
}

#[test]
fn caught_filter_hides_toggled_entry_immediately() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);

    store.dispatch(Action::CaughtFilterCycle);
    store.dispatch(Action::CaughtFilterCycle);
    assert_eq!(store.state().caught_filter, CaughtFilter::Uncaught);
    let before = store.state().filtered_indices.len();

    store.dispatch(Action::ToggleCaught);
    assert_eq!(store.state().filtered_indices.len(), before - 1);
}

#[test]
fn generation_switch_persists_the_selection() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    store.dispatch(Action::PrefsDidLoad(Prefs::default()));

    let result = store.dispatch(Action::GenerationSelect(8));
    let saved = result.effects.iter().any(|effect| {
        matches!(
            effect,
            Effect::SavePrefs {
                generation_index: 8,
                ..
            }
        )
    });
    assert!(saved);
}

#[test]
fn search_narrows_and_cancel_restores() {
    let mut store = EffectStore::new(AppState::default(), reducer);
    let result = store.dispatch(Action::PrefsDidLoad(Prefs::default()));
    complete_load(&mut store, result.effects);
    let all = store.state().filtered_indices.len();

    store.dispatch(Action::SearchStart);
    for ch in "mon-15".chars() {
        store.dispatch(Action::SearchInput(ch));
    }
    // mon-15, mon-150, mon-151
    assert_eq!(store.state().filtered_indices.len(), 3);

    store.dispatch(Action::SearchCancel);
    assert_eq!(store.state().filtered_indices.len(), all);
}
