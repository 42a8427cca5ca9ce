use serde::{Deserialize, Serialize};

use crate::persist::Prefs;
use crate::state::{DexRecord, EncounterLocation, SpeciesInfo};

#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[action(infer_categories)]
pub enum Action {
    Init,
    PrefsDidLoad(Prefs),
    PrefsDidSave,

    GenerationSelect(usize),
    GenerationNext,
    GenerationPrev,
    GenerationRetry,
    RecordChunkDidLoad { generation: usize, records: Vec<DexRecord> },
    RecordChunkDidError { generation: usize, error: String },

    SelectionMove(i16),
    SelectionPage(i16),
    SelectionJumpTop,
    SelectionJumpBottom,
    GridSelect(usize),

    DetailOpen,
    DetailClose,
    DetailTabNext,
    DetailTabPrev,
    SpeciesDidLoad { id: u16, species: SpeciesInfo },
    SpeciesDidError { id: u16, error: String },
    EncountersDidLoad { id: u16, encounters: Vec<EncounterLocation> },
    EncountersDidError { id: u16, error: String },

    SearchStart,
    SearchCancel,
    SearchSubmit,
    SearchInput(char),
    SearchBackspace,

    TypeFilterNext,
    TypeFilterPrev,
    TypeFilterClear,
    CaughtFilterCycle,

    ToggleCaught,
    ToggleShiny,

    FocusNext,
    FocusPrev,

    UiTerminalResize(u16, u16),
    Tick,
    Quit,
}
