use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    LoadPrefs,
    SavePrefs { caught: HashMap<u16, bool>, generation_index: usize },
    /// One chunk of the batch load. The generation tag lets the reducer
    /// discard late publishes for a generation that is no longer selected.
    FetchRecordChunk { generation: usize, ids: Vec<u16> },
    FetchSpecies { id: u16 },
    FetchEncounters { id: u16 },
}
