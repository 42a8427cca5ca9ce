//! In-memory record cache, partitioned into three namespaces.
//!
//! Entries live for the rest of the process; nothing is ever evicted and an
//! existing entry is never overwritten, so producers that race on the same id
//! converge to the same content.

use std::collections::HashMap;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::state::{DexRecord, EncounterLocation, SpeciesInfo};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordCache {
    records: HashMap<u16, DexRecord>,
    species: HashMap<u16, SpeciesInfo>,
    encounters: HashMap<u16, Vec<EncounterLocation>>,
}

impl RecordCache {
    pub fn record(&self, id: u16) -> Option<&DexRecord> {
        self.records.get(&id)
    }

    pub fn species(&self, id: u16) -> Option<&SpeciesInfo> {
        self.species.get(&id)
    }

    pub fn encounters(&self, id: u16) -> Option<&[EncounterLocation]> {
        self.encounters.get(&id).map(Vec::as_slice)
    }

    pub fn has_record(&self, id: u16) -> bool {
        self.records.contains_key(&id)
    }

    pub fn has_species(&self, id: u16) -> bool {
        self.species.contains_key(&id)
    }

    pub fn has_encounters(&self, id: u16) -> bool {
        self.encounters.contains_key(&id)
    }

    pub fn put_record(&mut self, record: DexRecord) {
        self.records.entry(record.id).or_insert(record);
    }

    pub fn put_species(&mut self, species: SpeciesInfo) {
        self.species.entry(species.id).or_insert(species);
    }

    pub fn put_encounters(&mut self, id: u16, locations: Vec<EncounterLocation>) {
        self.encounters.entry(id).or_insert(locations);
    }

    /// Ids from the interval that are absent from the primary namespace,
    /// in ascending order.
    pub fn missing_records(&self, ids: RangeInclusive<u16>) -> Vec<u16> {
        ids.filter(|id| !self.records.contains_key(id)).collect()
    }

    /// Ids from the interval that are present, in ascending order.
    pub fn present_records(&self, ids: RangeInclusive<u16>) -> Vec<u16> {
        ids.filter(|id| self.records.contains_key(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u16, name: &str) -> DexRecord {
        DexRecord {
            id,
            name: name.to_string(),
            types: vec!["normal".to_string()],
            stats: Vec::new(),
            abilities: Vec::new(),
            height: None,
            weight: None,
            base_experience: None,
        }
    }

    #[test]
    fn absent_entries_read_as_none() {
        let cache = RecordCache::default();
        assert!(cache.record(1).is_none());
        assert!(cache.species(1).is_none());
        assert!(cache.encounters(1).is_none());
    }

    #[test]
    fn put_never_overwrites() {
        let mut cache = RecordCache::default();
        cache.put_record(record(1, "bulbasaur"));
        cache.put_record(record(1, "impostor"));
        assert_eq!(cache.record(1).unwrap().name, "bulbasaur");
    }

    #[test]
    fn missing_partitions_an_interval() {
        let mut cache = RecordCache::default();
        cache.put_record(record(2, "ivysaur"));
        cache.put_record(record(4, "charmander"));
        assert_eq!(cache.missing_records(1..=5), vec![1, 3, 5]);
        assert_eq!(cache.present_records(1..=5), vec![2, 4]);
    }
}
