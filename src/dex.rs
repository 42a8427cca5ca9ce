//! Static partition of the national dex into nine generation intervals.

/// One generation of the national dex: a closed id interval plus labels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Generation {
    pub label: &'static str,
    pub region: &'static str,
    pub start: u16,
    pub end: u16,
}

impl Generation {
    pub fn ids(&self) -> std::ops::RangeInclusive<u16> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn contains(&self, id: u16) -> bool {
        id >= self.start && id <= self.end
    }
}

/// Intervals are contiguous and non-overlapping; this table is authoritative
/// for which generation an id belongs to.
pub const GENERATIONS: [Generation; 9] = [
    Generation { label: "I", region: "Kanto", start: 1, end: 151 },
    Generation { label: "II", region: "Johto", start: 152, end: 251 },
    Generation { label: "III", region: "Hoenn", start: 252, end: 386 },
    Generation { label: "IV", region: "Sinnoh", start: 387, end: 493 },
    Generation { label: "V", region: "Unova", start: 494, end: 649 },
    Generation { label: "VI", region: "Kalos", start: 650, end: 721 },
    Generation { label: "VII", region: "Alola", start: 722, end: 809 },
    Generation { label: "VIII", region: "Galar", start: 810, end: 905 },
    Generation { label: "IX", region: "Paldea", start: 906, end: 1025 },
];

pub const TOTAL_RECORDS: u16 = 1025;

/// Clamp a persisted (possibly stale) generation index to a valid one.
pub fn clamp_index(index: usize) -> usize {
    if index < GENERATIONS.len() { index } else { 0 }
}

pub fn generation_of(id: u16) -> Option<usize> {
    GENERATIONS.iter().position(|gen| gen.contains(id))
}
