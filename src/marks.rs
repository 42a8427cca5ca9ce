//! Origin mark derivation.
//!
//! An origin mark is the icon a pokemon carries based on which game it was
//! caught in. Marks are never stored; they are recomputed from species data
//! and encounter data each time a detail view needs them.

use ratatui::style::Color;

use crate::state::{EncounterLocation, SpeciesInfo};

/// Pokemon GO covers the national dex up to the end of Gen VIII.
pub const GO_MAX_ID: u16 = 905;

#[derive(Debug, PartialEq)]
pub struct OriginMark {
    pub id: &'static str,
    pub symbol: &'static str,
    pub name: &'static str,
    pub color: Color,
    /// Human-readable list of the games this mark comes from.
    pub games: &'static str,
    /// Game versions whose encounter data implies this mark.
    pub versions: &'static [&'static str],
}

/// Catalog order is the canonical display order.
pub const ORIGIN_MARKS: [OriginMark; 10] = [
    OriginMark {
        id: "gameboy",
        symbol: "GB",
        name: "Game Boy",
        color: Color::Rgb(139, 172, 15),
        games: "RBY / GSC (Virtual Console)",
        versions: &["red", "blue", "yellow", "gold", "silver", "crystal"],
    },
    OriginMark {
        id: "go",
        symbol: "G",
        name: "GO",
        color: Color::Rgb(26, 115, 232),
        games: "Pokemon GO",
        versions: &[],
    },
    OriginMark {
        id: "letsgo",
        symbol: "*",
        name: "Let's Go",
        color: Color::Rgb(245, 218, 38),
        games: "Let's Go Pikachu / Eevee",
        versions: &["lets-go-pikachu", "lets-go-eevee"],
    },
    OriginMark {
        id: "pentagon",
        symbol: "⬟",
        name: "Kalos",
        color: Color::Rgb(2, 93, 166),
        games: "X / Y, Omega Ruby / Alpha Sapphire",
        versions: &["x", "y", "omega-ruby", "alpha-sapphire"],
    },
    OriginMark {
        id: "clover",
        symbol: "♣",
        name: "Alola",
        color: Color::Rgb(245, 156, 26),
        games: "Sun / Moon, Ultra Sun / Ultra Moon",
        versions: &["sun", "moon", "ultra-sun", "ultra-moon"],
    },
    OriginMark {
        id: "galar",
        symbol: "◉",
        name: "Galar",
        color: Color::Rgb(0, 161, 233),
        games: "Sword / Shield",
        versions: &["sword", "shield"],
    },
    OriginMark {
        id: "sinnoh",
        symbol: "◆",
        name: "Sinnoh",
        color: Color::Rgb(170, 170, 255),
        games: "Brilliant Diamond / Shining Pearl",
        versions: &["brilliant-diamond", "shining-pearl"],
    },
    OriginMark {
        id: "hisui",
        symbol: "⬡",
        name: "Hisui",
        color: Color::Rgb(51, 109, 181),
        games: "Legends: Arceus",
        versions: &["legends-arceus"],
    },
    OriginMark {
        id: "paldea",
        symbol: "✦",
        name: "Paldea",
        color: Color::Rgb(243, 77, 54),
        games: "Scarlet / Violet",
        versions: &["scarlet", "violet"],
    },
    OriginMark {
        id: "lumiose",
        symbol: "▲",
        name: "Lumiose",
        color: Color::Rgb(122, 38, 176),
        games: "Legends: Z-A",
        versions: &["legends-z-a"],
    },
];

/// Native marks implied by a pokemon's generation. Gen III-V games predate
/// origin marks, so those generations map to nothing.
fn generation_marks(generation: &str) -> &'static [&'static str] {
    match generation {
        "generation-i" | "generation-ii" => &["gameboy"],
        "generation-vi" => &["pentagon"],
        "generation-vii" => &["clover"],
        "generation-viii" => &["galar", "sinnoh", "hisui"],
        "generation-ix" => &["paldea", "lumiose"],
        _ => &[],
    }
}

/// Derive the ordered set of origin marks for one pokemon. Pure and total:
/// a missing species or encounter list simply contributes nothing.
pub fn derive_marks(
    species: Option<&SpeciesInfo>,
    encounters: Option<&[EncounterLocation]>,
) -> Vec<&'static OriginMark> {
    let mut mark_ids: Vec<&str> = Vec::new();
    let mut accumulate = |id: &'static str| {
        if !mark_ids.contains(&id) {
            mark_ids.push(id);
        }
    };

    if let Some(generation) = species.and_then(|info| info.generation.as_deref()) {
        for id in generation_marks(generation) {
            accumulate(id);
        }
    }

    if let Some(locations) = encounters {
        for location in locations {
            for version_detail in &location.version_details {
                for mark in &ORIGIN_MARKS {
                    if mark.versions.contains(&version_detail.version.as_str()) {
                        accumulate(mark.id);
                    }
                }
            }
        }
    }

    if let Some(id) = species.map(|info| info.id) {
        if id <= GO_MAX_ID {
            accumulate("go");
        }
    }

    ORIGIN_MARKS
        .iter()
        .filter(|mark| mark_ids.contains(&mark.id))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EncounterVersion;

    fn species(id: u16, generation: &str) -> SpeciesInfo {
        SpeciesInfo {
            id,
            generation: Some(generation.to_string()),
            ..SpeciesInfo::default()
        }
    }

    fn encounter(versions: &[&str]) -> Vec<EncounterLocation> {
        vec![EncounterLocation {
            location: "viridian-forest-area".to_string(),
            version_details: versions
                .iter()
                .map(|version| EncounterVersion {
                    version: version.to_string(),
                    encounters: Vec::new(),
                })
                .collect(),
        }]
    }

    #[test]
    fn pikachu_gets_gameboy_then_go() {
        let info = species(25, "generation-i");
        let locations = encounter(&["yellow"]);
        let marks = derive_marks(Some(&info), Some(&locations));
        let ids: Vec<&str> = marks.iter().map(|mark| mark.id).collect();
        assert_eq!(ids, vec!["gameboy", "go"]);
    }

    #[test]
    fn gen_three_through_five_above_go_cutoff_has_no_marks() {
        for generation in ["generation-iii", "generation-iv", "generation-v"] {
            let info = species(1000, generation);
            let marks = derive_marks(Some(&info), Some(&[]));
            assert!(marks.is_empty(), "{generation} should have no marks");
        }
    }

    #[test]
    fn missing_inputs_contribute_nothing() {
        assert!(derive_marks(None, None).is_empty());

        // Encounters alone still accumulate version marks.
        let locations = encounter(&["sword"]);
        let ids: Vec<&str> = derive_marks(None, Some(&locations))
            .iter()
            .map(|mark| mark.id)
            .collect();
        assert_eq!(ids, vec!["galar"]);
    }

    #[test]
    fn output_follows_catalog_order_regardless_of_accumulation_order() {
        // Encounter marks land before the generation mark is considered,
        // yet gameboy still displays first.
        let info = species(25, "generation-i");
        let locations = encounter(&["scarlet", "yellow"]);
        let ids: Vec<&str> = derive_marks(Some(&info), Some(&locations))
            .iter()
            .map(|mark| mark.id)
            .collect();
        assert_eq!(ids, vec!["gameboy", "go", "paldea"]);
    }

    #[test]
    fn derivation_is_deterministic() {
        let info = species(810, "generation-viii");
        let locations = encounter(&["sword", "shield"]);
        let first: Vec<&str> = derive_marks(Some(&info), Some(&locations))
            .iter()
            .map(|mark| mark.id)
            .collect();
        let second: Vec<&str> = derive_marks(Some(&info), Some(&locations))
            .iter()
            .map(|mark| mark.id)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["go", "galar", "sinnoh", "hisui"]);
    }

    #[test]
    fn go_cutoff_is_inclusive() {
        let at_cutoff = species(905, "generation-viii");
        let ids: Vec<&str> = derive_marks(Some(&at_cutoff), None)
            .iter()
            .map(|mark| mark.id)
            .collect();
        assert!(ids.contains(&"go"));

        let past_cutoff = species(906, "generation-ix");
        let ids: Vec<&str> = derive_marks(Some(&past_cutoff), None)
            .iter()
            .map(|mark| mark.id)
            .collect();
        assert!(!ids.contains(&"go"));
    }
}
