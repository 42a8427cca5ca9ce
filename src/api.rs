//! PokeAPI client: DTOs for the consumed fields and the fetch fan-out.
//!
//! Upstream optionality is resolved here, once, into the domain types in
//! `state`; nothing past this boundary touches raw JSON.

use std::sync::OnceLock;

use serde::Deserialize;
use tokio::task::JoinSet;

use crate::state::{
    AbilityEntry, DexRecord, EncounterLocation, EncounterSlot, EncounterVersion, SpeciesInfo,
    StatEntry,
};

const API_BASE: &str = "https://pokeapi.co/api/v2";
const SPRITE_HOME: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/home";
const SPRITE_FALLBACK: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Fixed fan-out width of the batch fetcher.
pub const CHUNK_SIZE: usize = 40;

#[derive(Clone, Debug, Deserialize)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonResponse {
    id: u16,
    name: String,
    types: Vec<PokemonTypeSlot>,
    stats: Vec<PokemonStatSlot>,
    abilities: Vec<PokemonAbilitySlot>,
    height: Option<u16>,
    weight: Option<u16>,
    base_experience: Option<u16>,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonTypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonStatSlot {
    base_stat: u16,
    stat: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct PokemonAbilitySlot {
    ability: NamedResource,
    #[serde(default)]
    is_hidden: bool,
}

#[derive(Clone, Debug, Deserialize)]
struct SpeciesResponse {
    id: u16,
    generation: Option<NamedResource>,
    #[serde(default)]
    is_legendary: bool,
    #[serde(default)]
    is_mythical: bool,
    #[serde(default)]
    flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    genera: Vec<GenusEntry>,
    habitat: Option<NamedResource>,
    shape: Option<NamedResource>,
    growth_rate: Option<NamedResource>,
    capture_rate: Option<u8>,
    base_happiness: Option<u8>,
    #[serde(default)]
    egg_groups: Vec<NamedResource>,
}

#[derive(Clone, Debug, Deserialize)]
struct FlavorTextEntry {
    flavor_text: String,
    language: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct GenusEntry {
    genus: String,
    language: NamedResource,
}

#[derive(Clone, Debug, Deserialize)]
struct EncounterLocationResponse {
    location_area: NamedResource,
    version_details: Vec<EncounterVersionResponse>,
}

#[derive(Clone, Debug, Deserialize)]
struct EncounterVersionResponse {
    version: NamedResource,
    encounter_details: Vec<EncounterSlotResponse>,
}

#[derive(Clone, Debug, Deserialize)]
struct EncounterSlotResponse {
    method: NamedResource,
    min_level: u8,
    max_level: u8,
    chance: u8,
}

pub async fn fetch_record(id: u16) -> Result<DexRecord, String> {
    let url = format!("{API_BASE}/pokemon/{id}");
    let response: PokemonResponse = fetch_json(&url)
        .await
        .map_err(|error| format!("pokemon {id}: {error}"))?;
    Ok(DexRecord {
        id: response.id,
        name: response.name,
        types: response
            .types
            .into_iter()
            .map(|slot| slot.type_info.name)
            .collect(),
        stats: response
            .stats
            .into_iter()
            .map(|slot| StatEntry {
                name: slot.stat.name,
                value: slot.base_stat,
            })
            .collect(),
        abilities: response
            .abilities
            .into_iter()
            .map(|slot| AbilityEntry {
                name: slot.ability.name,
                is_hidden: slot.is_hidden,
            })
            .collect(),
        height: response.height,
        weight: response.weight,
        base_experience: response.base_experience,
    })
}

/// Fetch one chunk of records concurrently. Any member failure fails the
/// whole chunk with the failing id's error; results come back ascending.
pub async fn fetch_record_chunk(ids: &[u16]) -> Result<Vec<DexRecord>, String> {
    let mut join_set = JoinSet::new();
    for id in ids {
        let id = *id;
        join_set.spawn(async move { fetch_record(id).await });
    }

    let mut records = Vec::with_capacity(ids.len());
    let mut failure: Option<String> = None;
    while let Some(result) = join_set.join_next().await {
        match result {
            Ok(Ok(record)) => records.push(record),
            Ok(Err(error)) => failure = Some(failure.unwrap_or(error)),
            Err(error) => failure = Some(failure.unwrap_or_else(|| error.to_string())),
        }
    }

    if let Some(error) = failure {
        return Err(error);
    }
    records.sort_by_key(|record| record.id);
    Ok(records)
}

pub async fn fetch_species(id: u16) -> Result<SpeciesInfo, String> {
    let url = format!("{API_BASE}/pokemon-species/{id}");
    let response: SpeciesResponse = fetch_json(&url)
        .await
        .map_err(|error| format!("species {id}: {error}"))?;
    // The dex traditionally shows the most recent localized entry.
    let flavor_text = response
        .flavor_text_entries
        .iter()
        .filter(|entry| entry.language.name == "en")
        .last()
        .map(|entry| sanitize_text(&entry.flavor_text));
    let genus = response
        .genera
        .iter()
        .find(|entry| entry.language.name == "en")
        .map(|entry| entry.genus.clone());
    Ok(SpeciesInfo {
        id: response.id,
        generation: response.generation.map(|gen| gen.name),
        is_legendary: response.is_legendary,
        is_mythical: response.is_mythical,
        flavor_text,
        genus,
        habitat: response.habitat.map(|habitat| habitat.name),
        shape: response.shape.map(|shape| shape.name),
        growth_rate: response.growth_rate.map(|rate| rate.name),
        capture_rate: response.capture_rate,
        base_happiness: response.base_happiness,
        egg_groups: response
            .egg_groups
            .into_iter()
            .map(|group| group.name)
            .collect(),
    })
}

pub async fn fetch_encounters(id: u16) -> Result<Vec<EncounterLocation>, String> {
    let url = format!("{API_BASE}/pokemon/{id}/encounters");
    let response: Vec<EncounterLocationResponse> = fetch_json(&url)
        .await
        .map_err(|error| format!("encounters {id}: {error}"))?;
    Ok(response
        .into_iter()
        .map(|location| EncounterLocation {
            location: location.location_area.name,
            version_details: location
                .version_details
                .into_iter()
                .map(|version| EncounterVersion {
                    version: version.version.name,
                    encounters: version
                        .encounter_details
                        .into_iter()
                        .map(|slot| EncounterSlot {
                            method: slot.method.name,
                            min_level: slot.min_level,
                            max_level: slot.max_level,
                            chance: slot.chance,
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect())
}

/// Home-style render of a pokemon, normal or shiny.
pub fn sprite_url(id: u16, shiny: bool) -> String {
    if shiny {
        format!("{SPRITE_HOME}/shiny/{id}.png")
    } else {
        format!("{SPRITE_HOME}/{id}.png")
    }
}

/// Classic sprite sheet, used when the home render does not exist.
pub fn sprite_fallback_url(id: u16) -> String {
    format!("{SPRITE_FALLBACK}/{id}.png")
}

fn sanitize_text(text: &str) -> String {
    text.replace(['\n', '\r', '\u{000C}'], " ")
}

async fn fetch_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let response = http_client()
        .get(url)
        .send()
        .await
        .map_err(|error| error.to_string())?;
    let response = response
        .error_for_status()
        .map_err(|error| error.to_string())?;
    response.json().await.map_err(|error| error.to_string())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}
