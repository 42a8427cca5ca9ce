//! Best-effort local persistence for the caught set and selected generation.
//!
//! Every operation here is total: a missing file, an unwritable directory,
//! or a corrupt blob yields the documented defaults instead of an error.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::dex;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefs {
    pub caught: HashMap<u16, bool>,
    pub generation_index: usize,
}

impl Prefs {
    /// Out-of-range persisted indices clamp to the first generation.
    fn normalized(mut self) -> Self {
        self.generation_index = dex::clamp_index(self.generation_index);
        self
    }
}

fn prefs_path() -> PathBuf {
    let base = dirs_next::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join("dextrack").join("prefs.json")
}

fn decode(json: &str) -> Prefs {
    serde_json::from_str::<Prefs>(json)
        .unwrap_or_default()
        .normalized()
}

pub async fn load_prefs() -> Prefs {
    match tokio::fs::read_to_string(prefs_path()).await {
        Ok(json) => decode(&json),
        Err(_) => Prefs::default(),
    }
}

pub async fn save_prefs(prefs: &Prefs) {
    let Ok(json) = serde_json::to_string_pretty(prefs) else {
        return;
    };
    let path = prefs_path();
    if let Some(parent) = path.parent() {
        let _ = tokio::fs::create_dir_all(parent).await;
    }
    let _ = tokio::fs::write(&path, json).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupt_blob_decodes_to_defaults() {
        assert_eq!(decode("not json at all"), Prefs::default());
        assert_eq!(decode("{\"caught\": 7}"), Prefs::default());
        assert_eq!(decode(""), Prefs::default());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let prefs = decode("{}");
        assert!(prefs.caught.is_empty());
        assert_eq!(prefs.generation_index, 0);
    }

    #[test]
    fn out_of_range_generation_clamps_to_zero() {
        let prefs = decode("{\"generation_index\": 42}");
        assert_eq!(prefs.generation_index, 0);
        let prefs = decode("{\"generation_index\": 8}");
        assert_eq!(prefs.generation_index, 8);
    }

    #[test]
    fn round_trip_is_stable() {
        let mut prefs = Prefs::default();
        prefs.caught.insert(1, true);
        prefs.caught.insert(151, false);
        prefs.generation_index = 3;

        let json = serde_json::to_string(&prefs).unwrap();
        assert_eq!(decode(&json), prefs);

        let empty = Prefs::default();
        let json = serde_json::to_string(&empty).unwrap();
        assert_eq!(decode(&json), empty);
    }
}
