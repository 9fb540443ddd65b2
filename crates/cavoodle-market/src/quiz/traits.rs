use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Behavioral axes accumulated from quiz answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trait {
    Couch,
    Zoomies,
    Treat,
    Sock,
    Bark,
    Velcro,
    Garden,
    Drama,
    Energy,
    Sass,
    Chill,
}

const TRAIT_COUNT: usize = 11;

impl Trait {
    pub const ALL: [Trait; TRAIT_COUNT] = [
        Trait::Couch,
        Trait::Zoomies,
        Trait::Treat,
        Trait::Sock,
        Trait::Bark,
        Trait::Velcro,
        Trait::Garden,
        Trait::Drama,
        Trait::Energy,
        Trait::Sass,
        Trait::Chill,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Trait::Couch => "couch",
            Trait::Zoomies => "zoomies",
            Trait::Treat => "treat",
            Trait::Sock => "sock",
            Trait::Bark => "bark",
            Trait::Velcro => "velcro",
            Trait::Garden => "garden",
            Trait::Drama => "drama",
            Trait::Energy => "energy",
            Trait::Sass => "sass",
            Trait::Chill => "chill",
        }
    }

    /// Exact, case-sensitive lookup of a weight-map key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.key() == key)
    }

    fn index(self) -> usize {
        self as usize
    }
}

/// Per-trait running totals. The key set is always the eleven known traits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraitScores {
    totals: [u32; TRAIT_COUNT],
}

impl TraitScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: Trait) -> u32 {
        self.totals[kind.index()]
    }

    pub fn add(&mut self, kind: Trait, weight: u32) {
        let slot = &mut self.totals[kind.index()];
        *slot = slot.saturating_add(weight);
    }

    /// Applies an option's open-keyed weight map, returning the number of keys
    /// that were not known traits and therefore ignored.
    pub fn add_weights(&mut self, weights: &BTreeMap<String, u32>) -> usize {
        let mut dropped = 0;
        for (key, weight) in weights {
            match Trait::from_key(key) {
                Some(kind) => self.add(kind, *weight),
                None => dropped += 1,
            }
        }
        dropped
    }

    pub fn iter(&self) -> impl Iterator<Item = (Trait, u32)> + '_ {
        Trait::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    pub fn is_empty(&self) -> bool {
        self.totals.iter().all(|total| *total == 0)
    }
}

impl Serialize for TraitScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TRAIT_COUNT))?;
        for (kind, total) in self.iter() {
            map.serialize_entry(kind.key(), &total)?;
        }
        map.end()
    }
}
