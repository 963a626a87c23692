use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Instruments offered when registering a musician.
pub const INSTRUMENTS: [&str; 10] = [
    "Guitare",
    "Basse",
    "Batterie",
    "Piano",
    "Synthé",
    "Chant",
    "Saxophone",
    "Trompette",
    "Violon",
    "Flûte",
];

/// Display name of a musician, unique within a session.
///
/// It is the join key between the availability table and piece assignments,
/// so surrounding whitespace is stripped on construction.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MusicianId(String);

impl MusicianId {
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(name.as_ref().trim().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for MusicianId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MusicianId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for MusicianId {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl Borrow<str> for MusicianId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Musician {
    pub name: MusicianId,
    pub instruments: Vec<String>,
}

impl Musician {
    /// Builds a roster entry, dropping blank and repeated instruments.
    pub fn new(name: impl Into<MusicianId>, instruments: &[impl AsRef<str>]) -> Self {
        let mut kept: Vec<String> = Vec::with_capacity(instruments.len());
        for instrument in instruments {
            let instrument = instrument.as_ref().trim();
            if !instrument.is_empty() && !kept.iter().any(|k| k == instrument) {
                kept.push(instrument.to_string());
            }
        }
        Self {
            name: name.into(),
            instruments: kept,
        }
    }

    pub fn plays(&self, instrument: &str) -> bool {
        self.instruments
            .iter()
            .any(|i| i.eq_ignore_ascii_case(instrument.trim()))
    }

    /// Instruments that are not among [`INSTRUMENTS`], in roster order.
    pub fn unlisted_instruments(&self) -> Vec<&str> {
        self.instruments
            .iter()
            .map(String::as_str)
            .filter(|instrument| !is_listed_instrument(instrument))
            .collect()
    }
}

/// Case-insensitive lookup in [`INSTRUMENTS`].
pub fn is_listed_instrument(instrument: &str) -> bool {
    let instrument = instrument.trim().to_lowercase();
    INSTRUMENTS
        .iter()
        .any(|listed| listed.to_lowercase() == instrument)
}
