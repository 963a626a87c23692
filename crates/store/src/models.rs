use rehearsal_core::{Musician, MusicianId};
use serde::{Deserialize, Serialize};

/// A line of `musiciens.csv`; instruments are stored comma-joined in one cell.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvMusician {
    #[serde(rename = "Nom")]
    pub name: String,
    #[serde(rename = "Instrument(s)", default)]
    pub instruments: String,
}

impl From<&Musician> for CsvMusician {
    fn from(musician: &Musician) -> Self {
        Self {
            name: musician.name.to_string(),
            instruments: musician.instruments.join(","),
        }
    }
}

impl From<CsvMusician> for Musician {
    fn from(row: CsvMusician) -> Self {
        let instruments: Vec<&str> = row.instruments.split(',').collect();
        Musician::new(MusicianId::new(&row.name), &instruments)
    }
}
