//! # Rehearsal Store
//!
//! Delimited-text persistence for the three tables of a rehearsal session:
//! the musician roster, weekly availability and piece assignments.
//!
//! A missing file reads as an empty table, and every save rewrites the whole
//! file.

pub mod models;
pub mod repositories;
pub mod schema;

pub mod mock;

use std::path::PathBuf;

use eyre::Result;
use rehearsal_core::{AvailabilityTable, Musician, PieceTable};

/// Storage seam used by the planner session.
pub trait RosterStore {
    fn load_musicians(&self) -> Result<Vec<Musician>>;

    fn save_musicians(&self, musicians: &[Musician]) -> Result<()>;

    fn load_availability(&self) -> Result<AvailabilityTable>;

    fn save_availability(&self, table: &AvailabilityTable) -> Result<()>;

    fn load_pieces(&self) -> Result<PieceTable>;

    fn save_pieces(&self, table: &PieceTable) -> Result<()>;
}

/// CSV files in one data directory.
#[derive(Debug, Clone)]
pub struct CsvStore {
    data_dir: PathBuf,
}

impl CsvStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn path(&self, file: &str) -> PathBuf {
        self.data_dir.join(file)
    }
}

impl RosterStore for CsvStore {
    fn load_musicians(&self) -> Result<Vec<Musician>> {
        repositories::musician::load_musicians(&self.path(schema::MUSICIANS_FILE))
    }

    fn save_musicians(&self, musicians: &[Musician]) -> Result<()> {
        repositories::musician::save_musicians(&self.path(schema::MUSICIANS_FILE), musicians)
    }

    fn load_availability(&self) -> Result<AvailabilityTable> {
        repositories::availability::load_availability(&self.path(schema::AVAILABILITY_FILE))
    }

    fn save_availability(&self, table: &AvailabilityTable) -> Result<()> {
        repositories::availability::save_availability(&self.path(schema::AVAILABILITY_FILE), table)
    }

    fn load_pieces(&self) -> Result<PieceTable> {
        repositories::piece::load_pieces(&self.path(schema::PIECES_FILE))
    }

    fn save_pieces(&self, table: &PieceTable) -> Result<()> {
        repositories::piece::save_pieces(&self.path(schema::PIECES_FILE), table)
    }
}
