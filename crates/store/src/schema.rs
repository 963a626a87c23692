use std::fs;
use std::path::Path;

use eyre::{Result, WrapErr};
use rehearsal_core::{AvailabilityTable, Day, PieceTable};
use tracing::info;

pub const MUSICIANS_FILE: &str = "musiciens.csv";
pub const AVAILABILITY_FILE: &str = "disponibilites.csv";
pub const PIECES_FILE: &str = "morceaux.csv";

/// Identity column of the musician and availability tables.
pub const NAME_COLUMN: &str = "Nom";
pub const INSTRUMENTS_COLUMN: &str = "Instrument(s)";
/// Title column of the piece table; every other column is a role.
pub const TITLE_COLUMN: &str = "Titre";

/// Header row of the availability table: the name, then one column per day.
pub fn availability_headers() -> Vec<&'static str> {
    std::iter::once(NAME_COLUMN)
        .chain(Day::ALL.iter().map(|day| day.label()))
        .collect()
}

/// Creates the data directory and writes empty tables for missing files.
pub fn initialize_data_dir(data_dir: &Path) -> Result<()> {
    info!(data_dir = %data_dir.display(), "Initializing data directory...");

    fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("Cannot create data directory {}", data_dir.display()))?;

    let musicians = data_dir.join(MUSICIANS_FILE);
    if !musicians.exists() {
        crate::repositories::musician::save_musicians(&musicians, &[])?;
    }

    let availability = data_dir.join(AVAILABILITY_FILE);
    if !availability.exists() {
        crate::repositories::availability::save_availability(
            &availability,
            &AvailabilityTable::default(),
        )?;
    }

    let pieces = data_dir.join(PIECES_FILE);
    if !pieces.exists() {
        crate::repositories::piece::save_pieces(&pieces, &PieceTable::default())?;
    }

    info!("Data directory initialized successfully.");
    Ok(())
}
