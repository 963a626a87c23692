use std::path::Path;

use eyre::{Result, WrapErr};
use rehearsal_core::Musician;
use tracing::info;

use super::{open_reader, open_writer};
use crate::models::CsvMusician;
use crate::schema::{INSTRUMENTS_COLUMN, NAME_COLUMN};

pub fn load_musicians(path: &Path) -> Result<Vec<Musician>> {
    let Some(mut reader) = open_reader(path)? else {
        return Ok(Vec::new());
    };

    let mut musicians = Vec::new();
    for (line, row) in reader.deserialize::<CsvMusician>().enumerate() {
        let row = row.wrap_err_with(|| format!("Invalid musician on line {}", line + 2))?;
        if row.name.trim().is_empty() {
            continue;
        }
        musicians.push(Musician::from(row));
    }

    info!(count = musicians.len(), "Loaded musicians");
    Ok(musicians)
}

pub fn save_musicians(path: &Path, musicians: &[Musician]) -> Result<()> {
    let mut writer = open_writer(path)?;

    if musicians.is_empty() {
        writer.write_record([NAME_COLUMN, INSTRUMENTS_COLUMN])?;
    }
    for musician in musicians {
        writer.serialize(CsvMusician::from(musician))?;
    }
    writer.flush()?;

    info!(count = musicians.len(), path = %path.display(), "Saved musicians");
    Ok(())
}
