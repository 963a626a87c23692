use std::path::Path;

use eyre::{Result, WrapErr, eyre};
use rehearsal_core::{AvailabilityRow, AvailabilityTable, Day};
use tracing::{debug, info};

use super::{open_reader, open_writer};
use crate::schema::{NAME_COLUMN, availability_headers};

/// Reads `disponibilites.csv`.
///
/// Columns are matched by header: the `Nom` column holds the musician and every
/// column named after a day holds that day's free text. Other columns are
/// ignored.
pub fn load_availability(path: &Path) -> Result<AvailabilityTable> {
    let Some(mut reader) = open_reader(path)? else {
        return Ok(AvailabilityTable::default());
    };

    let headers = reader.headers()?.clone();
    let name_column = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(NAME_COLUMN))
        .ok_or_else(|| eyre!("{} has no '{}' column", path.display(), NAME_COLUMN))?;

    let mut day_columns: Vec<(usize, Day)> = Vec::new();
    for (column, header) in headers.iter().enumerate() {
        if column == name_column {
            continue;
        }
        match header.parse::<Day>() {
            Ok(day) => day_columns.push((column, day)),
            Err(_) => debug!(header, "Ignoring non-day column"),
        }
    }

    let mut table = AvailabilityTable::default();
    for (line, record) in reader.records().enumerate() {
        let record = record.wrap_err_with(|| format!("Invalid availability on line {}", line + 2))?;
        let name = record.get(name_column).unwrap_or("").trim();
        if name.is_empty() {
            continue;
        }

        let mut row = AvailabilityRow::new(name);
        for (column, day) in &day_columns {
            let cell = record.get(*column).unwrap_or("");
            if !cell.trim().is_empty() {
                row = row.with_cell(*day, cell);
            }
        }
        table.rows.push(row);
    }

    info!(count = table.rows.len(), "Loaded availability");
    Ok(table)
}

pub fn save_availability(path: &Path, table: &AvailabilityTable) -> Result<()> {
    let mut writer = open_writer(path)?;

    writer.write_record(availability_headers())?;
    for row in &table.rows {
        let record = std::iter::once(row.musician.as_str())
            .chain(Day::ALL.iter().map(|day| row.cell(*day)));
        writer.write_record(record)?;
    }
    writer.flush()?;

    info!(count = table.rows.len(), path = %path.display(), "Saved availability");
    Ok(())
}
