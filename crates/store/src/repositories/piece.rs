use std::path::Path;

use eyre::{Result, WrapErr};
use rehearsal_core::{PieceRow, PieceTable};
use tracing::info;

use super::{open_reader, open_writer};
use crate::schema::TITLE_COLUMN;

/// Reads `morceaux.csv`. The `Titre` column (the first column when no header
/// matches) holds the title; every other column is a role.
pub fn load_pieces(path: &Path) -> Result<PieceTable> {
    let Some(mut reader) = open_reader(path)? else {
        return Ok(PieceTable::default());
    };

    let headers = reader.headers()?.clone();
    let title_column = headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(TITLE_COLUMN))
        .unwrap_or(0);
    let role_columns: Vec<usize> = (0..headers.len()).filter(|c| *c != title_column).collect();

    let mut table = PieceTable::new(
        role_columns
            .iter()
            .map(|column| headers[*column].trim().to_string())
            .collect(),
    );
    for (line, record) in reader.records().enumerate() {
        let record = record.wrap_err_with(|| format!("Invalid piece on line {}", line + 2))?;
        let title = record.get(title_column).unwrap_or("").trim();
        if title.is_empty() {
            continue;
        }

        let cells = role_columns
            .iter()
            .map(|column| record.get(*column).unwrap_or("").trim().to_string())
            .collect();
        table.rows.push(PieceRow::new(title, cells));
    }

    info!(count = table.rows.len(), "Loaded pieces");
    Ok(table)
}

pub fn save_pieces(path: &Path, table: &PieceTable) -> Result<()> {
    let mut writer = open_writer(path)?;

    let headers = std::iter::once(TITLE_COLUMN).chain(table.role_columns.iter().map(String::as_str));
    writer.write_record(headers)?;
    for row in &table.rows {
        let cells = (0..table.role_columns.len())
            .map(|column| row.cells.get(column).map(String::as_str).unwrap_or(""));
        writer.write_record(std::iter::once(row.title.as_str()).chain(cells))?;
    }
    writer.flush()?;

    info!(count = table.rows.len(), path = %path.display(), "Saved pieces");
    Ok(())
}
