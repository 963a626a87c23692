pub mod availability;
pub mod musician;
pub mod piece;

use std::fs::{self, File};
use std::path::Path;

use eyre::{Result, WrapErr};
use tracing::info;

/// Opens a CSV file for reading, or `None` when it does not exist yet.
pub(crate) fn open_reader(path: &Path) -> Result<Option<csv::Reader<File>>> {
    if !path.exists() {
        info!(path = %path.display(), "No table file yet, starting empty");
        return Ok(None);
    }

    let reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path)
        .wrap_err_with(|| format!("Cannot open {}", path.display()))?;
    Ok(Some(reader))
}

/// Opens a CSV file for writing, creating its directory if needed.
pub(crate) fn open_writer(path: &Path) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .wrap_err_with(|| format!("Cannot create directory {}", parent.display()))?;
    }

    csv::Writer::from_path(path).wrap_err_with(|| format!("Cannot write {}", path.display()))
}
