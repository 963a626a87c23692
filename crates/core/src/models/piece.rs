use serde::{Deserialize, Serialize};

use super::musician::MusicianId;
use crate::errors::{RehearsalError, RehearsalResult};

/// Role columns used when no piece table exists yet.
pub const DEFAULT_ROLES: [&str; 5] = ["Chant", "Guitare", "Basse", "Batterie", "Clavier"];

/// A piece and the musician written in each role column (blank when unassigned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRow {
    pub title: String,
    /// Aligned with [`PieceTable::role_columns`].
    pub cells: Vec<String>,
}

impl PieceRow {
    pub fn new(title: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            title: title.into(),
            cells,
        }
    }

    /// Non-blank role cells, in column order.
    pub fn musicians(&self) -> Vec<MusicianId> {
        self.cells
            .iter()
            .map(MusicianId::new)
            .filter(|id| !id.is_empty())
            .collect()
    }

    fn matches(&self, title: &str) -> bool {
        self.title.trim() == title.trim()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceTable {
    pub role_columns: Vec<String>,
    pub rows: Vec<PieceRow>,
}

impl Default for PieceTable {
    fn default() -> Self {
        Self::new(DEFAULT_ROLES.iter().map(|r| r.to_string()).collect())
    }
}

impl PieceTable {
    pub fn new(role_columns: Vec<String>) -> Self {
        Self {
            role_columns,
            rows: Vec::new(),
        }
    }

    pub fn find(&self, title: &str) -> Option<&PieceRow> {
        self.rows.iter().find(|row| row.matches(title))
    }

    /// Adds a piece from `(role, musician)` pairs. Roles without a column get one.
    pub fn insert(&mut self, title: impl Into<String>, assignments: &[(String, MusicianId)]) {
        for (role, _) in assignments {
            if !self.role_columns.iter().any(|column| column == role) {
                self.role_columns.push(role.clone());
                for row in &mut self.rows {
                    row.cells.push(String::new());
                }
            }
        }

        let cells = self
            .role_columns
            .iter()
            .map(|column| {
                assignments
                    .iter()
                    .find(|(role, _)| role == column)
                    .map(|(_, musician)| musician.to_string())
                    .unwrap_or_default()
            })
            .collect();
        self.rows.push(PieceRow::new(title, cells));
    }

    pub fn requirements(&self) -> Vec<PieceRequirement> {
        self.rows.iter().map(PieceRequirement::from_row).collect()
    }
}

/// Musicians assigned to a piece, each listed once, in role column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceRequirement {
    pub title: String,
    pub musicians: Vec<MusicianId>,
}

impl PieceRequirement {
    pub fn from_row(row: &PieceRow) -> Self {
        let mut musicians: Vec<MusicianId> = Vec::new();
        for musician in row.musicians() {
            if !musicians.contains(&musician) {
                musicians.push(musician);
            }
        }
        Self {
            title: row.title.trim().to_string(),
            musicians,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.musicians.is_empty()
    }
}

/// Musicians assigned to `title`, in role column order.
///
/// # Errors
///
/// * `RehearsalError::UnknownPiece` - No row has this title
pub fn musicians_for_piece(table: &PieceTable, title: &str) -> RehearsalResult<Vec<MusicianId>> {
    table
        .find(title)
        .map(PieceRow::musicians)
        .ok_or_else(|| RehearsalError::UnknownPiece(title.trim().to_string()))
}
