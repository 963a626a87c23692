//! # Reports
//!
//! Text and JSON views of resolutions, as shown by the command line.

use eyre::Result;
use rehearsal_core::{Musician, MusicianId, PieceRequirement, Resolution, format_cell};
use serde::Serialize;

/// Common windows of one piece, with the line-up they were computed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceWindows {
    pub title: String,
    pub musicians: Vec<MusicianId>,
    pub windows: Resolution,
}

impl PieceWindows {
    pub fn new(requirement: PieceRequirement, windows: Resolution) -> Self {
        Self {
            title: requirement.title,
            musicians: requirement.musicians,
            windows,
        }
    }
}

/// ```text
/// Highway to Hell (Alice, Bob)
///   Lundi: 18h-19h
///   Jeudi: 17h-18h, 20h-22h
/// ```
pub fn render_piece(piece: &PieceWindows) -> String {
    let lineup = piece
        .musicians
        .iter()
        .map(MusicianId::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let header = format!("{} ({})\n", piece.title, lineup);
    let body: String = if piece.musicians.is_empty() {
        "  No musician assigned\n".to_string()
    } else if piece.windows.is_empty() {
        "  No common window\n".to_string()
    } else {
        piece
            .windows
            .days()
            .map(|day| format!("  {}: {}\n", day, format_cell(piece.windows.get(day))))
            .collect()
    };
    header + &body
}

pub fn render_pieces(pieces: &[PieceWindows]) -> String {
    pieces
        .iter()
        .map(render_piece)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_musicians(musicians: &[Musician]) -> String {
    if musicians.is_empty() {
        return "No musician registered\n".to_string();
    }

    let width = musicians
        .iter()
        .map(|musician| musician.name.as_str().chars().count())
        .max()
        .unwrap_or(0);
    musicians
        .iter()
        .map(|musician| {
            format!(
                "{:<width$}  {}\n",
                musician.name.as_str(),
                musician.instruments.join(", ")
            )
        })
        .collect()
}

/// One musician per line.
pub fn render_lineup(musicians: &[MusicianId]) -> String {
    musicians
        .iter()
        .map(|musician| format!("{musician}\n"))
        .collect()
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
