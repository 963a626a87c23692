//! # Rehearsal Core
//!
//! Availability intersection for rehearsal planning. Free-text slots such as
//! `"17h-19h, 20h-21h"` are parsed into hour intervals, indexed per musician and
//! per day, and intersected to find the windows where a whole line-up can play
//! together.
//!
//! Everything here is synchronous and works on immutable snapshots; the session
//! layer rebuilds the index after each edit.

pub mod errors;
pub mod models;
pub mod resolver;

pub use errors::{RehearsalError, RehearsalResult, SlotParseError};
pub use models::availability::{
    AvailabilityIndex, AvailabilityRecord, AvailabilityRow, AvailabilityTable, build_index,
};
pub use models::day::Day;
pub use models::musician::{INSTRUMENTS, Musician, MusicianId, is_listed_instrument};
pub use models::piece::{PieceRequirement, PieceRow, PieceTable, musicians_for_piece};
pub use models::time_slot::{
    TimeInterval, canonicalize, format_cell, parse_cell, parse_slot, slots_overlap,
};
pub use resolver::{CommonWindow, Resolution, ResolveStrategy, Resolver, resolve, resolve_pieces};
