//! # Planning Session
//!
//! A [`Planner`] owns the three tables of a band and the availability index
//! built from them. Queries only read the current snapshot. Every edit works on
//! a copy of the affected table, persists it, then swaps it in and rebuilds the
//! index, so a failed save leaves the session untouched.

use rehearsal_core::{
    AvailabilityIndex, AvailabilityTable, Day, Musician, MusicianId, PieceRequirement, PieceTable,
    RehearsalError, RehearsalResult, Resolver, TimeInterval, musicians_for_piece,
};
use rehearsal_store::RosterStore;
use tracing::{debug, info, warn};

use crate::config::ResolveOptions;
use crate::report::PieceWindows;

pub struct Planner<S> {
    store: S,
    options: ResolveOptions,
    musicians: Vec<Musician>,
    availability: AvailabilityTable,
    pieces: PieceTable,
    index: AvailabilityIndex,
}

impl<S: RosterStore> Planner<S> {
    /// Loads every table from `store` and builds the availability index.
    ///
    /// # Errors
    ///
    /// * `RehearsalError::Storage` - A table exists but cannot be read
    pub fn load(store: S, options: ResolveOptions) -> RehearsalResult<Self> {
        let musicians = store.load_musicians()?;
        let availability = store.load_availability()?;
        let pieces = store.load_pieces()?;
        let index = AvailabilityIndex::build(&availability);

        info!(
            musicians = musicians.len(),
            with_availability = index.len(),
            pieces = pieces.rows.len(),
            "Session loaded"
        );

        Ok(Self {
            store,
            options,
            musicians,
            availability,
            pieces,
            index,
        })
    }

    pub fn musicians(&self) -> &[Musician] {
        &self.musicians
    }

    pub fn availability(&self) -> &AvailabilityTable {
        &self.availability
    }

    pub fn pieces(&self) -> &PieceTable {
        &self.pieces
    }

    pub fn index(&self) -> &AvailabilityIndex {
        &self.index
    }

    /// Musicians assigned to `title`, in role column order.
    pub fn musicians_for_piece(&self, title: &str) -> RehearsalResult<Vec<MusicianId>> {
        musicians_for_piece(&self.pieces, title)
    }

    /// Common windows for one piece.
    ///
    /// # Errors
    ///
    /// * `RehearsalError::UnknownPiece` - No piece has this title
    pub fn resolve_piece(&self, title: &str) -> RehearsalResult<PieceWindows> {
        let row = self
            .pieces
            .find(title)
            .ok_or_else(|| RehearsalError::UnknownPiece(title.trim().to_string()))?;
        let requirement = PieceRequirement::from_row(row);
        let windows = self.resolver().resolve(&requirement.musicians);

        Ok(PieceWindows::new(requirement, windows))
    }

    /// Common windows for every piece, in table order.
    pub fn resolve_all(&self) -> Vec<PieceWindows> {
        self.resolver()
            .resolve_pieces(&self.pieces)
            .into_iter()
            .map(|(requirement, windows)| PieceWindows::new(requirement, windows))
            .collect()
    }

    /// Registers a musician.
    ///
    /// # Errors
    ///
    /// * `RehearsalError::Validation` - Blank name, no instrument, or name taken
    /// * `RehearsalError::Storage` - The roster cannot be saved
    pub fn add_musician(&mut self, name: &str, instruments: &[String]) -> RehearsalResult<()> {
        let musician = Musician::new(name, instruments);
        if musician.name.is_empty() || musician.instruments.is_empty() {
            return Err(RehearsalError::Validation(
                "A name and at least one instrument are required".to_string(),
            ));
        }
        if self.find_musician(&musician.name).is_some() {
            return Err(RehearsalError::Validation(format!(
                "Musician {} already exists",
                musician.name
            )));
        }

        for instrument in musician.unlisted_instruments() {
            warn!(musician = %musician.name, instrument, "Instrument not in the usual list");
        }

        let mut musicians = self.musicians.clone();
        musicians.push(musician);
        self.store.save_musicians(&musicians)?;
        self.musicians = musicians;

        info!(musician = %name.trim(), "Musician added");
        Ok(())
    }

    /// Replaces what `name` wrote for `day` and returns the intervals kept.
    ///
    /// # Errors
    ///
    /// * `RehearsalError::NotFound` - `name` is not on the roster
    /// * `RehearsalError::Storage` - The availability table cannot be saved
    pub fn set_availability(
        &mut self,
        name: &str,
        day: Day,
        cell: &str,
    ) -> RehearsalResult<Vec<TimeInterval>> {
        let musician = MusicianId::new(name);
        if self.find_musician(&musician).is_none() {
            return Err(RehearsalError::NotFound(format!("Musician {musician}")));
        }

        let mut availability = self.availability.clone();
        availability.set_cell(&musician, day, cell.trim());
        self.store.save_availability(&availability)?;
        self.availability = availability;
        self.index = AvailabilityIndex::build(&self.availability);

        let kept = self.index.get(&musician, day).to_vec();
        if kept.is_empty() && !cell.trim().is_empty() {
            warn!(%musician, %day, cell, "No usable slot in availability");
        }
        Ok(kept)
    }

    /// Adds a piece from `(role, musician)` pairs.
    ///
    /// # Errors
    ///
    /// * `RehearsalError::Validation` - Blank or duplicate title, blank or repeated role
    /// * `RehearsalError::NotFound` - A musician is not on the roster
    /// * `RehearsalError::Storage` - The piece table cannot be saved
    pub fn add_piece(
        &mut self,
        title: &str,
        assignments: &[(String, String)],
    ) -> RehearsalResult<PieceRequirement> {
        let title = title.trim();
        if title.is_empty() {
            return Err(RehearsalError::Validation("A title is required".to_string()));
        }
        if self.pieces.find(title).is_some() {
            return Err(RehearsalError::Validation(format!(
                "Piece {title} already exists"
            )));
        }

        let mut resolved: Vec<(String, MusicianId)> = Vec::with_capacity(assignments.len());
        for (role, name) in assignments {
            let role = role.trim();
            if role.is_empty() {
                return Err(RehearsalError::Validation(format!(
                    "Role missing for {}",
                    name.trim()
                )));
            }
            if resolved.iter().any(|(taken, _)| taken == role) {
                return Err(RehearsalError::Validation(format!(
                    "Role {role} assigned more than once"
                )));
            }
            let musician = MusicianId::new(name);
            let Some(player) = self.find_musician(&musician) else {
                return Err(RehearsalError::NotFound(format!("Musician {musician}")));
            };
            if !player.plays(role) {
                debug!(%musician, role, "Role is not among the musician's instruments");
            }
            resolved.push((role.to_string(), musician));
        }

        let mut pieces = self.pieces.clone();
        pieces.insert(title, &resolved);
        self.store.save_pieces(&pieces)?;
        self.pieces = pieces;

        info!(piece = title, musicians = resolved.len(), "Piece added");
        self.pieces
            .find(title)
            .map(PieceRequirement::from_row)
            .ok_or_else(|| RehearsalError::UnknownPiece(title.to_string()))
    }

    fn find_musician(&self, id: &MusicianId) -> Option<&Musician> {
        self.musicians.iter().find(|musician| &musician.name == id)
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.index)
            .strategy(self.options.strategy)
            .canonicalize(self.options.merge_overlaps)
    }
}
