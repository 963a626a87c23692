//! # Availability
//!
//! The raw availability table (one row per musician, one free-text cell per
//! day) and the index built from it.
//!
//! The index is an immutable snapshot. Editing availability means replacing a
//! cell in the table and building a new index; nothing is patched in place.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::day::Day;
use super::musician::MusicianId;
use super::time_slot::{TimeInterval, canonicalize, parse_cell};

/// One row of the availability table, cells kept as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRow {
    pub musician: MusicianId,
    /// Blank or missing cells mean "not available that day".
    pub cells: BTreeMap<Day, String>,
}

impl AvailabilityRow {
    pub fn new(musician: impl Into<MusicianId>) -> Self {
        Self {
            musician: musician.into(),
            cells: BTreeMap::new(),
        }
    }

    pub fn with_cell(mut self, day: Day, text: impl Into<String>) -> Self {
        self.cells.insert(day, text.into());
        self
    }

    pub fn cell(&self, day: Day) -> &str {
        self.cells.get(&day).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityTable {
    pub rows: Vec<AvailabilityRow>,
}

impl AvailabilityTable {
    pub fn new(rows: Vec<AvailabilityRow>) -> Self {
        Self { rows }
    }

    pub fn row(&self, musician: &MusicianId) -> Option<&AvailabilityRow> {
        self.rows.iter().find(|row| &row.musician == musician)
    }

    /// Replaces the whole cell of `musician` for `day`, adding the row if the
    /// musician has none yet.
    pub fn set_cell(&mut self, musician: &MusicianId, day: Day, text: impl Into<String>) {
        let text = text.into();
        match self.rows.iter_mut().find(|row| &row.musician == musician) {
            Some(row) => {
                row.cells.insert(day, text);
            }
            None => self
                .rows
                .push(AvailabilityRow::new(musician.clone()).with_cell(day, text)),
        }
    }
}

/// One musician's parsed availability.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    days: BTreeMap<Day, Vec<TimeInterval>>,
}

impl AvailabilityRecord {
    pub fn from_row(row: &AvailabilityRow) -> Self {
        let mut record = Self::default();
        for (day, text) in &row.cells {
            record.replace_day(*day, parse_cell(text));
        }
        record
    }

    /// Intervals for `day` in the order they were written.
    pub fn get(&self, day: Day) -> &[TimeInterval] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Replaces the full interval list of a day. An empty list removes the day.
    pub fn replace_day(&mut self, day: Day, intervals: Vec<TimeInterval>) {
        if intervals.is_empty() {
            self.days.remove(&day);
        } else {
            self.days.insert(day, intervals);
        }
    }

    /// Days with at least one interval, in week order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Days on which two of this musician's intervals overlap each other.
    pub fn overlapping_days(&self) -> Vec<Day> {
        self.days
            .iter()
            .filter(|(_, intervals)| {
                intervals.iter().enumerate().any(|(i, a)| {
                    intervals[i + 1..].iter().any(|b| a.overlaps(b))
                })
            })
            .map(|(day, _)| *day)
            .collect()
    }

    pub fn canonicalized(&self) -> Self {
        Self {
            days: self
                .days
                .iter()
                .map(|(day, intervals)| (*day, canonicalize(intervals)))
                .collect(),
        }
    }
}

/// Read-only lookup from (musician, day) to intervals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AvailabilityIndex {
    records: BTreeMap<MusicianId, AvailabilityRecord>,
}

impl AvailabilityIndex {
    /// Parses every cell of the table. Unparsable tokens are dropped; when a
    /// musician appears on several rows the last one wins.
    pub fn build(table: &AvailabilityTable) -> Self {
        let mut records = BTreeMap::new();
        for row in &table.rows {
            if row.musician.is_empty() {
                debug!("Skipping availability row without a musician");
                continue;
            }
            if records
                .insert(row.musician.clone(), AvailabilityRecord::from_row(row))
                .is_some()
            {
                warn!(musician = %row.musician, "Duplicate availability row, keeping the last one");
            }
        }
        Self { records }
    }

    /// Intervals of `musician` on `day`; empty when either is unknown.
    pub fn get(&self, musician: &MusicianId, day: Day) -> &[TimeInterval] {
        self.records
            .get(musician)
            .map(|record| record.get(day))
            .unwrap_or(&[])
    }

    pub fn record(&self, musician: &MusicianId) -> Option<&AvailabilityRecord> {
        self.records.get(musician)
    }

    pub fn musicians(&self) -> impl Iterator<Item = &MusicianId> {
        self.records.keys()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Copy of the index where each day's intervals are sorted and merged.
    pub fn canonicalized(&self) -> Self {
        Self {
            records: self
                .records
                .iter()
                .map(|(musician, record)| (musician.clone(), record.canonicalized()))
                .collect(),
        }
    }
}

pub fn build_index(table: &AvailabilityTable) -> AvailabilityIndex {
    AvailabilityIndex::build(table)
}
