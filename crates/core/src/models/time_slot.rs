//! # Time Slots
//!
//! Parsing of free-text availability such as `"17h-19h, 20h-21h"` into
//! half-open hour intervals.
//!
//! Availability is typed by hand, so parsing a cell is best-effort: every
//! token that is not a valid `"<start>h-<end>h"` range is dropped and the rest
//! of the cell is kept. A cell without any valid token is simply "unavailable".

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::SlotParseError;

/// Last hour of the day; intervals may end at midnight but never cross it.
pub const MAX_HOUR: u8 = 24;

/// A half-open hour range `[start, end)` with `start < end <= 24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr", into = "IntervalRepr")]
pub struct TimeInterval {
    start: u8,
    end: u8,
}

#[derive(Serialize, Deserialize)]
struct IntervalRepr {
    start: u8,
    end: u8,
}

impl TimeInterval {
    pub fn new(start: u8, end: u8) -> Result<Self, SlotParseError> {
        if start > MAX_HOUR {
            return Err(SlotParseError::HourOutOfRange(start.into()));
        }
        if end > MAX_HOUR {
            return Err(SlotParseError::HourOutOfRange(end.into()));
        }
        if start >= end {
            return Err(SlotParseError::EmptyRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u8 {
        self.start
    }

    pub fn end(&self) -> u8 {
        self.end
    }

    /// True when both intervals share at least part of an hour.
    /// Touching endpoints (`17h-19h` and `19h-21h`) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        !(self.end <= other.start || other.end <= self.start)
    }

    pub fn intersection(&self, other: &TimeInterval) -> Option<TimeInterval> {
        TimeInterval::new(self.start.max(other.start), self.end.min(other.end)).ok()
    }

    pub fn contains(&self, other: &TimeInterval) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h-{}h", self.start, self.end)
    }
}

impl TryFrom<IntervalRepr> for TimeInterval {
    type Error = SlotParseError;

    fn try_from(repr: IntervalRepr) -> Result<Self, Self::Error> {
        TimeInterval::new(repr.start, repr.end)
    }
}

impl From<TimeInterval> for IntervalRepr {
    fn from(interval: TimeInterval) -> Self {
        IntervalRepr {
            start: interval.start,
            end: interval.end,
        }
    }
}

/// Symmetric overlap test; intervals that merely touch do not overlap.
pub fn slots_overlap(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.overlaps(b)
}

/// Parses one `"<start>h-<end>h"` token, e.g. `" 17h - 19h "`.
///
/// Every hour must carry its `h` marker, so `"17-19"` and `"19h30-21h"` are
/// rejected. Degenerate ranges (`"19h-19h"`, `"22h-2h"`) are rejected too.
pub fn parse_slot(text: &str) -> Result<TimeInterval, SlotParseError> {
    let token = text.trim();
    if token.is_empty() {
        return Err(SlotParseError::Empty);
    }

    let parts: Vec<&str> = token.split('-').collect();
    match parts.as_slice() {
        [start, end] => TimeInterval::new(parse_hour(start)?, parse_hour(end)?),
        [_] => Err(SlotParseError::MissingSeparator(token.to_string())),
        _ => Err(SlotParseError::WrongPartCount {
            token: token.to_string(),
            found: parts.len(),
        }),
    }
}

fn parse_hour(part: &str) -> Result<u8, SlotParseError> {
    let part = part.trim();
    let digits = part
        .strip_suffix('h')
        .or_else(|| part.strip_suffix('H'))
        .ok_or_else(|| SlotParseError::MissingHourMarker(part.to_string()))?
        .trim();

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(SlotParseError::NotAnHour(part.to_string()));
    }
    let hour: u32 = digits
        .parse()
        .map_err(|_| SlotParseError::NotAnHour(part.to_string()))?;
    if hour > u32::from(MAX_HOUR) {
        return Err(SlotParseError::HourOutOfRange(hour));
    }
    Ok(hour as u8)
}

/// Parses a whole availability cell, keeping every valid comma-separated token
/// in the order it was written.
pub fn parse_cell(text: &str) -> Vec<TimeInterval> {
    text.split(',')
        .filter(|token| !token.trim().is_empty())
        .filter_map(|token| match parse_slot(token) {
            Ok(interval) => Some(interval),
            Err(err) => {
                debug!(token = token.trim(), %err, "Discarding unparsable slot");
                None
            }
        })
        .collect()
}

/// Renders intervals back to the cell format accepted by [`parse_cell`].
pub fn format_cell(intervals: &[TimeInterval]) -> String {
    intervals
        .iter()
        .map(TimeInterval::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Sorts intervals and merges the ones that overlap.
///
/// Touching intervals are kept apart so that a cell reads back unchanged.
pub fn canonicalize(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    let mut sorted = intervals.to_vec();
    sorted.sort();

    let mut merged: Vec<TimeInterval> = Vec::with_capacity(sorted.len());
    for interval in sorted {
        match merged.last_mut() {
            Some(last) if last.overlaps(&interval) => {
                last.end = last.end.max(interval.end);
            }
            _ => merged.push(interval),
        }
    }
    merged
}
