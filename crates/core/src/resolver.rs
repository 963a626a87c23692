//! # Common-Window Resolver
//!
//! Finds, day by day, the hours during which every musician of a line-up is
//! available.
//!
//! ## Seeded intersection
//!
//! The default strategy anchors candidates on the first musician:
//!
//! 1. A day where any musician has no interval at all is skipped.
//! 2. Each interval of the first musician is a candidate window.
//! 3. The candidate is intersected with every other musician in turn. Among
//!    that musician's intervals, all the ones overlapping the candidate are
//!    collected and the candidate shrinks to the latest start and earliest end
//!    among them. No overlap, or nothing left after shrinking, drops the
//!    candidate.
//! 4. Surviving candidates are kept in the order of the first musician's
//!    intervals.
//!
//! A window is never wider than the narrowest interval that produced it.
//! Because a candidate is shrunk against all overlapping intervals at once, a
//! musician with two separate intervals inside one candidate eliminates it.
//!
//! ## Sweep
//!
//! [`ResolveStrategy::Sweep`] cuts the day at every interval boundary, keeps
//! the pieces covered by everybody and glues adjacent pieces back together.
//! It returns the exact intersection, whatever the shape of each musician's
//! intervals.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::errors::RehearsalError;
use crate::models::availability::AvailabilityIndex;
use crate::models::day::Day;
use crate::models::musician::MusicianId;
use crate::models::piece::{PieceRequirement, PieceTable};
use crate::models::time_slot::{TimeInterval, canonicalize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolveStrategy {
    /// Candidates anchored on the first musician's intervals.
    #[default]
    Seeded,
    /// Exact intersection over all interval boundaries.
    Sweep,
}

impl FromStr for ResolveStrategy {
    type Err = RehearsalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "seeded" => Ok(ResolveStrategy::Seeded),
            "sweep" => Ok(ResolveStrategy::Sweep),
            other => Err(RehearsalError::Validation(format!(
                "Unknown resolve strategy: {other} (expected 'seeded' or 'sweep')"
            ))),
        }
    }
}

/// A window on one day where the whole line-up can rehearse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonWindow {
    pub day: Day,
    pub interval: TimeInterval,
}

/// Common windows per day. Days without any window are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resolution {
    days: BTreeMap<Day, Vec<TimeInterval>>,
}

impl Resolution {
    pub fn get(&self, day: Day) -> &[TimeInterval] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with at least one window, in week order.
    pub fn days(&self) -> impl Iterator<Item = Day> + '_ {
        self.days.keys().copied()
    }

    pub fn windows(&self) -> impl Iterator<Item = CommonWindow> + '_ {
        self.days.iter().flat_map(|(day, intervals)| {
            intervals.iter().map(|interval| CommonWindow {
                day: *day,
                interval: *interval,
            })
        })
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    fn insert(&mut self, day: Day, windows: Vec<TimeInterval>) {
        if !windows.is_empty() {
            self.days.insert(day, windows);
        }
    }
}

/// Resolves line-ups against one availability snapshot.
///
/// # Example
///
/// ```
/// use rehearsal_core::{AvailabilityIndex, AvailabilityRow, AvailabilityTable, Day, MusicianId};
/// use rehearsal_core::{ResolveStrategy, Resolver};
///
/// let table = AvailabilityTable::new(vec![
///     AvailabilityRow::new("Alice").with_cell(Day::Monday, "17h-20h"),
///     AvailabilityRow::new("Bob").with_cell(Day::Monday, "18h-19h"),
/// ]);
/// let index = AvailabilityIndex::build(&table);
/// let lineup = [MusicianId::from("Alice"), MusicianId::from("Bob")];
///
/// let resolution = Resolver::new(&index)
///     .strategy(ResolveStrategy::Sweep)
///     .resolve(&lineup);
/// assert_eq!(resolution.get(Day::Monday)[0].to_string(), "18h-19h");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    index: &'a AvailabilityIndex,
    strategy: ResolveStrategy,
    canonicalize: bool,
}

impl<'a> Resolver<'a> {
    pub fn new(index: &'a AvailabilityIndex) -> Self {
        Self {
            index,
            strategy: ResolveStrategy::default(),
            canonicalize: false,
        }
    }

    pub fn strategy(mut self, strategy: ResolveStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Merge overlapping intervals of the same musician before intersecting.
    pub fn canonicalize(mut self, canonicalize: bool) -> Self {
        self.canonicalize = canonicalize;
        self
    }

    /// Common windows for `musicians`. Repeated ids count once; the first
    /// occurrence fixes the order. An empty line-up yields an empty result.
    pub fn resolve(&self, musicians: &[MusicianId]) -> Resolution {
        let lineup = dedup_lineup(musicians);
        let mut resolution = Resolution::default();
        if lineup.is_empty() {
            return resolution;
        }

        if !self.canonicalize {
            self.flag_overlapping_intervals(&lineup);
        }

        for day in Day::ALL {
            let lists: Vec<Cow<'_, [TimeInterval]>> = lineup
                .iter()
                .map(|musician| self.intervals(musician, day))
                .collect();

            if let Some(missing) = lists.iter().position(|list| list.is_empty()) {
                debug!(%day, musician = %lineup[missing], "No availability, skipping day");
                continue;
            }

            let windows = match self.strategy {
                ResolveStrategy::Seeded => seeded_windows(&lists),
                ResolveStrategy::Sweep => sweep_windows(&lists),
            };
            debug!(%day, windows = windows.len(), "Resolved day");
            resolution.insert(day, windows);
        }

        resolution
    }

    /// Resolves every piece of the table, in table order.
    pub fn resolve_pieces(&self, pieces: &PieceTable) -> Vec<(PieceRequirement, Resolution)> {
        pieces
            .requirements()
            .into_iter()
            .map(|requirement| {
                let resolution = self.resolve(&requirement.musicians);
                (requirement, resolution)
            })
            .collect()
    }

    fn intervals(&self, musician: &MusicianId, day: Day) -> Cow<'a, [TimeInterval]> {
        let intervals = self.index.get(musician, day);
        if self.canonicalize {
            Cow::Owned(canonicalize(intervals))
        } else {
            Cow::Borrowed(intervals)
        }
    }

    fn flag_overlapping_intervals(&self, lineup: &[&MusicianId]) {
        for musician in lineup {
            let Some(record) = self.index.record(musician) else {
                continue;
            };
            for day in record.overlapping_days() {
                warn!(
                    musician = %musician,
                    %day,
                    "Overlapping intervals for one musician; windows may be missed"
                );
            }
        }
    }
}

/// Seeded intersection over the default resolver.
pub fn resolve(musicians: &[MusicianId], index: &AvailabilityIndex) -> Resolution {
    Resolver::new(index).resolve(musicians)
}

/// Seeded resolution of every piece in `pieces`.
pub fn resolve_pieces(
    pieces: &PieceTable,
    index: &AvailabilityIndex,
) -> Vec<(PieceRequirement, Resolution)> {
    Resolver::new(index).resolve_pieces(pieces)
}

fn dedup_lineup(musicians: &[MusicianId]) -> Vec<&MusicianId> {
    let mut lineup: Vec<&MusicianId> = Vec::with_capacity(musicians.len());
    for musician in musicians {
        if !lineup.contains(&musician) {
            lineup.push(musician);
        }
    }
    lineup
}

fn seeded_windows(lists: &[Cow<'_, [TimeInterval]>]) -> Vec<TimeInterval> {
    let Some((seed, rest)) = lists.split_first() else {
        return Vec::new();
    };

    seed.iter()
        .filter_map(|candidate| {
            rest.iter()
                .try_fold(*candidate, |window, intervals| narrow(window, intervals))
        })
        .collect()
}

/// Shrinks `window` to the latest start and earliest end of the intervals
/// overlapping it.
fn narrow(window: TimeInterval, intervals: &[TimeInterval]) -> Option<TimeInterval> {
    let mut overlapping = intervals.iter().filter(|i| i.overlaps(&window)).peekable();
    overlapping.peek()?;

    let (start, end) = overlapping.fold((window.start(), window.end()), |(start, end), i| {
        (start.max(i.start()), end.min(i.end()))
    });
    TimeInterval::new(start, end).ok()
}

fn sweep_windows(lists: &[Cow<'_, [TimeInterval]>]) -> Vec<TimeInterval> {
    let mut boundaries: Vec<u8> = lists
        .iter()
        .flat_map(|list| list.iter().flat_map(|i| [i.start(), i.end()]))
        .collect();
    boundaries.sort_unstable();
    boundaries.dedup();

    let mut windows: Vec<TimeInterval> = Vec::new();
    for pair in boundaries.windows(2) {
        let Ok(segment) = TimeInterval::new(pair[0], pair[1]) else {
            continue;
        };
        let covered = lists
            .iter()
            .all(|list| list.iter().any(|i| i.contains(&segment)));
        if !covered {
            continue;
        }

        match windows.last_mut() {
            Some(last) if last.end() == segment.start() => {
                if let Ok(joined) = TimeInterval::new(last.start(), segment.end()) {
                    *last = joined;
                }
            }
            _ => windows.push(segment),
        }
    }
    windows
}
