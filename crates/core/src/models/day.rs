use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RehearsalError;

/// A rehearsal day in the fixed weekly cycle.
///
/// Column headers in the availability table use the French labels
/// (`Lundi` .. `Samedi`); parsing also accepts the English names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Day {
    /// All days in week order.
    pub const ALL: [Day; 6] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "Lundi",
            Day::Tuesday => "Mardi",
            Day::Wednesday => "Mercredi",
            Day::Thursday => "Jeudi",
            Day::Friday => "Vendredi",
            Day::Saturday => "Samedi",
        }
    }

    fn english(self) -> &'static str {
        match self {
            Day::Monday => "monday",
            Day::Tuesday => "tuesday",
            Day::Wednesday => "wednesday",
            Day::Thursday => "thursday",
            Day::Friday => "friday",
            Day::Saturday => "saturday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Day {
    type Err = RehearsalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Day::ALL
            .into_iter()
            .find(|day| day.label().to_lowercase() == wanted || day.english() == wanted)
            .ok_or_else(|| RehearsalError::Validation(format!("Unknown day: {}", s.trim())))
    }
}
