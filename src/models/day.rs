//! Weekday labels.
//!
//! Day labels in course data are free text ("Monday", "Mon", "MON").
//! [`Weekday`] recognizes the common spellings so day groups can be
//! ordered Sunday through Saturday.

use serde::{Deserialize, Serialize};

/// Day of the week, Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// All days, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Full English name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Three-letter abbreviation ("Mon").
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    /// Parses a day label, ignoring case and surrounding whitespace.
    ///
    /// Accepts full names and prefixes of at least three letters
    /// ("mon", "Thur", "WEDNES"). Returns `None` otherwise.
    pub fn parse(label: &str) -> Option<Weekday> {
        let label = label.trim().to_ascii_lowercase();
        if label.len() < 3 {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|d| d.name().to_ascii_lowercase().starts_with(&label))
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
