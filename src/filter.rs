//! Session filtering.
//!
//! Narrows a session list before layout. All criteria are optional and
//! combine with AND; an empty filter keeps everything.
//!
//! ```
//! use lane_timetable::filter::CourseFilter;
//! use lane_timetable::models::CourseRecord;
//! use lane_timetable::normalize::normalize_records;
//!
//! let sessions = normalize_records(&[
//!     CourseRecord::new("CSX1001", "1", "Mon", "9:00", "10:30").with_prefix("CSX"),
//!     CourseRecord::new("ITX2001", "1", "Mon", "13:00", "14:30").with_prefix("ITX"),
//! ]);
//! let morning = CourseFilter::new().with_latest_end("12:00");
//! assert_eq!(morning.apply(&sessions).len(), 1);
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::Session;
use crate::normalize::time_to_minutes;

/// Conjunctive session filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CourseFilter {
    /// Exact subject prefix.
    pub prefix: Option<String>,
    /// Exact section label.
    pub section: Option<String>,
    /// Exact instructor name.
    pub instructor: Option<String>,
    /// Minimum seats left (inclusive).
    pub seat_min: Option<u32>,
    /// Maximum seats left (inclusive).
    pub seat_max: Option<u32>,
    /// Earliest allowed start (minutes).
    pub earliest_start: Option<i32>,
    /// Latest allowed end (minutes).
    pub latest_end: Option<i32>,
    /// Case-insensitive substring of course code or title.
    pub search: Option<String>,
}

/// Distinct values available for each filter field.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilterOptions {
    pub prefixes: Vec<String>,
    pub sections: Vec<String>,
    pub instructors: Vec<String>,
    /// Start and end times in chronological order.
    pub times: Vec<String>,
}

impl CourseFilter {
    /// Creates an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires a subject prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Requires a section label.
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Requires an instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Requires `min <= seats left <= max`.
    pub fn with_seats_left(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.seat_min = min;
        self.seat_max = max;
        self
    }

    /// Requires sessions to start at or after `time` ("H:MM").
    pub fn with_earliest_start(mut self, time: &str) -> Self {
        self.earliest_start = Some(time_to_minutes(time));
        self
    }

    /// Requires sessions to end at or before `time` ("H:MM").
    pub fn with_latest_end(mut self, time: &str) -> Self {
        self.latest_end = Some(time_to_minutes(time));
        self
    }

    /// Requires the code or title to contain `text`, ignoring case.
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    /// Whether no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a session satisfies every set criterion.
    pub fn matches(&self, session: &Session) -> bool {
        fn eq(want: &Option<String>, have: &str) -> bool {
            want.as_deref().map_or(true, |w| w.is_empty() || w == have)
        }

        if !eq(&self.prefix, &session.prefix)
            || !eq(&self.section, &session.section)
            || !eq(&self.instructor, &session.instructor)
        {
            return false;
        }
        if self.seat_min.is_some_and(|min| session.seat_left < min)
            || self.seat_max.is_some_and(|max| session.seat_left > max)
        {
            return false;
        }
        if self.earliest_start.is_some_and(|t| session.start() < t)
            || self.latest_end.is_some_and(|t| session.end() > t)
        {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                session.course_code.to_lowercase().contains(&q)
                    || session.course_title.to_lowercase().contains(&q)
            }
            _ => true,
        }
    }

    /// Matching sessions, in input order.
    pub fn apply<'a>(&self, sessions: &'a [Session]) -> Vec<&'a Session> {
        sessions.iter().filter(|s| self.matches(s)).collect()
    }

    /// Keeps only matching sessions.
    pub fn retain(&self, mut sessions: Vec<Session>) -> Vec<Session> {
        sessions.retain(|s| self.matches(s));
        sessions
    }

    /// Values to offer for each field given the current criteria.
    ///
    /// Prefixes come from all sessions so the prefix choice can always
    /// be changed; the other lists come from the filtered sessions.
    pub fn available_options(&self, sessions: &[Session]) -> FilterOptions {
        fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
            values
                .filter(|v| !v.is_empty())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(str::to_string)
                .collect()
        }

        let filtered = self.apply(sessions);

        let mut times: Vec<&str> = filtered
            .iter()
            .flat_map(|s| [s.start_time.as_str(), s.end_time.as_str()])
            .collect();
        times.sort_by_key(|t| time_to_minutes(t));
        times.dedup();

        FilterOptions {
            prefixes: distinct(sessions.iter().map(|s| s.prefix.as_str())),
            sections: distinct(filtered.iter().map(|s| s.section.as_str())),
            instructors: distinct(filtered.iter().map(|s| s.instructor.as_str())),
            times: times.into_iter().map(str::to_string).collect(),
        }
    }
}
