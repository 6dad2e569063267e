//! Course record and session models.
//!
//! A [`CourseRecord`] is one row of the upstream course table, with
//! free-text times. A [`Session`] is the normalized form: numeric
//! minute interval, guaranteed `start < end`, and a non-empty day.

use serde::{Deserialize, Serialize};

use super::MinuteInterval;

/// A raw course-section meeting as delivered by the data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CourseRecord {
    /// Course code (e.g., "CSX3001").
    pub course_code: String,
    /// Subject prefix (e.g., "CSX").
    pub prefix: String,
    /// Course title.
    pub course_title: String,
    /// Section label.
    pub section: String,
    /// Total seats.
    pub seat_limit: u32,
    /// Seats taken.
    pub seat_used: u32,
    /// Seats remaining.
    pub seat_left: u32,
    /// Start time as free text ("9:00", "09:00:00").
    pub start_time: String,
    /// End time as free text.
    pub end_time: String,
    /// Instructor name.
    pub instructor: String,
    /// Day label (e.g., "Monday").
    pub day: String,
}

impl CourseRecord {
    /// Creates a record with the identifying fields and times.
    pub fn new(
        course_code: impl Into<String>,
        section: impl Into<String>,
        day: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            section: section.into(),
            day: day.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            ..Self::default()
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.course_title = title.into();
        self
    }

    /// Sets the subject prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Sets the instructor.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Sets seat counts.
    pub fn with_seats(mut self, limit: u32, used: u32, left: u32) -> Self {
        self.seat_limit = limit;
        self.seat_used = used;
        self.seat_left = left;
        self
    }
}

/// Identity of a session within a day group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionKey {
    pub course_code: String,
    pub section: String,
    pub day: String,
}

/// A normalized course session ready for layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub course_code: String,
    pub prefix: String,
    pub course_title: String,
    pub section: String,
    pub seat_limit: u32,
    pub seat_used: u32,
    pub seat_left: u32,
    pub instructor: String,
    /// Day label, as it appeared in the source.
    pub day: String,
    /// Canonical start time ("H:MM").
    pub start_time: String,
    /// Canonical end time ("H:MM").
    pub end_time: String,
    /// Meeting interval in minutes since midnight.
    pub interval: MinuteInterval,
}

impl Session {
    /// Start minute.
    #[inline]
    pub fn start(&self) -> i32 {
        self.interval.start
    }

    /// End minute (exclusive).
    #[inline]
    pub fn end(&self) -> i32 {
        self.interval.end
    }

    /// Identity within a day group.
    pub fn key(&self) -> SessionKey {
        SessionKey {
            course_code: self.course_code.clone(),
            section: self.section.clone(),
            day: self.day.clone(),
        }
    }

    /// Whether two sessions overlap in time (half-open).
    pub fn overlaps(&self, other: &Session) -> bool {
        self.interval.overlaps(&other.interval)
    }

    /// Classifies remaining seats.
    pub fn seat_level(&self) -> SeatLevel {
        SeatLevel::classify(self.seat_left, self.seat_limit)
    }
}

/// Remaining-seat classification used for badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeatLevel {
    /// Seat limit is zero; ratio undefined.
    Unknown,
    /// At least half the seats are left.
    Plenty,
    /// At least a quarter left.
    Limited,
    /// Some seats left, under a quarter.
    Low,
    /// No seats left.
    Full,
}

impl SeatLevel {
    /// Classifies `left` seats out of `limit`.
    pub fn classify(left: u32, limit: u32) -> Self {
        if limit == 0 {
            return Self::Unknown;
        }
        let ratio = f64::from(left) / f64::from(limit);
        if ratio >= 0.5 {
            Self::Plenty
        } else if ratio >= 0.25 {
            Self::Limited
        } else if ratio > 0.0 {
            Self::Low
        } else {
            Self::Full
        }
    }
}
