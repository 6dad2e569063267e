//! Minute intervals and the reference window.
//!
//! # Time Model
//! All times are whole minutes since midnight of the session's day.
//! Intervals are half-open: a session ending at 10:00 and one starting
//! at 10:00 touch but do not overlap.

use serde::{Deserialize, Serialize};

/// A time interval [start, end) in minutes since midnight.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct MinuteInterval {
    /// Interval start (minutes, inclusive).
    pub start: i32,
    /// Interval end (minutes, exclusive).
    pub end: i32,
}

impl MinuteInterval {
    /// Creates a new interval.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Length of this interval in minutes.
    #[inline]
    pub fn duration(&self) -> i32 {
        self.end - self.start
    }

    /// Whether the interval is non-empty (`start < end`).
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Whether a minute falls within this interval.
    #[inline]
    pub fn contains(&self, minute: i32) -> bool {
        minute >= self.start && minute < self.end
    }

    /// Whether two intervals overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Minutes shared by two intervals, if any.
    pub fn overlap_duration(&self, other: &Self) -> Option<i32> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        if end > start {
            Some(end - start)
        } else {
            None
        }
    }
}

/// The fixed visual timeline span against which percentages are computed.
///
/// Defaults to 07:30 with a span of 780 minutes (07:30–20:30).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReferenceWindow {
    /// Window start (minutes since midnight).
    pub start_min: i32,
    /// Window length (minutes). Must be positive.
    pub span_min: i32,
}

impl Default for ReferenceWindow {
    fn default() -> Self {
        Self {
            start_min: 7 * 60 + 30,
            span_min: 780,
        }
    }
}

impl ReferenceWindow {
    /// Creates a window starting at `start_min` and lasting `span_min`.
    pub fn new(start_min: i32, span_min: i32) -> Self {
        Self {
            start_min,
            span_min,
        }
    }

    /// Window end (minutes, exclusive). A non-positive span is treated
    /// as empty, so the end equals the start.
    #[inline]
    pub fn end_min(&self) -> i32 {
        self.start_min.saturating_add(self.span_min.max(0))
    }

    /// Whether the window covers no time (`span_min <= 0`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span_min <= 0
    }

    /// Clamps a minute into `[start_min, end_min]`.
    #[inline]
    pub fn clamp(&self, minute: i32) -> i32 {
        minute.clamp(self.start_min, self.end_min())
    }

    /// Percentage offset of a minute along the window, after clamping.
    ///
    /// An empty window maps every minute to 0.
    pub fn percent(&self, minute: i32) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let span = f64::from(self.end_min()) - f64::from(self.start_min);
        (f64::from(self.clamp(minute)) - f64::from(self.start_min)) / span * 100.0
    }

    /// Axis ticks every `step_min` minutes, from start to end inclusive.
    ///
    /// Returns `(label, percent)` pairs with labels in `HH:MM` form.
    /// A non-positive step yields no ticks.
    pub fn ticks(&self, step_min: i32) -> Vec<(String, f64)> {
        if step_min <= 0 || self.is_empty() {
            return Vec::new();
        }
        (self.start_min..=self.end_min())
            .step_by(step_min as usize)
            .map(|t| (format!("{:02}:{:02}", t / 60, t % 60), self.percent(t)))
            .collect()
    }
}
