//! Interval normalization.
//!
//! Turns raw [`CourseRecord`]s into [`Session`]s with numeric minute
//! intervals and groups them by day label.
//!
//! A record is retained iff:
//! - both times normalize to a canonical `H:MM` form,
//! - its day label is non-blank, AND
//! - its start is strictly before its end.
//!
//! Everything else is dropped here so the lane engine only ever sees
//! well-formed intervals.

use log::trace;

use crate::models::{CourseRecord, MinuteInterval, Session};

/// Normalizes a free-form time string to canonical `H:MM`.
///
/// Tolerates missing leading zeros, a trailing seconds part and a bare
/// hour: `"09:00:00"` → `"9:00"`, `"9:5"` → `"9:05"`, `"13"` → `"13:00"`.
/// Returns `None` for blank input, non-numeric components, minutes
/// outside 0..60, or hours past 24:00.
pub fn normalize_time(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let mut parts = raw.split(':');
    let hour: u32 = parts.next()?.trim().parse().ok()?;
    let minute: u32 = match parts.next() {
        Some(m) => m.trim().parse().ok()?,
        None => 0,
    };

    if minute >= 60 || hour > 24 || (hour == 24 && minute > 0) {
        return None;
    }

    Some(format!("{hour}:{minute:02}"))
}

/// Converts a `H:MM` time to minutes since midnight.
///
/// Lenient: missing or non-numeric components count as zero, so a
/// blank string yields 0. Out-of-range values saturate at the `i32`
/// bounds.
pub fn time_to_minutes(time: &str) -> i32 {
    let mut parts = time.split(':');
    let hour = parts
        .next()
        .and_then(|h| h.trim().parse::<i32>().ok())
        .unwrap_or(0);
    let minute = parts
        .next()
        .and_then(|m| m.trim().parse::<i32>().ok())
        .unwrap_or(0);
    hour.saturating_mul(60).saturating_add(minute)
}

/// Whether two sessions overlap: `a.start < b.end && b.start < a.end`.
///
/// Back-to-back sessions do not overlap.
pub fn sessions_overlap(a: &Session, b: &Session) -> bool {
    a.overlaps(b)
}

/// Normalizes one record, or `None` if it has no usable interval or day.
pub fn normalize_record(record: &CourseRecord) -> Option<Session> {
    let day = record.day.trim();
    if day.is_empty() {
        trace!(
            "dropping {} sec {}: missing day",
            record.course_code,
            record.section
        );
        return None;
    }

    let (Some(start_time), Some(end_time)) = (
        normalize_time(&record.start_time),
        normalize_time(&record.end_time),
    ) else {
        trace!(
            "dropping {} sec {}: unparseable time {:?}-{:?}",
            record.course_code,
            record.section,
            record.start_time,
            record.end_time
        );
        return None;
    };

    let interval = MinuteInterval::new(time_to_minutes(&start_time), time_to_minutes(&end_time));
    if !interval.is_valid() {
        trace!(
            "dropping {} sec {}: empty interval {}-{}",
            record.course_code,
            record.section,
            start_time,
            end_time
        );
        return None;
    }

    Some(Session {
        course_code: record.course_code.clone(),
        prefix: record.prefix.clone(),
        course_title: record.course_title.clone(),
        section: record.section.clone(),
        seat_limit: record.seat_limit,
        seat_used: record.seat_used,
        seat_left: record.seat_left,
        instructor: record.instructor.clone(),
        day: day.to_string(),
        start_time,
        end_time,
        interval,
    })
}

/// Normalizes records in order, dropping the invalid ones.
pub fn normalize_records<'a, I>(records: I) -> Vec<Session>
where
    I: IntoIterator<Item = &'a CourseRecord>,
{
    records.into_iter().filter_map(normalize_record).collect()
}

/// Sessions grouped by day label.
///
/// Days appear in first-encountered order; sessions within a day keep
/// their input order. Ordering by time is the lane engine's job.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayGroups {
    groups: Vec<(String, Vec<Session>)>,
}

impl DayGroups {
    /// Sessions for a day label, if any.
    pub fn get(&self, day: &str) -> Option<&[Session]> {
        self.groups
            .iter()
            .find(|(d, _)| d == day)
            .map(|(_, s)| s.as_slice())
    }

    /// Day labels in first-encountered order.
    pub fn days(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(d, _)| d.as_str())
    }

    /// Iterates `(day, sessions)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Session])> {
        self.groups.iter().map(|(d, s)| (d.as_str(), s.as_slice()))
    }

    /// Number of distinct days.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether there are no sessions at all.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl IntoIterator for DayGroups {
    type Item = (String, Vec<Session>);
    type IntoIter = std::vec::IntoIter<(String, Vec<Session>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Groups sessions by their day label.
pub fn group_by_day<I>(sessions: I) -> DayGroups
where
    I: IntoIterator<Item = Session>,
{
    let mut groups: Vec<(String, Vec<Session>)> = Vec::new();
    for session in sessions {
        match groups.iter_mut().find(|(d, _)| *d == session.day) {
            Some((_, list)) => list.push(session),
            None => groups.push((session.day.clone(), vec![session])),
        }
    }
    DayGroups { groups }
}
