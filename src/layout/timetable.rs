//! Whole-week timetable driver.
//!
//! Partitions sessions by day and runs the lane engine once per day.
//! Days are ordered Sunday through Saturday; labels that are not a
//! recognizable weekday follow in first-seen order.

use serde::Serialize;

use super::{LaneEngine, LayoutStats};
use crate::config::LayoutConfig;
use crate::models::{CourseRecord, DayLayout, Session, Weekday};
use crate::normalize::{group_by_day, normalize_records};

/// Layout of one labelled day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySchedule {
    /// Day label as found in the data.
    pub day: String,
    /// Parsed weekday, if the label is recognizable.
    pub weekday: Option<Weekday>,
    #[serde(flatten)]
    pub layout: DayLayout,
}

/// Per-day lane layouts for a set of sessions.
///
/// # Example
///
/// ```
/// use lane_timetable::config::LayoutConfig;
/// use lane_timetable::layout::Timetable;
/// use lane_timetable::models::CourseRecord;
///
/// let records = vec![
///     CourseRecord::new("ITX2001", "1", "Tuesday", "9:00", "10:30"),
///     CourseRecord::new("CSX1001", "1", "Monday", "9:00", "10:30"),
///     CourseRecord::new("CSX1001", "2", "Monday", "", "10:30"),
/// ];
/// let timetable = Timetable::from_records(&records, &LayoutConfig::default());
///
/// let days: Vec<&str> = timetable.days().iter().map(|d| d.day.as_str()).collect();
/// assert_eq!(days, vec!["Monday", "Tuesday"]);
/// assert_eq!(timetable.stats().placed, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Timetable {
    days: Vec<DaySchedule>,
}

impl Timetable {
    /// Lays out already-normalized sessions.
    pub fn build(sessions: Vec<Session>, config: &LayoutConfig) -> Self {
        let engine = LaneEngine::with_config(*config);

        let mut days: Vec<DaySchedule> = group_by_day(sessions)
            .into_iter()
            .map(|(day, sessions)| DaySchedule {
                weekday: Weekday::parse(&day),
                layout: engine.assign(&sessions),
                day,
            })
            .collect();

        // Stable: unknown labels keep first-seen order after the weekdays
        days.sort_by_key(|d| d.weekday.map_or(Weekday::ALL.len(), |w| w as usize));

        Self { days }
    }

    /// Normalizes raw records, then lays them out.
    pub fn from_records(records: &[CourseRecord], config: &LayoutConfig) -> Self {
        Self::build(normalize_records(records), config)
    }

    /// Day layouts in display order.
    pub fn days(&self) -> &[DaySchedule] {
        &self.days
    }

    /// Layout for a day label (exact match) or weekday name.
    pub fn day(&self, label: &str) -> Option<&DaySchedule> {
        self.days.iter().find(|d| d.day == label).or_else(|| {
            let weekday = Weekday::parse(label)?;
            self.days.iter().find(|d| d.weekday == Some(weekday))
        })
    }

    /// Aggregate statistics across all days.
    pub fn stats(&self) -> LayoutStats {
        LayoutStats::calculate(self.days.iter().map(|d| &d.layout))
    }

    /// Whether there are no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReferenceWindow;

    fn rec(code: &str, day: &str, start: &str, end: &str) -> CourseRecord {
        CourseRecord::new(code, "1", day, start, end)
    }

    #[test]
    fn test_empty() {
        let t = Timetable::from_records(&[], &LayoutConfig::default());
        assert!(t.is_empty());
        assert_eq!(t.stats().total(), 0);
    }

    #[test]
    fn test_weekday_order_and_unknown_labels() {
        let records = vec![
            rec("A", "Friday", "9:00", "10:00"),
            rec("B", "TBA", "9:00", "10:00"),
            rec("C", "Mon", "9:00", "10:00"),
            rec("D", "Online", "9:00", "10:00"),
            rec("E", "Sunday", "9:00", "10:00"),
        ];
        let t = Timetable::from_records(&records, &LayoutConfig::default());
        let days: Vec<&str> = t.days().iter().map(|d| d.day.as_str()).collect();
        assert_eq!(days, vec!["Sunday", "Mon", "Friday", "TBA", "Online"]);
    }

    #[test]
    fn test_days_are_independent() {
        // Same times on different days never push each other into new lanes
        let records = vec![
            rec("A", "Monday", "9:00", "10:00"),
            rec("B", "Tuesday", "9:00", "10:00"),
            rec("C", "Monday", "9:30", "10:30"),
        ];
        let t = Timetable::from_records(&records, &LayoutConfig::default());

        let mon = t.day("Monday").unwrap();
        assert_eq!(mon.layout.lanes_used(), 2);
        let tue = t.day("Tue").unwrap();
        assert_eq!(tue.weekday, Some(Weekday::Tuesday));
        assert_eq!(tue.layout.lanes_used(), 1);
    }

    #[test]
    fn test_conservation_with_invalid_records() {
        let records = vec![
            rec("A", "Monday", "9:00", "10:00"),
            rec("B", "Monday", "9:00", "10:00"),
            rec("C", "Monday", "9:00", "10:00"),
            rec("BAD1", "Monday", "", "10:00"),
            rec("BAD2", "", "9:00", "10:00"),
        ];
        let config = LayoutConfig::default().with_max_lanes(2);
        let t = Timetable::from_records(&records, &config);
        let stats = t.stats();

        assert!(stats.is_conserved(3));
        assert_eq!(stats.placed, 2);
        assert_eq!(stats.excluded, 1);
    }

    #[test]
    fn test_unvalidated_window_still_builds() {
        let records = vec![
            rec("A", "Monday", "9:00", "10:00"),
            rec("B", "Monday", "9:30", "10:30"),
        ];
        let config = LayoutConfig::default().with_window(ReferenceWindow::new(450, -1));
        assert!(config.validate().is_err());

        let t = Timetable::from_records(&records, &config);
        assert!(t.stats().is_conserved(2));
        let mon = t.day("Monday").unwrap();
        assert!(mon
            .layout
            .placements
            .iter()
            .all(|p| p.left_pos() == 0.0 && p.right_pos().is_finite()));
    }

    #[test]
    fn test_serializes_flat_day() {
        let t = Timetable::from_records(
            &[rec("A", "Monday", "9:00", "10:00")],
            &LayoutConfig::default(),
        );
        let json = serde_json::to_value(&t).unwrap();
        let day = &json["days"][0];
        assert_eq!(day["day"], "Monday");
        assert_eq!(day["weekday"], "Monday");
        assert_eq!(day["excluded"], 0);
        assert_eq!(day["placements"][0]["lane"], 0);
    }
}
