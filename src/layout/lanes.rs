//! First-fit lane assignment with a bounded lane count.
//!
//! # Algorithm
//!
//! 1. Position every session on the reference window: clip to the
//!    window, then widen to the minimum block width. Geometry is fixed
//!    before any lane decision.
//! 2. Sort by left edge ascending, ties by width descending. The sort
//!    is stable, so full ties keep input order.
//! 3. For each session, take the first lane (from 0 upward) with no
//!    colliding geometry.
//! 4. If none fits and fewer than `max_lanes` lanes exist, open one.
//! 5. Otherwise exclude the session as an overflow candidate.
//! 6. Attribute each candidate to the colliding placement with the
//!    largest right edge (`overflow_count += 1`). A candidate colliding
//!    with nothing is counted as unattributed.
//!
//! Collision uses the half-open predicate on geometry, so blocks that
//! touch share a lane.
//!
//! # Complexity
//! O(n log n + n * p) where n=sessions, p=placed sessions per day.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs",
//! Ch. 8: interval graph coloring.

use log::{debug, trace, warn};

use crate::config::{LayoutConfig, DEFAULT_MAX_LANES};
use crate::models::{DayLayout, Geometry, LanedPlacement, PositionedSession, Session};

/// Lays out the sessions of a single day into lanes.
///
/// # Example
///
/// ```
/// use lane_timetable::layout::LaneEngine;
/// use lane_timetable::models::CourseRecord;
/// use lane_timetable::normalize::normalize_records;
///
/// let records = vec![
///     CourseRecord::new("A", "1", "Mon", "9:00", "10:00"),
///     CourseRecord::new("B", "1", "Mon", "9:30", "10:30"),
///     CourseRecord::new("C", "1", "Mon", "9:45", "10:15"),
/// ];
/// let sessions = normalize_records(&records);
///
/// let day = LaneEngine::new().with_max_lanes(2).assign(&sessions);
/// assert_eq!(day.placed_count(), 2);
/// assert_eq!(day.excluded, 1);
/// assert_eq!(day.placement_for("B", "1").unwrap().overflow_count, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaneEngine {
    config: LayoutConfig,
}

impl LaneEngine {
    /// Creates an engine with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine from a configuration.
    pub fn with_config(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Sets the lane cap.
    pub fn with_max_lanes(mut self, max_lanes: usize) -> Self {
        self.config.max_lanes = max_lanes;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Computes the timeline geometry of a session.
    ///
    /// A widened block has `right_pos == left_pos + min_width_pct`
    /// exactly. Reading the width back as `right_pos - left_pos` may
    /// differ from the minimum by one rounding step of `right_pos`, so
    /// compare widths with a tolerance.
    ///
    /// An empty reference window puts every session at 0. A negative or
    /// NaN minimum width counts as 0.
    pub fn geometry(&self, session: &Session) -> Geometry {
        let window = &self.config.window;
        let min_width = self.config.min_width_pct.max(0.0);
        let left = window.percent(session.start());
        let right = window.percent(session.end());
        // Unwidened spans keep the exact right edge: back-to-back
        // sessions must touch, not collide.
        if right - left < min_width {
            Geometry::new(left, left + min_width)
        } else {
            Geometry::new(left, right)
        }
    }

    /// Positions every session, in input order.
    pub fn position(&self, sessions: &[Session]) -> Vec<PositionedSession> {
        sessions
            .iter()
            .map(|s| PositionedSession {
                session: s.clone(),
                geometry: self.geometry(s),
            })
            .collect()
    }

    /// Assigns lanes to one day's sessions.
    ///
    /// Callers partition by day first; this method does no grouping.
    pub fn assign(&self, sessions: &[Session]) -> DayLayout {
        if sessions.is_empty() {
            return DayLayout::default();
        }

        let max_lanes = self.config.max_lanes;
        let mut positioned = self.position(sessions);

        // Left edge ascending, wider first on ties
        positioned.sort_by(|a, b| {
            a.geometry
                .left_pos
                .total_cmp(&b.geometry.left_pos)
                .then_with(|| b.geometry.width().total_cmp(&a.geometry.width()))
        });

        let mut lanes: Vec<Vec<Geometry>> = Vec::new();
        let mut placements: Vec<LanedPlacement> = Vec::with_capacity(positioned.len());
        let mut overflow: Vec<Geometry> = Vec::new();

        for item in positioned {
            let fit = lanes
                .iter()
                .position(|lane| !lane.iter().any(|g| g.collides(&item.geometry)));

            let lane = match fit {
                Some(idx) => idx,
                None if lanes.len() < max_lanes => {
                    lanes.push(Vec::new());
                    lanes.len() - 1
                }
                None => {
                    trace!(
                        "{} sec {} on {}: no free lane, excluded",
                        item.session.course_code,
                        item.session.section,
                        item.session.day
                    );
                    overflow.push(item.geometry);
                    continue;
                }
            };

            lanes[lane].push(item.geometry);
            placements.push(LanedPlacement::new(item, lane));
        }

        let mut unattributed = 0;
        for candidate in &overflow {
            // max_by keeps the last of equal maxima
            let target = placements
                .iter_mut()
                .filter(|p| p.geometry.collides(candidate))
                .max_by(|a, b| a.geometry.right_pos.total_cmp(&b.geometry.right_pos));
            match target {
                Some(p) => p.overflow_count += 1,
                None => unattributed += 1,
            }
        }

        if unattributed > 0 {
            warn!(
                "{} of {} excluded sessions collided with no placement (max_lanes = {})",
                unattributed,
                overflow.len(),
                max_lanes
            );
        }
        debug!(
            "laid out {} sessions: {} placed in {} lanes, {} excluded",
            sessions.len(),
            placements.len(),
            lanes.len(),
            overflow.len()
        );

        DayLayout {
            placements,
            excluded: overflow.len(),
            unattributed,
        }
    }
}

/// Assigns lanes with the default window and width floor.
///
/// Excluded sessions are not returned; they appear only as
/// `overflow_count` on colliding placements.
pub fn assign_lanes(sessions: &[Session], max_lanes: usize) -> Vec<LanedPlacement> {
    LaneEngine::new()
        .with_max_lanes(max_lanes)
        .assign(sessions)
        .placements
}

/// [`assign_lanes`] with the default cap of four lanes.
pub fn assign_lanes_default(sessions: &[Session]) -> Vec<LanedPlacement> {
    assign_lanes(sessions, DEFAULT_MAX_LANES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MIN_WIDTH_PCT;
    use crate::models::{CourseRecord, ReferenceWindow};
    use crate::normalize::normalize_record;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    fn session(code: &str, start: &str, end: &str) -> Session {
        normalize_record(&CourseRecord::new(code, "1", "Mon", start, end)).unwrap()
    }

    fn session_min(code: &str, start: i32, end: i32) -> Session {
        let fmt = |m: i32| format!("{}:{:02}", m / 60, m % 60);
        session(code, &fmt(start), &fmt(end))
    }

    fn lane_of(placements: &[LanedPlacement], code: &str) -> Option<usize> {
        placements
            .iter()
            .find(|p| p.session.course_code == code)
            .map(|p| p.lane)
    }

    fn assert_no_lane_collisions(placements: &[LanedPlacement]) {
        for (i, a) in placements.iter().enumerate() {
            for b in &placements[i + 1..] {
                if a.lane == b.lane {
                    assert!(
                        !a.geometry.collides(&b.geometry),
                        "{} and {} collide in lane {}",
                        a.session.course_code,
                        b.session.course_code,
                        a.lane
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(assign_lanes(&[], 4).is_empty());
        let day = LaneEngine::new().assign(&[]);
        assert_eq!(day, DayLayout::default());
    }

    #[test]
    fn test_three_way_overlap_two_lanes() {
        let sessions = vec![
            session("A", "9:00", "10:00"),
            session("B", "9:30", "10:30"),
            session("C", "9:45", "10:15"),
        ];
        let day = LaneEngine::new().with_max_lanes(2).assign(&sessions);

        assert_eq!(day.placed_count(), 2);
        assert_eq!(day.excluded, 1);
        assert_eq!(day.unattributed, 0);
        assert_eq!(lane_of(&day.placements, "A"), Some(0));
        assert_eq!(lane_of(&day.placements, "B"), Some(1));
        assert_eq!(lane_of(&day.placements, "C"), None);

        // B ends at 10:30, the larger right edge
        assert_eq!(day.placement_for("B", "1").unwrap().overflow_count, 1);
        assert_eq!(day.placement_for("A", "1").unwrap().overflow_count, 0);
        assert_eq!(
            day.placement_for("B", "1").unwrap().overflow_badge().as_deref(),
            Some("+1")
        );
    }

    #[test]
    fn test_back_to_back_share_lane() {
        let sessions = vec![
            session("A", "9:00", "10:00"),
            session("B", "10:00", "11:00"),
        ];
        let placements = assign_lanes(&sessions, 4);

        assert_eq!(placements.len(), 2);
        assert_eq!(lane_of(&placements, "A"), Some(0));
        assert_eq!(lane_of(&placements, "B"), Some(0));
    }

    #[test]
    fn test_min_width_floor() {
        let engine = LaneEngine::new();
        let short = session("S", "9:00", "9:10"); // 10 min ≈ 1.28%
        let g = engine.geometry(&short);
        assert!((g.width() - 6.0).abs() < 1e-9);

        let long = session("L", "9:00", "12:00"); // 180 min ≈ 23%
        let g = engine.geometry(&long);
        assert!((g.width() - 180.0 / 780.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_min_width_edge_is_exact() {
        let engine = LaneEngine::new();
        for (start, end) in [(450, 455), (517, 520), (1000, 1009), (1200, 1230)] {
            let g = engine.geometry(&session_min("S", start, end));
            assert_eq!(g.right_pos, g.left_pos + DEFAULT_MIN_WIDTH_PCT);
            assert!((g.width() - DEFAULT_MIN_WIDTH_PCT).abs() <= 100.0 * f64::EPSILON);
        }
    }

    #[test]
    fn test_empty_window_does_not_panic() {
        let sessions = vec![
            session("A", "9:00", "10:00"),
            session("B", "9:30", "10:30"),
            session("C", "13:00", "14:00"),
        ];
        for span in [-60, 0] {
            let engine = LaneEngine::with_config(
                LayoutConfig::new().with_window(ReferenceWindow::new(450, span)),
            );
            let day = engine.assign(&sessions);

            assert_eq!(day.total_sessions(), 3);
            for p in &day.placements {
                assert_eq!(p.left_pos(), 0.0);
                assert_eq!(p.right_pos(), DEFAULT_MIN_WIDTH_PCT);
            }
            assert_no_lane_collisions(&day.placements);
        }
    }

    #[test]
    fn test_invalid_min_width_counts_as_zero() {
        for min in [f64::NAN, -5.0] {
            let engine = LaneEngine::with_config(LayoutConfig::new().with_min_width(min));
            let g = engine.geometry(&session("A", "9:00", "9:10"));
            assert!(g.left_pos.is_finite() && g.right_pos.is_finite());
            assert!((g.width() - 10.0 / 780.0 * 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_min_width_causes_collision() {
        // Back-to-back 10-minute sessions widen past each other
        let sessions = vec![
            session("A", "9:00", "9:10"),
            session("B", "9:10", "9:20"),
        ];
        let placements = assign_lanes(&sessions, 4);
        assert_eq!(lane_of(&placements, "A"), Some(0));
        assert_eq!(lane_of(&placements, "B"), Some(1));
    }

    #[test]
    fn test_clipping_to_window() {
        let engine = LaneEngine::new();

        let early = session("E", "6:00", "10:00"); // starts before 07:30
        let g = engine.geometry(&early);
        assert_eq!(g.left_pos, 0.0);
        assert!((g.right_pos - 150.0 / 780.0 * 100.0).abs() < 1e-9);

        let late = session("L", "20:00", "22:00"); // ends after 20:30
        let g = engine.geometry(&late);
        assert!((g.left_pos - 750.0 / 780.0 * 100.0).abs() < 1e-9);
        assert!((g.width() - 6.0).abs() < 1e-9);

        let outside = session("O", "5:00", "6:00"); // entirely before window
        let g = engine.geometry(&outside);
        assert_eq!(g.left_pos, 0.0);
        assert!((g.width() - 6.0).abs() < 1e-9);
    }

    #[test]
    fn test_custom_window() {
        let config = LayoutConfig::new()
            .with_window(ReferenceWindow::new(480, 600))
            .with_min_width(0.0);
        let engine = LaneEngine::with_config(config);
        let g = engine.geometry(&session("A", "9:00", "10:00"));
        assert!((g.left_pos - 10.0).abs() < 1e-9);
        assert!((g.right_pos - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_wider_first_on_tie() {
        // Same start: the 3-hour session is placed before the 1-hour one
        let sessions = vec![
            session("SHORT", "9:00", "10:00"),
            session("LONG", "9:00", "12:00"),
            session("AFTER", "10:00", "11:00"),
        ];
        let placements = assign_lanes(&sessions, 4);

        assert_eq!(placements[0].session.course_code, "LONG");
        assert_eq!(lane_of(&placements, "LONG"), Some(0));
        assert_eq!(lane_of(&placements, "SHORT"), Some(1));
        // Fits under SHORT once it ends
        assert_eq!(lane_of(&placements, "AFTER"), Some(1));
    }

    #[test]
    fn test_stable_on_full_tie() {
        let sessions = vec![
            session("X", "9:00", "10:00"),
            session("Y", "9:00", "10:00"),
            session("Z", "9:00", "10:00"),
        ];
        let placements = assign_lanes(&sessions, 4);
        let order: Vec<&str> = placements
            .iter()
            .map(|p| p.session.course_code.as_str())
            .collect();
        assert_eq!(order, vec!["X", "Y", "Z"]);
        assert_eq!(lane_of(&placements, "X"), Some(0));
        assert_eq!(lane_of(&placements, "Y"), Some(1));
        assert_eq!(lane_of(&placements, "Z"), Some(2));
    }

    #[test]
    fn test_first_fit_reuses_low_lanes() {
        let sessions = vec![
            session("A", "8:00", "9:00"),
            session("B", "8:30", "9:30"),
            session("C", "9:00", "10:00"), // lane 0 is free again
            session("D", "9:30", "10:30"), // lane 1 is free again
        ];
        let placements = assign_lanes(&sessions, 4);
        assert_eq!(lane_of(&placements, "A"), Some(0));
        assert_eq!(lane_of(&placements, "B"), Some(1));
        assert_eq!(lane_of(&placements, "C"), Some(0));
        assert_eq!(lane_of(&placements, "D"), Some(1));
    }

    #[test]
    fn test_overflow_attributed_to_rightmost() {
        let sessions = vec![
            session("A", "9:00", "11:00"),
            session("B", "9:00", "10:00"),
            session("C", "9:30", "10:30"),
            session("D", "9:45", "10:15"),
        ];
        let day = LaneEngine::new().with_max_lanes(2).assign(&sessions);

        // A lane 0, B lane 1; C and D excluded
        assert_eq!(day.placed_count(), 2);
        assert_eq!(day.excluded, 2);
        assert_eq!(day.placement_for("A", "1").unwrap().overflow_count, 2);
        assert_eq!(day.placement_for("B", "1").unwrap().overflow_count, 0);
        assert_eq!(day.badge_total(), 2);
    }

    #[test]
    fn test_zero_lanes() {
        let sessions = vec![
            session("A", "9:00", "10:00"),
            session("B", "11:00", "12:00"),
        ];
        let day = LaneEngine::new().with_max_lanes(0).assign(&sessions);

        assert!(day.placements.is_empty());
        assert_eq!(day.excluded, 2);
        assert_eq!(day.unattributed, 2);
        assert_eq!(day.total_sessions(), 2);
    }

    #[test]
    fn test_is_overflow_always_false() {
        let sessions: Vec<Session> = (0..10)
            .map(|i| session_min(&format!("S{i}"), 540, 600))
            .collect();
        let placements = assign_lanes(&sessions, 3);
        assert_eq!(placements.len(), 3);
        assert!(placements.iter().all(|p| !p.is_overflow));
        // 7 excluded, all collide with every placement; rightmost tie → last placed
        assert_eq!(placements[2].overflow_count, 7);
    }

    #[test]
    fn test_idempotent() {
        let sessions = vec![
            session("A", "9:00", "10:30"),
            session("B", "9:30", "11:00"),
            session("C", "10:00", "10:50"),
            session("D", "10:15", "12:00"),
            session("E", "8:00", "9:40"),
        ];
        let first = assign_lanes(&sessions, 2);
        let second = assign_lanes(&sessions, 2);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_cap_is_four() {
        let sessions: Vec<Session> = (0..6)
            .map(|i| session_min(&format!("S{i}"), 540 + i, 660))
            .collect();
        let placements = assign_lanes_default(&sessions);
        assert_eq!(placements.len(), 4);
        assert!(placements.iter().all(|p| p.lane < 4));
    }

    #[test]
    fn test_random_invariants() {
        let mut rng = SmallRng::seed_from_u64(42);

        for round in 0..200 {
            let n = rng.random_range(0..30);
            let max_lanes = rng.random_range(0..6);
            let sessions: Vec<Session> = (0..n)
                .map(|i| {
                    let start = rng.random_range(360..1260);
                    let len = rng.random_range(1..240);
                    session_min(&format!("R{round}-{i}"), start, (start + len).min(1440))
                })
                .collect();

            let engine = LaneEngine::new().with_max_lanes(max_lanes);
            let day = engine.assign(&sessions);

            // Lane bound
            assert!(day.placements.iter().all(|p| p.lane < max_lanes));
            // No same-lane collisions
            assert_no_lane_collisions(&day.placements);
            // Conservation
            assert_eq!(day.placed_count() + day.excluded, sessions.len());
            // Every excluded session is either a badge or unattributed
            assert_eq!(day.badge_total() + day.unattributed, day.excluded);
            // Width floor
            assert!(day
                .placements
                .iter()
                .all(|p| p.geometry.width() >= 6.0 - 1e-9));
            // Idempotence
            assert_eq!(engine.assign(&sessions), day);
        }
    }

    #[test]
    fn test_placements_serialize_camel_case() {
        let placements = assign_lanes(&[session("A", "9:00", "10:00")], 4);
        let json = serde_json::to_value(&placements[0]).unwrap();

        assert_eq!(json["lane"], 0);
        assert_eq!(json["isOverflow"], false);
        assert_eq!(json["overflowCount"], 0);
        assert!(json["leftPos"].is_number());
        assert!(json["rightPos"].is_number());
        assert_eq!(json["session"]["courseCode"], "A");
    }
}
