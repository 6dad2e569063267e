//! Placement (layout result) models.
//!
//! A placement positions a session on the reference window as a
//! `[left_pos, right_pos)` percentage span and assigns it a lane.
//! Geometry is decided before lane assignment and never changes
//! with the lane a session lands in.

use serde::{Deserialize, Serialize};

use super::Session;

/// Horizontal extent of a session on the timeline, in percent.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    /// Left edge (percent, inclusive).
    pub left_pos: f64,
    /// Right edge (percent, exclusive).
    pub right_pos: f64,
}

impl Geometry {
    /// Creates a geometry span.
    pub fn new(left_pos: f64, right_pos: f64) -> Self {
        Self {
            left_pos,
            right_pos,
        }
    }

    /// Rendered width (percent).
    ///
    /// Derived from the two edges, so it carries their rounding error.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right_pos - self.left_pos
    }

    /// Whether two spans collide (half-open).
    #[inline]
    pub fn collides(&self, other: &Self) -> bool {
        self.left_pos < other.right_pos && other.left_pos < self.right_pos
    }
}

/// A session with its timeline geometry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PositionedSession {
    pub session: Session,
    #[serde(flatten)]
    pub geometry: Geometry,
}

/// A placed session: geometry plus lane and overflow badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LanedPlacement {
    pub session: Session,
    /// Lane index, `0 <= lane < max_lanes`.
    pub lane: usize,
    /// Always `false`: sessions that do not fit are excluded, not flagged.
    pub is_overflow: bool,
    /// Excluded colliding sessions attributed to this placement ("+N").
    pub overflow_count: usize,
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl LanedPlacement {
    pub(crate) fn new(positioned: PositionedSession, lane: usize) -> Self {
        Self {
            session: positioned.session,
            lane,
            is_overflow: false,
            overflow_count: 0,
            geometry: positioned.geometry,
        }
    }

    /// Left edge (percent).
    #[inline]
    pub fn left_pos(&self) -> f64 {
        self.geometry.left_pos
    }

    /// Right edge (percent).
    #[inline]
    pub fn right_pos(&self) -> f64 {
        self.geometry.right_pos
    }

    /// Badge text for the overflow indicator, if any ("+2").
    pub fn overflow_badge(&self) -> Option<String> {
        (self.overflow_count > 0).then(|| format!("+{}", self.overflow_count))
    }
}

/// Result of laying out one day group.
///
/// Excluded sessions are never enumerated; they survive only as counts
/// (`excluded`) and as `overflow_count` badges on placements.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DayLayout {
    /// Placements in placement order (sorted geometry order).
    pub placements: Vec<LanedPlacement>,
    /// Sessions that could not be placed within the lane cap.
    pub excluded: usize,
    /// Excluded sessions that collided with no placement.
    pub unattributed: usize,
}

impl DayLayout {
    /// Number of placed sessions.
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    /// Total sessions the layout accounted for (placed + excluded).
    pub fn total_sessions(&self) -> usize {
        self.placements.len() + self.excluded
    }

    /// Number of lanes actually opened.
    pub fn lanes_used(&self) -> usize {
        self.placements
            .iter()
            .map(|p| p.lane + 1)
            .max()
            .unwrap_or(0)
    }

    /// Placements in a given lane, in placement order.
    pub fn placements_in_lane(&self, lane: usize) -> Vec<&LanedPlacement> {
        self.placements.iter().filter(|p| p.lane == lane).collect()
    }

    /// Finds the placement for a course section.
    pub fn placement_for(&self, course_code: &str, section: &str) -> Option<&LanedPlacement> {
        self.placements
            .iter()
            .find(|p| p.session.course_code == course_code && p.session.section == section)
    }

    /// Sum of all overflow badges.
    pub fn badge_total(&self) -> usize {
        self.placements.iter().map(|p| p.overflow_count).sum()
    }
}
