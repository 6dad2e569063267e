//! Layout quality metrics.
//!
//! Summarizes how well a day (or a whole timetable) fit into its lanes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placed | Sessions that received a lane |
//! | Excluded | Sessions dropped for lack of a free lane |
//! | Unattributed | Excluded sessions with no colliding placement |
//! | Lanes used | Highest lane index + 1 |
//! | Placement rate | placed / (placed + excluded) |
//! | Lane occupancy | Per-lane sum of rendered widths (percent of window) |

use serde::Serialize;

use crate::models::DayLayout;

/// Layout indicators for one or more day layouts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutStats {
    /// Sessions that received a lane.
    pub placed: usize,
    /// Sessions excluded by the lane cap.
    pub excluded: usize,
    /// Excluded sessions not attributed to any placement.
    pub unattributed: usize,
    /// Maximum lanes opened by any single day.
    pub lanes_used: usize,
    /// Fraction of sessions placed (0.0..1.0). 1.0 when there are none.
    pub placement_rate: f64,
    /// Rendered width summed per lane index, across all days (percent).
    pub lane_occupancy: Vec<f64>,
}

impl LayoutStats {
    /// Computes statistics for a single day.
    pub fn for_day(day: &DayLayout) -> Self {
        Self::calculate(std::iter::once(day))
    }

    /// Computes statistics across several day layouts.
    pub fn calculate<'a, I>(days: I) -> Self
    where
        I: IntoIterator<Item = &'a DayLayout>,
    {
        let mut placed = 0;
        let mut excluded = 0;
        let mut unattributed = 0;
        let mut lanes_used = 0;
        let mut lane_occupancy: Vec<f64> = Vec::new();

        for day in days {
            placed += day.placed_count();
            excluded += day.excluded;
            unattributed += day.unattributed;
            lanes_used = lanes_used.max(day.lanes_used());

            for p in &day.placements {
                if lane_occupancy.len() <= p.lane {
                    lane_occupancy.resize(p.lane + 1, 0.0);
                }
                lane_occupancy[p.lane] += p.geometry.width();
            }
        }

        let total = placed + excluded;
        let placement_rate = if total == 0 {
            1.0
        } else {
            placed as f64 / total as f64
        };

        Self {
            placed,
            excluded,
            unattributed,
            lanes_used,
            placement_rate,
            lane_occupancy,
        }
    }

    /// Total sessions accounted for.
    pub fn total(&self) -> usize {
        self.placed + self.excluded
    }

    /// Whether every session in `valid_sessions` is either placed or
    /// counted as excluded.
    pub fn is_conserved(&self, valid_sessions: usize) -> bool {
        self.total() == valid_sessions
    }

    /// Whether no session was excluded.
    pub fn is_complete(&self) -> bool {
        self.excluded == 0
    }
}
