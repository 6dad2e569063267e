//! Overlap clustering.
//!
//! Groups a day's sessions into maximal runs of transitively
//! overlapping sessions, as used by the all-days grid where each
//! cluster renders as one stacked cell.
//!
//! # Algorithm
//! Sweep in start order. A session joins the current cluster iff it
//! starts before the cluster's running end; otherwise it opens a new
//! cluster. O(n log n).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{MinuteInterval, Session};

/// A run of sessions whose intervals chain together by overlap.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlapCluster<'a> {
    /// Members in start order.
    pub sessions: Vec<&'a Session>,
    /// Earliest start (minutes).
    pub start_min: i32,
    /// Latest end (minutes).
    pub end_min: i32,
}

impl OverlapCluster<'_> {
    /// Span covered by the cluster.
    pub fn span(&self) -> MinuteInterval {
        MinuteInterval::new(self.start_min, self.end_min)
    }

    /// Number of member sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether the cluster has no members.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

/// Partitions sessions into overlap clusters, ordered by start.
///
/// Touching sessions (end == next start) fall into separate clusters.
pub fn cluster_overlapping(sessions: &[Session]) -> Vec<OverlapCluster<'_>> {
    let mut sorted: Vec<&Session> = sessions.iter().collect();
    sorted.sort_by_key(|s| s.start());

    let mut clusters: Vec<OverlapCluster<'_>> = Vec::new();
    for session in sorted {
        match clusters.last_mut() {
            Some(current) if session.start() < current.end_min => {
                current.end_min = current.end_min.max(session.end());
                current.sessions.push(session);
            }
            _ => clusters.push(OverlapCluster {
                sessions: vec![session],
                start_min: session.start(),
                end_min: session.end(),
            }),
        }
    }
    clusters
}

/// Groups sessions by course code, codes in ascending order.
///
/// Sections of a course keep their input order.
pub fn group_by_course_code(sessions: &[Session]) -> BTreeMap<&str, Vec<&Session>> {
    let mut grouped: BTreeMap<&str, Vec<&Session>> = BTreeMap::new();
    for session in sessions {
        grouped
            .entry(session.course_code.as_str())
            .or_default()
            .push(session);
    }
    grouped
}
