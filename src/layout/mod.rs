//! Timetable layout.
//!
//! Positions sessions on a fixed reference window and packs each day's
//! sessions into a bounded number of lanes.
//!
//! # Components
//!
//! - `LaneEngine` / `assign_lanes`: first-fit lane assignment for one day,
//!   with overflow exclusion and "+N" attribution.
//! - `Timetable`: runs the engine once per day group.
//! - `cluster_overlapping`: transitive overlap clusters for grid cells.
//! - `LayoutStats`: placed / excluded counts and lane occupancy.
//!
//! # References
//!
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Partitioning

mod cluster;
mod lanes;
mod stats;
mod timetable;

pub use cluster::{cluster_overlapping, group_by_course_code, OverlapCluster};
pub use lanes::{assign_lanes, assign_lanes_default, LaneEngine};
pub use stats::LayoutStats;
pub use timetable::{DaySchedule, Timetable};
