//! Timetable lane layout.
//!
//! Turns course-section meetings into per-day laned placements for a
//! horizontal timetable. Sessions that overlap are spread over a bounded
//! number of lanes; sessions that do not fit are excluded and surface
//! only as "+N" overflow badges on the placements they collide with.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CourseRecord`, `Session`, `Geometry`,
//!   `LanedPlacement`, `DayLayout`, `ReferenceWindow`, `Weekday`
//! - **`normalize`**: Time parsing, interval normalization, day grouping
//! - **`layout`**: Lane assignment engine, per-day timetable, clustering, stats
//! - **`ingest`**: CSV reader for the course table export
//! - **`filter`**: Session filters and filter option lists
//! - **`validation`**: Input integrity checks (duplicates, inverted intervals)
//! - **`config`**: `LayoutConfig` (window, width floor, lane cap)
//!
//! # Pipeline
//!
//! ```text
//! CourseRecord ──normalize──▶ Session ──group_by_day──▶ DayGroups
//!                                                          │
//!                                  LaneEngine::assign (per day)
//!                                                          ▼
//!                                                      DayLayout
//! ```
//!
//! The layout core is pure and synchronous: identical input always
//! yields identical output, including lane indices.

pub mod config;
pub mod error;
pub mod filter;
pub mod ingest;
pub mod layout;
pub mod models;
pub mod normalize;
pub mod validation;

pub use error::{Error, Result};
