//! Timetable domain models.
//!
//! Value types flowing through the layout pipeline:
//!
//! | Type | Stage |
//! |------|-------|
//! | `CourseRecord` | Raw row from the course table |
//! | `Session` | Normalized meeting with a minute interval |
//! | `PositionedSession` | Session with timeline geometry |
//! | `LanedPlacement` | Geometry plus lane and overflow badge |
//! | `DayLayout` | All placements of one day group |

mod day;
mod interval;
mod placement;
mod session;

pub use day::Weekday;
pub use interval::{MinuteInterval, ReferenceWindow};
pub use placement::{DayLayout, Geometry, LanedPlacement, PositionedSession};
pub use session::{CourseRecord, SeatLevel, Session, SessionKey};
