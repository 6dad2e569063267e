//! CSV ingestion of the course table export.
//!
//! The export has a header row and at least 15 columns per data row:
//!
//! | Column | Field |
//! |--------|-------|
//! | 0 | Course code |
//! | 1 | Prefix |
//! | 3 | Course title |
//! | 4 | Section |
//! | 5, 6, 7 | Seat limit, used, left |
//! | 8, 9 | Start, end time |
//! | 10 | Instructor |
//! | 14 | Day |
//!
//! Rows with fewer columns are skipped. Seat counts that do not start
//! with digits read as 0. A blank instructor becomes `"-"`. Bytes that
//! are not valid UTF-8 decode to U+FFFD, so one mis-encoded title does
//! not cost the rest of the file.

use std::borrow::Cow;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ByteRecord;
use log::debug;

use crate::error::Result;
use crate::models::{CourseRecord, Session};
use crate::normalize::normalize_records;

/// Minimum number of columns for a usable row.
pub const MIN_COLUMNS: usize = 15;

/// Reads raw course records from CSV.
///
/// Quoted fields may contain commas. Whitespace around fields is
/// trimmed. Only I/O failures are errors; invalid UTF-8 is decoded
/// lossily.
pub fn read_records<R: Read>(reader: R) -> Result<Vec<CourseRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in rdr.byte_records().enumerate() {
        let row = row?;
        if row.len() < MIN_COLUMNS {
            debug!(
                "skipping row {}: {} columns, need {}",
                idx + 2,
                row.len(),
                MIN_COLUMNS
            );
            continue;
        }

        let field = |i: usize| cell(&row, i).into_owned();
        let instructor = cell(&row, 10).replace('"', "");

        records.push(CourseRecord {
            course_code: field(0),
            prefix: field(1),
            course_title: field(3),
            section: field(4),
            seat_limit: leading_int(&cell(&row, 5)),
            seat_used: leading_int(&cell(&row, 6)),
            seat_left: leading_int(&cell(&row, 7)),
            start_time: field(8),
            end_time: field(9),
            instructor: if instructor.trim().is_empty() {
                "-".to_string()
            } else {
                instructor
            },
            day: field(14),
        });
    }
    Ok(records)
}

/// Parses CSV text into raw records.
pub fn parse_records(text: &str) -> Result<Vec<CourseRecord>> {
    read_records(text.as_bytes())
}

/// Reads CSV and normalizes, dropping rows without a valid interval or day.
pub fn read_sessions<R: Read>(reader: R) -> Result<Vec<Session>> {
    let records = read_records(reader)?;
    let sessions = normalize_records(&records);
    debug!(
        "loaded {} sessions from {} rows ({} dropped)",
        sessions.len(),
        records.len(),
        records.len() - sessions.len()
    );
    Ok(sessions)
}

/// Reads and normalizes a CSV file.
pub fn load_sessions(path: impl AsRef<Path>) -> Result<Vec<Session>> {
    let file = File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_sessions(file)
}

/// Field `i` as text; missing fields are empty.
fn cell(row: &ByteRecord, i: usize) -> Cow<'_, str> {
    String::from_utf8_lossy(row.get(i).unwrap_or_default())
}

/// Leading decimal digits as a number; 0 if there are none.
fn leading_int(field: &str) -> u32 {
    let digits: String = field
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(0)
}
