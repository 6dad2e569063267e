//! Session integrity report.
//!
//! Layout never fails on bad input: a session without a day or with an
//! empty interval is simply left off the timetable, and a duplicated
//! row is laid out twice. That keeps rendering robust but hides data
//! problems from whoever maintains the export. [`validate_sessions`]
//! walks the same list and names every offending session so import
//! tooling can show the problems next to the rendered result.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Session, SessionKey};

/// `Ok` when the list is clean, otherwise every problem found.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// What is wrong with a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Same course code, section and day as an earlier session.
    DuplicateSession,
    /// Start is not before end.
    InvertedInterval,
    /// Blank day label.
    MissingDay,
}

/// One problem, tied to the session it was found on.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub key: SessionKey,
    pub start_time: String,
    pub end_time: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SessionKey {
            course_code,
            section,
            day,
        } = &self.key;
        match self.kind {
            ValidationErrorKind::DuplicateSession => {
                write!(f, "{course_code} sec {section} appears twice on {day}")
            }
            ValidationErrorKind::InvertedInterval => write!(
                f,
                "{course_code} sec {section} on {day}: start not before end ({}-{})",
                self.start_time, self.end_time
            ),
            ValidationErrorKind::MissingDay => {
                write!(f, "{course_code} sec {section} has no day")
            }
        }
    }
}

/// Reports every problem in a session list, in input order.
///
/// A session can produce more than one error. Duplicates are reported
/// on the second and later occurrences.
pub fn validate_sessions(sessions: &[Session]) -> ValidationResult {
    let mut seen = HashSet::new();
    let errors: Vec<ValidationError> = sessions
        .iter()
        .flat_map(|s| {
            let key = s.key();
            let kinds = [
                (s.day.trim().is_empty(), ValidationErrorKind::MissingDay),
                (!s.interval.is_valid(), ValidationErrorKind::InvertedInterval),
                (!seen.insert(key.clone()), ValidationErrorKind::DuplicateSession),
            ];
            kinds
                .into_iter()
                .filter(|(failed, _)| *failed)
                .map(|(_, kind)| ValidationError {
                    kind,
                    key: key.clone(),
                    start_time: s.start_time.clone(),
                    end_time: s.end_time.clone(),
                })
                .collect::<Vec<_>>()
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
