//! Error types.
//!
//! Only construction of the time grid and of availability inputs can fail.
//! An unstaffed slot is a normal scheduling outcome, not an error.

use thiserror::Error;

use crate::models::{TimeOfDay, Weekday};

/// Errors raised while building a [`TimeGrid`](crate::models::TimeGrid)
/// or parsing its labels.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The day list is empty.
    #[error("time grid has no days")]
    NoDays,
    /// A day appears more than once in the day list.
    #[error("day {0} listed more than once")]
    DuplicateDay(Weekday),
    /// Start time lies after end time.
    #[error("start time {start} is after end time {end}")]
    InvertedRange {
        /// First time of day.
        start: TimeOfDay,
        /// Last time of day.
        end: TimeOfDay,
    },
    /// Step of zero minutes.
    #[error("step must be positive")]
    ZeroStep,
    /// Step does not evenly divide the start..end range.
    #[error("step of {step_minutes} min does not divide {start}..{end}")]
    UnevenStep {
        /// First time of day.
        start: TimeOfDay,
        /// Last time of day.
        end: TimeOfDay,
        /// Step length in minutes.
        step_minutes: u16,
    },
    /// A time label could not be parsed.
    #[error("invalid time label '{0}'")]
    InvalidTime(String),
    /// A day label could not be parsed.
    #[error("invalid day label '{0}'")]
    InvalidDay(String),
}

/// Errors raised while building availability inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AvailabilityError {
    /// A source has an empty (or whitespace-only) worker name.
    #[error("worker name is empty")]
    EmptyWorkerName,
    /// Two sources carry the same worker name.
    #[error("duplicate worker '{0}'")]
    DuplicateWorker(String),
    /// A table row has a different number of cells than there are day headers.
    #[error("row '{time}' has {found} cells, expected {expected}")]
    RaggedRow {
        /// Row time label.
        time: String,
        /// Number of day headers.
        expected: usize,
        /// Number of cells in the row.
        found: usize,
    },
    /// Two table rows carry the same time of day.
    #[error("time row '{0}' repeats an earlier row")]
    DuplicateTime(String),
    /// A table cell holds something other than 0, 1 or blank.
    #[error("cell ({day}, {time}) has invalid value '{value}'")]
    InvalidCell {
        /// Column day label.
        day: String,
        /// Row time label.
        time: String,
        /// Raw cell text.
        value: String,
    },
    /// A label in the table could not be parsed.
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// Errors raised by an end-to-end rostering request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The grid configuration is invalid.
    #[error("invalid time grid: {0}")]
    Grid(#[from] GridError),
    /// The availability sources are invalid.
    #[error("invalid availability: {0}")]
    Availability(#[from] AvailabilityError),
}
