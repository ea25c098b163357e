//! Canonical weekly slot grid.
//!
//! A `TimeGrid` is the ordered list of slots a scheduling run walks:
//! for each configured day (in the given order), every time from `start`
//! to `end` inclusive in `step_minutes` increments.
//!
//! # Example
//! ```
//! use u_shift::models::TimeGrid;
//!
//! let grid = TimeGrid::week();
//! assert_eq!(grid.len(), 5 * 19);
//! assert!(grid.is_day_start(0));
//! assert_eq!(grid.next_in_day(0), Some(1));
//! assert_eq!(grid.next_in_day(18), None); // Monday 17:30
//! ```

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{TimeOfDay, TimeSlot, Weekday};
use crate::error::GridError;

/// Grid configuration.
///
/// Defaults to Monday–Friday, 08:30–17:30, 30-minute steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpec {
    /// Days in scheduling order.
    pub days: Vec<Weekday>,
    /// First slot start of each day.
    pub start: TimeOfDay,
    /// Last slot start of each day (inclusive).
    pub end: TimeOfDay,
    /// Slot length in minutes.
    pub step_minutes: u16,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            days: Weekday::WORK_WEEK.to_vec(),
            start: TimeOfDay::at(8, 30),
            end: TimeOfDay::at(17, 30),
            step_minutes: 30,
        }
    }
}

impl GridSpec {
    /// Sets the days.
    pub fn with_days(mut self, days: impl Into<Vec<Weekday>>) -> Self {
        self.days = days.into();
        self
    }

    /// Sets the inclusive time range.
    pub fn with_range(mut self, start: TimeOfDay, end: TimeOfDay) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the step.
    pub fn with_step(mut self, step_minutes: u16) -> Self {
        self.step_minutes = step_minutes;
        self
    }
}

/// Ordered, immutable sequence of slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeGrid {
    days: Vec<Weekday>,
    times: Vec<TimeOfDay>,
    step_minutes: u16,
    slots: Vec<TimeSlot>,
    index: HashMap<TimeSlot, usize>,
}

impl TimeGrid {
    /// Builds a grid.
    ///
    /// # Errors
    /// - [`GridError::NoDays`] for an empty day list
    /// - [`GridError::DuplicateDay`] if a day repeats
    /// - [`GridError::InvertedRange`] if `start > end`
    /// - [`GridError::ZeroStep`] / [`GridError::UnevenStep`] if the step
    ///   does not evenly divide `end - start`
    pub fn new(
        days: &[Weekday],
        start: TimeOfDay,
        end: TimeOfDay,
        step_minutes: u16,
    ) -> Result<Self, GridError> {
        if days.is_empty() {
            return Err(GridError::NoDays);
        }
        for (i, day) in days.iter().enumerate() {
            if days[..i].contains(day) {
                return Err(GridError::DuplicateDay(*day));
            }
        }
        if start > end {
            return Err(GridError::InvertedRange { start, end });
        }
        if step_minutes == 0 {
            return Err(GridError::ZeroStep);
        }
        let span = end.minutes() - start.minutes();
        if span % step_minutes != 0 {
            return Err(GridError::UnevenStep {
                start,
                end,
                step_minutes,
            });
        }

        let times: Vec<TimeOfDay> = (0..=span / step_minutes)
            .filter_map(|k| start.plus_minutes(k * step_minutes))
            .collect();

        Ok(Self::assemble(days.to_vec(), times, step_minutes))
    }

    /// Builds a grid from its configuration.
    pub fn from_spec(spec: &GridSpec) -> Result<Self, GridError> {
        Self::new(&spec.days, spec.start, spec.end, spec.step_minutes)
    }

    /// The default Monday–Friday 08:30–17:30 half-hour grid.
    pub fn week() -> Self {
        let spec = GridSpec::default();
        let times: Vec<TimeOfDay> = (0..19u16)
            .filter_map(|k| spec.start.plus_minutes(k * spec.step_minutes))
            .collect();
        Self::assemble(spec.days, times, spec.step_minutes)
    }

    fn assemble(days: Vec<Weekday>, times: Vec<TimeOfDay>, step_minutes: u16) -> Self {
        let slots: Vec<TimeSlot> = days
            .iter()
            .flat_map(|&day| times.iter().map(move |&time| TimeSlot::new(day, time)))
            .collect();
        let index = slots.iter().enumerate().map(|(i, s)| (*s, i)).collect();
        Self {
            days,
            times,
            step_minutes,
            slots,
            index,
        }
    }

    /// All slots in canonical order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Slot at a position.
    pub fn slot(&self, idx: usize) -> Option<TimeSlot> {
        self.slots.get(idx).copied()
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no slots. Never true for a constructed grid.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Days in grid order.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Times of day, ascending.
    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    /// Slot length in minutes.
    pub fn step_minutes(&self) -> u16 {
        self.step_minutes
    }

    /// Slot length in hours.
    pub fn slot_hours(&self) -> f64 {
        f64::from(self.step_minutes) / 60.0
    }

    /// Position of a slot, if it belongs to this grid.
    pub fn index_of(&self, slot: &TimeSlot) -> Option<usize> {
        self.index.get(slot).copied()
    }

    /// Whether the slot at `idx` is the first slot of its day.
    #[inline]
    pub fn is_day_start(&self, idx: usize) -> bool {
        idx % self.times.len() == 0
    }

    /// Position of the following slot on the same day.
    pub fn next_in_day(&self, idx: usize) -> Option<usize> {
        let next = idx + 1;
        (next < self.slots.len() && !self.is_day_start(next)).then_some(next)
    }

    /// Position of the preceding slot on the same day.
    pub fn prev_in_day(&self, idx: usize) -> Option<usize> {
        (idx < self.slots.len() && !self.is_day_start(idx)).then(|| idx - 1)
    }
}
