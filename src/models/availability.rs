//! Worker availability.
//!
//! Each worker supplies one [`AvailabilityGrid`]: a sparse map from slot to
//! "can work". [`AvailabilityMatrix::merge`] reindexes every grid onto the
//! canonical [`TimeGrid`] and produces a dense slot × worker table.
//!
//! # Missing cells
//! A grid may omit slots (a partial timetable, a blank cell). Omitted slots
//! are filled according to a single [`MissingCellPolicy`], applied to every
//! source alike. The default is [`MissingCellPolicy::Unavailable`]: nobody is
//! scheduled into a slot they never marked.
//!
//! Cells for slots outside the grid are dropped.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::{TimeGrid, TimeOfDay, TimeSlot, Weekday};
use crate::error::{AvailabilityError, GridError};

/// How slots absent from a worker's grid are treated when merging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissingCellPolicy {
    /// Missing means "cannot work".
    #[default]
    Unavailable,
    /// Missing means "can work".
    Available,
}

impl MissingCellPolicy {
    #[inline]
    fn fill(self) -> bool {
        matches!(self, MissingCellPolicy::Available)
    }
}

/// One worker's self-reported availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityGrid {
    /// Worker name. Unique across the sources of one run.
    pub worker: String,
    /// Known cells. Slots not present are "missing".
    pub cells: BTreeMap<TimeSlot, bool>,
}

impl AvailabilityGrid {
    /// Creates an empty grid (every cell missing).
    pub fn new(worker: impl Into<String>) -> Self {
        Self {
            worker: worker.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Creates a grid marking every slot of `grid` with the same value.
    pub fn uniform(worker: impl Into<String>, grid: &TimeGrid, available: bool) -> Self {
        Self {
            worker: worker.into(),
            cells: grid.slots().iter().map(|&s| (s, available)).collect(),
        }
    }

    /// Sets one cell.
    pub fn with_slot(mut self, slot: TimeSlot, available: bool) -> Self {
        self.cells.insert(slot, available);
        self
    }

    /// Marks every slot of `grid` on `day` between `from` and `to`
    /// (inclusive) as available.
    pub fn with_available_range(
        mut self,
        grid: &TimeGrid,
        day: Weekday,
        from: TimeOfDay,
        to: TimeOfDay,
    ) -> Self {
        for &time in grid.times().iter().filter(|&&t| t >= from && t <= to) {
            self.cells.insert(TimeSlot::new(day, time), true);
        }
        self
    }

    /// Sets one cell in place.
    pub fn set(&mut self, slot: TimeSlot, available: bool) {
        self.cells.insert(slot, available);
    }

    /// Cell value, `None` if missing.
    pub fn get(&self, slot: &TimeSlot) -> Option<bool> {
        self.cells.get(slot).copied()
    }

    /// Builds a grid from a labelled 0/1 table.
    ///
    /// `day_headers` are the column labels (e.g. `"Mon"` or `"월"`); each
    /// row is a time label (e.g. `"8:30"`) and one cell per column. Cells
    /// are `"1"`/`"0"` (`"1.0"`/`"0.0"` accepted); blank cells stay missing.
    /// Headers naming the same day (`"Mon"`, `"월"`) or rows naming the same
    /// time (`"8:30"`, `"08:30"`) are rejected.
    ///
    /// # Example
    /// ```
    /// use u_shift::models::{AvailabilityGrid, TimeSlot, Weekday};
    ///
    /// let grid = AvailabilityGrid::from_table(
    ///     "Kim",
    ///     &["월", "화"],
    ///     &[("8:30", vec!["1", "0"]), ("9:00", vec!["1", ""])],
    /// )
    /// .unwrap();
    /// let mon_0900 = TimeSlot::new(Weekday::Mon, "09:00".parse().unwrap());
    /// let tue_0900 = TimeSlot::new(Weekday::Tue, "09:00".parse().unwrap());
    /// assert_eq!(grid.get(&mon_0900), Some(true));
    /// assert_eq!(grid.get(&tue_0900), None);
    /// ```
    pub fn from_table<S: AsRef<str>>(
        worker: impl Into<String>,
        day_headers: &[S],
        rows: &[(S, Vec<S>)],
    ) -> Result<Self, AvailabilityError> {
        let days = day_headers
            .iter()
            .map(|h| h.as_ref().parse::<Weekday>())
            .collect::<Result<Vec<_>, _>>()?;
        for (i, day) in days.iter().enumerate() {
            if days[..i].contains(day) {
                return Err(GridError::DuplicateDay(*day).into());
            }
        }

        let mut grid = Self::new(worker);
        let mut seen_times = Vec::with_capacity(rows.len());
        for (time_label, cells) in rows {
            let time_label = time_label.as_ref();
            if cells.len() != days.len() {
                return Err(AvailabilityError::RaggedRow {
                    time: time_label.to_string(),
                    expected: days.len(),
                    found: cells.len(),
                });
            }
            let time: TimeOfDay = time_label.parse()?;
            if seen_times.contains(&time) {
                return Err(AvailabilityError::DuplicateTime(time_label.to_string()));
            }
            seen_times.push(time);
            for (day, cell) in days.iter().zip(cells) {
                let raw = cell.as_ref().trim();
                let value = match raw {
                    "" => continue,
                    "1" | "1.0" => true,
                    "0" | "0.0" => false,
                    _ => {
                        return Err(AvailabilityError::InvalidCell {
                            day: day.to_string(),
                            time: time_label.to_string(),
                            value: raw.to_string(),
                        })
                    }
                };
                grid.set(TimeSlot::new(*day, time), value);
            }
        }
        Ok(grid)
    }
}

/// Dense slot × worker availability table.
///
/// Workers keep the order in which their sources were supplied; that order
/// is the final tie-breaker throughout scheduling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityMatrix {
    grid: TimeGrid,
    workers: Vec<String>,
    policy: MissingCellPolicy,
    // Slot-major: cells[slot * workers.len() + worker].
    cells: Vec<bool>,
}

impl AvailabilityMatrix {
    /// Merges per-worker grids onto `grid`.
    ///
    /// # Errors
    /// - [`AvailabilityError::EmptyWorkerName`] for a blank worker name
    /// - [`AvailabilityError::DuplicateWorker`] if two sources share a name
    pub fn merge(
        grid: &TimeGrid,
        sources: &[AvailabilityGrid],
        policy: MissingCellPolicy,
    ) -> Result<Self, AvailabilityError> {
        let mut seen = HashSet::new();
        for source in sources {
            if source.worker.trim().is_empty() {
                return Err(AvailabilityError::EmptyWorkerName);
            }
            if !seen.insert(source.worker.as_str()) {
                return Err(AvailabilityError::DuplicateWorker(source.worker.clone()));
            }
        }

        let n = sources.len();
        let mut cells = vec![policy.fill(); grid.len() * n];
        for (w, source) in sources.iter().enumerate() {
            let mut dropped = 0usize;
            for (slot, &available) in &source.cells {
                match grid.index_of(slot) {
                    Some(idx) => cells[idx * n + w] = available,
                    None => dropped += 1,
                }
            }
            if dropped > 0 {
                tracing::debug!(
                    worker = %source.worker,
                    dropped,
                    "cells outside the time grid ignored"
                );
            }
        }

        Ok(Self {
            grid: grid.clone(),
            workers: sources.iter().map(|s| s.worker.clone()).collect(),
            policy,
            cells,
        })
    }

    /// The grid this matrix is indexed by.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Worker names in source order.
    pub fn workers(&self) -> &[String] {
        &self.workers
    }

    /// Number of workers.
    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    /// Index of a worker by name.
    pub fn worker_index(&self, name: &str) -> Option<usize> {
        self.workers.iter().position(|w| w == name)
    }

    /// The policy used to fill missing cells.
    pub fn policy(&self) -> MissingCellPolicy {
        self.policy
    }

    /// Whether worker `worker` can work slot `slot` (both by index).
    ///
    /// Out-of-range indices read as unavailable.
    #[inline]
    pub fn is_available(&self, slot: usize, worker: usize) -> bool {
        worker < self.workers.len()
            && self
                .cells
                .get(slot * self.workers.len() + worker)
                .copied()
                .unwrap_or(false)
    }

    /// Whether the named worker can work `slot`.
    pub fn is_available_at(&self, slot: &TimeSlot, worker: &str) -> bool {
        match (self.grid.index_of(slot), self.worker_index(worker)) {
            (Some(s), Some(w)) => self.is_available(s, w),
            _ => false,
        }
    }

    /// Workers available in slot `slot`, in source order.
    pub fn available_workers(&self, slot: usize) -> Vec<usize> {
        (0..self.workers.len())
            .filter(|&w| self.is_available(slot, w))
            .collect()
    }

    /// Number of slots the worker is available for.
    pub fn available_slot_count(&self, worker: usize) -> usize {
        (0..self.grid.len())
            .filter(|&s| self.is_available(s, worker))
            .count()
    }
}
