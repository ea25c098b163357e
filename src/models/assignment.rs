//! Assignment (solution) model.
//!
//! For each slot of the grid, the ordered list of workers staffed in it.
//! Order is selection order within the slot, which is also the order
//! names appear in a rendered roster.

use super::{TimeGrid, TimeSlot};

/// Slot-by-slot staffing produced by a scheduling run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentMatrix {
    grid: TimeGrid,
    workers: Vec<String>,
    selected: Vec<Vec<usize>>,
}

impl AssignmentMatrix {
    /// Creates an empty matrix (nobody assigned anywhere).
    pub fn new(grid: TimeGrid, workers: Vec<String>) -> Self {
        let selected = vec![Vec::new(); grid.len()];
        Self {
            grid,
            workers,
            selected,
        }
    }

    /// Appends a worker to a slot's selection. Repeated assignment is a no-op.
    pub(crate) fn assign(&mut self, slot: usize, worker: usize) {
        if let Some(sel) = self.selected.get_mut(slot) {
            if !sel.contains(&worker) {
                sel.push(worker);
            }
        }
    }

    /// The grid this matrix is indexed by.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Worker names, indexed as in the source availability.
    pub fn workers(&self) -> &[String] {
        &self.workers
    }

    /// Index of a worker by name.
    pub fn worker_index(&self, name: &str) -> Option<usize> {
        self.workers.iter().position(|w| w == name)
    }

    /// Workers assigned to slot `slot`, in selection order.
    pub fn assigned(&self, slot: usize) -> &[usize] {
        self.selected.get(slot).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names of the workers assigned to slot `slot`, in selection order.
    pub fn assigned_names(&self, slot: usize) -> Vec<&str> {
        self.assigned(slot)
            .iter()
            .map(|&w| self.workers[w].as_str())
            .collect()
    }

    /// Names assigned to a slot given by value. Empty for foreign slots.
    pub fn assigned_at(&self, slot: &TimeSlot) -> Vec<&str> {
        self.grid
            .index_of(slot)
            .map(|idx| self.assigned_names(idx))
            .unwrap_or_default()
    }

    /// Whether worker `worker` is assigned to slot `slot`.
    #[inline]
    pub fn is_assigned(&self, slot: usize, worker: usize) -> bool {
        self.assigned(slot).contains(&worker)
    }

    /// Number of slots a worker is assigned to.
    pub fn slot_count_for(&self, worker: usize) -> usize {
        self.selected.iter().filter(|sel| sel.contains(&worker)).count()
    }

    /// Number of slots with at least one worker.
    pub fn staffed_slots(&self) -> usize {
        self.selected.iter().filter(|sel| !sel.is_empty()).count()
    }

    /// Total number of (slot, worker) assignments.
    pub fn assignment_count(&self) -> usize {
        self.selected.iter().map(Vec::len).sum()
    }

    /// Maximal runs of consecutive same-day slots the worker is assigned to.
    ///
    /// Each run is a list of slot indices, ascending. Runs never cross a
    /// day boundary.
    pub fn streaks(&self, worker: usize) -> Vec<Vec<usize>> {
        let mut runs: Vec<Vec<usize>> = Vec::new();
        let mut current: Vec<usize> = Vec::new();
        for idx in 0..self.grid.len() {
            if self.grid.is_day_start(idx) && !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
            if self.is_assigned(idx, worker) {
                current.push(idx);
            } else if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            runs.push(current);
        }
        runs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeOfDay, Weekday};

    fn two_day_grid() -> TimeGrid {
        let start: TimeOfDay = "09:00".parse().unwrap();
        let end: TimeOfDay = "10:30".parse().unwrap();
        TimeGrid::new(&[Weekday::Mon, Weekday::Tue], start, end, 30).unwrap()
    }

    #[test]
    fn test_empty_matrix() {
        let m = AssignmentMatrix::new(two_day_grid(), vec!["A".into()]);
        assert_eq!(m.staffed_slots(), 0);
        assert_eq!(m.assignment_count(), 0);
        assert!(m.assigned(0).is_empty());
        assert!(m.assigned(99).is_empty());
        assert!(m.streaks(0).is_empty());
    }

    #[test]
    fn test_assign_keeps_selection_order() {
        let mut m = AssignmentMatrix::new(two_day_grid(), vec!["A".into(), "B".into()]);
        m.assign(1, 1);
        m.assign(1, 0);
        m.assign(1, 1);
        assert_eq!(m.assigned(1), &[1, 0]);
        assert_eq!(m.assigned_names(1), vec!["B", "A"]);
        assert!(m.is_assigned(1, 0));
        assert!(!m.is_assigned(0, 0));
        assert_eq!(m.assignment_count(), 2);
    }

    #[test]
    fn test_assigned_at() {
        let mut m = AssignmentMatrix::new(two_day_grid(), vec!["A".into()]);
        m.assign(4, 0);
        let tue_0900 = TimeSlot::new(Weekday::Tue, "09:00".parse().unwrap());
        let wed_0900 = TimeSlot::new(Weekday::Wed, "09:00".parse().unwrap());
        assert_eq!(m.assigned_at(&tue_0900), vec!["A"]);
        assert!(m.assigned_at(&wed_0900).is_empty());
    }

    #[test]
    fn test_streaks_split_on_gaps_and_days() {
        // Mon: 0..4, Tue: 4..8
        let mut m = AssignmentMatrix::new(two_day_grid(), vec!["A".into()]);
        for idx in [0, 1, 3, 4, 5] {
            m.assign(idx, 0);
        }
        assert_eq!(m.streaks(0), vec![vec![0, 1], vec![3], vec![4, 5]]);
        assert_eq!(m.slot_count_for(0), 5);
        assert_eq!(m.staffed_slots(), 5);
    }
}
