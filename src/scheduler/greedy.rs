//! Constraint-aware greedy shift scheduler.
//!
//! # Algorithm
//!
//! Slots are visited once, in grid order (day-major, time ascending).
//! Every decision reads the previous slot's outcome and the running
//! counters, so the pass is strictly sequential.
//!
//! **Day-start slot.** Available workers are ordered by `morning_count`
//! (ascending). The first ones passing the look-ahead are assigned, up to
//! `day_start_capacity`.
//!
//! **Other slots.** Candidates are the workers assigned in the previous
//! slot who are still available (continuing, ordered by `work_count`),
//! followed by the remaining available workers who pass the look-ahead
//! (new starters, ordered by `work_count`). Each candidate is accepted
//! unless its prospective streak breaks the lunch rule, up to
//! `slot_capacity`.
//!
//! Ties keep source order (stable sort), so a run is fully deterministic.
//! There is no backtracking; a slot nobody can take stays empty.
//!
//! # Complexity
//! O(s · w log w) where s = slots, w = workers (streak copies add at most
//! a day's length per accepted candidate).

use tracing::{debug, info, trace};

use super::{ShiftRules, WorkerState};
use crate::error::RosterError;
use crate::models::{
    AssignmentMatrix, AvailabilityGrid, AvailabilityMatrix, GridSpec, MissingCellPolicy,
    TimeGrid, TimeSlot,
};

/// Input container for an end-to-end run.
#[derive(Debug, Clone, Default)]
pub struct RosterRequest {
    /// Grid configuration.
    pub grid: GridSpec,
    /// One availability grid per worker.
    pub sources: Vec<AvailabilityGrid>,
    /// Merge policy for missing cells.
    pub missing: MissingCellPolicy,
}

impl RosterRequest {
    /// Creates a request on the default week grid.
    pub fn new(sources: Vec<AvailabilityGrid>) -> Self {
        Self {
            sources,
            ..Default::default()
        }
    }

    /// Sets the grid configuration.
    pub fn with_grid(mut self, grid: GridSpec) -> Self {
        self.grid = grid;
        self
    }

    /// Sets the missing-cell policy.
    pub fn with_missing(mut self, policy: MissingCellPolicy) -> Self {
        self.missing = policy;
        self
    }
}

/// Result of a scheduling run.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftPlan {
    /// Slot-by-slot staffing.
    pub assignments: AssignmentMatrix,
    /// Final per-worker state, indexed like `assignments.workers()`.
    pub states: Vec<WorkerState>,
}

impl ShiftPlan {
    /// Final state of a worker by name.
    pub fn state(&self, worker: &str) -> Option<&WorkerState> {
        self.assignments
            .worker_index(worker)
            .and_then(|w| self.states.get(w))
    }
}

/// Greedy single-pass shift scheduler.
///
/// # Example
///
/// ```
/// use u_shift::models::{AvailabilityGrid, AvailabilityMatrix, MissingCellPolicy, TimeGrid};
/// use u_shift::scheduler::ShiftScheduler;
///
/// let grid = TimeGrid::week();
/// let sources = vec![
///     AvailabilityGrid::uniform("Kim", &grid, true),
///     AvailabilityGrid::uniform("Lee", &grid, true),
/// ];
/// let availability =
///     AvailabilityMatrix::merge(&grid, &sources, MissingCellPolicy::Unavailable).unwrap();
///
/// let plan = ShiftScheduler::new().schedule(&availability);
/// assert_eq!(plan.assignments.assigned_names(0), vec!["Kim"]); // Monday 08:30
/// assert_eq!(plan.assignments.assigned_names(1), vec!["Kim", "Lee"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShiftScheduler {
    rules: ShiftRules,
}

impl ShiftScheduler {
    /// Creates a scheduler with default rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the staffing rules.
    pub fn with_rules(mut self, rules: ShiftRules) -> Self {
        self.rules = rules;
        self
    }

    /// The rules in effect.
    pub fn rules(&self) -> &ShiftRules {
        &self.rules
    }

    /// Builds the grid, merges availability and schedules under this
    /// scheduler's rules.
    pub fn schedule_request(&self, request: &RosterRequest) -> Result<ShiftPlan, RosterError> {
        let grid = TimeGrid::from_spec(&request.grid)?;
        let availability = AvailabilityMatrix::merge(&grid, &request.sources, request.missing)?;
        Ok(self.schedule(&availability))
    }

    /// Assigns workers to every slot of the availability's grid.
    pub fn schedule(&self, availability: &AvailabilityMatrix) -> ShiftPlan {
        let grid = availability.grid();
        let workers = availability.workers();
        let mut states = vec![WorkerState::default(); workers.len()];
        let mut assignments = AssignmentMatrix::new(grid.clone(), workers.to_vec());

        for (idx, &slot) in grid.slots().iter().enumerate() {
            let day_start = grid.is_day_start(idx);
            let available = availability.available_workers(idx);

            let candidates = if day_start {
                self.day_start_candidates(availability, idx, &available, &states)
            } else {
                self.regular_candidates(availability, &assignments, idx, &available, &states)
            };

            let selected = self.select(slot, day_start, &candidates, &mut states, workers);

            for (w, state) in states.iter_mut().enumerate() {
                if !selected.contains(&w) {
                    state.end_streak();
                }
            }
            for &w in &selected {
                assignments.assign(idx, w);
            }

            if selected.is_empty() {
                debug!(%slot, available = available.len(), "slot left unstaffed");
            } else {
                debug!(%slot, assigned = ?assignments.assigned_names(idx), "slot staffed");
            }
        }

        info!(
            slots = grid.len(),
            staffed = assignments.staffed_slots(),
            workers = workers.len(),
            "roster complete"
        );

        ShiftPlan {
            assignments,
            states,
        }
    }

    /// Day-start order: lowest `morning_count` first, look-ahead enforced.
    fn day_start_candidates(
        &self,
        availability: &AvailabilityMatrix,
        idx: usize,
        available: &[usize],
        states: &[WorkerState],
    ) -> Vec<(usize, bool)> {
        let mut order = available.to_vec();
        order.sort_by_key(|&w| states[w].morning_count);
        order
            .into_iter()
            .filter(|&w| self.passes_look_ahead(availability, idx, w))
            .map(|w| (w, false))
            .collect()
    }

    /// Continuing workers first, then new starters; each group by `work_count`.
    fn regular_candidates(
        &self,
        availability: &AvailabilityMatrix,
        assignments: &AssignmentMatrix,
        idx: usize,
        available: &[usize],
        states: &[WorkerState],
    ) -> Vec<(usize, bool)> {
        let prev = availability.grid().prev_in_day(idx);
        let (mut continuing, rest): (Vec<usize>, Vec<usize>) = available
            .iter()
            .partition(|&&w| prev.is_some_and(|p| assignments.is_assigned(p, w)));
        let mut new_starters: Vec<usize> = rest
            .into_iter()
            .filter(|&w| self.passes_look_ahead(availability, idx, w))
            .collect();

        continuing.sort_by_key(|&w| states[w].work_count);
        new_starters.sort_by_key(|&w| states[w].work_count);

        continuing
            .into_iter()
            .map(|w| (w, true))
            .chain(new_starters.into_iter().map(|w| (w, false)))
            .collect()
    }

    /// Walks the candidate list, accepting until the slot is full.
    fn select(
        &self,
        slot: TimeSlot,
        day_start: bool,
        candidates: &[(usize, bool)],
        states: &mut [WorkerState],
        workers: &[String],
    ) -> Vec<usize> {
        let capacity = self.rules.capacity(day_start);
        let mut selected = Vec::with_capacity(capacity);

        for &(w, continuing) in candidates {
            if selected.len() >= capacity {
                break;
            }
            let streak = states[w].prospective_streak(slot, continuing);
            if self.rules.violates_lunch(&streak) {
                trace!(%slot, worker = %workers[w], len = streak.len(), "lunch streak rejected");
                continue;
            }
            states[w].accept(streak, day_start);
            selected.push(w);
        }

        selected
    }

    /// Whether the worker is also available for the next
    /// `look_ahead_slots` slots of the same day.
    fn passes_look_ahead(&self, availability: &AvailabilityMatrix, idx: usize, worker: usize) -> bool {
        let grid = availability.grid();
        let mut cur = idx;
        for _ in 0..self.rules.look_ahead_slots {
            match grid.next_in_day(cur) {
                Some(next) if availability.is_available(next, worker) => cur = next,
                _ => {
                    if let Some(slot) = grid.slot(idx) {
                        trace!(%slot, worker = %availability.workers()[worker], "look-ahead failed");
                    }
                    return false;
                }
            }
        }
        true
    }
}
