//! Per-worker bookkeeping for one scheduling run.
//!
//! # Streak lifecycle
//! - idle → in-streak(1): fresh assignment (day start or new starter)
//! - in-streak(n) → in-streak(n+1): assigned again while continuing
//! - in-streak(n) → idle: not selected in a slot
//!
//! The idle transition is applied explicitly after every slot, so a
//! non-empty streak always ends at the previous slot.

use serde::Serialize;

use crate::models::TimeSlot;

/// Counters and current streak of one worker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkerState {
    /// Slots assigned so far.
    pub work_count: usize,
    /// Day-start slots assigned so far.
    pub morning_count: usize,
    /// Current uninterrupted run of assigned slots, oldest first.
    pub streak: Vec<TimeSlot>,
}

impl WorkerState {
    /// Whether the worker is between streaks.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.streak.is_empty()
    }

    /// The streak this worker would have if assigned to `slot`.
    pub(crate) fn prospective_streak(&self, slot: TimeSlot, continuing: bool) -> Vec<TimeSlot> {
        if continuing {
            let mut streak = Vec::with_capacity(self.streak.len() + 1);
            streak.extend_from_slice(&self.streak);
            streak.push(slot);
            streak
        } else {
            vec![slot]
        }
    }

    /// Records an accepted assignment. All counters move together.
    pub(crate) fn accept(&mut self, streak: Vec<TimeSlot>, day_start: bool) {
        self.work_count += 1;
        if day_start {
            self.morning_count += 1;
        }
        self.streak = streak;
    }

    /// Returns the worker to idle.
    pub(crate) fn end_streak(&mut self) {
        self.streak.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeGrid;

    #[test]
    fn test_state_transitions() {
        let slots = TimeGrid::week().slots().to_vec();
        let mut state = WorkerState::default();
        assert!(state.is_idle());

        let s = state.prospective_streak(slots[0], false);
        state.accept(s, true);
        assert_eq!(state.work_count, 1);
        assert_eq!(state.morning_count, 1);
        assert_eq!(state.streak, vec![slots[0]]);

        let s = state.prospective_streak(slots[1], true);
        state.accept(s, false);
        assert_eq!(state.streak, vec![slots[0], slots[1]]);
        assert_eq!(state.work_count, 2);
        assert_eq!(state.morning_count, 1);

        state.end_streak();
        assert!(state.is_idle());
        assert_eq!(state.work_count, 2);

        // Fresh start discards nothing but the streak
        let s = state.prospective_streak(slots[3], false);
        assert_eq!(s, vec![slots[3]]);
    }
}
