//! Roster validation.
//!
//! Checks a finished [`AssignmentMatrix`] against the availability it was
//! built from and the staffing rules. Detects:
//! - Workers assigned to slots they cannot work
//! - Slots staffed beyond capacity
//! - Streaks that run too long through lunch
//! - Rosters built on a different grid or worker list
//!
//! A roster produced by [`ShiftScheduler`](crate::scheduler::ShiftScheduler)
//! from the same inputs always passes.

use serde::{Deserialize, Serialize};

use crate::models::{AssignmentMatrix, AvailabilityMatrix, TimeSlot};
use crate::scheduler::ShiftRules;

/// Validation result.
pub type ValidationResult = Result<(), Vec<Violation>>;

/// A rule violation found in a roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Violation category.
    pub kind: ViolationKind,
    /// Slot where it occurs (first slot of the streak for lunch violations).
    pub slot: Option<TimeSlot>,
    /// Worker involved, if any.
    pub worker: Option<String>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of roster violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Assigned while unavailable.
    NotAvailable,
    /// More workers than the slot allows.
    CapacityExceeded,
    /// Streak at or over the lunch limit containing a lunch slot.
    LunchStreak,
    /// Roster and availability disagree on grid or workers.
    Mismatch,
}

impl Violation {
    fn new(
        kind: ViolationKind,
        slot: Option<TimeSlot>,
        worker: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            slot,
            worker: worker.map(str::to_string),
            message: message.into(),
        }
    }
}

/// Validates a roster.
///
/// Checks:
/// 1. Roster and availability share grid and worker list
/// 2. Every assignment is backed by availability
/// 3. No slot exceeds its capacity (day-start or regular)
/// 4. No maximal streak breaks the lunch rule
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(violations)` with every issue found.
pub fn validate_assignment(
    availability: &AvailabilityMatrix,
    assignments: &AssignmentMatrix,
    rules: &ShiftRules,
) -> ValidationResult {
    if availability.grid() != assignments.grid() || availability.workers() != assignments.workers()
    {
        return Err(vec![Violation::new(
            ViolationKind::Mismatch,
            None,
            None,
            "roster was not built from this availability",
        )]);
    }

    let grid = assignments.grid();
    let workers = assignments.workers();
    let mut violations = Vec::new();

    for (idx, &slot) in grid.slots().iter().enumerate() {
        let assigned = assignments.assigned(idx);

        for &w in assigned {
            if !availability.is_available(idx, w) {
                violations.push(Violation::new(
                    ViolationKind::NotAvailable,
                    Some(slot),
                    Some(&workers[w]),
                    format!("{} assigned at {slot} while unavailable", workers[w]),
                ));
            }
        }

        let capacity = rules.capacity(grid.is_day_start(idx));
        if assigned.len() > capacity {
            violations.push(Violation::new(
                ViolationKind::CapacityExceeded,
                Some(slot),
                None,
                format!("{} workers at {slot}, capacity {capacity}", assigned.len()),
            ));
        }
    }

    for (w, name) in workers.iter().enumerate() {
        for run in assignments.streaks(w) {
            let slots: Vec<TimeSlot> = run.iter().filter_map(|&i| grid.slot(i)).collect();
            if rules.violates_lunch(&slots) {
                violations.push(Violation::new(
                    ViolationKind::LunchStreak,
                    slots.first().copied(),
                    Some(name),
                    format!("{name} works {} consecutive slots through lunch", slots.len()),
                ));
            }
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AvailabilityGrid, MissingCellPolicy, TimeGrid, TimeOfDay, Weekday};
    use crate::scheduler::ShiftScheduler;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn monday() -> TimeGrid {
        TimeGrid::new(&[Weekday::Mon], t("08:30"), t("17:30"), 30).unwrap()
    }

    fn availability(grid: &TimeGrid, sources: &[AvailabilityGrid]) -> AvailabilityMatrix {
        AvailabilityMatrix::merge(grid, sources, MissingCellPolicy::Unavailable).unwrap()
    }

    #[test]
    fn test_scheduler_output_is_valid() {
        let grid = monday();
        let avail = availability(
            &grid,
            &[
                AvailabilityGrid::uniform("A", &grid, true),
                AvailabilityGrid::uniform("B", &grid, true),
                AvailabilityGrid::uniform("C", &grid, true),
            ],
        );
        let plan = ShiftScheduler::new().schedule(&avail);
        assert!(validate_assignment(&avail, &plan.assignments, &ShiftRules::default()).is_ok());
    }

    #[test]
    fn test_not_available() {
        let grid = monday();
        let avail = availability(&grid, &[AvailabilityGrid::new("A")]);
        let mut roster = AssignmentMatrix::new(grid.clone(), vec!["A".into()]);
        roster.assign(3, 0);

        let errors = validate_assignment(&avail, &roster, &ShiftRules::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ViolationKind::NotAvailable);
        assert_eq!(errors[0].worker.as_deref(), Some("A"));
        assert_eq!(errors[0].slot, grid.slot(3));
    }

    #[test]
    fn test_capacity_exceeded() {
        let grid = monday();
        let sources: Vec<AvailabilityGrid> = ["A", "B", "C"]
            .iter()
            .map(|n| AvailabilityGrid::uniform(*n, &grid, true))
            .collect();
        let avail = availability(&grid, &sources);
        let mut roster = AssignmentMatrix::new(grid.clone(), avail.workers().to_vec());
        roster.assign(0, 0);
        roster.assign(0, 1); // day start allows 1
        for w in 0..3 {
            roster.assign(5, w); // regular slot allows 2
        }

        let errors = validate_assignment(&avail, &roster, &ShiftRules::default()).unwrap_err();
        let capacity: Vec<_> = errors
            .iter()
            .filter(|e| e.kind == ViolationKind::CapacityExceeded)
            .collect();
        assert_eq!(capacity.len(), 2);
        assert_eq!(capacity[0].slot, grid.slot(0));
        assert_eq!(capacity[1].slot, grid.slot(5));
    }

    #[test]
    fn test_lunch_streak() {
        let grid = monday();
        let avail = availability(&grid, &[AvailabilityGrid::uniform("A", &grid, true)]);
        let mut roster = AssignmentMatrix::new(grid.clone(), vec!["A".into()]);
        for idx in 0..14 {
            roster.assign(idx, 0);
        }

        let errors = validate_assignment(&avail, &roster, &ShiftRules::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ViolationKind::LunchStreak);
        assert_eq!(errors[0].slot, grid.slot(0));
        assert!(errors[0].message.contains("14 consecutive"));
    }

    #[test]
    fn test_mismatch() {
        let grid = monday();
        let avail = availability(&grid, &[AvailabilityGrid::new("A")]);
        let roster = AssignmentMatrix::new(grid, vec!["Z".into()]);
        let errors = validate_assignment(&avail, &roster, &ShiftRules::default()).unwrap_err();
        assert_eq!(errors[0].kind, ViolationKind::Mismatch);
    }
}
