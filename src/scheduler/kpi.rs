//! Roster quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Coverage rate | Staffed slots / total slots |
//! | Fully staffed | Slots filled to their capacity |
//! | Unstaffed slots | Slots with nobody assigned |
//! | Hours spread | max(hours) - min(hours) across workers |
//! | Morning shifts | Day-opening slots per worker |

use crate::models::{AssignmentMatrix, TimeSlot};

use super::ShiftRules;

/// Roster performance indicators.
///
/// Per-worker vectors follow the worker order of the roster.
#[derive(Debug, Clone)]
pub struct RosterKpi {
    /// Number of slots in the grid.
    pub total_slots: usize,
    /// Slots with at least one worker.
    pub staffed_slots: usize,
    /// Slots filled to capacity.
    pub fully_staffed_slots: usize,
    /// Slots with nobody assigned, in grid order.
    pub unstaffed_slots: Vec<TimeSlot>,
    /// Fraction of slots staffed (0.0..1.0).
    pub coverage_rate: f64,
    /// Assigned hours per worker.
    pub hours_by_worker: Vec<(String, f64)>,
    /// Fewest hours of any worker.
    pub min_hours: f64,
    /// Most hours of any worker.
    pub max_hours: f64,
    /// Day-opening slots per worker.
    pub morning_shifts_by_worker: Vec<(String, usize)>,
}

impl RosterKpi {
    /// Computes KPIs from a finished roster.
    pub fn calculate(assignments: &AssignmentMatrix, rules: &ShiftRules) -> Self {
        let grid = assignments.grid();
        let total_slots = grid.len();

        let mut unstaffed_slots = Vec::new();
        let mut fully_staffed_slots = 0;
        for (idx, &slot) in grid.slots().iter().enumerate() {
            let count = assignments.assigned(idx).len();
            if count == 0 {
                unstaffed_slots.push(slot);
            }
            if count >= rules.capacity(grid.is_day_start(idx)) {
                fully_staffed_slots += 1;
            }
        }
        let staffed_slots = total_slots - unstaffed_slots.len();

        let hours_by_worker: Vec<(String, f64)> = assignments
            .workers()
            .iter()
            .enumerate()
            .map(|(w, name)| {
                let hours = assignments.slot_count_for(w) as f64 * grid.slot_hours();
                (name.clone(), hours)
            })
            .collect();

        let morning_shifts_by_worker = assignments
            .workers()
            .iter()
            .enumerate()
            .map(|(w, name)| {
                let mornings = (0..total_slots)
                    .filter(|&idx| grid.is_day_start(idx) && assignments.is_assigned(idx, w))
                    .count();
                (name.clone(), mornings)
            })
            .collect();

        let (min_hours, max_hours) = if hours_by_worker.is_empty() {
            (0.0, 0.0)
        } else {
            hours_by_worker
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), (_, h)| {
                    (lo.min(*h), hi.max(*h))
                })
        };

        let coverage_rate = if total_slots == 0 {
            0.0
        } else {
            staffed_slots as f64 / total_slots as f64
        };

        Self {
            total_slots,
            staffed_slots,
            fully_staffed_slots,
            unstaffed_slots,
            coverage_rate,
            hours_by_worker,
            min_hours,
            max_hours,
            morning_shifts_by_worker,
        }
    }

    /// Difference between the most and least worked.
    pub fn hours_spread(&self) -> f64 {
        self.max_hours - self.min_hours
    }

    /// Whether the roster meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_coverage: f64, max_spread: f64) -> bool {
        self.coverage_rate >= min_coverage && self.hours_spread() <= max_spread
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        AvailabilityGrid, AvailabilityMatrix, MissingCellPolicy, TimeGrid, TimeOfDay, Weekday,
    };
    use crate::scheduler::ShiftScheduler;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn monday() -> TimeGrid {
        TimeGrid::new(&[Weekday::Mon], t("08:30"), t("17:30"), 30).unwrap()
    }

    fn plan_for(grid: &TimeGrid, sources: &[AvailabilityGrid]) -> AssignmentMatrix {
        let availability =
            AvailabilityMatrix::merge(grid, sources, MissingCellPolicy::Unavailable).unwrap();
        ShiftScheduler::new().schedule(&availability).assignments
    }

    #[test]
    fn test_kpi_single_worker_day() {
        let grid = monday();
        let assignments = plan_for(&grid, &[AvailabilityGrid::uniform("A", &grid, true)]);
        let kpi = RosterKpi::calculate(&assignments, &ShiftRules::default());

        assert_eq!(kpi.total_slots, 19);
        assert_eq!(kpi.staffed_slots, 18);
        assert_eq!(
            kpi.unstaffed_slots,
            vec![TimeSlot::new(Weekday::Mon, t("15:00"))]
        );
        // Only the opening slot is full with a single worker
        assert_eq!(kpi.fully_staffed_slots, 1);
        assert!((kpi.coverage_rate - 18.0 / 19.0).abs() < 1e-10);
        assert_eq!(kpi.hours_by_worker, vec![("A".to_string(), 9.0)]);
        assert_eq!(kpi.morning_shifts_by_worker, vec![("A".to_string(), 1)]);
        assert!((kpi.hours_spread() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_two_workers() {
        let grid = monday();
        let assignments = plan_for(
            &grid,
            &[
                AvailabilityGrid::uniform("A", &grid, true),
                AvailabilityGrid::uniform("B", &grid, true),
            ],
        );
        let kpi = RosterKpi::calculate(&assignments, &ShiftRules::default());

        assert_eq!(kpi.staffed_slots, 19);
        assert!(kpi.unstaffed_slots.is_empty());
        // A: 13 + 5 slots, B: 13 + 4 slots
        assert!((kpi.max_hours - 9.0).abs() < 1e-10);
        assert!((kpi.min_hours - 8.5).abs() < 1e-10);
        assert!((kpi.hours_spread() - 0.5).abs() < 1e-10);
        assert!(kpi.meets_thresholds(1.0, 0.5));
        assert!(!kpi.meets_thresholds(1.0, 0.4));
    }

    #[test]
    fn test_kpi_empty_roster() {
        let grid = monday();
        let assignments = plan_for(&grid, &[]);
        let kpi = RosterKpi::calculate(&assignments, &ShiftRules::default());
        assert_eq!(kpi.staffed_slots, 0);
        assert_eq!(kpi.unstaffed_slots.len(), 19);
        assert!((kpi.coverage_rate - 0.0).abs() < 1e-10);
        assert!((kpi.hours_spread() - 0.0).abs() < 1e-10);
        assert!(!kpi.meets_thresholds(0.5, 10.0));
    }
}
