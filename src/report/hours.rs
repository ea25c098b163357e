//! Total hours per worker.

use std::fmt;

use serde::Serialize;

use crate::models::AssignmentMatrix;

/// Worker name → assigned hours, in roster worker order.
///
/// Hours are `slot length × assigned slots` (0.5 per slot on the
/// default half-hour grid).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoursTable {
    rows: Vec<(String, f64)>,
}

impl HoursTable {
    /// Computes hours from a roster.
    pub fn from_assignment(assignments: &AssignmentMatrix) -> Self {
        let slot_hours = assignments.grid().slot_hours();
        let rows = assignments
            .workers()
            .iter()
            .enumerate()
            .map(|(w, name)| (name.clone(), assignments.slot_count_for(w) as f64 * slot_hours))
            .collect();
        Self { rows }
    }

    /// Hours of one worker, `None` if unknown.
    pub fn total_hours(&self, worker: &str) -> Option<f64> {
        self.rows
            .iter()
            .find(|(name, _)| name == worker)
            .map(|(_, h)| *h)
    }

    /// All rows.
    pub fn rows(&self) -> &[(String, f64)] {
        &self.rows
    }

    /// Sum over all workers.
    pub fn grand_total(&self) -> f64 {
        self.rows.iter().map(|(_, h)| h).sum()
    }
}

impl fmt::Display for HoursTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, hours) in &self.rows {
            writeln!(f, "{name}\t{hours:.1}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeGrid, TimeOfDay, Weekday};

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn test_hours_from_assignment() {
        let grid = TimeGrid::new(&[Weekday::Mon], t("08:30"), t("10:00"), 30).unwrap();
        let mut roster = AssignmentMatrix::new(grid, vec!["A".into(), "B".into(), "C".into()]);
        for idx in 0..4 {
            roster.assign(idx, 0);
        }
        roster.assign(2, 2);
        roster.assign(3, 2);

        let table = HoursTable::from_assignment(&roster);
        assert_eq!(table.total_hours("A"), Some(2.0));
        assert_eq!(table.total_hours("B"), Some(0.0));
        assert_eq!(table.total_hours("C"), Some(1.0));
        assert_eq!(table.total_hours("D"), None);
        assert!((table.grand_total() - 3.0).abs() < 1e-10);
        assert_eq!(table.to_string(), "A\t2.0\nB\t0.0\nC\t1.0\n");
    }

    #[test]
    fn test_hours_follow_slot_length() {
        let grid = TimeGrid::new(&[Weekday::Mon], t("08:00"), t("10:00"), 60).unwrap();
        let mut roster = AssignmentMatrix::new(grid, vec!["A".into()]);
        roster.assign(0, 0);
        roster.assign(1, 0);
        assert_eq!(HoursTable::from_assignment(&roster).total_hours("A"), Some(2.0));
    }

    #[test]
    fn test_hours_serialize() {
        let grid = TimeGrid::new(&[Weekday::Mon], t("08:30"), t("09:00"), 30).unwrap();
        let roster = AssignmentMatrix::new(grid, vec!["A".into()]);
        let json = serde_json::to_string(&HoursTable::from_assignment(&roster)).unwrap();
        assert_eq!(json, r#"{"rows":[["A",0.0]]}"#);
    }
}
