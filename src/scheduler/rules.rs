//! Staffing rules applied by the greedy scheduler.

use serde::{Deserialize, Serialize};

use crate::models::{TimeOfDay, TimeSlot};

/// Business constraints for a rostering run.
///
/// All fields have defaults, so partial configuration deserializes:
///
/// ```
/// use u_shift::scheduler::ShiftRules;
///
/// let rules: ShiftRules = serde_json::from_str(r#"{"slot_capacity": 3}"#).unwrap();
/// assert_eq!(rules.slot_capacity, 3);
/// assert_eq!(rules.day_start_capacity, 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShiftRules {
    /// Maximum workers in the first slot of a day.
    pub day_start_capacity: usize,
    /// Maximum workers in any other slot.
    pub slot_capacity: usize,
    /// How many following same-day slots a new starter must also be
    /// available for. `1` means a new shift lasts at least one hour.
    pub look_ahead_slots: usize,
    /// Streak length (in slots) at which a streak may no longer include
    /// a lunch time.
    pub lunch_streak_limit: usize,
    /// Times of day counted as lunch.
    pub lunch_times: Vec<TimeOfDay>,
}

impl Default for ShiftRules {
    fn default() -> Self {
        Self {
            day_start_capacity: 1,
            slot_capacity: 2,
            look_ahead_slots: 1,
            lunch_streak_limit: 14,
            lunch_times: vec![TimeOfDay::at(12, 0), TimeOfDay::at(12, 30)],
        }
    }
}

impl ShiftRules {
    /// Sets the day-start capacity.
    pub fn with_day_start_capacity(mut self, capacity: usize) -> Self {
        self.day_start_capacity = capacity;
        self
    }

    /// Sets the regular slot capacity.
    pub fn with_slot_capacity(mut self, capacity: usize) -> Self {
        self.slot_capacity = capacity;
        self
    }

    /// Sets the look-ahead length.
    pub fn with_look_ahead(mut self, slots: usize) -> Self {
        self.look_ahead_slots = slots;
        self
    }

    /// Sets the lunch streak limit and lunch times.
    pub fn with_lunch(mut self, limit: usize, times: Vec<TimeOfDay>) -> Self {
        self.lunch_streak_limit = limit;
        self.lunch_times = times;
        self
    }

    /// Capacity of a slot.
    #[inline]
    pub fn capacity(&self, day_start: bool) -> usize {
        if day_start {
            self.day_start_capacity
        } else {
            self.slot_capacity
        }
    }

    /// Whether a slot falls on a lunch time.
    pub fn is_lunch(&self, slot: &TimeSlot) -> bool {
        self.lunch_times.contains(&slot.time)
    }

    /// Whether an uninterrupted streak runs too long through lunch.
    pub fn violates_lunch(&self, streak: &[TimeSlot]) -> bool {
        streak.len() >= self.lunch_streak_limit && streak.iter().any(|s| self.is_lunch(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TimeGrid, Weekday};

    fn monday_run(from: usize, len: usize) -> Vec<TimeSlot> {
        TimeGrid::week().slots()[from..from + len].to_vec()
    }

    #[test]
    fn test_defaults() {
        let rules = ShiftRules::default();
        assert_eq!(rules.capacity(true), 1);
        assert_eq!(rules.capacity(false), 2);
        assert_eq!(rules.look_ahead_slots, 1);
        assert_eq!(rules.lunch_streak_limit, 14);
        assert_eq!(rules.lunch_times.len(), 2);
    }

    #[test]
    fn test_lunch_violation() {
        let rules = ShiftRules::default();
        // Monday 08:30.. : 13 slots end at 14:30, 14 slots at 15:00
        assert!(!rules.violates_lunch(&monday_run(0, 13)));
        assert!(rules.violates_lunch(&monday_run(0, 14)));
        // Afternoon-only run: no lunch slot, never a violation
        let no_lunch: Vec<TimeSlot> = monday_run(9, 10);
        assert!(!no_lunch.iter().any(|s| rules.is_lunch(s)));
        assert!(!rules.violates_lunch(&no_lunch));
        assert!(!rules.violates_lunch(&[]));
    }

    #[test]
    fn test_is_lunch() {
        let rules = ShiftRules::default();
        let noon = TimeSlot::new(Weekday::Fri, "12:00".parse().unwrap());
        let half = TimeSlot::new(Weekday::Fri, "12:30".parse().unwrap());
        let one = TimeSlot::new(Weekday::Fri, "13:00".parse().unwrap());
        assert!(rules.is_lunch(&noon));
        assert!(rules.is_lunch(&half));
        assert!(!rules.is_lunch(&one));
    }

    #[test]
    fn test_builder_and_serde() {
        let rules = ShiftRules::default()
            .with_slot_capacity(3)
            .with_day_start_capacity(2)
            .with_look_ahead(2)
            .with_lunch(10, vec!["11:30".parse().unwrap()]);
        let json = serde_json::to_string(&rules).unwrap();
        assert!(json.contains("\"11:30\""));
        let back: ShiftRules = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rules);
    }
}
