//! Greedy shift scheduler and roster metrics.
//!
//! # Algorithm
//!
//! `ShiftScheduler` makes one deterministic forward pass over the week,
//! staffing each half-hour slot from the workers available in it. Local
//! preference order (continuity first, then least-worked) decides who gets
//! a seat; the look-ahead and lunch rules filter candidates. It is not
//! optimal and does not guarantee coverage.
//!
//! # KPI
//!
//! `RosterKpi` summarizes a finished roster: coverage, unstaffed slots,
//! per-worker hours and their spread, and day-opening counts.

mod greedy;
mod kpi;
mod rules;
mod state;

pub use greedy::{RosterRequest, ShiftPlan, ShiftScheduler};
pub use kpi::RosterKpi;
pub use rules::ShiftRules;
pub use state::WorkerState;
