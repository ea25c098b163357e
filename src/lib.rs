//! Weekly shift rostering for the U-Engine ecosystem.
//!
//! Turns per-worker availability grids into a half-hour staffing roster
//! for a working week, then derives hours and a printable timetable.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `TimeSlot`, `TimeGrid`, `AvailabilityGrid`,
//!   `AvailabilityMatrix`, `AssignmentMatrix`
//! - **`scheduler`**: Greedy single-pass `ShiftScheduler`, `ShiftRules`,
//!   `WorkerState`, `RosterKpi`
//! - **`report`**: `HoursTable` and the day × time `Roster` pivot
//! - **`validation`**: Roster checks (availability, capacity, lunch streaks)
//! - **`error`**: Construction errors for grids and availability input
//!
//! # Pipeline
//!
//! ```
//! use u_shift::models::{AvailabilityGrid, AvailabilityMatrix, MissingCellPolicy, TimeGrid};
//! use u_shift::report::{HoursTable, Roster};
//! use u_shift::scheduler::ShiftScheduler;
//!
//! let grid = TimeGrid::week();
//! let sources = vec![
//!     AvailabilityGrid::uniform("Kim", &grid, true),
//!     AvailabilityGrid::uniform("Lee", &grid, true),
//! ];
//! let availability =
//!     AvailabilityMatrix::merge(&grid, &sources, MissingCellPolicy::Unavailable).unwrap();
//!
//! let plan = ShiftScheduler::new().schedule(&availability);
//! let hours = HoursTable::from_assignment(&plan.assignments);
//! let roster = Roster::from_assignment(&plan.assignments);
//!
//! assert_eq!(hours.total_hours("Kim"), Some(44.0));
//! assert_eq!(roster.days().len(), 5);
//! ```
//!
//! # Scope
//!
//! Image extraction of timetables, spreadsheet I/O and upload workflows
//! live outside this crate. The scheduler is a deterministic greedy pass:
//! no search, no backtracking, no coverage guarantee.

pub mod error;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
