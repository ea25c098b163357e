//! Shift rostering domain models.
//!
//! Provides the data types a rostering run consumes and produces:
//! the canonical weekly slot grid, per-worker availability, and the
//! slot-by-slot assignment.
//!
//! # Domain Mappings
//!
//! | u-shift | Campus office | Retail | Help desk |
//! |---------|---------------|--------|-----------|
//! | TimeSlot | Half-hour desk slot | Register slot | Phone slot |
//! | Worker | Student assistant | Clerk | Agent |
//! | AvailabilityGrid | Class timetable (inverted) | Availability form | Shift preference |
//! | AssignmentMatrix | Desk roster | Floor plan | Rota |

mod assignment;
mod availability;
mod grid;
mod time;

pub use assignment::AssignmentMatrix;
pub use availability::{AvailabilityGrid, AvailabilityMatrix, MissingCellPolicy};
pub use grid::{GridSpec, TimeGrid};
pub use time::{TimeOfDay, TimeSlot, Weekday};
