//! Roster reporting.
//!
//! Derives what the export side needs from a finished roster: total hours
//! per worker and the day × time pivot listing who sits in each slot.
//! Both are pure functions of their input and never mutate it.
//!
//! Worker names stay lists until rendered; `", "` joining happens only in
//! [`Roster::cell_text`] and the `Display` impls.

mod hours;
mod roster;

pub use hours::HoursTable;
pub use roster::Roster;
