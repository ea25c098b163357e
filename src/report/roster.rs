//! Day × time roster pivot.

use std::fmt;

use serde::Serialize;

use crate::models::{AssignmentMatrix, AvailabilityMatrix, TimeGrid, TimeOfDay, TimeSlot, Weekday};

/// Names per slot, laid out with one row per time and one column per day.
///
/// Days are ordered Monday first and times ascending, regardless of the
/// order the grid was configured in. Names within a cell keep their
/// selection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roster {
    days: Vec<Weekday>,
    times: Vec<TimeOfDay>,
    // cells[time][day]
    cells: Vec<Vec<Vec<String>>>,
}

impl Roster {
    /// Pivots the assigned workers of a roster.
    pub fn from_assignment(assignments: &AssignmentMatrix) -> Self {
        Self::pivot(assignments.grid(), |idx| {
            assignments
                .assigned_names(idx)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
    }

    /// Pivots the available workers (the merged availability timetable).
    pub fn from_availability(availability: &AvailabilityMatrix) -> Self {
        let workers = availability.workers();
        Self::pivot(availability.grid(), |idx| {
            availability
                .available_workers(idx)
                .into_iter()
                .map(|w| workers[w].clone())
                .collect()
        })
    }

    fn pivot(grid: &TimeGrid, names_at: impl Fn(usize) -> Vec<String>) -> Self {
        let mut days = grid.days().to_vec();
        days.sort();
        let times = grid.times().to_vec();

        let cells: Vec<Vec<Vec<String>>> = times
            .iter()
            .map(|&time| {
                days.iter()
                    .map(|&day| {
                        grid.index_of(&TimeSlot::new(day, time))
                            .map(&names_at)
                            .unwrap_or_default()
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Self { days, times, cells }
    }

    /// Column days.
    pub fn days(&self) -> &[Weekday] {
        &self.days
    }

    /// Row times.
    pub fn times(&self) -> &[TimeOfDay] {
        &self.times
    }

    /// Names in one cell, `None` outside the roster.
    pub fn cell(&self, day: Weekday, time: TimeOfDay) -> Option<&[String]> {
        let d = self.days.iter().position(|&x| x == day)?;
        let t = self.times.iter().position(|&x| x == time)?;
        Some(self.cells[t][d].as_slice())
    }

    /// Names in one cell joined with `", "`. Empty outside the roster.
    pub fn cell_text(&self, day: Weekday, time: TimeOfDay) -> String {
        self.cell(day, time)
            .map(|names| names.join(", "))
            .unwrap_or_default()
    }

    /// Rows of rendered cells, header row first.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let header: Vec<String> = std::iter::once("Time".to_string())
            .chain(self.days.iter().map(|d| d.to_string()))
            .collect();
        let body = self.times.iter().zip(&self.cells).map(|(time, row)| {
            std::iter::once(time.to_string())
                .chain(row.iter().map(|names| names.join(", ")))
                .collect::<Vec<String>>()
        });
        std::iter::once(header).chain(body).collect()
    }
}

impl fmt::Display for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = self.to_rows();
        let columns = rows.first().map_or(0, Vec::len);
        let widths: Vec<usize> = (0..columns)
            .map(|c| {
                rows.iter()
                    .map(|r| r[c].chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        for row in &rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, &w)| format!("{cell:<w$}"))
                .collect::<Vec<_>>()
                .join("  ");
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
