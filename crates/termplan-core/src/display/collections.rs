//! Collection wrapper types for displaying derived facts.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

use crate::{
    calc::{ScheduleConflict, ScheduleEntry},
    history::ActionHistory,
};

/// Newtype wrapper for displaying schedule conflicts.
pub struct Conflicts<'a>(pub &'a [ScheduleConflict]);

impl fmt::Display for Conflicts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No schedule conflicts.");
        }
        writeln!(f, "# Schedule conflicts")?;
        writeln!(f)?;
        for conflict in self.0 {
            let (a, b) = &conflict.courses;
            writeln!(
                f,
                "- {}: **{}** and **{}** overlap {}-{}",
                conflict.day, a.name, b.name, conflict.time_overlap.start, conflict.time_overlap.end
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the weekly schedule, grouped by day.
pub struct Schedule<'a>(pub &'a [ScheduleEntry<'a>]);

impl fmt::Display for Schedule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No scheduled courses.");
        }
        writeln!(f, "# Weekly schedule")?;
        let mut current_day = None;
        for entry in self.0 {
            if current_day != Some(entry.day) {
                writeln!(f)?;
                writeln!(f, "## {}", entry.day)?;
                current_day = Some(entry.day);
            }
            writeln!(
                f,
                "- {}-{} {}",
                entry.start_time, entry.end_time, entry.course.name
            )?;
        }
        Ok(())
    }
}

/// Checkpoint time in the system timezone, down to the minute.
fn checkpoint_time(timestamp: &Timestamp) -> String {
    timestamp
        .to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d %H:%M")
        .to_string()
}

/// Newtype wrapper for displaying the undo history, newest first, with the
/// cursor position marked.
pub struct History<'a>(pub &'a ActionHistory);

impl fmt::Display for History<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No history.");
        }
        let cursor = self.0.cursor();
        let entries: Vec<_> = self.0.entries().enumerate().collect();
        for (i, entry) in entries.into_iter().rev() {
            let marker = if Some(i) == cursor { "➤" } else { " " };
            writeln!(
                f,
                "{marker} {}. {} ({})",
                i + 1,
                entry.kind,
                checkpoint_time(&entry.timestamp)
            )?;
        }
        Ok(())
    }
}
