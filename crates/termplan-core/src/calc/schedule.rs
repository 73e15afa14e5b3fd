//! Weekly timetable derived from course meeting times.

use serde::Serialize;

use crate::{
    models::{Course, Weekday},
    time::parse_clock,
};

/// One meeting of one course on one day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry<'a> {
    pub day: Weekday,
    pub start_time: &'a str,
    pub end_time: &'a str,
    #[serde(skip)]
    pub start_minutes: u16,
    pub course: &'a Course,
}

/// Flattens every `(day, time, course)` triple and sorts by weekday, then by
/// start time. The sort is stable, so courses meeting at the same time keep
/// their plan order.
pub fn weekly_schedule<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<ScheduleEntry<'a>> {
    let mut entries: Vec<ScheduleEntry<'a>> = courses
        .into_iter()
        .filter(|c| c.is_scheduled())
        .filter_map(|course| {
            let start_time = course.start_time.as_deref()?;
            let end_time = course.end_time.as_deref()?;
            let start_minutes = parse_clock(start_time)?;
            Some(course.days_of_week.iter().flatten().map(move |&day| ScheduleEntry {
                day,
                start_time,
                end_time,
                start_minutes,
                course,
            }))
        })
        .flatten()
        .collect();

    entries.sort_by_key(|e| (e.day, e.start_minutes));
    entries
}
