//! Schedule conflict detection.
//!
//! Conflicts are computed pairwise over every scheduled course in scope.
//! That is O(n²) in the number of courses, which stays small for a human
//! course load, and it keeps the "both courses of each conflicting pair"
//! reporting exact.

use serde::Serialize;

use crate::{
    models::{Course, Weekday},
    time::parse_clock,
};

/// The intersecting part of two meeting times, as the original `HH:MM`
/// strings of whichever course bounds it.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TimeOverlap {
    pub start: String,
    pub end: String,
}

/// Two courses meeting at overlapping times on the same day.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleConflict {
    /// The conflicting pair, in plan order
    pub courses: (Course, Course),
    pub day: Weekday,
    pub time_overlap: TimeOverlap,
}

struct Slot<'a> {
    course: &'a Course,
    start: u16,
    end: u16,
}

impl<'a> Slot<'a> {
    fn from_course(course: &'a Course) -> Option<Self> {
        if !course.is_scheduled() {
            return None;
        }
        let start = parse_clock(course.start_time.as_deref()?)?;
        let end = parse_clock(course.end_time.as_deref()?)?;
        Some(Self { course, start, end })
    }

    fn days(&self) -> impl Iterator<Item = &Weekday> {
        self.course.days_of_week.iter().flatten()
    }
}

/// Reports every pair of scheduled courses whose half-open meeting intervals
/// overlap on a shared day. Each unordered pair is reported once per shared
/// day; courses missing days or times are skipped.
pub fn detect_conflicts<'a>(courses: impl IntoIterator<Item = &'a Course>) -> Vec<ScheduleConflict> {
    let slots: Vec<Slot<'_>> = courses.into_iter().filter_map(Slot::from_course).collect();
    let mut conflicts = Vec::new();

    for (i, a) in slots.iter().enumerate() {
        for b in &slots[i + 1..] {
            if !(a.start < b.end && a.end > b.start) {
                continue;
            }
            for day in a.days() {
                if !b.days().any(|d| d == day) {
                    continue;
                }
                conflicts.push(ScheduleConflict {
                    courses: (a.course.clone(), b.course.clone()),
                    day: *day,
                    time_overlap: overlap(a, b),
                });
            }
        }
    }
    conflicts
}

/// Intersection `[max(start), min(end))`, expressed with the strings of the
/// course that owns each bound.
fn overlap(a: &Slot<'_>, b: &Slot<'_>) -> TimeOverlap {
    let later_start = if a.start >= b.start { a } else { b };
    let earlier_end = if a.end <= b.end { a } else { b };
    TimeOverlap {
        start: later_start.course.start_time.clone().unwrap_or_default(),
        end: earlier_end.course.end_time.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(id: &str, days: &[Weekday], start: &str, end: &str) -> Course {
        Course {
            id: id.into(),
            name: id.into(),
            credits: 3,
            days_of_week: Some(days.iter().copied().collect()),
            start_time: Some(start.into()),
            end_time: Some(end.into()),
            grade: None,
            color: None,
            notes: None,
        }
    }

    #[test]
    fn test_overlapping_courses_reported_with_intersection() {
        let a = course("a", &[Weekday::Monday], "09:00", "10:30");
        let b = course("b", &[Weekday::Monday], "10:00", "11:00");
        let conflicts = detect_conflicts([&a, &b]);

        assert_eq!(conflicts.len(), 1);
        assert_eq!(conflicts[0].day, Weekday::Monday);
        assert_eq!(
            conflicts[0].time_overlap,
            TimeOverlap {
                start: "10:00".into(),
                end: "10:30".into()
            }
        );
        assert_eq!(conflicts[0].courses.0.id, "a");
        assert_eq!(conflicts[0].courses.1.id, "b");
    }

    #[test]
    fn test_touching_intervals_do_not_conflict() {
        let a = course("a", &[Weekday::Monday], "09:00", "10:00");
        let b = course("b", &[Weekday::Monday], "10:00", "11:00");
        assert!(detect_conflicts([&a, &b]).is_empty());
    }

    #[test]
    fn test_different_days_do_not_conflict() {
        let a = course("a", &[Weekday::Monday], "09:00", "10:00");
        let b = course("b", &[Weekday::Tuesday], "09:00", "10:00");
        assert!(detect_conflicts([&a, &b]).is_empty());
    }

    #[test]
    fn test_pair_reported_once_per_shared_day() {
        let a = course("a", &[Weekday::Monday, Weekday::Wednesday], "09:00", "10:00");
        let b = course("b", &[Weekday::Wednesday, Weekday::Monday], "09:30", "11:00");
        let conflicts = detect_conflicts([&a, &b]);

        let days: Vec<_> = conflicts.iter().map(|c| c.day).collect();
        assert_eq!(days, vec![Weekday::Monday, Weekday::Wednesday]);
        for conflict in &conflicts {
            assert_eq!((conflict.courses.0.id.as_str(), conflict.courses.1.id.as_str()), ("a", "b"));
        }
    }

    #[test]
    fn test_contained_interval_uses_inner_course_bounds() {
        let outer = course("outer", &[Weekday::Friday], "08:00", "12:00");
        let inner = course("inner", &[Weekday::Friday], "09:15", "09:45");
        let conflicts = detect_conflicts([&outer, &inner]);
        assert_eq!(conflicts[0].time_overlap.start, "09:15");
        assert_eq!(conflicts[0].time_overlap.end, "09:45");
    }

    #[test]
    fn test_unscheduled_courses_skipped() {
        let a = course("a", &[Weekday::Monday], "09:00", "10:00");
        let mut b = course("b", &[Weekday::Monday], "09:00", "10:00");
        b.start_time = None;
        let mut c = course("c", &[], "09:00", "10:00");
        c.days_of_week = None;
        assert!(detect_conflicts([&a, &b, &c]).is_empty());
    }

    #[test]
    fn test_three_way_overlap_reports_each_pair() {
        let a = course("a", &[Weekday::Thursday], "09:00", "11:00");
        let b = course("b", &[Weekday::Thursday], "10:00", "12:00");
        let c = course("c", &[Weekday::Thursday], "10:30", "10:45");
        let pairs: Vec<_> = detect_conflicts([&a, &b, &c])
            .into_iter()
            .map(|c| (c.courses.0.id, c.courses.1.id))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), "b".to_string()),
                ("a".to_string(), "c".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }
}
