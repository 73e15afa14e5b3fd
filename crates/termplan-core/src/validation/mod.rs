//! Schema validation for plan entities.
//!
//! Every value that enters the plan, whether from a mutation primitive, an
//! import or a remote pull, passes through the checks in this module first.
//! Errors carry a field path (`semesters[1].courses[0].credits`) so the UI
//! can point at the offending input.
//!
//! [`import`] holds the loosely typed shapes accepted from portable JSON and
//! turns them into typed models, failing closed on the first violation.

pub mod import;

use std::collections::{BTreeSet, HashSet};

use crate::{
    error::{PlannerError, Result},
    models::{Course, Degree, Plan, Semester},
    time::parse_clock,
};

pub const MAX_COURSE_NAME_LEN: usize = 100;
pub const MAX_COURSE_NOTES_LEN: usize = 500;
pub const MIN_CREDITS: u8 = 1;
pub const MAX_CREDITS: u8 = 6;
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 4.0;
pub const MAX_SEMESTER_NAME_LEN: usize = 50;
pub const MAX_SEMESTER_NOTES_LEN: usize = 1000;
pub const MIN_YEAR: u16 = 2020;
pub const MAX_YEAR: u16 = 2030;
pub const MAX_DEGREE_NAME_LEN: usize = 100;
pub const MIN_DEGREE_CREDITS: u16 = 1;
pub const MAX_DEGREE_CREDITS: u16 = 300;
pub const MAX_PLAN_NOTES_LEN: usize = 10_000;
pub const MAX_ID_LEN: usize = 64;

/// Joins a parent path and a field name.
pub(crate) fn field_path(parent: &str, field: &str) -> String {
    if parent.is_empty() {
        field.to_string()
    } else {
        format!("{parent}.{field}")
    }
}

pub(crate) fn check_id(path: &str, id: &str) -> Result<()> {
    let field = field_path(path, "id");
    if id.trim().is_empty() {
        return Err(PlannerError::validation(field).with_reason("must not be empty"));
    }
    if id.chars().count() > MAX_ID_LEN {
        return Err(PlannerError::validation(field)
            .with_reason(format!("must be at most {MAX_ID_LEN} characters")));
    }
    Ok(())
}

/// Checks a required, non-blank string against a character limit.
pub(crate) fn check_name(field: String, value: &str, max: usize) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PlannerError::validation(field).with_reason("must not be empty"));
    }
    check_len(field, value, max)
}

pub(crate) fn check_len(field: String, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(PlannerError::validation(field)
            .with_reason(format!("must be at most {max} characters (got {len})")));
    }
    Ok(())
}

fn check_optional_len(field: String, value: Option<&str>, max: usize) -> Result<()> {
    match value {
        Some(v) => check_len(field, v, max),
        None => Ok(()),
    }
}

pub(crate) fn check_year(field: String, year: u16) -> Result<()> {
    if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
        return Err(PlannerError::validation(field)
            .with_reason(format!("must be between {MIN_YEAR} and {MAX_YEAR} (got {year})")));
    }
    Ok(())
}

pub(crate) fn check_credits(field: String, credits: u8) -> Result<()> {
    if !(MIN_CREDITS..=MAX_CREDITS).contains(&credits) {
        return Err(PlannerError::validation(field).with_reason(format!(
            "must be between {MIN_CREDITS} and {MAX_CREDITS} (got {credits})"
        )));
    }
    Ok(())
}

pub(crate) fn check_grade(field: String, grade: Option<f64>) -> Result<()> {
    match grade {
        Some(g) if !g.is_finite() || !(MIN_GRADE..=MAX_GRADE).contains(&g) => {
            Err(PlannerError::validation(field)
                .with_reason(format!("must be between {MIN_GRADE:.1} and {MAX_GRADE:.1} (got {g})")))
        }
        _ => Ok(()),
    }
}

/// Checks that both times are well formed and that `end` is strictly later
/// than `start` when both are present.
pub(crate) fn check_times(path: &str, start: Option<&str>, end: Option<&str>) -> Result<()> {
    let parse = |name: &str, value: Option<&str>| -> Result<Option<u16>> {
        value
            .map(|v| {
                parse_clock(v).ok_or_else(|| {
                    PlannerError::validation(field_path(path, name))
                        .with_reason(format!("'{v}' is not a valid HH:MM time"))
                })
            })
            .transpose()
    };
    let start_minutes = parse("startTime", start)?;
    let end_minutes = parse("endTime", end)?;

    if let (Some(s), Some(e)) = (start_minutes, end_minutes) {
        if e <= s {
            return Err(PlannerError::validation(field_path(path, "endTime"))
                .with_reason("must be later than startTime"));
        }
    }
    Ok(())
}

/// Validates a course in isolation.
pub fn validate_course(path: &str, course: &Course) -> Result<()> {
    check_id(path, &course.id)?;
    check_name(field_path(path, "name"), &course.name, MAX_COURSE_NAME_LEN)?;
    check_credits(field_path(path, "credits"), course.credits)?;
    check_times(path, course.start_time.as_deref(), course.end_time.as_deref())?;
    check_grade(field_path(path, "grade"), course.grade)?;
    check_optional_len(
        field_path(path, "notes"),
        course.notes.as_deref(),
        MAX_COURSE_NOTES_LEN,
    )?;
    // BTreeSet guarantees distinct weekdays, so at most seven of them
    Ok(())
}

/// Validates a semester's own fields, without descending into courses.
pub fn validate_semester_fields(path: &str, semester: &Semester) -> Result<()> {
    check_id(path, &semester.id)?;
    check_name(field_path(path, "name"), &semester.name, MAX_SEMESTER_NAME_LEN)?;
    check_year(field_path(path, "year"), semester.year)?;
    check_optional_len(
        field_path(path, "notes"),
        semester.notes.as_deref(),
        MAX_SEMESTER_NOTES_LEN,
    )
}

/// Validates a semester and every course in it.
pub fn validate_semester(path: &str, semester: &Semester) -> Result<()> {
    validate_semester_fields(path, semester)?;
    for (i, course) in semester.courses.iter().enumerate() {
        validate_course(&field_path(path, &format!("courses[{i}]")), course)?;
    }
    Ok(())
}

pub fn validate_degree(path: &str, degree: &Degree) -> Result<()> {
    check_name(field_path(path, "name"), &degree.name, MAX_DEGREE_NAME_LEN)?;
    if !(MIN_DEGREE_CREDITS..=MAX_DEGREE_CREDITS).contains(&degree.total_credits_required) {
        return Err(PlannerError::validation(field_path(path, "totalCreditsRequired"))
            .with_reason(format!(
                "must be between {MIN_DEGREE_CREDITS} and {MAX_DEGREE_CREDITS} (got {})",
                degree.total_credits_required
            )));
    }
    Ok(())
}

pub fn validate_notes(field: &str, notes: &str) -> Result<()> {
    check_len(field.to_string(), notes, MAX_PLAN_NOTES_LEN)
}

/// Validates the whole plan: every entity, id uniqueness and the
/// single-active-semester invariant.
pub fn validate_plan(plan: &Plan) -> Result<()> {
    let mut semester_ids = HashSet::new();
    let mut course_ids = HashSet::new();

    for (si, semester) in plan.semesters.iter().enumerate() {
        let path = format!("semesters[{si}]");
        validate_semester(&path, semester)?;
        if !semester_ids.insert(semester.id.as_str()) {
            return Err(PlannerError::validation(field_path(&path, "id"))
                .with_reason(format!("duplicate semester id '{}'", semester.id)));
        }
        for (ci, course) in semester.courses.iter().enumerate() {
            if !course_ids.insert(course.id.as_str()) {
                return Err(PlannerError::validation(format!("{path}.courses[{ci}].id"))
                    .with_reason(format!("duplicate course id '{}'", course.id)));
            }
        }
    }

    let active: BTreeSet<&str> = plan
        .semesters
        .iter()
        .filter(|s| s.is_active())
        .map(|s| s.id.as_str())
        .collect();
    if active.len() > 1 {
        return Err(PlannerError::validation("semesters")
            .with_reason("at most one semester may be active"));
    }

    if let Some(degree) = &plan.degree {
        validate_degree("degree", degree)?;
    }
    validate_notes("notes", &plan.notes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Season, Weekday};

    fn course() -> Course {
        Course {
            id: "c1".into(),
            name: "Linear Algebra".into(),
            credits: 4,
            days_of_week: Some([Weekday::Tuesday, Weekday::Thursday].into_iter().collect()),
            start_time: Some("13:00".into()),
            end_time: Some("14:15".into()),
            grade: Some(3.3),
            color: None,
            notes: None,
        }
    }

    fn semester() -> Semester {
        Semester {
            id: "s1".into(),
            name: "Autumn 2024".into(),
            year: 2024,
            season: Season::Autumn,
            notes: None,
            is_active: None,
            courses: vec![course()],
        }
    }

    #[test]
    fn test_valid_course_passes() {
        assert!(validate_course("", &course()).is_ok());
    }

    #[test]
    fn test_course_name_limits() {
        let mut c = course();
        c.name = "   ".into();
        assert!(validate_course("", &c).is_err());

        c.name = "x".repeat(MAX_COURSE_NAME_LEN);
        assert!(validate_course("", &c).is_ok());

        c.name = "x".repeat(MAX_COURSE_NAME_LEN + 1);
        let err = validate_course("", &c).unwrap_err();
        assert!(err.to_string().contains("'name'"));
    }

    #[test]
    fn test_credit_bounds() {
        let mut c = course();
        for (credits, ok) in [(0, false), (1, true), (6, true), (7, false)] {
            c.credits = credits;
            assert_eq!(validate_course("", &c).is_ok(), ok, "credits {credits}");
        }
    }

    #[test]
    fn test_grade_bounds() {
        let mut c = course();
        for (grade, ok) in [(0.0, true), (4.0, true), (4.01, false), (-0.1, false), (f64::NAN, false)] {
            c.grade = Some(grade);
            assert_eq!(validate_course("", &c).is_ok(), ok, "grade {grade}");
        }
    }

    #[test]
    fn test_end_time_must_follow_start_time() {
        let mut c = course();
        c.end_time = Some("13:00".into());
        let err = validate_course("courses[0]", &c).unwrap_err();
        assert!(err.to_string().contains("courses[0].endTime"));

        c.start_time = None;
        assert!(validate_course("", &c).is_ok());
    }

    #[test]
    fn test_malformed_time_rejected() {
        let mut c = course();
        c.start_time = Some("1pm".into());
        assert!(validate_course("", &c).is_err());
    }

    #[test]
    fn test_year_range() {
        let mut s = semester();
        s.year = 2019;
        let err = validate_semester("semesters[2]", &s).unwrap_err();
        assert!(err.to_string().contains("semesters[2].year"));
        s.year = 2030;
        assert!(validate_semester("", &s).is_ok());
    }

    #[test]
    fn test_nested_course_path() {
        let mut s = semester();
        s.courses[0].credits = 9;
        let err = validate_semester("semesters[0]", &s).unwrap_err();
        assert!(err.to_string().contains("semesters[0].courses[0].credits"));
    }

    #[test]
    fn test_plan_rejects_duplicate_ids_and_two_active() {
        let mut plan = Plan {
            semesters: vec![semester(), semester()],
            ..Default::default()
        };
        assert!(validate_plan(&plan).is_err());

        plan.semesters[1].id = "s2".into();
        plan.semesters[1].courses[0].id = "c2".into();
        assert!(validate_plan(&plan).is_ok());

        plan.semesters[0].is_active = Some(true);
        plan.semesters[1].is_active = Some(true);
        assert!(validate_plan(&plan).is_err());
    }

    #[test]
    fn test_degree_bounds() {
        let degree = Degree {
            name: "BSc Physics".into(),
            total_credits_required: 0,
        };
        assert!(validate_degree("degree", &degree).is_err());
    }
}
