//! Grade point average calculation.

use crate::models::{Course, Plan, Semester};

/// Credit-weighted GPA over the graded courses in `courses`.
///
/// Ungraded courses are ignored entirely. When nothing is graded the result
/// is exactly `0.0`, never NaN.
pub fn gpa<'a>(courses: impl IntoIterator<Item = &'a Course>) -> f64 {
    let (points, credits) = courses
        .into_iter()
        .filter_map(|c| c.grade.map(|g| (g, f64::from(c.credits))))
        .fold((0.0, 0.0), |(points, credits), (grade, weight)| {
            (points + grade * weight, credits + weight)
        });

    if credits == 0.0 {
        0.0
    } else {
        points / credits
    }
}

pub fn semester_gpa(semester: &Semester) -> f64 {
    gpa(&semester.courses)
}

/// GPA across the flattened courses of every semester; semesters carry no
/// weight of their own.
pub fn cumulative_gpa(plan: &Plan) -> f64 {
    gpa(plan.courses())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graded(credits: u8, grade: Option<f64>) -> Course {
        Course {
            id: format!("c{credits}{}", grade.unwrap_or(-1.0)),
            name: "Course".into(),
            credits,
            days_of_week: None,
            start_time: None,
            end_time: None,
            grade,
            color: None,
            notes: None,
        }
    }

    #[test]
    fn test_weighted_average() {
        let courses = [graded(3, Some(4.0)), graded(1, Some(2.0))];
        assert!((gpa(&courses) - 3.5).abs() < 1e-9);
    }

    #[test]
    fn test_no_graded_courses_is_zero() {
        assert_eq!(gpa(std::iter::empty()), 0.0);
        let courses = [graded(3, None), graded(4, None)];
        assert_eq!(gpa(&courses), 0.0);
    }

    #[test]
    fn test_ungraded_course_does_not_change_gpa() {
        let mut courses = vec![graded(3, Some(3.0)), graded(2, Some(4.0))];
        let before = gpa(&courses);
        courses.push(graded(6, None));
        assert_eq!(gpa(&courses), before);
    }
}
