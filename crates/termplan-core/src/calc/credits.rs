//! Credit totals and degree progress.

use crate::models::{Course, Plan};

pub fn total_credits<'a>(courses: impl IntoIterator<Item = &'a Course>) -> u32 {
    courses.into_iter().map(|c| u32::from(c.credits)).sum()
}

/// Credits of courses that already have a grade.
pub fn completed_credits<'a>(courses: impl IntoIterator<Item = &'a Course>) -> u32 {
    courses
        .into_iter()
        .filter(|c| c.is_graded())
        .map(|c| u32::from(c.credits))
        .sum()
}

/// Percentage of the degree's required credits already completed, capped at
/// 100. `None` when the plan has no degree.
pub fn degree_progress(plan: &Plan) -> Option<f64> {
    let degree = plan.degree.as_ref()?;
    let required = f64::from(degree.total_credits_required);
    let done = f64::from(completed_credits(plan.courses()));
    Some((done / required * 100.0).min(100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Degree, Season, Semester};

    fn course(id: &str, credits: u8, grade: Option<f64>) -> Course {
        Course {
            id: id.into(),
            name: id.into(),
            credits,
            days_of_week: None,
            start_time: None,
            end_time: None,
            grade,
            color: None,
            notes: None,
        }
    }

    fn plan(degree: Option<Degree>, courses: Vec<Course>) -> Plan {
        Plan {
            semesters: vec![Semester {
                id: "s1".into(),
                name: "S".into(),
                year: 2024,
                season: Season::Autumn,
                notes: None,
                is_active: None,
                courses,
            }],
            degree,
            ..Default::default()
        }
    }

    #[test]
    fn test_totals() {
        let p = plan(None, vec![course("a", 3, Some(3.0)), course("b", 4, None)]);
        assert_eq!(total_credits(p.courses()), 7);
        assert_eq!(completed_credits(p.courses()), 3);
        assert_eq!(degree_progress(&p), None);
    }

    #[test]
    fn test_progress_is_capped() {
        let degree = Degree {
            name: "BSc".into(),
            total_credits_required: 4,
        };
        let p = plan(Some(degree.clone()), vec![course("a", 2, Some(3.0))]);
        assert_eq!(degree_progress(&p), Some(50.0));

        let p = plan(Some(degree), vec![course("a", 6, Some(3.0))]);
        assert_eq!(degree_progress(&p), Some(100.0));
    }
}
