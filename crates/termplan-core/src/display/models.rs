//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with termimad or print it
//! as plain text.

use std::fmt;

use crate::{
    calc,
    models::{Course, Degree, Plan, Semester},
};

/// Writes `Monday, Wednesday 09:00-10:30`, or nothing for unscheduled
/// courses.
fn write_meeting(f: &mut fmt::Formatter<'_>, course: &Course) -> fmt::Result {
    let (Some(days), Some(start), Some(end)) =
        (&course.days_of_week, &course.start_time, &course.end_time)
    else {
        return Ok(());
    };
    let days: Vec<&str> = days.iter().map(|d| d.as_str()).collect();
    write!(f, " · {} {start}-{end}", days.join(", "))
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({} cr)", self.name, self.credits)?;
        write_meeting(f, self)?;
        match self.grade {
            Some(grade) => write!(f, " · grade {grade:.2}")?,
            None => write!(f, " · ungraded")?,
        }
        writeln!(f, " · `{}`", self.id)?;
        if let Some(notes) = &self.notes {
            writeln!(f, "  - {notes}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "## {} ({} {})", self.name, self.season, self.year)?;
        if self.is_active() {
            write!(f, " [active]")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "- ID: `{}`", self.id)?;
        writeln!(f, "- Credits: {}", self.total_credits())?;
        writeln!(f, "- GPA: {:.2}", calc::semester_gpa(self))?;
        if let Some(notes) = &self.notes {
            writeln!(f)?;
            writeln!(f, "{notes}")?;
        }

        writeln!(f)?;
        if self.courses.is_empty() {
            writeln!(f, "No courses in this semester.")?;
        } else {
            for course in &self.courses {
                write!(f, "{course}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} credits required)", self.name, self.total_credits_required)
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Academic plan")?;
        writeln!(f)?;
        if let Some(degree) = &self.degree {
            writeln!(f, "- Degree: {degree}")?;
            if let Some(progress) = calc::degree_progress(self) {
                writeln!(f, "- Progress: {progress:.1}%")?;
            }
        }
        writeln!(f, "- Credits: {}", calc::total_credits(self.courses()))?;
        writeln!(f, "- Cumulative GPA: {:.2}", calc::cumulative_gpa(self))?;
        if !self.notes.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}", self.notes)?;
        }

        if self.semesters.is_empty() {
            writeln!(f, "\nNo semesters in this plan.")?;
        } else {
            for semester in &self.semesters {
                writeln!(f)?;
                write!(f, "{semester}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{Course, Degree, Plan, Season, Semester, Weekday};

    fn course() -> Course {
        Course {
            id: "c1".into(),
            name: "Organic Chemistry".into(),
            credits: 4,
            days_of_week: Some([Weekday::Wednesday, Weekday::Monday].into_iter().collect()),
            start_time: Some("09:00".into()),
            end_time: Some("10:30".into()),
            grade: Some(3.5),
            color: Some("#3b82f6".into()),
            notes: None,
        }
    }

    #[test]
    fn test_course_display() {
        let output = course().to_string();
        assert!(output.contains("**Organic Chemistry** (4 cr)"));
        assert!(output.contains("Monday, Wednesday 09:00-10:30"));
        assert!(output.contains("grade 3.50"));
    }

    #[test]
    fn test_semester_display_marks_active() {
        let semester = Semester {
            id: "s1".into(),
            name: "Year one".into(),
            year: 2024,
            season: Season::Autumn,
            notes: None,
            is_active: Some(true),
            courses: vec![course()],
        };
        let output = semester.to_string();
        assert!(output.starts_with("## Year one (Autumn 2024) [active]"));
        assert!(output.contains("- Credits: 4"));
        assert!(output.contains("- GPA: 3.50"));
    }

    #[test]
    fn test_empty_plan_display() {
        let plan = Plan {
            degree: Some(Degree {
                name: "BSc Chemistry".into(),
                total_credits_required: 120,
            }),
            ..Default::default()
        };
        let output = plan.to_string();
        assert!(output.contains("BSc Chemistry (120 credits required)"));
        assert!(output.contains("Progress: 0.0%"));
        assert!(output.contains("No semesters in this plan."));
    }
}
