//! Wire shapes of the three remote collections and their translation to and
//! from the plan model.

use std::collections::HashMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::{
    error::{PlannerError, Result, SyncStage},
    models::{Course, Degree, Plan, Season, Semester, Weekday},
    validation::validate_plan,
};

/// The remote collections, addressable by primary key and owner id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Profiles,
    Semesters,
    Courses,
}

impl Collection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Profiles => "profiles",
            Collection::Semesters => "semesters",
            Collection::Courses => "courses",
        }
    }
}

/// One row per user with plan-level fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ProfileRow {
    pub user_id: String,
    pub notes: Option<String>,
    pub degree_name: Option<String>,
    pub degree_total_credits: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SemesterRow {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub year: i64,
    pub season: String,
    pub is_active: bool,
    pub notes: Option<String>,
    /// Position in the plan's semester order
    pub position: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourseRow {
    pub id: String,
    pub user_id: String,
    pub semester_id: String,
    pub name: String,
    pub credits: i64,
    pub days_of_week: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub grade: Option<f64>,
    pub color: Option<String>,
    pub notes: Option<String>,
    /// Position within the owning semester's course list
    pub position: i64,
}

/// Everything one user owns remotely.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RemoteRows {
    pub profile: Option<ProfileRow>,
    pub semesters: Vec<SemesterRow>,
    pub courses: Vec<CourseRow>,
}

fn pull_error(reason: impl std::fmt::Display) -> PlannerError {
    PlannerError::sync(SyncStage::Pull, reason)
}

impl RemoteRows {
    /// Flattens a plan into rows owned by `user_id`.
    pub fn from_plan(plan: &Plan, user_id: &str) -> Self {
        let profile = ProfileRow {
            user_id: user_id.to_string(),
            notes: Some(plan.notes.clone()),
            degree_name: plan.degree.as_ref().map(|d| d.name.clone()),
            degree_total_credits: plan
                .degree
                .as_ref()
                .map(|d| i64::from(d.total_credits_required)),
        };

        let semesters = plan
            .semesters
            .iter()
            .enumerate()
            .map(|(position, s)| SemesterRow {
                id: s.id.clone(),
                user_id: user_id.to_string(),
                name: s.name.clone(),
                year: i64::from(s.year),
                season: s.season.as_str().to_string(),
                is_active: s.is_active(),
                notes: s.notes.clone(),
                position: position as i64,
            })
            .collect();

        let courses = plan
            .semesters
            .iter()
            .flat_map(|s| {
                s.courses.iter().enumerate().map(move |(position, c)| CourseRow {
                    id: c.id.clone(),
                    user_id: user_id.to_string(),
                    semester_id: s.id.clone(),
                    name: c.name.clone(),
                    credits: i64::from(c.credits),
                    days_of_week: c
                        .days_of_week
                        .as_ref()
                        .map(|days| days.iter().map(|d| d.as_str().to_string()).collect()),
                    start_time: c.start_time.clone(),
                    end_time: c.end_time.clone(),
                    grade: c.grade,
                    color: c.color.clone(),
                    notes: c.notes.clone(),
                    position: position as i64,
                })
            })
            .collect();

        Self {
            profile: Some(profile),
            semesters,
            courses,
        }
    }

    /// Rebuilds a plan from remote rows: courses are grouped under their
    /// semester by foreign key and both levels are ordered by position. The
    /// result is validated like any other external input.
    pub fn into_plan(self) -> Result<Plan> {
        let mut semester_rows = self.semesters;
        semester_rows.sort_by_key(|row| row.position);

        let mut semesters = semester_rows
            .into_iter()
            .map(semester_from_row)
            .collect::<Result<Vec<_>>>()?;

        let index: HashMap<String, usize> = semesters
            .iter()
            .enumerate()
            .map(|(i, s)| (s.id.clone(), i))
            .collect();

        let mut course_rows = self.courses;
        course_rows.sort_by_key(|row| row.position);
        for row in course_rows {
            match index.get(&row.semester_id) {
                Some(&i) => semesters[i].courses.push(course_from_row(row)?),
                None => warn!(
                    "skipping course {} with unknown semester {}",
                    row.id, row.semester_id
                ),
            }
        }

        let profile = self.profile.unwrap_or_default();
        let degree = match (profile.degree_name, profile.degree_total_credits) {
            (Some(name), Some(credits)) => Some(Degree {
                name,
                total_credits_required: u16::try_from(credits)
                    .map_err(|_| pull_error(format!("degree credit total {credits} is out of range")))?,
            }),
            _ => None,
        };

        let current_semester_id = semesters
            .iter()
            .find(|s| s.is_active())
            .or_else(|| semesters.first())
            .map(|s| s.id.clone());

        let plan = Plan {
            semesters,
            degree,
            notes: profile.notes.unwrap_or_default(),
            current_semester_id,
            ..Default::default()
        };
        validate_plan(&plan).map_err(|e| pull_error(format!("remote data is invalid: {e}")))?;
        Ok(plan)
    }
}

fn semester_from_row(row: SemesterRow) -> Result<Semester> {
    let season = row
        .season
        .parse::<Season>()
        .map_err(|e| pull_error(format!("semester {}: {e}", row.id)))?;
    let year = u16::try_from(row.year)
        .map_err(|_| pull_error(format!("semester {}: year {} is out of range", row.id, row.year)))?;
    Ok(Semester {
        id: row.id,
        name: row.name,
        year,
        season,
        notes: row.notes,
        // The remote column is NOT NULL; only a set flag is meaningful
        is_active: row.is_active.then_some(true),
        courses: Vec::new(),
    })
}

fn course_from_row(row: CourseRow) -> Result<Course> {
    let credits = u8::try_from(row.credits).map_err(|_| {
        pull_error(format!("course {}: credits {} is out of range", row.id, row.credits))
    })?;
    let days_of_week = row
        .days_of_week
        .map(|days| {
            days.iter()
                .map(|d| d.parse::<Weekday>())
                .collect::<std::result::Result<_, _>>()
        })
        .transpose()
        .map_err(|e| pull_error(format!("course {}: {e}", row.id)))?;
    Ok(Course {
        id: row.id,
        name: row.name,
        credits,
        days_of_week,
        start_time: row.start_time,
        end_time: row.end_time,
        grade: row.grade,
        color: row.color,
        notes: row.notes,
    })
}
