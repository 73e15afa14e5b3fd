//! Loosely typed import shapes and their conversion into typed models.
//!
//! Portable JSON is parsed into the `Raw*` structs below, where every field
//! is optional and numbers are plain `f64`. [`RawEnvelope::into_content`]
//! then checks each field in order and either produces fully typed
//! [`ImportedContent`] or the first [`PlannerError::Validation`] it meets.
//! Nothing partially converted ever escapes.
//!
//! # Legacy degree shape
//!
//! Older exports stored the degree's credit total under `totalCredits` or
//! `requiredCredits`. The mapping is explicit: `totalCreditsRequired` wins,
//! then `totalCredits`, then `requiredCredits`.

use std::collections::{BTreeSet, HashSet};

use serde::Deserialize;

use super::{field_path, validate_course, validate_degree, validate_notes, validate_semester_fields};
use crate::{
    error::{PlannerError, Result},
    models::{Course, Degree, Season, Semester, Weekday},
};

/// Legacy field names for the degree credit total, in priority order after
/// the current `totalCreditsRequired`.
pub const LEGACY_DEGREE_CREDIT_FIELDS: [&str; 2] = ["totalCredits", "requiredCredits"];

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEnvelope {
    #[serde(default)]
    pub semesters: Option<Vec<RawSemester>>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub degree: Option<RawDegree>,
    #[serde(default)]
    pub export_date: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSemester {
    pub id: Option<String>,
    pub name: Option<String>,
    pub year: Option<f64>,
    pub season: Option<String>,
    pub notes: Option<String>,
    pub is_active: Option<bool>,
    #[serde(default)]
    pub courses: Option<Vec<RawCourse>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCourse {
    pub id: Option<String>,
    pub name: Option<String>,
    pub credits: Option<f64>,
    pub days_of_week: Option<Vec<String>>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub grade: Option<f64>,
    pub color: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDegree {
    pub name: Option<String>,
    pub total_credits_required: Option<f64>,
    pub total_credits: Option<f64>,
    pub required_credits: Option<f64>,
}

/// Typed result of a successful import conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedContent {
    pub semesters: Vec<Semester>,
    pub notes: String,
    pub degree: Option<Degree>,
    pub version: Option<String>,
}

fn required<T>(path: &str, field: &str, value: Option<T>) -> Result<T> {
    value.ok_or_else(|| PlannerError::validation(field_path(path, field)).with_reason("is required"))
}

/// Converts a JSON number into an integer within `lo..=hi`.
fn integer_in_range(path: &str, field: &str, value: f64, lo: u16, hi: u16) -> Result<u16> {
    if value.fract() != 0.0 || !value.is_finite() {
        return Err(PlannerError::validation(field_path(path, field))
            .with_reason(format!("must be a whole number (got {value})")));
    }
    if value < f64::from(lo) || value > f64::from(hi) {
        return Err(PlannerError::validation(field_path(path, field))
            .with_reason(format!("must be between {lo} and {hi} (got {value})")));
    }
    Ok(value as u16)
}

impl RawCourse {
    fn into_course(self, path: &str) -> Result<Course> {
        let credits = required(path, "credits", self.credits)?;
        let credits = integer_in_range(
            path,
            "credits",
            credits,
            u16::from(super::MIN_CREDITS),
            u16::from(super::MAX_CREDITS),
        )? as u8;

        let days_of_week = self
            .days_of_week
            .map(|days| {
                let days_path = field_path(path, "daysOfWeek");
                if days.len() > Weekday::ALL.len() {
                    return Err(PlannerError::validation(days_path)
                        .with_reason("must list at most 7 days"));
                }
                days.iter()
                    .enumerate()
                    .map(|(i, d)| {
                        d.parse::<Weekday>().map_err(|reason| {
                            PlannerError::validation(format!("{days_path}[{i}]")).with_reason(reason)
                        })
                    })
                    .collect::<Result<BTreeSet<_>>>()
            })
            .transpose()?;

        let course = Course {
            id: required(path, "id", self.id)?,
            name: required(path, "name", self.name)?,
            credits,
            days_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            grade: self.grade,
            color: self.color,
            notes: self.notes,
        };
        validate_course(path, &course)?;
        Ok(course)
    }
}

impl RawSemester {
    fn into_semester(self, path: &str) -> Result<Semester> {
        let year = required(path, "year", self.year)?;
        let year = integer_in_range(path, "year", year, super::MIN_YEAR, super::MAX_YEAR)?;
        let season = required(path, "season", self.season)?
            .parse::<Season>()
            .map_err(|reason| PlannerError::validation(field_path(path, "season")).with_reason(reason))?;

        let courses = self
            .courses
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_course(&field_path(path, &format!("courses[{i}]"))))
            .collect::<Result<Vec<_>>>()?;

        let semester = Semester {
            id: required(path, "id", self.id)?,
            name: required(path, "name", self.name)?,
            year,
            season,
            notes: self.notes,
            is_active: self.is_active,
            courses,
        };
        validate_semester_fields(path, &semester)?;
        Ok(semester)
    }
}

impl RawDegree {
    /// Normalizes current and legacy credit field names onto
    /// `total_credits_required`.
    fn into_degree(self, path: &str) -> Result<Degree> {
        let (field, credits) = [
            ("totalCreditsRequired", self.total_credits_required),
            (LEGACY_DEGREE_CREDIT_FIELDS[0], self.total_credits),
            (LEGACY_DEGREE_CREDIT_FIELDS[1], self.required_credits),
        ]
        .into_iter()
        .find_map(|(field, value)| value.map(|v| (field, v)))
        .ok_or_else(|| {
            PlannerError::validation(field_path(path, "totalCreditsRequired")).with_reason("is required")
        })?;

        let degree = Degree {
            name: required(path, "name", self.name)?,
            total_credits_required: integer_in_range(
                path,
                field,
                credits,
                super::MIN_DEGREE_CREDITS,
                super::MAX_DEGREE_CREDITS,
            )?,
        };
        validate_degree(path, &degree)?;
        Ok(degree)
    }
}

impl RawEnvelope {
    /// Converts the raw envelope into typed content, enforcing every entity
    /// rule plus id uniqueness and the single-active-semester invariant.
    pub fn into_content(self) -> Result<ImportedContent> {
        let semesters = self
            .semesters
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .map(|(i, raw)| raw.into_semester(&format!("semesters[{i}]")))
            .collect::<Result<Vec<_>>>()?;

        check_unique_ids(&semesters)?;
        if semesters.iter().filter(|s| s.is_active()).count() > 1 {
            return Err(PlannerError::validation("semesters")
                .with_reason("at most one semester may be active"));
        }

        let notes = self.notes.unwrap_or_default();
        validate_notes("notes", &notes)?;

        let degree = self.degree.map(|d| d.into_degree("degree")).transpose()?;

        Ok(ImportedContent {
            semesters,
            notes,
            degree,
            version: self.version,
        })
    }
}

fn check_unique_ids(semesters: &[Semester]) -> Result<()> {
    let mut semester_ids = HashSet::new();
    let mut course_ids = HashSet::new();
    for (si, semester) in semesters.iter().enumerate() {
        if !semester_ids.insert(semester.id.as_str()) {
            return Err(PlannerError::validation(format!("semesters[{si}].id"))
                .with_reason(format!("duplicate semester id '{}'", semester.id)));
        }
        for (ci, course) in semester.courses.iter().enumerate() {
            if !course_ids.insert(course.id.as_str()) {
                return Err(PlannerError::validation(format!("semesters[{si}].courses[{ci}].id"))
                    .with_reason(format!("duplicate course id '{}'", course.id)));
            }
        }
    }
    Ok(())
}

/// Parses raw text into an envelope. Malformed JSON becomes a
/// [`PlannerError::Parse`] with serde's line/column message.
pub fn parse_envelope(raw: &str) -> Result<RawEnvelope> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| PlannerError::Parse { message: e.to_string() })?;
    if !value.is_object() {
        return Err(PlannerError::Parse {
            message: "expected a JSON object at the top level".to_string(),
        });
    }
    serde_json::from_value(value).map_err(|e| PlannerError::Parse { message: e.to_string() })
}
