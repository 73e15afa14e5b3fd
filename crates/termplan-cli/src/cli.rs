//! Subcommand argument definitions using clap
//!
//! Each struct here is the CLI-side wrapper of a core parameter type:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Planner
//! ```
//!
//! Clap attributes, aliases and help text stay in this module; the `From`
//! impls are the only place CLI arguments turn into
//! `termplan_core::params` values.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use termplan_core::{
    models::{Season, Weekday},
    params::{CreateCourse, CreateSemester, Reorder, UpdateCourse, UpdateSemester},
};

fn parse_season(value: &str) -> Result<Season, String> {
    value.parse()
}

fn parse_weekday(value: &str) -> Result<Weekday, String> {
    value.parse()
}

/// Optional semester scope shared by the query commands
#[derive(Args)]
pub struct ScopeArgs {
    /// Restrict to one semester instead of the whole plan
    #[arg(short, long)]
    pub semester: Option<String>,
}

// ============================================================================
// Semesters
// ============================================================================

/// Add a new semester
///
/// The new semester is appended to the plan and becomes the current one.
#[derive(Args)]
pub struct AddSemesterArgs {
    /// Display name, e.g. "Year 2 autumn"
    pub name: String,
    /// Calendar year (2020-2030)
    #[arg(short, long)]
    pub year: u16,
    /// Spring, Summer or Autumn ("Fall" is accepted)
    #[arg(long, value_parser = parse_season)]
    pub season: Season,
    /// Free-form notes for this semester
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddSemesterArgs> for CreateSemester {
    fn from(val: AddSemesterArgs) -> Self {
        CreateSemester {
            name: val.name,
            year: val.year,
            season: val.season,
            notes: val.notes,
        }
    }
}

#[derive(Args)]
pub struct SemesterIdArgs {
    /// ID of the semester
    pub id: String,
}

/// Update semester fields
///
/// Only the flags given are changed. `--active` makes this the single active
/// semester.
#[derive(Args)]
pub struct UpdateSemesterArgs {
    /// ID of the semester to update
    pub id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub year: Option<u16>,
    #[arg(long, value_parser = parse_season)]
    pub season: Option<Season>,
    #[arg(short, long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,
    /// Remove the semester's notes
    #[arg(long)]
    pub clear_notes: bool,
    /// Mark this semester as the active one
    #[arg(long)]
    pub active: bool,
}

impl UpdateSemesterArgs {
    /// Human-readable list of the fields this update touches
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("name → {name}"));
        }
        if let Some(year) = self.year {
            changes.push(format!("year → {year}"));
        }
        if let Some(season) = self.season {
            changes.push(format!("season → {season}"));
        }
        if self.notes.is_some() {
            changes.push("notes updated".to_string());
        }
        if self.clear_notes {
            changes.push("notes cleared".to_string());
        }
        if self.active {
            changes.push("marked active".to_string());
        }
        changes
    }
}

impl From<UpdateSemesterArgs> for UpdateSemester {
    fn from(val: UpdateSemesterArgs) -> Self {
        UpdateSemester {
            name: val.name,
            year: val.year,
            season: val.season,
            notes: if val.clear_notes {
                Some(None)
            } else {
                val.notes.map(Some)
            },
            is_active: val.active.then_some(true),
        }
    }
}

/// Move an item from one position to another (zero-based)
#[derive(Args)]
pub struct ReorderArgs {
    pub from: usize,
    pub to: usize,
}

impl From<ReorderArgs> for Reorder {
    fn from(val: ReorderArgs) -> Self {
        Reorder {
            from: val.from,
            to: val.to,
        }
    }
}

#[derive(Subcommand)]
pub enum SemesterCommands {
    /// Add a new semester
    #[command(alias = "a")]
    Add(AddSemesterArgs),
    /// List all semesters
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one semester with its courses
    Show(SemesterIdArgs),
    /// Update semester fields
    #[command(alias = "u")]
    Update(UpdateSemesterArgs),
    /// Remove a semester and all its courses
    #[command(aliases = ["d", "rm"])]
    Remove(SemesterIdArgs),
    /// Mark a semester as the active one
    Activate(SemesterIdArgs),
    /// Make a semester the current one for navigation
    Select(SemesterIdArgs),
    /// Move a semester to another position
    Reorder(ReorderArgs),
}

// ============================================================================
// Courses
// ============================================================================

/// Add a course to a semester
///
/// The course color is assigned automatically from the palette.
#[derive(Args)]
pub struct AddCourseArgs {
    /// ID of the semester to add the course to
    pub semester_id: String,
    /// Course name
    pub name: String,
    /// Credit hours (1-6)
    #[arg(short, long)]
    pub credits: u8,
    /// Meeting days, comma separated (e.g. Monday,Wednesday)
    #[arg(long, value_delimiter = ',', value_parser = parse_weekday)]
    pub days: Vec<Weekday>,
    /// Meeting start time, HH:MM
    #[arg(long)]
    pub start: Option<String>,
    /// Meeting end time, HH:MM
    #[arg(long)]
    pub end: Option<String>,
    /// Grade on a 0.0-4.0 scale
    #[arg(short, long)]
    pub grade: Option<f64>,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<AddCourseArgs> for CreateCourse {
    fn from(val: AddCourseArgs) -> Self {
        CreateCourse {
            name: val.name,
            credits: val.credits,
            days_of_week: (!val.days.is_empty()).then(|| val.days.into_iter().collect()),
            start_time: val.start,
            end_time: val.end,
            grade: val.grade,
            notes: val.notes,
        }
    }
}

/// Update course fields
///
/// Only the flags given are changed. The course color cannot be changed.
#[derive(Args)]
pub struct UpdateCourseArgs {
    /// ID of the semester holding the course
    pub semester_id: String,
    /// ID of the course to update
    pub course_id: String,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(short, long)]
    pub credits: Option<u8>,
    #[arg(long, value_delimiter = ',', value_parser = parse_weekday)]
    pub days: Vec<Weekday>,
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long)]
    pub end: Option<String>,
    /// Remove meeting days and times
    #[arg(long, conflicts_with_all = ["days", "start", "end"])]
    pub clear_schedule: bool,
    #[arg(short, long, conflicts_with = "clear_grade")]
    pub grade: Option<f64>,
    /// Remove the grade
    #[arg(long)]
    pub clear_grade: bool,
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl UpdateCourseArgs {
    /// Human-readable list of the fields this update touches
    pub fn changes(&self) -> Vec<String> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(format!("name → {name}"));
        }
        if let Some(credits) = self.credits {
            changes.push(format!("credits → {credits}"));
        }
        if self.clear_schedule {
            changes.push("schedule cleared".to_string());
        } else if !self.days.is_empty() || self.start.is_some() || self.end.is_some() {
            changes.push("schedule updated".to_string());
        }
        if let Some(grade) = self.grade {
            changes.push(format!("grade → {grade:.2}"));
        }
        if self.clear_grade {
            changes.push("grade cleared".to_string());
        }
        if self.notes.is_some() {
            changes.push("notes updated".to_string());
        }
        changes
    }
}

impl From<UpdateCourseArgs> for UpdateCourse {
    fn from(val: UpdateCourseArgs) -> Self {
        let clear = val.clear_schedule;
        UpdateCourse {
            name: val.name,
            credits: val.credits,
            days_of_week: if clear {
                Some(None)
            } else {
                (!val.days.is_empty()).then(|| Some(val.days.into_iter().collect()))
            },
            start_time: if clear { Some(None) } else { val.start.map(Some) },
            end_time: if clear { Some(None) } else { val.end.map(Some) },
            grade: if val.clear_grade {
                Some(None)
            } else {
                val.grade.map(Some)
            },
            notes: val.notes.map(Some),
        }
    }
}

#[derive(Args)]
pub struct CourseIdArgs {
    pub semester_id: String,
    pub course_id: String,
}

#[derive(Args)]
pub struct ReorderCoursesArgs {
    pub semester_id: String,
    #[command(flatten)]
    pub reorder: ReorderArgs,
}

#[derive(Subcommand)]
pub enum CourseCommands {
    /// Add a course to a semester
    #[command(alias = "a")]
    Add(AddCourseArgs),
    /// Update course fields
    #[command(alias = "u")]
    Update(UpdateCourseArgs),
    /// Remove a course from its semester
    #[command(aliases = ["d", "rm"])]
    Remove(CourseIdArgs),
    /// Move a course to another position within its semester
    Reorder(ReorderCoursesArgs),
}

// ============================================================================
// Notes, degree, transfer, sync
// ============================================================================

#[derive(Subcommand)]
pub enum NotesCommands {
    /// Print the plan notes
    Show,
    /// Replace the plan notes
    Set {
        text: String,
    },
    /// Show general notes or a semester's notes by default
    Scope {
        /// Semester ID, or "general"
        target: String,
    },
}

#[derive(Subcommand)]
pub enum DegreeCommands {
    /// Print the degree target and progress
    Show,
    /// Set the degree target
    Set {
        name: String,
        /// Credits required to graduate (1-300)
        credits: u16,
    },
    /// Remove the degree target
    Clear,
}

#[derive(Args)]
pub struct ExportArgs {
    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON file to import, or "-" for stdin
    pub file: PathBuf,
}

#[derive(Subcommand)]
pub enum SyncCommands {
    /// Replace the local plan with the remote copy
    Pull,
    /// Make the remote copy match the local plan
    Push,
}
