use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{
    CourseCommands, DegreeCommands, ExportArgs, ImportArgs, NotesCommands, ScopeArgs,
    SemesterCommands, SyncCommands,
};

/// Command-line front end for the termplan academic planner
///
/// Termplan keeps a multi-semester plan of courses, computes GPA and weekly
/// schedule conflicts, and supports undo/redo, portable JSON export/import
/// and sync with a remote store. The working plan and its undo history are
/// kept in a session file between invocations.
#[derive(Parser)]
#[command(version, about, name = "tp")]
pub struct Args {
    /// Path to the session file holding the plan and its undo history.
    /// Defaults to $XDG_STATE_HOME/termplan/session.json
    #[arg(long, global = true)]
    pub session_file: Option<PathBuf>,

    /// Path to the SQLite database used as the sync remote. Defaults to
    /// $XDG_DATA_HOME/termplan/remote.db
    #[arg(long, global = true)]
    pub remote_db: Option<PathBuf>,

    /// Owner id for remote rows
    #[arg(long, global = true, env = "TERMPLAN_USER", default_value = "local")]
    pub user: String,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the termplan CLI
///
/// With no command the whole plan is shown.
#[derive(Subcommand)]
pub enum Commands {
    /// Manage semesters
    #[command(alias = "s")]
    Semester {
        #[command(subcommand)]
        command: SemesterCommands,
    },
    /// Manage courses within a semester
    #[command(alias = "c")]
    Course {
        #[command(subcommand)]
        command: CourseCommands,
    },
    /// Show GPA for one semester or the whole plan
    Gpa(ScopeArgs),
    /// List overlapping meeting times
    Conflicts(ScopeArgs),
    /// Show the weekly timetable
    Schedule(ScopeArgs),
    /// Show total and completed credits and degree progress
    Credits(ScopeArgs),
    /// Undo the most recent change
    #[command(alias = "u")]
    Undo,
    /// Redo the most recently undone change
    #[command(alias = "r")]
    Redo,
    /// Show the undo history
    History,
    /// Read or edit plan notes
    #[command(alias = "n")]
    Notes {
        #[command(subcommand)]
        command: NotesCommands,
    },
    /// Set, clear or show the degree target
    Degree {
        #[command(subcommand)]
        command: DegreeCommands,
    },
    /// Export the plan as portable JSON
    Export(ExportArgs),
    /// Import a plan from portable JSON, replacing the current one
    Import(ImportArgs),
    /// Print the JSON Schema of the export format
    Schema,
    /// Pull from or push to the remote store
    Sync {
        #[command(subcommand)]
        command: SyncCommands,
    },
}
