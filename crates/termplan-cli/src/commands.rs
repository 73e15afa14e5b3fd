//! Command handlers: run one parsed command against the session planner and
//! render the outcome.

use std::{
    fmt::Write as _,
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use log::info;
use termplan_core::{
    display::{Conflicts, CreateResult, DeleteResult, History, Schedule, UpdateResult},
    models::{Degree, NoteScope},
    transfer::envelope_schema,
    OperationStatus, Planner, SqliteStore, SyncReconciler,
};

use crate::{
    cli::{
        CourseCommands, DegreeCommands, ExportArgs, ImportArgs, NotesCommands, ScopeArgs,
        SemesterCommands, SyncCommands,
    },
    renderer::TerminalRenderer,
    session,
};

/// Where and as whom to sync.
pub struct RemoteTarget {
    pub db_path: Option<PathBuf>,
    pub user: String,
}

pub struct Cli {
    planner: Planner,
    renderer: TerminalRenderer,
    session_path: PathBuf,
    dirty: bool,
}

impl Cli {
    pub fn new(planner: Planner, renderer: TerminalRenderer, session_path: PathBuf) -> Self {
        Self {
            planner,
            renderer,
            session_path,
            dirty: false,
        }
    }

    /// Persists the session if the command changed anything.
    pub fn finish(self) -> Result<()> {
        if self.dirty {
            session::save(&self.session_path, self.planner)?;
        }
        Ok(())
    }

    fn changed(&mut self) {
        self.dirty = true;
    }

    pub fn show_plan(&self) {
        self.renderer.show(self.planner.plan());
    }

    pub fn handle_semester_command(&mut self, command: SemesterCommands) -> Result<()> {
        match command {
            SemesterCommands::Add(args) => {
                let semester = self.planner.add_semester(&args.into())?;
                self.changed();
                self.renderer.show(CreateResult::new(semester));
            }
            SemesterCommands::List => self.list_semesters(),
            SemesterCommands::Show(args) => {
                let semester = self
                    .planner
                    .plan()
                    .semester(&args.id)
                    .with_context(|| format!("Semester with ID {} not found", args.id))?;
                self.renderer.show(semester);
            }
            SemesterCommands::Update(args) => {
                let id = args.id.clone();
                let changes = args.changes();
                let semester = self.planner.update_semester(&id, &args.into())?;
                self.changed();
                self.renderer.show(UpdateResult::with_changes(semester, changes));
            }
            SemesterCommands::Remove(args) => {
                let semester = self.planner.remove_semester(&args.id)?;
                self.changed();
                self.renderer.show(DeleteResult::new(semester));
            }
            SemesterCommands::Activate(args) => {
                self.planner.set_active_semester(&args.id)?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success(format!("Semester {} is now active", args.id)));
            }
            SemesterCommands::Select(args) => {
                self.planner.select_semester(Some(&args.id))?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success(format!("Semester {} is now current", args.id)));
            }
            SemesterCommands::Reorder(args) => {
                self.planner.reorder_semesters(args.into())?;
                self.changed();
                self.list_semesters();
            }
        }
        Ok(())
    }

    fn list_semesters(&self) {
        let plan = self.planner.plan();
        if plan.semesters.is_empty() {
            self.renderer.render("No semesters found.\n");
            return;
        }

        let mut out = String::from("# Semesters\n\n");
        for (i, semester) in plan.semesters.iter().enumerate() {
            let current = if plan.current_semester_id.as_deref() == Some(semester.id.as_str()) {
                " *(current)*"
            } else {
                ""
            };
            let active = if semester.is_active() { " [active]" } else { "" };
            let _ = writeln!(
                out,
                "{i}. **{}** ({} {}) · {} courses · {} cr{active}{current} · `{}`",
                semester.name,
                semester.season,
                semester.year,
                semester.courses.len(),
                semester.total_credits(),
                semester.id
            );
        }
        self.renderer.render(&out);
    }

    pub fn handle_course_command(&mut self, command: CourseCommands) -> Result<()> {
        match command {
            CourseCommands::Add(args) => {
                let semester_id = args.semester_id.clone();
                let course = self.planner.add_course(&semester_id, &args.into())?;
                self.changed();
                self.renderer.show(CreateResult::new(course));
            }
            CourseCommands::Update(args) => {
                let (semester_id, course_id) = (args.semester_id.clone(), args.course_id.clone());
                let changes = args.changes();
                let course = self
                    .planner
                    .update_course(&semester_id, &course_id, &args.into())?;
                self.changed();
                self.renderer.show(UpdateResult::with_changes(course, changes));
            }
            CourseCommands::Remove(args) => {
                let course = self
                    .planner
                    .remove_course(&args.semester_id, &args.course_id)?;
                self.changed();
                self.renderer.show(DeleteResult::new(course));
            }
            CourseCommands::Reorder(args) => {
                self.planner
                    .reorder_courses(&args.semester_id, args.reorder.into())?;
                self.changed();
                if let Some(semester) = self.planner.plan().semester(&args.semester_id) {
                    self.renderer.show(semester);
                }
            }
        }
        Ok(())
    }

    pub fn gpa(&self, args: &ScopeArgs) -> Result<()> {
        let line = match &args.semester {
            Some(id) => format!("Semester GPA: {:.2}\n", self.planner.semester_gpa(id)?),
            None => format!("Cumulative GPA: {:.2}\n", self.planner.cumulative_gpa()),
        };
        self.renderer.render(&line);
        Ok(())
    }

    pub fn conflicts(&self, args: &ScopeArgs) -> Result<()> {
        let conflicts = self.planner.schedule_conflicts(args.semester.as_deref())?;
        self.renderer.show(Conflicts(&conflicts));
        Ok(())
    }

    pub fn schedule(&self, args: &ScopeArgs) -> Result<()> {
        let entries = self.planner.current_schedule(args.semester.as_deref())?;
        self.renderer.show(Schedule(&entries));
        Ok(())
    }

    pub fn credits(&self, args: &ScopeArgs) -> Result<()> {
        let scope = args.semester.as_deref();
        let mut out = String::new();
        let _ = writeln!(out, "- Total credits: {}", self.planner.total_credits(scope)?);
        let _ = writeln!(out, "- Completed credits: {}", self.planner.completed_credits(scope)?);
        if let Some(progress) = self.planner.degree_progress() {
            let _ = writeln!(out, "- Degree progress: {progress:.1}%");
        }
        self.renderer.render(&out);
        Ok(())
    }

    pub fn undo(&mut self) {
        let status = match self.planner.undo() {
            Some(kind) => {
                self.changed();
                OperationStatus::success(format!("Undid {kind}"))
            }
            None => OperationStatus::failure("Nothing to undo".to_string()),
        };
        self.renderer.show(status);
    }

    pub fn redo(&mut self) {
        let status = match self.planner.redo() {
            Some(kind) => {
                self.changed();
                OperationStatus::success(format!("Redid {kind}"))
            }
            None => OperationStatus::failure("Nothing to redo".to_string()),
        };
        self.renderer.show(status);
    }

    pub fn history(&self) {
        self.renderer.show(History(self.planner.history()));
    }

    pub fn handle_notes_command(&mut self, command: NotesCommands) -> Result<()> {
        match command {
            NotesCommands::Show => {
                let plan = self.planner.plan();
                let notes = match &plan.note_scope {
                    NoteScope::General => Some(plan.notes.as_str()),
                    NoteScope::Semester(id) => {
                        plan.semester(id).and_then(|s| s.notes.as_deref())
                    }
                };
                match notes.filter(|n| !n.is_empty()) {
                    Some(notes) => self.renderer.render(notes),
                    None => self.renderer.render("No notes.\n"),
                }
            }
            NotesCommands::Set { text } => {
                self.planner.set_notes(text)?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success("Notes updated".to_string()));
            }
            NotesCommands::Scope { target } => {
                let scope = if target.eq_ignore_ascii_case("general") {
                    NoteScope::General
                } else {
                    NoteScope::Semester(target)
                };
                self.planner.set_note_scope(scope)?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success("Note scope updated".to_string()));
            }
        }
        Ok(())
    }

    pub fn handle_degree_command(&mut self, command: DegreeCommands) -> Result<()> {
        match command {
            DegreeCommands::Show => match &self.planner.plan().degree {
                Some(degree) => {
                    let mut out = format!("{degree}\n");
                    if let Some(progress) = self.planner.degree_progress() {
                        let _ = writeln!(out, "Progress: {progress:.1}%");
                    }
                    self.renderer.render(&out);
                }
                None => self.renderer.render("No degree set.\n"),
            },
            DegreeCommands::Set { name, credits } => {
                self.planner.set_degree(Some(Degree {
                    name,
                    total_credits_required: credits,
                }))?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success("Degree updated".to_string()));
            }
            DegreeCommands::Clear => {
                self.planner.set_degree(None)?;
                self.changed();
                self.renderer
                    .show(OperationStatus::success("Degree cleared".to_string()));
            }
        }
        Ok(())
    }

    pub fn export(&self, args: &ExportArgs) -> Result<()> {
        let json = self.planner.export_data()?;
        match &args.output {
            Some(path) => {
                fs::write(path, json)
                    .with_context(|| format!("Failed to write {}", path.display()))?;
                self.renderer.show(OperationStatus::success(format!(
                    "Exported plan to {}",
                    path.display()
                )));
            }
            None => println!("{json}"),
        }
        Ok(())
    }

    pub fn import(&mut self, args: &ImportArgs) -> Result<()> {
        let raw = read_input(&args.file)?;
        let status = self.planner.import_data(&raw);
        if !status.success {
            bail!("{}", status.message);
        }
        self.changed();
        self.renderer.show(status);
        Ok(())
    }

    pub fn schema(&self) -> Result<()> {
        println!("{}", envelope_schema()?);
        Ok(())
    }

    pub async fn handle_sync_command(&mut self, command: SyncCommands, target: RemoteTarget) -> Result<()> {
        let db_path = match target.db_path {
            Some(path) => path,
            None => SqliteStore::default_path()?,
        };
        let store = SqliteStore::open(&db_path)
            .with_context(|| format!("Failed to open remote store {}", db_path.display()))?;
        let sync = SyncReconciler::builder(store).user_id(target.user).build()?;
        info!("syncing with {} as {}", db_path.display(), sync.user_id());

        match command {
            SyncCommands::Pull => {
                self.planner.sync_from_remote(&sync).await?;
                self.changed();
                let plan = self.planner.plan();
                self.renderer.show(OperationStatus::success(format!(
                    "Pulled {} semesters and {} courses",
                    plan.semesters.len(),
                    plan.courses().count()
                )));
            }
            SyncCommands::Push => {
                let report = self.planner.sync_to_remote(&sync).await?;
                self.renderer.show(OperationStatus::success(format!(
                    "Pushed {} semesters and {} courses, removed {} semesters and {} courses",
                    report.upserted_semesters,
                    report.upserted_courses,
                    report.deleted_semesters.len(),
                    report.deleted_courses.len()
                )));
            }
        }
        Ok(())
    }
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut raw = String::new();
        io::stdin()
            .read_to_string(&mut raw)
            .context("Failed to read stdin")?;
        return Ok(raw);
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
