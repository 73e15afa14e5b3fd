//! Termplan CLI Application
//!
//! Command-line interface for the termplan academic planner. Each invocation
//! loads the session, runs one command and saves the session back if the
//! command changed the plan.

mod args;
mod cli;
mod commands;
mod renderer;
mod session;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use commands::{Cli, RemoteTarget};
use log::info;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        session_file,
        remote_db,
        user,
        no_color,
        command,
    } = Args::parse();

    let session_path = match session_file {
        Some(path) => path,
        None => session::default_session_path()?,
    };
    let planner = session::load(&session_path).context("Failed to initialize planner")?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Termplan started with session {}", session_path.display());

    let mut cli = Cli::new(planner, renderer, session_path);
    match command {
        Some(Semester { command }) => cli.handle_semester_command(command)?,
        Some(Course { command }) => cli.handle_course_command(command)?,
        Some(Gpa(scope)) => cli.gpa(&scope)?,
        Some(Conflicts(scope)) => cli.conflicts(&scope)?,
        Some(Schedule(scope)) => cli.schedule(&scope)?,
        Some(Credits(scope)) => cli.credits(&scope)?,
        Some(Undo) => cli.undo(),
        Some(Redo) => cli.redo(),
        Some(History) => cli.history(),
        Some(Notes { command }) => cli.handle_notes_command(command)?,
        Some(Degree { command }) => cli.handle_degree_command(command)?,
        Some(Export(args)) => cli.export(&args)?,
        Some(Import(args)) => cli.import(&args)?,
        Some(Schema) => cli.schema()?,
        Some(Sync { command }) => {
            let target = RemoteTarget {
                db_path: remote_db,
                user,
            };
            cli.handle_sync_command(command, target).await?
        }
        None => cli.show_plan(),
    }
    cli.finish()
}
