//! Session file holding the working plan and its undo history between
//! invocations.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use termplan_core::{ActionHistory, Plan, Planner, PlannerBuilder};

#[derive(Serialize, Deserialize, Default)]
struct Session {
    plan: Plan,
    history: ActionHistory,
}

/// Returns the default session path following XDG Base Directory
/// specification.
pub fn default_session_path() -> Result<PathBuf> {
    xdg_state_file("session.json")
}

fn xdg_state_file(name: &str) -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("termplan");
    dirs.place_state_file(name)
        .with_context(|| format!("Failed to resolve XDG state path for {name}"))
}

/// Loads the planner stored at `path`, or an empty one if the file does not
/// exist yet.
pub fn load(path: &Path) -> Result<Planner> {
    let session = if path.exists() {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file {}", path.display()))?;
        serde_json::from_str::<Session>(&raw)
            .with_context(|| format!("Session file {} is corrupt", path.display()))?
    } else {
        debug!("no session at {}, starting empty", path.display());
        Session::default()
    };

    PlannerBuilder::new()
        .with_plan(session.plan)
        .with_history(session.history)
        .build()
        .context("Failed to restore planner from session")
}

/// Writes the planner's plan and history to `path`.
pub fn save(path: &Path, planner: Planner) -> Result<()> {
    let (plan, history) = planner.into_parts();
    let json = serde_json::to_string_pretty(&Session { plan, history })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, json).with_context(|| format!("Failed to write session file {}", path.display()))?;
    debug!("session saved to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use termplan_core::{models::Season, params::CreateSemester};

    use super::*;

    #[test]
    fn test_missing_session_starts_empty() {
        let dir = TempDir::new().unwrap();
        let planner = load(&dir.path().join("none.json")).unwrap();
        assert!(planner.plan().semesters.is_empty());
        assert!(!planner.can_undo());
    }

    #[test]
    fn test_session_keeps_undo_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state/session.json");

        let mut planner = load(&path).unwrap();
        planner
            .add_semester(&CreateSemester {
                name: "Spring".to_string(),
                year: 2025,
                season: Season::Spring,
                notes: None,
            })
            .unwrap();
        save(&path, planner).unwrap();

        let mut restored = load(&path).unwrap();
        assert_eq!(restored.plan().semesters.len(), 1);
        assert!(restored.undo().is_some());
        assert!(restored.plan().semesters.is_empty());
    }

    #[test]
    fn test_corrupt_session_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(load(&path).is_err());
    }

    #[test]
    fn test_session_with_dangling_undo_cursor_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        fs::write(
            &path,
            r#"{"plan":{},"history":{"entries":[],"cursor":3,"limit":50}}"#,
        )
        .unwrap();
        assert!(load(&path).is_err());
    }
}
