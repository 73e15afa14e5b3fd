//! Tests for the planner module.

use super::*;
use crate::{
    config::DEFAULT_PALETTE,
    models::{Degree, NoteScope, Season, Weekday},
    params::{CreateCourse, CreateSemester, UpdateCourse, UpdateSemester},
};

/// Helper function to create a test planner
fn create_test_planner() -> Planner {
    PlannerBuilder::new()
        .build()
        .expect("Failed to create planner")
}

fn semester_params(name: &str, year: u16, season: Season) -> CreateSemester {
    CreateSemester {
        name: name.to_string(),
        year,
        season,
        notes: None,
    }
}

/// Planner with three semesters named A, B and C.
fn planner_with_semesters() -> (Planner, Vec<String>) {
    let mut planner = create_test_planner();
    let ids = [
        ("A", 2024, Season::Autumn),
        ("B", 2025, Season::Spring),
        ("C", 2025, Season::Autumn),
    ]
    .into_iter()
    .map(|(name, year, season)| {
        planner
            .add_semester(&semester_params(name, year, season))
            .expect("Failed to add semester")
            .id
    })
    .collect();
    (planner, ids)
}

fn names(planner: &Planner) -> Vec<&str> {
    planner
        .plan()
        .semesters
        .iter()
        .map(|s| s.name.as_str())
        .collect()
}

#[test]
fn test_add_semester_becomes_current() {
    let mut planner = create_test_planner();
    let semester = planner
        .add_semester(&semester_params("First", 2024, Season::Autumn))
        .expect("Failed to add semester");

    assert_eq!(planner.plan().semesters.len(), 1);
    assert_eq!(planner.current_semester().map(|s| s.id.as_str()), Some(semester.id.as_str()));
    assert!(semester.courses.is_empty());
    assert_eq!(planner.history().len(), 1);
}

#[test]
fn test_rejected_mutation_leaves_state_untouched() {
    let (mut planner, ids) = planner_with_semesters();
    let course = planner
        .add_course(&ids[0], &CreateCourse::new("Algorithms", 4))
        .expect("Failed to add course");
    let before = planner.plan().clone();
    let history_len = planner.history().len();

    let err = planner
        .update_course(
            &ids[0],
            &course.id,
            &UpdateCourse {
                name: Some("Algorithms II".to_string()),
                credits: Some(9),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field.ends_with("credits")));

    let err = planner
        .add_semester(&semester_params("Too late", 2031, Season::Spring))
        .unwrap_err();
    assert!(matches!(err, PlannerError::Validation { .. }));

    assert_eq!(planner.plan(), &before);
    assert_eq!(planner.history().len(), history_len);
}

#[test]
fn test_update_course_rejects_inverted_times() {
    let (mut planner, ids) = planner_with_semesters();
    let course = planner
        .add_course(
            &ids[1],
            &CreateCourse::new("Chemistry", 3).meeting([Weekday::Tuesday], "13:00", "14:30"),
        )
        .unwrap();

    let err = planner
        .update_course(
            &ids[1],
            &course.id,
            &UpdateCourse {
                end_time: Some(Some("12:00".to_string())),
                ..Default::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field.ends_with("endTime")));
}

#[test]
fn test_update_course_clears_optional_fields() {
    let (mut planner, ids) = planner_with_semesters();
    let course = planner
        .add_course(&ids[0], &CreateCourse::new("Ethics", 2).graded(3.3))
        .unwrap();

    let updated = planner
        .update_course(
            &ids[0],
            &course.id,
            &UpdateCourse {
                grade: Some(None),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(updated.grade, None);
    assert_eq!(updated.color, course.color);
}

#[test]
fn test_unknown_ids_are_not_found() {
    let (mut planner, ids) = planner_with_semesters();

    assert!(matches!(
        planner.remove_semester("missing"),
        Err(PlannerError::SemesterNotFound { .. })
    ));
    assert!(matches!(
        planner.add_course("missing", &CreateCourse::new("X", 3)),
        Err(PlannerError::SemesterNotFound { .. })
    ));
    assert!(matches!(
        planner.remove_course(&ids[0], "missing"),
        Err(PlannerError::CourseNotFound { .. })
    ));
    assert!(matches!(
        planner.set_note_scope(NoteScope::Semester("missing".to_string())),
        Err(PlannerError::SemesterNotFound { .. })
    ));
}

#[test]
fn test_active_flag_is_exclusive() {
    let (mut planner, ids) = planner_with_semesters();

    planner.set_active_semester(&ids[0]).unwrap();
    planner.set_active_semester(&ids[2]).unwrap();
    let active: Vec<_> = planner
        .plan()
        .semesters
        .iter()
        .filter(|s| s.is_active())
        .map(|s| s.id.clone())
        .collect();
    assert_eq!(active, vec![ids[2].clone()]);

    planner
        .update_semester(
            &ids[1],
            &UpdateSemester {
                is_active: Some(true),
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(planner.plan().active_semester().map(|s| s.id.as_str()), Some(ids[1].as_str()));
    assert_eq!(planner.plan().semesters.iter().filter(|s| s.is_active()).count(), 1);

    // One checkpoint per activation
    planner.undo();
    assert_eq!(planner.plan().active_semester().map(|s| s.id.as_str()), Some(ids[2].as_str()));
}

#[test]
fn test_remove_current_semester_clears_selection() {
    let (mut planner, ids) = planner_with_semesters();
    planner.select_semester(Some(&ids[1])).unwrap();
    planner.set_note_scope(NoteScope::Semester(ids[1].clone())).unwrap();

    planner.remove_semester(&ids[1]).unwrap();
    assert_eq!(planner.plan().current_semester_id, None);
    assert_eq!(planner.plan().note_scope, NoteScope::General);
    assert_eq!(names(&planner), ["A", "C"]);
}

#[test]
fn test_select_semester_records_no_checkpoint() {
    let (mut planner, ids) = planner_with_semesters();
    let history_len = planner.history().len();

    planner.select_semester(Some(&ids[0])).unwrap();
    assert_eq!(planner.current_semester().map(|s| s.name.as_str()), Some("A"));
    assert_eq!(planner.history().len(), history_len);
    assert!(planner.select_semester(Some("missing")).is_err());
}

#[test]
fn test_colors_assigned_round_robin() {
    let (mut planner, ids) = planner_with_semesters();
    let colors: Vec<String> = (0..DEFAULT_PALETTE.len() + 1)
        .map(|i| {
            planner
                .add_course(&ids[0], &CreateCourse::new(format!("Course {i}"), 3))
                .unwrap()
                .color
                .unwrap()
        })
        .collect();

    for (i, color) in colors.iter().take(DEFAULT_PALETTE.len()).enumerate() {
        assert_eq!(color, DEFAULT_PALETTE[i]);
    }
    assert_eq!(colors[DEFAULT_PALETTE.len()], DEFAULT_PALETTE[0]);
}

#[test]
fn test_colors_not_reassigned_after_removal() {
    let (mut planner, ids) = planner_with_semesters();
    let first = planner.add_course(&ids[0], &CreateCourse::new("One", 3)).unwrap();
    planner.add_course(&ids[0], &CreateCourse::new("Two", 3)).unwrap();
    let third = planner.add_course(&ids[0], &CreateCourse::new("Three", 3)).unwrap();

    planner.remove_course(&ids[0], &first.id).unwrap();
    let fourth = planner.add_course(&ids[0], &CreateCourse::new("Four", 3)).unwrap();

    // Two siblings remain, so the new course takes palette[2] like "Three"
    assert_eq!(fourth.color, third.color);
    assert_eq!(fourth.color.as_deref(), Some(DEFAULT_PALETTE[2]));
}

#[test]
fn test_custom_palette() {
    let mut planner = PlannerBuilder::new()
        .with_palette(["#000000", "#ffffff"])
        .build()
        .unwrap();
    let semester = planner
        .add_semester(&semester_params("Only", 2026, Season::Summer))
        .unwrap();
    let colors: Vec<_> = (0..3)
        .map(|i| {
            planner
                .add_course(&semester.id, &CreateCourse::new(format!("C{i}"), 1))
                .unwrap()
                .color
        })
        .collect();
    assert_eq!(
        colors,
        [Some("#000000".to_string()), Some("#ffffff".to_string()), Some("#000000".to_string())]
    );
}

#[test]
fn test_reorder_semesters() {
    let (mut planner, _) = planner_with_semesters();

    planner.reorder_semesters(Reorder { from: 0, to: 2 }).unwrap();
    assert_eq!(names(&planner), ["B", "C", "A"]);

    planner.reorder_semesters(Reorder { from: 2, to: 0 }).unwrap();
    assert_eq!(names(&planner), ["A", "B", "C"]);

    let history_len = planner.history().len();
    planner.reorder_semesters(Reorder { from: 1, to: 1 }).unwrap();
    assert_eq!(planner.history().len(), history_len);

    let err = planner.reorder_semesters(Reorder { from: 3, to: 0 }).unwrap_err();
    assert!(matches!(err, PlannerError::Validation { ref field, .. } if field == "from"));
}

#[test]
fn test_reorder_courses() {
    let (mut planner, ids) = planner_with_semesters();
    for name in ["x", "y", "z"] {
        planner.add_course(&ids[0], &CreateCourse::new(name, 3)).unwrap();
    }

    planner.reorder_courses(&ids[0], Reorder { from: 2, to: 0 }).unwrap();
    let order: Vec<_> = planner.plan().semesters[0]
        .courses
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(order, ["z", "x", "y"]);
    assert!(planner.reorder_courses(&ids[0], Reorder { from: 0, to: 5 }).is_err());
}

#[test]
fn test_undo_then_redo_restores_state() {
    let (mut planner, ids) = planner_with_semesters();
    planner.add_course(&ids[0], &CreateCourse::new("Logic", 3).graded(4.0)).unwrap();
    planner.set_notes("take logic early").unwrap();
    planner
        .set_degree(Some(Degree {
            name: "BA Philosophy".to_string(),
            total_credits_required: 120,
        }))
        .unwrap();
    let final_state = planner.plan().clone();
    let steps = planner.history().len();

    for _ in 0..steps {
        assert!(planner.undo().is_some());
    }
    assert!(planner.undo().is_none());
    assert!(planner.plan().semesters.is_empty());
    assert!(!planner.can_undo());

    for _ in 0..steps {
        assert!(planner.redo().is_some());
    }
    assert!(planner.redo().is_none());
    assert_eq!(planner.plan(), &final_state);
}

#[test]
fn test_mutation_after_undo_discards_redo() {
    let (mut planner, _) = planner_with_semesters();
    assert_eq!(planner.undo(), Some(ActionKind::AddSemester));
    assert!(planner.can_redo());

    planner.set_notes("new branch").unwrap();
    assert!(!planner.can_redo());
    assert_eq!(names(&planner), ["A", "B"]);
}

#[test]
fn test_history_keeps_last_fifty() {
    let mut planner = create_test_planner();
    for i in 0..60 {
        planner.set_notes(format!("revision {i}")).unwrap();
    }
    assert_eq!(planner.history().len(), 50);

    for _ in 0..50 {
        assert!(planner.undo().is_some());
    }
    assert!(planner.undo().is_none());
    // The oldest surviving checkpoint was made by the 11th call
    assert_eq!(planner.plan().notes, "revision 9");
}

#[test]
fn test_export_import_round_trip() {
    let (mut planner, ids) = planner_with_semesters();
    planner
        .add_course(
            &ids[1],
            &CreateCourse::new("Networks", 4)
                .meeting([Weekday::Monday, Weekday::Wednesday], "09:00", "10:15")
                .graded(3.7),
        )
        .unwrap();
    planner.set_notes("general notes").unwrap();
    planner
        .set_degree(Some(Degree {
            name: "BSc".to_string(),
            total_credits_required: 180,
        }))
        .unwrap();

    let exported = planner.export_data().unwrap();

    let mut other = create_test_planner();
    let summary = other.try_import(&exported).unwrap();
    assert_eq!(summary.semesters, 3);
    assert_eq!(summary.courses, 1);
    assert_eq!(other.plan().semesters, planner.plan().semesters);
    assert_eq!(other.plan().notes, "general notes");
    assert_eq!(other.plan().degree, planner.plan().degree);
    assert_eq!(other.current_semester().map(|s| s.name.as_str()), Some("A"));
}

#[test]
fn test_invalid_import_changes_nothing() {
    let (mut planner, _) = planner_with_semesters();
    let before = planner.plan().clone();
    let history_len = planner.history().len();

    let status = planner.import_data("{ not json");
    assert!(!status.success);
    assert!(matches!(planner.try_import("[1, 2]"), Err(PlannerError::Parse { .. })));

    let invalid = r#"{"semesters":[{"id":"s1","name":"Bad","year":2019,"season":"Spring","courses":[]}]}"#;
    assert!(matches!(planner.try_import(invalid), Err(PlannerError::Validation { .. })));

    assert_eq!(planner.plan(), &before);
    assert_eq!(planner.history().len(), history_len);
}

#[test]
fn test_single_undo_reverts_import() {
    let (mut planner, _) = planner_with_semesters();
    let before = planner.plan().clone();

    let raw = r#"{
        "semesters": [{"id": "imp-1", "name": "Imported", "year": 2026, "season": "Fall", "courses": [
            {"id": "c-1", "name": "Art", "credits": 2}
        ]}],
        "notes": "from backup",
        "degree": {"name": "BFA", "totalCredits": 130},
        "version": "1.0"
    }"#;
    let status = planner.import_data(raw);
    assert!(status.success, "{status}");
    assert_eq!(names(&planner), ["Imported"]);
    assert_eq!(planner.plan().semesters[0].season, Season::Autumn);
    assert_eq!(planner.plan().degree.as_ref().map(|d| d.total_credits_required), Some(130));

    assert_eq!(planner.undo(), Some(ActionKind::Import));
    assert_eq!(planner.plan(), &before);
}

#[test]
fn test_queries_scope_to_semester() {
    let (mut planner, ids) = planner_with_semesters();
    planner
        .add_course(
            &ids[0],
            &CreateCourse::new("Statistics", 3)
                .meeting([Weekday::Friday], "10:00", "11:30")
                .graded(3.0),
        )
        .unwrap();
    planner
        .add_course(
            &ids[0],
            &CreateCourse::new("Economics", 3)
                .meeting([Weekday::Friday], "11:00", "12:00")
                .graded(4.0),
        )
        .unwrap();
    planner.add_course(&ids[1], &CreateCourse::new("Seminar", 1)).unwrap();

    assert_eq!(planner.schedule_conflicts(Some(&ids[0])).unwrap().len(), 1);
    assert_eq!(planner.current_schedule(Some(&ids[0])).unwrap().len(), 2);
    assert!((planner.semester_gpa(&ids[0]).unwrap() - 3.5).abs() < 1e-9);

    assert!(planner.schedule_conflicts(Some(&ids[1])).unwrap().is_empty());
    assert_eq!(planner.total_credits(Some(&ids[1])).unwrap(), 1);
    assert_eq!(planner.total_credits(None).unwrap(), 7);
    assert_eq!(planner.completed_credits(None).unwrap(), 6);
    assert!(matches!(
        planner.total_credits(Some("missing")),
        Err(PlannerError::SemesterNotFound { .. })
    ));

    assert!((planner.cumulative_gpa() - 3.5).abs() < 1e-9);
    assert_eq!(planner.degree_progress(), None);
}

#[test]
fn test_builder_rejects_bad_config() {
    assert!(matches!(
        PlannerBuilder::new().with_history_limit(0).build(),
        Err(PlannerError::Configuration { .. })
    ));
    assert!(matches!(
        PlannerBuilder::new().with_palette(Vec::<String>::new()).build(),
        Err(PlannerError::Configuration { .. })
    ));
}

#[test]
fn test_builder_resumes_saved_session() {
    let (mut planner, _) = planner_with_semesters();
    planner.set_notes("persisted").unwrap();
    let (plan, history) = planner.into_parts();

    let mut resumed = PlannerBuilder::new()
        .with_plan(plan)
        .with_history(history)
        .build()
        .unwrap();
    assert_eq!(resumed.undo(), Some(ActionKind::SetNotes));
    assert_eq!(resumed.plan().notes, "");
}

#[test]
fn test_builder_rejects_corrupt_saved_history() {
    let history: ActionHistory =
        serde_json::from_str(r#"{"entries":[],"cursor":3,"limit":50}"#).unwrap();

    assert!(matches!(
        PlannerBuilder::new().with_history(history).build(),
        Err(PlannerError::Configuration { .. })
    ));
}
