use std::time::Duration;

use termplan_core::{
    models::{Season, Weekday},
    params::{CreateCourse, CreateSemester},
    MemoryStore, Planner, PlannerBuilder, RemoteStore, SyncReconciler,
};

pub const USER: &str = "user-1";

/// Planner holding two semesters, each with two courses.
pub fn populated_planner() -> Planner {
    let mut planner = PlannerBuilder::new()
        .build()
        .expect("Failed to create planner");

    for (name, year, season) in [("Autumn 2024", 2024, Season::Autumn), ("Spring 2025", 2025, Season::Spring)] {
        let semester = planner
            .add_semester(&CreateSemester {
                name: name.to_string(),
                year,
                season,
                notes: None,
            })
            .expect("Failed to add semester");
        planner
            .add_course(
                &semester.id,
                &CreateCourse::new(format!("{name} lecture"), 4)
                    .meeting([Weekday::Monday, Weekday::Wednesday], "09:00", "10:30")
                    .graded(3.5),
            )
            .expect("Failed to add course");
        planner
            .add_course(&semester.id, &CreateCourse::new(format!("{name} lab"), 2))
            .expect("Failed to add course");
    }
    planner
}

pub fn reconciler<S: RemoteStore>(store: S) -> SyncReconciler<S> {
    SyncReconciler::builder(store)
        .user_id(USER)
        .build()
        .expect("Failed to build reconciler")
}

pub fn slow_reconciler(latency: Duration, timeout: Duration) -> SyncReconciler<MemoryStore> {
    SyncReconciler::builder(MemoryStore::new().with_latency(latency))
        .user_id(USER)
        .timeout(timeout)
        .build()
        .expect("Failed to build reconciler")
}
