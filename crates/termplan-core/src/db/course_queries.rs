//! Course row queries.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    sync::CourseRow,
};

const SELECT_COURSES_SQL: &str = "SELECT id, user_id, semester_id, name, credits, days_of_week, start_time, end_time, grade, color, notes, position FROM courses WHERE user_id = ?1 ORDER BY semester_id, position, rowid";
const SELECT_COURSE_IDS_SQL: &str = "SELECT id FROM courses WHERE user_id = ?1";
const UPSERT_COURSE_SQL: &str = "INSERT INTO courses (id, user_id, semester_id, name, credits, days_of_week, start_time, end_time, grade, color, notes, position) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12) \
     ON CONFLICT(id) DO UPDATE SET semester_id = excluded.semester_id, name = excluded.name, \
     credits = excluded.credits, days_of_week = excluded.days_of_week, start_time = excluded.start_time, end_time = excluded.end_time, \
     grade = excluded.grade, color = excluded.color, notes = excluded.notes, position = excluded.position \
     WHERE courses.user_id = excluded.user_id";

impl super::Database {
    fn build_course_from_row(row: &rusqlite::Row) -> rusqlite::Result<CourseRow> {
        // Meeting days are stored comma-separated
        let days: Option<String> = row.get(5)?;
        let days_of_week = days.map(|s| {
            s.split(',')
                .filter(|d| !d.is_empty())
                .map(String::from)
                .collect()
        });

        Ok(CourseRow {
            id: row.get(0)?,
            user_id: row.get(1)?,
            semester_id: row.get(2)?,
            name: row.get(3)?,
            credits: row.get(4)?,
            days_of_week,
            start_time: row.get(6)?,
            end_time: row.get(7)?,
            grade: row.get(8)?,
            color: row.get(9)?,
            notes: row.get(10)?,
            position: row.get(11)?,
        })
    }

    pub fn list_courses(&self, user_id: &str) -> Result<Vec<CourseRow>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSES_SQL)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map(params![user_id], Self::build_course_from_row)
            .db_context("Failed to query courses")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read courses")?;
        Ok(rows)
    }

    pub fn course_ids(&self, user_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COURSE_IDS_SQL)
            .db_context("Failed to prepare query")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))
            .db_context("Failed to query course ids")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read course ids")?;
        Ok(ids)
    }

    /// Inserts or replaces every row in one transaction. The referenced
    /// semesters must already exist, and an id owned by another user fails
    /// the whole batch.
    pub fn upsert_courses(&mut self, rows: &[CourseRow]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        {
            let mut stmt = tx
                .prepare(UPSERT_COURSE_SQL)
                .db_context("Failed to prepare query")?;
            for row in rows {
                let days = row.days_of_week.as_ref().map(|days| days.join(","));
                let changed = stmt
                    .execute(params![
                        row.id,
                        row.user_id,
                        row.semester_id,
                        row.name,
                        row.credits,
                        days,
                        row.start_time,
                        row.end_time,
                        row.grade,
                        row.color,
                        row.notes,
                        row.position
                    ])
                    .db_context("Failed to upsert course")?;
                if changed == 0 {
                    return Err(PlannerError::Remote {
                        message: format!("course {} belongs to another user", row.id),
                    });
                }
            }
        }
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    pub fn delete_courses(&mut self, ids: &[String]) -> Result<()> {
        let sql = format!(
            "DELETE FROM courses WHERE id IN ({})",
            super::placeholders(ids.len())
        );
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        tx.execute(&sql, rusqlite::params_from_iter(ids))
            .db_context("Failed to delete courses")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
