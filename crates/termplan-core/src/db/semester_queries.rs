//! Semester row queries.

use rusqlite::params;

use crate::{
    error::{DatabaseResultExt, PlannerError, Result},
    sync::SemesterRow,
};

const SELECT_SEMESTERS_SQL: &str = "SELECT id, user_id, name, year, season, is_active, notes, position FROM semesters WHERE user_id = ?1 ORDER BY position, rowid";
const SELECT_SEMESTER_IDS_SQL: &str = "SELECT id FROM semesters WHERE user_id = ?1";
const UPSERT_SEMESTER_SQL: &str = "INSERT INTO semesters (id, user_id, name, year, season, is_active, notes, position) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8) \
     ON CONFLICT(id) DO UPDATE SET name = excluded.name, year = excluded.year, season = excluded.season, \
     is_active = excluded.is_active, notes = excluded.notes, position = excluded.position \
     WHERE semesters.user_id = excluded.user_id";
const DELETE_SEMESTER_COURSES_SQL: &str = "DELETE FROM courses WHERE semester_id IN";

impl super::Database {
    fn build_semester_from_row(row: &rusqlite::Row) -> rusqlite::Result<SemesterRow> {
        Ok(SemesterRow {
            id: row.get(0)?,
            user_id: row.get(1)?,
            name: row.get(2)?,
            year: row.get(3)?,
            season: row.get(4)?,
            is_active: row.get(5)?,
            notes: row.get(6)?,
            position: row.get(7)?,
        })
    }

    /// All semesters owned by `user_id`, in plan order.
    pub fn list_semesters(&self, user_id: &str) -> Result<Vec<SemesterRow>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SEMESTERS_SQL)
            .db_context("Failed to prepare query")?;
        let rows = stmt
            .query_map(params![user_id], Self::build_semester_from_row)
            .db_context("Failed to query semesters")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .db_context("Failed to read semesters")?;
        Ok(rows)
    }

    pub fn semester_ids(&self, user_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_SEMESTER_IDS_SQL)
            .db_context("Failed to prepare query")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))
            .db_context("Failed to query semester ids")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read semester ids")?;
        Ok(ids)
    }

    /// Inserts or replaces every row in one transaction.
    pub fn upsert_semesters(&mut self, rows: &[SemesterRow]) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        {
            let mut stmt = tx
                .prepare(UPSERT_SEMESTER_SQL)
                .db_context("Failed to prepare query")?;
            for row in rows {
                let changed = stmt
                    .execute(params![
                        row.id,
                        row.user_id,
                        row.name,
                        row.year,
                        row.season,
                        row.is_active,
                        row.notes,
                        row.position
                    ])
                    .db_context("Failed to upsert semester")?;
                // Zero rows means the id is taken by another user
                if changed == 0 {
                    return Err(PlannerError::Remote {
                        message: format!("semester {} belongs to another user", row.id),
                    });
                }
            }
        }
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }

    /// Deletes semesters by id together with every course still filed under
    /// them.
    pub fn delete_semesters(&mut self, ids: &[String]) -> Result<()> {
        let placeholders = super::placeholders(ids.len());
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;
        // Databases created before the cascade was declared need this
        tx.execute(
            &format!("{DELETE_SEMESTER_COURSES_SQL} ({placeholders})"),
            rusqlite::params_from_iter(ids),
        )
        .db_context("Failed to delete courses of semesters")?;
        tx.execute(
            &format!("DELETE FROM semesters WHERE id IN ({placeholders})"),
            rusqlite::params_from_iter(ids),
        )
        .db_context("Failed to delete semesters")?;
        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}
