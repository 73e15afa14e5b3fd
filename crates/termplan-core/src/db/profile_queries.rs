//! Profile row queries.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    sync::ProfileRow,
};

const SELECT_PROFILE_SQL: &str =
    "SELECT user_id, notes, degree_name, degree_total_credits FROM profiles WHERE user_id = ?1";
const UPSERT_PROFILE_SQL: &str = "INSERT INTO profiles (user_id, notes, degree_name, degree_total_credits) VALUES (?1, ?2, ?3, ?4) \
     ON CONFLICT(user_id) DO UPDATE SET notes = excluded.notes, degree_name = excluded.degree_name, degree_total_credits = excluded.degree_total_credits";
const SELECT_PROFILE_IDS_SQL: &str = "SELECT user_id FROM profiles WHERE user_id = ?1";

impl super::Database {
    pub fn get_profile(&self, user_id: &str) -> Result<Option<ProfileRow>> {
        self.connection
            .query_row(SELECT_PROFILE_SQL, params![user_id], |row| {
                Ok(ProfileRow {
                    user_id: row.get(0)?,
                    notes: row.get(1)?,
                    degree_name: row.get(2)?,
                    degree_total_credits: row.get(3)?,
                })
            })
            .optional()
            .db_context("Failed to fetch profile")
    }

    pub fn upsert_profile(&self, row: &ProfileRow) -> Result<()> {
        self.connection
            .execute(
                UPSERT_PROFILE_SQL,
                params![
                    row.user_id,
                    row.notes,
                    row.degree_name,
                    row.degree_total_credits
                ],
            )
            .db_context("Failed to upsert profile")?;
        Ok(())
    }

    pub fn profile_ids(&self, user_id: &str) -> Result<Vec<String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PROFILE_IDS_SQL)
            .db_context("Failed to prepare query")?;
        let ids = stmt
            .query_map(params![user_id], |row| row.get(0))
            .db_context("Failed to query profile ids")?
            .collect::<rusqlite::Result<Vec<String>>>()
            .db_context("Failed to read profile ids")?;
        Ok(ids)
    }

    pub fn delete_profiles(&mut self, user_ids: &[String]) -> Result<()> {
        let sql = format!(
            "DELETE FROM profiles WHERE user_id IN ({})",
            super::placeholders(user_ids.len())
        );
        self.connection
            .execute(&sql, rusqlite::params_from_iter(user_ids))
            .db_context("Failed to delete profiles")?;
        Ok(())
    }
}
