//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Courses reference semesters; deletes must respect that
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Brings databases created before ordering was stored up to date.
    fn apply_migrations(&self) -> Result<()> {
        for table in ["semesters", "courses"] {
            if !self.has_column(table, "position")? {
                self.connection
                    .execute(
                        &format!(
                            "ALTER TABLE {table} ADD COLUMN position INTEGER NOT NULL DEFAULT 0"
                        ),
                        [],
                    )
                    .db_context(&format!("Failed to add position column to {table} table"))?;
            }
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use tempfile::TempDir;

    use crate::db::Database;

    #[test]
    fn test_position_column_added_to_old_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("old.db");
        {
            let conn = Connection::open(&path).unwrap();
            conn.execute_batch(
                "CREATE TABLE semesters (id TEXT PRIMARY KEY, user_id TEXT NOT NULL, name TEXT NOT NULL, year INTEGER NOT NULL, season TEXT NOT NULL, is_active INTEGER NOT NULL DEFAULT 0, notes TEXT);",
            )
            .unwrap();
        }

        let db = Database::new(&path).unwrap();
        assert!(db.has_column("semesters", "position").unwrap());
        assert!(db.has_column("courses", "position").unwrap());
    }
}
