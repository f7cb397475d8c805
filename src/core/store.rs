//! Note persistence
//!
//! Every operation opens its own connection to the backing database and
//! drops it before returning, on success and on failure alike.

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};

use super::error::StoreError;
use super::note::Note;

const CREATE_NOTES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS notes (
        name CHAR(24) PRIMARY KEY,
        description VARCHAR
    )
"#;
const SELECT_NOTES: &str = "SELECT name, description FROM notes";
const SELECT_NOTE: &str = "SELECT name, description FROM notes WHERE name = ?1";
const INSERT_NOTE: &str = "INSERT INTO notes (name, description) VALUES (?1, ?2)";
const DELETE_NOTE: &str = "DELETE FROM notes WHERE name = ?1";

/// Storage contract used by the notebook dispatcher.
///
/// `create` does not check for an existing note and `remove` of a missing
/// note is a no-op; existence is the caller's concern.
pub trait NoteStore: Send + Sync {
    /// All notes, in backend scan order
    fn list(&self) -> Result<Vec<Note>, StoreError>;
    /// Zero or one notes named `name`
    fn get(&self, name: &str) -> Result<Vec<Note>, StoreError>;
    fn create(&self, name: &str, description: &str) -> Result<(), StoreError>;
    fn remove(&self, name: &str) -> Result<(), StoreError>;
}

/// SQLite-backed note store
#[derive(Debug, Clone)]
pub struct SqliteNoteStore {
    db_path: PathBuf,
}

impl SqliteNoteStore {
    /// Point the store at `db_path` and make sure the notes table exists
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        let store = Self {
            db_path: db_path.to_path_buf(),
        };
        store.init_schema()?;
        Ok(store)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    fn init_schema(&self) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute_batch(CREATE_NOTES_TABLE)?;
        Ok(())
    }

    fn connect(&self) -> Result<Connection, StoreError> {
        tracing::trace!(path = %self.db_path.display(), "opening connection");
        Connection::open(&self.db_path).map_err(|source| StoreError::Connect {
            path: self.db_path.display().to_string(),
            source,
        })
    }

    fn query_notes(
        conn: &Connection,
        sql: &str,
        name: Option<&str>,
    ) -> Result<Vec<Note>, StoreError> {
        let mut stmt = conn.prepare(sql)?;
        let map_row = |row: &rusqlite::Row<'_>| -> rusqlite::Result<Note> {
            Ok(Note {
                name: row.get(0)?,
                description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            })
        };
        let rows = match name {
            Some(name) => stmt.query_map(params![name], map_row)?,
            None => stmt.query_map([], map_row)?,
        };

        let mut notes = Vec::new();
        for row in rows {
            notes.push(row?);
        }
        Ok(notes)
    }
}

impl NoteStore for SqliteNoteStore {
    fn list(&self) -> Result<Vec<Note>, StoreError> {
        let conn = self.connect()?;
        Self::query_notes(&conn, SELECT_NOTES, None)
    }

    fn get(&self, name: &str) -> Result<Vec<Note>, StoreError> {
        let conn = self.connect()?;
        Self::query_notes(&conn, SELECT_NOTE, Some(name))
    }

    fn create(&self, name: &str, description: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(INSERT_NOTE, params![name, description])?;
        Ok(())
    }

    fn remove(&self, name: &str) -> Result<(), StoreError> {
        let conn = self.connect()?;
        conn.execute(DELETE_NOTE, params![name])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn temp_store() -> (TempDir, SqliteNoteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteNoteStore::open(&dir.path().join("notes.db")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_round_trip() -> Result<(), StoreError> {
        let (_dir, store) = temp_store();

        store.create("n", "d")?;
        assert_eq!(store.get("n")?, vec![Note::new("n", "d")]);

        store.remove("n")?;
        assert!(store.get("n")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_list_returns_every_note() -> Result<(), StoreError> {
        let (_dir, store) = temp_store();
        assert!(store.list()?.is_empty());

        store.create("todo", "buy milk")?;
        store.create("ideas", "write a parser")?;

        let mut names: Vec<String> = store.list()?.into_iter().map(|n| n.name).collect();
        names.sort();
        assert_eq!(names, vec!["ideas", "todo"]);
        Ok(())
    }

    #[test]
    fn test_get_missing_is_empty() -> Result<(), StoreError> {
        let (_dir, store) = temp_store();
        assert!(store.get("nope")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_remove_missing_is_noop() -> Result<(), StoreError> {
        let (_dir, store) = temp_store();
        store.remove("nope")?;
        Ok(())
    }

    #[test]
    fn test_primary_key_rejects_duplicate() {
        let (_dir, store) = temp_store();
        store.create("todo", "first").unwrap();

        let err = store.create("todo", "second").unwrap_err();
        assert!(matches!(err, StoreError::Query(_)));
        assert_eq!(store.get("todo").unwrap(), vec![Note::new("todo", "first")]);
    }

    #[test]
    fn test_schema_init_is_idempotent() -> Result<(), StoreError> {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("notes.db");

        SqliteNoteStore::open(&path)?.create("keep", "me")?;
        let reopened = SqliteNoteStore::open(&path)?;
        assert_eq!(reopened.get("keep")?.len(), 1);
        Ok(())
    }

    #[test]
    fn test_open_unreachable_path_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("notes.db");
        let err = SqliteNoteStore::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Connect { .. }));
    }
}
