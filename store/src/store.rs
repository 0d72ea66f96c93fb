//! The store itself: one in-memory SQLite connection restored from and
//! flushed to a single file, plus the row operations the HTTP layer calls.

use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::backup::Progress;
use rusqlite::{params, Connection, DatabaseName, OptionalExtension, Row};
use tracing::{debug, info};

use crate::error::StoreError;
use crate::types::{NewTodo, Todo, TodoPatch};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS todos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    description TEXT,
    status TEXT DEFAULT 'pending'
)";

const SELECT: &str = "SELECT id, title, description, status FROM todos";

/// SQLite-backed todo store. Cheap to clone; clones share one connection.
#[derive(Clone, Debug)]
pub struct TodoStore {
    path: PathBuf,
    conn: Arc<Mutex<Connection>>,
}

impl TodoStore {
    /// Opens the store at `path`.
    ///
    /// If the file exists its full image is restored into an in-memory
    /// connection; otherwise the store starts empty. The schema statement
    /// is applied in both cases (idempotent). A file that exists but
    /// cannot be restored is a fatal [`StoreError::Load`] — the store
    /// never shadows an unreadable file with a fresh empty database.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let mut conn = Connection::open_in_memory()?;

        if path.exists() {
            info!(path = %path.display(), "loading database image from disk");
            conn.restore(DatabaseName::Main, &path, None::<fn(Progress)>)
                .map_err(|source| StoreError::Load {
                    path: path.clone(),
                    source,
                })?;
        } else {
            info!(path = %path.display(), "no database file, starting empty");
        }

        conn.execute_batch(SCHEMA)?;

        Ok(Self {
            path,
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Inserts one row, reads back the assigned id, flushes, and returns
    /// the created todo. Title presence is the caller's responsibility.
    pub fn create(&self, todo: NewTodo) -> Result<Todo, StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO todos (title, description, status) VALUES (?1, ?2, ?3)",
            params![todo.title, todo.description, todo.status],
        )?;
        let id = conn.last_insert_rowid();
        let created = conn.query_row(&format!("{SELECT} WHERE id = ?1"), [id], todo_from_row)?;
        self.flush(&conn)?;
        Ok(created)
    }

    pub fn get(&self, id: i64) -> Result<Todo, StoreError> {
        let conn = self.lock()?;
        get_row(&conn, id)?.ok_or(StoreError::NotFound(id))
    }

    /// Returns up to `limit` rows after skipping `skip`, in natural row
    /// order (no ORDER BY, insertion order for an unmodified table).
    pub fn list(&self, skip: i64, limit: i64) -> Result<Vec<Todo>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("{SELECT} LIMIT ?1 OFFSET ?2"))?;
        let rows = stmt.query_map(params![limit, skip], todo_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Returns every row whose title contains `query` per SQLite `LIKE`.
    /// `%` and `_` in the query keep their wildcard meaning (not escaped,
    /// matching the service's observed behavior), and an empty query
    /// matches all rows.
    pub fn search(&self, query: &str) -> Result<Vec<Todo>, StoreError> {
        let conn = self.lock()?;
        let pattern = format!("%{query}%");
        let mut stmt = conn.prepare(&format!("{SELECT} WHERE title LIKE ?1"))?;
        let rows = stmt.query_map([pattern], todo_from_row)?;
        Ok(rows.collect::<Result<Vec<_>, _>>()?)
    }

    /// Merges `patch` over the stored row and writes it back. Fields the
    /// patch omits keep their previous values.
    pub fn update(&self, id: i64, patch: TodoPatch) -> Result<Todo, StoreError> {
        let conn = self.lock()?;
        let existing = get_row(&conn, id)?.ok_or(StoreError::NotFound(id))?;

        let title = patch.title.unwrap_or(existing.title);
        let description = patch.description.or(existing.description);
        let status = patch.status.unwrap_or(existing.status);

        conn.execute(
            "UPDATE todos SET title = ?1, description = ?2, status = ?3 WHERE id = ?4",
            params![title, description, status, id],
        )?;
        let updated = conn.query_row(&format!("{SELECT} WHERE id = ?1"), [id], todo_from_row)?;
        self.flush(&conn)?;
        Ok(updated)
    }

    pub fn delete(&self, id: i64) -> Result<(), StoreError> {
        let conn = self.lock()?;
        let affected = conn.execute("DELETE FROM todos WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(StoreError::NotFound(id));
        }
        self.flush(&conn)?;
        Ok(())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Writes the complete in-memory image over the on-disk file. Runs
    /// under the same guard as the mutation that triggered it, so a
    /// statement and its flush form one critical section.
    fn flush(&self, conn: &Connection) -> Result<(), StoreError> {
        debug!(path = %self.path.display(), "saving database to disk");
        conn.backup(DatabaseName::Main, &self.path, None::<fn(Progress)>)
            .map_err(|source| StoreError::Flush {
                path: self.path.clone(),
                source,
            })
    }
}

fn todo_from_row(row: &Row<'_>) -> rusqlite::Result<Todo> {
    Ok(Todo {
        id: row.get(0)?,
        title: row.get(1)?,
        description: row.get(2)?,
        status: row.get(3)?,
    })
}

fn get_row(conn: &Connection, id: i64) -> rusqlite::Result<Option<Todo>> {
    conn.query_row(&format!("{SELECT} WHERE id = ?1"), [id], todo_from_row)
        .optional()
}
