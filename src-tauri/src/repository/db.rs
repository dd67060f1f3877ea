//! Database Connection and Setup
//!
//! Manages the SQLite connection and migrations.

use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::{DomainError, DomainResult};

/// Connection shared by all repositories
pub type SharedConnection = Arc<Mutex<Connection>>;

/// Database state wrapper
#[derive(Clone)]
pub struct DbState {
    pub conn: SharedConnection,
}

impl DbState {
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Arc::new(Mutex::new(conn)),
        }
    }

    /// Handle to the shared connection for a repository
    pub fn connection(&self) -> SharedConnection {
        self.conn.clone()
    }
}

impl From<rusqlite::Error> for DomainError {
    fn from(err: rusqlite::Error) -> Self {
        DomainError::Internal(err.to_string())
    }
}

/// Open (or create) the database at `db_path` and run migrations
///
/// `:memory:` gives a private in-memory database, used by tests.
pub async fn init_db(db_path: &Path) -> Result<DbState, String> {
    let conn = Connection::open(db_path)
        .map_err(|e| format!("Failed to open db {}: {}", db_path.display(), e))?;

    run_migrations(&conn)?;

    Ok(DbState::new(conn))
}

/// Check if a column exists in a table
fn column_exists(conn: &Connection, table: &str, column: &str) -> bool {
    let query = format!("PRAGMA table_info({})", table);
    let Ok(mut stmt) = conn.prepare(&query) else {
        return false;
    };
    let Ok(names) = stmt.query_map([], |row| row.get::<_, String>(1)) else {
        return false;
    };
    names.flatten().any(|name| name == column)
}

/// Run database migrations
fn run_migrations(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;

        CREATE TABLE IF NOT EXISTS boards (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT NOT NULL DEFAULT '',
            author TEXT NOT NULL DEFAULT '',
            color TEXT NOT NULL DEFAULT 'bg-blue-500',
            owner_id TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS board_columns (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            board_id INTEGER NOT NULL REFERENCES boards(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            sort_order INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            column_id INTEGER NOT NULL REFERENCES board_columns(id) ON DELETE CASCADE,
            title TEXT NOT NULL,
            description TEXT,
            assignee TEXT,
            due_date TEXT,
            priority TEXT NOT NULL DEFAULT 'medium',
            sort_order INTEGER NOT NULL DEFAULT 0,
            created_at INTEGER NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_boards_owner ON boards(owner_id, created_at);
        CREATE INDEX IF NOT EXISTS idx_columns_board ON board_columns(board_id, sort_order);
        CREATE INDEX IF NOT EXISTS idx_tasks_column ON tasks(column_id, sort_order);",
    )
    .map_err(|e| format!("Failed to create tables: {}", e))?;

    if !column_exists(conn, "boards", "updated_at") {
        conn.execute("ALTER TABLE boards ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| format!("Failed to add boards.updated_at: {}", e))?;
    }

    if !column_exists(conn, "tasks", "updated_at") {
        conn.execute("ALTER TABLE tasks ADD COLUMN updated_at INTEGER", [])
            .map_err(|e| format!("Failed to add tasks.updated_at: {}", e))?;
    }

    Ok(())
}

/// Current time in epoch millis, used for created/updated stamps
pub(crate) fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Id of the row just inserted on `conn`; ids are `u32` across IPC
pub(crate) fn inserted_id(conn: &Connection) -> DomainResult<u32> {
    let rowid = conn.last_insert_rowid();
    u32::try_from(rowid).map_err(|_| DomainError::Internal(format!("Row id {} does not fit in u32", rowid)))
}
