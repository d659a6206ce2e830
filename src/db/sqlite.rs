//! SQLite connection management.
//!
//! The pool hands out independent connections for file-backed databases.
//! `:memory:` URLs pin the pool to a single connection, since every
//! checkout of an in-memory manager would otherwise open its own empty
//! database.

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use std::time::Duration;

pub type DbConn = r2d2::PooledConnection<SqliteConnectionManager>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS memos (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    title      TEXT NOT NULL CHECK (length(title) <= 100),
    content    TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL,
    deleted_at TEXT
);
CREATE INDEX IF NOT EXISTS idx_memos_deleted_at ON memos (deleted_at);
";

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `database_url` and run the
    /// idempotent migration. Pass `:memory:` for a throwaway database.
    pub fn new(database_url: &str) -> Result<Self, r2d2::Error> {
        let in_memory = database_url == ":memory:";

        let manager = if in_memory {
            SqliteConnectionManager::memory()
        } else {
            SqliteConnectionManager::file(database_url)
        };
        let manager = manager.with_init(|conn| {
            conn.busy_timeout(Duration::from_secs(5))?;
            conn.execute_batch(SCHEMA)
        });

        let pool = Pool::builder()
            .max_size(if in_memory { 1 } else { 8 })
            .build(manager)?;

        // Surface schema errors at startup instead of on the first request.
        pool.get()?;

        Ok(Self { pool })
    }

    pub fn conn(&self) -> DbConn {
        self.pool.get().expect("Failed to get database connection")
    }
}
