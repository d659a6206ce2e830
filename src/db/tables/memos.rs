//! Memo database operations (memos)

use chrono::{DateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{OptionalExtension, Result as SqliteResult, Row};
use serde::{Deserialize, Serialize};

use super::super::Database;

/// A stored memo. Soft-deleted rows never leave the database layer, so the
/// wire shape carries no deletion marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Memo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create a new memo
#[derive(Debug, Deserialize)]
pub struct CreateMemoRequest {
    pub title: String,
    pub content: String,
}

/// Request to update a memo. No route reaches this yet; the shape is kept
/// for the eventual PUT endpoint.
#[allow(dead_code)]
#[derive(Debug, Deserialize)]
pub struct UpdateMemoRequest {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl Database {
    /// Create a new memo. The store assigns the id and both timestamps.
    pub fn create_memo(&self, request: &CreateMemoRequest) -> SqliteResult<Memo> {
        let conn = self.conn();
        let now = Utc::now();

        conn.execute(
            "INSERT INTO memos (title, content, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?3)",
            rusqlite::params![&request.title, &request.content, now.to_rfc3339()],
        )?;

        Ok(Memo {
            id: conn.last_insert_rowid(),
            title: request.title.clone(),
            content: request.content.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// List all non-deleted memos, newest first. The id tie-break keeps the
    /// order stable for rows created in the same instant.
    pub fn list_memos(&self) -> SqliteResult<Vec<Memo>> {
        let conn = self.conn();
        let mut stmt = conn.prepare(
            "SELECT id, title, content, created_at, updated_at
             FROM memos WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC",
        )?;

        let memos = stmt
            .query_map([], Self::row_to_memo)?
            .collect::<SqliteResult<Vec<_>>>()?;

        Ok(memos)
    }

    /// Get a memo by id. Returns `Ok(None)` for missing or soft-deleted
    /// rows; `Err` is reserved for real storage failures.
    pub fn get_memo(&self, id: i64) -> SqliteResult<Option<Memo>> {
        let conn = self.conn();
        conn.query_row(
            "SELECT id, title, content, created_at, updated_at
             FROM memos WHERE id = ?1 AND deleted_at IS NULL",
            [id],
            Self::row_to_memo,
        )
        .optional()
    }

    fn row_to_memo(row: &Row) -> SqliteResult<Memo> {
        Ok(Memo {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: Self::parse_timestamp(row, 3)?,
            updated_at: Self::parse_timestamp(row, 4)?,
        })
    }

    fn parse_timestamp(row: &Row, idx: usize) -> SqliteResult<DateTime<Utc>> {
        let raw: String = row.get(idx)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
    }
}
