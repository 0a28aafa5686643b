//! SQLite-backed store for participants and messages
//!
//! Name uniqueness rides on the `participants.name` primary key, so two
//! concurrent registrations settle inside the database; the losing insert
//! surfaces as a conflict.

use super::{migrations, MessageStore, ParticipantStore};
use crate::core_chat::errors::{ChatError, ChatResult};
use crate::core_chat::model::{Message, MessageKind, Participant, Recipient, Timestamp, UserName};
use async_trait::async_trait;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, OptionalExtension};
use std::path::Path;

/// SQLite store behind an r2d2 connection pool.
pub struct SqlStore {
    pool: Pool<SqliteConnectionManager>,
}

impl SqlStore {
    /// Open (or create) a database file and run pending migrations.
    pub fn open(path: impl AsRef<Path>) -> ChatResult<Self> {
        let pool = Pool::new(SqliteConnectionManager::file(path))?;
        migrations::migrate(&pool)?;
        Ok(Self { pool })
    }

    /// In-memory database. The pool is capped at a single connection so
    /// every handle sees the same database.
    pub fn memory() -> ChatResult<Self> {
        let pool = Pool::builder()
            .max_size(1)
            .build(SqliteConnectionManager::memory())?;
        migrations::migrate(&pool)?;
        Ok(Self { pool })
    }
}

fn row_to_message(row: &rusqlite::Row<'_>) -> rusqlite::Result<Message> {
    let sender: String = row.get(0)?;
    let recipient: String = row.get(1)?;
    let kind: String = row.get(3)?;
    let kind = match kind.as_str() {
        "status" => MessageKind::Status,
        "private_message" => MessageKind::Direct,
        _ => MessageKind::Broadcast,
    };
    Ok(Message {
        from: UserName::new(sender),
        to: Recipient::parse(&recipient),
        text: row.get(2)?,
        kind,
        created_at: row.get(4)?,
    })
}

#[async_trait]
impl ParticipantStore for SqlStore {
    async fn insert(&self, name: &UserName, last_seen_at: Timestamp) -> ChatResult<Participant> {
        let conn = self.pool.get()?;
        let result = conn.execute(
            "INSERT INTO participants (name, last_seen_at) VALUES (?, ?)",
            params![name.as_str(), last_seen_at.as_millis() as i64],
        );

        match result {
            Ok(_) => Ok(Participant::new(name.clone(), last_seen_at)),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Err(ChatError::NameTaken(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find(&self, name: &UserName) -> ChatResult<Option<Participant>> {
        let conn = self.pool.get()?;
        let participant = conn
            .query_row(
                "SELECT name, last_seen_at FROM participants WHERE name = ?",
                params![name.as_str()],
                |row| {
                    Ok(Participant::new(
                        UserName::new(row.get::<_, String>(0)?),
                        Timestamp::from_millis(row.get::<_, i64>(1)?.max(0) as u64),
                    ))
                },
            )
            .optional()?;
        Ok(participant)
    }

    async fn list(&self) -> ChatResult<Vec<Participant>> {
        let conn = self.pool.get()?;
        let mut stmt =
            conn.prepare("SELECT name, last_seen_at FROM participants ORDER BY rowid")?;
        let participants = stmt
            .query_map([], |row| {
                Ok(Participant::new(
                    UserName::new(row.get::<_, String>(0)?),
                    Timestamp::from_millis(row.get::<_, i64>(1)?.max(0) as u64),
                ))
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(participants)
    }

    async fn touch(&self, name: &UserName, now: Timestamp) -> ChatResult<bool> {
        let conn = self.pool.get()?;
        let updated = conn.execute(
            "UPDATE participants SET last_seen_at = ? WHERE name = ?",
            params![now.as_millis() as i64, name.as_str()],
        )?;
        Ok(updated > 0)
    }
}

#[async_trait]
impl MessageStore for SqlStore {
    async fn append(&self, message: &Message) -> ChatResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO messages (sender, recipient, body, kind, created_at)
             VALUES (?, ?, ?, ?, ?)",
            params![
                message.from.as_str(),
                message.to.to_string(),
                &message.text,
                message.kind.as_wire(),
                &message.created_at,
            ],
        )?;
        Ok(())
    }

    async fn all(&self) -> ChatResult<Vec<Message>> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(
            "SELECT sender, recipient, body, kind, created_at FROM messages ORDER BY seq",
        )?;
        let messages = stmt
            .query_map([], row_to_message)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(messages)
    }
}
