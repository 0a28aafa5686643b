//! Storage abstractions for the chat core
//!
//! Participants and the message log live behind store traits. Request
//! handlers receive injected store handles instead of reaching for ambient
//! state, and tests substitute the in-memory backend for the SQLite one.

mod memory_store;
pub mod migrations;
mod sql_store;

pub use memory_store::MemoryStore;
pub use sql_store::SqlStore;

use super::errors::ChatResult;
use super::model::{Message, Participant, Timestamp, UserName};
use async_trait::async_trait;

/// Persistence contract for the participant registry.
///
/// `insert` must be atomic per name: of two concurrent inserts for the
/// same name, exactly one may succeed.
#[async_trait]
pub trait ParticipantStore: Send + Sync {
    /// Check-and-insert. Fails with `ChatError::NameTaken` when the name
    /// is already present.
    async fn insert(&self, name: &UserName, last_seen_at: Timestamp) -> ChatResult<Participant>;

    async fn find(&self, name: &UserName) -> ChatResult<Option<Participant>>;

    /// All participants in insertion order.
    async fn list(&self) -> ChatResult<Vec<Participant>>;

    /// Update the liveness timestamp. Returns false when the name is
    /// absent.
    async fn touch(&self, name: &UserName, now: Timestamp) -> ChatResult<bool>;
}

/// Persistence contract for the append-only message log.
#[async_trait]
pub trait MessageStore: Send + Sync {
    /// Insert at the end of the total order.
    async fn append(&self, message: &Message) -> ChatResult<()>;

    /// Every message in insertion order. Per-viewer filtering happens in
    /// the log layer so it is evaluated identically for every backend.
    async fn all(&self) -> ChatResult<Vec<Message>>;
}
