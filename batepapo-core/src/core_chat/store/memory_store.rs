//! In-memory store backend
//!
//! Single-process backend used by tests and embedded setups. Registration
//! atomicity comes from holding one write lock across the check-and-insert.

use super::{MessageStore, ParticipantStore};
use crate::core_chat::errors::{ChatError, ChatResult};
use crate::core_chat::model::{Message, Participant, Timestamp, UserName};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory participant table and message log.
#[derive(Default)]
pub struct MemoryStore {
    participants: RwLock<ParticipantTable>,
    messages: RwLock<Vec<Message>>,
}

#[derive(Default)]
struct ParticipantTable {
    by_name: HashMap<UserName, Participant>,
    // insertion order of names, for list()
    order: Vec<UserName>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ParticipantStore for MemoryStore {
    async fn insert(&self, name: &UserName, last_seen_at: Timestamp) -> ChatResult<Participant> {
        let mut table = self.participants.write().await;
        if table.by_name.contains_key(name) {
            return Err(ChatError::NameTaken(name.to_string()));
        }
        let participant = Participant::new(name.clone(), last_seen_at);
        table.by_name.insert(name.clone(), participant.clone());
        table.order.push(name.clone());
        Ok(participant)
    }

    async fn find(&self, name: &UserName) -> ChatResult<Option<Participant>> {
        Ok(self.participants.read().await.by_name.get(name).cloned())
    }

    async fn list(&self) -> ChatResult<Vec<Participant>> {
        let table = self.participants.read().await;
        Ok(table
            .order
            .iter()
            .filter_map(|name| table.by_name.get(name).cloned())
            .collect())
    }

    async fn touch(&self, name: &UserName, now: Timestamp) -> ChatResult<bool> {
        let mut table = self.participants.write().await;
        match table.by_name.get_mut(name) {
            Some(participant) => {
                participant.last_seen_at = now;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[async_trait]
impl MessageStore for MemoryStore {
    async fn append(&self, message: &Message) -> ChatResult<()> {
        self.messages.write().await.push(message.clone());
        Ok(())
    }

    async fn all(&self) -> ChatResult<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }
}
