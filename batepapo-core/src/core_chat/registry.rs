//! Participant registry
//!
//! Tracks active participants and their liveness timestamp. Registration
//! announces the join in the message log; expiry of silent participants is
//! a policy for an external sweep that only reads `last_seen_at`.

use super::errors::{ChatError, ChatResult};
use super::message_log::MessageLog;
use super::model::{MessageKind, Participant, Recipient, Timestamp, UserName};
use super::store::ParticipantStore;
use std::sync::Arc;
use tracing::{debug, info};

/// Status text appended when a participant enters the room.
const JOIN_TEXT: &str = "entra na sala...";

/// Registry of active participants over an injected store.
#[derive(Clone)]
pub struct ParticipantRegistry {
    store: Arc<dyn ParticipantStore>,
    log: MessageLog,
}

impl ParticipantRegistry {
    pub fn new(store: Arc<dyn ParticipantStore>, log: MessageLog) -> Self {
        Self { store, log }
    }

    /// Create a participant with `last_seen_at = now`.
    ///
    /// The check-and-insert is atomic in the store, so of two concurrent
    /// registrations for one name exactly one succeeds and the other
    /// observes `NameTaken`. On success a `status` message announcing the
    /// join is appended to the log.
    pub async fn register(&self, name: &UserName) -> ChatResult<Participant> {
        let participant = self.store.insert(name, Timestamp::now()).await?;
        info!(name = %name, "participant registered");

        self.log
            .append(
                name.clone(),
                Recipient::Broadcast,
                JOIN_TEXT.to_string(),
                MessageKind::Status,
            )
            .await?;

        Ok(participant)
    }

    /// Existence gate used by message posting and heartbeat.
    pub async fn exists(&self, name: &UserName) -> ChatResult<bool> {
        Ok(self.store.find(name).await?.is_some())
    }

    /// All participants in insertion order.
    pub async fn list(&self) -> ChatResult<Vec<Participant>> {
        self.store.list().await
    }

    /// Refresh the liveness timestamp.
    pub async fn touch(&self, name: &UserName) -> ChatResult<()> {
        if self.store.touch(name, Timestamp::now()).await? {
            debug!(name = %name, "liveness refreshed");
            Ok(())
        } else {
            Err(ChatError::UnknownParticipant(name.to_string()))
        }
    }
}
