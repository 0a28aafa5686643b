//! Server state shared across requests

use batepapo_core::core_chat::store::{MessageStore, ParticipantStore};
use batepapo_core::core_chat::{MessageLog, ParticipantRegistry, PresenceService};
use std::sync::Arc;

/// Handles to the chat core, shared by every request handler.
///
/// Stores are injected rather than reached for ambiently, so tests run
/// the same handlers against the in-memory backend.
#[derive(Clone)]
pub struct AppState {
    pub presence: PresenceService,
    pub registry: ParticipantRegistry,
    pub messages: MessageLog,
}

impl AppState {
    pub fn new(
        participants: Arc<dyn ParticipantStore>,
        messages: Arc<dyn MessageStore>,
    ) -> Self {
        let log = MessageLog::new(messages);
        let registry = ParticipantRegistry::new(participants, log.clone());
        let presence = PresenceService::new(registry.clone(), log.clone());
        Self {
            presence,
            registry,
            messages: log,
        }
    }
}
