//! Presence service
//!
//! Boundary validation for the three inbound operations: registration,
//! message posting, and heartbeat. Every check runs synchronously at the
//! operation boundary and is terminal for that request; the transport
//! layer maps each failure 1:1 onto a caller-visible status.

use super::errors::{ChatError, ChatResult};
use super::message_log::MessageLog;
use super::model::{MessageKind, Recipient, UserName};
use super::registry::ParticipantRegistry;
use tracing::warn;

/// Validates inbound requests against the registry and routes accepted
/// ones into the registry or the message log.
#[derive(Clone)]
pub struct PresenceService {
    registry: ParticipantRegistry,
    log: MessageLog,
}

impl PresenceService {
    pub fn new(registry: ParticipantRegistry, log: MessageLog) -> Self {
        Self { registry, log }
    }

    /// Register `name`; the join notice is emitted by the registry.
    pub async fn handle_registration(&self, name: &str) -> ChatResult<()> {
        if name.is_empty() {
            return Err(ChatError::Validation(
                "name must be a non-empty string".to_string(),
            ));
        }
        self.registry.register(&UserName::new(name)).await?;
        Ok(())
    }

    /// Append a broadcast or direct message from a registered sender.
    ///
    /// Sender authenticity is established purely by prior registration;
    /// an unknown sender is rejected the same way as a malformed payload.
    pub async fn handle_post_message(
        &self,
        from: Option<&str>,
        to: &str,
        text: &str,
        kind: &str,
    ) -> ChatResult<()> {
        let from = match from {
            Some(from) if !from.is_empty() => UserName::new(from),
            _ => {
                return Err(ChatError::Validation(
                    "sender identity is required".to_string(),
                ))
            }
        };
        if to.is_empty() {
            return Err(ChatError::Validation(
                "recipient must be a non-empty string".to_string(),
            ));
        }
        if text.is_empty() {
            return Err(ChatError::Validation(
                "text must be a non-empty string".to_string(),
            ));
        }
        let kind = MessageKind::from_wire(kind)
            .ok_or_else(|| ChatError::Validation(format!("unknown message kind: {}", kind)))?;

        if !self.registry.exists(&from).await? {
            warn!(from = %from, "post from unregistered sender");
            return Err(ChatError::Validation(format!("unknown sender: {}", from)));
        }

        self.log
            .append(from, Recipient::parse(to), text.to_string(), kind)
            .await?;
        Ok(())
    }

    /// Refresh the caller's liveness timestamp.
    pub async fn handle_heartbeat(&self, identity: Option<&str>) -> ChatResult<()> {
        let identity = match identity {
            Some(identity) if !identity.is_empty() => UserName::new(identity),
            _ => return Err(ChatError::MissingIdentity),
        };
        if !self.registry.exists(&identity).await? {
            return Err(ChatError::UnknownParticipant(identity.to_string()));
        }
        self.registry.touch(&identity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_chat::store::MemoryStore;
    use std::sync::Arc;

    fn service() -> (PresenceService, MessageLog) {
        let store = Arc::new(MemoryStore::new());
        let log = MessageLog::new(store.clone());
        let registry = ParticipantRegistry::new(store, log.clone());
        (PresenceService::new(registry, log.clone()), log)
    }

    #[tokio::test]
    async fn test_registration_rejects_empty_name() {
        let (service, _) = service();
        let err = service.handle_registration("").await.unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn test_registration_conflict_propagates() {
        let (service, _) = service();
        service.handle_registration("Alice").await.unwrap();

        let err = service.handle_registration("Alice").await.unwrap_err();
        assert!(matches!(err, ChatError::NameTaken(_)));
    }

    #[tokio::test]
    async fn test_post_message_requires_registered_sender() {
        let (service, _) = service();

        let err = service
            .handle_post_message(Some("Ghost"), "Todos", "boo", "message")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Validation(_)));
    }

    #[tokio::test]
    async fn test_post_message_field_validation() {
        let (service, _) = service();
        service.handle_registration("Alice").await.unwrap();

        for (from, to, text, kind) in [
            (None, "Todos", "oi", "message"),
            (Some(""), "Todos", "oi", "message"),
            (Some("Alice"), "", "oi", "message"),
            (Some("Alice"), "Todos", "", "message"),
            (Some("Alice"), "Todos", "oi", "shout"),
            // clients may not author system notices
            (Some("Alice"), "Todos", "oi", "status"),
        ] {
            let err = service
                .handle_post_message(from, to, text, kind)
                .await
                .unwrap_err();
            assert!(matches!(err, ChatError::Validation(_)));
        }
    }

    #[tokio::test]
    async fn test_post_message_appends_both_kinds() {
        let (service, log) = service();
        service.handle_registration("Alice").await.unwrap();

        service
            .handle_post_message(Some("Alice"), "Todos", "oi pessoal", "message")
            .await
            .unwrap();
        service
            .handle_post_message(Some("Alice"), "Bob", "oi Bob", "private_message")
            .await
            .unwrap();

        let alice = UserName::new("Alice");
        let messages = log.query(Some(&alice), None).await.unwrap();
        // join notice + two posts
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].kind, MessageKind::Broadcast);
        assert_eq!(messages[2].kind, MessageKind::Direct);
        assert_eq!(messages[2].to, Recipient::Direct(UserName::new("Bob")));
    }

    #[tokio::test]
    async fn test_heartbeat_gating() {
        let (service, _) = service();
        service.handle_registration("Alice").await.unwrap();

        let err = service.handle_heartbeat(None).await.unwrap_err();
        assert!(matches!(err, ChatError::MissingIdentity));

        let err = service.handle_heartbeat(Some("")).await.unwrap_err();
        assert!(matches!(err, ChatError::MissingIdentity));

        let err = service.handle_heartbeat(Some("Unknown")).await.unwrap_err();
        assert!(matches!(err, ChatError::UnknownParticipant(_)));

        service.handle_heartbeat(Some("Alice")).await.unwrap();
    }
}
