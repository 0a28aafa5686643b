//! Append-only message log
//!
//! The total order is the storage commit order, not wall-clock submission
//! order. Reads go through the visibility filter before any windowing.

use super::errors::{ChatError, ChatResult};
use super::model::{Message, MessageKind, Recipient, UserName};
use super::store::MessageStore;
use super::visibility::is_visible;
use chrono::Local;
use std::sync::Arc;
use tracing::debug;

/// Ordered log of chat events over an injected store.
#[derive(Clone)]
pub struct MessageLog {
    store: Arc<dyn MessageStore>,
}

impl MessageLog {
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Append a message, stamping the wall-clock insertion time.
    ///
    /// No content validation happens here; that is the caller's
    /// responsibility.
    pub async fn append(
        &self,
        from: UserName,
        to: Recipient,
        text: String,
        kind: MessageKind,
    ) -> ChatResult<Message> {
        let message = Message::new(
            from,
            to,
            text,
            kind,
            Local::now().format("%H:%M:%S").to_string(),
        );
        self.store.append(&message).await?;
        debug!(from = %message.from, to = %message.to, kind = message.kind.as_wire(), "message appended");
        Ok(message)
    }

    /// Messages visible to `viewer`, in insertion order.
    ///
    /// With a limit, returns the most recent `limit` visible messages,
    /// oldest of the selected window first. The limit must be positive.
    /// A caller without a session identity sees broadcast traffic only.
    pub async fn query(
        &self,
        viewer: Option<&UserName>,
        limit: Option<i64>,
    ) -> ChatResult<Vec<Message>> {
        if let Some(limit) = limit {
            if limit <= 0 {
                return Err(ChatError::InvalidLimit(limit));
            }
        }

        let mut visible: Vec<Message> = self
            .store
            .all()
            .await?
            .into_iter()
            .filter(|message| match viewer {
                Some(viewer) => is_visible(message, viewer),
                None => message.to == Recipient::Broadcast,
            })
            .collect();

        if let Some(limit) = limit {
            let limit = limit as usize;
            if visible.len() > limit {
                visible.drain(..visible.len() - limit);
            }
        }

        Ok(visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_chat::store::MemoryStore;

    fn log() -> MessageLog {
        MessageLog::new(Arc::new(MemoryStore::new()))
    }

    async fn broadcast(log: &MessageLog, from: &str, text: &str) {
        log.append(
            UserName::new(from),
            Recipient::Broadcast,
            text.to_string(),
            MessageKind::Broadcast,
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_append_stamps_time() {
        let log = log();
        let msg = log
            .append(
                UserName::new("Alice"),
                Recipient::Broadcast,
                "oi".to_string(),
                MessageKind::Broadcast,
            )
            .await
            .unwrap();

        // HH:MM:SS
        assert_eq!(msg.created_at.len(), 8);
        assert_eq!(msg.created_at.as_bytes()[2], b':');
        assert_eq!(msg.created_at.as_bytes()[5], b':');
    }

    #[tokio::test]
    async fn test_query_returns_all_visible_without_limit() {
        let log = log();
        for i in 0..4 {
            broadcast(&log, "Alice", &format!("m{}", i)).await;
        }

        let viewer = UserName::new("Bob");
        let messages = log.query(Some(&viewer), None).await.unwrap();
        assert_eq!(messages.len(), 4);
    }

    #[tokio::test]
    async fn test_limit_windowing_keeps_most_recent_in_order() {
        let log = log();
        for i in 1..=10 {
            broadcast(&log, "Alice", &format!("m{}", i)).await;
        }

        let viewer = UserName::new("Bob");
        let window = log.query(Some(&viewer), Some(3)).await.unwrap();
        let texts: Vec<&str> = window.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["m8", "m9", "m10"]);
    }

    #[tokio::test]
    async fn test_limit_larger_than_log_returns_everything() {
        let log = log();
        broadcast(&log, "Alice", "only one").await;

        let viewer = UserName::new("Bob");
        let messages = log.query(Some(&viewer), Some(100)).await.unwrap();
        assert_eq!(messages.len(), 1);
    }

    #[tokio::test]
    async fn test_non_positive_limit_is_rejected() {
        let log = log();
        let viewer = UserName::new("Bob");

        let err = log.query(Some(&viewer), Some(0)).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidLimit(0)));

        let err = log.query(Some(&viewer), Some(-5)).await.unwrap_err();
        assert!(matches!(err, ChatError::InvalidLimit(-5)));
    }

    #[tokio::test]
    async fn test_query_filters_direct_messages() {
        let log = log();
        broadcast(&log, "A", "para todos").await;
        log.append(
            UserName::new("A"),
            Recipient::Direct(UserName::new("B")),
            "so para B".to_string(),
            MessageKind::Direct,
        )
        .await
        .unwrap();

        let b = log.query(Some(&UserName::new("B")), None).await.unwrap();
        assert_eq!(b.len(), 2);

        let c = log.query(Some(&UserName::new("C")), None).await.unwrap();
        assert_eq!(c.len(), 1);
        assert_eq!(c[0].text, "para todos");
    }

    #[tokio::test]
    async fn test_anonymous_viewer_sees_broadcasts_only() {
        let log = log();
        broadcast(&log, "A", "para todos").await;
        log.append(
            UserName::new("A"),
            Recipient::Direct(UserName::new("B")),
            "so para B".to_string(),
            MessageKind::Direct,
        )
        .await
        .unwrap();

        let anonymous = log.query(None, None).await.unwrap();
        assert_eq!(anonymous.len(), 1);
        assert_eq!(anonymous[0].text, "para todos");
    }

    #[tokio::test]
    async fn test_repeated_queries_are_identical() {
        let log = log();
        for i in 0..5 {
            broadcast(&log, "Alice", &format!("m{}", i)).await;
        }

        let viewer = UserName::new("Bob");
        let first = log.query(Some(&viewer), Some(3)).await.unwrap();
        let second = log.query(Some(&viewer), Some(3)).await.unwrap();
        assert_eq!(first, second);
    }
}
