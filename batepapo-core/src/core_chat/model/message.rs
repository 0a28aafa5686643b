/*
    message.rs - Message model

    A single chat event: a system join notice, a room-wide broadcast, or a
    direct message between two participants. Messages are immutable once
    created; the total order is the insertion sequence maintained by the
    message log.
*/

use super::types::{MessageKind, Recipient, UserName};
use serde::{Deserialize, Serialize};

/// Message in the room log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Sender identity; system-authored entries carry the joining name
    pub from: UserName,

    /// Everyone, or one named participant
    pub to: Recipient,

    /// Free-form body
    pub text: String,

    /// Classification label; visibility derives from `to`, not from this
    #[serde(rename = "type")]
    pub kind: MessageKind,

    /// Wall-clock insertion time, HH:MM:SS
    #[serde(rename = "time")]
    pub created_at: String,
}

impl Message {
    /// Create a new message
    pub fn new(
        from: UserName,
        to: Recipient,
        text: String,
        kind: MessageKind,
        created_at: String,
    ) -> Self {
        Message {
            from,
            to,
            text,
            kind,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::new(
            UserName::new("Alice"),
            Recipient::Broadcast,
            "oi".to_string(),
            MessageKind::Broadcast,
            "12:00:00".to_string(),
        );
        assert_eq!(msg.from.as_str(), "Alice");
        assert_eq!(msg.to, Recipient::Broadcast);
        assert_eq!(msg.kind, MessageKind::Broadcast);
    }

    #[test]
    fn test_message_wire_format() {
        let msg = Message::new(
            UserName::new("Alice"),
            Recipient::Direct(UserName::new("Bob")),
            "oi".to_string(),
            MessageKind::Direct,
            "12:00:00".to_string(),
        );
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["from"], "Alice");
        assert_eq!(json["to"], "Bob");
        assert_eq!(json["text"], "oi");
        assert_eq!(json["type"], "private_message");
        assert_eq!(json["time"], "12:00:00");
    }

    #[test]
    fn test_message_wire_round_trip() {
        let raw = r#"{"from":"Alice","to":"Todos","text":"entra na sala...","type":"status","time":"09:15:30"}"#;
        let msg: Message = serde_json::from_str(raw).unwrap();
        assert_eq!(msg.to, Recipient::Broadcast);
        assert_eq!(msg.kind, MessageKind::Status);
        assert_eq!(serde_json::to_string(&msg).unwrap(), raw);
    }
}
