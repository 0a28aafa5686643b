/*
    types.rs - Common types for the core_chat models

    Defines:
    - Timestamps (epoch milliseconds, liveness tracking)
    - Participant names
    - Message recipients and kinds
*/

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Reserved recipient name meaning "all current participants".
pub const BROADCAST_NAME: &str = "Todos";

/// Unix timestamp in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Create a timestamp representing the current time
    pub fn now() -> Self {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards");
        Timestamp(duration.as_millis() as u64)
    }

    /// Create a timestamp from milliseconds since epoch
    pub fn from_millis(millis: u64) -> Self {
        Timestamp(millis)
    }

    /// Get milliseconds since epoch
    pub fn as_millis(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A participant's chosen name. Case-sensitive; doubles as the session
/// identity across all operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserName(pub String);

impl UserName {
    pub fn new(name: impl Into<String>) -> Self {
        UserName(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Message recipient: everyone in the room, or a single named participant.
///
/// The broadcast case is a tagged value rather than a magic string; the
/// reserved name only exists at the serialization boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Recipient {
    Broadcast,
    Direct(UserName),
}

impl Recipient {
    /// Map a wire-level recipient name onto the tagged form.
    pub fn parse(raw: &str) -> Self {
        if raw == BROADCAST_NAME {
            Recipient::Broadcast
        } else {
            Recipient::Direct(UserName::new(raw))
        }
    }
}

impl From<String> for Recipient {
    fn from(raw: String) -> Self {
        Recipient::parse(&raw)
    }
}

impl From<Recipient> for String {
    fn from(recipient: Recipient) -> Self {
        match recipient {
            Recipient::Broadcast => BROADCAST_NAME.to_string(),
            Recipient::Direct(name) => name.0,
        }
    }
}

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recipient::Broadcast => write!(f, "{}", BROADCAST_NAME),
            Recipient::Direct(name) => write!(f, "{}", name),
        }
    }
}

/// Message classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    /// System-generated join notice
    #[serde(rename = "status")]
    Status,
    /// Addressed to the whole room
    #[serde(rename = "message")]
    Broadcast,
    /// Addressed to one participant
    #[serde(rename = "private_message")]
    Direct,
}

impl MessageKind {
    /// Parse a client-supplied kind. `status` is reserved for entries the
    /// system authors itself and is never accepted from a client.
    pub fn from_wire(raw: &str) -> Option<Self> {
        match raw {
            "message" => Some(MessageKind::Broadcast),
            "private_message" => Some(MessageKind::Direct),
            _ => None,
        }
    }

    /// The wire-level name of this kind.
    pub fn as_wire(&self) -> &'static str {
        match self {
            MessageKind::Status => "status",
            MessageKind::Broadcast => "message",
            MessageKind::Direct => "private_message",
        }
    }
}
