/*
    participant.rs - Participant model

    A registered chat identity. The name is unique across the room and the
    liveness timestamp is refreshed on every heartbeat; an external sweep
    may read it to expire silent participants.
*/

use super::types::{Timestamp, UserName};
use serde::{Deserialize, Serialize};

/// A registered chat identity with its liveness timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique, case-sensitive name
    pub name: UserName,

    /// Last registration or heartbeat, epoch milliseconds
    #[serde(rename = "lastStatus")]
    pub last_seen_at: Timestamp,
}

impl Participant {
    /// Create a new participant
    pub fn new(name: UserName, last_seen_at: Timestamp) -> Self {
        Participant { name, last_seen_at }
    }
}
