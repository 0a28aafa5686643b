//! Per-viewer message visibility
//!
//! The one rule every read path goes through, regardless of which store
//! backs the log: a viewer sees everything addressed to everyone,
//! everything addressed to them, and everything they authored (so their
//! own direct messages remain readable to them). A direct message between
//! two other identities must never appear for a third viewer.

use super::model::{Message, Recipient, UserName};

/// True iff `viewer` may read `message`.
pub fn is_visible(message: &Message, viewer: &UserName) -> bool {
    match &message.to {
        Recipient::Broadcast => true,
        Recipient::Direct(to) => to == viewer || &message.from == viewer,
    }
}
