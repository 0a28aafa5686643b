//! Data model for the chat core

mod message;
mod participant;
mod types;

pub use message::Message;
pub use participant::Participant;
pub use types::{MessageKind, Recipient, Timestamp, UserName, BROADCAST_NAME};
