//! Domain layer of the batepapo chat backend.
//!
//! Participants register a presence entry, exchange broadcast and direct
//! messages, and refresh a liveness signal. The `core_chat` module holds
//! the rules: who is a valid sender or recipient, which messages each
//! viewer may read, and how liveness is tracked. `config` and `logging`
//! carry the ambient concerns shared by every front end.

pub mod config;
pub mod core_chat;
pub mod logging;

pub use core_chat::{ChatError, ChatResult, MessageLog, ParticipantRegistry, PresenceService};
pub use logging::{init_logging, LogLevel};
