//! Chat core: participant presence, the message log, and per-viewer
//! visibility.
//!
//! # Responsibilities
//!
//! - **Participant Registry**: unique names and liveness timestamps
//! - **Message Log**: append-only, totally ordered chat events
//! - **Visibility Filter**: which subset of the log each viewer may read
//! - **Presence Service**: boundary validation for inbound operations
//!
//! Stores are injected (`store` module) so the same rules run against the
//! SQLite backend and the in-memory one.

pub mod errors;
pub mod message_log;
pub mod model;
pub mod presence;
pub mod registry;
pub mod store;
pub mod visibility;

pub use errors::{ChatError, ChatResult};
pub use message_log::MessageLog;
pub use presence::PresenceService;
pub use registry::ParticipantRegistry;
