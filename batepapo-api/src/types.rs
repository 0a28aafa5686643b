//! Request types for the HTTP API
//!
//! Fields default to empty strings so that a missing field reaches the
//! presence service as an ordinary validation failure instead of a body
//! rejection; the service owns all field checks.

use serde::Deserialize;

/// POST /participants body
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
}

/// POST /messages body
#[derive(Debug, Deserialize)]
pub struct PostMessageRequest {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// GET /messages query string
///
/// `limit` stays a raw string so a non-numeric value maps to the same
/// client error as a non-positive one.
#[derive(Debug, Deserialize)]
pub struct ListMessagesQuery {
    pub limit: Option<String>,
}
