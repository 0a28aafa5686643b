//! HTTP handlers for the chat API
//!
//! The session identity travels in the `user` header. Handlers extract it
//! and thread it into the presence service explicitly; nothing below this
//! layer touches request state.

use crate::error::ApiResult;
use crate::state::AppState;
use crate::types::{ListMessagesQuery, PostMessageRequest, RegisterRequest};
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use batepapo_core::core_chat::model::{Message, Participant, UserName};
use batepapo_core::core_chat::ChatError;
use std::sync::Arc;

/// Header carrying the caller's session identity
const USER_HEADER: &str = "user";

fn session_user(headers: &HeaderMap) -> Option<&str> {
    headers.get(USER_HEADER).and_then(|value| value.to_str().ok())
}

/// POST /participants - register a presence entry
pub async fn register_participant(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<StatusCode> {
    state.presence.handle_registration(&req.name).await?;
    Ok(StatusCode::CREATED)
}

/// GET /participants - list registered participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Participant>>> {
    Ok(Json(state.registry.list().await?))
}

/// POST /messages - append a broadcast or direct message
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<PostMessageRequest>,
) -> ApiResult<StatusCode> {
    let from = session_user(&headers);
    state
        .presence
        .handle_post_message(from, &req.to, &req.text, &req.kind)
        .await?;
    Ok(StatusCode::CREATED)
}

/// GET /messages - messages visible to the caller
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ListMessagesQuery>,
) -> ApiResult<Json<Vec<Message>>> {
    let limit = match &query.limit {
        Some(raw) => Some(raw.parse::<i64>().map_err(|_| {
            ChatError::Validation(format!("limit must be an integer: {}", raw))
        })?),
        None => None,
    };

    let viewer = session_user(&headers).map(UserName::new);
    let messages = state.messages.query(viewer.as_ref(), limit).await?;
    Ok(Json(messages))
}

/// POST /status - liveness heartbeat
pub async fn heartbeat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> ApiResult<StatusCode> {
    state.presence.handle_heartbeat(session_user(&headers)).await?;
    Ok(StatusCode::OK)
}
