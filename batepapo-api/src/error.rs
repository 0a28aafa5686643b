//! Error-to-status mapping for the HTTP surface

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use batepapo_core::core_chat::ChatError;

/// Wrapper turning `ChatError` into the caller-visible status.
///
/// Every failure is terminal for its request and carries no detail
/// payload beyond the status itself.
#[derive(Debug)]
pub struct ApiError(ChatError);

pub type ApiResult<T> = Result<T, ApiError>;

impl From<ChatError> for ApiError {
    fn from(err: ChatError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ChatError::Validation(_) | ChatError::InvalidLimit(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ChatError::NameTaken(_) => StatusCode::CONFLICT,
            ChatError::UnknownParticipant(_) | ChatError::MissingIdentity => StatusCode::NOT_FOUND,
            ChatError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed in the store layer");
        }

        status.into_response()
    }
}
