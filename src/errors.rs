use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::models::TimeSlot;

/// Failures of the chat-facing flows. Kept structured until a reply is
/// composed for the chat.
#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("no date found, expected DD/MM/YY")]
    NoDateFound,

    #[error("no time found, expected HH:MM")]
    NoTimeFound,

    #[error("login failed: {0:#}")]
    Auth(anyhow::Error),

    #[error("fetching courts failed: {0:#}")]
    Fetch(anyhow::Error),

    #[error("no court is free at {0}")]
    NoCourtAtTime(TimeSlot),

    #[error("booking failed: {0:#}")]
    Booking(anyhow::Error),

    #[error("sending message failed: {0:#}")]
    Send(anyhow::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Bot(#[from] BotError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Bot(BotError::Auth(_) | BotError::Fetch(_)) => StatusCode::BAD_GATEWAY,
            AppError::Bot(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = serde_json::json!({ "error": self.to_string() });
        (status, axum::Json(body)).into_response()
    }
}
