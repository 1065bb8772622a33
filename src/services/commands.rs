use crate::errors::BotError;
use crate::models::{AvailableCourts, Intent};
use crate::services::booking::handle_booking_request;
use crate::services::datetime::extract_date;
use crate::services::report;
use crate::state::AppState;

pub const ALIVE_REPLY: &str = "yeah I'm fine, thanks!";

pub async fn run(
    state: &AppState,
    intent: Intent,
    chat_id: i64,
    text: &str,
) -> Result<(), BotError> {
    match intent {
        Intent::AliveCheck => handle_alive(state, chat_id).await,
        Intent::AvailabilityQuery => handle_available_courts(state, chat_id, text).await,
        Intent::BookingRequest => handle_booking_request(state, chat_id, text).await,
    }
}

async fn handle_alive(state: &AppState, chat_id: i64) -> Result<(), BotError> {
    state.messaging.send_message(chat_id, ALIVE_REPLY).await
}

async fn handle_available_courts(
    state: &AppState,
    chat_id: i64,
    text: &str,
) -> Result<(), BotError> {
    let reply = match fetch_available_courts(state, text).await {
        Ok(courts) => report::render(&courts, state.config.slot_order()),
        Err(e) => {
            tracing::warn!(chat_id, error = %e, "availability query failed");
            format!("Failed to fetch available courts: {e}")
        }
    };

    state.messaging.send_message(chat_id, &reply).await
}

async fn fetch_available_courts(state: &AppState, text: &str) -> Result<AvailableCourts, BotError> {
    let date = extract_date(text)?;
    let session = state
        .site
        .login(&state.config.username, &state.config.password)
        .await?;
    session.available_courts(date).await
}
