use crate::errors::BotError;
use crate::models::{BookingOutcome, ReservationRequest};
use crate::services::datetime::{extract_date, extract_time};
use crate::services::selector::select_court;
use crate::state::AppState;

/// Books a court for the date and time written in `text`. Steps run in a
/// fixed order and the first failure ends the attempt.
pub async fn book_court(state: &AppState, text: &str) -> Result<BookingOutcome, BotError> {
    let date = extract_date(text)?;

    let session = state
        .site
        .login(&state.config.username, &state.config.password)
        .await?;

    let courts = session.available_courts(date).await?;

    let slot = extract_time(text)?;

    let court = select_court(&courts, slot)?;
    tracing::info!(court, %date, %slot, "selected court");

    let request = ReservationRequest {
        requester: state.config.username.clone(),
        counterpart: state.config.partner.clone(),
        date,
        slot,
        court,
    };
    session.book(&request).await?;

    Ok(BookingOutcome {
        court,
        date,
        slot,
        confirming_party: request.counterpart,
    })
}

pub async fn handle_booking_request(
    state: &AppState,
    chat_id: i64,
    text: &str,
) -> Result<(), BotError> {
    let reply = match book_court(state, text).await {
        Ok(outcome) => {
            tracing::info!(chat_id, court = outcome.court, "court booked");
            outcome.to_string()
        }
        Err(e) => {
            tracing::warn!(chat_id, error = %e, "booking failed");
            format!("Failed to book a court: {e}")
        }
    };

    state.messaging.send_message(chat_id, &reply).await
}
