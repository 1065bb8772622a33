use std::sync::Arc;
use std::time::Duration;

use crate::models::InboundMessage;
use crate::services::commands;
use crate::state::AppState;

const POLL_ERROR_PAUSE: Duration = Duration::from_secs(1);

/// Polls for messages forever, handling each batch before the next poll.
pub async fn run(state: Arc<AppState>) {
    loop {
        match state
            .messaging
            .get_updates(state.config.poll_timeout_secs)
            .await
        {
            Ok(messages) => handle_updates(&state, &messages).await,
            Err(e) => {
                tracing::error!(error = %e, "failed to get updates");
                tokio::time::sleep(POLL_ERROR_PAUSE).await;
            }
        }
        tracing::debug!("finished handling interval");
    }
}

pub async fn handle_updates(state: &AppState, messages: &[InboundMessage]) {
    for message in messages {
        handle_message(state, message).await;
    }
}

/// Runs the handler of every intent the message matches. Handler failures
/// are logged and never stop the remaining handlers.
pub async fn handle_message(state: &AppState, message: &InboundMessage) {
    if message.text.is_empty() {
        return;
    }

    let text = message.text.to_lowercase();
    let intents = state.router.matches(&text);
    tracing::info!(chat_id = message.chat_id, text = %text, ?intents, "incoming message");

    for intent in intents {
        if let Err(e) = commands::run(state, intent, message.chat_id, &text).await {
            tracing::error!(
                chat_id = message.chat_id,
                intent = intent.as_str(),
                pattern = state.router.pattern_for(intent).unwrap_or_default(),
                error = %e,
                "failed to handle message"
            );
        }
    }
}
