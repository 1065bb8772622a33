use std::env;

use crate::services::report::SlotOrder;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub telegram_bot_token: String,
    pub telegram_api_url: String,
    pub login_url: String,
    pub squash_api_url: String,
    pub username: String,
    pub password: String,
    /// Second player on every reservation; the site asks them to confirm it.
    pub partner: String,
    pub poll_timeout_secs: u64,
    pub http_timeout_secs: u64,
    pub chronological_slots: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN").unwrap_or_default(),
            telegram_api_url: env::var("TELEGRAM_API_URL")
                .unwrap_or_else(|_| "https://api.telegram.org".to_string()),
            login_url: env::var("SQUASH_LOGIN_URL").unwrap_or_default(),
            squash_api_url: env::var("SQUASH_API_URL")
                .unwrap_or_else(|_| "http://www.bamigrash.com/tlv/api".to_string()),
            username: env::var("SQUASH_USERNAME").unwrap_or_default(),
            password: env::var("SQUASH_PASSWORD").unwrap_or_default(),
            partner: env::var("SQUASH_PARTNER").unwrap_or_default(),
            poll_timeout_secs: env::var("POLL_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(20),
            chronological_slots: env::var("CHRONOLOGICAL_SLOTS")
                .map(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }

    pub fn slot_order(&self) -> SlotOrder {
        if self.chronological_slots {
            SlotOrder::Chronological
        } else {
            SlotOrder::Lexicographic
        }
    }
}
