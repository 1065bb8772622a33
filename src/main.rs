use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use courtbot::config::AppConfig;
use courtbot::handlers;
use courtbot::services::courts::squash::SquashSite;
use courtbot::services::messaging::telegram::TelegramProvider;
use courtbot::services::poller;
use courtbot::services::router::IntentRouter;
use courtbot::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(
        !config.telegram_bot_token.is_empty(),
        "TELEGRAM_BOT_TOKEN must be set"
    );
    anyhow::ensure!(!config.login_url.is_empty(), "SQUASH_LOGIN_URL must be set");
    if config.partner.is_empty() {
        tracing::warn!("SQUASH_PARTNER not configured, bookings will have no second player");
    }

    let messaging = TelegramProvider::new(&config.telegram_api_url, &config.telegram_bot_token);
    let site = SquashSite::new(
        config.login_url.clone(),
        config.squash_api_url.clone(),
        Duration::from_secs(config.http_timeout_secs),
    );

    let state = Arc::new(AppState {
        config: config.clone(),
        router: IntentRouter::standard()?,
        messaging: Box::new(messaging),
        site: Box::new(site),
    });

    tokio::spawn(poller::run(state.clone()));
    tracing::info!("polling for chat messages");

    let app = handlers::router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
