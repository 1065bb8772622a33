pub mod courts;
pub mod health;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/courts", get(courts::get_courts))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
