use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{AvailableCourts, CalendarDate};
use crate::state::AppState;

// Raw strings so a missing key and a bad number get distinct messages.
#[derive(Deserialize)]
pub struct CourtsQuery {
    day: Option<String>,
    month: Option<String>,
    year: Option<String>,
}

fn grab(value: Option<&str>, key: &str) -> Result<u32, AppError> {
    let raw = value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(format!("missing {key}")))?;
    raw.trim()
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid {key}")))
}

// GET /api/courts?day=&month=&year=
pub async fn get_courts(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CourtsQuery>,
) -> Result<Json<AvailableCourts>, AppError> {
    let date = CalendarDate {
        day: grab(query.day.as_deref(), "day")?,
        month: grab(query.month.as_deref(), "month")?,
        year: grab(query.year.as_deref(), "year")?,
    };

    let session = state
        .site
        .login(&state.config.username, &state.config.password)
        .await?;
    let courts = session.available_courts(date).await?;

    Ok(Json(courts))
}
