use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use super::{BookingSite, CourtSession};
use crate::errors::BotError;
use crate::models::{AvailableCourts, CalendarDate, CourtRecord, ReservationRequest};

const JSON_UTF8: &str = "application/json;charset=UTF-8";
const MAX_COURT_GROUPS: usize = 4;

pub struct SquashSite {
    login_url: String,
    api_url: String,
    timeout: Duration,
}

impl SquashSite {
    pub fn new(login_url: String, api_url: String, timeout: Duration) -> Self {
        Self {
            login_url,
            api_url: api_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
    rememberme: bool,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    role: Role,
    #[serde(rename = "firstName")]
    first_name: Option<String>,
    #[serde(rename = "userName")]
    user_name: Option<String>,
    id: u64,
}

#[derive(Debug, Deserialize)]
struct Role {
    title: String,
}

#[derive(Deserialize)]
struct CourtsResponse {
    res: Vec<CourtGroup>,
}

#[derive(Deserialize)]
struct CourtGroup {
    records: Vec<CourtRecord>,
}

#[async_trait]
impl BookingSite for SquashSite {
    async fn login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Box<dyn CourtSession>, BotError> {
        let client = reqwest::Client::builder()
            .cookie_store(true)
            .danger_accept_invalid_certs(true)
            .timeout(self.timeout)
            .build()
            .context("failed to build HTTP client")
            .map_err(BotError::Auth)?;

        let body = serde_json::to_vec(&LoginRequest {
            username,
            password,
            rememberme: true,
        })
        .context("failed to encode login request")
        .map_err(BotError::Auth)?;

        let resp = client
            .post(&self.login_url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .context("failed to call login endpoint")
            .map_err(BotError::Auth)?;

        let login: LoginResponse = resp
            .json()
            .await
            .context("failed to parse login response")
            .map_err(BotError::Auth)?;

        tracing::info!(
            user = ?login.user_name,
            name = ?login.first_name,
            id = login.id,
            role = %login.role.title,
            "logged in"
        );

        Ok(Box::new(SquashSession {
            client,
            api_url: self.api_url.clone(),
        }))
    }
}

pub struct SquashSession {
    client: reqwest::Client,
    api_url: String,
}

#[async_trait]
impl CourtSession for SquashSession {
    async fn available_courts(&self, date: CalendarDate) -> Result<AvailableCourts, BotError> {
        tracing::info!(%date, "fetching courts");
        let url = courts_url(&self.api_url, date);

        let body = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to call courts endpoint")
            .map_err(BotError::Fetch)?
            .text()
            .await
            .context("failed to read courts response")
            .map_err(BotError::Fetch)?;

        parse_courts_response(&body).map_err(BotError::Fetch)
    }

    async fn book(&self, request: &ReservationRequest) -> Result<(), BotError> {
        let url = format!("{}/reservation/addReservation", self.api_url);
        let body = request
            .to_envelope()
            .and_then(|envelope| serde_json::to_vec(&envelope))
            .context("failed to encode reservation")
            .map_err(BotError::Booking)?;

        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON_UTF8)
            .body(body)
            .send()
            .await
            .context("failed to call reservation endpoint")
            .map_err(BotError::Booking)?;

        let status = resp.status();
        tracing::info!(%status, court = request.court, "reservation submitted");

        // Redirects count as failures too.
        if status.as_u16() >= 300 {
            return Err(BotError::Booking(anyhow::anyhow!(
                "reservation rejected: {status}"
            )));
        }

        Ok(())
    }
}

// The site expects a leading zero before the year, e.g. "023-09-18".
fn courts_url(api_url: &str, date: CalendarDate) -> String {
    format!(
        "{api_url}/courts/getCourts/0{}-{:02}-{:02}",
        date.year, date.month, date.day
    )
}

fn parse_courts_response(body: &str) -> anyhow::Result<AvailableCourts> {
    let resp: CourtsResponse =
        serde_json::from_str(body).context("failed to parse courts response")?;

    if resp.res.len() > MAX_COURT_GROUPS {
        anyhow::bail!(
            "unexpected courts result (expected {MAX_COURT_GROUPS} courts, got {})",
            resp.res.len()
        );
    }

    Ok(AvailableCourts::from_records(
        resp.res.into_iter().flat_map(|group| group.records),
    ))
}
