pub mod squash;

use async_trait::async_trait;

use crate::errors::BotError;
use crate::models::{AvailableCourts, CalendarDate, ReservationRequest};

/// The court booking website. Every chat request starts a fresh session.
#[async_trait]
pub trait BookingSite: Send + Sync {
    async fn login(&self, username: &str, password: &str)
        -> Result<Box<dyn CourtSession>, BotError>;
}

#[async_trait]
pub trait CourtSession: Send + Sync {
    async fn available_courts(&self, date: CalendarDate) -> Result<AvailableCourts, BotError>;

    async fn book(&self, request: &ReservationRequest) -> Result<(), BotError>;
}
