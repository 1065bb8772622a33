use crate::errors::BotError;
use crate::models::{AvailableCourts, TimeSlot};
use crate::services::datetime::extract_time;

/// Picks the highest-numbered court with an available record at `target`.
pub fn select_court(courts: &AvailableCourts, target: TimeSlot) -> Result<u32, BotError> {
    courts
        .records()
        .filter(|record| record.is_available())
        .filter(|record| extract_time(&record.hour).is_ok_and(|slot| slot == target))
        .map(|record| record.court_number)
        .max()
        .ok_or(BotError::NoCourtAtTime(target))
}
