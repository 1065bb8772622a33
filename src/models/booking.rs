use std::fmt;

use serde::Serialize;

use super::{CalendarDate, TimeSlot};

/// Everything the booking site needs to reserve one court.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    pub requester: String,
    pub counterpart: String,
    pub date: CalendarDate,
    pub slot: TimeSlot,
    pub court: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub court: u32,
    pub date: CalendarDate,
    pub slot: TimeSlot,
    pub confirming_party: String,
}

impl fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Booked court {} on {} at {}, {} needs to confirm the reservation",
            self.court, self.date, self.slot, self.confirming_party
        )
    }
}

// Reservation wire payloads. The site expects the inner reservation
// JSON-encoded as a string inside the envelope.

#[derive(Debug, Serialize)]
pub struct InnerReservation<'a> {
    pub player1: &'a str,
    pub player2: &'a str,
    pub hour: String,
    pub date: String,
    #[serde(rename = "id")]
    pub court: u32,
}

#[derive(Debug, Serialize)]
pub struct ReservationEnvelope {
    pub reservation: String,
    #[serde(rename = "overrideDecision")]
    pub override_decision: Option<String>,
}

impl ReservationRequest {
    pub fn to_envelope(&self) -> serde_json::Result<ReservationEnvelope> {
        let inner = InnerReservation {
            player1: &self.counterpart,
            player2: &self.requester,
            hour: self.slot.to_string(),
            date: format!(
                "{}-{:02}-{:02}",
                self.date.year, self.date.month, self.date.day
            ),
            court: self.court,
        };
        Ok(ReservationEnvelope {
            reservation: serde_json::to_string(&inner)?,
            override_decision: None,
        })
    }
}
