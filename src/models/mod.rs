pub mod booking;
pub mod court;
pub mod datetime;
pub mod intent;
pub mod message;

pub use booking::{BookingOutcome, ReservationRequest};
pub use court::{AvailableCourts, CourtRecord};
pub use datetime::{CalendarDate, TimeSlot};
pub use intent::Intent;
pub use message::InboundMessage;
