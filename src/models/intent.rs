#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    AliveCheck,
    AvailabilityQuery,
    BookingRequest,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::AliveCheck => "alive_check",
            Intent::AvailabilityQuery => "availability_query",
            Intent::BookingRequest => "booking_request",
        }
    }
}
