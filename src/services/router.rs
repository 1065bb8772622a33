use regex::Regex;

use crate::models::Intent;

pub const ALIVE_PATTERN: &str = "are you alive";
pub const AVAILABILITY_PATTERN: &str = "courts.*available|available.*courts|any.*courts";
pub const BOOKING_PATTERN: &str = "book.*court.*at";

/// Ordered (pattern, intent) bindings. Every binding whose pattern matches
/// the lower-cased message fires, in registration order.
#[derive(Debug, Clone, Default)]
pub struct IntentRouter {
    bindings: Vec<(Regex, Intent)>,
}

impl IntentRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The alive, availability and booking bindings, in that order.
    pub fn standard() -> Result<Self, regex::Error> {
        Self::new()
            .bind(ALIVE_PATTERN, Intent::AliveCheck)?
            .bind(AVAILABILITY_PATTERN, Intent::AvailabilityQuery)?
            .bind(BOOKING_PATTERN, Intent::BookingRequest)
    }

    pub fn bind(mut self, pattern: &str, intent: Intent) -> Result<Self, regex::Error> {
        self.bindings.push((Regex::new(pattern)?, intent));
        Ok(self)
    }

    /// Intents whose pattern matches `text`. Expects lower-cased input.
    pub fn matches(&self, text: &str) -> Vec<Intent> {
        self.bindings
            .iter()
            .filter(|(pattern, _)| pattern.is_match(text))
            .map(|(_, intent)| *intent)
            .collect()
    }

    pub fn pattern_for(&self, intent: Intent) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(_, i)| *i == intent)
            .map(|(pattern, _)| pattern.as_str())
    }
}
