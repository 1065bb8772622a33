use std::collections::BTreeSet;

use crate::models::{AvailableCourts, TimeSlot};

pub const NO_COURTS_MESSAGE: &str = "No courts available";
pub const REPORT_HEADER: &str = "Courts are available at:";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SlotOrder {
    /// Plain string order, so "9:00" sorts after "10:00".
    #[default]
    Lexicographic,
    Chronological,
}

/// Distinct hours across all courts, one per line under a header.
pub fn render(courts: &AvailableCourts, order: SlotOrder) -> String {
    if courts.is_empty() {
        return NO_COURTS_MESSAGE.to_string();
    }

    let labels: BTreeSet<&str> = courts.records().map(|r| r.hour.as_str()).collect();
    let mut hours: Vec<&str> = labels.into_iter().collect();

    if order == SlotOrder::Chronological {
        // Unparseable labels keep their string order after the parsed ones.
        hours.sort_by_key(|label| match slot_label(label) {
            Some(slot) => (0, Some(slot)),
            None => (1, None),
        });
    }

    std::iter::once(REPORT_HEADER)
        .chain(hours)
        .collect::<Vec<_>>()
        .join("\n")
}

// Site labels are "H:MM" or "HH:MM".
fn slot_label(label: &str) -> Option<TimeSlot> {
    let (hour, minute) = label.trim().split_once(':')?;
    if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
        return None;
    }
    if !hour.bytes().chain(minute.bytes()).all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(TimeSlot {
        hour: hour.parse().ok()?,
        minute: minute.parse().ok()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourtRecord;

    fn record(court: u32, hour: &str) -> CourtRecord {
        CourtRecord {
            closed: false,
            user1: None,
            user2: None,
            court_number: court,
            hour: hour.to_string(),
            user1_id: None,
            user2_id: None,
            user1_confirm: None,
            user2_confirm: None,
        }
    }

    #[test]
    fn test_empty() {
        let courts = AvailableCourts::default();
        assert_eq!(render(&courts, SlotOrder::Lexicographic), NO_COURTS_MESSAGE);
        assert_eq!(render(&courts, SlotOrder::Chronological), NO_COURTS_MESSAGE);
    }

    #[test]
    fn test_dedupes_across_courts() {
        let courts = AvailableCourts::from_records(vec![
            record(1, "11:00"),
            record(2, "10:00"),
            record(3, "11:00"),
        ]);
        assert_eq!(
            render(&courts, SlotOrder::Lexicographic),
            "Courts are available at:\n10:00\n11:00"
        );
    }

    #[test]
    fn test_idempotent() {
        let courts = AvailableCourts::from_records(vec![record(1, "18:00"), record(4, "07:30")]);
        let first = render(&courts, SlotOrder::Lexicographic);
        assert_eq!(first, render(&courts, SlotOrder::Lexicographic));
    }

    #[test]
    fn test_lexicographic_misorders_unpadded_hours() {
        let courts = AvailableCourts::from_records(vec![record(1, "9:00"), record(2, "10:00")]);
        assert_eq!(
            render(&courts, SlotOrder::Lexicographic),
            "Courts are available at:\n10:00\n9:00"
        );
    }

    #[test]
    fn test_chronological_orders_unpadded_hours() {
        let courts = AvailableCourts::from_records(vec![record(1, "9:00"), record(2, "10:00")]);
        assert_eq!(
            render(&courts, SlotOrder::Chronological),
            "Courts are available at:\n9:00\n10:00"
        );
    }

    #[test]
    fn test_chronological_puts_unparseable_last() {
        let courts = AvailableCourts::from_records(vec![
            record(1, "21:00"),
            record(2, "noon"),
            record(3, "8:15"),
            record(4, "10:30"),
        ]);
        assert_eq!(
            render(&courts, SlotOrder::Chronological),
            "Courts are available at:\n8:15\n10:30\n21:00\nnoon"
        );
    }

    #[test]
    fn test_slot_label() {
        assert_eq!(slot_label("9:05"), Some(TimeSlot { hour: 9, minute: 5 }));
        assert_eq!(slot_label("21:30"), Some(TimeSlot { hour: 21, minute: 30 }));
        assert_eq!(slot_label("9:5"), None);
        assert_eq!(slot_label("noon"), None);
    }
}
