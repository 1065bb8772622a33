use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// One court at one hour, as listed by the booking site.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourtRecord {
    #[serde(deserialize_with = "deserialize_closed")]
    pub closed: bool,
    pub user1: Option<String>,
    pub user2: Option<String>,
    #[serde(rename = "id")]
    pub court_number: u32,
    pub hour: String,
    #[serde(rename = "u1_id", default)]
    pub user1_id: Option<i64>,
    #[serde(rename = "u2_id", default)]
    pub user2_id: Option<i64>,
    #[serde(rename = "user1Confirm", default)]
    pub user1_confirm: Option<i64>,
    #[serde(rename = "user2Confirm", default)]
    pub user2_confirm: Option<i64>,
}

impl CourtRecord {
    pub fn is_available(&self) -> bool {
        !self.closed && self.user1.is_none() && self.user2.is_none()
    }
}

// The site sends "false"/"true" as strings; accept real booleans as well.
// A null flag counts as closed.
fn deserialize_closed<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(b)) => b,
        Some(Flag::Text(s)) => s.to_lowercase() != "false",
        None => true,
    })
}

/// Available records grouped by court number. Only ever holds records for
/// which [`CourtRecord::is_available`] is true.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct AvailableCourts(BTreeMap<u32, Vec<CourtRecord>>);

impl AvailableCourts {
    pub fn from_records(records: impl IntoIterator<Item = CourtRecord>) -> Self {
        let mut courts: BTreeMap<u32, Vec<CourtRecord>> = BTreeMap::new();
        for record in records.into_iter().filter(CourtRecord::is_available) {
            courts.entry(record.court_number).or_default().push(record);
        }
        Self(courts)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &CourtRecord> {
        self.0.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_parse_site_record() {
        let json = r#"{"closed":"False","user1":null,"user2":null,"id":3,"hour":"10:00","u1_id":0,"u2_id":0,"user1Confirm":null,"user2Confirm":null}"#;
        let rec: CourtRecord = serde_json::from_str(json).unwrap();
        assert!(!rec.closed);
        assert_eq!(rec.court_number, 3);
        assert_eq!(rec.hour, "10:00");
        assert_eq!(rec.user1_id, Some(0));
        assert!(rec.is_available());
    }

    #[test]
    fn test_parse_null_ids() {
        let json = r#"{"closed":"false","user1":null,"user2":null,"id":2,"hour":"11:00","u1_id":null,"u2_id":null,"user1Confirm":null,"user2Confirm":null}"#;
        let rec: CourtRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.user1_id, None);
        assert_eq!(rec.user2_id, None);
        assert!(rec.is_available());
    }

    #[test]
    fn test_null_closed_flag_is_unavailable() {
        let json = r#"{"closed":null,"user1":null,"user2":null,"id":2,"hour":"11:00"}"#;
        let rec: CourtRecord = serde_json::from_str(json).unwrap();
        assert!(rec.closed);
        assert!(!rec.is_available());
    }

    #[test]
    fn test_parse_closed_bool_and_missing_ids() {
        let json = r#"{"closed":true,"user1":null,"user2":null,"id":1,"hour":"08:00"}"#;
        let rec: CourtRecord = serde_json::from_str(json).unwrap();
        assert!(rec.closed);
        assert!(!rec.is_available());
    }

    #[test]
    fn test_occupied_record_unavailable() {
        let mut rec = record(2, "09:00");
        rec.user2 = Some("dana".to_string());
        assert!(!rec.is_available());
    }

    #[test]
    fn test_from_records_drops_unavailable() {
        let mut taken = record(4, "10:00");
        taken.user1 = Some("avi".to_string());
        let mut closed = record(1, "10:00");
        closed.closed = true;

        let courts =
            AvailableCourts::from_records(vec![record(3, "10:00"), taken, closed, record(3, "11:00")]);

        let kept: Vec<(u32, &str)> = courts
            .records()
            .map(|r| (r.court_number, r.hour.as_str()))
            .collect();
        assert_eq!(kept, vec![(3, "10:00"), (3, "11:00")]);
        assert!(courts.records().all(CourtRecord::is_available));
    }
}
