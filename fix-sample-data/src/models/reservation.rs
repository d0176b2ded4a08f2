//! Reservation Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Reservation lifecycle status
///
/// Synthetic records are stamped once at generation time; there are no
/// transitions afterwards.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    /// Requested, not yet confirmed
    Pending,
    /// Confirmed with an assigned table
    Confirmed,
    /// Party is at the table
    Seated,
    /// Visit finished
    Completed,
    /// Called off before the visit
    Cancelled,
}

impl ReservationStatus {
    /// Statuses that come with an assigned table number
    pub fn has_table(self) -> bool {
        matches!(self, Self::Confirmed | Self::Seated | Self::Completed)
    }
}

/// Table reservation record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    pub id: String,
    pub table_type: String,
    pub user_id: String,
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub number_of_guests: u32,
    pub date: NaiveDate,
    pub time_slot: String,
    /// Empty string when the guest asked for nothing special
    pub special_requests: String,
    pub status: ReservationStatus,
    /// Assigned table (1-20); `null` on disk for pending/cancelled bookings
    #[serde(default)]
    pub table_number: Option<u32>,
    pub created_at: String,
    pub updated_at: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format_is_lowercase() {
        assert_eq!(
            serde_json::to_value(ReservationStatus::Confirmed).unwrap(),
            json!("confirmed")
        );
        assert_eq!(
            serde_json::from_value::<ReservationStatus>(json!("cancelled")).unwrap(),
            ReservationStatus::Cancelled
        );
    }

    #[test]
    fn test_unassigned_table_serializes_as_null() {
        let res = Reservation {
            id: "res00001".into(),
            table_type: "reservation".into(),
            user_id: "user00100".into(),
            guest_name: "John Smith".into(),
            guest_email: "john.smith0@example.com".into(),
            guest_phone: "+1-555-0000".into(),
            number_of_guests: 2,
            date: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            time_slot: "7:00 PM".into(),
            special_requests: String::new(),
            status: ReservationStatus::Pending,
            table_number: None,
            created_at: "2025-03-10T12:00:00.000000Z".into(),
            updated_at: "2025-03-14T12:00:00.000000Z".into(),
            extra: Map::new(),
        };

        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(value["table_number"], Value::Null);
        assert_eq!(value["date"], json!("2025-03-14"));
    }
}
