//! Shared calendar types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Category of a calendar event.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EventType {
    Date,
    Birthday,
    Anniversary,
    Custom,
}

/// One calendar entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: DateTime<Utc>,
    /// Wall-clock time as "HH:MM"; absent for all-day events.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    pub event_type: EventType,
}

/// Create/update payload for events. The server treats absent optional
/// fields as cleared on create and unchanged on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub is_all_day: bool,
    pub event_type: EventType,
}

/// Filters for `GET /events`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_type: Option<EventType>,
}

/// Query for `GET /events/upcoming`.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingQuery {
    pub limit: u32,
}

/// Envelope for event list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventList {
    #[serde(default)]
    pub events: Vec<CalendarEvent>,
}

/// Envelope for single-event endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub event: CalendarEvent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_wire_names() {
        assert_eq!(
            serde_json::to_string(&EventType::Anniversary).unwrap(),
            "\"anniversary\""
        );
        let parsed: EventType = serde_json::from_str("\"date\"").unwrap();
        assert_eq!(parsed, EventType::Date);
    }

    #[test]
    fn test_event_query_serializes_only_set_filters() {
        let query = EventQuery {
            month: Some(2),
            year: Some(2026),
            event_type: None,
        };
        let json = serde_json::to_value(&query).unwrap();
        assert_eq!(json, serde_json::json!({"month": 2, "year": 2026}));
    }
}
