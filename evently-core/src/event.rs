//! Event records as stored in the catalog.
//!
//! Field names on the wire keep the camelCase layout of the persisted
//! `events` blob (`imageUrl`, `currentAttendees`, `isRSVPed`, ...), so
//! catalogs written by earlier installs keep loading.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A single event (concert, meetup, workshop...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Calendar date, serialized as YYYY-MM-DD
    pub date: NaiveDate,
    /// Local start time, serialized as HH:MM
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub location: Location,
    pub category: Category,
    pub image_url: String,
    /// Ticket price, 0 means free
    pub price: f64,
    pub max_attendees: u32,
    pub current_attendees: u32,
    pub organizer: Organizer,
    pub tags: Vec<String>,

    // Relationship of the local user to this event
    #[serde(rename = "isRSVPed", default)]
    pub is_rsvped: bool,
    #[serde(default)]
    pub is_favorite: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub address: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organizer {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

impl Event {
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }

    /// Fraction of capacity taken, 0.0 when the event has no capacity set.
    pub fn attendance_ratio(&self) -> f64 {
        if self.max_attendees == 0 {
            return 0.0;
        }
        f64::from(self.current_attendees) / f64::from(self.max_attendees)
    }

    /// Attendance as a whole percentage, capped at 100 for progress bars.
    pub fn attendance_percent(&self) -> u8 {
        (self.attendance_ratio() * 100.0).round().clamp(0.0, 100.0) as u8
    }

    pub fn spots_left(&self) -> u32 {
        self.max_attendees.saturating_sub(self.current_attendees)
    }

    pub fn toggle_favorite(&mut self) {
        self.is_favorite = !self.is_favorite;
    }

    /// Flip the RSVP flag and move the attendee counter with it.
    /// The counter never drops below zero.
    pub fn toggle_rsvp(&mut self) {
        self.is_rsvped = !self.is_rsvped;
        self.current_attendees = if self.is_rsvped {
            self.current_attendees.saturating_add(1)
        } else {
            self.current_attendees.saturating_sub(1)
        };
    }

    /// Fields the free-text search looks at.
    pub(crate) fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.description.as_str(),
            self.location.name.as_str(),
        ]
        .into_iter()
        .chain(self.tags.iter().map(String::as_str))
    }
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn make_test_event(id: &str, date: &str) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Test Event {}", id),
            description: "A test event".to_string(),
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
            location: Location {
                name: "Test Hall".to_string(),
                address: "1 Test Street".to_string(),
                coordinates: Coordinates {
                    latitude: 40.0,
                    longitude: -73.0,
                },
            },
            category: Category::Music,
            image_url: "https://example.com/image.jpeg".to_string(),
            price: 10.0,
            max_attendees: 100,
            current_attendees: 10,
            organizer: Organizer {
                id: "org-test".to_string(),
                name: "Test Org".to_string(),
                avatar: "https://example.com/avatar.jpeg".to_string(),
            },
            tags: vec!["test".to_string()],
            is_rsvped: false,
            is_favorite: false,
        }
    }

    #[test]
    fn test_serializes_with_camel_case_field_names() {
        let event = make_test_event("1", "2025-06-15");
        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value["date"], "2025-06-15");
        assert_eq!(value["time"], "18:00");
        assert_eq!(value["category"], "music");
        assert_eq!(value["currentAttendees"], 10);
        assert_eq!(value["isRSVPed"], false);
        assert_eq!(value["isFavorite"], false);
        assert!(value.get("imageUrl").is_some());
    }

    #[test]
    fn test_deserializes_stored_record() {
        let json = r#"{
            "id": "7",
            "title": "Jazz Night",
            "description": "Late set",
            "date": "2025-03-10",
            "time": "21:30",
            "location": {
                "name": "Blue Room",
                "address": "9 Note Lane",
                "coordinates": { "latitude": 1.5, "longitude": 2.5 }
            },
            "category": "music",
            "imageUrl": "https://example.com/jazz.jpeg",
            "price": 0,
            "maxAttendees": 80,
            "currentAttendees": 12,
            "organizer": { "id": "o", "name": "Blue", "avatar": "a" },
            "tags": ["jazz"],
            "isRSVPed": true,
            "isFavorite": false
        }"#;

        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.time, NaiveTime::from_hms_opt(21, 30, 0).unwrap());
        assert!(event.is_free());
        assert!(event.is_rsvped);
    }

    #[test]
    fn test_rejects_malformed_time() {
        let event = make_test_event("1", "2025-06-15");
        let mut value = serde_json::to_value(&event).unwrap();
        value["time"] = "6pm".into();
        assert!(serde_json::from_value::<Event>(value).is_err());
    }

    #[test]
    fn test_toggle_rsvp_moves_counter() {
        let mut event = make_test_event("2", "2025-02-28");
        event.current_attendees = 156;

        event.toggle_rsvp();
        assert!(event.is_rsvped);
        assert_eq!(event.current_attendees, 157);

        event.toggle_rsvp();
        assert!(!event.is_rsvped);
        assert_eq!(event.current_attendees, 156);
    }

    #[test]
    fn test_toggle_rsvp_off_never_goes_negative() {
        let mut event = make_test_event("1", "2025-06-15");
        event.is_rsvped = true;
        event.current_attendees = 0;

        event.toggle_rsvp();
        assert_eq!(event.current_attendees, 0);
    }

    #[test]
    fn test_attendance_helpers() {
        let mut event = make_test_event("1", "2025-06-15");
        event.max_attendees = 200;
        event.current_attendees = 156;
        assert_eq!(event.attendance_percent(), 78);
        assert_eq!(event.spots_left(), 44);

        event.current_attendees = 250;
        assert_eq!(event.attendance_percent(), 100);
        assert_eq!(event.spots_left(), 0);

        event.max_attendees = 0;
        assert_eq!(event.attendance_ratio(), 0.0);
    }
}
