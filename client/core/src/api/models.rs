//! Site API wire types

use crate::ClientError;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize};

/// Response envelope shared by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub error: Option<String>,
    pub id: Option<i64>,
    pub user: Option<String>,
}

/// Acknowledgement returned by write endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WriteReceipt {
    pub id: Option<i64>,
    pub message: Option<String>,
}

// =============================================================================
// Faculty
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyMember {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: String,
    pub designation: String,
    pub subject: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, alias = "is_hod")]
    pub is_hod: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacultyDraft {
    pub name: String,
    pub designation: String,
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub is_hod: bool,
}

impl FacultyDraft {
    /// Same required fields the backend enforces
    pub fn validate(&self) -> Result<(), ClientError> {
        require("name", &self.name)?;
        require("designation", &self.designation)?;
        require("subject", &self.subject)
    }
}

// =============================================================================
// Contact messages
// =============================================================================

/// Stored contact form submission, as listed by `GET /api/contact`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
}

// =============================================================================
// Achievements
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: i64,
    #[serde(default)]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub is_active: bool,
}

impl AchievementDraft {
    pub fn validate(&self) -> Result<(), ClientError> {
        require("title", &self.title)?;
        require("description", &self.description)
    }
}

// =============================================================================
// Gallery
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
    pub id: i64,
    pub image_url: String,
    pub caption: String,
    #[serde(default, deserialize_with = "event_date::deserialize")]
    pub event_date: Option<NaiveDate>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default, deserialize_with = "timestamp::deserialize")]
    pub created_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryDraft {
    pub image_url: String,
    pub caption: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_date: Option<NaiveDate>,
    pub is_active: bool,
}

impl GalleryDraft {
    pub fn validate(&self) -> Result<(), ClientError> {
        require("imageUrl", &self.image_url)?;
        require("caption", &self.caption)
    }
}

// =============================================================================
// Staff login
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginSession {
    pub user: String,
    pub message: Option<String>,
}

fn require(field: &str, value: &str) -> Result<(), ClientError> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn active_by_default() -> bool {
    true
}

/// SQLite `CURRENT_TIMESTAMP` values (`2024-03-15 10:30:00`)
mod timestamp {
    use super::*;

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
            return Ok(None);
        };

        NaiveDateTime::parse_from_str(raw.trim(), FORMAT)
            .or_else(|_| raw.trim().parse::<NaiveDateTime>())
            .map(Some)
            .map_err(serde::de::Error::custom)
    }
}

/// Gallery event dates; the backend stores an empty string when unset
mod event_date {
    use super::*;

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_faculty_accepts_both_hod_spellings() {
        let camel: FacultyMember = serde_json::from_value(json!({
            "id": 1, "name": "Dr. Rajesh Kumar", "designation": "Head of Department & Professor",
            "subject": "Deep Learning & Neural Networks", "bio": null,
            "email": "rajesh.kumar@college.edu", "isHod": true
        }))
        .unwrap();
        assert!(camel.is_hod);
        assert_eq!(camel.bio, None);

        let snake: FacultyMember = serde_json::from_value(json!({
            "name": "Dr. Priya Sharma", "designation": "Associate Professor",
            "subject": "Machine Learning", "is_hod": false
        }))
        .unwrap();
        assert!(!snake.is_hod);
        assert_eq!(snake.id, None);
    }

    #[test]
    fn test_contact_message_timestamp() {
        let msg: ContactMessage = serde_json::from_value(json!({
            "id": 7, "firstName": "John", "lastName": "Doe", "email": "john@example.com",
            "phone": "", "subject": "admission", "message": "Hello there, world",
            "newsletter": true, "createdAt": "2024-03-15 10:30:00"
        }))
        .unwrap();

        let expected = NaiveDate::from_ymd_opt(2024, 3, 15)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap();
        assert_eq!(msg.created_at, Some(expected));
        assert!(msg.newsletter);
    }

    #[test]
    fn test_gallery_empty_event_date_is_none() {
        let image: GalleryImage = serde_json::from_value(json!({
            "id": 3, "imageUrl": "https://img.example/1.jpg", "caption": "Hackathon",
            "eventDate": "", "isActive": true, "createdAt": null
        }))
        .unwrap();
        assert_eq!(image.event_date, None);
        assert_eq!(image.created_at, None);

        let dated: GalleryImage = serde_json::from_value(json!({
            "id": 4, "imageUrl": "https://img.example/2.jpg", "caption": "Workshop",
            "eventDate": "2024-02-05"
        }))
        .unwrap();
        assert_eq!(dated.event_date, NaiveDate::from_ymd_opt(2024, 2, 5));
        assert!(dated.is_active);
    }

    #[test]
    fn test_envelope_error_shape() {
        let envelope: ApiEnvelope<Vec<FacultyMember>> =
            serde_json::from_value(json!({ "success": false, "error": "boom" })).unwrap();
        assert!(!envelope.success);
        assert!(envelope.data.is_none());
        assert_eq!(envelope.error.as_deref(), Some("boom"));
    }

    #[test]
    fn test_drafts_require_backend_fields() {
        let draft = FacultyDraft {
            name: "Dr. New Faculty".into(),
            designation: " ".into(),
            subject: "Machine Learning".into(),
            ..FacultyDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert_eq!(err.to_string(), "validation error: designation is required");

        let gallery = GalleryDraft {
            image_url: "https://img.example/x.jpg".into(),
            caption: "Fest".into(),
            event_date: NaiveDate::from_ymd_opt(2024, 3, 15),
            is_active: true,
        };
        assert!(gallery.validate().is_ok());
        let body = serde_json::to_value(&gallery).unwrap();
        assert_eq!(body["eventDate"], "2024-03-15");
        assert_eq!(body["imageUrl"], "https://img.example/x.jpg");
    }
}
