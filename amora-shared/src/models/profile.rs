use serde::{Deserialize, Serialize};

/// Profile fields editable from the profile-details page.
///
/// Field names follow the backend's camel-cased wire format. The client
/// does not validate any of them; the backend owns validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    /// Display name shown to other users.
    pub name: String,

    /// Self-described gender.
    pub gender: String,

    /// Date of birth as an ISO `YYYY-MM-DD` string.
    pub date_of_birth: String,

    /// Which profiles the user wants to see.
    pub preference: String,

    /// Profile picture as a URL or data URL; omitted from the body when
    /// the user has not picked one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProfileUpdate {
        ProfileUpdate {
            name: "Alice".to_string(),
            gender: "female".to_string(),
            date_of_birth: "1999-01-31".to_string(),
            preference: "everyone".to_string(),
            profile_image: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let serialized = serde_json::to_string(&sample()).unwrap();

        assert_eq!(
            serialized,
            r#"{"name":"Alice","gender":"female","dateOfBirth":"1999-01-31","preference":"everyone"}"#
        );
    }

    #[test]
    fn omits_absent_profile_image() {
        let serialized = serde_json::to_string(&sample()).unwrap();

        assert!(!serialized.contains("profileImage"));
    }

    #[test]
    fn includes_profile_image_when_present() {
        let update = ProfileUpdate {
            profile_image: Some("https://cdn.example.com/alice.jpg".to_string()),
            ..sample()
        };

        let serialized = serde_json::to_string(&update).unwrap();
        assert!(serialized.contains(r#""profileImage":"https://cdn.example.com/alice.jpg""#));
    }

    #[test]
    fn deserializes_missing_image_as_none() {
        let body = r#"{"name":"Bo","gender":"male","dateOfBirth":"2000-06-15","preference":"women"}"#;
        let update: ProfileUpdate = serde_json::from_str(body).unwrap();

        assert_eq!(update.name, "Bo");
        assert_eq!(update.date_of_birth, "2000-06-15");
        assert_eq!(update.profile_image, None);
    }

    #[test]
    fn roundtrip_preserves_all_fields() {
        let update = ProfileUpdate {
            profile_image: Some("data:image/png;base64,AAAA".to_string()),
            ..sample()
        };

        let serialized = serde_json::to_string(&update).unwrap();
        let deserialized: ProfileUpdate = serde_json::from_str(&serialized).unwrap();

        assert_eq!(deserialized, update);
    }
}
