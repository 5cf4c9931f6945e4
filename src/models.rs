// Resource types shared by the API clients and the interactive flows.
// Field names on the wire are camelCase; `id` and `timestamp` belong to the
// server and are omitted from request bodies until it has assigned them.

use std::fmt;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A registered user as exposed by the `/api/users` endpoints.
///
/// `password` carries the SHA-256 digest of the user's password, never the
/// plaintext (see `input::hash_password`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
    #[serde(
        default,
        with = "timestamp_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// A contact request as exposed by the `/api/contacts` endpoints.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub reason: Reason,
    pub message: String,
    #[serde(
        default,
        with = "timestamp_format",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<FixedOffset>>,
}

/// Why a contact reached out. Serialized as the uppercase tokens the server
/// expects.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Reason {
    Question,
    Information,
    Alert,
}

/// Field replacements collected during an update. `None` keeps the value of
/// the fetched record.
#[derive(Debug, Clone, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub reason: Option<Reason>,
    pub message: Option<String>,
}

impl User {
    /// Build a user ready to be created: `id` and `timestamp` stay unset
    /// until the server assigns them.
    pub fn new(
        name: String,
        last_name: String,
        phone_number: String,
        email: String,
        password: String,
    ) -> Self {
        User {
            id: None,
            name,
            last_name,
            phone_number,
            email,
            password,
            timestamp: None,
        }
    }

    /// Apply a patch onto a fetched record. `id` and `timestamp` are never
    /// touched.
    pub fn merge(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(password) = patch.password {
            self.password = password;
        }
    }
}

impl Contact {
    pub fn new(name: String, email: String, reason: Reason, message: String) -> Self {
        Contact {
            id: None,
            name,
            email,
            reason,
            message,
            timestamp: None,
        }
    }

    pub fn merge(&mut self, patch: ContactPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(reason) = patch.reason {
            self.reason = reason;
        }
        if let Some(message) = patch.message {
            self.message = message;
        }
    }
}

impl Reason {
    pub const ALL: [Reason; 3] = [Reason::Question, Reason::Information, Reason::Alert];

    pub fn label(self) -> &'static str {
        match self {
            Reason::Question => "Question",
            Reason::Information => "Information",
            Reason::Alert => "Alert",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// The password digest is deliberately left out of the rendered record.
impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User id: {}\nName: {}\nLast name: {}\nPhone number: {}\nEmail: {}\nTime of creation: {}",
            display_id(self.id),
            self.name,
            self.last_name,
            self.phone_number,
            self.email,
            display_timestamp(&self.timestamp),
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact id: {}\nName: {}\nEmail: {}\nReason: {}\nMessage: {}\nTime of creation: {}",
            display_id(self.id),
            self.name,
            self.email,
            self.reason,
            self.message,
            display_timestamp(&self.timestamp),
        )
    }
}

fn display_id(id: Option<i64>) -> String {
    id.map_or_else(|| "-".into(), |id| id.to_string())
}

fn display_timestamp(timestamp: &Option<DateTime<FixedOffset>>) -> String {
    timestamp.as_ref().map_or_else(
        || "-".into(),
        |ts| ts.format(timestamp_format::FORMAT).to_string(),
    )
}

/// Serde adapter for the timestamp fields. Outbound values use the server's
/// `yyyy-MM-ddTHH:mm:ss.SSS+0000` shape (millisecond precision, numeric UTC
/// offset); inbound values may also arrive as plain RFC 3339.
pub(crate) mod timestamp_format {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    pub(crate) const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%z";

    pub fn serialize<S>(
        value: &Option<DateTime<FixedOffset>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<FixedOffset>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value: Option<String> = Option::deserialize(deserializer)?;
        value
            .map(|raw| {
                DateTime::parse_from_rfc3339(&raw)
                    .or_else(|_| DateTime::parse_from_str(&raw, FORMAT))
                    .map_err(serde::de::Error::custom)
            })
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_user() -> User {
        User::new(
            "Ana".into(),
            "Lopez".into(),
            "600112233".into(),
            "ana@x.co".into(),
            "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8".into(),
        )
    }

    #[test]
    fn create_payload_carries_no_server_fields() {
        let value = serde_json::to_value(sample_user()).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("timestamp").is_none());
        assert_eq!(value["lastName"], "Lopez");
        assert_eq!(value["phoneNumber"], "600112233");
    }

    #[test]
    fn contact_create_payload_matches_wire_contract() {
        let contact = Contact::new("Ana".into(), "ana@x.co".into(), Reason::Question, "Hi".into());
        assert_eq!(
            serde_json::to_value(&contact).unwrap(),
            json!({
                "name": "Ana",
                "email": "ana@x.co",
                "reason": "QUESTION",
                "message": "Hi",
            })
        );
    }

    #[test]
    fn reason_round_trips_through_wire_tokens() {
        for (reason, token) in [
            (Reason::Question, "\"QUESTION\""),
            (Reason::Information, "\"INFORMATION\""),
            (Reason::Alert, "\"ALERT\""),
        ] {
            assert_eq!(serde_json::to_string(&reason).unwrap(), token);
            assert_eq!(serde_json::from_str::<Reason>(token).unwrap(), reason);
        }
    }

    #[test]
    fn timestamp_serializes_with_millis_and_numeric_offset() {
        let mut user = sample_user();
        user.id = Some(42);
        user.timestamp = Some(DateTime::parse_from_rfc3339("2024-03-05T17:30:00.250+01:00").unwrap());
        let value = serde_json::to_value(&user).unwrap();
        assert_eq!(value["timestamp"], "2024-03-05T17:30:00.250+0100");
        assert_eq!(value["id"], 42);
    }

    #[test]
    fn timestamp_deserializes_from_rfc3339_and_own_format() {
        let rfc: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Ana",
            "lastName": "Lopez",
            "phoneNumber": "600112233",
            "email": "ana@x.co",
            "password": "x",
            "timestamp": "2024-03-05T17:30:00.250Z",
        }))
        .unwrap();
        let own: User = serde_json::from_value(json!({
            "id": 1,
            "name": "Ana",
            "lastName": "Lopez",
            "phoneNumber": "600112233",
            "email": "ana@x.co",
            "password": "x",
            "timestamp": "2024-03-05T17:30:00.250+0000",
        }))
        .unwrap();
        assert_eq!(rfc.timestamp, own.timestamp);
    }

    #[test]
    fn empty_patch_is_the_identity() {
        let mut user = sample_user();
        user.id = Some(7);
        user.timestamp = Some(DateTime::parse_from_rfc3339("2024-03-05T17:30:00.000Z").unwrap());
        let before = user.clone();
        user.merge(UserPatch::default());
        assert_eq!(user, before);

        let mut contact =
            Contact::new("Ana".into(), "ana@x.co".into(), Reason::Alert, "Hi".into());
        contact.id = Some(7);
        let before = contact.clone();
        contact.merge(ContactPatch::default());
        assert_eq!(contact, before);
    }

    #[test]
    fn partial_patch_touches_only_the_supplied_fields() {
        let mut contact =
            Contact::new("Ana".into(), "ana@x.co".into(), Reason::Question, "Hi".into());
        contact.id = Some(7);
        contact.merge(ContactPatch {
            email: Some("new@x.co".into()),
            ..ContactPatch::default()
        });
        assert_eq!(contact.email, "new@x.co");
        assert_eq!(contact.name, "Ana");
        assert_eq!(contact.reason, Reason::Question);
        assert_eq!(contact.message, "Hi");
        assert_eq!(contact.id, Some(7));
    }

    #[test]
    fn empty_collection_is_valid_and_distinct_from_not_found() {
        let users: Vec<User> = serde_json::from_str("[]").unwrap();
        assert!(users.is_empty());
        let contacts: Vec<Contact> = serde_json::from_str("[]").unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn rendered_user_never_shows_the_password_digest() {
        let user = sample_user();
        let rendered = user.to_string();
        assert!(!rendered.contains(&user.password));
        assert!(rendered.starts_with("User id: -"));
        assert!(rendered.contains("Phone number: 600112233"));
    }
}
