use serde::{Deserialize, Serialize};

use crate::domain::points::Points;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Account details returned by `GET /profile`.
pub struct ProfileDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub payment_type: Option<String>,
    #[serde(default)]
    pub user_type: Option<String>,
    #[serde(default)]
    pub points: Option<Points>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Payload for creating or updating a sub-account.
pub struct SubUserPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<SubUserCredentials>,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<SubUserPoints>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubUserCredentials {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_password: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
/// Points granted to a sub-account.
pub struct SubUserPoints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from_account: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub per_month: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SubUser {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub points: Option<SubUserPoints>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
/// Sender name (alphanumeric sender id) registered on the account.
pub struct SenderName {
    #[serde(default, rename = "sender")]
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    /// `ACTIVE`, `INACTIVE`, ...
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_user_payload_skips_missing_sections() {
        let payload = SubUserPayload {
            credentials: Some(SubUserCredentials {
                username: Some("child".to_owned()),
                password: Some("secret".to_owned()),
                api_password: None,
            }),
            active: true,
            description: None,
            points: Some(SubUserPoints {
                from_account: Some(10.0),
                per_month: None,
            }),
        };
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "credentials": {"username": "child", "password": "secret"},
                "active": true,
                "points": {"from_account": 10.0}
            })
        );
    }

    #[test]
    fn sender_name_reads_sender_field() {
        let json = r#"{"sender": "Shop", "is_default": true, "status": "ACTIVE"}"#;
        let sender: SenderName = serde_json::from_str(json).unwrap();
        assert_eq!(sender.name, "Shop");
        assert!(sender.is_default);
        assert_eq!(sender.status.as_deref(), Some("ACTIVE"));
    }
}
