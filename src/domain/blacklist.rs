use serde::{Deserialize, Serialize};

use crate::domain::value::{Date, Timestamp};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for `GET /blacklist/phone_numbers`.
pub struct BlacklistFilters {
    pub offset: u32,
    pub limit: u32,
    /// Phone number search phrase.
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Blacklisted phone number. Messages to it are rejected until `expire_at`, or forever.
pub struct BlacklistedNumber {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_at: Option<Date>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<Timestamp>,
}
