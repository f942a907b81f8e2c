use serde::{Deserialize, Serialize};

use crate::domain::value::Timestamp;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Filters for click statistics (`/short_url/clicks`, `/short_url/clicks_reports`).
pub struct ClicksFilters {
    pub date_from: Option<String>,
    pub date_to: Option<String>,
    /// Restrict to these link ids.
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Click {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub suffix: Option<String>,
    #[serde(default)]
    pub date_hit: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub browser: Option<String>,
    #[serde(default)]
    pub device: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClicksReport {
    /// Download URL of the generated report.
    #[serde(default, rename = "link")]
    pub report_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LinkType {
    #[serde(rename = "URL")]
    Url,
    #[serde(rename = "FILE")]
    File,
}

impl LinkType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Url => "URL",
            Self::File => "FILE",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpireTimeUnit {
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl ExpireTimeUnit {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Payload for creating or updating a short link (sent form-encoded).
pub struct Link {
    pub url: Option<String>,
    pub name: Option<String>,
    pub expire_time: Option<u32>,
    pub expire_unit: Option<ExpireTimeUnit>,
    pub description: Option<String>,
    pub link_type: Option<LinkType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ShortLink {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default, rename = "type")]
    pub link_type: Option<String>,
    #[serde(default)]
    pub expire: Option<Timestamp>,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub hits_unique: u32,
    #[serde(default)]
    pub description: Option<String>,
}
