use serde::{Deserialize, Serialize};

use crate::domain::points::Points;
use crate::domain::smil::Smil;
use crate::domain::value::Timestamp;
use crate::domain::is_false;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Payload for `POST /sms.do`.
///
/// Unset options are left out of the request so the account defaults apply.
pub struct Sms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    /// Contacts group name; alternative to `to`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub flash: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub fast: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub test: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub details: bool,
    /// Scheduled send time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacoding: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub udh: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub skip_foreign: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub allow_duplicates: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idx: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub check_idx: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub nounicode: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub normalize: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_parts: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(rename = "param1", skip_serializing_if = "Option::is_none")]
    pub message_param1: Option<String>,
    #[serde(rename = "param2", skip_serializing_if = "Option::is_none")]
    pub message_param2: Option<String>,
    #[serde(rename = "param3", skip_serializing_if = "Option::is_none")]
    pub message_param3: Option<String>,
    #[serde(rename = "param4", skip_serializing_if = "Option::is_none")]
    pub message_param4: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Payload for `POST /mms.do`.
pub struct Mms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(rename = "smil", skip_serializing_if = "Option::is_none")]
    pub message: Option<Smil>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_validate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idx: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub check_idx: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub test: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
/// Payload for `POST /vms.do`.
///
/// Either `tts` (text read by a lector) or `file` (URL of a recording) carries the message.
pub struct Vms {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tts_lector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_validate: Option<String>,
    /// Number of call attempts.
    #[serde(rename = "try", skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,
    /// Seconds between call attempts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<u32>,
    #[serde(skip_serializing_if = "is_false")]
    pub skip_gsm: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub idx: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub check_idx: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notify_url: Option<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub test: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
/// Per-recipient outcome of an SMS/MMS/VMS send or status lookup.
///
/// `message`, `length` and `parts` are only filled for SMS sent with `details`.
pub struct MessageResult {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub points: Option<Points>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub date_sent: Option<Timestamp>,
    #[serde(default)]
    pub submitted_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub idx: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub parts: Option<u32>,
}

/// Result of an HLR lookup (`GET /hlr.do`).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HlrResult {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub price: Option<Points>,
}
