use serde_json::{Map, Value};

use crate::domain::{ApiError, InvalidNumber};

#[derive(Debug, Default)]
struct ErrorEnvelope {
    error: Option<i64>,
    message: Option<String>,
    invalid_numbers: Vec<InvalidNumber>,
}

/// Classify a raw response.
///
/// The body is always probed for the error envelope first; a body that is not a JSON
/// object counts as "no envelope". Success requires both a zero (or absent) vendor code and
/// a 2xx status, so a 200 carrying `{"error": 13}` is a failure.
pub fn check_response(status: u16, body: &[u8]) -> Result<(), ApiError> {
    let envelope = parse_envelope(body);
    let code = envelope.error.unwrap_or(0);

    if code == 0 && (200..300).contains(&status) {
        return Ok(());
    }

    Err(ApiError {
        status,
        code,
        message: envelope.message.unwrap_or_default(),
        invalid_numbers: envelope.invalid_numbers,
    })
}

/// Each envelope field is read on its own, so a malformed `message` or
/// `invalid_numbers` never hides the vendor code.
fn parse_envelope(body: &[u8]) -> ErrorEnvelope {
    let Ok(Value::Object(fields)) = serde_json::from_slice::<Value>(body) else {
        return ErrorEnvelope::default();
    };

    ErrorEnvelope {
        error: fields.get("error").and_then(Value::as_i64),
        message: fields.get("message").and_then(text),
        invalid_numbers: fields
            .get("invalid_numbers")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_object)
                    .map(invalid_number)
                    .collect()
            })
            .unwrap_or_default(),
    }
}

fn invalid_number(fields: &Map<String, Value>) -> InvalidNumber {
    InvalidNumber {
        number: fields.get("number").and_then(text),
        submitted_number: fields.get("submitted_number").and_then(text),
        message: fields.get("message").and_then(text),
    }
}

/// Strings are taken as-is; numbers are kept in their JSON spelling.
fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
