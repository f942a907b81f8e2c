use serde::de::Error as DeError;
use serde::{Deserialize, Serialize};

/// Points amount (SMSAPI's billing unit) returned as either a JSON string or a JSON number.
///
/// For numbers, the raw JSON token is preserved to avoid formatting drift
/// (`0.160` remains `"0.160"` instead of becoming `"0.16"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Points(String);

impl Points {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the token is a valid decimal.
    pub fn to_f64(&self) -> Option<f64> {
        self.0.trim().parse().ok()
    }
}

impl<'de> Deserialize<'de> for Points {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw: Box<serde_json::value::RawValue> = Deserialize::deserialize(deserializer)?;
        let token = raw.get();

        match token.as_bytes().first().copied() {
            Some(b'"') => {
                let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
                Ok(Self(parsed))
            }
            Some(b'-' | b'0'..=b'9') => Ok(Self(token.to_owned())),
            _ => Err(D::Error::custom(
                "expected points field to be JSON string or number",
            )),
        }
    }
}

impl Serialize for Points {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_token_is_preserved_verbatim() {
        let points: Points = serde_json::from_str("0.160").unwrap();
        assert_eq!(points.as_str(), "0.160");
        assert_eq!(points.to_f64(), Some(0.16));
    }

    #[test]
    fn string_token_is_unquoted() {
        let points: Points = serde_json::from_str(r#""0.3""#).unwrap();
        assert_eq!(points, Points::new("0.3"));
    }

    #[test]
    fn other_tokens_are_rejected() {
        assert!(serde_json::from_str::<Points>("true").is_err());
        assert!(serde_json::from_str::<Points>("{}").is_err());
    }

    #[test]
    fn optional_null_decodes_to_none() {
        #[derive(Deserialize)]
        struct Holder {
            #[serde(default)]
            points: Option<Points>,
        }
        let holder: Holder = serde_json::from_str(r#"{"points": null}"#).unwrap();
        assert!(holder.points.is_none());
    }
}
