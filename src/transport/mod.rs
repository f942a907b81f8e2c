//! Transport layer: wire-format details (query/form encoding, request bodies, error envelope).

mod envelope;
mod forms;
mod query;

use serde::Serialize;

pub use envelope::check_response;
pub use query::{Field, FieldValue, QueryFields, add_query_params, encode, encode_pairs};
pub(crate) use forms::Param;
pub(crate) use query::extend_query;

/// Request body encodings accepted by SMSAPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    FormUrlencoded,
}

impl ContentType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::FormUrlencoded => "application/x-www-form-urlencoded",
        }
    }
}

/// Encoded request body together with the content type it was encoded for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RequestBody {
    pub content_type: ContentType,
    pub bytes: Option<Vec<u8>>,
}

impl RequestBody {
    /// JSON content type without a payload (GET, DELETE, bodiless POST/PUT).
    pub fn empty() -> Self {
        Self {
            content_type: ContentType::Json,
            bytes: None,
        }
    }

    pub fn json<B: Serialize + ?Sized>(body: &B) -> Result<Self, serde_json::Error> {
        Ok(Self {
            content_type: ContentType::Json,
            bytes: Some(serde_json::to_vec(body)?),
        })
    }

    pub fn form<B: QueryFields + ?Sized>(body: &B) -> Self {
        Self {
            content_type: ContentType::FormUrlencoded,
            bytes: Some(encode(body).into_bytes()),
        }
    }
}

/// Append the fixed `format=json` parameter required by the `*.do` endpoints.
pub(crate) fn legacy_path(path: &str) -> Result<String, url::ParseError> {
    extend_query(path, vec![("format".to_owned(), "json".to_owned())])
}

/// Percent-encode a caller-supplied id or name for use as a single path segment.
pub(crate) fn path_segment(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_segment_escapes_url_delimiters() {
        assert_eq!(path_segment("Shop"), "Shop");
        assert_eq!(path_segment("a#b?c/d"), "a%23b%3Fc%2Fd");
        assert_eq!(path_segment("my shop+1"), "my%20shop%2B1");
    }

    struct Link<'a> {
        url: &'a str,
        name: Option<&'a str>,
    }

    impl QueryFields for Link<'_> {
        fn query_fields(&self) -> Vec<Field<'_>> {
            vec![
                Field::omit_empty("url", self.url),
                Field::omit_empty("name", self.name),
            ]
        }
    }

    #[test]
    fn json_body_uses_json_content_type() {
        let body = RequestBody::json(&serde_json::json!({"to": "48500000000"})).unwrap();
        assert_eq!(body.content_type, ContentType::Json);
        assert_eq!(body.bytes.as_deref(), Some(&br#"{"to":"48500000000"}"#[..]));
    }

    #[test]
    fn form_body_uses_form_encoding() {
        let body = RequestBody::form(&Link {
            url: "https://example.com/?a=1",
            name: None,
        });
        assert_eq!(body.content_type, ContentType::FormUrlencoded);
        assert_eq!(
            body.bytes.as_deref(),
            Some(&b"url=https%3A%2F%2Fexample.com%2F%3Fa%3D1"[..])
        );
    }

    #[test]
    fn empty_body_has_no_payload() {
        let body = RequestBody::empty();
        assert_eq!(body.content_type.as_str(), "application/json");
        assert!(body.bytes.is_none());
    }

    #[test]
    fn legacy_path_appends_format_after_existing_params() {
        assert_eq!(legacy_path("/sms.do").unwrap(), "/sms.do?format=json");
        assert_eq!(
            legacy_path("/hlr.do?number=48500000000").unwrap(),
            "/hlr.do?number=48500000000&format=json"
        );
    }
}
