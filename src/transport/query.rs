//! Query-string and form encoding driven by explicit per-field descriptors.

use std::borrow::Cow;

use url::{Position, Url};
use url::form_urlencoded;

/// Value of one encodable field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    Text(Cow<'a, str>),
    Integer(i64),
    Unsigned(u64),
    Bool(bool),
    /// Encoded as one `key=value` pair per element, in order.
    List(Vec<Cow<'a, str>>),
    /// A missing optional; never encoded.
    Absent,
}

impl FieldValue<'_> {
    /// Zero value check used by omit-if-empty fields.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Integer(value) => *value == 0,
            Self::Unsigned(value) => *value == 0,
            Self::Bool(value) => !*value,
            Self::List(items) => items.is_empty(),
            Self::Absent => true,
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(value: String) -> Self {
        Self::Text(Cow::Owned(value))
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for FieldValue<'_> {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u32> for FieldValue<'_> {
    fn from(value: u32) -> Self {
        Self::Unsigned(value.into())
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        Self::Unsigned(value)
    }
}

impl<'a> From<&'a [String]> for FieldValue<'a> {
    fn from(value: &'a [String]) -> Self {
        Self::List(value.iter().map(|it| Cow::Borrowed(it.as_str())).collect())
    }
}

impl<'a> From<&'a Vec<String>> for FieldValue<'a> {
    fn from(value: &'a Vec<String>) -> Self {
        Self::from(value.as_slice())
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Encoding descriptor for one field: wire name, value and omit-if-empty flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<'a> {
    pub name: &'static str,
    pub value: FieldValue<'a>,
    pub omit_empty: bool,
}

impl<'a> Field<'a> {
    /// A field encoded even at its zero value.
    pub fn required(name: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            name,
            value: value.into(),
            omit_empty: false,
        }
    }

    /// A field skipped when at its zero value.
    pub fn omit_empty(name: &'static str, value: impl Into<FieldValue<'a>>) -> Self {
        Self {
            name,
            value: value.into(),
            omit_empty: true,
        }
    }

    fn push_pairs(self, pairs: &mut Vec<(String, String)>) {
        if self.omit_empty && self.value.is_empty() {
            return;
        }
        let name = self.name;
        match self.value {
            FieldValue::Text(text) => pairs.push((name.to_owned(), text.into_owned())),
            FieldValue::Integer(value) => pairs.push((name.to_owned(), value.to_string())),
            FieldValue::Unsigned(value) => pairs.push((name.to_owned(), value.to_string())),
            FieldValue::Bool(value) => pairs.push((name.to_owned(), value.to_string())),
            FieldValue::List(items) => {
                pairs.extend(items.into_iter().map(|it| (name.to_owned(), it.into_owned())));
            }
            FieldValue::Absent => {}
        }
    }
}

/// Types that can be written as query parameters or a form body.
///
/// Fields are returned in declaration order; that order is preserved on the wire.
pub trait QueryFields {
    fn query_fields(&self) -> Vec<Field<'_>>;
}

impl<T: QueryFields + ?Sized> QueryFields for &T {
    fn query_fields(&self) -> Vec<Field<'_>> {
        (**self).query_fields()
    }
}

/// Flatten a value into ordered `(key, value)` pairs.
pub fn encode_pairs<T: QueryFields + ?Sized>(value: &T) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for field in value.query_fields() {
        field.push_pairs(&mut pairs);
    }
    pairs
}

/// Encode a value as `application/x-www-form-urlencoded` text.
pub fn encode<T: QueryFields + ?Sized>(value: &T) -> String {
    serialize_pairs(&encode_pairs(value))
}

pub(crate) fn serialize_pairs(pairs: &[(String, String)]) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

// Only used to resolve relative paths; never contacted.
const PLACEHOLDER_BASE: &str = "http://placeholder.invalid/";

/// Merge the encoded fields of `value` into the query string of `path`.
///
/// Existing parameters are kept first, then the new ones; duplicated keys are not
/// collapsed. Relative paths stay relative (`/contacts` → `/contacts?q=x`).
pub fn add_query_params<T: QueryFields + ?Sized>(
    path: &str,
    value: &T,
) -> Result<String, url::ParseError> {
    extend_query(path, encode_pairs(value))
}

pub(crate) fn extend_query(
    path: &str,
    extra: Vec<(String, String)>,
) -> Result<String, url::ParseError> {
    let (mut url, absolute) = match Url::parse(path) {
        Ok(url) => (url, true),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            (Url::parse(PLACEHOLDER_BASE)?.join(path)?, false)
        }
        Err(err) => return Err(err),
    };

    let mut pairs = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect::<Vec<_>>();
    pairs.extend(extra);

    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.set_query(Some(&serialize_pairs(&pairs)));
    }

    if absolute {
        Ok(url.into())
    } else {
        Ok(url[Position::BeforePath..].to_owned())
    }
}
