//! Typed Rust client for the SMSAPI messaging REST API.
//!
//! The crate is split into a domain layer of request/response types and value codecs, a
//! transport layer for wire-format details (query/form encoding, the error envelope), and
//! a client layer running the request pipeline behind per-resource façades.
//!
//! ```rust,no_run
//! use smsapi::{AccessToken, Context, SmsapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsapi::SmsapiError> {
//!     let client = SmsapiClient::poland(AccessToken::new("...")?)?;
//!     let ctx = Context::background();
//!
//!     let sent = client.sms().send(&ctx, "48500000000", "hello", "").await?;
//!     for result in &sent.list {
//!         println!("{:?} {:?}", result.id, result.status);
//!     }
//!
//!     let mut pages = client.contacts().contacts_iterator(ctx, &Default::default());
//!     loop {
//!         match pages.next_page().await {
//!             Ok(page) if page.collection.is_empty() => break,
//!             Ok(page) => println!("{} contacts", page.collection.len()),
//!             Err(err) if err.is_no_more_results() => break,
//!             Err(err) => return Err(err),
//!         }
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    BASE_URL_COM, BASE_URL_PL, BlacklistApi, BlacklistIterator, ContactsApi, ContactsIterator,
    Context, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, HlrApi, MmsApi, PageIterator, Platform,
    ProfileApi, SendersApi, ShortUrlApi, SmsApi, SmsapiClient, SmsapiClientBuilder, SmsapiError,
    SubusersApi, VmsApi,
};
pub use domain::{
    AccessToken, ApiError, BlacklistFilters, BlacklistedNumber, Click, ClicksFilters,
    ClicksReport, Contact, ContactGroup, ContactListFilters, CustomField, Date, ExpireTimeUnit,
    GroupPermissions, HlrResult, InvalidNumber, LegacyCollection, Link, LinkType, MediaKind,
    MediaObject, MessageResult, Mms, Page, ParseValueError, Points, ProfileDetails,
    RemovedMessage, SenderName, ShortLink, Sms, Smil, SubUser, SubUserCredentials,
    SubUserPayload, SubUserPoints, Timestamp, ValidationError, Vms,
};
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
pub use transport::{
    ContentType, Field, FieldValue, QueryFields, add_query_params, check_response, encode,
    encode_pairs,
};
