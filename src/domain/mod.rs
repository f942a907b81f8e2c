//! Domain layer: typed request/response shapes and value codecs (no I/O).

mod account;
mod blacklist;
mod collection;
mod contacts;
mod error;
mod message;
mod points;
mod short_url;
mod smil;
mod validation;
mod value;

pub use account::{
    ProfileDetails, SenderName, SubUser, SubUserCredentials, SubUserPayload, SubUserPoints,
};
pub use blacklist::{BlacklistFilters, BlacklistedNumber};
pub use collection::{LegacyCollection, Page, RemovedMessage};
pub use contacts::{Contact, ContactGroup, ContactListFilters, CustomField, GroupPermissions};
pub use error::{ApiError, InvalidNumber};
pub use message::{HlrResult, MessageResult, Mms, Sms, Vms};
pub use points::Points;
pub use short_url::{Click, ClicksFilters, ClicksReport, ExpireTimeUnit, Link, LinkType, ShortLink};
pub use smil::{MediaKind, MediaObject, Smil};
pub use validation::ValidationError;
pub use value::{AccessToken, Date, ParseValueError, Timestamp};

pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
