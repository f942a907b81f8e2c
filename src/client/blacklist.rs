use crate::client::{Context, PageIterator, SmsapiClient, SmsapiError};
use crate::domain::{BlacklistFilters, BlacklistedNumber, Date, Page};
use crate::transport::{add_query_params, path_segment};

const BLACKLIST_PATH: &str = "/blacklist/phone_numbers";

/// Page-by-page walk over blacklisted phone numbers.
pub type BlacklistIterator<'a> = PageIterator<'a, BlacklistedNumber>;

/// Phone number blacklist (`/blacklist/phone_numbers`).
#[derive(Debug, Clone, Copy)]
pub struct BlacklistApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> BlacklistApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn get_phone_numbers(
        &self,
        ctx: &Context,
        filters: &BlacklistFilters,
    ) -> Result<Page<BlacklistedNumber>, SmsapiError> {
        let path = add_query_params(BLACKLIST_PATH, filters)?;
        self.client.get(ctx, &path).await
    }

    pub fn page_iterator(&self, ctx: Context, filters: &BlacklistFilters) -> BlacklistIterator<'a> {
        PageIterator::new(self.client, ctx, BLACKLIST_PATH, filters)
    }

    /// Block `phone_number` until `expire_at`, or indefinitely when `None`.
    pub async fn add_phone_number(
        &self,
        ctx: &Context,
        phone_number: &str,
        expire_at: Option<Date>,
    ) -> Result<BlacklistedNumber, SmsapiError> {
        let entry = BlacklistedNumber {
            phone_number: Some(phone_number.to_owned()),
            expire_at,
            ..Default::default()
        };
        self.client.post(ctx, BLACKLIST_PATH, &entry).await
    }

    pub async fn delete_all_phone_numbers(&self, ctx: &Context) -> Result<(), SmsapiError> {
        self.client.delete(ctx, BLACKLIST_PATH).await
    }

    pub async fn delete_phone_number(&self, ctx: &Context, id: &str) -> Result<(), SmsapiError> {
        self.client
            .delete(ctx, &format!("{BLACKLIST_PATH}/{}", path_segment(id)))
            .await
    }
}
