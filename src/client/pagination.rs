use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::Page;
use crate::transport::{QueryFields, encode_pairs, extend_query};

/// Page size used when the filters carry no (or a zero) `limit`.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Forward-only cursor over a `{size, collection}` resource.
///
/// Each [`next_page`](Self::next_page) performs one `GET` with `offset`/`limit` set and
/// then advances `offset` by `limit`. Once `offset` passes the last reported `size`, the
/// iterator is exhausted and every further call returns
/// [`SmsapiError::NoMoreResults`] without touching the network.
pub struct PageIterator<'a, T> {
    client: &'a SmsapiClient,
    ctx: Context,
    path: String,
    filters: Vec<(String, String)>,
    offset: u32,
    limit: u32,
    size: u32,
    exhausted: bool,
    _item: PhantomData<fn() -> T>,
}

impl<'a, T: DeserializeOwned> PageIterator<'a, T> {
    pub(crate) fn new<F: QueryFields + ?Sized>(
        client: &'a SmsapiClient,
        ctx: Context,
        path: impl Into<String>,
        filters: &F,
    ) -> Self {
        let mut offset = 0;
        let mut limit = DEFAULT_PAGE_SIZE;
        let mut rest = Vec::new();
        for (key, value) in encode_pairs(filters) {
            match key.as_str() {
                "offset" => offset = value.parse::<u32>().unwrap_or(0),
                "limit" => {
                    limit = value
                        .parse::<u32>()
                        .ok()
                        .filter(|it| *it > 0)
                        .unwrap_or(DEFAULT_PAGE_SIZE);
                }
                _ => rest.push((key, value)),
            }
        }

        Self {
            client,
            ctx,
            path: path.into(),
            filters: rest,
            offset,
            limit,
            size: 0,
            exhausted: false,
            _item: PhantomData,
        }
    }

    /// Fetch the next page.
    ///
    /// A failed fetch leaves the cursor untouched, so the same page can be retried.
    pub async fn next_page(&mut self) -> Result<Page<T>, SmsapiError> {
        if self.exhausted || (self.size > 0 && self.offset > self.size) {
            self.exhausted = true;
            return Err(SmsapiError::NoMoreResults);
        }

        let mut query = self.filters.clone();
        query.push(("offset".to_owned(), self.offset.to_string()));
        query.push(("limit".to_owned(), self.limit.to_string()));
        let path = extend_query(&self.path, query)?;

        let page: Page<T> = self.client.get(&self.ctx, &path).await?;
        self.offset = self.offset.saturating_add(self.limit);
        self.size = page.size;
        Ok(page)
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn limit(&self) -> u32 {
        self.limit
    }

    /// Collection size reported by the last successful fetch (0 before the first).
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }
}
