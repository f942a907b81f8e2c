use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::ProfileDetails;

/// Account profile (`/profile`).
#[derive(Debug, Clone, Copy)]
pub struct ProfileApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> ProfileApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn details(&self, ctx: &Context) -> Result<ProfileDetails, SmsapiError> {
        self.client.get(ctx, "/profile").await
    }
}
