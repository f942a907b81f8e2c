use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::HlrResult;
use crate::transport::{Param, add_query_params};

/// Home Location Register lookups (`/hlr.do`).
#[derive(Debug, Clone, Copy)]
pub struct HlrApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> HlrApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// Ask the network whether `number` is live and reachable.
    pub async fn check_number(
        &self,
        ctx: &Context,
        number: &str,
    ) -> Result<HlrResult, SmsapiError> {
        let path = add_query_params("/hlr.do", &Param("number", number))?;
        self.client.legacy_get(ctx, &path).await
    }
}
