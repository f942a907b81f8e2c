use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{Page, SubUser, SubUserPayload};
use crate::transport::path_segment;

const SUBUSERS_PATH: &str = "/subusers";

/// Sub-account management (`/subusers`).
#[derive(Debug, Clone, Copy)]
pub struct SubusersApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> SubusersApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn get_user(&self, ctx: &Context, id: &str) -> Result<SubUser, SmsapiError> {
        self.client.get(ctx, &user_path(id)).await
    }

    pub async fn create_user(
        &self,
        ctx: &Context,
        user: &SubUserPayload,
    ) -> Result<SubUser, SmsapiError> {
        self.client.post(ctx, SUBUSERS_PATH, user).await
    }

    pub async fn update_user(
        &self,
        ctx: &Context,
        id: &str,
        user: &SubUserPayload,
    ) -> Result<SubUser, SmsapiError> {
        self.client.put(ctx, &user_path(id), user).await
    }

    pub async fn delete_user(&self, ctx: &Context, id: &str) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &user_path(id)).await
    }

    pub async fn list_users(&self, ctx: &Context) -> Result<Page<SubUser>, SmsapiError> {
        self.client.get(ctx, SUBUSERS_PATH).await
    }
}

fn user_path(id: &str) -> String {
    format!("{SUBUSERS_PATH}/{}", path_segment(id))
}
