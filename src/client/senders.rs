use reqwest::Method;
use serde::Serialize;

use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{Page, SenderName};
use crate::transport::{RequestBody, path_segment};

const SENDERS_PATH: &str = "/sms/sendernames";

#[derive(Serialize)]
struct NewSender<'a> {
    sender: &'a str,
}

#[derive(Serialize)]
struct Activation<'a> {
    code: &'a str,
}

/// Sender names (`/sms/sendernames`).
#[derive(Debug, Clone, Copy)]
pub struct SendersApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> SendersApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn get(&self, ctx: &Context, name: &str) -> Result<SenderName, SmsapiError> {
        self.client.get(ctx, &sender_path(name)).await
    }

    pub async fn get_all(&self, ctx: &Context) -> Result<Page<SenderName>, SmsapiError> {
        self.client.get(ctx, SENDERS_PATH).await
    }

    /// Register a new sender name; it stays inactive until [`Self::activate`].
    pub async fn create(&self, ctx: &Context, name: &str) -> Result<SenderName, SmsapiError> {
        self.client
            .post(ctx, SENDERS_PATH, &NewSender { sender: name })
            .await
    }

    pub async fn delete(&self, ctx: &Context, name: &str) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &sender_path(name)).await
    }

    /// Confirm a sender name with the activation `code` delivered by SMSAPI.
    pub async fn activate(&self, ctx: &Context, name: &str, code: &str) -> Result<(), SmsapiError> {
        let path = format!("{}/commands/activate", sender_path(name));
        let body = RequestBody::json(&Activation { code }).map_err(SmsapiError::Encode)?;
        self.client.call(ctx, Method::PUT, &path, body).await
    }

    pub async fn make_default(&self, ctx: &Context, name: &str) -> Result<(), SmsapiError> {
        let path = format!("{}/commands/make_default", sender_path(name));
        self.client
            .call(ctx, Method::POST, &path, RequestBody::empty())
            .await
    }
}

fn sender_path(name: &str) -> String {
    format!("{SENDERS_PATH}/{}", path_segment(name))
}
