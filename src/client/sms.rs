use serde::Serialize;

use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{LegacyCollection, MessageResult, RemovedMessage, Sms, Timestamp};
use crate::transport::{Param, add_query_params};

const SMS_PATH: &str = "/sms.do";

#[derive(Serialize)]
struct RemoveScheduled<'a> {
    sch_del: &'a str,
}

/// SMS sending and lookup (`/sms.do`).
#[derive(Debug, Clone, Copy)]
pub struct SmsApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> SmsApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    /// Send a fully specified [`Sms`] payload.
    pub async fn send_raw(
        &self,
        ctx: &Context,
        sms: &Sms,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.client.legacy_post(ctx, SMS_PATH, sms).await
    }

    pub async fn send(
        &self,
        ctx: &Context,
        to: &str,
        message: &str,
        from: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.send_raw(ctx, &message_to(to, message, from)).await
    }

    /// Send a flash SMS (displayed immediately, not stored on the handset).
    pub async fn send_flash(
        &self,
        ctx: &Context,
        to: &str,
        message: &str,
        from: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let sms = Sms {
            flash: true,
            ..message_to(to, message, from)
        };
        self.send_raw(ctx, &sms).await
    }

    /// Send to every member of a contact group.
    pub async fn send_to_group(
        &self,
        ctx: &Context,
        group: &str,
        message: &str,
        from: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let sms = Sms {
            group: Some(group.to_owned()),
            message: Some(message.to_owned()),
            from: non_empty(from),
            ..Default::default()
        };
        self.send_raw(ctx, &sms).await
    }

    /// Queue a message for delivery at `send_at`.
    pub async fn schedule(
        &self,
        ctx: &Context,
        to: &str,
        message: &str,
        from: &str,
        send_at: Timestamp,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let sms = Sms {
            date: Some(send_at),
            ..message_to(to, message, from)
        };
        self.send_raw(ctx, &sms).await
    }

    pub async fn remove_scheduled(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<LegacyCollection<RemovedMessage>, SmsapiError> {
        self.client
            .legacy_post(ctx, SMS_PATH, &RemoveScheduled { sch_del: id })
            .await
    }

    /// Look up a sent message by id.
    pub async fn get(&self, ctx: &Context, id: &str) -> Result<MessageResult, SmsapiError> {
        let path = add_query_params(SMS_PATH, &Param("status", id))?;
        self.client.legacy_get(ctx, &path).await
    }
}

fn message_to(to: &str, message: &str, from: &str) -> Sms {
    Sms {
        to: Some(to.to_owned()),
        message: Some(message.to_owned()),
        from: non_empty(from),
        ..Default::default()
    }
}

pub(crate) fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_owned())
}
