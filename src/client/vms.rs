use crate::client::sms::non_empty;
use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{LegacyCollection, MessageResult, RemovedMessage, Timestamp, Vms};
use crate::transport::{Param, add_query_params};

const VMS_PATH: &str = "/vms.do";

/// Voice message sending and lookup (`/vms.do`). Polish platform only.
#[derive(Debug, Clone, Copy)]
pub struct VmsApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> VmsApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn send_raw(
        &self,
        ctx: &Context,
        vms: &Vms,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.client.legacy_post(ctx, VMS_PATH, vms).await
    }

    /// Call `to` and read `tts` with text-to-speech.
    pub async fn send(
        &self,
        ctx: &Context,
        to: &str,
        tts: &str,
        from: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.send_raw(ctx, &speech_to(to, tts, from)).await
    }

    pub async fn schedule(
        &self,
        ctx: &Context,
        to: &str,
        tts: &str,
        from: &str,
        send_at: Timestamp,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let vms = Vms {
            date: Some(send_at),
            ..speech_to(to, tts, from)
        };
        self.send_raw(ctx, &vms).await
    }

    pub async fn send_to_group(
        &self,
        ctx: &Context,
        group: &str,
        tts: &str,
        from: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let vms = Vms {
            group: Some(group.to_owned()),
            tts: Some(tts.to_owned()),
            from: non_empty(from),
            ..Default::default()
        };
        self.send_raw(ctx, &vms).await
    }

    /// Cancel a scheduled call. Unlike SMS and MMS, this endpoint takes `sch_del` as a
    /// query parameter on `GET`.
    pub async fn remove_scheduled(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<LegacyCollection<RemovedMessage>, SmsapiError> {
        let path = add_query_params(VMS_PATH, &Param("sch_del", id))?;
        self.client.legacy_get(ctx, &path).await
    }

    pub async fn get(&self, ctx: &Context, id: &str) -> Result<MessageResult, SmsapiError> {
        let path = add_query_params(VMS_PATH, &Param("status", id))?;
        self.client.legacy_get(ctx, &path).await
    }
}

fn speech_to(to: &str, tts: &str, from: &str) -> Vms {
    Vms {
        to: Some(to.to_owned()),
        tts: Some(tts.to_owned()),
        from: non_empty(from),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use reqwest::Method;

    use crate::client::test_support::{FakeTransport, make_client};

    use super::*;

    #[tokio::test]
    async fn send_posts_tts_payload() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"count": 1, "list": [{"id": "V1", "points": 0.05}]}"#);
        let client = make_client(transport.clone());

        let sent = client
            .vms()
            .unwrap()
            .send(&Context::background(), "48500000000", "hello", "")
            .await
            .unwrap();
        assert_eq!(sent.list[0].id.as_deref(), Some("V1"));

        let request = transport.last_request();
        assert_eq!(request.path(), "/vms.do");
        assert_eq!(
            request.json_body(),
            serde_json::json!({"to": "48500000000", "tts": "hello"})
        );
    }

    #[tokio::test]
    async fn raw_payload_renames_attempts() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"count": 0, "list": []}"#);
        let client = make_client(transport.clone());

        let vms = Vms {
            to: Some("48500000000".to_owned()),
            file: Some("https://example.com/voice.wav".to_owned()),
            attempts: Some(3),
            interval: Some(300),
            ..Default::default()
        };
        client
            .vms()
            .unwrap()
            .send_raw(&Context::background(), &vms)
            .await
            .unwrap();

        let body = transport.last_request().json_body();
        assert_eq!(body["try"], 3);
        assert_eq!(body["interval"], 300);
    }

    #[tokio::test]
    async fn remove_scheduled_uses_get_with_query() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"count": 1, "list": [{"id": "V1"}]}"#);
        let client = make_client(transport.clone());

        let removed = client
            .vms()
            .unwrap()
            .remove_scheduled(&Context::background(), "V1")
            .await
            .unwrap();
        assert_eq!(removed.count, 1);

        let request = transport.last_request();
        assert_eq!(request.method, Method::GET);
        assert_eq!(
            request.query_pairs(),
            vec![
                ("sch_del".to_owned(), "V1".to_owned()),
                ("format".to_owned(), "json".to_owned()),
            ]
        );
        assert!(request.body.is_none());
    }
}
