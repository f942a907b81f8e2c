use serde::Serialize;

use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{LegacyCollection, MessageResult, Mms, RemovedMessage, Smil, Timestamp};
use crate::transport::{Param, add_query_params};

const MMS_PATH: &str = "/mms.do";

#[derive(Serialize)]
struct RemoveScheduled<'a> {
    sch_del: &'a str,
}

/// MMS sending and lookup (`/mms.do`). Polish platform only.
#[derive(Debug, Clone, Copy)]
pub struct MmsApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> MmsApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn send_raw(
        &self,
        ctx: &Context,
        mms: &Mms,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.client.legacy_post(ctx, MMS_PATH, mms).await
    }

    /// Send a single image, referenced by URL, with a subject line.
    pub async fn send(
        &self,
        ctx: &Context,
        to: &str,
        subject: &str,
        image_url: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        self.send_raw(ctx, &image_to(to, subject, image_url)).await
    }

    pub async fn schedule(
        &self,
        ctx: &Context,
        to: &str,
        subject: &str,
        image_url: &str,
        send_at: Timestamp,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let mms = Mms {
            date: Some(send_at),
            ..image_to(to, subject, image_url)
        };
        self.send_raw(ctx, &mms).await
    }

    pub async fn send_to_group(
        &self,
        ctx: &Context,
        group: &str,
        subject: &str,
        image_url: &str,
    ) -> Result<LegacyCollection<MessageResult>, SmsapiError> {
        let mms = Mms {
            to: None,
            group: Some(group.to_owned()),
            ..image_to("", subject, image_url)
        };
        self.send_raw(ctx, &mms).await
    }

    pub async fn remove_scheduled(
        &self,
        ctx: &Context,
        id: &str,
    ) -> Result<LegacyCollection<RemovedMessage>, SmsapiError> {
        self.client
            .legacy_post(ctx, MMS_PATH, &RemoveScheduled { sch_del: id })
            .await
    }

    pub async fn get(&self, ctx: &Context, id: &str) -> Result<MessageResult, SmsapiError> {
        let path = add_query_params(MMS_PATH, &Param("status", id))?;
        self.client.legacy_get(ctx, &path).await
    }
}

fn image_to(to: &str, subject: &str, image_url: &str) -> Mms {
    let mut smil = Smil::new();
    smil.add_image(image_url);
    Mms {
        to: Some(to.to_owned()),
        subject: Some(subject.to_owned()),
        message: Some(smil),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{FakeTransport, assert_param, make_client};

    use super::*;

    #[tokio::test]
    async fn send_wraps_image_in_smil() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"count": 1, "list": [{"id": "M1", "points": "0.30", "status": "QUEUE"}]}"#,
        );
        let client = make_client(transport.clone());

        let sent = client
            .mms()
            .unwrap()
            .send(
                &Context::background(),
                "48500000000",
                "promo",
                "https://example.com/a.jpg",
            )
            .await
            .unwrap();
        assert_eq!(
            sent.list[0].points.as_ref().and_then(|it| it.to_f64()),
            Some(0.30)
        );

        let request = transport.last_request();
        assert_eq!(request.path(), "/mms.do");
        assert_param(&request.query_pairs(), "format", "json");
        let body = request.json_body();
        assert_eq!(body["to"], "48500000000");
        assert_eq!(body["subject"], "promo");
        let smil = body["smil"].as_str().unwrap();
        assert!(smil.starts_with("<smil>"));
        assert!(smil.contains("<img src='https://example.com/a.jpg' region='img0'/>"));
    }

    #[tokio::test]
    async fn send_to_group_omits_recipient() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"count": 0, "list": []}"#);
        let client = make_client(transport.clone());

        client
            .mms()
            .unwrap()
            .send_to_group(&Context::background(), "friends", "promo", "https://example.com/a.jpg")
            .await
            .unwrap();
        let body = transport.last_request().json_body();
        assert_eq!(body["group"], "friends");
        assert!(body.get("to").is_none());
    }

    #[tokio::test]
    async fn remove_and_get_use_mms_endpoint() {
        let transport = FakeTransport::new();
        transport.respond(200, r#"{"count": 1, "list": [{"id": "M1"}]}"#);
        transport.respond(200, r#"{"id": "M1", "status": "SENT"}"#);
        let client = make_client(transport.clone());
        let mms = client.mms().unwrap();

        mms.remove_scheduled(&Context::background(), "M1").await.unwrap();
        assert_eq!(
            transport.last_request().json_body(),
            serde_json::json!({"sch_del": "M1"})
        );

        let result = mms.get(&Context::background(), "M1").await.unwrap();
        assert_eq!(result.status.as_deref(), Some("SENT"));
        assert_param(&transport.last_request().query_pairs(), "status", "M1");
    }
}
