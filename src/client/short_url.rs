use reqwest::Method;

use crate::client::{Context, SmsapiClient, SmsapiError};
use crate::domain::{Click, ClicksFilters, ClicksReport, Link, Page, ShortLink};
use crate::transport::{add_query_params, path_segment};

const LINKS_PATH: &str = "/short_url/links";

/// Short links and their click statistics (`/short_url`).
#[derive(Debug, Clone, Copy)]
pub struct ShortUrlApi<'a> {
    client: &'a SmsapiClient,
}

impl<'a> ShortUrlApi<'a> {
    pub(crate) fn new(client: &'a SmsapiClient) -> Self {
        Self { client }
    }

    pub async fn get_clicks(
        &self,
        ctx: &Context,
        filters: &ClicksFilters,
    ) -> Result<Page<Click>, SmsapiError> {
        let path = add_query_params("/short_url/clicks", filters)?;
        self.client.get(ctx, &path).await
    }

    /// Request a downloadable clicks report for `filters`.
    pub async fn create_report(
        &self,
        ctx: &Context,
        filters: &ClicksFilters,
    ) -> Result<ClicksReport, SmsapiError> {
        let path = add_query_params("/short_url/clicks_reports", filters)?;
        self.client.post_empty(ctx, &path).await
    }

    pub async fn get_links(&self, ctx: &Context) -> Result<Page<ShortLink>, SmsapiError> {
        self.client.get(ctx, LINKS_PATH).await
    }

    pub async fn get_link(&self, ctx: &Context, id: &str) -> Result<ShortLink, SmsapiError> {
        self.client.get(ctx, &link_path(id)).await
    }

    pub async fn create_link_raw(
        &self,
        ctx: &Context,
        link: &Link,
    ) -> Result<ShortLink, SmsapiError> {
        self.client
            .urlencoded(ctx, Method::POST, LINKS_PATH, link)
            .await
    }

    /// Shorten `url`. Empty `name` or `description` are left out.
    pub async fn create_link(
        &self,
        ctx: &Context,
        url: &str,
        name: &str,
        description: &str,
    ) -> Result<ShortLink, SmsapiError> {
        self.create_link_raw(ctx, &simple_link(url, name, description))
            .await
    }

    pub async fn update_link_raw(
        &self,
        ctx: &Context,
        id: &str,
        link: &Link,
    ) -> Result<ShortLink, SmsapiError> {
        self.client
            .urlencoded(ctx, Method::PUT, &link_path(id), link)
            .await
    }

    pub async fn update_link(
        &self,
        ctx: &Context,
        id: &str,
        url: &str,
        name: &str,
        description: &str,
    ) -> Result<ShortLink, SmsapiError> {
        self.update_link_raw(ctx, id, &simple_link(url, name, description))
            .await
    }

    pub async fn delete_link(&self, ctx: &Context, id: &str) -> Result<(), SmsapiError> {
        self.client.delete(ctx, &link_path(id)).await
    }
}

fn link_path(id: &str) -> String {
    format!("{LINKS_PATH}/{}", path_segment(id))
}

fn simple_link(url: &str, name: &str, description: &str) -> Link {
    Link {
        url: Some(url.to_owned()),
        name: Some(name.to_owned()),
        description: Some(description.to_owned()),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use crate::client::test_support::{FakeTransport, make_client};
    use crate::domain::{ExpireTimeUnit, LinkType};

    use super::*;

    const LINK: &str = r#"
    {
      "id": "L1",
      "name": "promo",
      "url": "https://example.com",
      "short_url": "https://idz.do/abc",
      "type": "URL",
      "hits": 0,
      "hits_unique": 0
    }
    "#;

    #[tokio::test]
    async fn create_link_is_form_encoded() {
        let transport = FakeTransport::new();
        transport.respond(201, LINK);
        let client = make_client(transport.clone());

        let link = client
            .short_url()
            .create_link(&Context::background(), "https://example.com", "promo", "")
            .await
            .unwrap();
        assert_eq!(link.short_url.as_deref(), Some("https://idz.do/abc"));

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path(), "/short_url/links");
        assert_eq!(request.content_type(), "application/x-www-form-urlencoded");
        assert_eq!(
            request.form_body(),
            vec![
                ("url".to_owned(), "https://example.com".to_owned()),
                ("name".to_owned(), "promo".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn update_link_raw_puts_form_with_expiry() {
        let transport = FakeTransport::new();
        transport.respond(200, LINK);
        let client = make_client(transport.clone());

        let link = Link {
            expire_time: Some(7),
            expire_unit: Some(ExpireTimeUnit::Days),
            link_type: Some(LinkType::Url),
            ..Default::default()
        };
        client
            .short_url()
            .update_link_raw(&Context::background(), "L1", &link)
            .await
            .unwrap();

        let request = transport.last_request();
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path(), "/short_url/links/L1");
        assert_eq!(
            request.form_body(),
            vec![
                ("expire_time".to_owned(), "7".to_owned()),
                ("expire_unit".to_owned(), "days".to_owned()),
                ("type".to_owned(), "URL".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn clicks_filters_repeat_links() {
        let transport = FakeTransport::new();
        transport.respond(
            200,
            r#"{"size": 1, "collection": [{"name": "promo", "phone_number": "48500000000", "os": "Android"}]}"#,
        );
        let client = make_client(transport.clone());

        let filters = ClicksFilters {
            date_from: Some("2020-01-01".to_owned()),
            date_to: None,
            links: vec!["L1".to_owned(), "L2".to_owned()],
        };
        let clicks = client
            .short_url()
            .get_clicks(&Context::background(), &filters)
            .await
            .unwrap();
        assert_eq!(clicks.collection[0].os.as_deref(), Some("Android"));

        let request = transport.last_request();
        assert_eq!(request.path(), "/short_url/clicks");
        assert_eq!(
            request.query_pairs(),
            vec![
                ("date_from".to_owned(), "2020-01-01".to_owned()),
                ("links".to_owned(), "L1".to_owned()),
                ("links".to_owned(), "L2".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn create_report_posts_filters_as_query() {
        let transport = FakeTransport::new();
        transport.respond(201, r#"{"link": "https://example.com/report.csv"}"#);
        let client = make_client(transport.clone());

        let filters = ClicksFilters {
            links: vec!["L1".to_owned()],
            ..Default::default()
        };
        let report = client
            .short_url()
            .create_report(&Context::background(), &filters)
            .await
            .unwrap();
        assert_eq!(report.report_url, "https://example.com/report.csv");

        let request = transport.last_request();
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.query(), Some("links=L1"));
        assert!(request.body.is_none());
    }
}
