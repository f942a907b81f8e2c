//! Client layer: request pipeline, configuration and per-resource façades.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::domain::{AccessToken, ApiError, ValidationError};
use crate::transport::{QueryFields, RequestBody, check_response, legacy_path};

mod blacklist;
mod contacts;
mod context;
mod hlr;
mod mms;
mod pagination;
mod profile;
mod senders;
mod short_url;
mod sms;
mod subusers;
#[cfg(test)]
mod test_support;
mod vms;

pub use blacklist::{BlacklistApi, BlacklistIterator};
pub use contacts::{ContactsApi, ContactsIterator};
pub use context::Context;
pub use hlr::HlrApi;
pub use mms::MmsApi;
pub use pagination::{DEFAULT_PAGE_SIZE, PageIterator};
pub use profile::ProfileApi;
pub use senders::SendersApi;
pub use short_url::ShortUrlApi;
pub use sms::SmsApi;
pub use subusers::SubusersApi;
pub use vms::VmsApi;

/// Base URL of the Polish platform.
pub const BASE_URL_PL: &str = "https://api.smsapi.pl/";
/// Base URL of the international platform.
pub const BASE_URL_COM: &str = "https://api.smsapi.com/";
/// Request timeout applied to the HTTP client the builder creates.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT_VALUE: &str = concat!("smsapi-rs/", env!("CARGO_PKG_VERSION"));

type BoxError = Box<dyn StdError + Send + Sync>;
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpRequest {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

trait HttpTransport: Send + Sync {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let mut builder = self
                .client
                .request(request.method, request.url)
                .headers(request.headers);
            if let Some(body) = request.body {
                builder = builder.body(body);
            }
            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.bytes().await?.to_vec();
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsapiClient`] and its façades.
pub enum SmsapiError {
    /// Network, DNS, TLS or timeout failure before a response was read.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),

    /// The call's [`Context`] was cancelled or its deadline passed.
    #[error("request cancelled")]
    Cancelled,

    /// The response was classified as a success but its body did not match the
    /// requested shape.
    #[error("decode error: {0}")]
    Decode(#[source] BoxError),

    /// SMSAPI reported a logical failure.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// A [`PageIterator`] has walked past the last page.
    #[error("no more results")]
    NoMoreResults,

    /// The base URL or a request path could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(#[source] serde_json::Error),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl SmsapiError {
    pub fn is_no_more_results(&self) -> bool {
        matches!(self, Self::NoMoreResults)
    }

    /// The vendor error, if this is an [`SmsapiError::Api`].
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Which SMSAPI host the client talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `api.smsapi.pl`; the only platform offering MMS and VMS.
    Poland,
    /// `api.smsapi.com`.
    International,
}

impl Platform {
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Poland => BASE_URL_PL,
            Self::International => BASE_URL_COM,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsapiClient`].
///
/// Use this when you need a custom base URL, timeout, or a preconfigured
/// `reqwest::Client`.
pub struct SmsapiClientBuilder {
    token: AccessToken,
    platform: Platform,
    base_url: Option<String>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl SmsapiClientBuilder {
    pub fn new(token: AccessToken, platform: Platform) -> Self {
        Self {
            token,
            platform,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            http_client: None,
        }
    }

    /// Override the platform base URL (e.g. a proxy or a mock server). The platform
    /// still decides which façades are available.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the whole-request timeout. Ignored when [`Self::http_client`] is used.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reuse a caller-configured HTTP client.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`SmsapiClient`].
    pub fn build(self) -> Result<SmsapiClient, SmsapiError> {
        let base_url = parse_base_url(
            self.base_url
                .as_deref()
                .unwrap_or_else(|| self.platform.base_url()),
        )?;

        let client = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| SmsapiError::Transport(Box::new(err)))?,
        };

        Ok(SmsapiClient::from_parts(
            base_url,
            &self.token,
            self.platform,
            Arc::new(ReqwestTransport { client }),
        )?)
    }
}

#[derive(Clone)]
/// High-level SMSAPI client.
///
/// Cheap to clone; clones share the underlying HTTP connection pool. Every call takes a
/// [`Context`] and performs exactly one HTTP round trip.
pub struct SmsapiClient {
    base_url: Url,
    authorization: HeaderValue,
    platform: Platform,
    http: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for SmsapiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsapiClient")
            .field("base_url", &self.base_url.as_str())
            .field("platform", &self.platform)
            .finish_non_exhaustive()
    }
}

impl SmsapiClient {
    /// Client for `https://api.smsapi.pl/` with the default timeout.
    pub fn poland(token: AccessToken) -> Result<Self, SmsapiError> {
        Self::builder(token, Platform::Poland).build()
    }

    /// Client for `https://api.smsapi.com/` with the default timeout.
    pub fn international(token: AccessToken) -> Result<Self, SmsapiError> {
        Self::builder(token, Platform::International).build()
    }

    pub fn builder(token: AccessToken, platform: Platform) -> SmsapiClientBuilder {
        SmsapiClientBuilder::new(token, platform)
    }

    fn from_parts(
        base_url: Url,
        token: &AccessToken,
        platform: Platform,
        http: Arc<dyn HttpTransport>,
    ) -> Result<Self, ValidationError> {
        let mut authorization =
            HeaderValue::from_str(&token.bearer()).map_err(|_| {
                ValidationError::InvalidCharacters {
                    field: AccessToken::FIELD,
                }
            })?;
        authorization.set_sensitive(true);
        Ok(Self {
            base_url,
            authorization,
            platform,
            http,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn sms(&self) -> SmsApi<'_> {
        SmsApi::new(self)
    }

    /// MMS façade; `None` on the international platform.
    pub fn mms(&self) -> Option<MmsApi<'_>> {
        (self.platform == Platform::Poland).then(|| MmsApi::new(self))
    }

    /// VMS façade; `None` on the international platform.
    pub fn vms(&self) -> Option<VmsApi<'_>> {
        (self.platform == Platform::Poland).then(|| VmsApi::new(self))
    }

    pub fn hlr(&self) -> HlrApi<'_> {
        HlrApi::new(self)
    }

    pub fn profile(&self) -> ProfileApi<'_> {
        ProfileApi::new(self)
    }

    pub fn subusers(&self) -> SubusersApi<'_> {
        SubusersApi::new(self)
    }

    pub fn contacts(&self) -> ContactsApi<'_> {
        ContactsApi::new(self)
    }

    pub fn senders(&self) -> SendersApi<'_> {
        SendersApi::new(self)
    }

    pub fn blacklist(&self) -> BlacklistApi<'_> {
        BlacklistApi::new(self)
    }

    pub fn short_url(&self) -> ShortUrlApi<'_> {
        ShortUrlApi::new(self)
    }

    /// `GET path`, decoding the JSON response into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<T, SmsapiError> {
        self.fetch(ctx, Method::GET, path, RequestBody::empty())
            .await
    }

    /// `POST path` with a JSON body.
    pub async fn post<T, B>(&self, ctx: &Context, path: &str, body: &B) -> Result<T, SmsapiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(ctx, Method::POST, path, json_body(body)?).await
    }

    /// `POST path` without a body.
    pub async fn post_empty<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<T, SmsapiError> {
        self.fetch(ctx, Method::POST, path, RequestBody::empty())
            .await
    }

    /// `PUT path` with a JSON body.
    pub async fn put<T, B>(&self, ctx: &Context, path: &str, body: &B) -> Result<T, SmsapiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.fetch(ctx, Method::PUT, path, json_body(body)?).await
    }

    /// `PUT path` without a body.
    pub async fn put_empty<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<T, SmsapiError> {
        self.fetch(ctx, Method::PUT, path, RequestBody::empty())
            .await
    }

    /// `DELETE path`; the response body is discarded after error classification.
    pub async fn delete(&self, ctx: &Context, path: &str) -> Result<(), SmsapiError> {
        self.call(ctx, Method::DELETE, path, RequestBody::empty())
            .await
    }

    /// Send `body` form-encoded with an arbitrary method.
    pub async fn urlencoded<T, B>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<T, SmsapiError>
    where
        T: DeserializeOwned,
        B: QueryFields + ?Sized,
    {
        self.fetch(ctx, method, path, RequestBody::form(body)).await
    }

    /// `GET` on a `*.do` endpoint; adds `format=json`.
    pub async fn legacy_get<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        path: &str,
    ) -> Result<T, SmsapiError> {
        let path = legacy_path(path)?;
        self.get(ctx, &path).await
    }

    /// `POST` a JSON body to a `*.do` endpoint; adds `format=json`.
    pub async fn legacy_post<T, B>(
        &self,
        ctx: &Context,
        path: &str,
        body: &B,
    ) -> Result<T, SmsapiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let path = legacy_path(path)?;
        self.post(ctx, &path, body).await
    }

    /// Round trip that discards the body of a successful response.
    async fn call(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<(), SmsapiError> {
        self.dispatch(ctx, method, path, body).await.map(drop)
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<T, SmsapiError> {
        let body = self.dispatch(ctx, method, path, body).await?;
        serde_json::from_slice(&body).map_err(|err| SmsapiError::Decode(Box::new(err)))
    }

    #[tracing::instrument(level = "debug", skip_all, fields(method = %method, path = path))]
    async fn dispatch(
        &self,
        ctx: &Context,
        method: Method,
        path: &str,
        body: RequestBody,
    ) -> Result<Vec<u8>, SmsapiError> {
        let url = self.resolve(path)?;

        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_static(body.content_type.as_str()),
        );
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        if ctx.is_cancelled() {
            return Err(SmsapiError::Cancelled);
        }

        debug!(%url, "sending request");
        let request = HttpRequest {
            method,
            url,
            headers,
            body: body.bytes,
        };
        let response = tokio::select! {
            biased;
            () = ctx.done() => return Err(SmsapiError::Cancelled),
            response = self.http.execute(request) => response.map_err(SmsapiError::Transport)?,
        };
        debug!(
            status = response.status,
            body_len = response.body.len(),
            "received response"
        );

        check_response(response.status, &response.body)?;
        Ok(response.body)
    }

    // The base URL always ends with `/`, so stripping the leading `/` appends to the base
    // path instead of replacing it.
    fn resolve(&self, path: &str) -> Result<Url, SmsapiError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

fn json_body<B: Serialize + ?Sized>(body: &B) -> Result<RequestBody, SmsapiError> {
    RequestBody::json(body).map_err(SmsapiError::Encode)
}

fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(raw)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
