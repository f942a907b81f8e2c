use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use reqwest::header::HeaderValue;

use super::{BoxError, BoxFuture, HttpRequest, HttpResponse, HttpTransport, Platform, SmsapiClient};

type Outcome = Result<(u16, String), String>;

/// In-memory transport: replays queued responses and records every request.
#[derive(Debug, Clone, Default)]
pub(super) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug, Default)]
struct FakeTransportState {
    outcomes: VecDeque<Outcome>,
    requests: Vec<HttpRequest>,
}

impl FakeTransport {
    pub(super) fn new() -> Self {
        Self::default()
    }

    /// Queue a response. With an empty queue the transport answers `200 {}`.
    pub(super) fn respond(&self, status: u16, body: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.outcomes.push_back(Ok((status, body.into())));
    }

    /// Queue a transport-level failure.
    pub(super) fn fail(&self, message: impl Into<String>) {
        let mut state = self.state.lock().unwrap();
        state.outcomes.push_back(Err(message.into()));
    }

    pub(super) fn calls(&self) -> usize {
        self.state.lock().unwrap().requests.len()
    }

    pub(super) fn requests(&self) -> Vec<HttpRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub(super) fn last_request(&self) -> HttpRequest {
        self.state
            .lock()
            .unwrap()
            .requests
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

impl HttpTransport for FakeTransport {
    fn execute(&self, request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
        Box::pin(async move {
            let outcome = {
                let mut state = self.state.lock().unwrap();
                state.requests.push(request);
                state
                    .outcomes
                    .pop_front()
                    .unwrap_or_else(|| Ok((200, "{}".to_owned())))
            };
            match outcome {
                Ok((status, body)) => Ok(HttpResponse {
                    status,
                    body: body.into_bytes(),
                }),
                Err(message) => Err(BoxError::from(message)),
            }
        })
    }
}

/// Transport whose requests never complete.
#[derive(Debug, Clone, Copy)]
pub(super) struct PendingTransport;

impl HttpTransport for PendingTransport {
    fn execute(&self, _request: HttpRequest) -> BoxFuture<'_, Result<HttpResponse, BoxError>> {
        Box::pin(std::future::pending())
    }
}

pub(super) fn make_client(transport: FakeTransport) -> SmsapiClient {
    make_client_with(transport, Platform::Poland, "https://api.smsapi.pl/")
}

pub(super) fn make_client_with(
    transport: FakeTransport,
    platform: Platform,
    base_url: &str,
) -> SmsapiClient {
    SmsapiClient {
        base_url: super::parse_base_url(base_url).unwrap(),
        authorization: HeaderValue::from_static("Bearer test-token"),
        platform,
        http: Arc::new(transport),
    }
}

impl HttpRequest {
    pub(super) fn query_pairs(&self) -> Vec<(String, String)> {
        self.url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub(super) fn path(&self) -> &str {
        self.url.path()
    }

    pub(super) fn json_body(&self) -> serde_json::Value {
        serde_json::from_slice(self.body.as_deref().expect("request has no body")).unwrap()
    }

    pub(super) fn form_body(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_deref().expect("request has no body"))
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    pub(super) fn content_type(&self) -> &str {
        self.headers[reqwest::header::CONTENT_TYPE].to_str().unwrap()
    }
}

pub(super) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
    assert!(
        params.iter().any(|(k, v)| k == key && v == value),
        "missing param {key}={value}; got: {params:?}"
    );
}
