//! In-memory transport for tests: replays queued responses, records requests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use super::{ApiClient, ApiError, HttpRequest, HttpResponse, Transport};
use crate::shared::api_utils::ApiConfig;

pub(crate) const TEST_BASE_URL: &str = "http://api.test";

#[derive(Default)]
pub(crate) struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, error: ApiError) {
        self.responses.borrow_mut().push_back(Err(error));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .borrow()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub fn last_body(&self) -> serde_json::Value {
        let request = self.last_request();
        let body = request.body.expect("request had no body");
        serde_json::from_str(&body).expect("request body is not JSON")
    }
}

#[async_trait(?Send)]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no response queued".into())))
    }
}

pub(crate) fn client_with(mock: &Rc<MockTransport>) -> ApiClient {
    ApiClient::new(ApiConfig::new(TEST_BASE_URL), mock.clone())
}
