use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::transport::{default_transport, HttpRequest, HttpResponse, Method, Transport};
use super::ApiError;
use crate::shared::api_utils::ApiConfig;

const CONTENT_TYPE: &str = "Content-Type";
const AUTHORIZATION: &str = "Authorization";
const JSON: &str = "application/json";

/// Per-request options: caller headers, bearer token, body and query.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    headers: Vec<(String, String)>,
    token: Option<String>,
    body: Option<String>,
    query: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a header. Overrides a default header with the same name.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Authenticate with `Authorization: Bearer <token>`. Blank tokens are ignored.
    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() { None } else { Some(token) };
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<B: Serialize + ?Sized>(self, payload: &B) -> Result<Self, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(self.body(body))
    }

    pub fn query<Q: Serialize>(mut self, query: &Q) -> Result<Self, ApiError> {
        let encoded = serde_qs::to_string(query).map_err(|e| ApiError::Encode(e.to_string()))?;
        self.query = if encoded.is_empty() { None } else { Some(encoded) };
        Ok(self)
    }
}

/// JSON client for the sales API.
///
/// Stateless apart from its configuration; cloning shares the transport.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    transport: Rc<dyn Transport>,
}

impl ApiClient {
    pub fn new(config: ApiConfig, transport: Rc<dyn Transport>) -> Self {
        Self { config, transport }
    }

    /// Client for the configured backend using the target's default transport.
    pub fn from_env() -> Self {
        Self::new(ApiConfig::from_env(), default_transport())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Send a request and decode the JSON response body as `T`.
    ///
    /// Fails with [`ApiError::Http`] on any non-2xx status. The body is only
    /// checked for being valid JSON of shape `T`.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, ApiError> {
        let response = self.execute(method, path, options).await?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Send a request and only check the status. Used where no payload comes back.
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, ApiError> {
        let request = self.prepare(method, path, options);
        log::trace!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(ApiError::from_response(response.status, &response.body));
        }
        Ok(response)
    }

    fn prepare(&self, method: Method, path: &str, options: RequestOptions) -> HttpRequest {
        let mut url = self.config.url(path);
        if let Some(query) = &options.query {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(query);
        }

        let mut defaults = vec![(CONTENT_TYPE.to_string(), JSON.to_string())];
        if let Some(token) = &options.token {
            defaults.push((AUTHORIZATION.to_string(), format!("Bearer {}", token)));
        }

        HttpRequest {
            method,
            url,
            headers: merge_headers(defaults, options.headers),
            body: options.body,
        }
    }
}

/// Defaults first, then caller headers; a caller header replaces a default
/// with the same (case-insensitive) name.
fn merge_headers(
    defaults: Vec<(String, String)>,
    overrides: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .into_iter()
        .filter(|(name, _)| !overrides.iter().any(|(o, _)| o.eq_ignore_ascii_case(name)))
        .collect();
    merged.extend(overrides);
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::mock::{client_with, MockTransport};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Ping {
        ok: bool,
    }

    #[tokio::test]
    async fn test_success_parses_json() {
        let mock = MockTransport::new();
        mock.respond(200, r#"{"ok":true}"#);
        let client = client_with(&mock);

        let ping: Ping = client
            .request(Method::Get, "/ping", RequestOptions::new())
            .await
            .unwrap();
        assert_eq!(ping, Ping { ok: true });

        let request = mock.last_request();
        assert_eq!(request.url, "http://api.test/ping");
        assert_eq!(request.header("content-type"), Some("application/json"));
        assert_eq!(request.header("authorization"), None);
    }

    #[tokio::test]
    async fn test_non_2xx_rejects_with_body_text() {
        let mock = MockTransport::new();
        mock.respond(409, "code already exists");
        let client = client_with(&mock);

        let err = client
            .request::<Ping>(Method::Post, "/api/brands", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Http {
                status: 409,
                message: "code already exists".into()
            }
        );
    }

    #[tokio::test]
    async fn test_empty_error_body_uses_default_message() {
        let mock = MockTransport::new();
        mock.respond(502, "");
        let client = client_with(&mock);

        let err = client
            .execute(Method::Delete, "/api/units/1", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[tokio::test]
    async fn test_malformed_json_is_decode_error() {
        let mock = MockTransport::new();
        mock.respond(200, "<html>oops</html>");
        let client = client_with(&mock);

        let err = client
            .request::<Ping>(Method::Get, "/ping", RequestOptions::new())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_network_failure_passes_through() {
        let mock = MockTransport::new();
        mock.fail(ApiError::Network("connection refused".into()));
        let client = client_with(&mock);

        let err = client
            .request::<Ping>(Method::Get, "/ping", RequestOptions::new())
            .await
            .unwrap_err();
        assert_eq!(err, ApiError::Network("connection refused".into()));
    }

    #[tokio::test]
    async fn test_headers_bearer_and_body() {
        let mock = MockTransport::new();
        mock.respond(201, r#"{"ok":true}"#);
        let client = client_with(&mock);

        let options = RequestOptions::new()
            .bearer("tok")
            .header("content-type", "text/plain")
            .header("X-Trace", "abc")
            .body("hello");
        let _: Ping = client.request(Method::Put, "/echo", options).await.unwrap();

        let request = mock.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.header("Content-Type"), Some("text/plain"));
        assert_eq!(request.header("Authorization"), Some("Bearer tok"));
        assert_eq!(request.header("x-trace"), Some("abc"));
        assert_eq!(request.body.as_deref(), Some("hello"));
        let content_types = request
            .headers
            .iter()
            .filter(|(n, _)| n.eq_ignore_ascii_case("content-type"))
            .count();
        assert_eq!(content_types, 1);
    }

    #[tokio::test]
    async fn test_blank_token_sends_no_authorization() {
        let mock = MockTransport::new();
        mock.respond(204, "");
        let client = client_with(&mock);

        client
            .execute(Method::Post, "/auth/logout", RequestOptions::new().bearer("  "))
            .await
            .unwrap();
        assert_eq!(mock.last_request().header("authorization"), None);
    }

    #[tokio::test]
    async fn test_query_is_appended() {
        #[derive(Serialize)]
        struct Query {
            skip: u32,
            limit: u32,
        }

        let mock = MockTransport::new();
        mock.respond(200, r#"{"ok":false}"#);
        let client = client_with(&mock);

        let options = RequestOptions::new()
            .query(&Query { skip: 20, limit: 10 })
            .unwrap();
        let _: Ping = client.request(Method::Get, "/products/", options).await.unwrap();
        assert_eq!(
            mock.last_request().url,
            "http://api.test/products/?skip=20&limit=10"
        );
    }
}
