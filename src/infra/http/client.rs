//! Thin wrapper over `reqwest` for the Photowall backend API.
//!
//! Every request goes to `<base-url><path>`, carries the stored session
//! cookies, and defaults to a JSON content type. Status codes are left to the
//! caller.

use std::sync::Arc;
use std::time::Instant;

use metrics::{counter, histogram};
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::Form;
use reqwest::{Client, Method, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::config::ApiSettings;

pub const METRIC_API_REQUESTS_TOTAL: &str = "photowall_api_requests_total";
pub const METRIC_API_TRANSPORT_ERRORS_TOTAL: &str = "photowall_api_transport_errors_total";
pub const METRIC_API_REQUEST_MS: &str = "photowall_api_request_ms";

const JSON_CONTENT_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("failed to build http client: {0}")]
    Build(reqwest::Error),
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("failed to encode request body: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Body of an outgoing request.
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Json(Vec<u8>),
    Text(String),
    /// Sent with its own multipart boundary content type.
    Multipart(Form),
}

/// Per-request overrides merged on top of the client defaults.
#[derive(Debug)]
pub struct RequestOptions {
    method: Method,
    headers: HeaderMap,
    body: RequestBody,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    pub fn new(method: Method) -> Self {
        Self {
            method,
            headers: HeaderMap::new(),
            body: RequestBody::Empty,
        }
    }

    pub fn get() -> Self {
        Self::new(Method::GET)
    }

    pub fn post() -> Self {
        Self::new(Method::POST)
    }

    pub fn put() -> Self {
        Self::new(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::new(Method::DELETE)
    }

    pub fn json<T: Serialize + ?Sized>(mut self, value: &T) -> Result<Self, ClientError> {
        self.body = RequestBody::Json(serde_json::to_vec(value)?);
        Ok(self)
    }

    #[must_use]
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Text(body.into());
        self
    }

    #[must_use]
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Replace any default or previously set value for `name`.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }
}

/// Shared handle to the backend API.
///
/// Cloning is cheap; clones share the connection pool and the cookie jar.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Arc<str>,
    jar: Arc<Jar>,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> Result<Self, ClientError> {
        let jar = Arc::new(Jar::default());
        let http = Client::builder()
            .user_agent(settings.user_agent.clone())
            .cookie_provider(Arc::clone(&jar))
            .build()
            .map_err(ClientError::Build)?;
        let base: Arc<str> = Arc::from(settings.base_url.as_str().trim_end_matches('/'));

        Ok(Self { http, base, jar })
    }

    pub fn base_url(&self) -> &str {
        &self.base
    }

    /// Resolve `path` against the base URL by plain concatenation so the base
    /// path prefix (e.g. `/api`) is kept.
    pub fn url(&self, path: &str) -> Result<Url, ClientError> {
        Url::parse(&format!("{}{path}", self.base)).map_err(ClientError::Url)
    }

    /// Seed the jar with a `name=value` session cookie for the API origin.
    pub fn add_session_cookie(&self, cookie: &str) -> Result<(), ClientError> {
        let url = Url::parse(&self.base)?;
        self.jar.add_cookie_str(cookie, &url);
        Ok(())
    }

    /// Cookie header the next API request would carry, if any.
    pub fn session_cookie(&self) -> Option<String> {
        let url = self.url("/").ok()?;
        let value = self.jar.cookies(&url)?;
        value.to_str().ok().map(str::to_string)
    }

    /// Issue a single request and hand back the raw response.
    #[instrument(
        name = "api_fetch",
        skip(self, options),
        fields(method = %options.method, path = %path)
    )]
    pub async fn fetch(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<Response, ClientError> {
        let url = self.url(path)?;
        let RequestOptions {
            method,
            headers: overrides,
            body,
        } = options;

        let mut headers = default_headers(&body);
        headers.extend(overrides);

        let mut request = self.http.request(method.clone(), url).headers(headers);
        request = match body {
            RequestBody::Empty => request,
            RequestBody::Json(bytes) => request.body(bytes),
            RequestBody::Text(text) => request.body(text),
            RequestBody::Multipart(form) => request.multipart(form),
        };

        let started = Instant::now();
        match request.send().await {
            Ok(response) => {
                let status = response.status();
                counter!(
                    METRIC_API_REQUESTS_TOTAL,
                    "method" => method.to_string(),
                    "status" => status.as_u16().to_string()
                )
                .increment(1);
                histogram!(METRIC_API_REQUEST_MS)
                    .record(started.elapsed().as_secs_f64() * 1000.0);
                debug!(status = status.as_u16(), "api response");
                Ok(response)
            }
            Err(err) => {
                counter!(METRIC_API_TRANSPORT_ERRORS_TOTAL, "method" => method.to_string())
                    .increment(1);
                warn!(error = %err, "api request failed");
                Err(ClientError::Transport(err))
            }
        }
    }
}

fn default_headers(body: &RequestBody) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if !matches!(body, RequestBody::Multipart(_)) {
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
    }
    headers
}

#[cfg(test)]
mod tests {
    use httpmock::MockServer;
    use reqwest::StatusCode;

    use super::*;

    fn client(server: &MockServer) -> ApiClient {
        let base = Url::parse(&format!("{}/api", server.base_url())).expect("base url");
        ApiClient::new(&ApiSettings::with_base_url(base)).expect("client")
    }

    #[test]
    fn url_keeps_base_path_prefix() {
        let base = Url::parse("http://localhost:8080/api/").expect("base url");
        let client = ApiClient::new(&ApiSettings::with_base_url(base)).expect("client");
        assert_eq!(
            client.url("/admin/posts").expect("url").as_str(),
            "http://localhost:8080/api/admin/posts"
        );
    }

    #[tokio::test]
    async fn defaults_to_json_content_type() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/posts")
                .header("content-type", "application/json");
            then.status(200).body("[]");
        });

        let resp = client(&server).fetch("/posts", RequestOptions::get()).await?;
        assert_eq!(resp.status(), StatusCode::OK);
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn caller_headers_replace_defaults() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST")
                .path("/api/echo")
                .header("content-type", "text/plain")
                .body("hello");
            then.status(204);
        });

        let options = RequestOptions::post()
            .text("hello")
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        client(&server).fetch("/echo", options).await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn json_body_is_sent_verbatim() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("PUT")
                .path("/api/admin/posts/a/status")
                .json_body(serde_json::json!({"status": "draft"}));
            then.status(200);
        });

        let options = RequestOptions::put().json(&serde_json::json!({"status": "draft"}))?;
        client(&server)
            .fetch("/admin/posts/a/status", options)
            .await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn non_success_status_is_returned_untouched() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/api/admin/posts");
            then.status(500).body("boom");
        });

        let resp = client(&server)
            .fetch("/admin/posts", RequestOptions::get())
            .await?;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(resp.text().await?, "boom");
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn seeded_session_cookie_is_sent() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET")
                .path("/api/me")
                .header("cookie", "session=abc");
            then.status(200);
        });

        let client = client(&server);
        client.add_session_cookie("session=abc")?;
        client.fetch("/me", RequestOptions::get()).await?;
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn response_cookies_are_stored_for_later_requests() -> Result<(), ClientError> {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("POST").path("/api/login");
            then.status(200)
                .header("set-cookie", "session=xyz; Path=/; HttpOnly");
        });

        let client = client(&server);
        assert!(client.session_cookie().is_none());
        client.fetch("/login", RequestOptions::post()).await?;
        assert_eq!(client.session_cookie().as_deref(), Some("session=xyz"));
        mock.assert();
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_is_reported() {
        let base = Url::parse("http://127.0.0.1:9/api").expect("base url");
        let client = ApiClient::new(&ApiSettings::with_base_url(base)).expect("client");

        let err = client
            .fetch("/posts", RequestOptions::get())
            .await
            .expect_err("nothing listens on the discard port");
        assert!(matches!(err, ClientError::Transport(_)));
    }
}
