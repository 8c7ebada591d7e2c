//! HTTP client for the Spark API.
//!
//! [`SparkClient`] owns the transport and credentials; each resource is
//! reached through a borrowed sub-client (`client.rooms()`, ...). Every call
//! builds a complete [`reqwest::Request`] first so verbose mode can print it
//! before it is sent.

pub mod licenses;
pub mod memberships;
pub mod messages;
pub mod organizations;
pub mod people;
pub mod roles;
pub mod rooms;
pub mod team_memberships;
pub mod teams;
pub mod webhooks;

use reqwest::header::ACCEPT;
use reqwest::{Method, Request, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use sparkctl_core::models::ItemList;

use crate::error::{ClientError, Result};
use crate::output::trace::{self, TraceSink};

/// Connection settings for [`SparkClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    pub token: String,
    /// Accept invalid TLS certificates.
    pub insecure: bool,
    /// Where to print each outgoing request; `None` disables tracing.
    pub trace: Option<TraceSink>,
}

/// HTTP client for the Spark API.
#[derive(Debug, Clone)]
pub struct SparkClient {
    client: reqwest::Client,
    base_url: Url,
    token: String,
    trace: Option<TraceSink>,
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiErrorBody {
    message: Option<String>,
    tracking_id: Option<String>,
}

impl SparkClient {
    /// Create a new client from the given settings.
    ///
    /// Fails with [`ClientError::InvalidUrl`] when the base URL cannot carry
    /// path segments.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let raw = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(raw)
            .map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(raw.to_string()));
        }

        let client = reqwest::Client::builder()
            .user_agent(concat!("sparkctl/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(config.insecure)
            .build()?;
        if config.insecure {
            tracing::warn!("TLS certificate verification is disabled");
        }

        Ok(Self {
            client,
            base_url,
            token: config.token,
            trace: config.trace,
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    pub fn rooms(&self) -> rooms::Rooms<'_> {
        rooms::Rooms { client: self }
    }

    pub fn messages(&self) -> messages::Messages<'_> {
        messages::Messages { client: self }
    }

    pub fn memberships(&self) -> memberships::Memberships<'_> {
        memberships::Memberships { client: self }
    }

    pub fn teams(&self) -> teams::Teams<'_> {
        teams::Teams { client: self }
    }

    pub fn team_memberships(&self) -> team_memberships::TeamMemberships<'_> {
        team_memberships::TeamMemberships { client: self }
    }

    pub fn people(&self) -> people::People<'_> {
        people::People { client: self }
    }

    pub fn organizations(&self) -> organizations::Organizations<'_> {
        organizations::Organizations { client: self }
    }

    pub fn roles(&self) -> roles::Roles<'_> {
        roles::Roles { client: self }
    }

    pub fn licenses(&self) -> licenses::Licenses<'_> {
        licenses::Licenses { client: self }
    }

    pub fn webhooks(&self) -> webhooks::Webhooks<'_> {
        webhooks::Webhooks { client: self }
    }

    /// Build the URL for an endpoint below the base URL.
    ///
    /// Each segment is percent-encoded on its own, so an ID can never add
    /// path segments, a query or a fragment.
    fn url(&self, segments: &[&str]) -> Result<Url> {
        if let Some(bad) = segments.iter().find(|s| matches!(**s, "" | "." | "..")) {
            return Err(ClientError::InvalidUrl(format!("bad path segment {bad:?}")));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Start an authenticated request.
    fn request(&self, method: Method, segments: &[&str]) -> Result<RequestBuilder> {
        Ok(self
            .client
            .request(method, self.url(segments)?)
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json"))
    }

    /// Send a built request, tracing it first in verbose mode.
    async fn execute(&self, request: Request) -> Result<Response> {
        if let Some(sink) = &self.trace {
            sink.write(&trace::format_request(&request))?;
        }
        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.client.execute(request).await?;

        tracing::debug!(status = %response.status(), "received response");
        Ok(response)
    }

    /// Send a request and decode a single record.
    async fn fetch<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.execute(request).await?;
        self.handle_response(response).await
    }

    /// Send a request and unwrap the `items` of a list response.
    async fn fetch_list<T: DeserializeOwned>(&self, request: Request) -> Result<Vec<T>> {
        self.fetch::<ItemList<T>>(request)
            .await
            .map(ItemList::into_items)
    }

    /// Send a request that answers without a body and return its status code.
    async fn fetch_status(&self, request: Request) -> Result<u16> {
        let response = self.execute(request).await?;
        let status = response.status();
        if status.is_success() {
            Ok(status.as_u16())
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Handle error responses.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        if response.status().is_success() {
            response.json().await.map_err(ClientError::from)
        } else {
            Err(Self::api_error(response).await)
        }
    }

    /// Turn a non-2xx response into [`ClientError::Api`].
    async fn api_error(response: Response) -> ClientError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let (message, tracking_id) = parse_error_body(&body, status.canonical_reason());

        tracing::debug!(status = status.as_u16(), tracking_id = ?tracking_id, "request failed");
        ClientError::Api {
            status: status.as_u16(),
            message,
            tracking_id,
        }
    }
}

/// Extract the message and tracking ID from an error body.
///
/// Falls back to the raw body, then to the status reason.
fn parse_error_body(body: &str, reason: Option<&str>) -> (String, Option<String>) {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = parsed.message.filter(|m| !m.is_empty()) {
            return (message, parsed.tracking_id);
        }
        if parsed.tracking_id.is_some() {
            let message = reason.unwrap_or("Unknown error").to_string();
            return (message, parsed.tracking_id);
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        (reason.unwrap_or("Unknown error").to_string(), None)
    } else {
        (trimmed.to_string(), None)
    }
}

/// Treats an empty flag value the same as an absent one.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn test_client() -> SparkClient {
        SparkClient::new(ClientConfig {
            base_url: "https://api.example.com/v1/".to_string(),
            token: "test-token".to_string(),
            insecure: false,
            trace: None,
        })
        .unwrap()
    }

    pub(crate) fn body_json(request: &Request) -> serde_json::Value {
        let bytes = request
            .body()
            .and_then(|body| body.as_bytes())
            .expect("request has a buffered body");
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_base_url_must_carry_paths() {
        for base_url in ["not a url", "mailto:ops@example.com"] {
            let err = SparkClient::new(ClientConfig {
                base_url: base_url.to_string(),
                token: "t".to_string(),
                insecure: false,
                trace: None,
            })
            .unwrap_err();
            assert!(matches!(err, ClientError::InvalidUrl(_)));
        }
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        assert_eq!(test_client().base_url(), "https://api.example.com/v1");
    }

    #[test]
    fn test_requests_carry_bearer_token() {
        let request = test_client()
            .request(Method::GET, &["people", "me"])
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.url().as_str(), "https://api.example.com/v1/people/me");
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer test-token"
        );
        assert_eq!(request.headers().get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_parse_error_body_variants() {
        assert_eq!(
            parse_error_body(
                r#"{"message":"Room not found","trackingId":"ROUTER_1"}"#,
                Some("Not Found")
            ),
            ("Room not found".to_string(), Some("ROUTER_1".to_string()))
        );
        assert_eq!(
            parse_error_body("upstream timeout", Some("Bad Gateway")),
            ("upstream timeout".to_string(), None)
        );
        assert_eq!(
            parse_error_body("", Some("Unauthorized")),
            ("Unauthorized".to_string(), None)
        );
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
        assert_eq!(non_empty(None), None);
    }
}
