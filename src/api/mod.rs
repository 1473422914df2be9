//! Authenticated HTTP layer for the task service API.
//!
//! Everything the client sends goes through [`AuthTransport::send`], which
//! attaches the bearer credential obtained from a [`TokenProvider`] and
//! normalizes the response into a [`RequestOutcome`]. The transport holds no
//! shared state and performs no retries; failure policy belongs to the sync
//! engine.
//!
//! ## Features
//!
//! - **Token Attachment**: A fresh token is fetched from the provider before
//!   every call; a missing token fails fast with `Unauthenticated` without
//!   touching the network
//! - **Status Interpretation**: 2xx → `Success`, 401 → `Unauthenticated`
//!   regardless of body, anything else → `Failed` with the server's
//!   `detail` text when one is present
//! - **Injected Configuration**: Base URL and token provider are
//!   constructor arguments, never ambient globals, so the layer is fully
//!   testable in isolation

use crate::msg_debug;
use reqwest::{header, Client, Method, StatusCode};
use serde_json::Value;

pub mod tasks;

// Re-export the typed client surface for easier access from other modules
pub use tasks::{ApiError, TaskClient, TaskRepository};

/// Detail string reported when the server could not be reached at all.
pub const NETWORK_FAILURE_DETAIL: &str = "network error";

/// Synthetic status used for network-level failures (no HTTP response).
pub const NETWORK_FAILURE_STATUS: u16 = 0;

/// Source of the bearer credential attached to every request.
///
/// The production implementation is `libs::session::SessionStore`; tests
/// substitute fixed or absent tokens. `None` means "no session" and causes
/// the transport to fail fast without a network call.
pub trait TokenProvider {
    fn token(&self) -> Option<String>;
}

/// Normalized result of a single HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestOutcome {
    /// 2xx response; the parsed JSON body, or `None` for empty bodies
    /// (e.g. a 204 from DELETE).
    Success(Option<Value>),
    /// Missing token, or the server answered 401 regardless of body.
    Unauthenticated,
    /// Any other non-2xx status, or a network-level failure
    /// (`status` = [`NETWORK_FAILURE_STATUS`]).
    Failed { status: u16, detail: String },
}

/// HTTP transport that authenticates every outbound request.
pub struct AuthTransport<P> {
    /// HTTP client with connection pooling
    client: Client,
    /// Base URL of the task service, without trailing slash
    api_url: String,
    /// Bearer-token source, consulted fresh per request
    tokens: P,
}

impl<P: TokenProvider> AuthTransport<P> {
    pub fn new(api_url: &str, tokens: P) -> Self {
        // Session cookies ride along for continuity with the identity
        // provider; the bearer header stays the primary credential.
        let client = Client::builder().cookie_store(true).build().unwrap_or_default();
        Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            tokens,
        }
    }

    /// Sends one authenticated request and interprets the response.
    ///
    /// The endpoint is an absolute path such as `/api/v1/tasks`. A JSON
    /// content type is always attached; `body` is serialized as is when
    /// present. This method never mutates shared state and never panics on
    /// server misbehavior; every outcome is folded into [`RequestOutcome`].
    pub async fn send(&self, method: Method, endpoint: &str, body: Option<Value>) -> RequestOutcome {
        // No session means no network call at all
        let Some(token) = self.tokens.token() else {
            return RequestOutcome::Unauthenticated;
        };

        let url = format!("{}{}", self.api_url, endpoint);
        let mut request = self
            .client
            .request(method, &url)
            .bearer_auth(token)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            request = request.json(&body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                msg_debug!("request to {} failed: {}", url, err);
                return RequestOutcome::Failed {
                    status: NETWORK_FAILURE_STATUS,
                    detail: NETWORK_FAILURE_DETAIL.to_string(),
                };
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return RequestOutcome::Unauthenticated;
        }

        // Bodies are optional: DELETE succeeds with no content, and error
        // responses are not guaranteed to be JSON.
        let body = response.json::<Value>().await.ok();
        if status.is_success() {
            return RequestOutcome::Success(body);
        }

        RequestOutcome::Failed {
            status: status.as_u16(),
            detail: error_detail(body.as_ref()),
        }
    }
}

/// Extracts the server's `{"detail": "..."}` error text when present.
///
/// Returns an empty string otherwise; the sync engine substitutes its own
/// per-operation fallback message for empty details.
pub fn error_detail(body: Option<&Value>) -> String {
    body.and_then(|value| value.get("detail"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}
