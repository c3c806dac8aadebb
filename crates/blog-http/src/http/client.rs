//! REST HTTP client implementation.

use std::time::Duration;

use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use blog_core::ApiUrl;
use blog_core::error::{Error, ProtocolError, TransportError};

use super::endpoints::DetailResponse;

/// Timeout applied to every request unless configured otherwise.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest raw error body kept as protocol error detail.
const MAX_DETAIL_LEN: usize = 200;

/// HTTP client for the blog REST endpoints.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    api: ApiUrl,
}

impl HttpClient {
    /// Create a new client for the given API base URL.
    pub fn new(api: ApiUrl, timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("blogdesk/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(transport_error)?;

        Ok(Self { client, api })
    }

    /// Returns the API URL this client is configured for.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// GET a JSON document.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn get<Q, R>(&self, url: &str, query: &Q) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%url, "GET");
        trace!(?query, "query parameters");

        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// Send a JSON body (POST or PUT) and parse the JSON answer.
    #[instrument(skip(self, body), fields(api = %self.api))]
    pub async fn send<B, R>(&self, method: Method, url: &str, body: &B) -> Result<R, Error>
    where
        B: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        debug!(%method, %url, "sending JSON body");
        trace!(?body, "request body");

        let response = self
            .client
            .request(method, url)
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        self.handle_response(response).await
    }

    /// DELETE a resource. Any response body is ignored.
    #[instrument(skip(self), fields(api = %self.api))]
    pub async fn delete(&self, url: &str) -> Result<(), Error> {
        debug!(%url, "DELETE");

        let response = self
            .client
            .delete(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            Ok(())
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Handle a response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "response");

        if status.is_success() {
            response.json::<R>().await.map_err(transport_error)
        } else {
            Err(Error::Protocol(self.parse_error_response(response).await))
        }
    }

    /// Parse an error response into a protocol error.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();

        ProtocolError::new(status, error_detail(&body))
    }
}

/// Extract a human-readable detail from an error body.
///
/// Prefers a `{"detail": ...}` field and falls back to the trimmed raw body.
fn error_detail(body: &str) -> Option<String> {
    if let Ok(parsed) = serde_json::from_str::<DetailResponse>(body) {
        return Some(parsed.detail);
    }

    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    Some(body.chars().take(MAX_DETAIL_LEN).collect())
}

fn transport_error(err: reqwest::Error) -> Error {
    let err = if err.is_timeout() {
        TransportError::Timeout
    } else if err.is_connect() {
        TransportError::Connection {
            message: err.to_string(),
        }
    } else if err.is_decode() {
        TransportError::Decode {
            message: err.to_string(),
        }
    } else {
        TransportError::Http {
            message: err.to_string(),
        }
    };
    Error::Transport(err)
}
