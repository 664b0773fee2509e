//! Remote server HTTP client.

use async_trait::async_trait;
use reqwest::{Client, Method};
use tracing::{debug, warn};

use crate::domain::errors::RequestError;
use crate::domain::ports::{HttpMethod, HttpPort, HttpRequest, HttpResponse};

const USER_AGENT: &str = concat!("bravia-remote/", env!("CARGO_PKG_VERSION"));

/// Builds the `reqwest` client shared by every adapter.
///
/// No request timeout is set; the transport defaults apply.
///
/// # Errors
/// Returns error if HTTP client creation fails.
pub fn build_client() -> Result<Client, RequestError> {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| RequestError::transport(format!("failed to create HTTP client: {e}")))
}

/// Maps a `reqwest` failure to a transport error.
pub(crate) fn transport_error(e: &reqwest::Error) -> RequestError {
    if e.is_timeout() {
        RequestError::transport("request timed out")
    } else if e.is_connect() {
        RequestError::transport("failed to connect to the remote server")
    } else {
        RequestError::transport(e.to_string())
    }
}

/// [`HttpPort`] adapter for the remote server's `/api` routes.
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Wraps `client` for `base_url`, the API root (`http://host:port/api`).
    #[must_use]
    pub fn from_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl HttpPort for HttpClient {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let url = self.url(&request.path);
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        };

        debug!(%url, %method, "Executing HTTP request");

        let mut builder = self.client.request(method, &url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(error = %e, %url, "Failed to reach remote server");
            transport_error(&e)
        })?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(|e| {
            warn!(error = %e, %url, "Failed to read response body");
            transport_error(&e)
        })?;

        debug!(%url, status, bytes = body.len(), "Received HTTP response");

        Ok(HttpResponse { status, body })
    }
}
