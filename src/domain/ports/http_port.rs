//! Request/response transport port.

use async_trait::async_trait;
use bytes::Bytes;

use crate::domain::errors::RequestError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// Request against a route relative to the API base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// Raw response; the body is decoded by the caller.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Bytes,
}

impl HttpResponse {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }
}

/// Port for executing HTTP requests.
#[async_trait]
pub trait HttpPort: Send + Sync {
    /// Executes a request. Only transport failures are errors; any status code
    /// is returned as a response.
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError>;
}
