//! Uniform request/response wrapper.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::domain::NotificationKind;
use crate::domain::errors::RequestError;
use crate::domain::ports::{HttpMethod, HttpPort, HttpRequest, HttpResponse, NotificationPort};

const CONTENT_TYPE: &str = "Content-Type";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Method, extra headers and body of one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestOptions {
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::get()
    }
}

impl RequestOptions {
    #[must_use]
    pub const fn get() -> Self {
        Self {
            method: HttpMethod::Get,
            headers: Vec::new(),
            body: None,
        }
    }

    /// POST with a JSON body.
    ///
    /// # Errors
    /// Returns `RequestError::Decode` if `body` cannot be serialized.
    pub fn post(body: &impl Serialize) -> Result<Self, RequestError> {
        let body = serde_json::to_value(body)
            .map_err(|e| RequestError::decode(format!("failed to encode request body: {e}")))?;

        Ok(Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: Some(body),
        })
    }

    /// POST without a body.
    #[must_use]
    pub const fn post_empty() -> Self {
        Self {
            method: HttpMethod::Post,
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

#[derive(serde::Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Executes API calls and reports every failure to the user before returning
/// it to the caller.
pub struct ApiGateway {
    http: Arc<dyn HttpPort>,
    notifier: Arc<dyn NotificationPort>,
}

impl ApiGateway {
    #[must_use]
    pub fn new(http: Arc<dyn HttpPort>, notifier: Arc<dyn NotificationPort>) -> Self {
        Self { http, notifier }
    }

    #[must_use]
    pub fn notifier(&self) -> &Arc<dyn NotificationPort> {
        &self.notifier
    }

    /// Calls `endpoint` and returns the parsed JSON body.
    ///
    /// # Errors
    /// Returns `RequestError` on transport failure, non-success status or an
    /// undecodable body. The error has already been shown to the user.
    pub async fn call(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        self.call_as(endpoint, options).await
    }

    /// Calls `endpoint` and decodes the body into `T`.
    ///
    /// # Errors
    /// Same as [`ApiGateway::call`], plus `RequestError::Decode` when the body
    /// does not match `T`.
    pub async fn call_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let result = self.execute(endpoint, options).await.and_then(|value| {
            serde_json::from_value(value)
                .map_err(|e| RequestError::decode(format!("unexpected response shape: {e}")))
        });

        if let Err(error) = &result {
            warn!(endpoint, error = %error, "API call failed");
            self.notifier
                .notify(&error.user_message(), NotificationKind::Error);
        }

        result
    }

    async fn execute(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        let request = HttpRequest {
            method: options.method,
            path: endpoint.to_string(),
            headers: merge_headers(&[(CONTENT_TYPE, JSON_CONTENT_TYPE)], options.headers),
            body: options.body.map(|body| body.to_string()),
        };

        debug!(endpoint, method = ?request.method, "Sending API request");

        let response = self.http.execute(request).await?;
        interpret_response(&response)
    }
}

/// Defaults first, caller headers override defaults with the same name.
fn merge_headers(
    defaults: &[(&str, &str)],
    custom: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut merged: Vec<(String, String)> = defaults
        .iter()
        .filter(|(name, _)| {
            !custom
                .iter()
                .any(|(custom_name, _)| custom_name.eq_ignore_ascii_case(name))
        })
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect();
    merged.extend(custom);
    merged
}

fn interpret_response(response: &HttpResponse) -> Result<Value, RequestError> {
    let parsed = if response.body.iter().all(u8::is_ascii_whitespace) {
        Ok(Value::Null)
    } else {
        serde_json::from_slice::<Value>(&response.body)
    };

    if response.is_success() {
        return parsed.map_err(|e| RequestError::decode(e.to_string()));
    }

    let message = parsed
        .ok()
        .and_then(|value| serde_json::from_value::<ErrorBody>(value).ok())
        .and_then(|body| body.error);

    Err(RequestError::rejected(response.status, message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::GENERIC_FAILURE_MESSAGE;
    use crate::domain::ports::mocks::{MockHttpPort, MockNotificationPort};
    use serde_json::json;
    use tokio_test::{assert_err, assert_ok};

    fn gateway() -> (ApiGateway, Arc<MockHttpPort>, Arc<MockNotificationPort>) {
        let http = Arc::new(MockHttpPort::new());
        let notifier = Arc::new(MockNotificationPort::new());
        let gateway = ApiGateway::new(http.clone(), notifier.clone());
        (gateway, http, notifier)
    }

    #[tokio::test]
    async fn test_success_returns_parsed_body() {
        let (gateway, http, notifier) = gateway();
        http.respond("/apps", 200, r#"{"success": true, "data": []}"#);

        let value = assert_ok!(gateway.call("/apps", RequestOptions::get()).await);

        assert_eq!(value["data"], json!([]));
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_post_sends_json_body_and_content_type() {
        let (gateway, http, _) = gateway();
        let options = RequestOptions::post(&json!({ "uri": "tv:dvbt" })).unwrap();

        gateway.call("/inputs/select", options).await.unwrap();

        let request = &http.requests_to("/inputs/select")[0];
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body.as_deref(), Some(r#"{"uri":"tv:dvbt"}"#));
        assert_eq!(
            request.headers,
            vec![("Content-Type".to_string(), "application/json".to_string())]
        );
    }

    #[tokio::test]
    async fn test_rejection_surfaces_server_message() {
        let (gateway, http, notifier) = gateway();
        http.respond("/ircc/send", 500, r#"{"error": "X"}"#);

        let error = gateway
            .call("/ircc/send", RequestOptions::post_empty())
            .await
            .unwrap_err();

        assert_eq!(
            error,
            RequestError::Rejected {
                status: 500,
                message: "X".to_string()
            }
        );
        let messages = notifier.messages();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].0.contains('X'));
        assert_eq!(messages[0].1, NotificationKind::Error);
    }

    #[tokio::test]
    async fn test_rejection_without_error_body_is_generic() {
        let (gateway, http, notifier) = gateway();
        http.respond("/apps", 503, "");

        let error = gateway.call("/apps", RequestOptions::get()).await.unwrap_err();

        assert_eq!(error.to_string(), GENERIC_FAILURE_MESSAGE);
        assert_eq!(notifier.messages()[0].0, "Error: Request failed");
    }

    #[tokio::test]
    async fn test_rejection_with_html_body_is_generic() {
        let (gateway, http, _) = gateway();
        http.respond("/apps", 502, "<html>Bad Gateway</html>");

        let error = gateway.call("/apps", RequestOptions::get()).await.unwrap_err();
        assert_eq!(error.to_string(), GENERIC_FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_transport_failure_is_reported_once() {
        let (gateway, http, notifier) = gateway();
        http.fail("/apps", "connection refused");

        let error = assert_err!(gateway.call("/apps", RequestOptions::get()).await);

        assert!(matches!(error, RequestError::Transport { .. }));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_success_with_invalid_json_is_decode_error() {
        let (gateway, http, notifier) = gateway();
        http.respond("/apps", 200, "not json");

        let error = gateway.call("/apps", RequestOptions::get()).await.unwrap_err();

        assert!(matches!(error, RequestError::Decode { .. }));
        assert_eq!(notifier.messages().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_success_body_is_null() {
        let (gateway, http, _) = gateway();
        http.respond("/power/on", 200, "");

        let value = gateway
            .call("/power/on", RequestOptions::post_empty())
            .await
            .unwrap();
        assert_eq!(value, Value::Null);
    }

    #[test]
    fn test_caller_header_overrides_default() {
        let merged = merge_headers(
            &[("Content-Type", "application/json")],
            vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ],
        );

        assert_eq!(
            merged,
            vec![
                ("content-type".to_string(), "text/plain".to_string()),
                ("X-Trace".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_defaults_kept_without_custom_headers() {
        let merged = merge_headers(&[("Content-Type", "application/json")], Vec::new());
        assert_eq!(merged.len(), 1);
    }
}
