use crate::error::ClientError;
use reqwest::{Client as HttpClient, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

pub(crate) fn build_http_client(timeout: Duration) -> Result<HttpClient, ClientError> {
    HttpClient::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::network(format!("failed to build HTTP client: {e}")))
}

/// Read a response body and decode it as JSON.
///
/// Non-success statuses are transport failures; a body that is not the
/// expected JSON shape is a malformed response.
pub(crate) async fn decode_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
) -> Result<T, ClientError> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ClientError::network(format!("failed to read response body: {e}")))?;

    if !status.is_success() {
        let detail = error_detail(&body);
        tracing::debug!(%endpoint, %status, "backend returned error status");
        return Err(ClientError::network(format!("HTTP {status}: {detail}")));
    }

    serde_json::from_str(&body).map_err(|e| {
        tracing::debug!(%endpoint, "failed to decode response: {e}");
        ClientError::malformed(format!("unexpected response from {endpoint}: {e}"))
    })
}

/// Pull a readable message out of an error body.
///
/// FastAPI style `{"detail": ...}` bodies yield the detail; anything else is
/// returned trimmed.
pub(crate) fn error_detail(body: &str) -> String {
    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(body) {
        match map.get("detail") {
            Some(Value::String(detail)) => return detail.clone(),
            Some(other) => return other.to_string(),
            None => {}
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}
