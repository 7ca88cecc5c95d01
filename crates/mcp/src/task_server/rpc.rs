use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Default Snaptask RPC endpoint.
pub const DEFAULT_RPC_URL: &str = "https://ma64ers93d.adaptive.ai/api/rpc";

/// Environment variable that overrides the RPC endpoint.
pub const RPC_URL_ENV: &str = "SNAPTASK_RPC_URL";

#[derive(Debug, Error)]
pub enum RpcError {
    #[error("request to Snaptask backend failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Snaptask backend returned status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("Snaptask backend response missing result field")]
    MissingResult,
    #[error("failed to decode Snaptask result: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Single-purpose client for the Snaptask RPC endpoint.
///
/// The endpoint is injected at construction so tests can substitute a local
/// one. Each [`RpcClient::call`] issues exactly one request: no retries and
/// no local timeout (the host manages cancellation).
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: reqwest::Client,
    endpoint: String,
}

impl RpcClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one RPC call and unwrap the response envelope.
    ///
    /// `params` is normalized to an array before transmission: the backend
    /// envelope always carries a positional `params` list, so a bare object
    /// is wrapped as its single element.
    pub async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, RpcError> {
        let envelope = serde_json::json!({
            "method": method,
            "params": normalize_params(params),
        });

        tracing::debug!(method, "issuing Snaptask RPC call");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&envelope)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // The status failure wins; an unreadable body degrades to "".
            let body = response.text().await.unwrap_or_default();
            return Err(RpcError::Status { status, body });
        }

        let body: Value = response.json().await?;
        let result = extract_result(body)?;
        serde_json::from_value(result).map_err(RpcError::from)
    }
}

fn normalize_params(params: Value) -> Value {
    match params {
        Value::Array(_) => params,
        other => Value::Array(vec![other]),
    }
}

/// Presence of the `result` key, not its value, is the success discriminant.
/// Any `error` payload the backend sends alongside a missing `result` is
/// discarded.
fn extract_result(body: Value) -> Result<Value, RpcError> {
    match body {
        Value::Object(mut map) => map.remove("result").ok_or(RpcError::MissingResult),
        _ => Err(RpcError::MissingResult),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn normalize_wraps_bare_object_as_single_element() {
        let normalized = normalize_params(json!({"text": "buy milk"}));
        assert_eq!(normalized, json!([{"text": "buy milk"}]));
    }

    #[test]
    fn normalize_passes_array_through_unchanged() {
        let normalized = normalize_params(json!([1, 2]));
        assert_eq!(normalized, json!([1, 2]));
    }

    #[test]
    fn extract_returns_result_value_even_when_null() {
        assert_eq!(extract_result(json!({"result": null})).unwrap(), json!(null));
        assert_eq!(
            extract_result(json!({"result": [1]})).unwrap(),
            json!([1])
        );
    }

    #[test]
    fn extract_rejects_body_without_result_key() {
        let err = extract_result(json!({"error": {"code": -1}})).unwrap_err();
        assert!(err.to_string().contains("missing result field"));

        let err = extract_result(json!("not an object")).unwrap_err();
        assert!(err.to_string().contains("missing result field"));
    }

    #[test]
    fn status_error_message_carries_the_numeric_code() {
        let err = RpcError::Status {
            status: StatusCode::BAD_GATEWAY,
            body: "upstream unavailable".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("502"));
        assert!(message.contains("upstream unavailable"));
    }
}
