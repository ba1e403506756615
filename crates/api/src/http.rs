//! HTTP implementation of the Entity API adapter
//!
//! Reads come from a proxy endpoint serving the catalog file as a JSON
//! array; writes go to a dispatch endpoint that triggers a CI workflow.
//! The write response body is only trusted for success/failure, never for
//! record contents.

use crate::EntityApi;
use async_trait::async_trait;
use chrono::Utc;
use console_core::{ConsoleError, ConsoleResult, DispatchOperation, ManagedRecord, RecordId};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// Wire Helpers
// ============================================================================

/// Decode the read endpoint's response body into records
///
/// The contract with the read endpoint is a bare JSON array of records;
/// anything else (an object, a string, an error envelope) is a contract
/// violation and produces no partial results.
pub fn records_from_value<T: DeserializeOwned>(value: Value) -> ConsoleResult<Vec<T>> {
    if !value.is_array() {
        return Err(ConsoleError::contract(
            "read endpoint did not return a JSON array",
        ));
    }
    Ok(serde_json::from_value(value)?)
}

/// Build the body of a dispatch request: `{id, <draft fields>, operation}`
///
/// `draft` is `None` for deletes, which carry only the id and operation.
pub fn dispatch_payload<D: Serialize>(
    id: &RecordId,
    draft: Option<&D>,
    operation: DispatchOperation,
) -> ConsoleResult<Value> {
    let mut body = match draft {
        Some(draft) => match serde_json::to_value(draft)? {
            Value::Object(map) => map,
            other => {
                return Err(ConsoleError::internal(format!(
                    "draft serialized to {other:?}, expected a JSON object"
                )));
            }
        },
        None => serde_json::Map::new(),
    };

    body.insert("id".to_string(), serde_json::to_value(id)?);
    body.insert(
        "operation".to_string(),
        Value::String(operation.as_str().to_string()),
    );

    Ok(Value::Object(body))
}

// ============================================================================
// HttpEntityApi
// ============================================================================

/// Adapter over the proxy-read and CI-dispatch endpoints
pub struct HttpEntityApi {
    client: reqwest::Client,
    read_url: String,
    dispatch_url: String,
    bearer_token: Option<String>,
}

impl HttpEntityApi {
    /// Create an adapter for the given endpoint pair
    pub fn new(read_url: impl Into<String>, dispatch_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            read_url: read_url.into(),
            dispatch_url: dispatch_url.into(),
            bearer_token: None,
        }
    }

    /// Attach a bearer token to dispatch requests
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.bearer_token = Some(token.into());
        self
    }

    /// Use a preconfigured HTTP client
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// The read endpoint this adapter fetches from
    pub fn read_url(&self) -> &str {
        &self.read_url
    }

    /// The dispatch endpoint this adapter writes through
    pub fn dispatch_url(&self) -> &str {
        &self.dispatch_url
    }

    /// POST a dispatch payload and map the outcome
    async fn post_dispatch(&self, payload: &Value) -> ConsoleResult<()> {
        let mut request = self.client.post(&self.dispatch_url);
        if let Some(token) = &self.bearer_token {
            request = request.header("Authorization", format!("Bearer {token}"));
        }

        let response = request
            .json(payload)
            .send()
            .await
            .map_err(|e| ConsoleError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ConsoleError::http(status.as_u16(), detail));
        }

        Ok(())
    }
}

#[async_trait]
impl<T: ManagedRecord> EntityApi<T> for HttpEntityApi {
    async fn fetch_all(&self) -> ConsoleResult<Vec<T>> {
        // Cache-busting query parameter; the backing file sits behind
        // aggressive CDN caching on some hosts.
        let ts = Utc::now().timestamp_millis();

        tracing::debug!(url = %self.read_url, "fetching record list");

        let response = self
            .client
            .get(&self.read_url)
            .query(&[("ts", ts.to_string())])
            .header("Cache-Control", "no-store")
            .send()
            .await
            .map_err(|e| ConsoleError::transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ConsoleError::http(status.as_u16(), detail));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| ConsoleError::transport(e.to_string()))?;

        records_from_value(value)
    }

    async fn create(&self, id: RecordId, draft: &T::Draft) -> ConsoleResult<()> {
        let payload = dispatch_payload(&id, Some(draft), DispatchOperation::Create)?;
        tracing::debug!(%id, "dispatching create");
        self.post_dispatch(&payload).await
    }

    async fn update(&self, id: RecordId, draft: &T::Draft) -> ConsoleResult<()> {
        let payload = dispatch_payload(&id, Some(draft), DispatchOperation::Edit)?;
        tracing::debug!(%id, "dispatching edit");
        self.post_dispatch(&payload).await
    }

    async fn delete(&self, id: RecordId) -> ConsoleResult<()> {
        let payload = dispatch_payload::<Value>(&id, None, DispatchOperation::Delete)?;
        tracing::debug!(%id, "dispatching delete");
        self.post_dispatch(&payload).await
    }
}

// ============================================================================
// Tests
// ============================================================================
