//! Cosmos SDK LCD (REST gateway) abstraction layer.
//!
//! Defines the [`LcdApi`] trait and provides an HTTP implementation
//! ([`HttpLcdClient`]) plus a test mock (`mock::MockLcd`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod projection;

pub use http_adapter::HttpLcdClient;
pub use projection::project;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{CoreError, LcdError};
use crate::types::BroadcastMode;

/// Join `route` and a caller-supplied identifier into one request path.
///
/// The identifier must stay a single path segment: empty, `.`, `..`, or
/// anything containing `/` would resolve to a different route.
fn route_with_id(route: &str, id: &str) -> Result<String, CoreError> {
    let path = format!("{route}/{id}");
    if id.is_empty() || id == "." || id == ".." || id.contains('/') {
        return Err(LcdError::InvalidUrl {
            path,
            message: format!("`{id}` is not a valid single path segment"),
        }
        .into());
    }
    Ok(path)
}

/// The LCD routes the demo needs, built on two raw calls.
///
/// Implementors only provide [`get`](LcdApi::get) and
/// [`post`](LcdApi::post); every route wrapper issues exactly one of them
/// and optionally projects a single field out of the body.
#[async_trait]
pub trait LcdApi: Send + Sync {
    /// GET `<base>/<path>` with query parameters and decode the JSON body.
    /// Non-2xx responses are errors.
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, CoreError>;

    /// POST `body` as JSON to `<base>/<path>` and decode the JSON body.
    /// Non-2xx responses are errors.
    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError>;

    async fn node_info(&self) -> Result<Value, CoreError> {
        self.get("node_info", &[]).await
    }

    async fn genesis(&self) -> Result<Value, CoreError> {
        self.get("genesis", &[]).await
    }

    /// Whether the node is still catching up.
    async fn sync_status(&self) -> Result<bool, CoreError> {
        let raw = self.get("syncing", &[]).await?;
        projection::project_bool(&raw, &["syncing"])
    }

    async fn tx(&self, hash: &str) -> Result<Value, CoreError> {
        let path = route_with_id("txs", hash)?;
        self.get(&path, &[]).await
    }

    async fn keys(&self) -> Result<Value, CoreError> {
        self.get("keys", &[]).await
    }

    /// Account object at `result.value` of `auth/accounts/{address}`.
    async fn account(&self, address: &str) -> Result<Value, CoreError> {
        let path = route_with_id("auth/accounts", address)?;
        let raw = self.get(&path, &[]).await?;
        project(&raw, &["result", "value"]).cloned()
    }

    /// Submit `tx` unmodified as `{"tx": tx, "mode": mode}`.
    async fn broadcast(&self, tx: &Value, mode: BroadcastMode) -> Result<Value, CoreError> {
        let body = serde_json::json!({ "tx": tx, "mode": mode });
        self.post("txs", &body).await
    }
}
