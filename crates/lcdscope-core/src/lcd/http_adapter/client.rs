use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Url};
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::{CoreError, LcdError};

use super::super::LcdApi;
use super::connection::{endpoint_url, parse_base_url};
use super::protocol::{decode_body, parse_error_message};

/// Cosmos SDK LCD client over HTTP(S).
///
/// Every call is a single request: no retries, no batching. Requests carry
/// a process-local sequence number in their log lines only.
pub struct HttpLcdClient {
    client: reqwest::Client,
    base_url: Url,
    next_id: AtomicU64,
}

impl HttpLcdClient {
    /// Create a new client for an LCD base URL such as
    /// `http://localhost:1317`.
    ///
    /// `timeout` bounds each whole request; `None` waits for the transport
    /// indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, CoreError> {
        let base_url = parse_base_url(base_url)?;

        let mut builder = reqwest::Client::builder().tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(LcdError::Client)?;

        Ok(Self {
            client,
            base_url,
            next_id: AtomicU64::new(1),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn reserve_request_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    async fn execute(
        &self,
        id: u64,
        method: &'static str,
        url: Url,
        builder: reqwest::RequestBuilder,
    ) -> Result<Value, CoreError> {
        let url = url.to_string();
        let transport = |source: reqwest::Error| LcdError::Transport {
            url: url.clone(),
            source,
        };

        let response = builder.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        debug!(lcd.id = id, lcd.method = method, %status, body_len = body.len(), "lcd response");
        trace!(lcd.id = id, lcd.method = method, body = %body, "lcd response body");

        if !status.is_success() {
            return Err(LcdError::Status {
                status: status.as_u16(),
                url,
                message: parse_error_message(&body),
            }
            .into());
        }

        Ok(decode_body(&url, &body)?)
    }
}

#[async_trait]
impl LcdApi for HttpLcdClient {
    async fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, CoreError> {
        let id = self.reserve_request_id();
        let url = endpoint_url(&self.base_url, path)?;
        debug!(
            lcd.id = id,
            lcd.method = "GET",
            lcd.path = path,
            lcd.params = params.len(),
            "lcd request"
        );

        let builder = self
            .client
            .get(url.clone())
            .header(header::ACCEPT, "application/json")
            .query(params);
        self.execute(id, "GET", url, builder).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        let id = self.reserve_request_id();
        let url = endpoint_url(&self.base_url, path)?;
        debug!(lcd.id = id, lcd.method = "POST", lcd.path = path, "lcd request");
        trace!(lcd.id = id, lcd.method = "POST", body = %body, "lcd request body");

        let builder = self
            .client
            .post(url.clone())
            .header(header::ACCEPT, "application/json")
            .json(body);
        self.execute(id, "POST", url, builder).await
    }
}
