use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::error::{CoreError, LcdError};

use super::LcdApi;

const MOCK_BASE: &str = "http://mock.lcd";

/// A mock LCD backend for testing. Returns canned bodies per route from
/// maps populated via the builder pattern and records every POST body.
/// Unknown routes answer like an LCD with the route disabled (HTTP 404).
pub struct MockLcd {
    gets: HashMap<String, Value>,
    posts: HashMap<String, Value>,
    posted: Mutex<Vec<(String, Value)>>,
}

impl MockLcd {
    pub fn builder() -> MockLcdBuilder {
        MockLcdBuilder {
            gets: HashMap::new(),
            posts: HashMap::new(),
        }
    }

    /// Every `(path, body)` pair posted so far, in call order.
    pub async fn posted(&self) -> Vec<(String, Value)> {
        self.posted.lock().await.clone()
    }
}

pub struct MockLcdBuilder {
    gets: HashMap<String, Value>,
    posts: HashMap<String, Value>,
}

impl MockLcdBuilder {
    pub fn with_get(mut self, path: &str, body: Value) -> Self {
        self.gets.insert(path.to_owned(), body);
        self
    }

    pub fn with_post(mut self, path: &str, body: Value) -> Self {
        self.posts.insert(path.to_owned(), body);
        self
    }

    pub fn build(self) -> MockLcd {
        MockLcd {
            gets: self.gets,
            posts: self.posts,
            posted: Mutex::new(Vec::new()),
        }
    }
}

fn not_found(path: &str) -> CoreError {
    LcdError::Status {
        status: 404,
        url: format!("{MOCK_BASE}/{path}"),
        message: None,
    }
    .into()
}

#[async_trait]
impl LcdApi for MockLcd {
    async fn get(&self, path: &str, _params: &[(&str, &str)]) -> Result<Value, CoreError> {
        self.gets.get(path).cloned().ok_or_else(|| not_found(path))
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, CoreError> {
        self.posted
            .lock()
            .await
            .push((path.to_owned(), body.clone()));
        self.posts.get(path).cloned().ok_or_else(|| not_found(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unstubbed_post_is_recorded_and_fails() {
        let lcd = MockLcd::builder().build();
        let body = serde_json::json!({ "k": "v" });
        let err = lcd.post("txs", &body).await.expect_err("must fail");
        assert_eq!(err.failed_request(), Some((404, "http://mock.lcd/txs")));
        assert_eq!(lcd.posted().await, vec![("txs".to_owned(), body)]);
    }
}
