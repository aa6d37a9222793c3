//! Shared types for the LCD client.
//!
//! Contains the broadcast mode accepted by `POST /txs` and a serde model of
//! the legacy amino-JSON `StdTx` (`StdFee`, `Coin`, `StdSignature`, `PubKey`,
//! `Msg`). The client itself treats transactions as opaque JSON; these types
//! exist so callers can build one without hand-writing `json!` literals.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ==============================================================================
// Broadcast Mode
// ==============================================================================

/// When the LCD should answer a broadcast request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Wait until the transaction is committed in a block.
    #[default]
    Block,
    /// Wait for the CheckTx result only.
    Sync,
    /// Return immediately.
    Async,
}

impl BroadcastMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Block => "block",
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl std::fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BroadcastMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "sync" => Ok(Self::Sync),
            "async" => Ok(Self::Async),
            other => Err(CoreError::InvalidConfig(format!(
                "unknown broadcast mode `{other}`; expected block, sync or async"
            ))),
        }
    }
}

// ==============================================================================
// Standard Transaction
// ==============================================================================

/// A token amount. Amounts are decimal strings on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

/// An amino-tagged message: `{"type": "...", "value": {...}}`.
///
/// The value is kept as raw JSON so any message kind passes through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Msg {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdSignature {
    pub pub_key: PubKey,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StdTx {
    pub msg: Vec<Msg>,
    pub fee: StdFee,
    pub signatures: Vec<StdSignature>,
    pub memo: String,
}

impl StdTx {
    /// Serialize into the JSON value handed to `LcdApi::broadcast`.
    pub fn to_json(&self) -> Result<serde_json::Value, CoreError> {
        serde_json::to_value(self)
            .map_err(|e| CoreError::InvalidConfig(format!("cannot serialize transaction: {e}")))
    }
}
