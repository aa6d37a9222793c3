//! Shared test helpers for `lcdscope-core` unit tests.

use crate::types::{Coin, Msg, PubKey, StdFee, StdSignature, StdTx};

pub const ADDR_A: &str = "cosmos1utdqpj4j6aa7nzry563ukngt57szrp95q9eptk";
pub const ADDR_B: &str = "cosmos18wenchx2je3shlynjf82zjrwuaq6lsqj8m502l";

/// A single-message bank send from `ADDR_A` to `ADDR_B`.
pub fn sample_send_tx() -> StdTx {
    StdTx {
        msg: vec![Msg {
            kind: "cosmos-sdk/MsgSend".to_owned(),
            value: serde_json::json!({
                "from_address": ADDR_A,
                "to_address": ADDR_B,
                "amount": [{ "denom": "stake", "amount": "1" }],
            }),
        }],
        fee: StdFee {
            amount: vec![Coin::new("stake", "10")],
            gas: "200000".to_owned(),
        },
        signatures: vec![StdSignature {
            pub_key: PubKey {
                kind: "tendermint/PubKeySecp256k1".to_owned(),
                value: "AAAA".to_owned(),
            },
            signature: "BBBB".to_owned(),
        }],
        memo: "test memo".to_owned(),
    }
}
