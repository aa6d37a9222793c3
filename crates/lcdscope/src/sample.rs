//! The built-in transaction the demo broadcasts.
//!
//! It is a well-formed `cosmos-sdk/MsgSend` carrying a signature that does
//! not match its sign bytes, so a node rejects it during verification. That
//! exercises the broadcast path end to end without moving funds.

use lcdscope_core::types::{Msg, PubKey, StdFee, StdSignature, StdTx};

const FROM_ADDRESS: &str = "cosmos1utdqpj4j6aa7nzry563ukngt57szrp95q9eptk";
const TO_ADDRESS: &str = "cosmos18wenchx2je3shlynjf82zjrwuaq6lsqj8m502l";

pub fn invalid_send_tx() -> StdTx {
    StdTx {
        msg: vec![Msg {
            kind: "cosmos-sdk/MsgSend".to_owned(),
            value: serde_json::json!({
                "from_address": FROM_ADDRESS,
                "to_address": TO_ADDRESS,
                "amount": [{ "denom": "stake", "amount": "1" }],
            }),
        }],
        fee: StdFee {
            amount: Vec::new(),
            gas: "200000".to_owned(),
        },
        signatures: vec![StdSignature {
            pub_key: PubKey {
                kind: "tendermint/PubKeySecp256k1".to_owned(),
                value: "Aoyj0D0RFGyh32dO04VRefAX8nOVwJRftSWD0PhcHtg0".to_owned(),
            },
            signature: "v0T2iaFQb8VoOLwPml/3+4aiA+M0LS+FbKa1XNjJLo8m4zmsUHqXrvptGfH7yyD5YkeQRPTtULnRxQ9vMlvAWQ=="
                .to_owned(),
        }],
        memo: "invalid sample".to_owned(),
    }
}
