use clap::Parser;
use lcdscope_core::BroadcastMode;

/// lcdscope — query a Cosmos SDK LCD and broadcast a sample transaction.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// LCD (REST gateway) base URL.
    #[arg(long, default_value = "http://localhost:1317", env = "LCDSCOPE_LCD_URL")]
    pub lcd_url: String,

    /// Account address to look up.
    #[arg(long, default_value = "cosmos1xgl000qa994750r5u4528n9pjzd3rcl7h6xkfc")]
    pub account: String,

    /// Transaction hash to look up (skipped if omitted).
    #[arg(long)]
    pub tx_hash: Option<String>,

    /// Also fetch the genesis document.
    #[arg(long)]
    pub genesis: bool,

    /// Also list keys (many nodes do not enable this route).
    #[arg(long)]
    pub keys: bool,

    /// Do not broadcast the sample transaction.
    #[arg(long)]
    pub skip_broadcast: bool,

    /// Broadcast mode: block, sync or async.
    #[arg(long, default_value = "block")]
    pub broadcast_mode: BroadcastMode,

    /// Per-request timeout in seconds. Without it, requests wait indefinitely.
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}
