//! Sequential demo run against an LCD.
//!
//! Each step issues one call, awaits it, and prints the interesting part of
//! the response. The first failure aborts the run.

use std::io::Write;

use eyre::WrapErr;
use lcdscope_core::lcd::{projection::project_str, LcdApi};
use lcdscope_core::BroadcastMode;

use crate::cli::Cli;
use crate::sample;

/// Which steps to run and with what inputs.
#[derive(Debug, Clone)]
pub struct DemoPlan {
    pub account: String,
    pub tx_hash: Option<String>,
    pub genesis: bool,
    pub keys: bool,
    /// `None` skips the broadcast step.
    pub broadcast: Option<BroadcastMode>,
}

impl From<&Cli> for DemoPlan {
    fn from(args: &Cli) -> Self {
        Self {
            account: args.account.clone(),
            tx_hash: args.tx_hash.clone(),
            genesis: args.genesis,
            keys: args.keys,
            broadcast: (!args.skip_broadcast).then_some(args.broadcast_mode),
        }
    }
}

pub async fn run(lcd: &dyn LcdApi, plan: &DemoPlan, out: &mut impl Write) -> eyre::Result<()> {
    let info = lcd.node_info().await.wrap_err("fetch node info")?;
    let network = project_str(&info, &["node_info", "network"])?;
    writeln!(out, "Network: {network}")?;

    let syncing = lcd.sync_status().await.wrap_err("fetch sync status")?;
    writeln!(out, "Sync Status: {syncing}")?;

    if plan.genesis {
        let genesis = lcd.genesis().await.wrap_err("fetch genesis")?;
        writeln!(out, "Genesis: {genesis}")?;
    }

    if plan.keys {
        let keys = lcd.keys().await.wrap_err("list keys")?;
        writeln!(out, "Keys: {keys}")?;
    }

    if let Some(hash) = &plan.tx_hash {
        let tx = lcd.tx(hash).await.wrap_err("fetch transaction")?;
        writeln!(out, "Tx: {tx}")?;
    }

    let account = lcd
        .account(&plan.account)
        .await
        .wrap_err("fetch account")?;
    writeln!(out, "Account: {account}")?;

    if let Some(mode) = plan.broadcast {
        let tx = sample::invalid_send_tx().to_json()?;
        tracing::info!(%mode, "broadcasting sample transaction");
        let result = lcd
            .broadcast(&tx, mode)
            .await
            .wrap_err("broadcast sample transaction")?;
        writeln!(out, "{result}")?;
    }

    Ok(())
}
