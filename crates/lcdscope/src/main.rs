mod cli;
mod demo;
mod sample;

use std::time::Duration;

use clap::Parser;
use eyre::WrapErr;

use lcdscope_core::lcd::HttpLcdClient;
use lcdscope_core::{CoreError, LcdError};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Program output goes to stdout; diagnostics stay on stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let timeout = args.timeout_secs.map(Duration::from_secs);
    let lcd = HttpLcdClient::new(&args.lcd_url, timeout).wrap_err("configure LCD client")?;
    tracing::info!(lcd_url = %lcd.base_url(), "querying LCD");

    let plan = demo::DemoPlan::from(&args);
    let mut stdout = std::io::stdout();
    if let Err(report) = demo::run(&lcd, &plan, &mut stdout).await {
        println!("{}", format_failure(&report));
        std::process::exit(1);
    }

    Ok(())
}

/// Render a failed run as `ERROR <status>: <url>` when the LCD answered
/// with an HTTP error, plus a hint when the cause is recognizable.
fn format_failure(report: &eyre::Report) -> String {
    let Some(err) = report.downcast_ref::<CoreError>() else {
        return format!("ERROR: {report:#}");
    };

    let mut lines = vec![match err.failed_request() {
        Some((status, url)) => format!("ERROR {status}: {url}"),
        None => format!("ERROR: {report:#}"),
    }];
    if let Some(hint) = failure_hint(err) {
        lines.push(format!("hint: {hint}"));
    }
    lines.join("\n")
}

fn failure_hint(err: &CoreError) -> Option<&'static str> {
    match err {
        CoreError::Lcd(LcdError::Transport { source, .. }) if source.is_timeout() => {
            Some("request timed out; the node may be busy, or raise --timeout-secs")
        }
        CoreError::Lcd(LcdError::Transport { .. }) => Some(
            "could not reach the LCD; verify --lcd-url and that the node's REST server is enabled (default port 1317)",
        ),
        CoreError::Lcd(LcdError::Status { status: 404 | 501, .. }) => {
            Some("route is not served by this node; some routes (e.g. keys) are disabled by default")
        }
        CoreError::Lcd(LcdError::Status { status, .. }) if *status >= 500 => {
            Some("the node failed to handle the request; check the node logs")
        }
        CoreError::Lcd(LcdError::InvalidResponse { .. }) => Some(
            "endpoint did not answer with JSON; verify --lcd-url points at the LCD, not the Tendermint RPC port",
        ),
        CoreError::MissingField { .. } | CoreError::UnexpectedFieldType { .. } => {
            Some("response shape differs from the legacy REST API; the node may run an incompatible SDK version")
        }
        _ => None,
    }
}
