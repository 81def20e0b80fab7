/// Terminal client for the network backend
///
/// Usage:
/// ```bash
/// cargo run --bin network-client -- [feed | following | profile <username>]
/// ```
///
/// Environment:
/// - `NETWORK_BASE_URL`: backend address (default `http://127.0.0.1:8000`)
/// - `NETWORK_VIEWER`: authenticated username; unset browses anonymously
/// - `NETWORK_SESSION_COOKIE` / `NETWORK_CSRF_TOKEN`: forwarded session credentials
/// - `LOG_FORMAT`: `text` or `json`
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use network_api::HttpNetworkApi;
use network_client::config::Config;
use network_client::terminal::{self, PageKind, TerminalAlerts};
use network_client::{telemetry, PageContext};
use tokio::io::BufReader;
use tracing::info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;
    telemetry::init(config.log.format);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let kind = PageKind::from_args(&args).map_err(|e| {
        anyhow!(
            "{}\nusage: network-client [feed | following | profile <username>]",
            e
        )
    })?;

    let mut builder = HttpNetworkApi::builder(&config.api.base_url);
    if let Some(cookie) = &config.api.session_cookie {
        builder = builder.session_cookie(cookie.clone());
    }
    if let Some(token) = &config.api.csrf_token {
        builder = builder.csrf_token(token.clone());
    }
    let api = builder.build().context("Failed to create API client")?;

    let viewer = config.viewer();
    info!(
        base_url = %config.api.base_url,
        viewer = viewer.username().unwrap_or("<anonymous>"),
        page = ?kind,
        "Starting network-client"
    );

    let alerts = Arc::new(TerminalAlerts::new());
    let ctx = PageContext::new(Arc::new(api), viewer, alerts.clone());
    let mut page = terminal::open(&kind, &ctx).await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    terminal::run(page.as_mut(), &alerts, stdin, &mut stdout)
        .await
        .context("Terminal I/O failed")?;

    info!("network-client exiting");
    Ok(())
}
