//! Icon Server daemon.
//!
//! Single-endpoint HTTP proxy: takes a search term, signs an outbound
//! request to the Noun Project icon API with one-legged OAuth 1.0a, and
//! relays the resulting icon preview URL back to the caller.

use tracing::{error, info};

use iconserver_daemon::config::ServerConfig;
use iconserver_daemon::server;

/// Initializes structured logging with tracing.
///
/// `ICON_SERVER_LOG_FORMAT=json` selects machine-readable JSON output;
/// anything else gets the human-readable formatter. Log level is
/// controlled via the `RUST_LOG` environment variable.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let format = std::env::var("ICON_SERVER_LOG_FORMAT")
        .unwrap_or_else(|_| "pretty".to_string())
        .to_lowercase();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("iconserver_daemon=info,iconserver_client=info"));

    match format.as_str() {
        "json" => {
            fmt().json().with_env_filter(filter).with_target(true).init();
        }
        _ => {
            fmt().with_env_filter(filter).with_target(false).init();
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    info!("Starting icon server");

    // Missing credentials are fatal before the listener binds.
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return Err(e.into());
        }
    };

    server::run(config).await?;

    Ok(())
}
