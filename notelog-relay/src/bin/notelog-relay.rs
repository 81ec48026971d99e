/// Notelog CORS Relay Binary
///
/// Starts the HTTP relay in front of the configured spreadsheet upstream.

use clap::Parser;
use notelog_relay::{config::UPSTREAM_URL_ENV, AppState, RelayConfig};
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "notelog-relay")]
#[command(about = "CORS relay for the Notelog spreadsheet upstream", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Upstream base URL (overrides the GOOGLE_SHEET_DB_URL environment variable)
    #[arg(long, value_name = "URL")]
    upstream_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, default_value = "30")]
    upstream_timeout: u64,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Default to info level, override with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args = Args::parse();

    let mut config = RelayConfig::from_env()
        .with_upstream_timeout(Duration::from_secs(args.upstream_timeout));
    if let Some(url) = args.upstream_url {
        config = config.with_upstream_url(url);
    }

    match &config.upstream_url {
        Some(url) => info!("Upstream configured: {}", url),
        None => info!(
            "Upstream NOT configured ({} unset) - non-preflight calls will answer 500",
            UPSTREAM_URL_ENV
        ),
    }

    let state = AppState::new(&config)?;
    let app = notelog_relay::router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Relay listening on http://{}", addr);
    info!("  OPTIONS /api/proxy - CORS preflight");
    info!("  GET     /api/proxy - Fetch all logs");
    info!("  POST    /api/proxy - Create / update / delete logs");
    info!("  GET     /health    - Health check");

    axum::serve(listener, app).await?;

    Ok(())
}
